use clap::Parser;

mod args;
mod cli;

use args::Cli;

/// Set to any value to get debug logs without passing `--verbose`.
const DEBUG_ENV: &str = "DUKE_DEBUG";

fn main() {
    let cli = Cli::parse();

    if cli.verbose || std::env::var_os(DEBUG_ENV).is_some() {
        tracing_subscriber::fmt()
            .with_env_filter("duke=debug")
            .with_writer(std::io::stderr)
            .init();
    }

    if let Err(e) = cli::run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
