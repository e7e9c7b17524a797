use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "duke", version)]
#[command(about = "Keep track of todos, deadlines and events, one command per line", long_about = None)]
pub struct Cli {
    /// Directory holding tasks.json and config.json (defaults to $DUKE_HOME, then the platform data dir)
    #[arg(short, long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output (debug logs on stderr)
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub plain: bool,
}
