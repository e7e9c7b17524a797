//! The interactive loop: read a line, hand it to the parser, print the reply.

mod print;

use crate::args::Cli;
use duke::config::{resolve_data_dir, DukeConfig};
use duke::error::Result;
use duke::list::TaskList;
use duke::parser::Parser;
use duke::store::fs::FileStore;
use duke::store::TaskStore;
use print::Printer;
use std::io::{self, BufRead};
use tracing::{debug, warn};

pub fn run(cli: Cli) -> Result<()> {
    if cli.plain {
        colored::control::set_override(false);
    }

    let data_dir = resolve_data_dir(cli.data_dir)?;
    let config = DukeConfig::load(&data_dir).unwrap_or_else(|e| {
        warn!(error = %e, "ignoring unreadable config");
        DukeConfig::default()
    });
    let printer = Printer::new(config.line_width);

    let store = FileStore::new(&data_dir, &config.data_file);
    debug!(path = %store.path().display(), "using task file");
    let list = load_tasks(&store, &printer);
    let mut parser = Parser::new(list, store);

    printer.welcome();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    while !parser.is_exit() {
        let line = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(e)) => {
                printer.message(&parser.persist());
                return Err(e.into());
            }
            None => {
                debug!("input ended without bye");
                printer.message(&parser.persist());
                break;
            }
        };

        printer.line();
        match parser.process_command(line.trim_end_matches('\r')) {
            Ok(result) => printer.messages(&result.messages),
            Err(e) => printer.error(&e),
        }
        printer.line();
    }

    Ok(())
}

/// Loads the task file, warning about anything that could not be read. When
/// the load lost tasks, the file is moved aside first so saving the session
/// cannot destroy them.
fn load_tasks(store: &FileStore, printer: &Printer) -> TaskList {
    let list = match store.load() {
        Ok(report) if !report.is_lossy() => return report.list,
        Ok(report) => {
            for skipped in &report.skipped {
                printer.warning(&skipped.to_string());
            }
            report.list
        }
        Err(e) => {
            printer.warning(&format!(
                "Could not read {} ({}); starting with an empty list.",
                store.location(),
                e
            ));
            TaskList::new()
        }
    };

    match store.back_up() {
        Ok(backup) => printer.warning(&format!(
            "The original file was moved to {}.",
            backup.display()
        )),
        Err(e) => {
            warn!(error = %e, "could not back up task file");
            printer.warning(&format!(
                "Could not back up {} ({}); saving will overwrite it.",
                store.location(),
                e
            ));
        }
    }
    list
}
