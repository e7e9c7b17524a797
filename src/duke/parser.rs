//! # Command Parser
//!
//! Turns one line of user input into one operation on the session's
//! [`TaskList`]. Classification happens in two stages:
//!
//! 1. [`split_line`] cuts the line at its first whitespace into a command word
//!    and a body, and looks in the body for an optional trailing clause
//!    `/xx <argument>`. Any two characters after the slash are accepted, so
//!    `/by`, `/at` and `/on` all work for every task kind.
//! 2. The command word is looked up in a fixed table that maps it to a handler
//!    family (task creation or list mutation). Lines without whitespace are
//!    instead compared whole against the zero-argument commands.
//!
//! ```text
//! deadline submit report /by 02/12/2024
//! └──┬───┘ └─────┬─────┘ └┬┘ └───┬────┘
//!   word      body      prefix argument
//! ```
//!
//! The parser owns the list and the store for the session. It only does I/O
//! through [`TaskStore::persist`], on `bye` or when the caller asks for it.

use crate::commands::help::{not_understood, EMPTY_INPUT, FAREWELL, GREETING, USAGE};
use crate::commands::mutate::ListAction;
use crate::commands::{create, mutate, CmdMessage, CmdResult};
use crate::error::{DukeError, Result};
use crate::list::TaskList;
use crate::model::TaskKind;
use crate::store::TaskStore;
use tracing::{debug, warn};

/// The `/xx argument` tail of a command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Clause<'a> {
    /// The two characters after the slash; never checked against the command.
    pub prefix: &'a str,
    pub argument: &'a str,
}

/// A line that has at least one whitespace character in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandLine<'a> {
    pub word: &'a str,
    /// Text after the command word, up to the clause if there is one.
    pub body: &'a str,
    pub clause: Option<Clause<'a>>,
}

/// Which handler a command word belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Create(TaskKind),
    Mutate(ListAction),
}

const COMMAND_TABLE: &[(&str, Command)] = &[
    ("todo", Command::Create(TaskKind::Todo)),
    ("deadline", Command::Create(TaskKind::Deadline)),
    ("event", Command::Create(TaskKind::Event)),
    ("done", Command::Mutate(ListAction::Done)),
    ("undo", Command::Mutate(ListAction::Undo)),
    ("delete", Command::Mutate(ListAction::Delete)),
    ("find", Command::Mutate(ListAction::Find)),
];

pub fn lookup(word: &str) -> Option<Command> {
    COMMAND_TABLE
        .iter()
        .find(|(name, _)| *name == word)
        .map(|(_, command)| *command)
}

/// Whitespace for splitting purposes: ASCII space, tab, line feed, vertical
/// tab, form feed and carriage return. Unicode spaces such as U+3000 are part
/// of the word they sit in.
fn is_separator(c: char) -> bool {
    c.is_ascii_whitespace() || c == '\x0B'
}

/// Splits a line into command word, body and optional clause.
///
/// Returns `None` when the line has no separator at all (a bare word, or the
/// empty string). The clause starts at the first whitespace in the body that is
/// followed by `/` and at least two more characters; one whitespace character
/// after the prefix is skipped and the rest, possibly empty, is the argument.
pub fn split_line(line: &str) -> Option<CommandLine<'_>> {
    let (split_at, separator) = line.char_indices().find(|(_, c)| is_separator(*c))?;
    let word = &line[..split_at];
    let rest = &line[split_at + separator.len_utf8()..];

    for (i, c) in rest.char_indices() {
        if !is_separator(c) {
            continue;
        }
        let Some(after_slash) = rest[i + c.len_utf8()..].strip_prefix('/') else {
            continue;
        };
        let mut prefix_chars = after_slash.char_indices();
        let (Some(_), Some((second, last))) = (prefix_chars.next(), prefix_chars.next()) else {
            continue;
        };
        let prefix_end = second + last.len_utf8();

        let prefix = &after_slash[..prefix_end];
        let tail = &after_slash[prefix_end..];
        let argument = match tail.chars().next() {
            Some(first) if is_separator(first) => &tail[first.len_utf8()..],
            _ => tail,
        };
        return Some(CommandLine {
            word,
            body: &rest[..i],
            clause: Some(Clause { prefix, argument }),
        });
    }

    Some(CommandLine {
        word,
        body: rest,
        clause: None,
    })
}

/// One interactive session: the list being edited, where it is saved, and
/// whether the user has asked to leave.
pub struct Parser<S: TaskStore> {
    list: TaskList,
    store: S,
    is_exit: bool,
}

impl<S: TaskStore> Parser<S> {
    pub fn new(list: TaskList, store: S) -> Self {
        Self {
            list,
            store,
            is_exit: false,
        }
    }

    /// Starts a session with whatever `store` currently holds.
    pub fn open(store: S) -> Result<Self> {
        let list = store.load()?.list;
        Ok(Self::new(list, store))
    }

    /// True once `bye` has been processed. Never goes back to false.
    pub fn is_exit(&self) -> bool {
        self.is_exit
    }

    pub fn list(&self) -> &TaskList {
        &self.list
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Runs one line of input against the list.
    ///
    /// # Errors
    ///
    /// Returns [`DukeError::Command`] for anything the user typed wrong. The
    /// session stays usable afterwards.
    pub fn process_command(&mut self, line: &str) -> Result<CmdResult> {
        match split_line(line) {
            Some(command_line) => self.dispatch(line, command_line),
            None => self.bare(line),
        }
    }

    /// Saves the list through the store, folding any failure into the message.
    pub fn persist(&mut self) -> CmdMessage {
        match self.store.persist(&self.list) {
            Ok(report) => CmdMessage::info(report),
            Err(e) => {
                warn!(error = %e, "could not save tasks");
                CmdMessage::error(format!("Could not save tasks: {}", e))
            }
        }
    }

    fn dispatch(&mut self, line: &str, command_line: CommandLine<'_>) -> Result<CmdResult> {
        let Some(command) = lookup(command_line.word) else {
            return Err(DukeError::command(not_understood(line)));
        };
        debug!(
            ?command,
            body = command_line.body,
            clause = ?command_line.clause,
            "classified line"
        );

        match command {
            Command::Create(kind) => create::run(
                &mut self.list,
                kind,
                command_line.body,
                command_line.clause.map(|c| c.argument),
            ),
            Command::Mutate(action) => mutate::run(&mut self.list, action, command_line.body),
        }
    }

    fn bare(&mut self, line: &str) -> Result<CmdResult> {
        debug!(line, "bare command");
        match line {
            "" => Ok(CmdResult::message(CmdMessage::warning(EMPTY_INPUT))),
            "list" => Ok(CmdResult::message(CmdMessage::info(self.list.to_string()))),
            "hello" => Ok(CmdResult::message(CmdMessage::info(GREETING))),
            "help" => Ok(CmdResult::message(CmdMessage::info(USAGE))),
            "bye" => {
                self.is_exit = true;
                let report = self.persist();
                Ok(CmdResult::message(report).with_message(CmdMessage::success(FAREWELL)))
            }
            _ => Err(DukeError::command(not_understood(line))),
        }
    }
}
