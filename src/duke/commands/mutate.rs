use crate::commands::CmdResult;
use crate::error::{DukeError, Result};
use crate::list::TaskList;
use std::fmt;

/// Commands that act on tasks already in the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListAction {
    Done,
    Undo,
    Delete,
    Find,
}

impl ListAction {
    pub fn word(&self) -> &'static str {
        match self {
            ListAction::Done => "done",
            ListAction::Undo => "undo",
            ListAction::Delete => "delete",
            ListAction::Find => "find",
        }
    }

    fn usage(&self) -> &'static str {
        match self {
            ListAction::Done => {
                "Please choose a task to mark as done, with \"done <task number>\""
            }
            ListAction::Undo => "Please choose a task to undo, with \"undo <task number>\"",
            ListAction::Delete => {
                "Please choose a task to delete, with \"delete <task number>\""
            }
            ListAction::Find => {
                "Please input a word to find tasks with, using \"find <word>\""
            }
        }
    }
}

impl fmt::Display for ListAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.word())
    }
}

pub fn run(list: &mut TaskList, action: ListAction, argument: &str) -> Result<CmdResult> {
    let argument = argument.trim();
    if argument.is_empty() {
        return Err(DukeError::command(action.usage()));
    }

    match action {
        ListAction::Find => Ok(list.find_word(argument)),
        ListAction::Done => Ok(list.mark_done(to_offset(action, argument)?)),
        ListAction::Undo => Ok(list.revert_done(to_offset(action, argument)?)),
        ListAction::Delete => Ok(list.delete_item(to_offset(action, argument)?)),
    }
}

/// Turns the 1-based number the user typed into a 0-based offset.
///
/// The offset may land outside the list (or below zero); the list itself
/// reports that.
fn to_offset(action: ListAction, argument: &str) -> Result<isize> {
    let number: isize = argument.parse().map_err(|_| {
        DukeError::command(format!(
            "Please provide a task number, e.g. \"{} 1\"",
            action
        ))
    })?;
    Ok(number.saturating_sub(1))
}
