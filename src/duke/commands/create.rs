use crate::commands::CmdResult;
use crate::date::parse_date;
use crate::error::{DukeError, Result};
use crate::list::TaskList;
use crate::model::{Task, TaskKind};

pub const DATE_FORMAT_HELP: &str = "Please write your date in the format \"dd/MM/yyyy\"";

fn usage(kind: TaskKind) -> &'static str {
    match kind {
        TaskKind::Todo => "Please write a task to be done, with \"todo <task>\"",
        TaskKind::Deadline => "Please write a deadline, with \"deadline <task> /by <date>\"",
        TaskKind::Event => "Please write an event, with \"event <task> /at <date>\"",
    }
}

/// Builds a task of `kind` and adds it to the list.
///
/// `date` is the text after a `/xx` clause, if the line had one. It is ignored
/// for todos; for deadlines and events an absent date gives a dateless task.
pub fn run(
    list: &mut TaskList,
    kind: TaskKind,
    description: &str,
    date: Option<&str>,
) -> Result<CmdResult> {
    let description = description.trim();
    if description.is_empty() {
        return Err(DukeError::command(usage(kind)));
    }

    let task = match kind {
        TaskKind::Todo => Task::todo(description),
        TaskKind::Deadline => Task::deadline(description, convert_date(date)?),
        TaskKind::Event => Task::event(description, convert_date(date)?),
    };

    Ok(list.add_item(task))
}

fn convert_date(date: Option<&str>) -> Result<Option<chrono::NaiveDate>> {
    match date {
        None => Ok(None),
        Some(text) => parse_date(text)
            .map(Some)
            .ok_or_else(|| DukeError::command(DATE_FORMAT_HELP)),
    }
}
