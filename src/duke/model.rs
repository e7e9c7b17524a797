use crate::error::{DukeError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How dates are shown next to a task, e.g. `Dec 02 2024`.
pub const DISPLAY_DATE_FORMAT: &str = "%b %d %Y";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskKind {
    Todo,
    Deadline,
    Event,
}

impl TaskKind {
    pub fn marker(&self) -> &'static str {
        match self {
            TaskKind::Todo => "[T]",
            TaskKind::Deadline => "[D]",
            TaskKind::Event => "[E]",
        }
    }

    /// The word introducing the date clause when rendered.
    pub fn date_word(&self) -> &'static str {
        match self {
            TaskKind::Todo => "",
            TaskKind::Deadline => "by",
            TaskKind::Event => "at",
        }
    }

    pub fn takes_date(&self) -> bool {
        !matches!(self, TaskKind::Todo)
    }
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskKind::Todo => write!(f, "todo"),
            TaskKind::Deadline => write!(f, "deadline"),
            TaskKind::Event => write!(f, "event"),
        }
    }
}

/// A single tracked item.
///
/// The shape (kind, description, date) is fixed at construction; only the
/// completion flag changes afterwards, through [`Task::mark_done`] and
/// [`Task::revert_done`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    kind: TaskKind,
    description: String,
    #[serde(default)]
    done: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    when: Option<NaiveDate>,
}

impl Task {
    pub fn todo(description: impl Into<String>) -> Self {
        Self::new(TaskKind::Todo, description.into(), None)
    }

    pub fn deadline(description: impl Into<String>, by: Option<NaiveDate>) -> Self {
        Self::new(TaskKind::Deadline, description.into(), by)
    }

    pub fn event(description: impl Into<String>, at: Option<NaiveDate>) -> Self {
        Self::new(TaskKind::Event, description.into(), at)
    }

    fn new(kind: TaskKind, description: String, when: Option<NaiveDate>) -> Self {
        Self {
            kind,
            description,
            done: false,
            when,
        }
    }

    pub fn kind(&self) -> TaskKind {
        self.kind
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn when(&self) -> Option<NaiveDate> {
        self.when
    }

    /// Sets the task as done and returns a confirmation line.
    ///
    /// No check is made here; the list decides whether the flip is allowed.
    pub fn mark_done(&mut self) -> String {
        self.done = true;
        format!("Nice! I've marked this task as done:\n  {}", self)
    }

    pub fn revert_done(&mut self) -> String {
        self.done = false;
        format!("OK, I've marked this task as not done yet:\n  {}", self)
    }

    /// Checks the invariants the parser enforces on input, for tasks that
    /// arrive by another route (e.g. decoded from disk).
    pub fn check(&self) -> Result<()> {
        if self.description.trim().is_empty() {
            return Err(DukeError::Store(
                "task has an empty description".to_string(),
            ));
        }
        if !self.kind.takes_date() && self.when.is_some() {
            return Err(DukeError::Store(format!(
                "a {} cannot carry a date",
                self.kind
            )));
        }
        Ok(())
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.done { "[X]" } else { "[ ]" };
        write!(f, "{}{} {}", self.kind.marker(), status, self.description)?;
        if let Some(date) = self.when {
            write!(
                f,
                " ({}: {})",
                self.kind.date_word(),
                date.format(DISPLAY_DATE_FORMAT)
            )?;
        }
        Ok(())
    }
}
