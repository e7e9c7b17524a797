//! # Storage Layer
//!
//! The command layer never touches the disk. It is handed a [`TaskStore`] and
//! calls [`TaskStore::persist`] when the session ends; everything about files
//! and formats lives behind the trait.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: a single JSON document holding every task.
//! - [`memory::InMemoryStore`]: keeps the last saved list in memory, for tests.
//!
//! ## Storage Format
//!
//! ```text
//! <data dir>/
//! ├── tasks.json     # JSON array of task records
//! └── config.json    # optional settings, see config.rs
//! ```
//!
//! A record looks like
//! `{"kind": "deadline", "description": "submit report", "done": false, "when": "2024-12-02"}`;
//! `when` is omitted for dateless tasks.
//!
//! Records that fail to decode are reported back in a [`LoadReport`] rather
//! than dropped silently; the client decides how to tell the user and whether
//! to keep a copy of the original document before it is overwritten.

use crate::error::Result;
use crate::list::TaskList;
use crate::model::Task;
use std::fmt;
use tracing::warn;

pub mod fs;
pub mod memory;

/// A stored record that could not be turned back into a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRecord {
    /// 1-based position in the stored array.
    pub position: usize,
    /// The record's description, when it had a readable one.
    pub description: Option<String>,
    pub reason: String,
}

impl fmt::Display for SkippedRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Skipped stored task {}", self.position)?;
        if let Some(description) = &self.description {
            write!(f, " (\"{}\")", description)?;
        }
        write!(f, ": {}", self.reason)
    }
}

/// The outcome of a load: the tasks that decoded, and those that didn't.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub list: TaskList,
    pub skipped: Vec<SkippedRecord>,
}

impl LoadReport {
    pub fn is_lossy(&self) -> bool {
        !self.skipped.is_empty()
    }
}

impl From<TaskList> for LoadReport {
    fn from(list: TaskList) -> Self {
        Self {
            list,
            skipped: Vec::new(),
        }
    }
}

/// Where a session's task list comes from and goes back to.
pub trait TaskStore {
    /// Load the stored list, or an empty one if nothing was saved yet.
    fn load(&self) -> Result<LoadReport>;

    /// Replace the stored list with `list`.
    fn save(&mut self, list: &TaskList) -> Result<()>;

    /// Human-readable description of where tasks are kept.
    fn location(&self) -> String;

    /// Save `list` and describe what was written.
    fn persist(&mut self, list: &TaskList) -> Result<String> {
        self.save(list)?;
        let noun = if list.len() == 1 { "task" } else { "tasks" };
        Ok(format!(
            "Saved {} {} to {}",
            list.len(),
            noun,
            self.location()
        ))
    }
}

/// Decodes a stored JSON document into a list.
///
/// Records that do not decode, or that break a task invariant, are skipped and
/// listed in the report so one bad line doesn't cost the user the rest of
/// their tasks.
pub(crate) fn decode_tasks(json: &str) -> Result<LoadReport> {
    let records: Vec<serde_json::Value> = serde_json::from_str(json)?;
    let mut tasks = Vec::with_capacity(records.len());
    let mut skipped = Vec::new();

    for (index, record) in records.into_iter().enumerate() {
        let position = index + 1;
        let description = record
            .get("description")
            .and_then(|d| d.as_str())
            .map(str::to_string);
        let outcome = serde_json::from_value::<Task>(record)
            .map_err(|e| e.to_string())
            .and_then(|task| task.check().map(|()| task).map_err(|e| e.to_string()));
        match outcome {
            Ok(task) => tasks.push(task),
            Err(reason) => {
                warn!(position, %reason, "skipping stored task record");
                skipped.push(SkippedRecord {
                    position,
                    description,
                    reason,
                });
            }
        }
    }

    Ok(LoadReport {
        list: TaskList::from_tasks(tasks),
        skipped,
    })
}

pub(crate) fn encode_tasks(list: &TaskList) -> Result<String> {
    Ok(serde_json::to_string_pretty(list.tasks())?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn every_variant_survives_encoding() {
        let mut list = TaskList::new();
        list.add_item(Task::todo("buy milk"));
        list.add_item(Task::deadline(
            "submit report",
            NaiveDate::from_ymd_opt(2024, 12, 2),
        ));
        list.add_item(Task::deadline("someday", None));
        list.add_item(Task::event("party", NaiveDate::from_ymd_opt(2025, 1, 31)));
        list.add_item(Task::event("meetup", None));
        list.mark_done(1);
        list.mark_done(4);

        let decoded = decode_tasks(&encode_tasks(&list).unwrap()).unwrap();
        assert!(!decoded.is_lossy());
        assert_eq!(decoded.list, list);
    }

    #[test]
    fn record_layout_is_stable() {
        let json = r#"[
            {"kind": "todo", "description": "a"},
            {"kind": "event", "description": "b", "done": true, "when": "2024-12-02"}
        ]"#;
        let list = decode_tasks(json).unwrap().list;
        assert_eq!(list.len(), 2);
        assert_eq!(list.to_string().lines().nth(2), Some("2. [E][X] b (at: Dec 02 2024)"));
    }

    #[test]
    fn bad_records_are_skipped() {
        let json = r#"[
            {"kind": "todo", "description": "kept"},
            {"kind": "chore", "description": "unknown kind"},
            {"kind": "todo", "description": "   "},
            {"kind": "todo", "description": "dated todo", "when": "2024-12-02"},
            {"kind": "deadline", "description": "bad date", "when": "02/12/2024"}
        ]"#;
        let report = decode_tasks(json).unwrap();
        assert_eq!(report.list.len(), 1);
        assert_eq!(report.list.tasks()[0].description(), "kept");

        let positions: Vec<usize> = report.skipped.iter().map(|s| s.position).collect();
        assert_eq!(positions, vec![2, 3, 4, 5]);
    }

    #[test]
    fn skipped_records_say_which_task_and_why() {
        let json = r#"[
            {"kind": "todo", "description": "kept"},
            {"kind": "todo", "description": "dated todo", "when": "2024-12-02"},
            {"kind": "deadline"}
        ]"#;
        let report = decode_tasks(json).unwrap();
        assert!(report.is_lossy());
        assert_eq!(
            report.skipped[0].to_string(),
            "Skipped stored task 2 (\"dated todo\"): a todo cannot carry a date"
        );
        assert_eq!(report.skipped[1].description, None);
        assert!(report.skipped[1]
            .to_string()
            .starts_with("Skipped stored task 3: "));
    }

    #[test]
    fn malformed_document_is_an_error() {
        assert!(decode_tasks("{not json").is_err());
        assert!(decode_tasks(r#"{"kind": "todo"}"#).is_err());
    }
}
