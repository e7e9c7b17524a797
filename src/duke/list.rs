//! # The Task List
//!
//! An insertion-ordered collection of [`Task`]s. Positions are 0-based here; the
//! parser converts the 1-based numbers users type before calling in.
//!
//! Every operation returns a [`CmdResult`]. Requests that cannot be honored
//! (an index past the end, marking a task that is already done) come back as a
//! warning message and leave the list untouched; they are not errors.
//!
//! The active/completed counters are not stored. [`Counts::of`] derives them from
//! any sequence of tasks, so a list and its filtered views can never disagree
//! with their own contents.

use crate::commands::{CmdMessage, CmdResult};
use crate::model::Task;
use std::fmt;
use tracing::debug;

pub const EMPTY_LIST_MESSAGE: &str = "There are currently no tasks.";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counts {
    pub active: usize,
    pub completed: usize,
}

impl Counts {
    pub fn of<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> Self {
        tasks.into_iter().fold(Counts::default(), |mut counts, task| {
            if task.is_done() {
                counts.completed += 1;
            } else {
                counts.active += 1;
            }
            counts
        })
    }

    pub fn total(&self) -> usize {
        self.active + self.completed
    }
}

impl fmt::Display for Counts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Active Tasks: {}\nCompleted Tasks: {}",
            self.active, self.completed
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    pub fn counts(&self) -> Counts {
        Counts::of(&self.tasks)
    }

    pub fn add_item(&mut self, task: Task) -> CmdResult {
        debug!(kind = %task.kind(), "adding task");
        let message = CmdMessage::success(format!("added: {}", task));
        self.tasks.push(task.clone());
        CmdResult::message(message)
            .with_message(self.counts_message())
            .with_affected_task(task)
    }

    pub fn delete_item(&mut self, index: isize) -> CmdResult {
        let Some(slot) = self.slot(index) else {
            return CmdResult::message(CmdMessage::warning(
                "Please choose a valid task to delete",
            ));
        };
        let removed = self.tasks.remove(slot);
        debug!(slot, "deleted task");
        CmdResult::message(CmdMessage::success(format!(
            "Noted. I have deleted the following task: \n{}",
            removed
        )))
        .with_message(self.counts_message())
        .with_affected_task(removed)
    }

    pub fn mark_done(&mut self, index: isize) -> CmdResult {
        self.set_done(index, true)
    }

    pub fn revert_done(&mut self, index: isize) -> CmdResult {
        self.set_done(index, false)
    }

    fn set_done(&mut self, index: isize, done: bool) -> CmdResult {
        let Some(slot) = self.slot(index) else {
            let target = if done { "done" } else { "not done" };
            return CmdResult::message(CmdMessage::warning(format!(
                "Please choose a valid task to mark as {}",
                target
            )));
        };

        let task = &mut self.tasks[slot];
        if task.is_done() == done {
            let reason = if done {
                "The task is already done!"
            } else {
                "The task is not yet done!"
            };
            return CmdResult::message(CmdMessage::warning(reason));
        }

        let confirmation = if done {
            task.mark_done()
        } else {
            task.revert_done()
        };
        let affected = task.clone();
        debug!(slot, done, "flipped task");

        CmdResult::message(CmdMessage::success(confirmation))
            .with_message(self.counts_message())
            .with_affected_task(affected)
    }

    /// Lists the tasks whose description contains `word` (case-sensitive).
    ///
    /// The matches are copied into a throwaway list, so the counters shown are
    /// those of the matches alone.
    pub fn find_word(&self, word: &str) -> CmdResult {
        let matches = TaskList::from_tasks(
            self.tasks
                .iter()
                .filter(|task| task.description().contains(word))
                .cloned()
                .collect(),
        );
        debug!(word, found = matches.len(), "searched tasks");
        CmdResult::message(CmdMessage::info(format!(
            "Using keyword: {}\n{}",
            word, matches
        )))
    }

    fn counts_message(&self) -> CmdMessage {
        CmdMessage::info(self.counts().to_string())
    }

    fn slot(&self, index: isize) -> Option<usize> {
        usize::try_from(index)
            .ok()
            .filter(|slot| *slot < self.tasks.len())
    }
}

impl fmt::Display for TaskList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.tasks.is_empty() {
            return f.write_str(EMPTY_LIST_MESSAGE);
        }
        writeln!(f, "Current tasks:")?;
        for (i, task) in self.tasks.iter().enumerate() {
            writeln!(f, "{}. {}", i + 1, task)?;
        }
        write!(f, "\n{}", self.counts())
    }
}
