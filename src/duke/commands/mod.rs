//! Command handlers and the result type they share.
//!
//! Handlers never print. They return a [`CmdResult`] whose messages carry a level
//! so a client can style them; [`CmdResult::text`] gives the plain rendering.

use crate::model::Task;
use std::fmt;

pub mod create;
pub mod help;
pub mod mutate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct CmdResult {
    /// Tasks created, flipped or removed by the command, as they are afterwards.
    pub affected_tasks: Vec<Task>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn message(message: CmdMessage) -> Self {
        Self {
            affected_tasks: Vec::new(),
            messages: vec![message],
        }
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_affected_task(mut self, task: Task) -> Self {
        self.affected_tasks.push(task);
        self
    }

    /// True when any message is a warning or error, i.e. the command was a
    /// validated no-op.
    pub fn is_rejected(&self) -> bool {
        self.messages
            .iter()
            .any(|m| matches!(m.level, MessageLevel::Warning | MessageLevel::Error))
    }

    /// All message contents joined by newlines.
    pub fn text(&self) -> String {
        self.messages
            .iter()
            .map(|m| m.content.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl fmt::Display for CmdResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_joins_messages_in_order() {
        let result = CmdResult::message(CmdMessage::success("added: x"))
            .with_message(CmdMessage::info("Active Tasks: 1"));
        assert_eq!(result.text(), "added: x\nActive Tasks: 1");
        assert!(!result.is_rejected());
    }

    #[test]
    fn warnings_mark_result_rejected() {
        let result = CmdResult::message(CmdMessage::warning("The task is already done!"));
        assert!(result.is_rejected());
        assert_eq!(result.to_string(), "The task is already done!");
    }
}
