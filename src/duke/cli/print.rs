use colored::Colorize;
use duke::commands::{CmdMessage, MessageLevel};
use duke::error::DukeError;

const WELCOME: &str = "Hello! I'm Duke\nWhat can I do for you?";
const HINT: &str = "Type \"help\" to see what I understand.";

pub(super) struct Printer {
    separator: String,
}

impl Printer {
    pub(super) fn new(line_width: usize) -> Self {
        Self {
            separator: "_".repeat(line_width.max(1)),
        }
    }

    pub(super) fn line(&self) {
        println!("{}", self.separator.dimmed());
    }

    pub(super) fn welcome(&self) {
        self.line();
        println!("{}", WELCOME.bold());
        println!("{}", HINT.dimmed());
        self.line();
    }

    pub(super) fn messages(&self, messages: &[CmdMessage]) {
        for message in messages {
            self.message(message);
        }
    }

    pub(super) fn message(&self, message: &CmdMessage) {
        match message.level {
            MessageLevel::Info => println!("{}", message.content),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }

    pub(super) fn error(&self, error: &DukeError) {
        println!("{}", error.to_string().red());
    }

    pub(super) fn warning(&self, text: &str) {
        println!("{}", text.yellow());
    }
}
