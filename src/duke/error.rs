use thiserror::Error;

/// Errors raised by the task tracker.
///
/// `Command` is the only variant the command layer produces: it carries a message
/// meant for the user and is always recoverable. The remaining variants belong to
/// the storage and configuration collaborators.
#[derive(Error, Debug)]
pub enum DukeError {
    #[error("{0}")]
    Command(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),
}

impl DukeError {
    pub fn command(message: impl Into<String>) -> Self {
        DukeError::Command(message.into())
    }

    /// True for errors the user caused by typing something the parser rejects.
    pub fn is_user_facing(&self) -> bool {
        matches!(self, DukeError::Command(_))
    }
}

pub type Result<T> = std::result::Result<T, DukeError>;
