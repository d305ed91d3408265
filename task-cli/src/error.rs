use thiserror::Error;

/// Errors raised while turning the task file back into records.
///
/// Any of these means the file was corrupted or edited by hand; nothing is repaired automatically.
#[derive(Error, Debug)]
pub enum FormatError {
    #[error("unknown status '{0}'")]
    UnknownStatus(String),
    #[error("task ids must be positive, found {0}")]
    InvalidId(u32),
    #[error("invalid {field} timestamp '{value}'")]
    InvalidTimestamp { field: &'static str, value: String },
    #[error("malformed task list")]
    Malformed(#[from] serde_json::Error),
}

/// Errors surfaced by [`crate::TaskStore`] operations.
#[derive(Error, Debug)]
pub enum TaskError {
    /// No task carries the requested id
    #[error("Task not found with ID: {0}")]
    NotFound(u32),
    /// The highest id on file is already `u32::MAX`
    #[error("no task ids left to assign")]
    IdsExhausted,
    #[error("invalid tasks file")]
    Format(#[from] FormatError),
    #[error("failed to access tasks file")]
    Io(#[from] std::io::Error),
}
