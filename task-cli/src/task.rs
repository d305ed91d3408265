use crate::error::FormatError;
use chrono::NaiveDateTime;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Lifecycle stage of a task.
#[derive(Debug, Default, Eq, PartialEq, Clone, Copy, Hash)]
pub enum Status {
    #[default]
    Todo,
    InProgress,
    Done,
}

impl Status {
    pub const ALL: [Status; 3] = [Status::Todo, Status::InProgress, Status::Done];

    /// Name used in the persisted file, e.g. `IN_PROGRESS`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Todo => "TODO",
            Status::InProgress => "IN_PROGRESS",
            Status::Done => "DONE",
        }
    }

    /// Lowercase, dash separated label shown to users, e.g. `in-progress`.
    pub fn label(&self) -> &'static str {
        match self {
            Status::Todo => "todo",
            Status::InProgress => "in-progress",
            Status::Done => "done",
        }
    }
}

impl Display for Status {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Status::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| FormatError::UnknownStatus(s.to_string()))
    }
}

/// A single to-do item.
///
/// Fields are private so that the only way to change a task is through
/// [`Task::set_description`] and [`Task::set_status`], which both refresh `updated_at`.
#[derive(Debug, Eq, PartialEq, Clone)]
pub struct Task {
    id: u32,
    description: String,
    status: Status,
    created_at: NaiveDateTime,
    updated_at: NaiveDateTime,
}

impl Task {
    /// Creates a new `Todo` task stamped with `now` for both timestamps.
    pub fn new(id: u32, description: impl Into<String>, now: NaiveDateTime) -> Self {
        Self {
            id,
            description: description.into(),
            status: Status::Todo,
            created_at: now,
            updated_at: now,
        }
    }

    /// Rebuilds a task exactly as it was persisted.
    pub(crate) fn from_parts(
        id: u32,
        description: String,
        status: Status,
        created_at: NaiveDateTime,
        updated_at: NaiveDateTime,
    ) -> Self {
        Self {
            id,
            description,
            status,
            created_at,
            updated_at,
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn created_at(&self) -> NaiveDateTime {
        self.created_at
    }

    pub fn updated_at(&self) -> NaiveDateTime {
        self.updated_at
    }

    /// Replaces the description and refreshes `updated_at`.
    pub fn set_description(&mut self, description: impl Into<String>, now: NaiveDateTime) {
        self.description = description.into();
        self.touch(now);
    }

    /// Replaces the status and refreshes `updated_at`.
    pub fn set_status(&mut self, status: Status, now: NaiveDateTime) {
        self.status = status;
        self.touch(now);
    }

    // updated_at never goes behind created_at, even if the clock does
    fn touch(&mut self, now: NaiveDateTime) {
        self.updated_at = now.max(self.created_at);
    }
}

impl Display for Task {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "ID: {}", self.id)?;
        writeln!(f, "Description: {}", self.description)?;
        writeln!(f, "Status: {}", self.status)?;
        writeln!(f, "Created: {}", self.created_at.format("%Y-%m-%d %H:%M:%S"))?;
        write!(f, "Updated: {}", self.updated_at.format("%Y-%m-%d %H:%M:%S"))
    }
}
