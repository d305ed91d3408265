//! Text format of the tasks file.
//!
//! The file holds a bracketed list with one object per task:
//!
//! ```text
//! [
//!   {"id": 1, "description": "Buy milk", "status": "TODO", "createdAt": "2025-04-12T09:00:00", "updatedAt": "2025-04-12T09:00:00"}
//! ]
//! ```
//!
//! Reading goes through `serde_json`, so entries may be spread over several lines, indented
//! arbitrarily and list their fields in any order.

use crate::error::FormatError;
use crate::task::{Status, Task};
use chrono::NaiveDateTime;
use serde::Deserialize;

/// Date-time layout used for `createdAt` and `updatedAt`: second precision, no zone.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct RawTask {
    id: u32,
    description: String,
    status: String,
    created_at: String,
    updated_at: String,
}

/// Serializes tasks in order. An empty slice becomes `[]`.
pub fn encode(tasks: &[Task]) -> String {
    if tasks.is_empty() {
        return "[]".to_string();
    }
    let entries: Vec<String> = tasks.iter().map(encode_task).collect();
    format!("[\n  {}\n]", entries.join(",\n  "))
}

fn encode_task(task: &Task) -> String {
    format!(
        r#"{{"id": {}, "description": {}, "status": "{}", "createdAt": "{}", "updatedAt": "{}"}}"#,
        task.id(),
        quote(task.description()),
        task.status().as_str(),
        task.created_at().format(TIMESTAMP_FORMAT),
        task.updated_at().format(TIMESTAMP_FORMAT),
    )
}

// JSON string literal: escapes quotes, backslashes and control characters
fn quote(text: &str) -> String {
    serde_json::Value::from(text).to_string()
}

/// Parses the tasks file contents back into records, preserving their order.
///
/// Blank input and `[]` yield an empty list.
///
/// # Errors
///
/// * [`FormatError::InvalidId`] - an id of 0
/// * [`FormatError::UnknownStatus`] - a status other than `TODO`, `IN_PROGRESS` or `DONE`
/// * [`FormatError::InvalidTimestamp`] - a timestamp not in [`TIMESTAMP_FORMAT`]
/// * [`FormatError::Malformed`] - text that is not a list of complete task entries
pub fn decode(text: &str) -> Result<Vec<Task>, FormatError> {
    let text = text.trim();
    if text.is_empty() || text == "[]" {
        return Ok(Vec::new());
    }
    let raw: Vec<RawTask> = serde_json::from_str(text)?;
    raw.into_iter().map(decode_task).collect()
}

fn decode_task(raw: RawTask) -> Result<Task, FormatError> {
    if raw.id == 0 {
        return Err(FormatError::InvalidId(raw.id));
    }
    let status = raw.status.parse::<Status>()?;
    let created_at = parse_timestamp("createdAt", &raw.created_at)?;
    let updated_at = parse_timestamp("updatedAt", &raw.updated_at)?;
    Ok(Task::from_parts(
        raw.id,
        raw.description,
        status,
        created_at,
        updated_at,
    ))
}

fn parse_timestamp(field: &'static str, value: &str) -> Result<NaiveDateTime, FormatError> {
    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT).map_err(|_| {
        FormatError::InvalidTimestamp {
            field,
            value: value.to_string(),
        }
    })
}
