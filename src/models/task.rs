use crate::error::AppError;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Raw task payload as submitted by clients.
///
/// Every field is optional at the wire level; `normalize` decides what is
/// actually required. `due_date` arrives as a free-form string and is parsed
/// during normalization.
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct TaskInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
    pub due_date: Option<String>,
}

/// A normalized task record as stored in the `tasks` table and returned by the API.
#[derive(Debug, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Opaque identifier of the form `task_<uuid4>`.
    pub id: String,
    /// Trimmed title with the first letter capitalized. Never empty.
    pub title: String,
    /// Trimmed description, empty string when absent from the input.
    pub description: String,
    pub completed: bool,
    /// Stamped at normalization time, set once.
    pub created_at: DateTime<Utc>,
    pub due_date: Option<DateTime<Utc>>,
    /// Owning identity, null for unauthenticated submissions. Weak reference:
    /// nothing cascades if the user record disappears.
    pub owner_id: Option<Uuid>,
}

impl Task {
    /// Normalizes a raw payload into a persistable task.
    ///
    /// Fails with `BadRequest` if the title is missing or empty after trimming,
    /// or if a due date is supplied but does not parse as a calendar date.
    /// `completed` defaults to false, the description to an empty string.
    pub fn normalize(input: TaskInput, owner_id: Option<Uuid>) -> Result<Self, AppError> {
        let title = match input.title.as_deref().map(str::trim) {
            Some(t) if !t.is_empty() => capitalize_first(t),
            _ => return Err(AppError::BadRequest("Task title is required".into())),
        };

        let due_date = match input.due_date.as_deref() {
            Some(raw) => Some(
                parse_due_date(raw)
                    .ok_or_else(|| AppError::BadRequest("Invalid due date format".into()))?,
            ),
            None => None,
        };

        Ok(Self {
            id: format!("task_{}", Uuid::new_v4()),
            title,
            description: input
                .description
                .as_deref()
                .map(str::trim)
                .unwrap_or("")
                .to_string(),
            completed: input.completed.unwrap_or(false),
            created_at: Utc::now(),
            due_date,
            owner_id,
        })
    }
}

/// Uppercases the first letter, leaving the rest of the string untouched.
fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Parses a client-supplied due date.
///
/// Accepts RFC 3339 (`2025-06-01T12:00:00Z`), a naive datetime
/// (`2025-06-01T12:00:00`), or a bare date (`2025-06-01`), interpreting naive
/// forms as UTC. Returns `None` for anything else.
fn parse_due_date(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Some(Utc.from_utc_datetime(&dt));
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN)));
    }
    None
}
