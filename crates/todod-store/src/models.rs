use std::fmt;
use std::str::FromStr;

use chrono::{Duration, Local};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Priority
// ---------------------------------------------------------------------------

/// Urgency level of a todo.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        };
        f.write_str(s)
    }
}

impl FromStr for Priority {
    type Err = PriorityParseError;

    /// Case-insensitive: `"HIGH"` and `"high"` are both accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(PriorityParseError(s.to_owned())),
        }
    }
}

/// Error returned when parsing an invalid [`Priority`] string.
#[derive(Debug, Clone)]
pub struct PriorityParseError(pub String);

impl fmt::Display for PriorityParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid priority: {:?}", self.0)
    }
}

impl std::error::Error for PriorityParseError {}

// ---------------------------------------------------------------------------
// Todo
// ---------------------------------------------------------------------------

/// A single task record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: Uuid,
    pub title: String,
    pub completed: bool,
    /// Always present, formatted `YYYY-MM-DD`.
    pub due_date: String,
    pub priority: Priority,
}

/// Input for creating a todo. The store applies defaults for the
/// optional fields.
#[derive(Debug, Clone)]
pub struct NewTodo {
    pub title: String,
    pub due_date: Option<String>,
    /// Raw priority text; invalid values fall back to [`Priority::Medium`].
    pub priority: Option<String>,
}

/// Partial update for an existing todo. Absent fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct TodoPatch {
    pub title: Option<String>,
    pub completed: Option<bool>,
    pub due_date: Option<String>,
    /// Raw priority text; invalid values are discarded and the prior
    /// value kept.
    pub priority: Option<String>,
}

/// Default due date: seven days from now, formatted `YYYY-MM-DD`.
pub fn default_due_date() -> String {
    (Local::now() + Duration::days(7)).format("%Y-%m-%d").to_string()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
