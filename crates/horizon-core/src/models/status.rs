//! Status enumerations for todos and their countdowns.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of persisted todo statuses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub enum TodoStatus {
    /// The window has not been entered yet
    #[default]
    NotStarted,

    /// The todo is being worked on
    InProgress,

    /// Finished by the owner
    Completed,

    /// Abandoned, or the deadline passed while in progress
    Failed,
}

impl FromStr for TodoStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().replace('-', "_").as_str() {
            "NOT_STARTED" | "NOTSTARTED" => Ok(TodoStatus::NotStarted),
            "IN_PROGRESS" | "INPROGRESS" => Ok(TodoStatus::InProgress),
            "COMPLETED" => Ok(TodoStatus::Completed),
            "FAILED" => Ok(TodoStatus::Failed),
            _ => Err(format!("Invalid todo status: {s}")),
        }
    }
}

impl TodoStatus {
    /// All statuses, in lifecycle order.
    pub const ALL: [TodoStatus; 4] = [
        TodoStatus::NotStarted,
        TodoStatus::InProgress,
        TodoStatus::Completed,
        TodoStatus::Failed,
    ];

    /// Canonical string form, shared by the database and the JSON API.
    pub fn as_str(&self) -> &'static str {
        match self {
            TodoStatus::NotStarted => "NOT_STARTED",
            TodoStatus::InProgress => "IN_PROGRESS",
            TodoStatus::Completed => "COMPLETED",
            TodoStatus::Failed => "FAILED",
        }
    }

    /// Terminal statuses are user-asserted and immune to time-based
    /// overrides.
    pub fn is_terminal(&self) -> bool {
        match self {
            TodoStatus::Completed | TodoStatus::Failed => true,
            TodoStatus::NotStarted | TodoStatus::InProgress => false,
        }
    }

    /// Get status with consistent icon formatting for display.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use horizon_core::models::TodoStatus;
    ///
    /// assert_eq!(TodoStatus::Completed.with_icon(), "✓ Completed");
    /// assert_eq!(TodoStatus::InProgress.with_icon(), "➤ In Progress");
    /// assert_eq!(TodoStatus::NotStarted.with_icon(), "○ Not Started");
    /// assert_eq!(TodoStatus::Failed.with_icon(), "✗ Failed");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            TodoStatus::Completed => "✓ Completed",
            TodoStatus::InProgress => "➤ In Progress",
            TodoStatus::NotStarted => "○ Not Started",
            TodoStatus::Failed => "✗ Failed",
        }
    }
}

/// Coarse countdown phase derived from a todo's window, for display and
/// polling. Never persisted.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub enum Phase {
    /// The window starts in the future
    Upcoming,
    /// Now is inside the window
    Active,
    /// The window has ended without the todo being finalized
    Overdue,
    /// The todo carries a terminal status
    Done,
}

impl Phase {
    /// Canonical string form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Upcoming => "UPCOMING",
            Phase::Active => "ACTIVE",
            Phase::Overdue => "OVERDUE",
            Phase::Done => "DONE",
        }
    }
}
