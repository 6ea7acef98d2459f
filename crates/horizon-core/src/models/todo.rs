//! Todo model definition and related functionality.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::TodoStatus;
use crate::lifecycle::Window;

/// A time-boxed task owned by a single user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    /// Unique identifier for the todo
    pub id: u64,

    /// Owning user; a todo is only visible to its owner
    pub user_id: String,

    /// Short, non-empty title
    pub title: String,

    /// Optional free-form description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Current lifecycle status
    pub status: TodoStatus,

    /// Start of the window (UTC)
    pub start_at: Timestamp,

    /// End of the window (UTC), always after `start_at`
    pub end_at: Timestamp,

    /// Timestamp when the todo was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the todo was last updated (UTC)
    pub updated_at: Timestamp,
}

impl Todo {
    /// The todo's `[start_at, end_at]` window.
    pub fn window(&self) -> Window {
        Window {
            start_at: self.start_at,
            end_at: self.end_at,
        }
    }
}
