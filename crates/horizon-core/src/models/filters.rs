//! Filter types for querying todos.

use super::TodoStatus;

/// Filter options for listing todos.
#[derive(Debug, Default, Clone)]
pub struct TodoFilter {
    /// Only return todos with this stored status
    pub status: Option<TodoStatus>,

    /// Only return todos whose title contains this text
    pub title_contains: Option<String>,
}

impl TodoFilter {
    /// Filter by a single status.
    pub fn with_status(status: TodoStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }
}
