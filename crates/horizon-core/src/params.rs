//! Parameter structures for Horizon operations.
//!
//! These structures are shared by every interface (CLI, MCP) and keep the
//! wire shape of the JSON API: camelCase field names (`startAt`, `endAt`,
//! `listId`) with timestamps and statuses as raw strings. Interfaces wrap
//! them with their own framework derives and convert with `.into()`:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌──────────────────────┐
//! │   CLI Args      │    │   MCP Params    │    │  Core Params         │
//! │  (clap derives) │───▶│ (serde derives) │───▶│ (validated into      │
//! └─────────────────┘    └─────────────────┘    │  models::requests)   │
//!                                               └──────────────────────┘
//! ```
//!
//! Raw strings are validated once, when a parameter struct is converted into
//! a request type from [`crate::models::requests`]. A malformed timestamp is
//! rejected there with [`crate::AgendaError::InvalidInput`] and never
//! reaches the database.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Generic parameters for operations requiring just an ID.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Id {
    /// The ID of the resource to operate on
    pub id: u64,
}

/// Parameters for creating a new todo.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct CreateTodo {
    /// Title of the todo (required, non-empty)
    pub title: String,
    /// Optional free-form description
    #[serde(default)]
    pub description: Option<String>,
    /// ISO-8601 start instant; defaults to now, past values are moved to now
    #[serde(default)]
    pub start_at: Option<String>,
    /// ISO-8601 end instant; defaults to 25 minutes after the start
    #[serde(default)]
    pub end_at: Option<String>,
    /// Requested status (NOT_STARTED, IN_PROGRESS, COMPLETED, FAILED)
    #[serde(default)]
    pub status: Option<String>,
}

/// Parameters for partially updating an existing todo.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct UpdateTodo {
    /// Todo ID to update (required)
    pub id: u64,
    /// New title
    #[serde(default)]
    pub title: Option<String>,
    /// New description; an empty string clears it
    #[serde(default)]
    pub description: Option<String>,
    /// New ISO-8601 start instant; past values are moved to now
    #[serde(default)]
    pub start_at: Option<String>,
    /// New ISO-8601 end instant
    #[serde(default)]
    pub end_at: Option<String>,
    /// Requested status (NOT_STARTED, IN_PROGRESS, COMPLETED, FAILED)
    #[serde(default)]
    pub status: Option<String>,
}

/// Parameters for listing todos.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct ListTodos {
    /// Only show todos with this status
    #[serde(default)]
    pub status: Option<String>,
    /// Only show todos whose title contains this text
    #[serde(default)]
    pub search: Option<String>,
}

/// Parameters for computing the countdown of a todo.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct Countdown {
    /// Todo ID
    pub id: u64,
    /// ISO-8601 instant to compute the countdown at; defaults to now
    #[serde(default)]
    pub at: Option<String>,
}

/// Parameters for creating a candidate list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct CreateList {
    /// Name of the list (required, non-empty)
    pub name: String,
    /// Optional description
    #[serde(default)]
    pub description: Option<String>,
}

/// Parameters for adding a candidate to a list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct AddCandidate {
    /// ID of the list to add the candidate to
    pub list_id: u64,
    /// Text shown on the wheel (required, non-empty)
    pub label: String,
    /// Relative likelihood of being drawn; defaults to 1, must be at least 1
    #[serde(default)]
    pub weight: Option<u32>,
}

/// Rejects empty or whitespace-only text for a required field.
pub(crate) fn require_text(field: &str, value: &str) -> crate::Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(crate::AgendaError::invalid_input(field).with_reason("must not be empty"));
    }
    Ok(trimmed.to_string())
}

/// Parses an optional status string.
pub(crate) fn parse_status(
    raw: Option<&str>,
) -> crate::Result<Option<crate::models::TodoStatus>> {
    raw.filter(|s| !s.trim().is_empty())
        .map(|s| {
            s.parse().map_err(|_| {
                crate::AgendaError::invalid_input("status").with_reason(format!(
                    "Invalid status: {s}. Must be NOT_STARTED, IN_PROGRESS, COMPLETED or FAILED"
                ))
            })
        })
        .transpose()
}
