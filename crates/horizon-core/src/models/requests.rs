//! Validated request types built from raw [`crate::params`].

use jiff::Timestamp;

use super::TodoStatus;
use crate::{
    error::{AgendaError, Result},
    lifecycle::parse_supplied,
    params::{self, parse_status, require_text},
};

/// A validated todo creation request. Times are parsed but not yet
/// normalized.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewTodo {
    pub title: String,
    pub description: Option<String>,
    pub start_at: Option<Timestamp>,
    pub end_at: Option<Timestamp>,
    pub status: Option<TodoStatus>,
}

impl TryFrom<&params::CreateTodo> for NewTodo {
    type Error = AgendaError;

    /// Validates the title, parses timestamps and the requested status.
    ///
    /// # Errors
    ///
    /// * `AgendaError::InvalidInput` - empty title, malformed timestamp or
    ///   unknown status
    ///
    /// # Examples
    ///
    /// ```rust
    /// use horizon_core::{models::requests::NewTodo, params::CreateTodo};
    ///
    /// let params = CreateTodo {
    ///     title: "Stretch".to_string(),
    ///     start_at: Some("yesterday-ish".to_string()),
    ///     ..CreateTodo::default()
    /// };
    /// assert!(NewTodo::try_from(&params).is_err());
    /// ```
    fn try_from(params: &params::CreateTodo) -> Result<Self> {
        Ok(Self {
            title: require_text("title", &params.title)?,
            description: non_blank(params.description.as_deref()),
            start_at: parse_supplied("startAt", params.start_at.as_deref())?,
            end_at: parse_supplied("endAt", params.end_at.as_deref())?,
            status: parse_status(params.status.as_deref())?,
        })
    }
}

/// A validated partial update. `None` fields keep their stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TodoChanges {
    pub title: Option<String>,
    /// `Some(None)` clears the description
    pub description: Option<Option<String>>,
    pub start_at: Option<Timestamp>,
    pub end_at: Option<Timestamp>,
    pub status: Option<TodoStatus>,
}

impl TodoChanges {
    /// Whether the request changes nothing; the stored status is still
    /// re-resolved against the clock.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.start_at.is_none()
            && self.end_at.is_none()
            && self.status.is_none()
    }
}

impl TryFrom<&params::UpdateTodo> for TodoChanges {
    type Error = AgendaError;

    fn try_from(params: &params::UpdateTodo) -> Result<Self> {
        let title = params
            .title
            .as_deref()
            .map(|t| require_text("title", t))
            .transpose()?;

        Ok(Self {
            title,
            description: params.description.as_deref().map(|d| non_blank(Some(d))),
            start_at: parse_supplied("startAt", params.start_at.as_deref())?,
            end_at: parse_supplied("endAt", params.end_at.as_deref())?,
            status: parse_status(params.status.as_deref())?,
        })
    }
}

/// A validated candidate to add to a list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCandidate {
    pub list_id: u64,
    pub label: String,
    pub weight: u32,
}

impl TryFrom<&params::AddCandidate> for NewCandidate {
    type Error = AgendaError;

    fn try_from(params: &params::AddCandidate) -> Result<Self> {
        let weight = params.weight.unwrap_or(1);
        if weight == 0 {
            return Err(AgendaError::invalid_input("weight").with_reason("must be at least 1"));
        }
        Ok(Self {
            list_id: params.list_id,
            label: require_text("label", &params.label)?,
            weight,
        })
    }
}

fn non_blank(text: Option<&str>) -> Option<String> {
    text.map(str::trim)
        .filter(|t| !t.is_empty())
        .map(String::from)
}
