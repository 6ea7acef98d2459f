//! Confirmations printed after a mutation.
//!
//! A wrapper prints one confirmation line, then the affected todo, list or
//! candidate as it is now stored.

use std::fmt;

use crate::models::{Candidate, CandidateList, Todo};

/// Confirms a created todo or list, or an added candidate.
///
/// # Examples
///
/// ```rust
/// use horizon_core::{
///     display::CreateResult,
///     models::{Todo, TodoStatus},
/// };
/// use jiff::Timestamp;
///
/// let now = Timestamp::now();
/// let todo = Todo {
///     id: 1,
///     user_id: "ada".to_string(),
///     title: "Plan sprint".to_string(),
///     description: None,
///     status: TodoStatus::InProgress,
///     start_at: now,
///     end_at: now,
///     created_at: now,
///     updated_at: now,
/// };
///
/// let output = CreateResult::new(todo).to_string();
/// assert!(output.contains("Created todo with ID: 1"));
/// ```
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<Todo> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created todo with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

impl fmt::Display for CreateResult<CandidateList> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created list with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

impl fmt::Display for CreateResult<Candidate> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Added candidate with ID: {} to list {}",
            self.resource.id, self.resource.list_id
        )?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Confirms an update. `changes` lists what the caller asked for, plus
/// any status the resolver picked instead.
pub struct UpdateResult<T> {
    pub resource: T,
    pub changes: Vec<String>,
}

impl<T> UpdateResult<T> {
    pub fn new(resource: T) -> Self {
        Self {
            resource,
            changes: Vec::new(),
        }
    }

    pub fn with_changes(resource: T, changes: Vec<String>) -> Self {
        Self { resource, changes }
    }
}

impl fmt::Display for UpdateResult<Todo> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated todo with ID: {}", self.resource.id)?;

        if !self.changes.is_empty() {
            writeln!(f)?;
            writeln!(f, "Changes:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }

        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Confirms a deletion. Deleted records are not shown again.
pub struct DeleteResult<T> {
    pub resource: T,
}

impl<T> DeleteResult<T> {
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for DeleteResult<Todo> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Deleted todo '{}' (ID: {})",
            self.resource.title, self.resource.id
        )
    }
}

impl fmt::Display for DeleteResult<CandidateList> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Deleted list '{}' (ID: {}) and its {} candidates",
            self.resource.name,
            self.resource.id,
            self.resource.candidates.len()
        )
    }
}

impl fmt::Display for DeleteResult<Candidate> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Removed candidate '{}' (ID: {}) from list {}",
            self.resource.label, self.resource.id, self.resource.list_id
        )
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use super::*;
    use crate::models::TodoStatus;

    fn todo() -> Todo {
        let at = Timestamp::from_second(1_900_000_000).unwrap();
        Todo {
            id: 4,
            user_id: "ada".to_string(),
            title: "Stretch".to_string(),
            description: None,
            status: TodoStatus::NotStarted,
            start_at: at,
            end_at: at,
            created_at: at,
            updated_at: at,
        }
    }

    #[test]
    fn test_update_result_lists_changes() {
        let output =
            UpdateResult::with_changes(todo(), vec!["Updated title".to_string()]).to_string();
        assert!(output.contains("Updated todo with ID: 4"));
        assert!(output.contains("Changes:\n- Updated title"));

        let plain = UpdateResult::new(todo()).to_string();
        assert!(!plain.contains("Changes:"));
    }

    #[test]
    fn test_delete_result() {
        assert_eq!(
            DeleteResult::new(todo()).to_string(),
            "Deleted todo 'Stretch' (ID: 4)\n"
        );
    }
}
