//! Status resolution: the status to persist for a todo, given what the
//! caller asked for and where "now" falls relative to the window.

use jiff::Timestamp;

use super::Window;
use crate::models::TodoStatus;

/// Resolves the canonical status of a todo.
///
/// Priority order:
///
/// 1. `Completed` and `Failed` are user-asserted terminal states and are
///    returned unchanged.
/// 2. `InProgress` is honored unless the window has already ended, in which
///    case the todo has failed.
/// 3. Otherwise the clock decides: inside the window (inclusive) the todo is
///    in progress, else the requested status (or `NotStarted`) stands.
///
/// A todo explicitly reset to `NotStarted` after its deadline stays
/// `NotStarted`; only in-progress todos are failed by the clock.
///
/// # Examples
///
/// ```rust
/// use horizon_core::lifecycle::{resolve_status, Window};
/// use horizon_core::models::TodoStatus;
///
/// let window = Window {
///     start_at: "2025-03-01T09:00:00Z".parse().unwrap(),
///     end_at: "2025-03-01T09:25:00Z".parse().unwrap(),
/// };
/// let late = "2025-03-01T10:00:00Z".parse().unwrap();
///
/// assert_eq!(
///     resolve_status(Some(TodoStatus::InProgress), &window, late),
///     TodoStatus::Failed
/// );
/// assert_eq!(
///     resolve_status(Some(TodoStatus::Completed), &window, late),
///     TodoStatus::Completed
/// );
/// ```
pub fn resolve_status(
    requested: Option<TodoStatus>,
    window: &Window,
    now: Timestamp,
) -> TodoStatus {
    match requested {
        Some(status @ (TodoStatus::Completed | TodoStatus::Failed)) => status,
        Some(TodoStatus::InProgress) => {
            if now > window.end_at {
                TodoStatus::Failed
            } else {
                TodoStatus::InProgress
            }
        }
        Some(TodoStatus::NotStarted) | None => {
            if window.contains(now) {
                TodoStatus::InProgress
            } else {
                requested.unwrap_or_default()
            }
        }
    }
}
