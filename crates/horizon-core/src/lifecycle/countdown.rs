//! Countdown metrics: a read-only projection of a todo for polling displays.

use jiff::{SignedDuration, Timestamp};
use serde::{Deserialize, Serialize};

use super::Window;
use crate::models::{Phase, Todo, TodoStatus};

/// Phase and signed millisecond offsets of a todo relative to "now".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct CountdownMetrics {
    pub phase: Phase,
    /// `start_at - now` in milliseconds; negative once started
    pub starts_in: i64,
    /// `end_at - now` in milliseconds; negative once ended
    pub ends_in: i64,
}

impl CountdownMetrics {
    /// Metrics for a finalized todo.
    pub const DONE: CountdownMetrics = CountdownMetrics {
        phase: Phase::Done,
        starts_in: 0,
        ends_in: 0,
    };

    /// Computes the metrics of a todo with the given status and window.
    pub fn compute(status: TodoStatus, window: &Window, now: Timestamp) -> Self {
        if status.is_terminal() {
            return Self::DONE;
        }

        let starts_in = millis(window.start_at.duration_since(now));
        let ends_in = millis(window.end_at.duration_since(now));
        let phase = if starts_in > 0 {
            Phase::Upcoming
        } else if ends_in > 0 {
            Phase::Active
        } else {
            Phase::Overdue
        };

        Self {
            phase,
            starts_in,
            ends_in,
        }
    }

    /// Computes the metrics of a stored todo.
    pub fn for_todo(todo: &Todo, now: Timestamp) -> Self {
        Self::compute(todo.status, &todo.window(), now)
    }
}

// Any two representable instants are less than i64::MAX milliseconds apart.
fn millis(duration: SignedDuration) -> i64 {
    duration.as_millis() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(s: &str) -> Timestamp {
        s.parse().expect("valid timestamp")
    }

    fn window() -> Window {
        Window {
            start_at: ts("2025-03-01T09:00:00Z"),
            end_at: ts("2025-03-01T09:25:00Z"),
        }
    }

    #[test]
    fn test_upcoming() {
        let metrics = CountdownMetrics::compute(
            TodoStatus::NotStarted,
            &window(),
            ts("2025-03-01T08:59:00Z"),
        );
        assert_eq!(metrics.phase, Phase::Upcoming);
        assert_eq!(metrics.starts_in, 60_000);
        assert_eq!(metrics.ends_in, 26 * 60_000);
    }

    #[test]
    fn test_active_from_the_first_millisecond() {
        let w = window();
        let metrics = CountdownMetrics::compute(TodoStatus::NotStarted, &w, w.start_at);
        assert_eq!(metrics.phase, Phase::Active);
        assert_eq!(metrics.starts_in, 0);
        assert_eq!(metrics.ends_in, 25 * 60_000);
    }

    #[test]
    fn test_overdue_at_end_instant() {
        let w = window();
        let metrics = CountdownMetrics::compute(TodoStatus::InProgress, &w, w.end_at);
        assert_eq!(metrics.phase, Phase::Overdue);
        assert_eq!(metrics.ends_in, 0);
    }

    #[test]
    fn test_overdue_offsets_are_negative() {
        let metrics = CountdownMetrics::compute(
            TodoStatus::InProgress,
            &window(),
            ts("2025-03-01T10:00:00Z"),
        );
        assert_eq!(metrics.phase, Phase::Overdue);
        assert_eq!(metrics.starts_in, -60 * 60_000);
        assert_eq!(metrics.ends_in, -35 * 60_000);
    }

    #[test]
    fn test_terminal_status_is_done_with_zero_offsets() {
        for status in [TodoStatus::Completed, TodoStatus::Failed] {
            for now in ["2025-03-01T08:00:00Z", "2025-03-01T09:10:00Z", "2025-03-02T00:00:00Z"] {
                assert_eq!(
                    CountdownMetrics::compute(status, &window(), ts(now)),
                    CountdownMetrics::DONE
                );
            }
        }
    }

    #[test]
    fn test_serializes_with_api_field_names() {
        let json = serde_json::to_value(CountdownMetrics::DONE).unwrap();
        assert_eq!(json, serde_json::json!({"phase": "DONE", "startsIn": 0, "endsIn": 0}));
    }
}
