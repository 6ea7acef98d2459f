//! Countdown view of a single todo.

use std::fmt;

use jiff::Timestamp;
use serde::Serialize;

use super::datetime::LocalDateTime;
use crate::{lifecycle::CountdownMetrics, models::Todo};

/// A todo together with its countdown metrics at a given instant.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoCountdown {
    pub todo: Todo,
    pub metrics: CountdownMetrics,
    /// The instant the metrics were computed for
    pub at: Timestamp,
}

impl fmt::Display for TodoCountdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.todo.id, self.todo.title)?;
        writeln!(f)?;
        writeln!(f, "- Status: {}", self.todo.status.with_icon())?;
        writeln!(f, "- Countdown: {}", self.metrics)?;
        writeln!(f, "- As of: {}", LocalDateTime(&self.at))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Phase, TodoStatus};

    #[test]
    fn test_countdown_view() {
        let start: Timestamp = "2030-01-01T09:00:00Z".parse().unwrap();
        let end: Timestamp = "2030-01-01T09:25:00Z".parse().unwrap();
        let at: Timestamp = "2030-01-01T08:00:00Z".parse().unwrap();
        let todo = Todo {
            id: 9,
            user_id: "ada".to_string(),
            title: "Standup".to_string(),
            description: None,
            status: TodoStatus::NotStarted,
            start_at: start,
            end_at: end,
            created_at: at,
            updated_at: at,
        };
        let metrics = CountdownMetrics::for_todo(&todo, at);
        assert_eq!(metrics.phase, Phase::Upcoming);

        let view = TodoCountdown { todo, metrics, at };
        let output = view.to_string();
        assert!(output.contains("- Countdown: UPCOMING: starts in 1h 00m, ends in 1h 25m"));

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["metrics"]["phase"], "UPCOMING");
        assert_eq!(json["metrics"]["startsIn"], 3_600_000);
    }
}
