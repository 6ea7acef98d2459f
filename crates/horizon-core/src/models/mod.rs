//! Data models for todos and candidate lists.
//!
//! This module contains the core domain models of Horizon. Display
//! implementations for these models live in [`crate::display::models`] so
//! data structures stay separate from presentation.
//!
//! All models serialize with camelCase field names (`startAt`, `endAt`,
//! `userId`, ...) and RFC 3339 timestamps, matching the JSON shape the MCP
//! tools accept and return.
//!
//! # Examples
//!
//! ```rust
//! use horizon_core::models::{Todo, TodoStatus};
//! use jiff::Timestamp;
//!
//! let start: Timestamp = "2025-03-01T09:00:00Z".parse().unwrap();
//! let todo = Todo {
//!     id: 1,
//!     user_id: "ada".to_string(),
//!     title: "Write report".to_string(),
//!     description: None,
//!     status: TodoStatus::NotStarted,
//!     start_at: start,
//!     end_at: "2025-03-01T09:25:00Z".parse().unwrap(),
//! #   created_at: start,
//! #   updated_at: start,
//! };
//! assert!(todo.window().end_at > todo.window().start_at);
//! println!("{}", todo);
//! ```

pub mod candidate;
pub mod filters;
pub mod requests;
pub mod status;
pub mod todo;


pub use candidate::{Candidate, CandidateList, ListSummary, WheelDraw};
pub use filters::TodoFilter;
pub use requests::{NewCandidate, NewTodo, TodoChanges};
pub use status::{Phase, TodoStatus};
pub use todo::Todo;
