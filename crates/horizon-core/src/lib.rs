//! Core library for the Horizon todo agenda.
//!
//! Horizon manages time-boxed todos: each todo has a `[start_at, end_at]`
//! window and a status that is kept consistent with that window. The crate
//! is split into a pure lifecycle model and the layers around it:
//!
//! - [`lifecycle`]: time normalization, status resolution, countdown
//!   metrics and phase edge tracking. Pure functions of an explicit "now".
//! - [`models`]: todos, candidate lists and validated request types
//! - [`wheel`]: weighted random draws from a candidate list
//! - [`db`]: SQLite persistence, scoped per owner
//! - [`agenda`]: the async [`Agenda`] facade used by the CLI and MCP server
//! - [`display`]: markdown `Display` implementations and result wrappers
//!
//! # Quick Start
//!
//! ```rust
//! use horizon_core::{params::CreateTodo, AgendaBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let agenda = AgendaBuilder::new()
//!     .with_database_path(Some("horizon.db"))
//!     .build()
//!     .await?;
//!
//! let todo = agenda
//!     .create_todo(
//!         "ada",
//!         &CreateTodo {
//!             title: "Deep work".to_string(),
//!             start_at: Some("2030-01-01T09:00:00Z".to_string()),
//!             end_at: Some("2030-01-01T11:00:00Z".to_string()),
//!             ..CreateTodo::default()
//!         },
//!     )
//!     .await?;
//! println!("Created todo: {}", todo);
//!
//! let countdown = agenda
//!     .countdown("ada", &horizon_core::params::Countdown { id: todo.id, at: None })
//!     .await?;
//! println!("{}", countdown.metrics);
//! # Ok(())
//! # }
//! ```

pub mod agenda;
pub mod db;
pub mod display;
pub mod error;
pub mod lifecycle;
pub mod models;
pub mod params;
pub mod wheel;

// Re-export commonly used types
pub use agenda::{Agenda, AgendaBuilder};
pub use db::Database;
pub use display::{
    CreateResult, DeleteResult, ListSummaries, OperationStatus, TodoCountdown, Todos,
    UpdateResult,
};
pub use error::{AgendaError, Result};
pub use lifecycle::{
    resolve_status, CountdownMetrics, PhaseEdge, PhaseTracker, Window, WindowPolicy,
};
pub use models::{
    Candidate, CandidateList, ListSummary, Phase, Todo, TodoFilter, TodoStatus, WheelDraw,
};
pub use params::{AddCandidate, Countdown, CreateList, CreateTodo, Id, ListTodos, UpdateTodo};
