//! High-level agenda API for todos and candidate lists.
//!
//! [`Agenda`] is the async facade every interface talks to. It owns the
//! database location, the [`WindowPolicy`] used to normalize todo windows
//! and the clock. Each operation samples the clock exactly once and hands
//! that instant to the pure functions in [`crate::lifecycle`], so a single
//! request never observes two different "now" values.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   Interfaces    │    │     Agenda      │    │    Database     │
//! │   (CLI, MCP)    │───▶│ (todo_ops,      │───▶│   (via db/)     │
//! │                 │    │  list_ops)      │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! SQLite work is blocking and runs on `tokio::task::spawn_blocking` with a
//! fresh connection per operation.
//!
//! Every operation takes the owner (an opaque user id) first. Records owned
//! by somebody else behave exactly like missing ones.
//!
//! # Examples
//!
//! ```rust
//! use horizon_core::{params::CreateTodo, AgendaBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let agenda = AgendaBuilder::new()
//!     .with_database_path(Some("/tmp/horizon-example.db"))
//!     .build()
//!     .await?;
//!
//! let todo = agenda
//!     .create_todo(
//!         "ada",
//!         &CreateTodo {
//!             title: "Review pull requests".to_string(),
//!             ..CreateTodo::default()
//!         },
//!     )
//!     .await?;
//! println!("{todo}");
//! # Ok(())
//! # }
//! ```

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use jiff::Timestamp;
use tokio::task;

use crate::{
    db::Database,
    error::{join_error, Result},
    lifecycle::WindowPolicy,
};

pub mod builder;
pub mod list_ops;
pub mod todo_ops;


pub use builder::AgendaBuilder;

/// Source of the current instant.
pub type Clock = Arc<dyn Fn() -> Timestamp + Send + Sync>;

/// Main agenda interface for managing todos and candidate lists.
#[derive(Clone)]
pub struct Agenda {
    pub(crate) db_path: PathBuf,
    pub(crate) policy: WindowPolicy,
    clock: Clock,
}

impl Agenda {
    pub(crate) fn new(db_path: PathBuf, policy: WindowPolicy, clock: Clock) -> Self {
        Self {
            db_path,
            policy,
            clock,
        }
    }

    /// Samples the clock.
    pub fn now(&self) -> Timestamp {
        (self.clock)()
    }

    /// Location of the SQLite database file.
    pub fn database_path(&self) -> &Path {
        &self.db_path
    }

    /// The window policy applied on create and update.
    pub fn window_policy(&self) -> &WindowPolicy {
        &self.policy
    }

    /// Runs `op` against a fresh connection on the blocking pool.
    async fn with_database<T, F>(&self, op: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut Database) -> Result<T> + Send + 'static,
    {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            op(&mut db)
        })
        .await
        .map_err(join_error)?
    }
}

impl std::fmt::Debug for Agenda {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Agenda")
            .field("db_path", &self.db_path)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}
