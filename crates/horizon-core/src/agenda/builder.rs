//! Builder for creating and configuring Agenda instances.

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use jiff::Timestamp;
use tokio::task;

use super::{Agenda, Clock};
use crate::{
    db::Database,
    error::{join_error, AgendaError, Result},
    lifecycle::WindowPolicy,
};

/// Builder for creating and configuring Agenda instances.
#[derive(Clone)]
pub struct AgendaBuilder {
    database_path: Option<PathBuf>,
    policy: WindowPolicy,
    clock: Option<Clock>,
}

impl AgendaBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            database_path: None,
            policy: WindowPolicy::default(),
            clock: None,
        }
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/horizon/horizon.db` or `~/.local/share/horizon/horizon.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Overrides the minimum and default window durations.
    pub fn with_window_policy(mut self, policy: WindowPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Replaces the system clock, typically with a fixed instant in tests.
    pub fn with_clock<F>(mut self, clock: F) -> Self
    where
        F: Fn() -> Timestamp + Send + Sync + 'static,
    {
        self.clock = Some(Arc::new(clock));
        self
    }

    /// Builds the configured agenda instance.
    ///
    /// # Errors
    ///
    /// Returns `AgendaError::Configuration` if the window policy is invalid
    /// Returns `AgendaError::FileSystem` if the database path is invalid
    /// Returns `AgendaError::Database` if database initialization fails
    pub async fn build(self) -> Result<Agenda> {
        self.policy.validate()?;

        let db_path = if let Some(path) = self.database_path {
            path
        } else {
            Self::default_database_path()?
        };

        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| AgendaError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let db_path_clone = db_path.clone();
        task::spawn_blocking(move || {
            let _db = Database::new(&db_path_clone)?;
            Ok::<(), AgendaError>(())
        })
        .await
        .map_err(join_error)??;

        log::debug!("Agenda database ready at {}", db_path.display());

        let clock: Clock = match self.clock {
            Some(clock) => clock,
            None => Arc::new(Timestamp::now),
        };
        Ok(Agenda::new(db_path, self.policy, clock))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("horizon")
            .place_data_file("horizon.db")
            .map_err(|e| AgendaError::XdgDirectory(e.to_string()))
    }
}

impl Default for AgendaBuilder {
    fn default() -> Self {
        Self::new()
    }
}
