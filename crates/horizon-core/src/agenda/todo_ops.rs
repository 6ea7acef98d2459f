//! Todo operations for the Agenda.

use super::Agenda;
use crate::{
    display::{TodoCountdown, Todos},
    error::{AgendaError, Result},
    lifecycle::{parse_supplied, CountdownMetrics},
    models::{NewTodo, Todo, TodoChanges, TodoFilter},
    params::{parse_status, Countdown, CreateTodo, Id, ListTodos, UpdateTodo},
};

impl Agenda {
    /// Creates a todo for `owner`.
    ///
    /// The window is normalized (start clamped to now, default and minimum
    /// durations applied) and the status resolved before anything is
    /// stored. Input is validated first, so a malformed timestamp never
    /// reaches the database.
    pub async fn create_todo(&self, owner: &str, params: &CreateTodo) -> Result<Todo> {
        let request = NewTodo::try_from(params)?;
        let now = self.now();
        let policy = self.policy;
        let owner = owner.to_string();

        self.with_database(move |db| db.create_todo(&owner, &request, &policy, now))
            .await
    }

    /// Retrieves a single todo by its ID.
    pub async fn get_todo(&self, owner: &str, params: &Id) -> Result<Option<Todo>> {
        let owner = owner.to_string();
        let todo_id = params.id;

        self.with_database(move |db| db.get_todo(&owner, todo_id))
            .await
    }

    /// Lists the todos of `owner` ordered by start time.
    pub async fn list_todos(&self, owner: &str, params: &ListTodos) -> Result<Todos> {
        let filter = TodoFilter {
            status: parse_status(params.status.as_deref())?,
            title_contains: params
                .search
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from),
        };
        let owner = owner.to_string();

        let todos = self
            .with_database(move |db| db.list_todos(&owner, &filter))
            .await?;

        Ok(Todos(todos))
    }

    /// Applies a partial update to a todo.
    ///
    /// Missing fields keep their stored values. The status is resolved
    /// again even when none is supplied, using the stored status as the
    /// requested one, so an expired `IN_PROGRESS` todo becomes `FAILED`.
    pub async fn update_todo(&self, owner: &str, params: &UpdateTodo) -> Result<Todo> {
        let changes = TodoChanges::try_from(params)?;
        self.apply_changes(owner, params.id, changes).await
    }

    /// Re-resolves the status of a stored todo without changing any field.
    pub async fn refresh_todo(&self, owner: &str, params: &Id) -> Result<Todo> {
        self.apply_changes(owner, params.id, TodoChanges::default())
            .await
    }

    async fn apply_changes(&self, owner: &str, todo_id: u64, changes: TodoChanges) -> Result<Todo> {
        let now = self.now();
        let policy = self.policy;
        let owner = owner.to_string();

        self.with_database(move |db| db.update_todo(&owner, todo_id, &changes, &policy, now))
            .await
    }

    /// Deletes a todo and returns it.
    pub async fn delete_todo(&self, owner: &str, params: &Id) -> Result<Todo> {
        let owner = owner.to_string();
        let todo_id = params.id;

        self.with_database(move |db| db.delete_todo(&owner, todo_id))
            .await
    }

    /// Computes countdown metrics for a todo at `params.at`, or now.
    ///
    /// This is a read-only projection: the stored status is used as-is.
    pub async fn countdown(&self, owner: &str, params: &Countdown) -> Result<TodoCountdown> {
        let at = match parse_supplied("at", params.at.as_deref())? {
            Some(at) => at,
            None => self.now(),
        };

        let todo = self
            .get_todo(owner, &Id { id: params.id })
            .await?
            .ok_or(AgendaError::TodoNotFound { id: params.id })?;

        let metrics = CountdownMetrics::for_todo(&todo, at);
        Ok(TodoCountdown { todo, metrics, at })
    }
}
