//! Todo CRUD operations and queries.

use jiff::Timestamp;
use rusqlite::{params, types::Type, OptionalExtension, Row};

use crate::{
    error::{AgendaError, DatabaseResultExt, Result},
    lifecycle::{resolve_status, WindowPolicy},
    models::{NewTodo, Todo, TodoChanges, TodoFilter, TodoStatus},
};

const INSERT_TODO_SQL: &str = "INSERT INTO todos (user_id, title, description, status, start_at, end_at, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)";
const SELECT_TODO_SQL: &str = "SELECT id, user_id, title, description, status, start_at, end_at, created_at, updated_at FROM todos WHERE id = ?1 AND user_id = ?2";
const SELECT_TODOS_SQL: &str = "SELECT id, user_id, title, description, status, start_at, end_at, created_at, updated_at FROM todos WHERE user_id = ?";
const UPDATE_TODO_SQL: &str = "UPDATE todos SET title = ?1, description = ?2, status = ?3, start_at = ?4, end_at = ?5, updated_at = ?6 WHERE id = ?7 AND user_id = ?8";
const DELETE_TODO_SQL: &str = "DELETE FROM todos WHERE id = ?1 AND user_id = ?2";

/// Reads an RFC 3339 timestamp column.
pub(super) fn timestamp_column(row: &Row, idx: usize) -> rusqlite::Result<Timestamp> {
    row.get::<_, String>(idx)?
        .parse::<Timestamp>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

impl super::Database {
    /// Helper function to construct a Todo from a database row
    fn build_todo_from_row(row: &Row) -> rusqlite::Result<Todo> {
        let status_str: String = row.get(4)?;
        let status = status_str.parse::<TodoStatus>().map_err(|_| {
            rusqlite::Error::FromSqlConversionFailure(
                4,
                Type::Text,
                format!("Invalid status: {status_str}").into(),
            )
        })?;

        Ok(Todo {
            id: row.get::<_, i64>(0)? as u64,
            user_id: row.get(1)?,
            title: row.get(2)?,
            description: row.get(3)?,
            status,
            start_at: timestamp_column(row, 5)?,
            end_at: timestamp_column(row, 6)?,
            created_at: timestamp_column(row, 7)?,
            updated_at: timestamp_column(row, 8)?,
        })
    }

    /// Creates a todo for `user_id`, normalizing its window and resolving
    /// its status at `now`.
    pub fn create_todo(
        &mut self,
        user_id: &str,
        request: &NewTodo,
        policy: &WindowPolicy,
        now: Timestamp,
    ) -> Result<Todo> {
        let window = policy.normalize_new(request.start_at, request.end_at, now)?;
        let status = resolve_status(request.status, &window, now);

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let now_str = now.to_string();
        tx.execute(
            INSERT_TODO_SQL,
            params![
                user_id,
                &request.title,
                request.description.as_deref(),
                status.as_str(),
                window.start_at.to_string(),
                window.end_at.to_string(),
                &now_str,
                &now_str
            ],
        )
        .db_context("Failed to insert todo")?;

        let id = tx.last_insert_rowid() as u64;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(Todo {
            id,
            user_id: user_id.to_string(),
            title: request.title.clone(),
            description: request.description.clone(),
            status,
            start_at: window.start_at,
            end_at: window.end_at,
            created_at: now,
            updated_at: now,
        })
    }

    /// Retrieves a todo owned by `user_id`.
    pub fn get_todo(&self, user_id: &str, todo_id: u64) -> Result<Option<Todo>> {
        self.connection
            .query_row(
                SELECT_TODO_SQL,
                params![todo_id as i64, user_id],
                Self::build_todo_from_row,
            )
            .optional()
            .db_context("Failed to query todo")
    }

    /// Lists the todos of `user_id`, ordered by window start.
    pub fn list_todos(&self, user_id: &str, filter: &TodoFilter) -> Result<Vec<Todo>> {
        let mut query = SELECT_TODOS_SQL.to_string();
        let mut params_vec: Vec<Box<dyn rusqlite::ToSql>> = vec![Box::new(user_id.to_string())];

        if let Some(status) = filter.status {
            query.push_str(" AND status = ?");
            params_vec.push(Box::new(status.as_str()));
        }

        if let Some(ref text) = filter.title_contains {
            query.push_str(" AND title LIKE ? ESCAPE '\\'");
            params_vec.push(Box::new(format!("%{}%", escape_like(text))));
        }

        let mut stmt = self
            .connection
            .prepare(&query)
            .db_context("Failed to prepare query")?;

        let params_refs: Vec<&dyn rusqlite::ToSql> = params_vec.iter().map(|p| p.as_ref()).collect();
        let mut todos = stmt
            .query_map(params_refs.as_slice(), Self::build_todo_from_row)
            .db_context("Failed to query todos")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch todos")?;

        // Text ordering of RFC 3339 strings breaks on fractional seconds
        todos.sort_by_key(|t| (t.start_at, t.id));
        Ok(todos)
    }

    /// Applies a partial update to a todo.
    ///
    /// The stored window is the basis for normalization and the stored
    /// status stands in for a missing requested status, so an update
    /// without changes still re-resolves the status at `now`. Nothing is
    /// written when the merged todo equals the stored one.
    pub fn update_todo(
        &mut self,
        user_id: &str,
        todo_id: u64,
        changes: &TodoChanges,
        policy: &WindowPolicy,
        now: Timestamp,
    ) -> Result<Todo> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let current = tx
            .query_row(
                SELECT_TODO_SQL,
                params![todo_id as i64, user_id],
                Self::build_todo_from_row,
            )
            .optional()
            .db_context("Failed to get current todo")?
            .ok_or(AgendaError::TodoNotFound { id: todo_id })?;

        let window = policy.normalize_update(current.window(), changes.start_at, changes.end_at, now)?;
        let requested = changes.status.unwrap_or(current.status);
        let status = resolve_status(Some(requested), &window, now);
        if status != requested {
            log::debug!(
                "Todo {todo_id}: requested status {requested} resolved to {status} at {now}"
            );
        }

        let updated = Todo {
            title: changes.title.clone().unwrap_or_else(|| current.title.clone()),
            description: match &changes.description {
                Some(description) => description.clone(),
                None => current.description.clone(),
            },
            status,
            start_at: window.start_at,
            end_at: window.end_at,
            updated_at: now,
            ..current.clone()
        };

        if updated.title == current.title
            && updated.description == current.description
            && updated.status == current.status
            && updated.window() == current.window()
        {
            return Ok(current);
        }

        tx.execute(
            UPDATE_TODO_SQL,
            params![
                &updated.title,
                &updated.description,
                updated.status.as_str(),
                updated.start_at.to_string(),
                updated.end_at.to_string(),
                now.to_string(),
                todo_id as i64,
                user_id
            ],
        )
        .db_context("Failed to update todo")?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(updated)
    }

    /// Deletes a todo and returns it.
    pub fn delete_todo(&mut self, user_id: &str, todo_id: u64) -> Result<Todo> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let todo = tx
            .query_row(
                SELECT_TODO_SQL,
                params![todo_id as i64, user_id],
                Self::build_todo_from_row,
            )
            .optional()
            .db_context("Failed to query todo")?
            .ok_or(AgendaError::TodoNotFound { id: todo_id })?;

        tx.execute(DELETE_TODO_SQL, params![todo_id as i64, user_id])
            .db_context("Failed to delete todo")?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(todo)
    }
}

/// Escapes LIKE wildcards so a search matches its text literally.
fn escape_like(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
