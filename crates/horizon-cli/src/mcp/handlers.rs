//! MCP tool handlers implementation

use std::sync::Arc;

use horizon_core::{
    display::{CreateResult, DeleteResult, UpdateResult},
    params as core, Agenda, AgendaError, TodoStatus,
};
use log::debug;
use rmcp::{
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content},
    ErrorData,
};
use schemars::JsonSchema;
use serde::Deserialize;

use super::errors::to_mcp_error;

/// Generic MCP wrapper for core parameter types
///
/// The transparent serde container passes JSON straight through to the
/// wrapped core type while the schema is taken from the core type's
/// `schema` feature derive.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct McpParams<T>(T)
where
    T: JsonSchema;

impl<T> JsonSchema for McpParams<T>
where
    T: JsonSchema,
{
    fn schema_name() -> std::borrow::Cow<'static, str> {
        T::schema_name()
    }

    fn json_schema(g: &mut schemars::SchemaGenerator) -> schemars::Schema {
        T::json_schema(g)
    }
}

impl<T> AsRef<T> for McpParams<T>
where
    T: JsonSchema,
{
    fn as_ref(&self) -> &T {
        &self.0
    }
}

pub type Id = McpParams<core::Id>;
pub type CreateTodo = McpParams<core::CreateTodo>;
pub type UpdateTodo = McpParams<core::UpdateTodo>;
pub type ListTodos = McpParams<core::ListTodos>;
pub type Countdown = McpParams<core::Countdown>;
pub type CreateList = McpParams<core::CreateList>;
pub type AddCandidate = McpParams<core::AddCandidate>;

pub type McpResult = Result<CallToolResult, ErrorData>;

fn text(markdown: impl ToString) -> McpResult {
    Ok(CallToolResult::success(vec![Content::text(
        markdown.to_string(),
    )]))
}

/// Handler implementations for the MCP server, acting for a single owner
pub struct McpHandlers {
    agenda: Arc<Agenda>,
    owner: Arc<str>,
}

impl McpHandlers {
    pub fn new(agenda: Arc<Agenda>, owner: Arc<str>) -> Self {
        Self { agenda, owner }
    }

    pub async fn create_todo(&self, Parameters(params): Parameters<CreateTodo>) -> McpResult {
        debug!("create_todo: {:?}", params);

        let todo = self
            .agenda
            .create_todo(&self.owner, params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to create todo", &e))?;

        text(CreateResult::new(todo))
    }

    pub async fn list_todos(&self, Parameters(params): Parameters<ListTodos>) -> McpResult {
        debug!("list_todos: {:?}", params);

        let inner_params = params.as_ref();
        let todos = self
            .agenda
            .list_todos(&self.owner, inner_params)
            .await
            .map_err(|e| to_mcp_error("Failed to list todos", &e))?;

        let title = match &inner_params.status {
            Some(status) => format!("Todos with status {status}"),
            None => "Todos".to_string(),
        };
        text(format!("# {title}\n\n{todos}"))
    }

    pub async fn show_todo(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("show_todo: {:?}", params);

        let id = params.as_ref().id;
        let todo = self
            .agenda
            .get_todo(&self.owner, params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to get todo", &e))?
            .ok_or_else(|| {
                to_mcp_error("Failed to get todo", &AgendaError::TodoNotFound { id })
            })?;

        text(todo)
    }

    pub async fn update_todo(&self, Parameters(params): Parameters<UpdateTodo>) -> McpResult {
        debug!("update_todo: {:?}", params);

        let inner_params = params.as_ref();
        let todo = self
            .agenda
            .update_todo(&self.owner, inner_params)
            .await
            .map_err(|e| to_mcp_error("Failed to update todo", &e))?;

        let mut changes = Vec::new();
        if let Some(requested) = &inner_params.status {
            if requested.parse::<TodoStatus>().ok() != Some(todo.status) {
                changes.push(format!(
                    "Requested status {requested} was resolved to {} for the current time",
                    todo.status
                ));
            }
        }

        text(UpdateResult::with_changes(todo, changes))
    }

    pub async fn delete_todo(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("delete_todo: {:?}", params);

        let todo = self
            .agenda
            .delete_todo(&self.owner, params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to delete todo", &e))?;

        text(DeleteResult::new(todo))
    }

    pub async fn countdown(&self, Parameters(params): Parameters<Countdown>) -> McpResult {
        debug!("countdown: {:?}", params);

        let countdown = self
            .agenda
            .countdown(&self.owner, params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to compute countdown", &e))?;

        text(countdown)
    }

    pub async fn create_list(&self, Parameters(params): Parameters<CreateList>) -> McpResult {
        debug!("create_list: {:?}", params);

        let list = self
            .agenda
            .create_list(&self.owner, params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to create list", &e))?;

        text(CreateResult::new(list))
    }

    pub async fn list_lists(&self) -> McpResult {
        debug!("list_lists");

        let lists = self
            .agenda
            .list_lists(&self.owner)
            .await
            .map_err(|e| to_mcp_error("Failed to list lists", &e))?;

        text(format!("# Candidate Lists\n\n{lists}"))
    }

    pub async fn show_list(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("show_list: {:?}", params);

        let id = params.as_ref().id;
        let list = self
            .agenda
            .get_list(&self.owner, params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to get list", &e))?
            .ok_or_else(|| {
                to_mcp_error("Failed to get list", &AgendaError::ListNotFound { id })
            })?;

        text(list)
    }

    pub async fn delete_list(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("delete_list: {:?}", params);

        let list = self
            .agenda
            .delete_list(&self.owner, params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to delete list", &e))?;

        text(DeleteResult::new(list))
    }

    pub async fn add_candidate(&self, Parameters(params): Parameters<AddCandidate>) -> McpResult {
        debug!("add_candidate: {:?}", params);

        let candidate = self
            .agenda
            .add_candidate(&self.owner, params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to add candidate", &e))?;

        text(CreateResult::new(candidate))
    }

    pub async fn remove_candidate(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("remove_candidate: {:?}", params);

        let candidate = self
            .agenda
            .remove_candidate(&self.owner, params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to remove candidate", &e))?;

        text(DeleteResult::new(candidate))
    }

    pub async fn spin_wheel(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("spin_wheel: {:?}", params);

        let draw = self
            .agenda
            .spin_wheel(&self.owner, params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to spin the wheel", &e))?;

        text(draw)
    }
}
