//! MCP server implementation for Horizon
//!
//! Exposes the agenda of a single owner as Model Context Protocol tools
//! over stdio.

use std::sync::Arc;

use anyhow::Result;
use horizon_core::Agenda;
use log::{debug, error, info};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ServerHandler,
};
use tokio::signal::unix::{signal, SignalKind};

pub mod errors;
pub mod handlers;

pub use handlers::{
    AddCandidate, Countdown, CreateList, CreateTodo, Id, ListTodos, McpResult, UpdateTodo,
};

/// MCP server for Horizon
#[derive(Clone)]
pub struct HorizonMcpServer {
    agenda: Arc<Agenda>,
    owner: Arc<str>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl HorizonMcpServer {
    /// Create a new Horizon MCP server acting for `owner`
    pub fn new(agenda: Agenda, owner: &str) -> Self {
        Self {
            agenda: Arc::new(agenda),
            owner: Arc::from(owner),
            tool_router: Self::tool_router(),
        }
    }

    fn handlers(&self) -> handlers::McpHandlers {
        handlers::McpHandlers::new(self.agenda.clone(), self.owner.clone())
    }

    #[tool(
        name = "create_todo",
        description = "Create a time-boxed todo. Requires a title. Optional startAt/endAt are ISO-8601 instants (e.g. 2030-01-31T09:00:00Z): a start in the past is moved to now, a missing end defaults to 25 minutes after the start, and windows shorter than 5 minutes are stretched. Optional status (NOT_STARTED, IN_PROGRESS, COMPLETED, FAILED) is resolved against the current time; a todo whose window contains now starts as IN_PROGRESS."
    )]
    async fn create_todo(&self, params: Parameters<CreateTodo>) -> McpResult {
        self.handlers().create_todo(params).await
    }

    #[tool(
        name = "list_todos",
        description = "List todos ordered by start time. Optionally filter by status (NOT_STARTED, IN_PROGRESS, COMPLETED, FAILED) and by text contained in the title (search)."
    )]
    async fn list_todos(&self, params: Parameters<ListTodos>) -> McpResult {
        self.handlers().list_todos(params).await
    }

    #[tool(
        name = "show_todo",
        description = "Show a single todo with its status, window and description."
    )]
    async fn show_todo(&self, params: Parameters<Id>) -> McpResult {
        self.handlers().show_todo(params).await
    }

    #[tool(
        name = "update_todo",
        description = "Update a todo by id. Omitted fields keep their value; an empty description clears it. A new startAt in the past is moved to now and the end is stretched to keep at least 5 minutes. The status is resolved again against the current time even when not supplied: an IN_PROGRESS todo past its end becomes FAILED. COMPLETED and FAILED are never overridden."
    )]
    async fn update_todo(&self, params: Parameters<UpdateTodo>) -> McpResult {
        self.handlers().update_todo(params).await
    }

    #[tool(
        name = "delete_todo",
        description = "Permanently delete a todo by id."
    )]
    async fn delete_todo(&self, params: Parameters<Id>) -> McpResult {
        self.handlers().delete_todo(params).await
    }

    #[tool(
        name = "countdown",
        description = "Compute the countdown of a todo: phase (UPCOMING, ACTIVE, OVERDUE, DONE) and time until its start and end. Optional 'at' computes it for another ISO-8601 instant instead of now. Read-only."
    )]
    async fn countdown(&self, params: Parameters<Countdown>) -> McpResult {
        self.handlers().countdown(params).await
    }

    #[tool(
        name = "create_list",
        description = "Create a named candidate list for the decision wheel. Add entries with add_candidate."
    )]
    async fn create_list(&self, params: Parameters<CreateList>) -> McpResult {
        self.handlers().create_list(params).await
    }

    #[tool(
        name = "list_lists",
        description = "List all candidate lists with their candidate counts and total weights."
    )]
    async fn list_lists(&self) -> McpResult {
        self.handlers().list_lists().await
    }

    #[tool(
        name = "show_list",
        description = "Show a candidate list with all of its candidates and their weights."
    )]
    async fn show_list(&self, params: Parameters<Id>) -> McpResult {
        self.handlers().show_list(params).await
    }

    #[tool(
        name = "delete_list",
        description = "Permanently delete a candidate list and all of its candidates."
    )]
    async fn delete_list(&self, params: Parameters<Id>) -> McpResult {
        self.handlers().delete_list(params).await
    }

    #[tool(
        name = "add_candidate",
        description = "Add a candidate to a list. Requires listId and label; optional weight (at least 1, default 1) sets how likely it is to be drawn relative to the others."
    )]
    async fn add_candidate(&self, params: Parameters<AddCandidate>) -> McpResult {
        self.handlers().add_candidate(params).await
    }

    #[tool(
        name = "remove_candidate",
        description = "Remove a candidate from its list by the candidate's id."
    )]
    async fn remove_candidate(&self, params: Parameters<Id>) -> McpResult {
        self.handlers().remove_candidate(params).await
    }

    #[tool(
        name = "spin_wheel",
        description = "Spin the wheel of a candidate list: draws one candidate at random with probability proportional to its weight. Fails on an empty list."
    )]
    async fn spin_wheel(&self, params: Parameters<Id>) -> McpResult {
        self.handlers().spin_wheel(params).await
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for HorizonMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "horizon".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(r#"Horizon manages time-boxed todos and weighted decision wheels.

## Todos
- Every todo has a window (startAt, endAt) of at least 5 minutes; a new todo without times runs for 25 minutes from now.
- Status is one of NOT_STARTED, IN_PROGRESS, COMPLETED, FAILED and is resolved against the clock on every create and update:
  - COMPLETED and FAILED are final and never changed automatically.
  - IN_PROGRESS becomes FAILED once the end has passed.
  - NOT_STARTED becomes IN_PROGRESS while now is inside the window.
- Use `countdown` to see whether a todo is UPCOMING, ACTIVE, OVERDUE or DONE.

## Decision wheel
1. Create a list with `create_list`
2. Add options with `add_candidate` (higher weight = more likely)
3. Draw one with `spin_wheel`

## Tool Categories
- **Todos**: create_todo, list_todos, show_todo, update_todo, delete_todo, countdown
- **Wheel**: create_list, list_lists, show_list, delete_list, add_candidate, remove_candidate, spin_wheel"#.to_string()),
        }
    }
}

/// Serves MCP over stdin/stdout until the client disconnects or a
/// SIGINT/SIGTERM arrives.
pub async fn run_stdio_server(server: HorizonMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    debug!(
        "Serving {} tools for '{}' on stdio",
        server.tool_router.list_all().len(),
        server.owner
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("Failed to start MCP session: {e:?}");
    })?;

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(reason) => info!("MCP session ended: {reason:?}"),
                Err(e) => error!("MCP session failed: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("SIGINT received, stopping MCP server");
        }
        _ = sigterm.recv() => {
            info!("SIGTERM received, stopping MCP server");
        }
    }

    Ok(())
}
