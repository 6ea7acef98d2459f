//! Command-line argument structures and command handlers
//!
//! Argument structs carry the clap derives and convert into the core
//! parameter types with `From`, so the core stays free of CLI concerns:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Agenda
//! ```

use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use horizon_core::{
    display::{CreateResult, DeleteResult, OperationStatus, UpdateResult},
    params::{AddCandidate, Countdown, CreateList, CreateTodo, Id, ListTodos, UpdateTodo},
    Agenda, AgendaError, TodoStatus,
};

use crate::{renderer::TerminalRenderer, watch};

// ============================================================================
// Todo arguments
// ============================================================================

/// Create a new todo
///
/// Times are ISO-8601 instants such as 2030-01-31T09:00:00Z. A start in the
/// past is moved to now; without an end the todo lasts 25 minutes; windows
/// shorter than 5 minutes are stretched.
#[derive(Args)]
pub struct CreateTodoArgs {
    /// Title of the todo
    pub title: String,
    #[arg(short, long, help = "Optional free-form description")]
    pub description: Option<String>,
    #[arg(long, help = "Start instant (defaults to now)")]
    pub start: Option<String>,
    #[arg(long, help = "End instant (defaults to 25 minutes after the start)")]
    pub end: Option<String>,
    #[arg(
        long,
        help = "Requested status: not-started, in-progress, completed or failed"
    )]
    pub status: Option<String>,
}

impl From<CreateTodoArgs> for CreateTodo {
    fn from(val: CreateTodoArgs) -> Self {
        CreateTodo {
            title: val.title,
            description: val.description,
            start_at: val.start,
            end_at: val.end,
            status: val.status,
        }
    }
}

/// List todos ordered by start time
#[derive(Args)]
pub struct ListTodosArgs {
    #[arg(long, help = "Only show todos with this status")]
    pub status: Option<String>,
    #[arg(long, help = "Only show todos whose title contains this text")]
    pub search: Option<String>,
}

impl From<ListTodosArgs> for ListTodos {
    fn from(val: ListTodosArgs) -> Self {
        ListTodos {
            status: val.status,
            search: val.search,
        }
    }
}

/// Identify a single todo
#[derive(Args)]
pub struct TodoIdArgs {
    #[arg(help = "Unique identifier of the todo")]
    pub id: u64,
}

impl From<TodoIdArgs> for Id {
    fn from(val: TodoIdArgs) -> Self {
        Id { id: val.id }
    }
}

/// Update fields of an existing todo
///
/// Omitted fields keep their current value. The status is resolved against
/// the clock again on every update.
#[derive(Args)]
pub struct UpdateTodoArgs {
    #[arg(help = "Unique identifier of the todo to update")]
    pub id: u64,
    #[arg(long, help = "New title")]
    pub title: Option<String>,
    #[arg(short, long, help = "New description; pass an empty string to clear it")]
    pub description: Option<String>,
    #[arg(long, help = "New start instant; a past value is moved to now")]
    pub start: Option<String>,
    #[arg(long, help = "New end instant")]
    pub end: Option<String>,
    #[arg(long, help = "Requested status")]
    pub status: Option<String>,
}

impl UpdateTodoArgs {
    /// Human-readable list of the requested changes.
    fn describe_changes(&self) -> Vec<String> {
        let mut changes = Vec::new();
        if let Some(title) = &self.title {
            changes.push(format!("Renamed to '{title}'"));
        }
        match self.description.as_deref().map(str::trim) {
            Some("") => changes.push("Cleared description".to_string()),
            Some(_) => changes.push("Updated description".to_string()),
            None => {}
        }
        if let Some(start) = &self.start {
            changes.push(format!("Requested start {start}"));
        }
        if let Some(end) = &self.end {
            changes.push(format!("Requested end {end}"));
        }
        if let Some(status) = &self.status {
            changes.push(format!("Requested status {status}"));
        }
        changes
    }
}

impl From<UpdateTodoArgs> for UpdateTodo {
    fn from(val: UpdateTodoArgs) -> Self {
        UpdateTodo {
            id: val.id,
            title: val.title,
            description: val.description,
            start_at: val.start,
            end_at: val.end,
            status: val.status,
        }
    }
}

/// Show the countdown of a todo
#[derive(Args)]
pub struct CountdownArgs {
    #[arg(help = "Unique identifier of the todo")]
    pub id: u64,
    #[arg(long, help = "Compute the countdown at this instant instead of now")]
    pub at: Option<String>,
}

impl From<CountdownArgs> for Countdown {
    fn from(val: CountdownArgs) -> Self {
        Countdown {
            id: val.id,
            at: val.at,
        }
    }
}

/// Poll countdowns and refresh todos as they change phase
#[derive(Args)]
pub struct WatchArgs {
    #[arg(long, default_value_t = 1000, help = "Polling interval in milliseconds")]
    pub interval_ms: u64,
    #[arg(long, help = "Stop after this many polls (default: until Ctrl-C)")]
    pub ticks: Option<u64>,
}

#[derive(Subcommand)]
pub enum TodoCommands {
    /// Create a new todo
    #[command(alias = "c")]
    Create(CreateTodoArgs),
    /// List todos ordered by start time
    #[command(aliases = ["l", "ls"])]
    List(ListTodosArgs),
    /// Show details of a todo
    #[command(alias = "s")]
    Show(TodoIdArgs),
    /// Update fields of a todo
    #[command(alias = "u")]
    Update(UpdateTodoArgs),
    /// Delete a todo
    #[command(aliases = ["d", "rm"])]
    Delete(TodoIdArgs),
    /// Re-resolve the status of a todo against the clock
    #[command(alias = "r")]
    Refresh(TodoIdArgs),
    /// Show the countdown of a todo
    #[command(alias = "cd")]
    Countdown(CountdownArgs),
    /// Poll countdowns and refresh todos as they change phase
    #[command(alias = "w")]
    Watch(WatchArgs),
}

// ============================================================================
// List arguments
// ============================================================================

/// Create a new candidate list
#[derive(Args)]
pub struct CreateListArgs {
    /// Name of the list
    pub name: String,
    #[arg(short, long, help = "Optional description")]
    pub description: Option<String>,
}

impl From<CreateListArgs> for CreateList {
    fn from(val: CreateListArgs) -> Self {
        CreateList {
            name: val.name,
            description: val.description,
        }
    }
}

/// Identify a single list
#[derive(Args)]
pub struct ListIdArgs {
    #[arg(help = "Unique identifier of the list")]
    pub id: u64,
}

impl From<ListIdArgs> for Id {
    fn from(val: ListIdArgs) -> Self {
        Id { id: val.id }
    }
}

/// Add a candidate to a list
#[derive(Args)]
pub struct AddCandidateArgs {
    #[arg(help = "Unique identifier of the list")]
    pub list_id: u64,
    /// Text shown on the wheel
    pub label: String,
    #[arg(short, long, help = "Relative likelihood of being drawn (default 1)")]
    pub weight: Option<u32>,
}

impl From<AddCandidateArgs> for AddCandidate {
    fn from(val: AddCandidateArgs) -> Self {
        AddCandidate {
            list_id: val.list_id,
            label: val.label,
            weight: val.weight,
        }
    }
}

/// Remove a candidate from its list
#[derive(Args)]
pub struct RemoveCandidateArgs {
    #[arg(help = "Unique identifier of the candidate")]
    pub id: u64,
}

impl From<RemoveCandidateArgs> for Id {
    fn from(val: RemoveCandidateArgs) -> Self {
        Id { id: val.id }
    }
}

#[derive(Subcommand)]
pub enum ListCommands {
    /// Create a new candidate list
    #[command(alias = "c")]
    Create(CreateListArgs),
    /// List all candidate lists
    #[command(alias = "list")]
    Ls,
    /// Show a list with its candidates
    #[command(alias = "s")]
    Show(ListIdArgs),
    /// Delete a list and its candidates
    #[command(aliases = ["d", "rm"])]
    Delete(ListIdArgs),
    /// Add a candidate to a list
    #[command(alias = "a")]
    Add(AddCandidateArgs),
    /// Remove a candidate from its list
    Remove(RemoveCandidateArgs),
    /// Spin the wheel of a list
    Spin(ListIdArgs),
}

// ============================================================================
// Command handlers
// ============================================================================

/// Executes CLI commands for one owner and renders the results.
pub struct Cli {
    agenda: Agenda,
    renderer: TerminalRenderer,
    owner: String,
}

impl Cli {
    pub fn new(agenda: Agenda, renderer: TerminalRenderer, owner: String) -> Self {
        Self {
            agenda,
            renderer,
            owner,
        }
    }

    pub async fn handle_todo_command(&self, command: TodoCommands) -> Result<()> {
        match command {
            TodoCommands::Create(args) => {
                let todo = self
                    .agenda
                    .create_todo(&self.owner, &args.into())
                    .await
                    .context("Failed to create todo")?;
                self.renderer.show(&CreateResult::new(todo));
            }
            TodoCommands::List(args) => self.list_todos(&args.into()).await?,
            TodoCommands::Show(args) => {
                let id: Id = args.into();
                let todo = self
                    .agenda
                    .get_todo(&self.owner, &id)
                    .await
                    .context("Failed to get todo")?
                    .ok_or(AgendaError::TodoNotFound { id: id.id })?;
                self.renderer.show(&todo);
            }
            TodoCommands::Update(args) => {
                let mut changes = args.describe_changes();
                let requested = args.status.as_deref().and_then(|s| s.parse::<TodoStatus>().ok());
                let todo = self
                    .agenda
                    .update_todo(&self.owner, &args.into())
                    .await
                    .context("Failed to update todo")?;

                if requested.is_some_and(|status| status != todo.status) {
                    changes.push(format!("Status resolved to {}", todo.status));
                }
                self.renderer.show(&UpdateResult::with_changes(todo, changes));
            }
            TodoCommands::Delete(args) => {
                let todo = self
                    .agenda
                    .delete_todo(&self.owner, &args.into())
                    .await
                    .context("Failed to delete todo")?;
                self.renderer.show(&DeleteResult::new(todo));
            }
            TodoCommands::Refresh(args) => {
                let todo = self
                    .agenda
                    .refresh_todo(&self.owner, &args.into())
                    .await
                    .context("Failed to refresh todo")?;
                self.renderer.show(&OperationStatus::success(format!(
                    "Todo {} is {}",
                    todo.id, todo.status
                )));
            }
            TodoCommands::Countdown(args) => {
                let countdown = self
                    .agenda
                    .countdown(&self.owner, &args.into())
                    .await
                    .context("Failed to compute countdown")?;
                self.renderer.show(&countdown);
            }
            TodoCommands::Watch(args) => {
                watch::run(
                    &self.agenda,
                    &self.owner,
                    &self.renderer,
                    Duration::from_millis(args.interval_ms.max(1)),
                    args.ticks,
                )
                .await?;
            }
        }
        Ok(())
    }

    pub async fn handle_list_command(&self, command: ListCommands) -> Result<()> {
        match command {
            ListCommands::Create(args) => {
                let list = self
                    .agenda
                    .create_list(&self.owner, &args.into())
                    .await
                    .context("Failed to create list")?;
                self.renderer.show(&CreateResult::new(list));
            }
            ListCommands::Ls => {
                let lists = self
                    .agenda
                    .list_lists(&self.owner)
                    .await
                    .context("Failed to list lists")?;
                self.renderer.show(&lists);
            }
            ListCommands::Show(args) => {
                let id: Id = args.into();
                let list = self
                    .agenda
                    .get_list(&self.owner, &id)
                    .await
                    .context("Failed to get list")?
                    .ok_or(AgendaError::ListNotFound { id: id.id })?;
                self.renderer.show(&list);
            }
            ListCommands::Delete(args) => {
                let list = self
                    .agenda
                    .delete_list(&self.owner, &args.into())
                    .await
                    .context("Failed to delete list")?;
                self.renderer.show(&DeleteResult::new(list));
            }
            ListCommands::Add(args) => {
                let candidate = self
                    .agenda
                    .add_candidate(&self.owner, &args.into())
                    .await
                    .context("Failed to add candidate")?;
                self.renderer.show(&CreateResult::new(candidate));
            }
            ListCommands::Remove(args) => {
                let candidate = self
                    .agenda
                    .remove_candidate(&self.owner, &args.into())
                    .await
                    .context("Failed to remove candidate")?;
                self.renderer.show(&DeleteResult::new(candidate));
            }
            ListCommands::Spin(args) => {
                let draw = self
                    .agenda
                    .spin_wheel(&self.owner, &args.into())
                    .await
                    .context("Failed to spin the wheel")?;
                self.renderer.show(&draw);
            }
        }
        Ok(())
    }

    pub async fn list_todos(&self, params: &ListTodos) -> Result<()> {
        let todos = self
            .agenda
            .list_todos(&self.owner, params)
            .await
            .context("Failed to list todos")?;
        self.renderer.show(&todos);
        Ok(())
    }
}
