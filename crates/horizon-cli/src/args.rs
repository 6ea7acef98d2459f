use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{ListCommands, TodoCommands};

/// Time-boxed todos and weighted decision wheels
///
/// Horizon keeps every todo inside a start/end window and resolves its
/// status against the clock: a todo entering its window is started, an
/// in-progress todo past its end fails. It runs as a command-line tool or
/// as an MCP (Model Context Protocol) server for AI assistants.
#[derive(Parser)]
#[command(version, about, name = "hz")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/horizon/horizon.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Owner of the todos and lists being managed
    #[arg(long, global = true, default_value = "local")]
    pub user: String,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Horizon CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Manage todos
    #[command(alias = "t")]
    Todo {
        #[command(subcommand)]
        command: TodoCommands,
    },
    /// Manage candidate lists and spin their wheel
    #[command(alias = "l")]
    List {
        #[command(subcommand)]
        command: ListCommands,
    },
    /// Start the MCP server
    Serve,
}
