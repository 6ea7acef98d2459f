//! Horizon CLI Application
//!
//! Command-line interface and MCP server for time-boxed todos.

mod args;
mod cli;
mod mcp;
mod renderer;
mod watch;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use horizon_core::{params::ListTodos, AgendaBuilder};
use log::info;
use mcp::{run_stdio_server, HorizonMcpServer};
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        user,
        command,
    } = Args::parse();

    let agenda = AgendaBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize agenda")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Horizon started for '{user}'");

    match command {
        Some(Todo { command }) => {
            Cli::new(agenda, renderer, user)
                .handle_todo_command(command)
                .await
        }
        Some(List { command }) => {
            Cli::new(agenda, renderer, user)
                .handle_list_command(command)
                .await
        }
        Some(Serve) => {
            info!("Starting Horizon MCP server");
            run_stdio_server(HorizonMcpServer::new(agenda, &user))
                .await
                .context("MCP server failed")
        }
        None => {
            Cli::new(agenda, renderer, user)
                .list_todos(&ListTodos::default())
                .await
        }
    }
}
