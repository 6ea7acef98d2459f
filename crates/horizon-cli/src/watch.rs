//! Countdown polling for `hz todo watch`.
//!
//! Each tick lists the owner's todos, feeds their countdowns to a
//! [`PhaseTracker`] and refreshes the todos whose phase moved into
//! `ACTIVE` or `OVERDUE`, so their stored status follows the clock.
//!
//! Refreshes are edge-triggered. The first poll only records each todo's
//! current phase, so a todo that is already `ACTIVE` when the watch starts
//! keeps its stored status until its next phase change. Run
//! `hz todo refresh <id>` to re-resolve it right away.

use std::{fmt::Write as _, time::Duration};

use anyhow::{Context, Result};
use horizon_core::{
    display::OperationStatus,
    params::{Id, ListTodos},
    Agenda, CountdownMetrics, PhaseTracker, Todo,
};
use log::{debug, info};
use tokio::time::{self, MissedTickBehavior};

use crate::renderer::TerminalRenderer;

/// Polls until Ctrl-C, or until `ticks` polls have run.
pub async fn run(
    agenda: &Agenda,
    owner: &str,
    renderer: &TerminalRenderer,
    period: Duration,
    ticks: Option<u64>,
) -> Result<()> {
    let mut tracker = PhaseTracker::new();
    let mut interval = time::interval(period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut polls = 0u64;

    info!("Watching todos of '{owner}' every {period:?}");

    loop {
        tokio::select! {
            _ = interval.tick() => {}
            _ = tokio::signal::ctrl_c() => {
                info!("Received Ctrl-C, stopping watch");
                break;
            }
        }

        poll(agenda, owner, renderer, &mut tracker).await?;

        polls += 1;
        if ticks.is_some_and(|limit| polls >= limit) {
            debug!("Stopping watch after {polls} polls");
            break;
        }
    }

    Ok(())
}

async fn poll(
    agenda: &Agenda,
    owner: &str,
    renderer: &TerminalRenderer,
    tracker: &mut PhaseTracker,
) -> Result<()> {
    let now = agenda.now();
    let todos = agenda
        .list_todos(owner, &ListTodos::default())
        .await
        .context("Failed to list todos")?;

    for edge in tracker.observe_all(todos.as_slice(), now) {
        info!(
            "Todo {} moved from {} to {}",
            edge.todo_id, edge.from, edge.to
        );
        if !edge.needs_refresh() {
            continue;
        }

        let before = todos.iter().find(|t| t.id == edge.todo_id).map(|t| t.status);
        let todo = agenda
            .refresh_todo(owner, &Id { id: edge.todo_id })
            .await
            .with_context(|| format!("Failed to refresh todo {}", edge.todo_id))?;
        if before != Some(todo.status) {
            renderer.show(&OperationStatus::success(format!(
                "Todo {} '{}' is now {}",
                todo.id, todo.title, todo.status
            )));
        }
    }

    renderer.render(&board(todos.as_slice(), now));
    Ok(())
}

/// Markdown board with one countdown line per todo.
fn board(todos: &[Todo], now: jiff::Timestamp) -> String {
    if todos.is_empty() {
        return "No todos to watch.\n".to_string();
    }

    let mut out = String::new();
    for todo in todos {
        let metrics = CountdownMetrics::for_todo(todo, now);
        // Writing to a String cannot fail
        let _ = writeln!(out, "- {}. {}: {}", todo.id, todo.title, metrics);
    }
    out
}
