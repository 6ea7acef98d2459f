//! Edge detection for countdown polling.
//!
//! A poller recomputes [`CountdownMetrics`] on every tick. Side effects such
//! as promoting a todo to in-progress must fire once, when the phase
//! changes, not on every tick spent in the new phase. [`PhaseTracker`]
//! remembers the last phase seen per todo for one polling session.

use std::collections::{BTreeSet, HashMap};

use jiff::Timestamp;

use super::CountdownMetrics;
use crate::models::{Phase, Todo};

/// A phase change observed for one todo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseEdge {
    pub todo_id: u64,
    pub from: Phase,
    pub to: Phase,
    pub metrics: CountdownMetrics,
}

impl PhaseEdge {
    /// Whether the stored status should be re-resolved after this edge.
    ///
    /// Entering the window promotes a not-started todo; leaving it fails an
    /// in-progress one. Both are decided by status resolution.
    pub fn needs_refresh(&self) -> bool {
        matches!(self.to, Phase::Active | Phase::Overdue)
    }
}

/// Last-seen phase per todo, scoped to a single polling session.
#[derive(Debug, Default)]
pub struct PhaseTracker {
    phases: HashMap<u64, Phase>,
    ids: BTreeSet<u64>,
}

impl PhaseTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forgets every recorded phase if the set of tracked todos changed.
    ///
    /// Returns `true` when the tracker was reset.
    pub fn sync<I>(&mut self, ids: I) -> bool
    where
        I: IntoIterator<Item = u64>,
    {
        let ids: BTreeSet<u64> = ids.into_iter().collect();
        if ids == self.ids {
            return false;
        }
        self.phases.clear();
        self.ids = ids;
        true
    }

    /// Records the phase of a todo and reports a change from the previously
    /// recorded phase. The first observation only records a baseline.
    pub fn observe(&mut self, todo_id: u64, metrics: CountdownMetrics) -> Option<PhaseEdge> {
        let previous = self.phases.insert(todo_id, metrics.phase)?;
        (previous != metrics.phase).then_some(PhaseEdge {
            todo_id,
            from: previous,
            to: metrics.phase,
            metrics,
        })
    }

    /// Syncs to `todos` and observes each of them at `now`.
    pub fn observe_all(&mut self, todos: &[Todo], now: Timestamp) -> Vec<PhaseEdge> {
        self.sync(todos.iter().map(|t| t.id));
        todos
            .iter()
            .filter_map(|todo| self.observe(todo.id, CountdownMetrics::for_todo(todo, now)))
            .collect()
    }

    /// The last phase recorded for a todo.
    pub fn phase_of(&self, todo_id: u64) -> Option<Phase> {
        self.phases.get(&todo_id).copied()
    }
}
