use std::fmt::{Debug, Display};

use colored::Colorize;
use serde::{Deserialize, Serialize};

////////////////////////////////////////////////////////////////////////////////

/// Counters of the search, kept by every solver.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchLog {
    /// Number of `advance` calls.
    pub steps: usize,

    /// Number of unique states visited, including the initial one.
    pub visited_unique: usize,

    /// Number of moves applied and reversed to look at child states.
    pub probed: usize,

    /// Number of child nodes added to the tree.
    pub generated: usize,

    /// Number of moves reversed to get back to the parent state.
    pub backtracks: usize,

    /// Number of breadth-first passes which deepened the search.
    pub regenerations: usize,

    /// Number of events not recorded because of the config limit.
    pub events_dropped: usize,
}

impl SearchLog {
    pub(crate) fn new() -> Self {
        Self {
            visited_unique: 1,
            ..Default::default()
        }
    }
}

impl Display for SearchLog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Steps: {}, unique visited: {}, probed: {}, generated: {}, backtracks: {}, regenerations: {}",
            self.steps,
            self.visited_unique,
            self.probed,
            self.generated,
            self.backtracks,
            self.regenerations
        )
    }
}

impl Debug for SearchLog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)
    }
}

////////////////////////////////////////////////////////////////////////////////

/// Something which happened during the search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event<S> {
    /// Children of the node at `depth` were generated.
    Generated { depth: usize, children: usize },

    /// Moved forward into the unvisited state.
    Visited { depth: usize, state: S },

    /// Moved back from the node at `from_depth` to its parent.
    Backtracked { from_depth: usize },

    /// Breadth-first search goes one level deeper.
    Deepened { depth: usize },

    /// Current state is the victory state.
    Victory { depth: usize },

    /// Every reachable state was visited.
    Exhausted,
}

/// Search event together with the number of `advance` call it happened in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogEntry<S> {
    pub step: usize,
    pub event: Event<S>,
}

impl<S: Debug> Display for LogEntry<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.event {
            Event::Generated { depth, children } => write!(
                f,
                "{}",
                format!("{:>8}  G  depth={:<4} children={}", self.step, depth, children).dimmed()
            ),
            Event::Visited { depth, state } => {
                write!(f, "{:>8}  V  depth={:<4} {:?}", self.step, depth, state)
            }
            Event::Backtracked { from_depth } => write!(
                f,
                "{}",
                format!("{:>8}  B  depth={:<4}", self.step, from_depth).yellow()
            ),
            Event::Deepened { depth } => write!(
                f,
                "{}",
                format!("{:>8}  D  depth={:<4}", self.step, depth).blue()
            ),
            Event::Victory { depth } => write!(
                f,
                "{}",
                format!("{:>8}  W  depth={:<4} <--- victory", self.step, depth)
                    .green()
                    .bold()
            ),
            Event::Exhausted => write!(
                f,
                "{}",
                format!("{:>8}  X  <--- search space exhausted", self.step).red()
            ),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////

/// Sequence of recorded search events.
#[derive(Clone, Debug)]
pub struct Log<S> {
    entries: Vec<LogEntry<S>>,
}

impl<S> Default for Log<S> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<S> Log<S> {
    pub(crate) fn new() -> Self {
        Default::default()
    }

    pub(crate) fn add(&mut self, entry: LogEntry<S>) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[LogEntry<S>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn events(&self) -> impl Iterator<Item = &Event<S>> + '_ {
        self.entries.iter().map(|e| &e.event)
    }
}

impl<S: Debug> Display for Log<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for e in self.entries.iter() {
            writeln!(f, "{}", e)?;
        }
        Ok(())
    }
}
