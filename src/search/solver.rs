use std::collections::HashSet;

use crate::game::GameMaster;

use super::{
    config::SolverConfig,
    log::{Event, Log, LogEntry, SearchLog},
    node::{GameState, NodeId, SearchTree},
};

////////////////////////////////////////////////////////////////////////////////

/// Node of the search tree built for the game `G`.
pub type Node<G> = GameState<<G as GameMaster>::State, <G as GameMaster>::Move>;

/// Search tree built for the game `G`.
pub type Tree<G> = SearchTree<<G as GameMaster>::State, <G as GameMaster>::Move>;

////////////////////////////////////////////////////////////////////////////////

/// Resumable uninformed search over the states of the game.
///
/// The solver drives the game master it owns: between calls
/// the live state of the game master is always equal to
/// the state of [`Solver::current_state`].
pub trait Solver {
    type Game: GameMaster;

    /// Make one step of the search.
    ///
    /// Returns `true` if the game is in the victory state
    /// **or** every state reachable from the initial one was visited
    /// without finding the victory one. The two outcomes are not
    /// distinguished here: compare [`Solver::game_master`] state
    /// against [`Solver::victory`] to tell them apart.
    ///
    /// Returns `false` after moving the game into one new unvisited state.
    fn advance(&mut self) -> bool;

    /// Make steps until [`Solver::advance`] returns `true`.
    fn run(&mut self) {
        while !self.advance() {}
    }

    fn base(&self) -> &SolverBase<Self::Game>;

    fn game_master(&self) -> &Self::Game {
        &self.base().gm
    }

    fn current_state(&self) -> &Node<Self::Game> {
        self.base().current()
    }

    fn victory(&self) -> &<Self::Game as GameMaster>::State {
        &self.base().victory
    }

    fn tree(&self) -> &Tree<Self::Game> {
        &self.base().tree
    }

    fn search_log(&self) -> &SearchLog {
        &self.base().log
    }

    fn events(&self) -> &Log<<Self::Game as GameMaster>::State> {
        &self.base().events
    }
}

////////////////////////////////////////////////////////////////////////////////

/// Bookkeeping shared by depth-first and breadth-first solvers.
pub struct SolverBase<G: GameMaster> {
    pub(crate) gm: G,
    pub(crate) victory: G::State,
    pub(crate) tree: Tree<G>,
    pub(crate) current: NodeId,
    pub(crate) visited: HashSet<G::State>,
    pub(crate) cfg: SolverConfig,
    pub(crate) log: SearchLog,
    pub(crate) events: Log<G::State>,
}

impl<G: GameMaster> SolverBase<G> {
    pub(crate) fn new(gm: G, victory: G::State, cfg: SolverConfig) -> Self {
        let initial = gm.game_state();
        let mut visited = HashSet::new();
        visited.insert(initial.clone());
        Self {
            gm,
            victory,
            tree: SearchTree::new(initial),
            current: NodeId::ROOT,
            visited,
            cfg,
            log: SearchLog::new(),
            events: Log::new(),
        }
    }

    pub fn current(&self) -> &Node<G> {
        self.tree.get(self.current)
    }

    pub fn current_id(&self) -> NodeId {
        self.current
    }

    pub fn is_visited(&self, state: &G::State) -> bool {
        self.visited.contains(state)
    }

    pub(crate) fn into_game_master(self) -> G {
        self.gm
    }

    pub(crate) fn is_victory(&self) -> bool {
        self.current().state == self.victory
    }

    /// Count the step and check the victory.
    pub(crate) fn begin_step(&mut self) -> bool {
        self.log.steps += 1;
        if self.is_victory() {
            let depth = self.current().depth;
            self.record(|| Event::Victory { depth });
            true
        } else {
            false
        }
    }

    pub(crate) fn exhausted(&mut self) {
        self.record(|| Event::Exhausted);
    }

    /// Probe every legal move of the current state and
    /// add child for each resulting state which is not visited yet.
    ///
    /// Visited check happens now, so child may become visited
    /// through other path before it is tried.
    pub(crate) fn gen_children(&mut self) {
        let parent = self.current;
        let mut added = 0;
        for movable in self.gm.movables() {
            self.gm.make_move(&movable);
            let state = self.gm.game_state();
            self.gm.reverse_move(&movable);
            self.log.probed += 1;

            if !self.visited.contains(&state) {
                self.tree.add_child(parent, state, movable);
                added += 1;
            }
        }
        self.log.generated += added;

        let depth = self.current().depth;
        self.record(|| Event::Generated {
            depth,
            children: added,
        });
    }

    /// Take the next child of the current node which is not visited
    /// and move into it.
    pub(crate) fn visit_child(&mut self) -> bool {
        while let Some(child) = self.next_child() {
            if !self.visited.contains(&self.tree.get(child).state) {
                self.commit(child);
                return true;
            }
        }
        false
    }

    /// Advance cursor of the current node, return the child under it.
    pub(crate) fn next_child(&mut self) -> Option<NodeId> {
        let node = self.tree.get_mut(self.current);
        let child = node.children.get(node.next_child).copied()?;
        node.next_child += 1;
        Some(child)
    }

    fn commit(&mut self, child: NodeId) {
        self.visited.insert(self.tree.get(child).state.clone());
        self.log.visited_unique += 1;
        self.enter(child);

        if self.recording() {
            let node = self.current();
            let (depth, state) = (node.depth, node.state.clone());
            self.record(|| Event::Visited { depth, state });
        } else {
            self.drop_event();
        }
    }

    /// Apply the move of the child and make it current.
    pub(crate) fn enter(&mut self, child: NodeId) {
        if let Some(movable) = self.tree.get(child).required_move.as_ref() {
            self.gm.make_move(movable);
        }
        self.current = child;
    }

    /// Reverse the move of the current node and make its parent current.
    /// Returns `false` on the root.
    pub(crate) fn leave(&mut self) -> bool {
        let node = self.tree.get(self.current);
        let Some(parent) = node.parent else {
            return false;
        };
        if let Some(movable) = node.required_move.as_ref() {
            self.gm.reverse_move(movable);
        }
        self.current = parent;
        true
    }

    /// Same as [`SolverBase::leave`], but counted as backtrack.
    pub(crate) fn backtrack(&mut self) -> bool {
        let from_depth = self.current().depth;
        if !self.leave() {
            return false;
        }
        self.log.backtracks += 1;
        self.record(|| Event::Backtracked { from_depth });
        true
    }

    pub(crate) fn set_cursor(&mut self, next_child: usize) {
        self.tree.get_mut(self.current).next_child = next_child;
    }

    fn recording(&self) -> bool {
        self.cfg.may_record(self.events.len())
    }

    pub(crate) fn record(&mut self, event: impl FnOnce() -> Event<G::State>) {
        if self.recording() {
            self.events.add(LogEntry {
                step: self.log.steps,
                event: event(),
            });
        } else {
            self.drop_event();
        }
    }

    /// Count event which is not recorded because of the limit.
    fn drop_event(&mut self) {
        if self.cfg.record_events {
            self.log.events_dropped += 1;
        }
    }
}
