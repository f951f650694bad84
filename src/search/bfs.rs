use crate::game::GameMaster;

use super::{
    config::SolverConfig,
    log::Event,
    solver::{Solver, SolverBase},
};

////////////////////////////////////////////////////////////////////////////////

/// Breadth-first solver without explicit queue.
///
/// States are visited level by level: the solver looks for the next
/// unvisited node at the current depth by walking the already built tree,
/// and only when the whole level is visited it generates children of
/// every node on that level and goes one level deeper.
///
/// Walking the tree replays moves on the game master, so every step
/// may apply and reverse many moves before it commits to one new state.
pub struct BfsSolver<G: GameMaster> {
    base: SolverBase<G>,
}

impl<G: GameMaster> BfsSolver<G> {
    pub fn new(gm: G, victory: G::State) -> Self {
        Self::with_config(gm, victory, SolverConfig::default())
    }

    pub fn with_config(gm: G, victory: G::State, cfg: SolverConfig) -> Self {
        Self {
            base: SolverBase::new(gm, victory, cfg),
        }
    }

    /// Stop the search and take the game master back.
    pub fn into_game_master(self) -> G {
        self.base.into_game_master()
    }

    /// Generate children of every node at `depth` in the subtree
    /// of the current node, resetting visit cursors on the way.
    ///
    /// Returns `true` if any node at `depth` has children afterwards.
    /// The current node and the game state are restored on return.
    fn ensure_children_at_depth(&mut self, depth: usize) -> bool {
        let base = &mut self.base;
        base.set_cursor(0);

        let cur = base.current_id();
        let cur_depth = base.current().depth;
        if depth == cur_depth {
            base.gen_children();
            return !base.current().children().is_empty();
        }
        if depth < cur_depth {
            return false;
        }

        let mut found = false;
        let children = base.current().children().len();
        for i in 0..children {
            let child = self.base.tree.get(cur).children()[i];
            self.base.enter(child);
            if self.ensure_children_at_depth(depth) {
                found = true;
            }
            self.base.leave();
        }
        found
    }

    /// Visit the next unvisited node at `depth` inside the subtree
    /// of the current node, continuing from the visit cursors.
    ///
    /// On failure the current node and the game state are unchanged.
    fn visit_in_subtree(&mut self, depth: usize) -> bool {
        let cur_depth = self.base.current().depth;
        if depth == cur_depth + 1 {
            return self.base.visit_child();
        }
        if depth <= cur_depth {
            return false;
        }

        while let Some(child) = self.base.next_child() {
            self.base.enter(child);
            if self.visit_in_subtree(depth) {
                return true;
            }
            self.base.leave();
        }
        false
    }

    /// Visit the next unvisited node at `depth`, going up the tree
    /// and then one level deeper when the level is exhausted.
    ///
    /// Returns `false` if no unvisited states are reachable,
    /// leaving the root current.
    fn visit_at_depth(&mut self, mut depth: usize) -> bool {
        loop {
            if self.visit_in_subtree(depth) {
                return true;
            }

            // retry the same depth from the parent
            if self.base.backtrack() {
                continue;
            }

            // at the root and the level is done
            if !self.ensure_children_at_depth(depth) {
                return false;
            }
            depth += 1;
            self.base.log.regenerations += 1;
            self.base.record(|| Event::Deepened { depth });
        }
    }
}

impl<G: GameMaster> Solver for BfsSolver<G> {
    type Game = G;

    fn advance(&mut self) -> bool {
        if self.base.begin_step() {
            return true;
        }

        let depth = self.base.current().depth;
        if self.visit_at_depth(depth) {
            false
        } else {
            self.base.exhausted();
            true
        }
    }

    fn base(&self) -> &SolverBase<G> {
        &self.base
    }
}
