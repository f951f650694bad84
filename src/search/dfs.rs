use crate::game::GameMaster;

use super::{
    config::SolverConfig,
    solver::{Solver, SolverBase},
};

////////////////////////////////////////////////////////////////////////////////

/// Depth-first solver with explicit backtracking.
///
/// Every step goes one move deeper into the first unvisited child
/// of the current state, backtracking as far as needed to find one.
pub struct DfsSolver<G: GameMaster> {
    base: SolverBase<G>,
}

impl<G: GameMaster> DfsSolver<G> {
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
}

impl<G: GameMaster> Solver for DfsSolver<G> {
    type Game = G;

    fn advance(&mut self) -> bool {
        let base = &mut self.base;
        if base.begin_step() {
            return true;
        }

        loop {
            if base.current().children().is_empty() {
                base.gen_children();
            }

            if base.visit_child() {
                return false;
            }

            // all children visited, go back
            if !base.backtrack() {
                base.exhausted();
                return true;
            }
        }
    }

    fn base(&self) -> &SolverBase<G> {
        &self.base
    }
}
