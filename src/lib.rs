//! Resumable depth-first and breadth-first search over the states
//! of a puzzle, driven through a stateful game controller.

#![cfg_attr(feature = "strict", deny(warnings))]

pub mod game;
pub mod search;

////////////////////////////////////////////////////////////////////////////////

pub use game::{
    GameError, GameMaster, GameResult, HanoiMove, HanoiState, Puzzle8, Puzzle8State, TileMove,
    TowerOfHanoi,
};

pub use search::{
    bfs::BfsSolver,
    config::{SolverConfig, SolverConfigBuilder},
    dfs::DfsSolver,
    log::{Event, Log, LogEntry, SearchLog},
    node::{GameState, NodeId, SearchTree},
    solver::{Node, Solver, SolverBase, Tree},
};
