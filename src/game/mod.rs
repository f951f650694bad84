//! Controllers which own the live state of a puzzle.
//!
//! The search engine never stores puzzle state by itself: it drives a
//! [`GameMaster`] forward and backward and reads snapshots of its state.

pub mod error;
pub mod hanoi;
pub mod puzzle8;

use std::{fmt::Debug, hash::Hash};

////////////////////////////////////////////////////////////////////////////////

pub use error::{GameError, GameResult};
pub use hanoi::{HanoiMove, HanoiState, TowerOfHanoi};
pub use puzzle8::{Puzzle8, Puzzle8State, TileMove};

////////////////////////////////////////////////////////////////////////////////

/// Stateful controller of a discrete, deterministic puzzle.
///
/// Implementations must keep two contracts the solvers rely on:
///
/// - [`GameMaster::movables`] returns the same moves in the same order
///   every time it is called on the same live state;
/// - [`GameMaster::reverse_move`] called right after
///   [`GameMaster::make_move`] with the same token restores
///   [`GameMaster::game_state`] exactly.
pub trait GameMaster {
    /// Opaque token of one legal transition.
    type Move: Clone + Debug;

    /// Snapshot which fully determines the game state.
    type State: Clone + Eq + Hash + Debug;

    /// Moves which are legal in the current state.
    fn movables(&self) -> Vec<Self::Move>;

    /// Apply move to the live state.
    fn make_move(&mut self, movable: &Self::Move);

    /// Undo move previously applied by [`GameMaster::make_move`].
    fn reverse_move(&mut self, movable: &Self::Move);

    /// Snapshot of the live state.
    fn game_state(&self) -> Self::State;
}

////////////////////////////////////////////////////////////////////////////////
