#![allow(dead_code)]

use std::time::Duration;

use gamesearch::{GameMaster, Solver};
use serde::de::DeserializeOwned;

////////////////////////////////////////////////////////////////////////////////

/// Parse game state from JSON, e.g. `[[1,2,3],[],[]]`.
pub fn state<S: DeserializeOwned>(json: &str) -> S {
    serde_json::from_str(json).unwrap()
}

////////////////////////////////////////////////////////////////////////////////

/// Make exactly `steps` steps and return the state of the game.
pub fn play<S: Solver>(solver: &mut S, steps: usize) -> <S::Game as GameMaster>::State {
    for _ in 0..steps {
        solver.advance();
    }
    solver.game_master().game_state()
}

////////////////////////////////////////////////////////////////////////////////

/// Run solver to completion in the blocking worker,
/// fail if it does not finish in time.
pub async fn run_with_deadline<S>(mut solver: S, deadline: Duration) -> S
where
    S: Solver + Send + 'static,
{
    let worker = tokio::task::spawn_blocking(move || {
        solver.run();
        solver
    });
    tokio::time::timeout(deadline, worker)
        .await
        .expect("solver timed out")
        .expect("solver panicked")
}

////////////////////////////////////////////////////////////////////////////////

/// Victory and exhaustion look the same to the caller of `run`.
pub fn reached_victory<S: Solver>(solver: &S) -> bool {
    &solver.game_master().game_state() == solver.victory()
}
