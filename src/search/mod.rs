//! Uninformed search over the states of the [`crate::game::GameMaster`].

pub mod bfs;
pub mod config;
pub mod dfs;
pub mod log;
pub mod node;
pub mod solver;

////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests;
