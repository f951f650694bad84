mod common;
mod dfs;
