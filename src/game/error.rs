use thiserror::Error;

////////////////////////////////////////////////////////////////////////////////

/// Represents error in the initial configuration of a reference controller.
#[derive(Error, Debug)]
pub enum GameError {
    #[error("tower of hanoi needs at least {min} pegs, got {got}")]
    NotEnoughPegs { min: usize, got: usize },
    #[error("disk {disk} placed more than once")]
    DuplicateDisk { disk: u32 },
    #[error("disk size must be positive")]
    ZeroDisk,
    #[error("disks on peg {peg} are not ordered smallest first")]
    UnorderedPeg { peg: usize },
    #[error("board must be 3x3")]
    BadBoardShape,
    #[error("tile {tile} placed more than once")]
    DuplicateTile { tile: i32 },
    #[error("tile {tile} out of range 1..=8")]
    TileOutOfRange { tile: i32 },
    #[error("board has no blank cell")]
    MissingBlank,
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

////////////////////////////////////////////////////////////////////////////////

pub type GameResult<T> = Result<T, GameError>;
