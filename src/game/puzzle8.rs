use std::fmt::Display;

use serde::{Deserialize, Serialize};

use super::{
    error::{GameError, GameResult},
    GameMaster,
};

////////////////////////////////////////////////////////////////////////////////

/// Marks the empty cell of the board.
pub const BLANK: i32 = -1;

const SIDE: usize = 3;

pub type Board = [[i32; SIDE]; SIDE];

/// Cell coordinates as (column, row).
pub type Cell = (usize, usize);

////////////////////////////////////////////////////////////////////////////////

/// Rows of the board, top row first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Puzzle8State(pub Board);

impl Puzzle8State {
    pub fn rows(&self) -> &Board {
        &self.0
    }
}

impl From<Board> for Puzzle8State {
    fn from(board: Board) -> Self {
        Self(board)
    }
}

impl Display for Puzzle8State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(")?;
        for (y, row) in self.0.iter().enumerate() {
            if y > 0 {
                write!(f, ",")?;
            }
            write!(f, "({},{},{})", row[0], row[1], row[2])?;
        }
        write!(f, ")")
    }
}

////////////////////////////////////////////////////////////////////////////////

/// Slides `tile` from cell `from` into the blank cell `to`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TileMove {
    pub tile: i32,
    pub from: Cell,
    pub to: Cell,
}

impl TileMove {
    pub fn reversed(&self) -> Self {
        Self {
            tile: self.tile,
            from: self.to,
            to: self.from,
        }
    }
}

impl Display for TileMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "tile{} ({},{}) -> ({},{})",
            self.tile,
            self.from.0 + 1,
            self.from.1 + 1,
            self.to.0 + 1,
            self.to.1 + 1
        )
    }
}

////////////////////////////////////////////////////////////////////////////////

/// Sliding 8-puzzle on 3x3 board.
#[derive(Clone, Debug)]
pub struct Puzzle8 {
    board: Board,
    blank: Cell,
}

impl Puzzle8 {
    pub fn new(board: Board) -> GameResult<Self> {
        let mut seen = Vec::with_capacity(SIDE * SIDE);
        let mut blank = None;
        for (y, row) in board.iter().enumerate() {
            for (x, &tile) in row.iter().enumerate() {
                if tile != BLANK && !(1..=8).contains(&tile) {
                    return Err(GameError::TileOutOfRange { tile });
                }
                if seen.contains(&tile) {
                    return Err(GameError::DuplicateTile { tile });
                }
                seen.push(tile);
                if tile == BLANK {
                    blank = Some((x, y));
                }
            }
        }
        let blank = blank.ok_or(GameError::MissingBlank)?;
        Ok(Self { board, blank })
    }

    /// Make game from JSON rows, e.g. `[[5,4,-1],[6,1,8],[7,3,2]]`.
    pub fn from_json(json: &str) -> GameResult<Self> {
        let rows: Vec<Vec<i32>> = serde_json::from_str(json)?;
        if rows.len() != SIDE || rows.iter().any(|r| r.len() != SIDE) {
            return Err(GameError::BadBoardShape);
        }
        let mut board = [[BLANK; SIDE]; SIDE];
        for (y, row) in rows.into_iter().enumerate() {
            board[y].copy_from_slice(&row);
        }
        Self::new(board)
    }

    /// Tiles in order with the blank in the bottom right corner.
    pub fn solved() -> Puzzle8State {
        Puzzle8State([[1, 2, 3], [4, 5, 6], [7, 8, BLANK]])
    }

    pub fn blank(&self) -> Cell {
        self.blank
    }

    fn tile_at(&self, (x, y): Cell) -> i32 {
        self.board[y][x]
    }
}

impl GameMaster for Puzzle8 {
    type Move = TileMove;
    type State = Puzzle8State;

    fn movables(&self) -> Vec<TileMove> {
        let (bx, by) = self.blank;
        let mut moves = Vec::with_capacity(4);
        if by > 0 {
            moves.push((bx, by - 1));
        }
        if bx > 0 {
            moves.push((bx - 1, by));
        }
        if bx + 1 < SIDE {
            moves.push((bx + 1, by));
        }
        if by + 1 < SIDE {
            moves.push((bx, by + 1));
        }

        let mut moves = moves
            .into_iter()
            .map(|from| TileMove {
                tile: self.tile_at(from),
                from,
                to: self.blank,
            })
            .collect::<Vec<_>>();
        moves.sort_by_key(|m| m.tile);
        moves
    }

    fn make_move(&mut self, movable: &TileMove) {
        assert_eq!(
            self.tile_at(movable.from),
            movable.tile,
            "tile{} is not at {:?}",
            movable.tile,
            movable.from
        );
        assert_eq!(movable.to, self.blank, "target cell is not blank");
        let (fx, fy) = movable.from;
        let (tx, ty) = movable.to;
        self.board[ty][tx] = movable.tile;
        self.board[fy][fx] = BLANK;
        self.blank = movable.from;
    }

    fn reverse_move(&mut self, movable: &TileMove) {
        self.make_move(&movable.reversed());
    }

    fn game_state(&self) -> Puzzle8State {
        Puzzle8State(self.board)
    }
}
