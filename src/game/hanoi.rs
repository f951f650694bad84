use std::fmt::Display;

use serde::{Deserialize, Serialize};

use super::{
    error::{GameError, GameResult},
    GameMaster,
};

////////////////////////////////////////////////////////////////////////////////

const MIN_PEGS: usize = 3;

////////////////////////////////////////////////////////////////////////////////

/// Disks on every peg, smallest (top) disk first.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HanoiState(pub Vec<Vec<u32>>);

impl HanoiState {
    pub fn pegs(&self) -> &[Vec<u32>] {
        &self.0
    }
}

impl From<Vec<Vec<u32>>> for HanoiState {
    fn from(pegs: Vec<Vec<u32>>) -> Self {
        Self(pegs)
    }
}

impl Display for HanoiState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(")?;
        for (i, peg) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "(")?;
            for (j, disk) in peg.iter().enumerate() {
                if j > 0 {
                    write!(f, ",")?;
                }
                write!(f, "{}", disk)?;
            }
            write!(f, ")")?;
        }
        write!(f, ")")
    }
}

////////////////////////////////////////////////////////////////////////////////

/// Moves top disk `disk` from peg `from` to peg `to`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct HanoiMove {
    pub disk: u32,
    pub from: usize,
    pub to: usize,
}

impl HanoiMove {
    pub fn reversed(&self) -> Self {
        Self {
            disk: self.disk,
            from: self.to,
            to: self.from,
        }
    }
}

impl Display for HanoiMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "disk{} peg{} -> peg{}",
            self.disk,
            self.from + 1,
            self.to + 1
        )
    }
}

////////////////////////////////////////////////////////////////////////////////

/// Tower of Hanoi with any number of disks and at least three pegs.
#[derive(Clone, Debug)]
pub struct TowerOfHanoi {
    pegs: Vec<Vec<u32>>,
}

impl TowerOfHanoi {
    /// Make game from disks on pegs, each peg listed smallest disk first.
    pub fn new(pegs: Vec<Vec<u32>>) -> GameResult<Self> {
        if pegs.len() < MIN_PEGS {
            return Err(GameError::NotEnoughPegs {
                min: MIN_PEGS,
                got: pegs.len(),
            });
        }

        let mut seen = Vec::new();
        for (i, peg) in pegs.iter().enumerate() {
            for (j, &disk) in peg.iter().enumerate() {
                if disk == 0 {
                    return Err(GameError::ZeroDisk);
                }
                if seen.contains(&disk) {
                    return Err(GameError::DuplicateDisk { disk });
                }
                seen.push(disk);
                if j > 0 && peg[j - 1] > disk {
                    return Err(GameError::UnorderedPeg { peg: i });
                }
            }
        }

        Ok(Self { pegs })
    }

    /// Disks `1..=disks` stacked on the first of three pegs.
    pub fn with_disks(disks: u32) -> Self {
        Self {
            pegs: vec![(1..=disks).collect(), Vec::new(), Vec::new()],
        }
    }

    /// Make game from JSON array of pegs, e.g. `[[1,2,3],[],[]]`.
    pub fn from_json(json: &str) -> GameResult<Self> {
        let pegs: Vec<Vec<u32>> = serde_json::from_str(json)?;
        Self::new(pegs)
    }

    /// State with every disk stacked on the last peg.
    pub fn goal(&self) -> HanoiState {
        let mut disks = self.pegs.iter().flatten().copied().collect::<Vec<_>>();
        disks.sort();
        let mut pegs = vec![Vec::new(); self.pegs.len()];
        pegs[self.pegs.len() - 1] = disks;
        HanoiState(pegs)
    }

    pub fn is_solved(&self) -> bool {
        self.pegs[..self.pegs.len() - 1].iter().all(|p| p.is_empty())
    }

    pub fn pegs_count(&self) -> usize {
        self.pegs.len()
    }
}

impl GameMaster for TowerOfHanoi {
    type Move = HanoiMove;
    type State = HanoiState;

    fn movables(&self) -> Vec<HanoiMove> {
        let pegs = &self.pegs;

        let mut tops = pegs
            .iter()
            .enumerate()
            .filter_map(|(i, peg)| peg.first().map(|&disk| (disk, i)))
            .collect::<Vec<_>>();
        tops.sort();

        tops.into_iter()
            .flat_map(|(disk, from)| {
                (0..pegs.len())
                    .filter(move |&to| {
                        to != from && pegs[to].first().map_or(true, |&top| top > disk)
                    })
                    .map(move |to| HanoiMove { disk, from, to })
            })
            .collect()
    }

    fn make_move(&mut self, movable: &HanoiMove) {
        let top = self.pegs[movable.from].first().copied();
        assert_eq!(
            top,
            Some(movable.disk),
            "disk{} is not on top of peg{}",
            movable.disk,
            movable.from + 1
        );
        self.pegs[movable.from].remove(0);
        self.pegs[movable.to].insert(0, movable.disk);
    }

    fn reverse_move(&mut self, movable: &HanoiMove) {
        self.make_move(&movable.reversed());
    }

    fn game_state(&self) -> HanoiState {
        HanoiState(self.pegs.clone())
    }
}
