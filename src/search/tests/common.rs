use crate::game::GameMaster;

////////////////////////////////////////////////////////////////////////////////

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edge {
    pub from: usize,
    pub to: usize,
}

////////////////////////////////////////////////////////////////////////////////

/// Walk over the vertices of undirected graph.
/// Counts moves to check that every move is paired with its reverse.
#[derive(Clone, Debug)]
pub struct GraphGame {
    adj: Vec<Vec<usize>>,
    at: usize,
    pub made: usize,
    pub reversed: usize,
}

impl GraphGame {
    pub fn new(adj: Vec<Vec<usize>>, at: usize) -> Self {
        Self {
            adj,
            at,
            made: 0,
            reversed: 0,
        }
    }

    /// 0 - 1 - 3 - 4
    ///  \     /
    ///   - 2 -
    pub fn diamond() -> Self {
        Self::new(
            vec![vec![1, 2], vec![0, 3], vec![0, 3], vec![1, 2, 4], vec![3]],
            0,
        )
    }

    pub fn line(len: usize) -> Self {
        let adj = (0..len)
            .map(|v| {
                let mut n = Vec::new();
                if v > 0 {
                    n.push(v - 1);
                }
                if v + 1 < len {
                    n.push(v + 1);
                }
                n
            })
            .collect();
        Self::new(adj, 0)
    }

    /// Number of moves made and not reversed.
    pub fn net_moves(&self) -> usize {
        self.made - self.reversed
    }
}

impl GameMaster for GraphGame {
    type Move = Edge;
    type State = usize;

    fn movables(&self) -> Vec<Edge> {
        self.adj[self.at]
            .iter()
            .map(|&to| Edge { from: self.at, to })
            .collect()
    }

    fn make_move(&mut self, movable: &Edge) {
        assert_eq!(self.at, movable.from);
        self.at = movable.to;
        self.made += 1;
    }

    fn reverse_move(&mut self, movable: &Edge) {
        assert_eq!(self.at, movable.to);
        self.at = movable.from;
        self.reversed += 1;
    }

    fn game_state(&self) -> usize {
        self.at
    }
}

////////////////////////////////////////////////////////////////////////////////

/// Vertex which can not be reached.
pub const NOWHERE: usize = usize::MAX;
