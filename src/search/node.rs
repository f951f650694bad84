use std::{
    fmt::Debug,
    hash::{Hash, Hasher},
};

////////////////////////////////////////////////////////////////////////////////

/// Index of the node in the [`SearchTree`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub const ROOT: NodeId = NodeId(0);

    pub fn index(&self) -> usize {
        self.0
    }
}

////////////////////////////////////////////////////////////////////////////////

/// One reachable state of the game and its place in the exploration tree.
///
/// Two nodes are equal when their states are equal,
/// no matter which moves led to them.
#[derive(Clone, Debug)]
pub struct GameState<S, M> {
    /// Snapshot of the game.
    pub state: S,

    /// Distance from the root in the tree.
    pub depth: usize,

    /// Move applied to the parent state to get this one.
    /// `None` for the root.
    pub required_move: Option<M>,

    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) next_child: usize,
}

impl<S, M> GameState<S, M> {
    fn new(state: S, depth: usize, required_move: Option<M>, parent: Option<NodeId>) -> Self {
        Self {
            state,
            depth,
            required_move,
            parent,
            children: Vec::new(),
            next_child: 0,
        }
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Index of the next child to try.
    pub fn next_child(&self) -> usize {
        self.next_child
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

impl<S: PartialEq, M> PartialEq for GameState<S, M> {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state
    }
}

impl<S: Eq, M> Eq for GameState<S, M> {}

impl<S: Hash, M> Hash for GameState<S, M> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.state.hash(state);
    }
}

////////////////////////////////////////////////////////////////////////////////

/// Arena of [`GameState`] nodes.
///
/// Nodes are never removed, so a [`NodeId`] stays valid
/// for the lifetime of the tree.
#[derive(Clone, Debug)]
pub struct SearchTree<S, M> {
    nodes: Vec<GameState<S, M>>,
}

impl<S, M> SearchTree<S, M> {
    pub fn new(root: S) -> Self {
        Self {
            nodes: vec![GameState::new(root, 0, None, None)],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, id: NodeId) -> &GameState<S, M> {
        &self.nodes[id.0]
    }

    pub(crate) fn get_mut(&mut self, id: NodeId) -> &mut GameState<S, M> {
        &mut self.nodes[id.0]
    }

    /// Append new child to the node, return id of the child.
    pub(crate) fn add_child(&mut self, parent: NodeId, state: S, movable: M) -> NodeId {
        let depth = self.get(parent).depth + 1;
        let id = NodeId(self.nodes.len());
        self.nodes.push(GameState::new(state, depth, Some(movable), Some(parent)));
        self.get_mut(parent).children.push(id);
        id
    }

    pub fn children(&self, id: NodeId) -> impl Iterator<Item = &GameState<S, M>> + '_ {
        self.get(id).children.iter().map(|c| self.get(*c))
    }

    pub fn nodes(&self) -> impl Iterator<Item = &GameState<S, M>> + '_ {
        self.nodes.iter()
    }
}

impl<S, M: Clone> SearchTree<S, M> {
    /// Moves leading from the root to the node.
    pub fn path_to(&self, id: NodeId) -> Vec<M> {
        let mut path = Vec::with_capacity(self.get(id).depth);
        let mut cur = id;
        while let Some(parent) = self.get(cur).parent {
            if let Some(m) = self.get(cur).required_move.as_ref() {
                path.push(m.clone());
            }
            cur = parent;
        }
        path.reverse();
        path
    }
}
