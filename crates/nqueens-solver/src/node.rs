//! Search node representation for informed search.
//!
//! Nodes live in a [`NodeArena`] and refer to their parent by [`NodeId`].
//! Every child is strictly deeper than its parent, so the links form a tree
//! and a path is rebuilt by walking parent ids back to the root.

use std::fmt;

use nqueens_core::Board;

/// Index of a node inside a [`NodeArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Returns the raw arena index.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// A board together with its path cost, heuristic estimate and parent link.
///
/// Each placement costs 1, so `g` equals the number of queens placed.
#[derive(Debug, Clone)]
pub struct SearchNode {
    board: Board,

    /// Cost from the root.
    g: usize,

    /// Heuristic estimate to a goal.
    h: usize,

    /// Parent node (None for the root).
    parent: Option<NodeId>,
}

impl SearchNode {
    /// Creates a root node.
    pub fn root(board: Board, h: usize) -> Self {
        Self {
            board,
            g: 0,
            h,
            parent: None,
        }
    }

    /// Creates a child node.
    pub fn child(board: Board, g: usize, h: usize, parent: NodeId) -> Self {
        Self {
            board,
            g,
            h,
            parent: Some(parent),
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn g(&self) -> usize {
        self.g
    }

    #[inline]
    pub fn h(&self) -> usize {
        self.h
    }

    /// Returns `g + h`.
    #[inline]
    pub fn f(&self) -> usize {
        self.g + self.h
    }

    /// Returns the number of queens placed on the board.
    #[inline]
    pub fn depth(&self) -> usize {
        self.board.depth()
    }

    #[inline]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Returns true if the board is complete and conflict-free.
    pub fn is_goal(&self) -> bool {
        self.board.is_complete() && self.board.is_valid()
    }
}

impl fmt::Display for SearchNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SearchNode[f={}, g={}, h={}, depth={}, complete={}, valid={}]",
            self.f(),
            self.g,
            self.h,
            self.depth(),
            self.board.is_complete(),
            self.board.is_valid()
        )
    }
}

/// Append-only storage for search nodes.
#[derive(Debug, Default)]
pub struct NodeArena {
    nodes: Vec<SearchNode>,
}

impl NodeArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a node and returns its id.
    pub fn push(&mut self, node: SearchNode) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    /// Returns the node with the given id.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this arena.
    #[inline]
    pub fn get(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id.0]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the boards from the root down to `id`, root first.
    pub fn path(&self, id: NodeId) -> Vec<&Board> {
        let mut path = Vec::with_capacity(self.get(id).depth() + 1);
        let mut current = Some(id);
        while let Some(id) = current {
            let node = self.get(id);
            path.push(node.board());
            current = node.parent();
        }
        path.reverse();
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nqueens_core::UNSET;

    #[test]
    fn test_root_node() {
        let node = SearchNode::root(Board::new(4).unwrap(), 4);

        assert_eq!(node.g(), 0);
        assert_eq!(node.h(), 4);
        assert_eq!(node.f(), 4);
        assert_eq!(node.depth(), 0);
        assert!(node.parent().is_none());
        assert!(!node.is_goal());
    }

    #[test]
    fn test_child_node() {
        let board = Board::from_columns(&[1, UNSET, UNSET, UNSET]).unwrap();
        let node = SearchNode::child(board, 1, 3, NodeId(0));

        assert_eq!(node.f(), 4);
        assert_eq!(node.depth(), 1);
        assert_eq!(node.parent(), Some(NodeId(0)));
    }

    #[test]
    fn test_goal_node() {
        let board = Board::from_columns(&[2, 0, 3, 1]).unwrap();
        let node = SearchNode::child(board, 4, 0, NodeId(3));
        assert!(node.is_goal());

        let board = Board::from_columns(&[0, 1, 2, 3]).unwrap();
        let node = SearchNode::child(board, 4, 6, NodeId(3));
        assert!(!node.is_goal());
    }

    #[test]
    fn test_display() {
        let node = SearchNode::root(Board::new(2).unwrap(), 2);
        assert_eq!(
            node.to_string(),
            "SearchNode[f=2, g=0, h=2, depth=0, complete=false, valid=true]"
        );
    }

    #[test]
    fn test_arena_path_reconstruction() {
        let mut arena = NodeArena::new();
        assert!(arena.is_empty());

        let root = Board::new(4).unwrap();
        let first = root.with_queen(0, 1).unwrap();
        let second = first.with_queen(1, 3).unwrap();
        let sibling = root.with_queen(0, 2).unwrap();

        let root_id = arena.push(SearchNode::root(root.clone(), 0));
        let first_id = arena.push(SearchNode::child(first.clone(), 1, 0, root_id));
        arena.push(SearchNode::child(sibling, 1, 0, root_id));
        let second_id = arena.push(SearchNode::child(second.clone(), 2, 0, first_id));

        assert_eq!(arena.len(), 4);
        assert_eq!(second_id.index(), 3);
        assert_eq!(arena.path(second_id), vec![&root, &first, &second]);
        assert_eq!(arena.path(root_id), vec![&root]);
    }
}
