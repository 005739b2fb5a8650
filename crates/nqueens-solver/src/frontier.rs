//! Open and closed sets for best-first search.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet};

use nqueens_core::Board;

use crate::node::{NodeId, SearchNode};

/// A heap entry for priority queue ordering.
///
/// Carries a copy of the ordering keys so the heap never has to look the
/// node up in the arena.
#[derive(Debug, Clone, Copy)]
struct OpenEntry {
    f: usize,
    depth: usize,
    sequence: u64,
    id: NodeId,
}

impl Eq for OpenEntry {}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap pops the greatest entry: lowest f, then deepest, then oldest
        other
            .f
            .cmp(&self.f)
            .then_with(|| self.depth.cmp(&other.depth))
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Nodes awaiting expansion, ordered by ascending `f = g + h`.
///
/// Ties go to the deeper node, then to the node inserted first, which keeps
/// expansion order deterministic.
#[derive(Debug, Default)]
pub struct OpenSet {
    heap: BinaryHeap<OpenEntry>,
    next_sequence: u64,
}

impl OpenSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues `node`, stored in the arena under `id`.
    pub fn push(&mut self, id: NodeId, node: &SearchNode) {
        self.heap.push(OpenEntry {
            f: node.f(),
            depth: node.depth(),
            sequence: self.next_sequence,
            id,
        });
        self.next_sequence += 1;
    }

    /// Removes and returns the most promising node id.
    pub fn pop(&mut self) -> Option<NodeId> {
        self.heap.pop().map(|entry| entry.id)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

/// Boards already expanded, keyed by value.
#[derive(Debug, Default)]
pub struct ClosedSet {
    boards: HashSet<Board>,
}

impl ClosedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `board` as expanded. Returns false if it already was.
    pub fn insert(&mut self, board: Board) -> bool {
        self.boards.insert(board)
    }

    pub fn contains(&self, board: &Board) -> bool {
        self.boards.contains(board)
    }

    pub fn len(&self) -> usize {
        self.boards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::NodeArena;
    use nqueens_core::UNSET;

    struct Fixture {
        arena: NodeArena,
        open: OpenSet,
        root: NodeId,
    }

    impl Fixture {
        fn new(size: usize) -> Self {
            let mut arena = NodeArena::new();
            let root = arena.push(SearchNode::root(Board::new(size).unwrap(), size));
            Self {
                arena,
                open: OpenSet::new(),
                root,
            }
        }

        fn push(&mut self, columns: &[i16], h: usize) -> NodeId {
            let board = Board::from_columns(columns).unwrap();
            let g = board.depth();
            let id = self.arena.push(SearchNode::child(board, g, h, self.root));
            self.open.push(id, self.arena.get(id));
            id
        }
    }

    #[test]
    fn test_pops_lowest_f_first() {
        let mut fx = Fixture::new(3);
        let high = fx.push(&[0, UNSET, UNSET], 5);
        let low = fx.push(&[1, UNSET, UNSET], 0);

        assert_eq!(fx.open.len(), 2);
        assert_eq!(fx.open.pop(), Some(low));
        assert_eq!(fx.open.pop(), Some(high));
        assert!(fx.open.pop().is_none());
        assert!(fx.open.is_empty());
    }

    #[test]
    fn test_ties_prefer_deeper_nodes() {
        let mut fx = Fixture::new(4);

        // Both have f = 3
        let shallow = fx.push(&[0, UNSET, UNSET, UNSET], 2);
        let deep = fx.push(&[1, 3, UNSET, UNSET], 1);

        assert_eq!(fx.open.pop(), Some(deep));
        assert_eq!(fx.open.pop(), Some(shallow));
    }

    #[test]
    fn test_full_ties_are_fifo() {
        let mut fx = Fixture::new(4);

        let first = fx.push(&[0, UNSET, UNSET, UNSET], 1);
        let second = fx.push(&[2, UNSET, UNSET, UNSET], 1);
        let third = fx.push(&[3, UNSET, UNSET, UNSET], 1);

        assert_eq!(fx.open.pop(), Some(first));
        assert_eq!(fx.open.pop(), Some(second));
        assert_eq!(fx.open.pop(), Some(third));
    }

    #[test]
    fn test_closed_set_deduplicates_by_value() {
        let mut closed = ClosedSet::new();
        assert!(closed.is_empty());

        let a = Board::from_columns(&[1, UNSET, UNSET]).unwrap();
        let same = Board::new(3).unwrap().with_queen(0, 1).unwrap();
        let deeper = a.with_queen(1, 0).unwrap();

        assert!(closed.insert(a));
        assert!(!closed.insert(same.clone()));
        assert!(closed.contains(&same));
        assert!(!closed.contains(&deeper));
        assert_eq!(closed.len(), 1);
    }
}
