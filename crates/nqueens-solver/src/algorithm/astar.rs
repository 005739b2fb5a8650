//! A* best-first search over partial boards.

use nqueens_core::{Board, Result};
use tracing::{debug, trace};

use super::SearchAlgorithm;
use crate::frontier::{ClosedSet, OpenSet};
use crate::heuristic::Heuristic;
use crate::node::{NodeArena, SearchNode};
use crate::stats::SearchStats;

/// Expands the open node with the lowest `f = g + h`, preferring deeper
/// nodes on ties.
///
/// Expanded boards go into a closed set and are never expanded again.
/// Every successor is a fresh board stored in a [`NodeArena`], with a
/// parent link back to the node it was generated from.
#[derive(Debug, Clone, Default)]
pub struct AStarSearch<H> {
    heuristic: H,
    node_limit: Option<u64>,
    assert_successors: bool,
    cut_off: bool,
}

impl<H: Heuristic> AStarSearch<H> {
    pub fn new(heuristic: H) -> Self {
        Self {
            heuristic,
            node_limit: None,
            assert_successors: false,
            cut_off: false,
        }
    }

    /// Stops the search once `limit` nodes have been explored.
    pub fn with_node_limit(mut self, limit: Option<u64>) -> Self {
        self.node_limit = limit;
        self
    }

    /// Checks every successor for conflict preservation.
    pub fn with_assertions(mut self, enabled: bool) -> Self {
        self.assert_successors = enabled;
        self
    }
}

impl<H: Heuristic> SearchAlgorithm for AStarSearch<H> {
    fn search(&mut self, root: Board, stats: &mut SearchStats) -> Result<Option<Board>> {
        self.cut_off = false;

        let mut arena = NodeArena::new();
        let mut open = OpenSet::new();
        let mut closed = ClosedSet::new();

        let h = self.heuristic.evaluate(&root);
        let root_id = arena.push(SearchNode::root(root, h));
        open.push(root_id, arena.get(root_id));

        while let Some(id) = open.pop() {
            if stats.limit_reached(self.node_limit) {
                self.cut_off = true;
                debug!(
                    event = "node_limit_reached",
                    algorithm = self.name(),
                    nodes_explored = stats.nodes_explored,
                    open = open.len() + 1,
                    closed = closed.len(),
                );
                return Ok(None);
            }
            stats.record_explored();

            let node = arena.get(id);
            if node.is_goal() {
                debug!(
                    event = "goal_reached",
                    heuristic = self.heuristic.name(),
                    path_length = arena.path(id).len(),
                    open = open.len(),
                    closed = closed.len(),
                );
                return Ok(Some(node.board().clone()));
            }

            trace!(
                event = "expand",
                f = node.f(),
                g = node.g(),
                h = node.h(),
                depth = node.depth(),
            );

            let g = node.g() + 1;
            let board = node.board().clone();
            closed.insert(board.clone());

            let row = board.depth();
            let conflicts = self.assert_successors.then(|| board.count_conflicts());

            for column in 0..board.size() {
                if !board.is_safe(row, column)? {
                    continue;
                }
                let child = board.with_queen(row, column)?;
                if closed.contains(&child) {
                    continue;
                }
                if let Some(conflicts) = conflicts {
                    assert_eq!(
                        child.count_conflicts(),
                        conflicts,
                        "safe placement at ({row}, {column}) changed the conflict count"
                    );
                }
                let h = self.heuristic.evaluate(&child);
                let child_id = arena.push(SearchNode::child(child, g, h, id));
                open.push(child_id, arena.get(child_id));
                stats.record_generated(1);
            }
        }
        Ok(None)
    }

    fn name(&self) -> &'static str {
        "astar"
    }

    fn was_cut_off(&self) -> bool {
        self.cut_off
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heuristic::{ConflictHeuristic, DistanceHeuristic};

    fn run<H: Heuristic>(
        search: &mut AStarSearch<H>,
        size: usize,
    ) -> (Option<Board>, SearchStats) {
        let mut stats = SearchStats::start();
        let root = Board::new(size).unwrap();
        let solution = search.search(root, &mut stats).unwrap();
        (solution, stats)
    }

    #[test]
    fn test_conflict_heuristic_expands_level_by_level() {
        let mut search = AStarSearch::new(ConflictHeuristic).with_assertions(true);
        let (solution, stats) = run(&mut search, 4);

        assert_eq!(solution.unwrap().columns(), &[1, 3, 0, 2]);
        assert_eq!(stats.nodes_explored, 16);
    }

    #[test]
    fn test_distance_heuristic_dives() {
        let mut search = AStarSearch::new(DistanceHeuristic);
        let (solution, stats) = run(&mut search, 8);

        assert_eq!(solution.unwrap().columns(), &[0, 4, 7, 5, 2, 6, 1, 3]);
        assert_eq!(stats.nodes_explored, 114);
    }

    #[test]
    fn test_unsolvable_sizes() {
        for (size, explored) in [(2, 3), (3, 6)] {
            let (solution, stats) = run(&mut AStarSearch::new(ConflictHeuristic), size);
            assert!(solution.is_none());
            assert_eq!(stats.nodes_explored, explored);
        }
    }

    #[test]
    fn test_node_limit_cuts_search() {
        let mut search = AStarSearch::new(ConflictHeuristic).with_node_limit(Some(3));
        let (solution, stats) = run(&mut search, 6);

        assert!(solution.is_none());
        assert!(search.was_cut_off());
        assert_eq!(stats.nodes_explored, 3);
    }
}
