//! Quantified properties of the tree searches.

use nqueens_config::{AlgorithmType, HeuristicType, SolverConfig};
use nqueens_solver::{solve, Solver};
use nqueens_test::{assert_goal, level_order_explored, SOLVABLE_SIZES, UNSOLVABLE_SIZES};

const TREE_SEARCHES: [AlgorithmType; 4] = [
    AlgorithmType::DepthFirst,
    AlgorithmType::BreadthFirst,
    AlgorithmType::AStar(HeuristicType::Conflict),
    AlgorithmType::AStar(HeuristicType::Distance),
];

#[test]
fn test_tree_searches_solve_every_solvable_size() {
    for algorithm in TREE_SEARCHES {
        for n in SOLVABLE_SIZES {
            let result = solve(n, algorithm).unwrap();
            assert!(result.is_success(), "{algorithm}, N = {n}");

            let solution = result.solution().unwrap();
            assert_eq!(solution.size(), n);
            assert_goal(solution);
        }
    }
}

#[test]
fn test_tree_searches_fail_on_unsolvable_sizes() {
    for algorithm in TREE_SEARCHES {
        for n in UNSOLVABLE_SIZES {
            let result = solve(n, algorithm).unwrap();
            assert!(!result.is_success(), "{algorithm}, N = {n}");
            assert!(result.solution().is_none());
            assert!(result.nodes_explored() > 0);
        }
    }
}

#[test]
fn test_astar_conflict_never_explores_more_than_bfs() {
    for n in 4..=10 {
        let astar = solve(n, AlgorithmType::AStar(HeuristicType::Conflict)).unwrap();
        let bfs = solve(n, AlgorithmType::BreadthFirst).unwrap();

        assert!(
            astar.nodes_explored() <= bfs.nodes_explored(),
            "N = {n}: A* {} > BFS {}",
            astar.nodes_explored(),
            bfs.nodes_explored()
        );
        assert_eq!(Some(bfs.nodes_explored()), level_order_explored(n));
    }
}

#[test]
fn test_genetic_fails_on_unsolvable_sizes() {
    let genetic = nqueens_config::GeneticConfig::default()
        .with_population_size(30)
        .with_max_generations(50);
    let config = SolverConfig::new()
        .with_random_seed(5)
        .with_genetic(genetic);
    let solver = Solver::new(config).unwrap();

    for n in UNSOLVABLE_SIZES {
        let result = solver.solve_with(n, AlgorithmType::Genetic).unwrap();
        assert!(!result.is_success(), "N = {n}");
        assert_eq!(result.nodes_explored(), 50 * 30);
    }
}

#[test]
fn test_generated_counter_is_not_explored_counter() {
    let result = solve(8, AlgorithmType::BreadthFirst).unwrap();
    assert!(result.nodes_generated() > result.nodes_explored());

    let result = solve(3, AlgorithmType::DepthFirst).unwrap();
    assert_eq!(result.nodes_generated(), result.nodes_explored() - 1);
}
