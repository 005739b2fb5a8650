//! End-to-end solve scenarios.

use nqueens_config::{AlgorithmType, HeuristicType, SolverConfig};
use nqueens_solver::{solve, Solver};
use nqueens_test::{assert_goal, first_solution};

#[test]
fn test_single_queen_any_algorithm() {
    for algorithm in AlgorithmType::ALL {
        let result = solve(1, algorithm).unwrap();

        assert!(result.is_success(), "{algorithm}");
        let solution = result.solution().unwrap();
        assert_eq!(solution.columns(), &[0]);
        assert_eq!(solution.count_conflicts(), 0);
    }
}

#[test]
fn test_four_queens_depth_first() {
    let result = solve(4, AlgorithmType::DepthFirst).unwrap();

    assert!(result.is_success());
    assert_eq!(result.solution().unwrap().columns(), &[1, 3, 0, 2]);
}

#[test]
fn test_four_queens_breadth_first() {
    let result = solve(4, AlgorithmType::BreadthFirst).unwrap();

    assert!(result.is_success());
    let columns = result.solution().unwrap().columns();
    assert!(columns == [1, 3, 0, 2] || columns == [2, 0, 3, 1]);
}

#[test]
fn test_three_queens_depth_first_fails() {
    let result = solve(3, AlgorithmType::DepthFirst).unwrap();

    assert!(!result.is_success());
    assert!(result.solution().is_none());
    assert!(result.nodes_explored() > 0);
}

#[test]
fn test_eight_queens_astar_conflict() {
    let result = solve(8, AlgorithmType::AStar(HeuristicType::Conflict)).unwrap();

    assert!(result.is_success());
    let solution = result.solution().unwrap();
    assert_eq!(solution.size(), 8);
    assert!(solution.is_valid());
    assert!(result.nodes_explored() >= 8);
    assert_goal(solution);
}

#[test]
fn test_eight_queens_genetic_seeded() {
    let solver = Solver::new(SolverConfig::new().with_random_seed(42)).unwrap();

    let first = solver.solve_with(8, AlgorithmType::Genetic).unwrap();
    let second = solver.solve_with(8, AlgorithmType::Genetic).unwrap();

    assert!(first.is_success());
    let solution = first.solution().unwrap();
    assert_goal(solution);

    let mut genes = solution.columns().to_vec();
    genes.sort_unstable();
    assert_eq!(genes, (0..8).collect::<Vec<i16>>());

    assert_eq!(first.solution(), second.solution());
    assert_eq!(first.nodes_explored(), second.nodes_explored());
    assert_eq!(first.nodes_generated(), second.nodes_generated());
}

#[test]
fn test_dfs_and_level_order_agree_on_first_solution() {
    for algorithm in [
        AlgorithmType::DepthFirst,
        AlgorithmType::BreadthFirst,
        AlgorithmType::AStar(HeuristicType::Distance),
    ] {
        for n in [5, 6, 7, 8] {
            let result = solve(n, algorithm).unwrap();
            assert_eq!(
                result.solution().map(|b| b.columns()),
                first_solution(n),
                "{algorithm}, N = {n}"
            );
        }
    }
}

#[test]
fn test_result_summary() {
    let result = solve(4, AlgorithmType::DepthFirst).unwrap();
    let summary = result.to_string();

    assert!(summary.starts_with("Solution found: yes\nNodes explored: 9\nTime: "));
    assert!(summary.ends_with(" ms"));
}
