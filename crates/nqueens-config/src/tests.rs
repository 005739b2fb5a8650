//! Tests for solver configuration.

use super::*;

#[test]
fn test_toml_parsing() {
    let toml = r#"
        environment_mode = "reproducible"
        random_seed = 42
        algorithm = "breadth_first"
        node_limit = 100000

        [genetic]
        population_size = 300
        max_generations = 2000
        crossover_rate = 0.9
        stagnation_window = 250
    "#;

    let config = SolverConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.environment_mode, EnvironmentMode::Reproducible);
    assert_eq!(config.random_seed, Some(42));
    assert_eq!(config.algorithm, AlgorithmType::BreadthFirst);
    assert_eq!(config.node_limit, Some(100_000));
    assert_eq!(config.genetic.population_size, 300);
    assert_eq!(config.genetic.max_generations, 2000);
    assert_eq!(config.genetic.stagnation_window, 250);
    // Unspecified fields keep their defaults
    assert_eq!(config.genetic.tournament_size, 5);
    assert_eq!(config.genetic.mutation_rate, 0.15);
}

#[test]
fn test_toml_astar_algorithm() {
    let config = SolverConfig::from_toml_str(r#"algorithm = { astar = "conflict" }"#).unwrap();
    assert_eq!(
        config.algorithm,
        AlgorithmType::AStar(HeuristicType::Conflict)
    );
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        environment_mode: full_assert
        random_seed: 42
        algorithm: genetic
        genetic:
          population_size: 50
          elite_size: 2
    "#;

    let config = SolverConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.environment_mode, EnvironmentMode::FullAssert);
    assert_eq!(config.random_seed, Some(42));
    assert_eq!(config.algorithm, AlgorithmType::Genetic);
    assert_eq!(config.genetic.population_size, 50);
    assert_eq!(config.genetic.elite_size, 2);
}

#[test]
fn test_empty_toml_is_default() {
    let config = SolverConfig::from_toml_str("").unwrap();
    assert_eq!(config, SolverConfig::default());
    assert_eq!(config.genetic, GeneticConfig::default());
}

#[test]
fn test_invalid_toml_reports_parse_error() {
    let err = SolverConfig::from_toml_str("algorithm = \"hill_climbing\"").unwrap_err();
    assert!(matches!(err, ConfigError::Toml(_)));
}

#[test]
fn test_missing_file_reports_io_error() {
    let err = SolverConfig::load("does/not/exist/nqueens.toml").unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn test_builder() {
    let config = SolverConfig::new()
        .with_random_seed(123)
        .with_node_limit(5_000)
        .with_algorithm(AlgorithmType::Genetic)
        .with_genetic(GeneticConfig::default().with_population_size(64));

    assert_eq!(config.random_seed, Some(123));
    assert_eq!(config.node_limit, Some(5_000));
    assert_eq!(config.algorithm, AlgorithmType::Genetic);
    assert_eq!(config.genetic.population_size, 64);
    assert!(config.validate().is_ok());
}

#[test]
fn test_genetic_defaults() {
    let genetic = GeneticConfig::default();

    assert_eq!(genetic.population_size, 200);
    assert_eq!(genetic.max_generations, 50_000);
    assert_eq!(genetic.crossover_rate, 0.85);
    assert_eq!(genetic.mutation_rate, 0.15);
    assert_eq!(genetic.tournament_size, 5);
    assert_eq!(genetic.elite_size, 5);
    assert_eq!(genetic.stagnation_window, 1_000);
    assert!(genetic.validate().is_ok());
}

#[test]
fn test_genetic_validation() {
    let base = GeneticConfig::default();

    assert!(base.clone().with_population_size(1).validate().is_err());
    assert!(base.clone().with_elite_size(200).validate().is_err());
    assert!(base.clone().with_stagnation_window(0).validate().is_err());
    assert!(GeneticConfig {
        tournament_size: 0,
        ..base.clone()
    }
    .validate()
    .is_err());
    assert!(GeneticConfig {
        crossover_rate: 1.5,
        ..base.clone()
    }
    .validate()
    .is_err());
    assert!(GeneticConfig {
        mutation_rate: -0.1,
        ..base
    }
    .validate()
    .is_err());
}

#[test]
fn test_zero_node_limit_rejected() {
    let config = SolverConfig::new().with_node_limit(0);
    assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
}

#[test]
fn test_effective_seed() {
    assert_eq!(SolverConfig::new().effective_seed(), None);
    assert_eq!(
        SolverConfig::new().with_random_seed(9).effective_seed(),
        Some(9)
    );
    assert_eq!(
        SolverConfig::new()
            .with_environment_mode(EnvironmentMode::Reproducible)
            .effective_seed(),
        Some(0)
    );
    assert_eq!(
        SolverConfig::new()
            .with_environment_mode(EnvironmentMode::FullAssert)
            .with_random_seed(3)
            .effective_seed(),
        Some(3)
    );
}

#[test]
fn test_environment_mode_flags() {
    assert!(!EnvironmentMode::NonReproducible.is_reproducible());
    assert!(EnvironmentMode::Reproducible.is_reproducible());
    assert!(!EnvironmentMode::Reproducible.is_asserted());
    assert!(EnvironmentMode::FullAssert.is_asserted());
}

#[test]
fn test_algorithm_display() {
    let names: Vec<String> = AlgorithmType::ALL.iter().map(|a| a.to_string()).collect();
    assert_eq!(
        names,
        [
            "Depth First Search",
            "Breadth First Search",
            "A* (Conflict)",
            "A* (Distance)",
            "Genetic Algorithm",
        ]
    );
}

#[test]
fn test_algorithm_from_str() {
    for algorithm in AlgorithmType::ALL {
        assert_eq!(algorithm.key().parse::<AlgorithmType>().unwrap(), algorithm);
    }
    assert_eq!(
        " ASTAR-Distance ".parse::<AlgorithmType>().unwrap(),
        AlgorithmType::AStar(HeuristicType::Distance)
    );
    assert!("simulated-annealing".parse::<AlgorithmType>().is_err());
}

#[test]
fn test_is_tree_search() {
    assert!(AlgorithmType::DepthFirst.is_tree_search());
    assert!(AlgorithmType::AStar(HeuristicType::Distance).is_tree_search());
    assert!(!AlgorithmType::Genetic.is_tree_search());
}
