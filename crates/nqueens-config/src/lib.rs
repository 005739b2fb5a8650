//! Configuration system for the N-Queens solvers.
//!
//! Load solver configuration from TOML or YAML to pick the default
//! algorithm, pin the random seed, cap tree searches and tune the genetic
//! solver without code changes.
//!
//! # Examples
//!
//! Load configuration from a TOML string:
//!
//! ```
//! use nqueens_config::{AlgorithmType, HeuristicType, SolverConfig};
//!
//! let config = SolverConfig::from_toml_str(r#"
//!     random_seed = 7
//!     algorithm = { astar = "distance" }
//!
//!     [genetic]
//!     population_size = 120
//!     mutation_rate = 0.2
//! "#).unwrap();
//!
//! assert_eq!(config.algorithm, AlgorithmType::AStar(HeuristicType::Distance));
//! assert_eq!(config.genetic.population_size, 120);
//! assert_eq!(config.genetic.elite_size, 5);
//! ```
//!
//! Use the default config when the file is missing:
//!
//! ```
//! use nqueens_config::SolverConfig;
//!
//! let config = SolverConfig::load("nqueens.toml").unwrap_or_default();
//! // Proceeds with defaults if file doesn't exist
//! ```

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main solver configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SolverConfig {
    /// Environment mode affecting reproducibility and assertions.
    #[serde(default)]
    pub environment_mode: EnvironmentMode,

    /// Random seed for reproducible results.
    #[serde(default)]
    pub random_seed: Option<u64>,

    /// Algorithm used when a caller does not name one.
    #[serde(default)]
    pub algorithm: AlgorithmType,

    /// Maximum nodes a tree search may explore before giving up.
    #[serde(default)]
    pub node_limit: Option<u64>,

    /// Genetic solver hyperparameters.
    #[serde(default)]
    pub genetic: GeneticConfig,
}

impl SolverConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist or contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Sets the random seed.
    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    /// Sets the default algorithm.
    pub fn with_algorithm(mut self, algorithm: AlgorithmType) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Caps the number of nodes explored by the tree searches.
    pub fn with_node_limit(mut self, limit: u64) -> Self {
        self.node_limit = Some(limit);
        self
    }

    /// Replaces the genetic solver hyperparameters.
    pub fn with_genetic(mut self, genetic: GeneticConfig) -> Self {
        self.genetic = genetic;
        self
    }

    /// Sets the environment mode.
    pub fn with_environment_mode(mut self, mode: EnvironmentMode) -> Self {
        self.environment_mode = mode;
        self
    }

    /// Returns the seed the genetic solver should use.
    ///
    /// An explicit seed always wins. Without one, reproducible modes fall
    /// back to seed 0 and non-reproducible mode returns `None`.
    pub fn effective_seed(&self) -> Option<u64> {
        match self.random_seed {
            Some(seed) => Some(seed),
            None if self.environment_mode.is_reproducible() => Some(0),
            None => None,
        }
    }

    /// Checks the configuration for values no solver can run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.node_limit == Some(0) {
            return Err(ConfigError::Invalid("node_limit must be greater than zero".to_string()));
        }
        self.genetic.validate()
    }
}

/// Environment mode affecting solver behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EnvironmentMode {
    /// Non-reproducible mode with minimal overhead.
    #[default]
    NonReproducible,

    /// Reproducible mode with deterministic behavior.
    Reproducible,

    /// Reproducible mode that also checks every generated successor.
    FullAssert,
}

impl EnvironmentMode {
    /// Returns true if runs must be repeatable without an explicit seed.
    pub fn is_reproducible(self) -> bool {
        matches!(self, Self::Reproducible | Self::FullAssert)
    }

    /// Returns true if per-node invariant checks are enabled.
    pub fn is_asserted(self) -> bool {
        matches!(self, Self::FullAssert)
    }
}

/// Heuristic used to order the A* open set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HeuristicType {
    /// Number of attacking pairs.
    #[default]
    Conflict,

    /// Remaining rows plus attacking pairs.
    Distance,
}

impl fmt::Display for HeuristicType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeuristicType::Conflict => write!(f, "Conflict"),
            HeuristicType::Distance => write!(f, "Distance"),
        }
    }
}

/// Solver selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AlgorithmType {
    /// Row-by-row backtracking.
    #[default]
    DepthFirst,

    /// Level-by-level expansion from the empty board.
    BreadthFirst,

    /// Best-first expansion ordered by `g + h`.
    #[serde(rename = "astar")]
    AStar(HeuristicType),

    /// Evolutionary search over permutations.
    Genetic,
}

impl AlgorithmType {
    /// Every algorithm, in menu order.
    pub const ALL: [AlgorithmType; 5] = [
        AlgorithmType::DepthFirst,
        AlgorithmType::BreadthFirst,
        AlgorithmType::AStar(HeuristicType::Conflict),
        AlgorithmType::AStar(HeuristicType::Distance),
        AlgorithmType::Genetic,
    ];

    /// Returns the short identifier accepted by [`FromStr`].
    pub fn key(&self) -> &'static str {
        match self {
            AlgorithmType::DepthFirst => "dfs",
            AlgorithmType::BreadthFirst => "bfs",
            AlgorithmType::AStar(HeuristicType::Conflict) => "astar-conflict",
            AlgorithmType::AStar(HeuristicType::Distance) => "astar-distance",
            AlgorithmType::Genetic => "genetic",
        }
    }

    /// Returns true for the exhaustive tree searches.
    pub fn is_tree_search(&self) -> bool {
        !matches!(self, AlgorithmType::Genetic)
    }
}

impl fmt::Display for AlgorithmType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlgorithmType::DepthFirst => write!(f, "Depth First Search"),
            AlgorithmType::BreadthFirst => write!(f, "Breadth First Search"),
            AlgorithmType::AStar(heuristic) => write!(f, "A* ({heuristic})"),
            AlgorithmType::Genetic => write!(f, "Genetic Algorithm"),
        }
    }
}

impl FromStr for AlgorithmType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        AlgorithmType::ALL
            .into_iter()
            .find(|a| a.key() == key)
            .ok_or_else(|| {
                let known: Vec<&str> = AlgorithmType::ALL.iter().map(|a| a.key()).collect();
                ConfigError::Invalid(format!(
                    "unknown algorithm '{s}', expected one of: {}",
                    known.join(", ")
                ))
            })
    }
}

/// Genetic solver hyperparameters.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct GeneticConfig {
    /// Number of individuals per generation.
    pub population_size: usize,

    /// Generation cap; reaching it without a goal is a failure.
    pub max_generations: u64,

    /// Probability of breeding a child with PMX instead of cloning.
    pub crossover_rate: f64,

    /// Probability of applying a swap mutation to a child.
    pub mutation_rate: f64,

    /// Individuals sampled per tournament.
    pub tournament_size: usize,

    /// Best individuals carried over unchanged.
    pub elite_size: usize,

    /// Generations without improvement before part of the population is reseeded.
    pub stagnation_window: u64,
}

impl Default for GeneticConfig {
    fn default() -> Self {
        Self {
            population_size: 200,
            max_generations: 50_000,
            crossover_rate: 0.85,
            mutation_rate: 0.15,
            tournament_size: 5,
            elite_size: 5,
            stagnation_window: 1_000,
        }
    }
}

impl GeneticConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, size: usize) -> Self {
        self.population_size = size;
        self
    }

    /// Sets the generation cap.
    pub fn with_max_generations(mut self, generations: u64) -> Self {
        self.max_generations = generations;
        self
    }

    /// Sets the elite size.
    pub fn with_elite_size(mut self, size: usize) -> Self {
        self.elite_size = size;
        self
    }

    /// Sets the stagnation window.
    pub fn with_stagnation_window(mut self, generations: u64) -> Self {
        self.stagnation_window = generations;
        self
    }

    /// Checks hyperparameters for values the generation loop cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: String| Err(ConfigError::Invalid(msg));

        if self.population_size < 2 {
            return invalid(format!(
                "population_size must be at least 2, got {}",
                self.population_size
            ));
        }
        if self.elite_size >= self.population_size {
            return invalid(format!(
                "elite_size ({}) must be smaller than population_size ({})",
                self.elite_size, self.population_size
            ));
        }
        if self.tournament_size == 0 {
            return invalid("tournament_size must be at least 1".to_string());
        }
        for (name, rate) in [
            ("crossover_rate", self.crossover_rate),
            ("mutation_rate", self.mutation_rate),
        ] {
            if !(0.0..=1.0).contains(&rate) {
                return invalid(format!("{name} must be within [0, 1], got {rate}"));
            }
        }
        if self.stagnation_window == 0 {
            return invalid("stagnation_window must be greater than zero".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
