//! N-Queens demo runner

use std::path::{Path, PathBuf};

use clap::Parser;
use nqueens::prelude::*;

/// Boards wider than this are summarised instead of drawn.
const MAX_DRAWN_SIZE: usize = 32;

#[derive(Parser)]
#[command(name = "nqueens")]
#[command(about = "Solve N-Queens with DFS, BFS, A* or a genetic algorithm")]
#[command(version)]
struct Cli {
    /// Board size
    #[arg(default_value = "8")]
    size: usize,

    /// Algorithm: dfs, bfs, astar-conflict, astar-distance or genetic
    #[arg(short, long)]
    algorithm: Option<AlgorithmType>,

    /// Run every algorithm in turn
    #[arg(long, conflicts_with = "algorithm")]
    all: bool,

    /// Random seed for the genetic algorithm
    #[arg(short, long)]
    seed: Option<u64>,

    /// Solver configuration file (TOML, or YAML with a .yaml/.yml extension)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn load_config(path: &Path) -> anyhow::Result<SolverConfig> {
    let config = match path.extension().and_then(|e| e.to_str()) {
        Some("yaml" | "yml") => SolverConfig::from_yaml_file(path)?,
        _ => SolverConfig::from_toml_file(path)?,
    };
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    nqueens::console::init();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => SolverConfig::load("nqueens.toml").unwrap_or_default(),
    };
    if let Some(seed) = cli.seed {
        config = config.with_random_seed(seed);
    }
    let solver = Solver::new(config)?;

    let algorithms = if cli.all {
        AlgorithmType::ALL.to_vec()
    } else {
        vec![cli.algorithm.unwrap_or(solver.config().algorithm)]
    };

    for algorithm in algorithms {
        let result = solver.solve_with(cli.size, algorithm)?;

        println!("\n{algorithm}");
        println!("{result}");
        match result.solution() {
            Some(board) if board.size() <= MAX_DRAWN_SIZE => println!("\n{board}"),
            Some(board) => println!("\n{:?}", board.columns()),
            None => {}
        }
    }

    Ok(())
}
