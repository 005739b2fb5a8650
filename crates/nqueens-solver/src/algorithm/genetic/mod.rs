//! Genetic search over permutations.
//!
//! Each individual encodes one queen per row and per column, so only
//! diagonal attacks remain to be bred out. A generation is:
//!
//! 1. Sort by fitness (diagonal conflicts, lower is better)
//! 2. Stop if the best individual has no conflicts
//! 3. Reseed part of the population if the best fitness has stalled
//! 4. Carry the elites over, then fill up with tournament-selected parents
//!    bred by PMX crossover and swap mutation

mod individual;
mod operators;

use nqueens_config::GeneticConfig;
use nqueens_core::{Board, QueensError, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use super::SearchAlgorithm;
use crate::stats::SearchStats;

pub use individual::Individual;
pub use operators::{is_permutation, pmx_crossover, pmx_with_cuts, swap_mutation, tournament_select};

/// Generations between progress events.
const PROGRESS_INTERVAL: u64 = 1_000;

/// Evolutionary solver with elitism and stagnation restarts.
///
/// The random number generator is owned by the solver, so two solvers
/// built with the same seed and configuration produce identical runs.
#[derive(Debug, Clone)]
pub struct GeneticSearch {
    config: GeneticConfig,
    rng: StdRng,
}

impl GeneticSearch {
    /// Creates a solver seeded with `seed`, or from the OS when `None`.
    pub fn new(config: GeneticConfig, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self { config, rng }
    }

    pub fn config(&self) -> &GeneticConfig {
        &self.config
    }

    fn random_population(&mut self, size: usize, stats: &mut SearchStats) -> Vec<Individual> {
        stats.record_generated(self.config.population_size as u64);
        (0..self.config.population_size)
            .map(|_| Individual::random(size, &mut self.rng))
            .collect()
    }

    /// Replaces `[elite_size, population_size / 2)` with fresh permutations.
    fn reseed(&mut self, population: &mut [Individual], size: usize, stats: &mut SearchStats) {
        let end = self.config.population_size / 2;
        let elite = self.config.elite_size;
        for slot in population.iter_mut().take(end).skip(elite) {
            *slot = Individual::random(size, &mut self.rng);
            stats.record_generated(1);
        }
    }

    fn breed(&mut self, population: &[Individual], stats: &mut SearchStats) -> Vec<Individual> {
        let config = &self.config;
        let mut next = Vec::with_capacity(config.population_size);
        next.extend(population.iter().take(config.elite_size).cloned());

        while next.len() < config.population_size {
            let parent1 = tournament_select(population, config.tournament_size, &mut self.rng);
            let parent2 = tournament_select(population, config.tournament_size, &mut self.rng);

            let mut genes = if self.rng.random_bool(config.crossover_rate) {
                pmx_crossover(parent1.genes(), parent2.genes(), &mut self.rng)
            } else {
                parent1.genes().to_vec()
            };
            if self.rng.random_bool(config.mutation_rate) {
                swap_mutation(&mut genes, &mut self.rng);
            }

            next.push(Individual::new(genes));
            stats.record_generated(1);
        }
        next
    }
}

impl SearchAlgorithm for GeneticSearch {
    fn search(&mut self, root: Board, stats: &mut SearchStats) -> Result<Option<Board>> {
        self.config
            .validate()
            .map_err(|e| QueensError::Config(e.to_string()))?;

        let size = root.size();
        let mut population = self.random_population(size, stats);
        let mut best_so_far = usize::MAX;
        let mut stagnant_generations = 0u64;

        for generation in 0..self.config.max_generations {
            stats.record_explored_batch(population.len() as u64);
            population.sort_by_key(Individual::fitness);

            let best = population[0].fitness();
            if best < best_so_far {
                best_so_far = best;
                stagnant_generations = 0;
            } else {
                stagnant_generations += 1;
            }

            if best == 0 {
                debug!(
                    event = "generation",
                    generation = generation,
                    best_fitness = best,
                    solved = true,
                );
                return population[0].to_board().map(Some);
            }

            if generation % PROGRESS_INTERVAL == 0 {
                debug!(
                    event = "generation",
                    generation = generation,
                    best_fitness = best,
                    solved = false,
                );
            }

            if stagnant_generations >= self.config.stagnation_window {
                debug!(
                    event = "stagnation_restart",
                    generation = generation,
                    best_fitness = best,
                    window = self.config.stagnation_window,
                );
                self.reseed(&mut population, size, stats);
                stagnant_generations = 0;
            }

            population = self.breed(&population, stats);
        }

        debug!(
            event = "generation_limit_reached",
            generations = self.config.max_generations,
            best_fitness = best_so_far,
        );
        Ok(None)
    }

    fn name(&self) -> &'static str {
        "genetic"
    }
}
