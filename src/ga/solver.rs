//! Evolutionary loop execution.
//!
//! [`GeneticSolver`] orchestrates the complete process:
//! seeding → evaluation → selection → crossover → mutation → repeat,
//! with best-ever elitism and stagnation-based early stopping.

use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::{Configuration, Schedule, SchedulingPolicy};

use super::config::GaConfig;
use super::fitness::evaluate;
use super::operators::{crossover, mutate};
use super::seeding::{seed_schedule, SeedStrategy};

/// Result of a genetic optimization run.
#[derive(Debug, Clone)]
pub struct GaResult {
    /// The best schedule found during the entire run.
    pub best: Schedule,

    /// Fitness of [`best`](Self::best).
    pub best_fitness: f64,

    /// Number of generations executed.
    pub generations: usize,

    /// Whether the run stopped early due to stagnation.
    pub stagnated: bool,

    /// Best-ever fitness at seeding time and after each generation.
    pub fitness_history: Vec<f64>,
}

/// Population-based evolutionary solver.
///
/// Each individual is a complete, valid [`Schedule`]: the four seeding
/// strategies are cycled across the initial population, crossover
/// repairs every spliced row, and mutation only commits validated
/// swaps. The best schedule ever seen is cloned into every following
/// generation (elitism) and is what [`run`](Self::run) returns.
///
/// # Example
///
/// ```
/// use camp_schedule::ga::{GaConfig, GeneticSolver};
/// use camp_schedule::models::{AgeGroup, Camper, Configuration, SchedulingPolicy};
///
/// let config = Configuration::new()
///     .with_workshops(["Archery", "Pottery", "Robotics"])
///     .with_camper(
///         Camper::new("c1", AgeGroup::Kilobyte)
///             .with_preferences(["Archery", "Pottery", "Robotics"]),
///     );
///
/// let solver = GeneticSolver::new(SchedulingPolicy::default()).with_config(
///     GaConfig::default()
///         .with_population_size(10)
///         .with_max_generations(20)
///         .with_seed(42),
/// );
/// let result = solver.run(&config);
/// assert!(result.best.is_valid());
/// ```
#[derive(Debug, Clone, Default)]
pub struct GeneticSolver {
    policy: SchedulingPolicy,
    config: GaConfig,
}

impl GeneticSolver {
    /// Creates a solver with the given policy and default GA settings.
    pub fn new(policy: SchedulingPolicy) -> Self {
        Self {
            policy,
            config: GaConfig::default(),
        }
    }

    /// Sets the GA settings.
    pub fn with_config(mut self, config: GaConfig) -> Self {
        self.config = config;
        self
    }

    /// Runs the evolutionary loop.
    ///
    /// # Panics
    /// Panics if the configuration is invalid (call [`GaConfig::validate`]
    /// first to get a descriptive error).
    pub fn run(&self, configuration: &Configuration) -> GaResult {
        self.config.validate().expect("invalid GaConfig");

        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let start = Instant::now();
        let campers = &configuration.campers;

        // Seed a diverse initial population.
        let mut population: Vec<Schedule> = (0..self.config.population_size)
            .map(|i| {
                let strategy = SeedStrategy::CYCLE[i % SeedStrategy::CYCLE.len()];
                seed_schedule(strategy, configuration, &self.policy, &mut rng)
            })
            .collect();
        let mut fitness: Vec<f64> = population
            .iter()
            .map(|s| evaluate(s, campers, &self.config.weights))
            .collect();

        let best_idx = argmax(&fitness);
        let mut best = population[best_idx].clone();
        let mut best_fitness = fitness[best_idx];

        let mut fitness_history = Vec::with_capacity(self.config.max_generations + 1);
        fitness_history.push(best_fitness);

        let mut stagnation = 0usize;
        let mut stagnated = false;
        let mut generations = 0usize;

        for _ in 0..self.config.max_generations {
            if let Some(limit) = self.config.time_limit_ms {
                if start.elapsed().as_millis() >= u128::from(limit) {
                    break;
                }
            }
            generations += 1;

            // Selection + crossover.
            let mut next = Vec::with_capacity(self.config.population_size);
            while next.len() < self.config.population_size {
                let p1 = tournament(&fitness, self.config.tournament_size, &mut rng);
                let p2 = tournament(&fitness, self.config.tournament_size, &mut rng);

                if rng.random_range(0.0..1.0) < self.config.crossover_rate {
                    let (c1, c2) = crossover(campers, &population[p1], &population[p2], &mut rng);
                    next.push(c1);
                    if next.len() < self.config.population_size {
                        next.push(c2);
                    }
                } else {
                    next.push(population[p1].clone());
                    if next.len() < self.config.population_size {
                        next.push(population[p2].clone());
                    }
                }
            }

            // Mutation.
            for individual in &mut next {
                if rng.random_range(0.0..1.0) < self.config.mutation_rate {
                    mutate(campers, individual, &mut rng);
                }
            }

            population = next;
            fitness = population
                .iter()
                .map(|s| evaluate(s, campers, &self.config.weights))
                .collect();

            // Track the best-ever schedule.
            let gen_best = argmax(&fitness);
            if fitness[gen_best] > best_fitness {
                best = population[gen_best].clone();
                best_fitness = fitness[gen_best];
                stagnation = 0;
            } else {
                stagnation += 1;
            }

            // Elitism: the best-ever schedule replaces the worst member,
            // so a regression can never lose it.
            let worst = argmin(&fitness);
            population[worst] = best.clone();
            fitness[worst] = best_fitness;

            fitness_history.push(best_fitness);

            if self.config.stagnation_limit > 0 && stagnation >= self.config.stagnation_limit {
                stagnated = true;
                break;
            }
        }

        GaResult {
            best,
            best_fitness,
            generations,
            stagnated,
            fitness_history,
        }
    }
}

/// Tournament selection: sample `k` members, return the fittest.
fn tournament<R: Rng>(fitness: &[f64], k: usize, rng: &mut R) -> usize {
    let n = fitness.len();
    let mut best = rng.random_range(0..n);
    for _ in 1..k.max(1) {
        let contender = rng.random_range(0..n);
        if fitness[contender] > fitness[best] {
            best = contender;
        }
    }
    best
}

fn argmax(values: &[f64]) -> usize {
    let mut best = 0;
    for (i, v) in values.iter().enumerate() {
        if *v > values[best] {
            best = i;
        }
    }
    best
}

fn argmin(values: &[f64]) -> usize {
    let mut worst = 0;
    for (i, v) in values.iter().enumerate() {
        if *v < values[worst] {
            worst = i;
        }
    }
    worst
}
