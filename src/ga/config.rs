//! Genetic solver configuration.
//!
//! [`GaConfig`] holds every parameter that controls the evolutionary
//! loop; [`FitnessWeights`] holds the fitness-function coefficients.

/// Fitness-function coefficients.
///
/// Rewards scale rates in `0.0..=1.0`; penalties apply per violation
/// unit (overfilled seat, conflicting pair, excess session). The
/// defaults keep satisfaction dominant over completion and make any
/// single violation outweigh the largest reward one extra booking can
/// earn, so a feasible schedule always outscores an infeasible one of
/// comparable quality.
#[derive(Debug, Clone, PartialEq)]
pub struct FitnessWeights {
    /// Reward multiplier for the fraction of fully scheduled campers.
    pub completion: f64,
    /// Reward multiplier for the preference-satisfaction rate.
    pub satisfaction: f64,
    /// Penalty per seat enrolled beyond a session's capacity.
    pub capacity_penalty: f64,
    /// Penalty per (workshop, slot) pair mixing incompatible cohorts.
    pub cohort_penalty: f64,
    /// Penalty per session running beyond a slot's concurrency ceiling.
    pub ceiling_penalty: f64,
}

impl Default for FitnessWeights {
    fn default() -> Self {
        Self {
            completion: 50.0,
            satisfaction: 150.0,
            capacity_penalty: 200.0,
            cohort_penalty: 200.0,
            ceiling_penalty: 200.0,
        }
    }
}

/// Configuration for the genetic solver.
///
/// # Defaults
///
/// ```
/// use camp_schedule::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.max_generations, 1500);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use camp_schedule::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(200)
///     .with_tournament_size(5)
///     .with_mutation_rate(0.1)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GaConfig {
    /// Number of schedules in the population.
    ///
    /// Larger populations increase diversity but slow down each
    /// generation. Typical range: 50–500.
    pub population_size: usize,

    /// Maximum number of generations before termination.
    pub max_generations: usize,

    /// Probability of recombining a selected parent pair (0.0–1.0).
    ///
    /// When crossover is not applied, the parents are cloned through.
    pub crossover_rate: f64,

    /// Probability of mutating an offspring (0.0–1.0).
    pub mutation_rate: f64,

    /// Tournament size for parent selection.
    ///
    /// Higher values mean stronger selection pressure; 2–5 is typical.
    pub tournament_size: usize,

    /// Generations without improvement before stopping early.
    ///
    /// Set to 0 to disable stagnation-based termination.
    pub stagnation_limit: usize,

    /// Random seed for reproducibility. `None` uses an OS seed.
    pub seed: Option<u64>,

    /// Optional wall-clock budget in milliseconds.
    ///
    /// Checked at the start of each generation, so the actual runtime
    /// may exceed the budget by one generation's worth of work.
    /// `None` disables time-based termination.
    pub time_limit_ms: Option<u64>,

    /// Fitness-function coefficients.
    pub weights: FitnessWeights,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            max_generations: 1500,
            crossover_rate: 0.8,
            mutation_rate: 0.2,
            tournament_size: 3,
            stagnation_limit: 100,
            seed: None,
            time_limit_ms: None,
            weights: FitnessWeights::default(),
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the maximum number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the crossover rate.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the tournament size.
    pub fn with_tournament_size(mut self, k: usize) -> Self {
        self.tournament_size = k;
        self
    }

    /// Sets the stagnation limit (0 to disable).
    pub fn with_stagnation_limit(mut self, limit: usize) -> Self {
        self.stagnation_limit = limit;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the wall-clock budget in milliseconds.
    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = Some(ms);
        self
    }

    /// Sets the fitness weights.
    pub fn with_weights(mut self, weights: FitnessWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.population_size < 2 {
            return Err("population_size must be at least 2".into());
        }
        if self.max_generations == 0 {
            return Err("max_generations must be at least 1".into());
        }
        if self.tournament_size == 0 {
            return Err("tournament_size must be at least 1".into());
        }
        if self.time_limit_ms == Some(0) {
            return Err("time_limit_ms must be positive or None".into());
        }
        Ok(())
    }
}
