//! Run configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.
//! Defaults mirror a typical retail-catalog run: 50 generations over a
//! population of 50, 10 parents per generation, and single-elite
//! replacement.

use super::selection::Selection;
use crate::error::EvolveError;

/// Configuration for the evolutionary driver.
///
/// # Defaults
///
/// ```
/// use menu_evolve::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.generations, 50);
/// assert_eq!(config.population_size, 50);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use menu_evolve::ga::{GaConfig, Selection};
///
/// let config = GaConfig::default()
///     .with_population_size(100)
///     .with_selection(Selection::Sus)
///     .with_mutation_rate(0.05)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of generations to run. The generation budget is the only
    /// termination condition.
    pub generations: usize,

    /// Number of candidates in the population.
    pub population_size: usize,

    /// Number of parents selected each generation to produce offspring.
    pub parent_count: usize,

    /// Probability of recombining a parent pair (0.0–1.0). When crossover
    /// is not applied, the parents pass through unchanged (before mutation).
    pub crossover_rate: f64,

    /// Independent mutation probability per gene (0.0–1.0).
    pub mutation_rate: f64,

    /// Number of best candidates carried unchanged into the next
    /// generation.
    pub elitism: usize,

    /// Parent-selection strategy.
    pub selection: Selection,

    /// Random seed for reproducibility. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            generations: 50,
            population_size: 50,
            parent_count: 10,
            crossover_rate: 0.7,
            mutation_rate: 0.1,
            elitism: 1,
            selection: Selection::default(),
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the generation budget.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of parents selected per generation.
    pub fn with_parent_count(mut self, n: usize) -> Self {
        self.parent_count = n;
        self
    }

    /// Sets the crossover probability.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate;
        self
    }

    /// Sets the per-gene mutation probability.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the number of elite candidates preserved unchanged.
    pub fn with_elitism(mut self, n: usize) -> Self {
        self.elitism = n;
        self
    }

    /// Sets the parent-selection strategy.
    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.selection = selection;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// Checked by [`super::Driver::run`] before any sampling, so an invalid
    /// configuration fails the run with no partial result.
    pub fn validate(&self) -> Result<(), EvolveError> {
        if self.population_size < 2 {
            return Err(EvolveError::InvalidConfiguration(
                "population_size must be at least 2".into(),
            ));
        }
        if self.generations == 0 {
            return Err(EvolveError::InvalidConfiguration(
                "generations must be at least 1".into(),
            ));
        }
        if self.parent_count < 2 {
            return Err(EvolveError::InvalidConfiguration(
                "parent_count must be at least 2".into(),
            ));
        }
        if self.parent_count > self.population_size {
            return Err(EvolveError::InvalidConfiguration(format!(
                "parent_count {} exceeds population_size {}",
                self.parent_count, self.population_size
            )));
        }
        if !(0.0..=1.0).contains(&self.crossover_rate) {
            return Err(EvolveError::InvalidConfiguration(format!(
                "crossover_rate {} outside [0, 1]",
                self.crossover_rate
            )));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(EvolveError::InvalidConfiguration(format!(
                "mutation_rate {} outside [0, 1]",
                self.mutation_rate
            )));
        }
        if self.elitism >= self.population_size {
            return Err(EvolveError::InvalidConfiguration(
                "elitism must leave room for offspring".into(),
            ));
        }
        Ok(())
    }
}
