//! Parent-selection strategies.
//!
//! Selection determines which candidates become parents for crossover. All
//! strategies assume **maximization** (higher fitness = better) and tolerate
//! negative fitness values: fitness-proportional weights are shifted so the
//! worst candidate maps to a small positive epsilon.
//!
//! # References
//!
//! - Baker (1987), "Reducing Bias and Inefficiency in the Selection
//!   Algorithm"
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use super::types::Candidate;
use rand::Rng;

/// Parent-selection strategy.
///
/// # Examples
///
/// ```
/// use menu_evolve::ga::Selection;
///
/// // Stochastic universal sampling (the default)
/// let sel = Selection::Sus;
///
/// // Tournament with size 3
/// let sel = Selection::Tournament(3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Selection {
    /// Stochastic universal sampling: one spin of a wheel with `count`
    /// equally spaced pointers over fitness-proportional sectors.
    ///
    /// Guarantees each candidate is picked within one of its expected
    /// selection count, so variance is far lower than independent roulette
    /// spins.
    ///
    /// # Complexity
    /// O(n + count) per generation
    Sus,

    /// Fitness-proportionate (roulette wheel) selection, one independent
    /// spin per parent.
    ///
    /// **Warning**: high-variance; a single dominant candidate can flood
    /// the parent pool.
    ///
    /// # Complexity
    /// O(n) per parent
    Roulette,

    /// Tournament selection: pick `k` candidates at random, keep the
    /// fittest. Higher `k` = stronger selection pressure.
    ///
    /// # Complexity
    /// O(k) per parent
    Tournament(usize),
}

impl Default for Selection {
    fn default() -> Self {
        Selection::Sus
    }
}

impl Selection {
    /// Selects `count` parent indices from the population.
    ///
    /// Indices may repeat; the returned order is not meaningful.
    ///
    /// # Panics
    /// Panics if `population` is empty.
    pub fn select_parents<C: Candidate, R: Rng>(
        &self,
        population: &[C],
        count: usize,
        rng: &mut R,
    ) -> Vec<usize> {
        assert!(
            !population.is_empty(),
            "cannot select from empty population"
        );
        if count == 0 {
            return Vec::new();
        }

        match self {
            Selection::Sus => stochastic_universal(population, count, rng),
            Selection::Roulette => {
                let weights = proportional_weights(population);
                (0..count).map(|_| spin(&weights, rng)).collect()
            }
            Selection::Tournament(k) => (0..count)
                .map(|_| tournament(population, *k, rng))
                .collect(),
        }
    }
}

/// Fitness-proportional weights for maximization.
///
/// Shifted so the minimum fitness maps to a small positive epsilon; with a
/// fully uniform population every weight equals epsilon and selection
/// degenerates to uniform-random, which is the intended behavior.
fn proportional_weights<C: Candidate>(population: &[C]) -> Vec<f64> {
    let min_fitness = population
        .iter()
        .map(|c| c.fitness())
        .fold(f64::INFINITY, f64::min);

    let epsilon = 1e-10;
    population
        .iter()
        .map(|c| {
            let w = c.fitness() - min_fitness + epsilon;
            if w > 0.0 {
                w
            } else {
                epsilon
            }
        })
        .collect()
}

/// Stochastic universal sampling (Baker, 1987).
///
/// A single random offset positions `count` equally spaced pointers over the
/// cumulative weight axis; one linear walk collects the picks.
fn stochastic_universal<C: Candidate, R: Rng>(
    population: &[C],
    count: usize,
    rng: &mut R,
) -> Vec<usize> {
    let weights = proportional_weights(population);
    let total: f64 = weights.iter().sum();
    if total <= 0.0 {
        return (0..count)
            .map(|_| rng.random_range(0..population.len()))
            .collect();
    }

    let spacing = total / count as f64;
    let start = rng.random_range(0.0..spacing);

    let mut picks = Vec::with_capacity(count);
    let mut cumulative = weights[0];
    let mut idx = 0;
    for i in 0..count {
        let pointer = start + spacing * i as f64;
        while cumulative < pointer && idx + 1 < weights.len() {
            idx += 1;
            cumulative += weights[idx];
        }
        picks.push(idx);
    }
    picks
}

/// One roulette spin over precomputed weights.
fn spin<R: Rng>(weights: &[f64], rng: &mut R) -> usize {
    let total: f64 = weights.iter().sum();
    if total <= 0.0 {
        return rng.random_range(0..weights.len());
    }

    let threshold = rng.random_range(0.0..total);
    let mut cumulative = 0.0;
    for (i, &w) in weights.iter().enumerate() {
        cumulative += w;
        if cumulative > threshold {
            return i;
        }
    }

    weights.len() - 1 // floating-point fallback
}

/// Tournament selection: pick k random candidates, return the fittest.
fn tournament<C: Candidate, R: Rng>(population: &[C], k: usize, rng: &mut R) -> usize {
    let k = k.max(1);
    let n = population.len();

    let mut best_idx = rng.random_range(0..n);
    for _ in 1..k {
        let idx = rng.random_range(0..n);
        if population[idx].fitness() > population[best_idx].fitness() {
            best_idx = idx;
        }
    }
    best_idx
}
