//! Evolutionary loop execution.
//!
//! [`Driver`] owns the complete process as an explicit state machine:
//! init (sample → repair → evaluate) → generation steps (selection →
//! crossover → mutation → repair → replacement) → terminal. One seeded PRNG
//! drives every stochastic step, so a fixed seed reproduces a run exactly.

use super::config::GaConfig;
use super::types::{Candidate, Problem};
use crate::error::EvolveError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::cmp::Ordering;
use tracing::debug;

/// Result of an evolutionary run.
pub struct GaResult<P: Problem> {
    /// The best candidate observed across all generations (running maximum,
    /// never decreases).
    pub best: P::Candidate,

    /// Fitness of [`best`](GaResult::best).
    pub best_fitness: f64,

    /// Domain-facing form of the best candidate.
    pub decoded: P::Decoded,

    /// Position of the fittest candidate in the final population. With
    /// elitism ≥ 1 this candidate is the overall best; with elitism 0 the
    /// overall best may no longer be present.
    pub best_index: usize,

    /// Best fitness in each generation's population, in generation order.
    /// Length equals the number of generations run; non-decreasing whenever
    /// elitism ≥ 1.
    pub trace: Vec<f64>,
}

impl<P: Problem> std::fmt::Debug for GaResult<P>
where
    P::Candidate: std::fmt::Debug,
    P::Decoded: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GaResult")
            .field("best", &self.best)
            .field("best_fitness", &self.best_fitness)
            .field("decoded", &self.decoded)
            .field("best_index", &self.best_index)
            .field("trace", &self.trace)
            .finish()
    }
}

/// Executes the evolutionary loop.
///
/// # Usage
///
/// ```ignore
/// let problem = MenuProblem::new(&catalog, &table, 20)?;
/// let config = GaConfig::default().with_seed(42);
/// let result = Driver::run(&problem, &config)?;
/// println!("best menu: {:?}", result.decoded);
/// ```
pub struct Driver;

impl Driver {
    /// Runs the evolutionary search to its generation budget.
    ///
    /// Fails fast with [`EvolveError::InvalidConfiguration`] before any
    /// sampling if the configuration is rejected; after that point nothing
    /// aborts the run.
    pub fn run<P: Problem>(problem: &P, config: &GaConfig) -> Result<GaResult<P>, EvolveError> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        // Init. Repair runs on every freshly sampled candidate before the
        // first evaluation, so generation 0 never scores an
        // out-of-constraint candidate.
        let mut population: Vec<P::Candidate> = (0..config.population_size)
            .map(|_| {
                let mut candidate = problem.sample(&mut rng);
                problem.repair(&mut candidate, &mut rng);
                candidate
            })
            .collect();
        evaluate(problem, &mut population);

        let (init_best, _) = population_best(&population);
        let mut best = population[init_best].clone();
        let mut trace = Vec::with_capacity(config.generations);

        for generation in 1..=config.generations {
            let parents =
                config
                    .selection
                    .select_parents(&population, config.parent_count, &mut rng);

            let mut next: Vec<P::Candidate> = Vec::with_capacity(config.population_size);

            // Elites carry over unchanged, keeping their fitness.
            if config.elitism > 0 {
                let mut ranked: Vec<usize> = (0..population.len()).collect();
                ranked.sort_by(|&a, &b| {
                    population[b]
                        .fitness()
                        .partial_cmp(&population[a].fitness())
                        .unwrap_or(Ordering::Equal)
                });
                next.extend(
                    ranked
                        .iter()
                        .take(config.elitism)
                        .map(|&i| population[i].clone()),
                );
            }

            // Offspring from the parent pool.
            while next.len() < config.population_size {
                let p1 = parents[rng.random_range(0..parents.len())];
                let p2 = parents[rng.random_range(0..parents.len())];

                let (mut c1, mut c2) = if rng.random_range(0.0..1.0) < config.crossover_rate {
                    problem.crossover(&population[p1], &population[p2], &mut rng)
                } else {
                    (population[p1].clone(), population[p2].clone())
                };

                for child in [&mut c1, &mut c2] {
                    problem.mutate(child, config.mutation_rate, &mut rng);
                    problem.repair(child, &mut rng);
                }

                next.push(c1);
                if next.len() < config.population_size {
                    next.push(c2);
                }
            }

            // Score the new candidates; elites are already scored.
            evaluate(problem, &mut next[config.elitism..]);
            population = next;

            let (gen_best, gen_best_fitness) = population_best(&population);
            if gen_best_fitness > best.fitness() {
                best = population[gen_best].clone();
            }
            trace.push(gen_best_fitness);
            debug!(
                generation,
                generation_best = gen_best_fitness,
                best = best.fitness(),
                "generation complete"
            );
        }

        let (best_index, _) = population_best(&population);
        Ok(GaResult {
            decoded: problem.decode(&best),
            best_fitness: best.fitness(),
            best,
            best_index,
            trace,
        })
    }
}

/// Score candidates in place, sequentially and in index order.
fn evaluate<P: Problem>(problem: &P, candidates: &mut [P::Candidate]) {
    for candidate in candidates.iter_mut() {
        let fitness = problem.evaluate(candidate);
        candidate.set_fitness(fitness);
    }
}

/// Index and fitness of the fittest candidate.
///
/// Scans in index order and keeps the first strict maximum, so tie-breaking
/// is deterministic under a fixed seed.
fn population_best<C: Candidate>(population: &[C]) -> (usize, f64) {
    let mut best_idx = 0;
    let mut best_fitness = population[0].fitness();
    for (i, candidate) in population.iter().enumerate().skip(1) {
        if candidate.fitness() > best_fitness {
            best_idx = i;
            best_fitness = candidate.fitness();
        }
    }
    (best_idx, best_fitness)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::operators::single_point_crossover;
    use crate::ga::types::Genome;
    use crate::ga::Selection;

    // ---- OneMax: maximize the number of set bits ----

    struct OneMax {
        n: usize,
    }

    impl Problem for OneMax {
        type Candidate = Genome<bool>;
        type Decoded = usize;

        fn sample<R: Rng>(&self, rng: &mut R) -> Genome<bool> {
            Genome::new((0..self.n).map(|_| rng.random_bool(0.5)).collect())
        }

        fn evaluate(&self, candidate: &Genome<bool>) -> f64 {
            candidate.genes().iter().filter(|&&g| g).count() as f64
        }

        fn crossover<R: Rng>(
            &self,
            parent1: &Genome<bool>,
            parent2: &Genome<bool>,
            rng: &mut R,
        ) -> (Genome<bool>, Genome<bool>) {
            let (c1, c2) = single_point_crossover(parent1.genes(), parent2.genes(), rng);
            (Genome::new(c1), Genome::new(c2))
        }

        fn mutate<R: Rng>(&self, candidate: &mut Genome<bool>, rate: f64, rng: &mut R) {
            for gene in candidate.genes_mut() {
                if rng.random_range(0.0..1.0) < rate {
                    *gene = !*gene;
                }
            }
        }

        fn decode(&self, candidate: &Genome<bool>) -> usize {
            candidate.genes().iter().filter(|&&g| g).count()
        }
    }

    #[test]
    fn test_onemax_convergence() {
        let problem = OneMax { n: 20 };
        let config = GaConfig::default()
            .with_generations(100)
            .with_population_size(50)
            .with_mutation_rate(0.05)
            .with_seed(42);

        let result = Driver::run(&problem, &config).unwrap();

        assert!(
            result.best_fitness >= 18.0,
            "expected near-optimal OneMax, got {}",
            result.best_fitness
        );
        assert_eq!(result.decoded, result.best_fitness as usize);
    }

    #[test]
    fn test_trace_length_equals_generations() {
        let problem = OneMax { n: 10 };
        let config = GaConfig::default().with_generations(30).with_seed(42);

        let result = Driver::run(&problem, &config).unwrap();
        assert_eq!(result.trace.len(), 30);
    }

    #[test]
    fn test_trace_non_decreasing_under_elitism() {
        let problem = OneMax { n: 20 };
        let config = GaConfig::default()
            .with_generations(60)
            .with_elitism(1)
            .with_seed(7);

        let result = Driver::run(&problem, &config).unwrap();
        for window in result.trace.windows(2) {
            assert!(
                window[1] >= window[0],
                "trace must be non-decreasing with elitism: {} < {}",
                window[1],
                window[0]
            );
        }
    }

    #[test]
    fn test_best_never_decreases_without_elitism() {
        let problem = OneMax { n: 20 };
        let config = GaConfig::default()
            .with_generations(60)
            .with_elitism(0)
            .with_seed(7);

        let result = Driver::run(&problem, &config).unwrap();
        // The running best must dominate every trace entry even when the
        // population itself is allowed to regress.
        let trace_max = result.trace.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        assert!(result.best_fitness >= trace_max);
    }

    #[test]
    fn test_same_seed_same_run() {
        let problem = OneMax { n: 15 };
        let config = GaConfig::default().with_generations(40).with_seed(1234);

        let a = Driver::run(&problem, &config).unwrap();
        let b = Driver::run(&problem, &config).unwrap();

        assert_eq!(a.best_fitness, b.best_fitness);
        assert_eq!(a.best_index, b.best_index);
        assert_eq!(a.trace, b.trace);
        assert_eq!(a.best.genes(), b.best.genes());
    }

    #[test]
    fn test_best_index_points_at_fittest() {
        let problem = OneMax { n: 12 };
        let config = GaConfig::default().with_generations(20).with_seed(5);

        let result = Driver::run(&problem, &config).unwrap();
        // With elitism >= 1 the final population contains the overall best.
        assert_eq!(
            result.best_fitness,
            result.trace[result.trace.len() - 1]
        );
        assert!(result.best_index < 50);
    }

    #[test]
    fn test_invalid_config_rejected_before_run() {
        let problem = OneMax { n: 10 };
        let config = GaConfig::default().with_mutation_rate(1.5);

        let err = Driver::run(&problem, &config).unwrap_err();
        assert!(matches!(err, EvolveError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_all_selection_strategies_make_progress() {
        let problem = OneMax { n: 12 };

        for selection in [Selection::Sus, Selection::Roulette, Selection::Tournament(3)] {
            let config = GaConfig::default()
                .with_generations(60)
                .with_selection(selection)
                .with_seed(42);

            let result = Driver::run(&problem, &config).unwrap();
            assert!(
                result.best_fitness >= 10.0,
                "{selection:?} should reach >= 10 of 12 bits, got {}",
                result.best_fitness
            );
        }
    }

    // ---- Repair hook: evaluation must never see a broken candidate ----

    /// OneMax with a hard "exactly k ones" constraint enforced by repair.
    /// `evaluate` panics on violation, so any missed repair fails the test.
    struct ConstrainedOneMax {
        n: usize,
        k: usize,
    }

    impl Problem for ConstrainedOneMax {
        type Candidate = Genome<bool>;
        type Decoded = usize;

        fn sample<R: Rng>(&self, rng: &mut R) -> Genome<bool> {
            Genome::new((0..self.n).map(|_| rng.random_bool(0.5)).collect())
        }

        fn evaluate(&self, candidate: &Genome<bool>) -> f64 {
            let ones = candidate.genes().iter().filter(|&&g| g).count();
            assert_eq!(ones, self.k, "evaluated an unrepaired candidate");
            ones as f64
        }

        fn crossover<R: Rng>(
            &self,
            parent1: &Genome<bool>,
            parent2: &Genome<bool>,
            rng: &mut R,
        ) -> (Genome<bool>, Genome<bool>) {
            let (c1, c2) = single_point_crossover(parent1.genes(), parent2.genes(), rng);
            (Genome::new(c1), Genome::new(c2))
        }

        fn mutate<R: Rng>(&self, candidate: &mut Genome<bool>, rate: f64, rng: &mut R) {
            for gene in candidate.genes_mut() {
                if rng.random_range(0.0..1.0) < rate {
                    *gene = !*gene;
                }
            }
        }

        fn repair<R: Rng>(&self, candidate: &mut Genome<bool>, rng: &mut R) {
            let genes = candidate.genes_mut();
            loop {
                let ones = genes.iter().filter(|&&g| g).count();
                match ones.cmp(&self.k) {
                    Ordering::Greater => {
                        let set: Vec<usize> = (0..genes.len()).filter(|&i| genes[i]).collect();
                        genes[set[rng.random_range(0..set.len())]] = false;
                    }
                    Ordering::Less => {
                        let cleared: Vec<usize> =
                            (0..genes.len()).filter(|&i| !genes[i]).collect();
                        genes[cleared[rng.random_range(0..cleared.len())]] = true;
                    }
                    Ordering::Equal => break,
                }
            }
        }

        fn decode(&self, candidate: &Genome<bool>) -> usize {
            candidate.genes().iter().filter(|&&g| g).count()
        }
    }

    #[test]
    fn test_repair_runs_before_every_evaluation() {
        let problem = ConstrainedOneMax { n: 16, k: 4 };
        let config = GaConfig::default()
            .with_generations(25)
            .with_mutation_rate(0.2)
            .with_seed(42);

        let result = Driver::run(&problem, &config).unwrap();
        assert_eq!(result.best_fitness, 4.0);
    }
}
