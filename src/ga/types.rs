//! Core trait definitions for the evolutionary engine.
//!
//! The two central traits, [`Candidate`] and [`Problem`], define the
//! contract between the generic driver and domain-specific problem
//! implementations. [`Genome`] is the shared fixed-length-vector candidate
//! both built-in problems use.

use rand::Rng;

/// A candidate solution in the population.
///
/// Candidates carry their own fitness. The driver calls
/// [`Problem::evaluate`] and stores the result via
/// [`set_fitness`](Candidate::set_fitness). Higher fitness is better
/// (maximization).
pub trait Candidate: Clone + Send + Sync {
    /// Returns the candidate's current fitness.
    ///
    /// Unevaluated candidates report [`f64::NEG_INFINITY`].
    fn fitness(&self) -> f64;

    /// Stores a freshly computed fitness.
    fn set_fitness(&mut self, fitness: f64);
}

/// Defines an evolutionary optimization problem.
///
/// Implementors plug domain logic into the generic driver:
///
/// 1. **Sampling**: gene-wise uniform random candidates
/// 2. **Evaluation**: candidate → scalar score (higher is better)
/// 3. **Crossover / mutation**: recombination and per-gene perturbation
/// 4. **Repair**: restoring hard constraints after any perturbation
/// 5. **Decoding**: candidate → domain-facing result
///
/// The driver invokes [`repair`](Problem::repair) on every freshly sampled
/// candidate and on every offspring after mutation, before the candidate is
/// ever evaluated, so no out-of-constraint candidate is scored.
pub trait Problem: Send + Sync {
    /// The candidate (solution) type for this problem.
    type Candidate: Candidate;

    /// Decoded, domain-facing form of a candidate.
    type Decoded;

    /// Samples one random candidate, each gene drawn uniformly from its
    /// allowed domain.
    fn sample<R: Rng>(&self, rng: &mut R) -> Self::Candidate;

    /// Scores a candidate. Higher is better.
    ///
    /// Must be pure with respect to the candidate and the problem's
    /// read-only data; lookups that fail are absorbed (zero contribution),
    /// never fatal.
    fn evaluate(&self, candidate: &Self::Candidate) -> f64;

    /// Recombines two parents into two offspring.
    fn crossover<R: Rng>(
        &self,
        parent1: &Self::Candidate,
        parent2: &Self::Candidate,
        rng: &mut R,
    ) -> (Self::Candidate, Self::Candidate);

    /// Mutates each gene independently with probability `rate`.
    fn mutate<R: Rng>(&self, candidate: &mut Self::Candidate, rate: f64, rng: &mut R);

    /// Restores hard constraints violated by sampling, crossover, or
    /// mutation.
    ///
    /// Must be idempotent: repairing an already-valid candidate leaves it
    /// unchanged. The default is a no-op for unconstrained encodings.
    fn repair<R: Rng>(&self, _candidate: &mut Self::Candidate, _rng: &mut R) {}

    /// Decodes a candidate into its domain-facing form.
    fn decode(&self, candidate: &Self::Candidate) -> Self::Decoded;
}

/// Fixed-length vector genome with an attached fitness.
///
/// The gene type `G` is the per-position decision domain: `bool` for subset
/// inclusion, a promotion kind for promotion assignment.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Genome<G> {
    genes: Vec<G>,
    fitness: f64,
}

impl<G> Genome<G> {
    /// Wraps a gene vector as an unevaluated genome.
    pub fn new(genes: Vec<G>) -> Self {
        Self {
            genes,
            fitness: f64::NEG_INFINITY,
        }
    }

    /// The genes in position order.
    pub fn genes(&self) -> &[G] {
        &self.genes
    }

    /// Mutable access for operators and repair.
    pub fn genes_mut(&mut self) -> &mut [G] {
        &mut self.genes
    }

    /// Number of gene positions.
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    /// Whether the genome has no positions.
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }
}

impl<G: Clone + Send + Sync> Candidate for Genome<G> {
    fn fitness(&self) -> f64 {
        self.fitness
    }

    fn set_fitness(&mut self, fitness: f64) {
        self.fitness = fitness;
    }
}
