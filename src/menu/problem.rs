//! Subset-selection problem: evaluator, mutation, and cardinality repair.

use super::types::{decode_selection, MenuGenome};
use crate::catalog::{Catalog, ProfitTable};
use crate::error::EvolveError;
use crate::ga::operators::single_point_crossover;
use crate::ga::{Genome, Problem};
use rand::Rng;
use tracing::warn;

/// Selects exactly `menu_len` items maximizing the summed profitability
/// score.
///
/// The fitness function never penalizes a wrong subset size; the cardinality
/// constraint is enforced upstream by [`repair`](Problem::repair), which the
/// driver applies to every sampled candidate and every offspring before
/// scoring.
pub struct MenuProblem<'a> {
    catalog: &'a Catalog,
    table: &'a ProfitTable,
    menu_len: usize,
}

impl<'a> MenuProblem<'a> {
    /// Creates the problem, validating that the menu size is satisfiable.
    ///
    /// # Errors
    /// [`EvolveError::EmptyCatalog`] when the universe is empty;
    /// [`EvolveError::InfeasibleMenuSize`] when `menu_len` is zero or
    /// exceeds the universe size.
    pub fn new(
        catalog: &'a Catalog,
        table: &'a ProfitTable,
        menu_len: usize,
    ) -> Result<Self, EvolveError> {
        if catalog.is_empty() {
            return Err(EvolveError::EmptyCatalog);
        }
        if menu_len == 0 || menu_len > catalog.len() {
            return Err(EvolveError::InfeasibleMenuSize {
                want: menu_len,
                have: catalog.len(),
            });
        }
        Ok(Self {
            catalog,
            table,
            menu_len,
        })
    }

    /// The target menu size `K`.
    pub fn menu_len(&self) -> usize {
        self.menu_len
    }
}

impl Problem for MenuProblem<'_> {
    type Candidate = MenuGenome;
    type Decoded = Vec<String>;

    fn sample<R: Rng>(&self, rng: &mut R) -> MenuGenome {
        Genome::new((0..self.catalog.len()).map(|_| rng.random_bool(0.5)).collect())
    }

    /// Sums the profitability score of every selected item.
    ///
    /// A selected item with no table record contributes zero and surfaces a
    /// diagnostic; the run continues.
    fn evaluate(&self, candidate: &MenuGenome) -> f64 {
        candidate
            .genes()
            .iter()
            .enumerate()
            .filter(|(_, &selected)| selected)
            .map(|(i, _)| {
                let item = self.catalog.item(i);
                match self.table.get(item) {
                    Some(record) => record.fitness_score,
                    None => {
                        warn!(item, "selected item has no profitability record");
                        0.0
                    }
                }
            })
            .sum()
    }

    fn crossover<R: Rng>(
        &self,
        parent1: &MenuGenome,
        parent2: &MenuGenome,
        rng: &mut R,
    ) -> (MenuGenome, MenuGenome) {
        let (c1, c2) = single_point_crossover(parent1.genes(), parent2.genes(), rng);
        (Genome::new(c1), Genome::new(c2))
    }

    /// Flips each inclusion bit independently with probability `rate`.
    fn mutate<R: Rng>(&self, candidate: &mut MenuGenome, rate: f64, rng: &mut R) {
        for gene in candidate.genes_mut() {
            if rng.random_range(0.0..1.0) < rate {
                *gene = !*gene;
            }
        }
    }

    /// Restores the hard cardinality constraint: exactly `menu_len` genes
    /// set.
    ///
    /// Oversized selections drop uniformly random set positions; undersized
    /// ones set uniformly random cleared positions. Each step shrinks the
    /// size gap by one, so termination is immediate from the universe being
    /// finite and `menu_len ≤ |universe|`.
    fn repair<R: Rng>(&self, candidate: &mut MenuGenome, rng: &mut R) {
        let genes = candidate.genes_mut();
        let mut selected: Vec<usize> = (0..genes.len()).filter(|&i| genes[i]).collect();

        while selected.len() > self.menu_len {
            let slot = rng.random_range(0..selected.len());
            let idx = selected.swap_remove(slot);
            genes[idx] = false;
        }

        if selected.len() < self.menu_len {
            let mut cleared: Vec<usize> = (0..genes.len()).filter(|&i| !genes[i]).collect();
            while selected.len() < self.menu_len {
                let slot = rng.random_range(0..cleared.len());
                let idx = cleared.swap_remove(slot);
                genes[idx] = true;
                selected.push(idx);
            }
        }
    }

    fn decode(&self, candidate: &MenuGenome) -> Vec<String> {
        decode_selection(candidate, self.catalog)
    }
}
