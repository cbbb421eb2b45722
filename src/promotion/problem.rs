//! Promotion-assignment problem: evaluator with the soft budget penalty.

use super::types::{PromoGenome, PromoKind, PromotionBreakdown, PromotionPlan};
use crate::catalog::{Catalog, ProfitTable};
use crate::error::EvolveError;
use crate::ga::operators::single_point_crossover;
use crate::ga::{Genome, Problem};
use rand::Rng;
use tracing::warn;

/// Fitness penalty per unit of cost above the budget.
pub const DEFAULT_PENALTY_FACTOR: f64 = 10.0;

/// Assigns a promotion kind to every catalog item, maximizing
/// promotion-adjusted profit under a soft budget.
///
/// Over-budget plans are not rejected; their score drops linearly with the
/// overrun (`score = profit − (cost − budget) × penalty_factor`), keeping
/// them searchable while disfavored.
pub struct PromotionProblem<'a> {
    catalog: &'a Catalog,
    table: &'a ProfitTable,
    budget: f64,
    penalty_factor: f64,
}

impl<'a> PromotionProblem<'a> {
    /// Creates the problem with the default penalty factor.
    ///
    /// # Errors
    /// [`EvolveError::EmptyCatalog`] when the universe is empty;
    /// [`EvolveError::InvalidConfiguration`] for a negative or non-finite
    /// budget.
    pub fn new(
        catalog: &'a Catalog,
        table: &'a ProfitTable,
        budget: f64,
    ) -> Result<Self, EvolveError> {
        if catalog.is_empty() {
            return Err(EvolveError::EmptyCatalog);
        }
        if !budget.is_finite() || budget < 0.0 {
            return Err(EvolveError::InvalidConfiguration(format!(
                "budget {budget} must be finite and non-negative"
            )));
        }
        Ok(Self {
            catalog,
            table,
            budget,
            penalty_factor: DEFAULT_PENALTY_FACTOR,
        })
    }

    /// Overrides the penalty factor.
    ///
    /// # Errors
    /// [`EvolveError::InvalidConfiguration`] for a negative or non-finite
    /// factor.
    pub fn with_penalty_factor(mut self, factor: f64) -> Result<Self, EvolveError> {
        if !factor.is_finite() || factor < 0.0 {
            return Err(EvolveError::InvalidConfiguration(format!(
                "penalty_factor {factor} must be finite and non-negative"
            )));
        }
        self.penalty_factor = factor;
        Ok(self)
    }

    /// Total profit with no promotions applied anywhere.
    pub fn baseline_profit(&self) -> f64 {
        self.catalog
            .items()
            .iter()
            .map(|item| self.base_profit(item))
            .sum()
    }

    /// Cost/profit decomposition of one candidate.
    ///
    /// `evaluate` is this function's `score`; callers use the rest for
    /// cost-versus-profit tradeoff reporting.
    ///
    /// # Panics
    /// Panics if the genome length differs from the catalog size.
    pub fn breakdown(&self, candidate: &PromoGenome) -> PromotionBreakdown {
        assert_eq!(
            candidate.len(),
            self.catalog.len(),
            "genome length must match catalog size"
        );

        let mut total_profit = 0.0;
        let mut total_cost = 0.0;
        for (i, &kind) in candidate.genes().iter().enumerate() {
            let base = self.base_profit(self.catalog.item(i));
            total_profit += base * kind.profit_multiplier();
            total_cost += base * kind.cost_rate();
        }

        let score = if total_cost > self.budget {
            total_profit - (total_cost - self.budget) * self.penalty_factor
        } else {
            total_profit
        };

        PromotionBreakdown {
            total_profit,
            total_cost,
            score,
        }
    }

    fn base_profit(&self, item: &str) -> f64 {
        match self.table.get(item) {
            Some(record) => record.total_profit,
            None => {
                warn!(item, "item has no profitability record; promotions score at zero");
                0.0
            }
        }
    }
}

impl Problem for PromotionProblem<'_> {
    type Candidate = PromoGenome;
    type Decoded = PromotionPlan;

    fn sample<R: Rng>(&self, rng: &mut R) -> PromoGenome {
        Genome::new(
            (0..self.catalog.len())
                .map(|_| PromoKind::ALL[rng.random_range(0..PromoKind::ALL.len())])
                .collect(),
        )
    }

    fn evaluate(&self, candidate: &PromoGenome) -> f64 {
        self.breakdown(candidate).score
    }

    fn crossover<R: Rng>(
        &self,
        parent1: &PromoGenome,
        parent2: &PromoGenome,
        rng: &mut R,
    ) -> (PromoGenome, PromoGenome) {
        let (c1, c2) = single_point_crossover(parent1.genes(), parent2.genes(), rng);
        (Genome::new(c1), Genome::new(c2))
    }

    /// Redraws each gene uniformly from the kind domain with probability
    /// `rate`.
    fn mutate<R: Rng>(&self, candidate: &mut PromoGenome, rate: f64, rng: &mut R) {
        for gene in candidate.genes_mut() {
            if rng.random_range(0.0..1.0) < rate {
                *gene = PromoKind::ALL[rng.random_range(0..PromoKind::ALL.len())];
            }
        }
    }

    fn decode(&self, candidate: &PromoGenome) -> PromotionPlan {
        PromotionPlan {
            assignments: self
                .catalog
                .items()
                .iter()
                .cloned()
                .zip(candidate.genes().iter().copied())
                .collect(),
        }
    }
}
