//! Promotion kinds and decoded promotion results.

use crate::ga::Genome;

/// Per-item promotion decision.
///
/// Wire values (0 / 1 / 2) match the gene encoding used by external
/// reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PromoKind {
    /// No promotion: base profit, no cost.
    None,
    /// Discount: +10% profit, costs 5% of base profit.
    Discount,
    /// Buy-one-get-one-free: +20% profit, costs 10% of base profit.
    Bogo,
}

impl PromoKind {
    /// All kinds in wire-value order.
    pub const ALL: [PromoKind; 3] = [PromoKind::None, PromoKind::Discount, PromoKind::Bogo];

    /// Multiplier applied to an item's base profit when the promotion runs.
    pub fn profit_multiplier(self) -> f64 {
        match self {
            PromoKind::None => 1.0,
            PromoKind::Discount => 1.1,
            PromoKind::Bogo => 1.2,
        }
    }

    /// Cost of running the promotion, as a fraction of base profit.
    pub fn cost_rate(self) -> f64 {
        match self {
            PromoKind::None => 0.0,
            PromoKind::Discount => 0.05,
            PromoKind::Bogo => 0.10,
        }
    }

    /// Wire value of this kind.
    pub fn index(self) -> u8 {
        match self {
            PromoKind::None => 0,
            PromoKind::Discount => 1,
            PromoKind::Bogo => 2,
        }
    }

    /// Parses a wire value.
    pub fn from_index(value: u8) -> Option<Self> {
        match value {
            0 => Some(PromoKind::None),
            1 => Some(PromoKind::Discount),
            2 => Some(PromoKind::Bogo),
            _ => None,
        }
    }
}

/// Promotion-kind vector over the catalog: gene `i` is the promotion
/// assigned to the item at catalog position `i`.
pub type PromoGenome = Genome<PromoKind>;

/// Decoded promotion assignment for the whole catalog.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PromotionPlan {
    /// `(item, kind)` pairs in catalog order.
    pub assignments: Vec<(String, PromoKind)>,
}

impl PromotionPlan {
    /// Number of items assigned each kind, indexed by wire value.
    ///
    /// This is the data behind a promotion-distribution histogram.
    pub fn kind_counts(&self) -> [usize; 3] {
        let mut counts = [0usize; 3];
        for (_, kind) in &self.assignments {
            counts[kind.index() as usize] += 1;
        }
        counts
    }
}

/// Cost/profit decomposition of one candidate, for tradeoff reporting.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PromotionBreakdown {
    /// Promotion-adjusted profit over all items.
    pub total_profit: f64,
    /// Total promotion cost over all items.
    pub total_cost: f64,
    /// Fitness after the budget penalty, if any.
    pub score: f64,
}
