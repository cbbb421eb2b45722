//! Item universe and aggregated profitability data.
//!
//! These are the two read-only data contracts the evolutionary core consumes:
//! a [`Catalog`] fixing the ordered item universe (and with it the gene
//! index ↔ item mapping), and a [`ProfitTable`] mapping items to their
//! pre-computed profitability aggregates. Both are built once by the caller,
//! before a run, from whatever storage or aggregation pipeline produced them.

use std::collections::{HashMap, HashSet};

/// Fixed, ordered universe of catalog items.
///
/// The ordering defines gene positions for every candidate in a run and must
/// not change while a search is in flight. Duplicate names are dropped,
/// keeping the first occurrence, so the universe is a set with a stable
/// iteration order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Catalog {
    items: Vec<String>,
}

impl Catalog {
    /// Builds a catalog from item names, deduplicating while preserving the
    /// order of first occurrence.
    pub fn new(items: Vec<String>) -> Self {
        let mut seen = HashSet::new();
        let mut unique = Vec::with_capacity(items.len());
        for item in items {
            if seen.insert(item.clone()) {
                unique.push(item);
            }
        }
        Self { items: unique }
    }

    /// Number of distinct items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the universe is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The item at gene position `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn item(&self, index: usize) -> &str {
        &self.items[index]
    }

    /// All items in gene-position order.
    pub fn items(&self) -> &[String] {
        &self.items
    }
}

/// Aggregate profitability metrics for one item.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProfitRecord {
    /// Sum of profit across all transactions containing the item.
    pub total_profit: f64,

    /// Mean profit per transaction containing the item.
    pub average_profit: f64,

    /// Number of distinct transactions containing the item.
    pub transaction_count: u64,

    /// Composite ranking score: `total_profit × average_profit ×
    /// transaction_count`.
    pub fitness_score: f64,
}

impl ProfitRecord {
    /// Builds a record from pre-computed aggregates, deriving the composite
    /// fitness score.
    pub fn from_aggregates(total_profit: f64, average_profit: f64, transaction_count: u64) -> Self {
        Self {
            total_profit,
            average_profit,
            transaction_count,
            fitness_score: total_profit * average_profit * transaction_count as f64,
        }
    }
}

/// Read-only mapping from item to aggregate profitability.
///
/// Exactly one record per item; items absent from the table are absent, never
/// implicitly zero-filled. Lookups for absent items are the evaluators'
/// responsibility to handle (zero contribution plus a diagnostic).
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProfitTable {
    records: HashMap<String, ProfitRecord>,
}

impl ProfitTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts (or replaces) the record for `item`.
    pub fn insert(&mut self, item: impl Into<String>, record: ProfitRecord) {
        self.records.insert(item.into(), record);
    }

    /// Looks up the record for `item`.
    pub fn get(&self, item: &str) -> Option<&ProfitRecord> {
        self.records.get(item)
    }

    /// Number of items with a record.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Builds a table from raw per-item profit figures.
    ///
    /// Each figure becomes a single-transaction aggregate: total and average
    /// profit equal the raw figure, transaction count is 1. This is the
    /// promotion variant's direct profit source when no transaction-level
    /// aggregation exists.
    pub fn from_raw_profits<I, S>(profits: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let records = profits
            .into_iter()
            .map(|(item, profit)| (item.into(), ProfitRecord::from_aggregates(profit, profit, 1)))
            .collect();
        Self { records }
    }

    /// Items ranked by composite fitness score, best first.
    ///
    /// Ties break on item name so the ranking is deterministic.
    pub fn ranked(&self) -> Vec<(&str, &ProfitRecord)> {
        let mut entries: Vec<(&str, &ProfitRecord)> = self
            .records
            .iter()
            .map(|(item, record)| (item.as_str(), record))
            .collect();
        entries.sort_by(|a, b| {
            b.1.fitness_score
                .partial_cmp(&a.1.fitness_score)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.0.cmp(b.0))
        });
        entries
    }
}
