//! Evolutionary menu selection and promotion planning.
//!
//! Given a fixed catalog of items and per-item profitability aggregates,
//! this crate searches for high-profit business decisions with a genetic
//! algorithm:
//!
//! - **Menu selection** ([`menu`]): choose the subset of exactly `K` items
//!   whose combined profitability score is highest. The subset size is a
//!   hard constraint restored by a repair operator after every mutation.
//! - **Promotion planning** ([`promotion`]): assign each item one of three
//!   promotion kinds (none / discount / BOGO) to maximize promotion-adjusted
//!   profit under a soft promotion budget.
//!
//! Both problems share one engine ([`ga`]): stochastic universal sampling,
//! single-point crossover, independent per-gene mutation, constraint repair,
//! and elitist replacement, run for a fixed generation budget by
//! [`ga::Driver`].
//!
//! # Architecture
//!
//! The engine never touches domain data directly. It consumes a problem
//! through the [`ga::Problem`] trait; the profitability data ([`catalog`])
//! is loaded once before a run and read-only for its duration. Data
//! preparation (transaction aggregation, profit assignment) and result
//! visualization live outside this crate: callers pass pre-computed
//! aggregates in and get plain result structures back, including a
//! per-generation best-fitness trace for convergence plotting.

pub mod catalog;
pub mod error;
pub mod ga;
pub mod menu;
pub mod promotion;
