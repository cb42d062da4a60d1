#![deny(warnings)]

//! Economic models for Plot Tycoon.
//!
//! This module provides validated utilities for:
//! - Marginal earnings of a single building given its completion time
//! - A closed-form greedy estimate of the optimal plan for large budgets
//!
//! Earnings are exact `Decimal` values throughout; the planner relies on
//! exact equality to detect ties between plans.

use plot_core::{Catalog, CatalogError, ConstructionPlan};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Earnings contributed by one building that finishes at `completion`
/// within a total budget of `budget` time units.
///
/// A building finishing exactly at the budget boundary is schedulable but
/// economically inert: it earns for the remaining time, and there is none.
/// Completions past the budget are a scheduling bug upstream.
///
/// Example:
/// let r = Decimal::new(1000, 0);
/// assert_eq!(marginal_earnings(4, r, 6), Decimal::new(2000, 0));
/// assert_eq!(marginal_earnings(6, r, 6), Decimal::ZERO);
pub fn marginal_earnings(completion: u32, rate: Decimal, budget: u32) -> Decimal {
    debug_assert!(completion <= budget, "building scheduled past the budget");
    if completion >= budget {
        return Decimal::ZERO;
    }
    Decimal::from(budget - completion) * rate
}

/// Approximate planning outcome from the greedy closed form.
///
/// A distinct type from `PlanResult` so approximate earnings are never
/// mistaken for exact ones downstream.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Estimate {
    /// The time budget the estimate was computed for.
    pub budget: u32,
    /// Earnings of the greedy schedule. A lower bound on the exact optimum.
    pub earnings: Decimal,
    /// The single greedy plan behind `earnings`.
    pub plan: ConstructionPlan,
}

/// Closed-form greedy estimate of the optimal plan for `budget`.
///
/// Fills the budget with catalog types in declaration order: as many of the
/// first type as fit, then the second type into the remainder, and so on,
/// using integer division for counts. A homogeneous block of `n` buildings
/// with duration `d` and rate `r` starting at time `s` has completion times
/// `s + d, s + 2d, .., s + nd`, so it earns
/// `r * (n * (budget - s) - d * n * (n + 1) / 2)`.
///
/// The returned earnings are those of a real feasible schedule, which makes
/// the estimate a lower bound on the exact optimum, but it is not exact in
/// general; the DP planner is ground truth. Intended for budgets where an
/// O(budget) table is too large to be worth computing.
pub fn greedy_estimate(catalog: &Catalog, budget: u32) -> Result<Estimate, CatalogError> {
    if catalog.buildings.is_empty() {
        return Err(CatalogError::Empty);
    }
    let budget_u64 = u64::from(budget);
    let mut counts = vec![0u32; catalog.buildings.len()];
    let mut start: u64 = 0;
    let mut earnings = Decimal::ZERO;
    for (slot, b) in catalog.buildings.iter().enumerate() {
        let d = u64::from(b.duration);
        let n = (budget_u64 - start) / d;
        if n == 0 {
            continue;
        }
        let horizon = Decimal::from(n) * Decimal::from(budget_u64 - start);
        let triangular = Decimal::from(d) * Decimal::from(n * (n + 1) / 2);
        earnings += b.rate * (horizon - triangular);
        counts[slot] = n as u32;
        start += n * d;
    }
    Ok(Estimate {
        budget,
        earnings,
        plan: ConstructionPlan { counts },
    })
}
