#![deny(warnings)]

//! Construction planning for Plot Tycoon: a dynamic-programming search over
//! build schedules, selection of the optimal earnings level, and canonical
//! presentation ordering of the tied plans.
//!
//! Earnings of a fixed multiset of buildings are not order-independent:
//! each building earns for the time remaining after its own completion, so
//! the weighted completion times depend on the build order. The sweep below
//! explores every interleaving (each order is a path through the table) and
//! keeps, per consumed-time level, only the best cumulative earnings. A
//! plan recorded at a level therefore carries the earnings of its best
//! build order, which works out to descending rate-per-duration with
//! declaration-order tiebreak. Tie comparisons are exact `Decimal`
//! equality, never float tolerance.

use plot_core::{Catalog, ConstructionPlan, PlanResult};
use plot_econ::marginal_earnings;
use rust_decimal::Decimal;
use std::cmp::Ordering;
use std::collections::BTreeSet;
use thiserror::Error;
use tracing::debug;

/// Errors produced by the planner.
#[derive(Debug, Error, PartialEq)]
pub enum PlanError {
    /// The budget must be at least one time unit.
    #[error("time budget must be a positive number of time units")]
    InvalidBudget,
    /// Planning over zero building types would silently report zero
    /// earnings as if it were a real answer.
    #[error("catalog has no building types")]
    EmptyCatalog,
}

/// Best earnings at one consumed-time level, with every plan achieving it.
#[derive(Clone, Debug)]
struct Cell {
    earnings: Decimal,
    plans: BTreeSet<ConstructionPlan>,
}

/// DP table over consumed time `0..=budget` for one catalog.
pub struct PlanTable {
    budget: u32,
    cells: Vec<Option<Cell>>,
}

/// Build the DP table for `budget` time units.
///
/// Cell `t` holds the best cumulative earnings over all schedules that
/// consume exactly `t` units, together with the set of count-multisets
/// achieving it. A strictly better candidate replaces the cell, an equal
/// one unions its plans in, a worse one is discarded. Cells are visited in
/// increasing `t`; durations are positive, so transitions only ever write
/// forward and each cell is final by the time the sweep reads it.
///
/// Memory is O(budget x plan-set size). Plan sets stay small for the
/// standard catalog, but catalogs with many equal-efficiency types can tie
/// combinatorially; callers needing bounded memory for very large budgets
/// should use `plot_econ::greedy_estimate` instead.
pub fn plan_search(catalog: &Catalog, budget: u32) -> Result<PlanTable, PlanError> {
    if catalog.buildings.is_empty() {
        return Err(PlanError::EmptyCatalog);
    }
    let mut cells: Vec<Option<Cell>> = vec![None; budget as usize + 1];
    let mut base = BTreeSet::new();
    base.insert(ConstructionPlan::empty(catalog.buildings.len()));
    cells[0] = Some(Cell {
        earnings: Decimal::ZERO,
        plans: base,
    });

    for t in 0..=budget {
        let src = match cells[t as usize].clone() {
            Some(cell) => cell,
            None => continue,
        };
        for (slot, b) in catalog.buildings.iter().enumerate() {
            let done = match t.checked_add(b.duration) {
                Some(done) if done <= budget => done,
                _ => continue,
            };
            let candidate = src.earnings + marginal_earnings(done, b.rate, budget);
            let extended = || src.plans.iter().map(|p| p.with_increment(slot));
            let dst = &mut cells[done as usize];
            match dst {
                None => {
                    *dst = Some(Cell {
                        earnings: candidate,
                        plans: extended().collect(),
                    });
                }
                Some(cell) => match candidate.cmp(&cell.earnings) {
                    Ordering::Greater => {
                        cell.earnings = candidate;
                        cell.plans = extended().collect();
                    }
                    Ordering::Equal => cell.plans.extend(extended()),
                    Ordering::Less => {}
                },
            }
        }
    }
    Ok(PlanTable { budget, cells })
}

impl PlanTable {
    /// The budget this table was computed for.
    pub fn budget(&self) -> u32 {
        self.budget
    }

    /// Scan every consumed-time level for the best earnings and collect the
    /// union of plans achieving it. The budget need not be fully consumed:
    /// an optimal schedule may finish early and leave idle time, so ties
    /// are gathered across all levels, the empty plan included when zero is
    /// the best anyone can do.
    pub fn select_optimal(&self) -> (Decimal, BTreeSet<ConstructionPlan>) {
        let mut best = Decimal::ZERO;
        let mut raw: BTreeSet<ConstructionPlan> = BTreeSet::new();
        for cell in self.cells.iter().flatten() {
            match cell.earnings.cmp(&best) {
                Ordering::Greater => {
                    best = cell.earnings;
                    raw = cell.plans.clone();
                }
                Ordering::Equal => raw.extend(cell.plans.iter().cloned()),
                Ordering::Less => {}
            }
        }
        (best, raw)
    }
}

/// Fix the presentation order of a raw tie set: plans sorted
/// lexicographically descending over catalog declaration order. The set is
/// already deduplicated by count-tuple identity; the ordering is a
/// presentation convention, not an optimality signal, since every plan in
/// the output is co-optimal.
pub fn canonicalize(raw: BTreeSet<ConstructionPlan>) -> Vec<ConstructionPlan> {
    raw.into_iter().rev().collect()
}

/// Single entry point for the presentation layer.
///
/// Returns the true maximum earnings over all feasible schedules for
/// `budget`, and the deduplicated, sorted set of every distinct plan
/// attaining it. Pure and deterministic: no state is read or written, and
/// two calls with the same input yield identical results.
pub fn compute_max_profit(catalog: &Catalog, budget: u32) -> Result<PlanResult, PlanError> {
    if budget == 0 {
        return Err(PlanError::InvalidBudget);
    }
    let table = plan_search(catalog, budget)?;
    let (max_earnings, raw) = table.select_optimal();
    let plans = canonicalize(raw);
    debug!(budget = table.budget(), %max_earnings, ties = plans.len(), "plan search complete");
    Ok(PlanResult {
        budget: table.budget(),
        max_earnings,
        plans,
    })
}
