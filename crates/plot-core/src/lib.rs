#![deny(warnings)]

//! Core domain models and invariants for Plot Tycoon.
//!
//! This crate defines serializable types used across the planner with
//! validation helpers to guarantee basic invariants: a non-empty catalog of
//! building types with positive durations and rates, and construction plans
//! stored as compact count tuples aligned with catalog order.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use thiserror::Error;

/// Unique identifier for a building type, e.g. "T", "P", "C".
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BuildingId(pub String);

/// A constructible building type with timing and earnings characteristics.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BuildingSpec {
    /// Building identifier, e.g. "T".
    pub id: BuildingId,
    /// Human-readable name, e.g. "Theatre".
    pub name: String,
    /// Construction duration in whole time units (> 0).
    pub duration: u32,
    /// Earnings per remaining time unit after completion, in USD.
    pub rate: Decimal,
}

/// The ordered list of building types available to the planner.
///
/// Declaration order is canonical: construction plans hold one count per
/// slot in this order, and plan sorting is lexicographic over it. The
/// catalog is created once at startup and read-only afterwards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    /// Building types in declaration order.
    pub buildings: Vec<BuildingSpec>,
}

impl Catalog {
    /// The reference catalog: Theatre, Pub, Commercial Park.
    pub fn standard() -> Self {
        Catalog {
            buildings: vec![
                BuildingSpec {
                    id: BuildingId("T".to_string()),
                    name: "Theatre".to_string(),
                    duration: 5,
                    rate: Decimal::new(1500, 0),
                },
                BuildingSpec {
                    id: BuildingId("P".to_string()),
                    name: "Pub".to_string(),
                    duration: 4,
                    rate: Decimal::new(1000, 0),
                },
                BuildingSpec {
                    id: BuildingId("C".to_string()),
                    name: "Commercial Park".to_string(),
                    duration: 10,
                    rate: Decimal::new(3000, 0),
                },
            ],
        }
    }

    /// Shortest construction duration in the catalog, if any.
    pub fn min_duration(&self) -> Option<u32> {
        self.buildings.iter().map(|b| b.duration).min()
    }
}

/// A count-per-type multiset describing how many of each building type are
/// built, independent of build order.
///
/// Counts are positional: `counts[i]` belongs to the catalog's `i`-th type.
/// Derived `Ord`/`Hash` make plans usable as content-addressed set keys, so
/// deduplication is structural and build-order-free.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ConstructionPlan {
    /// One count per catalog slot, in catalog order.
    pub counts: Vec<u32>,
}

impl ConstructionPlan {
    /// The all-zero plan for a catalog with `n_types` building types.
    pub fn empty(n_types: usize) -> Self {
        ConstructionPlan {
            counts: vec![0; n_types],
        }
    }

    /// A copy of this plan with one more building in `slot`.
    pub fn with_increment(&self, slot: usize) -> Self {
        let mut counts = self.counts.clone();
        counts[slot] += 1;
        ConstructionPlan { counts }
    }

    /// Total time consumed by this plan's buildings under any build order.
    pub fn consumed_time(&self, catalog: &Catalog) -> u64 {
        debug_assert_eq!(self.counts.len(), catalog.buildings.len());
        self.counts
            .iter()
            .zip(&catalog.buildings)
            .map(|(&n, b)| u64::from(n) * u64::from(b.duration))
            .sum()
    }
}

/// Outcome of an exact planning run for one budget.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlanResult {
    /// The time budget the result was computed for.
    pub budget: u32,
    /// Best cumulative earnings over all feasible schedules, in USD.
    pub max_earnings: Decimal,
    /// Every distinct plan attaining `max_earnings`, deduplicated and
    /// sorted lexicographically descending over catalog order.
    pub plans: Vec<ConstructionPlan>,
}

/// Validation errors for catalog invariants.
#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    /// A planner cannot produce a meaningful answer with zero types.
    #[error("catalog has no building types")]
    Empty,
    /// Building ids must be unique within a catalog.
    #[error("duplicate building id: {0}")]
    DuplicateId(String),
    /// Identifier and name must be non-blank.
    #[error("building id or name is blank")]
    BlankName,
    /// Durations are whole positive time units.
    #[error("building {0} has zero duration")]
    ZeroDuration(String),
    /// A non-positive rate would make a building economically meaningless.
    #[error("building {0} has non-positive earnings rate")]
    NonPositiveRate(String),
}

/// Validate a single building type.
pub fn validate_building(b: &BuildingSpec) -> Result<(), CatalogError> {
    if b.id.0.trim().is_empty() || b.name.trim().is_empty() {
        return Err(CatalogError::BlankName);
    }
    if b.duration == 0 {
        return Err(CatalogError::ZeroDuration(b.id.0.clone()));
    }
    if b.rate <= Decimal::ZERO {
        return Err(CatalogError::NonPositiveRate(b.id.0.clone()));
    }
    Ok(())
}

/// Validate a catalog, including id uniqueness.
pub fn validate_catalog(catalog: &Catalog) -> Result<(), CatalogError> {
    if catalog.buildings.is_empty() {
        return Err(CatalogError::Empty);
    }
    let mut ids: BTreeSet<&BuildingId> = BTreeSet::new();
    for b in &catalog.buildings {
        validate_building(b)?;
        if !ids.insert(&b.id) {
            return Err(CatalogError::DuplicateId(b.id.0.clone()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn building(id: &str, duration: u32, rate: i64) -> BuildingSpec {
        BuildingSpec {
            id: BuildingId(id.to_string()),
            name: id.to_string(),
            duration,
            rate: Decimal::new(rate, 0),
        }
    }

    #[test]
    fn standard_catalog_is_valid() {
        let catalog = Catalog::standard();
        validate_catalog(&catalog).unwrap();
        assert_eq!(catalog.buildings.len(), 3);
        assert_eq!(catalog.buildings[0].id.0, "T");
        assert_eq!(catalog.buildings[1].id.0, "P");
        assert_eq!(catalog.buildings[2].id.0, "C");
        assert_eq!(catalog.min_duration(), Some(4));
    }

    #[test]
    fn serde_roundtrip_catalog() {
        let catalog = Catalog::standard();
        let s = serde_json::to_string(&catalog).unwrap();
        let back: Catalog = serde_json::from_str(&s).unwrap();
        assert_eq!(back, catalog);
    }

    #[test]
    fn empty_catalog_rejected() {
        let catalog = Catalog { buildings: vec![] };
        assert_eq!(validate_catalog(&catalog), Err(CatalogError::Empty));
        assert_eq!(catalog.min_duration(), None);
    }

    #[test]
    fn duplicate_ids_rejected() {
        let catalog = Catalog {
            buildings: vec![building("T", 5, 1500), building("T", 4, 1000)],
        };
        assert_eq!(
            validate_catalog(&catalog),
            Err(CatalogError::DuplicateId("T".to_string()))
        );
    }

    #[test]
    fn degenerate_buildings_rejected() {
        assert_eq!(
            validate_building(&building("X", 0, 10)),
            Err(CatalogError::ZeroDuration("X".to_string()))
        );
        assert_eq!(
            validate_building(&building("X", 3, 0)),
            Err(CatalogError::NonPositiveRate("X".to_string()))
        );
        assert_eq!(
            validate_building(&building(" ", 3, 10)),
            Err(CatalogError::BlankName)
        );
    }

    #[test]
    fn plan_increment_and_consumed_time() {
        let catalog = Catalog::standard();
        let plan = ConstructionPlan::empty(3)
            .with_increment(0)
            .with_increment(0)
            .with_increment(1);
        assert_eq!(plan.counts, vec![2, 1, 0]);
        assert_eq!(plan.consumed_time(&catalog), 2 * 5 + 4);
    }

    #[test]
    fn plans_order_lexicographically_by_counts() {
        let mut set = BTreeSet::new();
        set.insert(ConstructionPlan {
            counts: vec![9, 0, 0],
        });
        set.insert(ConstructionPlan {
            counts: vec![8, 2, 0],
        });
        set.insert(ConstructionPlan {
            counts: vec![9, 1, 0],
        });
        let ascending: Vec<_> = set.into_iter().map(|p| p.counts).collect();
        assert_eq!(ascending, vec![vec![8, 2, 0], vec![9, 0, 0], vec![9, 1, 0]]);
    }

    proptest! {
        #[test]
        fn positive_specs_validate(duration in 1u32..1000, rate in 1i64..1_000_000) {
            prop_assert!(validate_building(&building("B", duration, rate)).is_ok());
        }

        #[test]
        fn consumed_time_is_linear_in_counts(a in 0u32..100, b in 0u32..100, c in 0u32..100) {
            let catalog = Catalog::standard();
            let plan = ConstructionPlan { counts: vec![a, b, c] };
            let expected = u64::from(a) * 5 + u64::from(b) * 4 + u64::from(c) * 10;
            prop_assert_eq!(plan.consumed_time(&catalog), expected);
        }
    }
}
