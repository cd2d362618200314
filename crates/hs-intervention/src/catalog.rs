//! Planning metadata for each intervention type.
//!
//! These figures describe what an intervention typically costs and how long
//! it takes to deliver.  They are used for listing and budgeting; the
//! simulation itself only uses each type's runtime [`Effect`](hs_agent::Effect).

use crate::InterventionType;

/// Catalog entry for one [`InterventionType`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CatalogEntry {
    pub kind:                    InterventionType,
    pub description:             &'static str,
    /// Dollars per `unit`.
    pub unit_cost:               f64,
    pub unit:                    &'static str,
    pub typical_timeline_months: u32,
    /// Local surface cooling in °C, where one is published for the type.
    pub cooling_effect_c:        Option<f64>,
}

impl CatalogEntry {
    /// Units purchasable with `budget` dollars (rounded down).
    pub fn units_for_budget(&self, budget: f64) -> u64 {
        if budget.is_nan() || budget <= 0.0 {
            return 0;
        }
        (budget / self.unit_cost).floor() as u64
    }
}

impl InterventionType {
    pub fn catalog_entry(self) -> CatalogEntry {
        match self {
            InterventionType::TreeCanopy => CatalogEntry {
                kind:                    self,
                description:             "Increase neighborhood tree coverage",
                unit_cost:               500.0,
                unit:                    "tree",
                typical_timeline_months: 60,
                cooling_effect_c:        Some(2.0),
            },
            InterventionType::CoolingCenter => CatalogEntry {
                kind:                    self,
                description:             "Establish emergency cooling center",
                unit_cost:               500_000.0,
                unit:                    "center",
                typical_timeline_months: 3,
                cooling_effect_c:        None,
            },
            InterventionType::TransitCooling => CatalogEntry {
                kind:                    self,
                description:             "Deploy air-conditioned transit buses",
                unit_cost:               300_000.0,
                unit:                    "bus",
                typical_timeline_months: 1,
                cooling_effect_c:        None,
            },
            InterventionType::CoolRoofs => CatalogEntry {
                kind:                    self,
                description:             "Install reflective roofing",
                unit_cost:               3.0,
                unit:                    "sqft",
                typical_timeline_months: 6,
                cooling_effect_c:        Some(5.0),
            },
        }
    }

    /// Catalog entries for every type, in declaration order.
    pub fn catalog() -> Vec<CatalogEntry> {
        InterventionType::ALL.into_iter().map(InterventionType::catalog_entry).collect()
    }
}
