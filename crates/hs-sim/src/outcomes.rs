//! Outcome counters, per-day history records, and query projections.

use std::iter::Sum;
use std::ops::{Add, AddAssign};

use hs_agent::{Resident, RiskTier};
use hs_core::{Day, ResidentId};

// ── DailyOutcomes ─────────────────────────────────────────────────────────────

/// Health events counted over one day (or summed over many).
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DailyOutcomes {
    pub heat_illness:        u64,
    pub severe_heat_illness: u64,
    pub deaths:              u64,
    pub er_visits:           u64,
}

impl DailyOutcomes {
    pub fn is_zero(&self) -> bool {
        *self == DailyOutcomes::default()
    }
}

impl Add for DailyOutcomes {
    type Output = DailyOutcomes;
    fn add(self, rhs: DailyOutcomes) -> DailyOutcomes {
        DailyOutcomes {
            heat_illness:        self.heat_illness + rhs.heat_illness,
            severe_heat_illness: self.severe_heat_illness + rhs.severe_heat_illness,
            deaths:              self.deaths + rhs.deaths,
            er_visits:           self.er_visits + rhs.er_visits,
        }
    }
}

impl AddAssign for DailyOutcomes {
    fn add_assign(&mut self, rhs: DailyOutcomes) {
        *self = *self + rhs;
    }
}

impl Sum for DailyOutcomes {
    fn sum<I: Iterator<Item = DailyOutcomes>>(iter: I) -> Self {
        iter.fold(DailyOutcomes::default(), Add::add)
    }
}

impl<'a> Sum<&'a DailyOutcomes> for DailyOutcomes {
    fn sum<I: Iterator<Item = &'a DailyOutcomes>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// ── DayRecord ─────────────────────────────────────────────────────────────────

/// One entry of the engine's append-only history.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DayRecord {
    pub day:                  Day,
    pub max_temp_f:           f64,
    pub outcomes:             DailyOutcomes,
    pub active_interventions: usize,
}

// ── ScenarioResult ────────────────────────────────────────────────────────────

/// What a scenario run returns.
#[derive(Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScenarioResult {
    /// Sum of every counter across `history`.
    pub totals:        DailyOutcomes,
    /// The engine's history since generation, in day order.  Includes days
    /// simulated before this run.
    pub history:       Vec<DayRecord>,
    /// Names of the interventions that were active.
    pub interventions: Vec<String>,
}

impl ScenarioResult {
    pub fn days(&self) -> usize {
        self.history.len()
    }

    /// Hottest recorded day, if any days were simulated.
    pub fn peak_temperature(&self) -> Option<f64> {
        self.history.iter().map(|r| r.max_temp_f).reduce(f64::max)
    }
}

// ── VulnerableResident ────────────────────────────────────────────────────────

/// Read-only projection returned by the vulnerable-population query.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VulnerableResident {
    pub id:            ResidentId,
    pub lat:           f64,
    pub lon:           f64,
    pub vulnerability: f64,
    pub age:           u32,
    pub income:        f64,
    pub has_ac:        bool,
    pub profile:       RiskTier,
}

impl From<&Resident> for VulnerableResident {
    fn from(r: &Resident) -> Self {
        let attrs = r.attributes();
        Self {
            id:            r.id(),
            lat:           r.location().lat,
            lon:           r.location().lon,
            vulnerability: r.vulnerability(),
            age:           attrs.age,
            income:        attrs.income,
            has_ac:        attrs.has_ac,
            profile:       r.risk_tier(),
        }
    }
}
