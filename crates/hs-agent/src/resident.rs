//! The `Resident` agent and its daily update rule.
//!
//! # Daily update
//!
//! ```text
//! exposure = max(0, T - 85)
//!   × 0.5   if cooling center nearby and T > 105
//!   × 0.8   if transit cooling and no vehicle
//!   × 0.85  if canopy increase
//! exposure > 20               → hydration -= 0.1, stressed,
//!                               heat illness with p = 0.01 · vulnerability/100
//! exposure > 30, vuln > 60    → severe with p = 0.05
//! overnight                   → hydration = min(1, hydration + 0.5)
//! ```
//!
//! Status only ever moves toward worse states.  A dead resident is never
//! updated again.

use std::collections::BTreeSet;
use std::fmt;

use hs_core::{GeoPoint, ResidentId, ResidentRng};

use crate::vulnerability::{vulnerability_score, RiskTier};
use crate::{Effect, EffectFlags};

/// Temperature (°F) above which residents accumulate heat exposure.
pub const EXPOSURE_THRESHOLD_F: f64 = 85.0;
/// Cooling centers only matter on days hotter than this (°F).
pub const COOLING_CENTER_MIN_TEMP_F: f64 = 105.0;

const COOLING_CENTER_FACTOR: f64 = 0.5;
const TRANSIT_COOLING_FACTOR: f64 = 0.8;
const CANOPY_FACTOR: f64 = 0.85;

const STRESS_EXPOSURE: f64 = 20.0;
const SEVERE_EXPOSURE: f64 = 30.0;
const SEVERE_MIN_VULNERABILITY: f64 = 60.0;
const HEAT_ILLNESS_BASE_P: f64 = 0.01;
const SEVERE_P: f64 = 0.05;
const DAILY_DEHYDRATION: f64 = 0.1;
const OVERNIGHT_RECOVERY: f64 = 0.5;

/// Well-known condition names used by the population generator.
pub const CARDIOVASCULAR: &str = "cardiovascular";
pub const DIABETES: &str = "diabetes";

// ── HealthStatus ──────────────────────────────────────────────────────────────

/// Health state of a resident, ordered from best to worst.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum HealthStatus {
    #[default]
    Healthy,
    /// Under heavy heat load but not (yet) ill.
    Stressed,
    HeatIllness,
    Severe,
    /// Terminal.
    Dead,
}

impl HealthStatus {
    pub fn is_dead(self) -> bool {
        matches!(self, HealthStatus::Dead)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            HealthStatus::Healthy     => "healthy",
            HealthStatus::Stressed    => "stressed",
            HealthStatus::HeatIllness => "heat_illness",
            HealthStatus::Severe      => "severe",
            HealthStatus::Dead        => "dead",
        }
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Attributes ────────────────────────────────────────────────────────────────

/// Static demographic attributes.  Immutable once the resident exists.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Attributes {
    pub age:               u32,
    /// Annual income in dollars.
    pub income:            f64,
    pub has_ac:            bool,
    pub has_car:           bool,
    pub works_outdoors:    bool,
    pub health_conditions: BTreeSet<String>,
    /// Social isolation in `[0, 1]`.
    pub social_isolation:  f64,
}

impl Default for Attributes {
    /// A 35-year-old, $50k income, with AC and a car: the low-risk baseline.
    fn default() -> Self {
        Self {
            age:               35,
            income:            50_000.0,
            has_ac:            true,
            has_car:           true,
            works_outdoors:    false,
            health_conditions: BTreeSet::new(),
            social_isolation:  0.0,
        }
    }
}

// ── Resident ──────────────────────────────────────────────────────────────────

/// One synthetic person.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Resident {
    id:            ResidentId,
    location:      GeoPoint,
    attributes:    Attributes,
    vulnerability: f64,

    exposure_today: f64,
    hydration:      f64,
    status:         HealthStatus,
}

impl Resident {
    /// Create a healthy, fully hydrated resident.  The vulnerability score is
    /// computed here, once.
    pub fn new(id: ResidentId, location: GeoPoint, attributes: Attributes) -> Self {
        let vulnerability = vulnerability_score(&attributes);
        Self {
            id,
            location,
            attributes,
            vulnerability,
            exposure_today: 0.0,
            hydration:      1.0,
            status:         HealthStatus::Healthy,
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn id(&self) -> ResidentId {
        self.id
    }

    #[inline]
    pub fn location(&self) -> GeoPoint {
        self.location
    }

    #[inline]
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Heat-vulnerability score in `[0, 100]`.
    #[inline]
    pub fn vulnerability(&self) -> f64 {
        self.vulnerability
    }

    pub fn risk_tier(&self) -> RiskTier {
        RiskTier::from_score(self.vulnerability)
    }

    #[inline]
    pub fn exposure_today(&self) -> f64 {
        self.exposure_today
    }

    #[inline]
    pub fn hydration(&self) -> f64 {
        self.hydration
    }

    #[inline]
    pub fn status(&self) -> HealthStatus {
        self.status
    }

    // ── State transitions ─────────────────────────────────────────────────

    /// Move to `status` if it is worse than the current one.
    fn escalate(&mut self, status: HealthStatus) {
        if status > self.status {
            self.status = status;
        }
    }

    /// Record a death from severe heat illness.
    pub fn mark_dead(&mut self) {
        self.escalate(HealthStatus::Dead);
    }

    /// Exposure after dampening by the active intervention effects.
    pub fn dampened_exposure(&self, max_temp_f: f64, effects: EffectFlags) -> f64 {
        let mut exposure = (max_temp_f - EXPOSURE_THRESHOLD_F).max(0.0);

        if effects.contains(Effect::CoolingCenterNearby) && max_temp_f > COOLING_CENTER_MIN_TEMP_F {
            exposure *= COOLING_CENTER_FACTOR;
        }
        if effects.contains(Effect::TransitCooling) && !self.attributes.has_car {
            exposure *= TRANSIT_COOLING_FACTOR;
        }
        if effects.contains(Effect::CanopyIncrease) {
            exposure *= CANOPY_FACTOR;
        }
        exposure
    }

    /// Advance this resident by one day at `max_temp_f` with `effects` active.
    ///
    /// Health draws come from the resident's own `rng`.  A living resident
    /// always takes exactly two draws (illness, then severe) whether or not
    /// the rules apply today.  Dead residents are left untouched.
    pub fn update_daily(&mut self, max_temp_f: f64, effects: EffectFlags, rng: &mut ResidentRng) {
        if self.status.is_dead() {
            return;
        }
        let illness_draw = rng.unit();
        let severe_draw = rng.unit();

        let exposure = self.dampened_exposure(max_temp_f, effects);
        self.exposure_today = exposure;

        if exposure > STRESS_EXPOSURE {
            self.hydration -= DAILY_DEHYDRATION;
            self.escalate(HealthStatus::Stressed);
            if illness_draw < HEAT_ILLNESS_BASE_P * self.vulnerability / 100.0 {
                self.escalate(HealthStatus::HeatIllness);
            }
        }

        if exposure > SEVERE_EXPOSURE && self.vulnerability > SEVERE_MIN_VULNERABILITY && severe_draw < SEVERE_P {
            self.escalate(HealthStatus::Severe);
        }

        self.hydration = (self.hydration + OVERNIGHT_RECOVERY).min(1.0);
    }
}
