//! Intervention definitions and the feasibility check.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use hs_agent::Effect;
use hs_core::GeoPoint;

use crate::{InterventionError, InterventionResult};

/// Largest accepted targeting radius, in kilometres.
pub const MAX_RADIUS_KM: f64 = 50.0;
/// Radius assumed when a center point is given without one.
pub const DEFAULT_RADIUS_KM: f64 = 1.0;

// ── InterventionType ──────────────────────────────────────────────────────────

/// The kind of heat-mitigation action.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum InterventionType {
    TreeCanopy,
    CoolingCenter,
    TransitCooling,
    CoolRoofs,
}

impl InterventionType {
    pub const ALL: [InterventionType; 4] = [
        InterventionType::TreeCanopy,
        InterventionType::CoolingCenter,
        InterventionType::TransitCooling,
        InterventionType::CoolRoofs,
    ];

    /// The runtime effect this type has on residents it reaches.
    ///
    /// Cool roofs are a valid, costed intervention for planning but have no
    /// modelled effect on daily exposure, so they map to `None`.
    pub fn effect(self) -> Option<Effect> {
        match self {
            InterventionType::CoolingCenter  => Some(Effect::CoolingCenterNearby),
            InterventionType::TreeCanopy     => Some(Effect::CanopyIncrease),
            InterventionType::TransitCooling => Some(Effect::TransitCooling),
            InterventionType::CoolRoofs      => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            InterventionType::TreeCanopy     => "tree_canopy",
            InterventionType::CoolingCenter  => "cooling_center",
            InterventionType::TransitCooling => "transit_cooling",
            InterventionType::CoolRoofs      => "cool_roofs",
        }
    }
}

impl fmt::Display for InterventionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InterventionType {
    type Err = InterventionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        InterventionType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| InterventionError::UnknownType(s.to_owned()))
    }
}

// ── TargetArea ────────────────────────────────────────────────────────────────

/// Where an intervention applies.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TargetArea {
    /// Everyone within `radius_km` of `center`.
    Radius { center: GeoPoint, radius_km: f64 },
    /// Opaque area identifiers (e.g. census tract ids).  Always
    /// geographically valid, but not resolvable to residents yet.
    Areas(BTreeSet<String>),
}

impl TargetArea {
    pub fn radius(lat: f64, lon: f64, radius_km: f64) -> Self {
        TargetArea::Radius { center: GeoPoint::new(lat, lon), radius_km }
    }

    pub fn areas<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        TargetArea::Areas(ids.into_iter().map(Into::into).collect())
    }

    /// Assemble a target from loose request fields.
    ///
    /// A center needs both coordinates; the radius defaults to
    /// [`DEFAULT_RADIUS_KM`].  Without any center fields the area ids are used.
    pub fn from_parts(
        center_lat: Option<f64>,
        center_lon: Option<f64>,
        radius_km:  Option<f64>,
        area_ids:   impl IntoIterator<Item = String>,
    ) -> InterventionResult<Self> {
        match (center_lat, center_lon) {
            (Some(lat), Some(lon)) => Ok(TargetArea::radius(lat, lon, radius_km.unwrap_or(DEFAULT_RADIUS_KM))),
            (Some(_), None) => Err(InterventionError::MissingCoordinate {
                present: "center_lat",
                missing: "center_lon",
            }),
            (None, Some(_)) => Err(InterventionError::MissingCoordinate {
                present: "center_lon",
                missing: "center_lat",
            }),
            (None, None) => Ok(TargetArea::Areas(area_ids.into_iter().collect())),
        }
    }

    /// Geographic sanity: lat ∈ [-90, 90], lon ∈ [-180, 180],
    /// radius ∈ (0, 50] km.  Area-id targets always pass.
    pub fn check(&self) -> InterventionResult<()> {
        match self {
            TargetArea::Radius { center, radius_km } => {
                if !(-90.0..=90.0).contains(&center.lat) {
                    return Err(InterventionError::InvalidLatitude(center.lat));
                }
                if !(-180.0..=180.0).contains(&center.lon) {
                    return Err(InterventionError::InvalidLongitude(center.lon));
                }
                if radius_km.is_nan() || *radius_km <= 0.0 || *radius_km > MAX_RADIUS_KM {
                    return Err(InterventionError::InvalidRadius(*radius_km));
                }
                Ok(())
            }
            TargetArea::Areas(_) => Ok(()),
        }
    }
}

// ── Intervention ──────────────────────────────────────────────────────────────

/// A proposed, costed, geographically-targeted heat-mitigation action.
///
/// # Example
///
/// ```
/// use hs_intervention::{Intervention, InterventionType, TargetArea};
///
/// let trees = Intervention::new(
///     "South Phoenix Tree Initiative",
///     InterventionType::TreeCanopy,
///     TargetArea::radius(33.40, -112.10, 3.0),
///     2_000_000.0,
///     12,
/// );
/// assert!(trees.validate());
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Intervention {
    pub name:                String,
    pub kind:                InterventionType,
    pub target:              TargetArea,
    /// Implementation cost in dollars.
    pub implementation_cost: f64,
    pub timeline_months:     u32,
}

impl Intervention {
    pub fn new(
        name:                impl Into<String>,
        kind:                InterventionType,
        target:              TargetArea,
        implementation_cost: f64,
        timeline_months:     u32,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            target,
            implementation_cost,
            timeline_months,
        }
    }

    /// Report the first violated feasibility condition, if any.
    pub fn check(&self) -> InterventionResult<()> {
        if self.implementation_cost.is_nan() || self.implementation_cost <= 0.0 {
            return Err(InterventionError::NonPositiveCost(self.implementation_cost));
        }
        if self.timeline_months == 0 {
            return Err(InterventionError::ZeroTimeline);
        }
        self.target.check()
    }

    /// Feasibility predicate: `true` if every condition holds.
    pub fn validate(&self) -> bool {
        self.check().is_ok()
    }
}
