//! Per-resident intervention effect flags.
//!
//! An intervention reaches a resident as one of a fixed set of named effects.
//! `EffectFlags` is a tiny bit-set over [`Effect`]; overlapping interventions
//! combine by set union, never by overwrite.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// A runtime effect an intervention can have on a resident's daily exposure.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Effect {
    /// A cooling center is within reach.  Halves exposure above 105 °F.
    CoolingCenterNearby,
    /// Air-conditioned transit.  Cuts exposure by 20 % for residents without
    /// a vehicle.
    TransitCooling,
    /// Increased neighbourhood tree canopy.  Cuts exposure by 15 %.
    CanopyIncrease,
}

impl Effect {
    pub const ALL: [Effect; 3] = [Effect::CoolingCenterNearby, Effect::TransitCooling, Effect::CanopyIncrease];

    #[inline]
    fn bit(self) -> u8 {
        match self {
            Effect::CoolingCenterNearby => 0b001,
            Effect::TransitCooling      => 0b010,
            Effect::CanopyIncrease      => 0b100,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Effect::CoolingCenterNearby => "cooling_center_nearby",
            Effect::TransitCooling      => "transit_cooling",
            Effect::CanopyIncrease      => "neighborhood_canopy_increase",
        }
    }
}

impl fmt::Display for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Set of [`Effect`]s active for one resident on one day.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EffectFlags(u8);

impl EffectFlags {
    pub const NONE: EffectFlags = EffectFlags(0);

    #[inline]
    pub fn empty() -> Self {
        Self::NONE
    }

    /// Builder-style insert.
    #[inline]
    pub fn with(mut self, effect: Effect) -> Self {
        self.insert(effect);
        self
    }

    #[inline]
    pub fn insert(&mut self, effect: Effect) {
        self.0 |= effect.bit();
    }

    #[inline]
    pub fn contains(self, effect: Effect) -> bool {
        self.0 & effect.bit() != 0
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Active effects in declaration order.
    pub fn iter(self) -> impl Iterator<Item = Effect> {
        Effect::ALL.into_iter().filter(move |e| self.contains(*e))
    }
}

impl From<Effect> for EffectFlags {
    fn from(effect: Effect) -> Self {
        EffectFlags::empty().with(effect)
    }
}

impl FromIterator<Effect> for EffectFlags {
    fn from_iter<I: IntoIterator<Item = Effect>>(iter: I) -> Self {
        iter.into_iter().fold(EffectFlags::empty(), EffectFlags::with)
    }
}

impl BitOr for EffectFlags {
    type Output = EffectFlags;
    #[inline]
    fn bitor(self, rhs: EffectFlags) -> EffectFlags {
        EffectFlags(self.0 | rhs.0)
    }
}

impl BitOrAssign for EffectFlags {
    #[inline]
    fn bitor_assign(&mut self, rhs: EffectFlags) {
        self.0 |= rhs.0;
    }
}
