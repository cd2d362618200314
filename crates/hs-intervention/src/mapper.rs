//! Resolve interventions to per-resident effect flags.
//!
//! For every radius-targeted intervention the index is queried for residents
//! within `radius_km / 111` degrees of the center, and the intervention's
//! effect flag is OR-ed into each hit.  Overlaps accumulate.
//!
//! Two documented no-ops:
//! - area-id targets do not resolve to residents yet;
//! - cool roofs have no runtime effect flag.

use log::{debug, warn};

use hs_agent::EffectFlags;
use hs_core::ResidentId;
use hs_spatial::ResidentIndex;

use crate::{InterventionResult, InterventionSet, TargetArea};

#[cfg(not(feature = "fx-hash"))]
type FlagMap = std::collections::HashMap<ResidentId, EffectFlags>;
#[cfg(feature = "fx-hash")]
type FlagMap = rustc_hash::FxHashMap<ResidentId, EffectFlags>;

/// Resident → active effect flags.  Residents absent from the map have no
/// active effects.
#[derive(Clone, Debug, Default)]
pub struct EffectMap {
    flags: FlagMap,
}

impl EffectMap {
    /// Flags for `resident`; empty if none apply.
    #[inline]
    pub fn effects_for(&self, resident: ResidentId) -> EffectFlags {
        self.flags.get(&resident).copied().unwrap_or_default()
    }

    /// Number of residents with at least one active effect.
    pub fn affected_count(&self) -> usize {
        self.flags.values().filter(|f| !f.is_empty()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.affected_count() == 0
    }

    fn add(&mut self, resident: ResidentId, flags: EffectFlags) {
        *self.flags.entry(resident).or_default() |= flags;
    }
}

/// Build the effect map for `interventions` against `index`.
pub fn map_interventions(interventions: &InterventionSet, index: &ResidentIndex) -> InterventionResult<EffectMap> {
    let mut map = EffectMap::default();

    for intervention in interventions {
        let TargetArea::Radius { center, radius_km } = &intervention.target else {
            warn!(
                "intervention `{}` targets area ids; area targeting is not resolved to residents",
                intervention.name
            );
            continue;
        };

        let Some(effect) = intervention.kind.effect() else {
            debug!(
                "intervention `{}` ({}) has no runtime exposure effect",
                intervention.name, intervention.kind
            );
            continue;
        };

        let hits = index.within_km(*center, *radius_km)?;
        debug!(
            "intervention `{}` ({}) reaches {} residents",
            intervention.name,
            intervention.kind,
            hits.len()
        );
        for resident in hits {
            map.add(resident, effect.into());
        }
    }

    Ok(map)
}
