//! Population storage: `ResidentStore` (agent data) and `ResidentRngs`
//! (per-resident RNG).
//!
//! # Why two structs?
//!
//! The day loop needs `&mut Resident` and `&mut ResidentRng` for the same
//! index at the same time, and with the `parallel` feature it hands disjoint
//! pairs to Rayon workers.  Keeping the RNGs in their own `Vec` lets the
//! engine zip the two slices:
//!
//! ```ignore
//! store.residents_mut()
//!     .iter_mut()
//!     .zip(rngs.inner.iter_mut())
//!     .for_each(|(resident, rng)| resident.update_daily(t, flags, rng));
//! ```

use hs_core::{ResidentId, ResidentRng};

use crate::{PopulationSummary, Resident, TierBreakdown};

// ── ResidentRngs ──────────────────────────────────────────────────────────────

/// Per-resident deterministic RNG state, indexed by `ResidentId`.
#[derive(Clone, Debug, Default)]
pub struct ResidentRngs {
    pub inner: Vec<ResidentRng>,
}

impl ResidentRngs {
    /// Allocate and seed `count` per-resident RNGs from `global_seed`.
    pub fn new(count: usize, global_seed: u64) -> Self {
        let inner = (0..count as u32)
            .map(|i| ResidentRng::new(global_seed, ResidentId(i)))
            .collect();
        Self { inner }
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

// ── ResidentStore ─────────────────────────────────────────────────────────────

/// The ordered population.  `residents[i].id() == ResidentId(i)` for all `i`;
/// order is only used for reproducible iteration.
#[derive(Clone, Debug, Default)]
pub struct ResidentStore {
    residents: Vec<Resident>,
}

impl ResidentStore {
    /// Wrap an already-built population.  Ids are expected to be sequential
    /// from 0; [`PopulationGenerator`](crate::PopulationGenerator) guarantees it.
    pub fn from_residents(residents: Vec<Resident>) -> Self {
        debug_assert!(residents.iter().enumerate().all(|(i, r)| r.id().index() == i));
        Self { residents }
    }

    pub fn len(&self) -> usize {
        self.residents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.residents.is_empty()
    }

    #[inline]
    pub fn get(&self, id: ResidentId) -> Option<&Resident> {
        self.residents.get(id.index())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Resident> {
        self.residents.iter()
    }

    pub fn as_slice(&self) -> &[Resident] {
        &self.residents
    }

    /// Mutable slice, for the engine's day loop.
    pub fn residents_mut(&mut self) -> &mut [Resident] {
        &mut self.residents
    }

    /// Count residents per risk tier.
    pub fn tier_breakdown(&self) -> TierBreakdown {
        self.residents.iter().map(Resident::risk_tier).collect()
    }

    /// Headline vulnerability counts over the whole population.
    pub fn summary(&self) -> PopulationSummary {
        self.residents.iter().collect()
    }

    /// Number of residents whose status is `Dead`.
    pub fn dead_count(&self) -> usize {
        self.residents.iter().filter(|r| r.status().is_dead()).count()
    }
}

impl<'a> IntoIterator for &'a ResidentStore {
    type Item = &'a Resident;
    type IntoIter = std::slice::Iter<'a, Resident>;

    fn into_iter(self) -> Self::IntoIter {
        self.residents.iter()
    }
}
