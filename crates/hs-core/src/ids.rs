//! Strongly typed resident identifier.
//!
//! `ResidentId` is `Copy + Ord + Hash` so it can be used as a map key and a
//! sorted collection element without ceremony.  The inner integer is `pub` to
//! allow direct indexing into the population `Vec` via `.index()`.

use std::fmt;

/// Index of a resident in the engine's population.  Assigned sequentially
/// from 0 at generation time and never reused within a population.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ResidentId(pub u32);

impl ResidentId {
    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for ResidentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ResidentId({})", self.0)
    }
}

impl From<ResidentId> for usize {
    #[inline(always)]
    fn from(id: ResidentId) -> usize {
        id.0 as usize
    }
}

impl TryFrom<usize> for ResidentId {
    type Error = std::num::TryFromIntError;
    fn try_from(n: usize) -> Result<ResidentId, Self::Error> {
        u32::try_from(n).map(ResidentId)
    }
}
