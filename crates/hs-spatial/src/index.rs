//! Resident spatial index.
//!
//! An R-tree (via `rstar`) over `[lat, lon]` points.  Distances are plain
//! Euclidean distances in degree space; callers convert kilometres with
//! [`hs_core::geo::km_to_degrees`].

use rstar::{PointDistance, RTree, RTreeObject, AABB};

use hs_core::geo::km_to_degrees;
use hs_core::{GeoPoint, ResidentId};

use crate::{SpatialError, SpatialResult};

// ── R-tree entry ──────────────────────────────────────────────────────────────

/// Entry stored in the R-tree: a 2-D `[lat, lon]` point with the resident's id.
#[derive(Clone, Debug)]
struct ResidentEntry {
    point: [f64; 2], // [lat, lon]
    id:    ResidentId,
}

impl RTreeObject for ResidentEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for ResidentEntry {
    /// Squared Euclidean distance in lat/lon space.
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dlat = self.point[0] - point[0];
        let dlon = self.point[1] - point[1];
        dlat * dlat + dlon * dlon
    }
}

// ── ResidentIndex ─────────────────────────────────────────────────────────────

/// Read-only radius query structure over resident coordinates.
///
/// Safe to share between threads once built (`RTree` is `Sync`).
#[derive(Clone, Debug)]
pub struct ResidentIndex {
    tree: RTree<ResidentEntry>,
}

impl ResidentIndex {
    /// An index with no residents.  Every query returns nothing.
    pub fn empty() -> Self {
        Self { tree: RTree::new() }
    }

    /// Bulk-load from `(id, position)` pairs.
    ///
    /// Time complexity: O(N log N), faster than N single inserts.
    pub fn build<I>(points: I) -> Self
    where
        I: IntoIterator<Item = (ResidentId, GeoPoint)>,
    {
        let entries: Vec<ResidentEntry> = points
            .into_iter()
            .map(|(id, pos)| ResidentEntry { point: pos.as_array(), id })
            .collect();
        Self { tree: RTree::bulk_load(entries) }
    }

    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }

    /// All residents within `radius_deg` (inclusive) of `center`, sorted by id.
    pub fn within_degrees(&self, center: GeoPoint, radius_deg: f64) -> SpatialResult<Vec<ResidentId>> {
        if !(radius_deg.is_finite() && radius_deg >= 0.0) {
            return Err(SpatialError::InvalidRadius(radius_deg));
        }
        if !(center.lat.is_finite() && center.lon.is_finite()) {
            return Err(SpatialError::InvalidCenter(center));
        }

        let mut ids: Vec<ResidentId> = self
            .tree
            .locate_within_distance(center.as_array(), radius_deg * radius_deg)
            .map(|e| e.id)
            .collect();
        ids.sort_unstable();
        Ok(ids)
    }

    /// All residents within `radius_km` of `center`, using the flat
    /// 111 km-per-degree conversion.
    pub fn within_km(&self, center: GeoPoint, radius_km: f64) -> SpatialResult<Vec<ResidentId>> {
        self.within_degrees(center, km_to_degrees(radius_km))
    }
}

impl Default for ResidentIndex {
    fn default() -> Self {
        Self::empty()
    }
}
