//! Geographic coordinate type and small-area distance helpers.
//!
//! All radius queries in the simulator work in plain lat/lon degree space.
//! A kilometre radius is converted with [`km_to_degrees`], a flat-earth
//! approximation (1° ≈ 111 km) that is acceptable at city scale.  It is not
//! geodesically exact and longitude degrees shrink with latitude; switching
//! to a great-circle formula would change which residents a query returns.

/// Kilometres per degree used by [`km_to_degrees`].
pub const KM_PER_DEGREE: f64 = 111.0;

/// Convert a radius in kilometres to an approximate radius in degrees.
#[inline]
pub fn km_to_degrees(km: f64) -> f64 {
    km / KM_PER_DEGREE
}

/// A WGS-84 geographic coordinate in double-precision degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// `true` if both components are inside the WGS-84 ranges
    /// (lat ∈ [-90, 90], lon ∈ [-180, 180]).
    #[inline]
    pub fn is_valid(self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lon)
    }

    /// `[lat, lon]` array form, as stored in the R-tree.
    #[inline]
    pub fn as_array(self) -> [f64; 2] {
        [self.lat, self.lon]
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}
