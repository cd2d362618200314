//! Top-level simulation configuration.
//!
//! Typically built by the application crate (or deserialised from JSON with
//! the `serde` feature) and handed to the engine builder.  `Default` describes
//! the Phoenix metro area the synthetic generators were tuned for.

use crate::{GeoPoint, HsError, HsResult};

/// Seed used when none is configured.  Two engines with the default seed
/// generate identical populations.
pub const DEFAULT_SEED: u64 = 42;

// ── CityBounds ────────────────────────────────────────────────────────────────

/// Where synthetic residents are placed.
///
/// Coordinates are drawn from a 2-D Gaussian around `center` with standard
/// deviations `spread_lat` / `spread_lon` (degrees) and then clamped into the
/// bounding box.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CityBounds {
    pub center:     GeoPoint,
    pub spread_lat: f64,
    pub spread_lon: f64,
    pub lat_min:    f64,
    pub lat_max:    f64,
    pub lon_min:    f64,
    pub lon_max:    f64,
}

impl CityBounds {
    /// Rough Phoenix, AZ metro box.
    pub fn phoenix() -> Self {
        Self {
            center:     GeoPoint::new(33.45, -112.07),
            spread_lat: 0.08,
            spread_lon: 0.12,
            lat_min:    33.3,
            lat_max:    33.6,
            lon_min:    -112.3,
            lon_max:    -111.8,
        }
    }

    /// Clamp `p` into the bounding box.
    #[inline]
    pub fn clamp(&self, p: GeoPoint) -> GeoPoint {
        GeoPoint::new(
            p.lat.clamp(self.lat_min, self.lat_max),
            p.lon.clamp(self.lon_min, self.lon_max),
        )
    }

    /// `true` if `p` lies inside the box (inclusive).
    #[inline]
    pub fn contains(&self, p: GeoPoint) -> bool {
        (self.lat_min..=self.lat_max).contains(&p.lat)
            && (self.lon_min..=self.lon_max).contains(&p.lon)
    }
}

impl Default for CityBounds {
    fn default() -> Self {
        Self::phoenix()
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Engine configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Number of synthetic residents to generate.
    pub population: usize,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Geography of the synthetic population.
    pub city: CityBounds,
}

impl SimConfig {
    /// Default configuration for a population of `n` residents.
    pub fn with_population(n: usize) -> Self {
        Self { population: n, ..Self::default() }
    }

    /// Check the configuration for values the generators cannot use.
    pub fn validate(&self) -> HsResult<()> {
        let c = &self.city;
        if !c.center.is_valid() {
            return Err(HsError::Config(format!("city center {} is not a valid coordinate", c.center)));
        }
        if !(c.spread_lat.is_finite() && c.spread_lat > 0.0 && c.spread_lon.is_finite() && c.spread_lon > 0.0) {
            return Err(HsError::Config(format!(
                "city spread must be positive and finite (got {}, {})",
                c.spread_lat, c.spread_lon
            )));
        }
        if !(c.lat_min <= c.lat_max && c.lon_min <= c.lon_max) {
            return Err(HsError::Config("city bounding box is inverted".into()));
        }
        if !c.contains(c.center) {
            return Err(HsError::Config(format!("city center {} lies outside the bounding box", c.center)));
        }
        if u32::try_from(self.population).is_err() {
            return Err(HsError::Config(format!("population {} exceeds the resident id range", self.population)));
        }
        Ok(())
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            population: 100_000,
            seed:       DEFAULT_SEED,
            city:       CityBounds::phoenix(),
        }
    }
}
