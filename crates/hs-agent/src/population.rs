//! Seeded synthetic population generation.
//!
//! # Usage
//!
//! ```rust
//! use hs_agent::PopulationGenerator;
//! use hs_core::SimConfig;
//!
//! let (store, rngs) = PopulationGenerator::new(&SimConfig::with_population(1_000))
//!     .generate()
//!     .unwrap();
//!
//! assert_eq!(store.len(), 1_000);
//! assert_eq!(rngs.len(),  1_000);
//! ```
//!
//! # Sampling model
//!
//! | Attribute          | Distribution                                           |
//! |--------------------|--------------------------------------------------------|
//! | lat / lon          | Normal around the city center, clamped to the box      |
//! | age                | 0–17 (25 %), 18–64 (60 %), 65–94 (15 %), uniform within |
//! | income             | LogNormal(μ = 11, σ = 0.6), median ≈ $60k              |
//! | AC                 | Bernoulli(0.5 + 0.4 · income / 100k)                   |
//! | vehicle            | Bernoulli(0.6 + 0.3 · income / 100k)                   |
//! | outdoor work       | Bernoulli(0.15), only for 18 < age < 65                |
//! | cardiovascular     | Bernoulli(0.3) if age > 50                             |
//! | diabetes           | Bernoulli(0.2) if age > 40                             |
//! | social isolation   | Uniform[0, 0.5)                                        |
//!
//! Every attribute is drawn for every resident in the fixed order above, so
//! one seed always produces the same population.

use std::collections::BTreeSet;

use log::info;
use rand::Rng;
use rand_distr::{Distribution, LogNormal, Normal};

use hs_core::{GeoPoint, HsError, HsResult, ResidentId, SimConfig, SimRng};

use crate::resident::{CARDIOVASCULAR, DIABETES};
use crate::vulnerability::RiskTier;
use crate::{Attributes, Resident, ResidentRngs, ResidentStore};

/// `(min_age, max_age_exclusive, weight)` buckets of the age mixture.
const AGE_BUCKETS: [(u32, u32, f64); 3] = [(0, 18, 0.25), (18, 65, 0.60), (65, 95, 0.15)];

const INCOME_LOG_MEAN: f64 = 11.0;
const INCOME_LOG_SD: f64 = 0.6;
const OUTDOOR_WORK_P: f64 = 0.15;
const MAX_INITIAL_ISOLATION: f64 = 0.5;

/// Builds a [`ResidentStore`] + [`ResidentRngs`] from a [`SimConfig`].
pub struct PopulationGenerator<'a> {
    config: &'a SimConfig,
}

impl<'a> PopulationGenerator<'a> {
    pub fn new(config: &'a SimConfig) -> Self {
        Self { config }
    }

    /// Sample the population.
    ///
    /// Re-running with the same configuration yields a bit-identical result.
    pub fn generate(&self) -> HsResult<(ResidentStore, ResidentRngs)> {
        self.config.validate()?;

        let n = self.config.population;
        info!("generating {n} synthetic residents (seed {})", self.config.seed);

        let city = &self.config.city;
        let lat_dist = Normal::new(city.center.lat, city.spread_lat)
            .map_err(|e| HsError::Config(format!("latitude distribution: {e}")))?;
        let lon_dist = Normal::new(city.center.lon, city.spread_lon)
            .map_err(|e| HsError::Config(format!("longitude distribution: {e}")))?;
        let income_dist = LogNormal::new(INCOME_LOG_MEAN, INCOME_LOG_SD)
            .map_err(|e| HsError::Config(format!("income distribution: {e}")))?;

        let mut rng = SimRng::new(self.config.seed);
        let mut residents = Vec::with_capacity(n);

        for i in 0..n as u32 {
            let raw = GeoPoint::new(lat_dist.sample(rng.inner()), lon_dist.sample(rng.inner()));
            let location = city.clamp(raw);

            let age = sample_age(&mut rng);
            let income: f64 = income_dist.sample(rng.inner());

            let has_ac = rng.unit() < 0.5 + 0.4 * (income / 100_000.0);
            let has_car = rng.unit() < 0.6 + 0.3 * (income / 100_000.0);
            let works_outdoors = rng.unit() < OUTDOOR_WORK_P && age > 18 && age < 65;

            let mut health_conditions = BTreeSet::new();
            if age > 50 && rng.unit() < 0.3 {
                health_conditions.insert(CARDIOVASCULAR.to_owned());
            }
            if age > 40 && rng.unit() < 0.2 {
                health_conditions.insert(DIABETES.to_owned());
            }

            let social_isolation = rng.unit() * MAX_INITIAL_ISOLATION;

            let attributes = Attributes {
                age,
                income,
                has_ac,
                has_car,
                works_outdoors,
                health_conditions,
                social_isolation,
            };
            residents.push(Resident::new(ResidentId(i), location, attributes));
        }

        let store = ResidentStore::from_residents(residents);
        let rngs = ResidentRngs::new(n, self.config.seed);

        let breakdown = store.tier_breakdown();
        info!("generated {} residents", store.len());
        for tier in RiskTier::ALL {
            info!(
                "  {tier}: {} ({:.1}%)",
                breakdown.count(tier),
                breakdown.percent(tier)
            );
        }

        Ok((store, rngs))
    }
}

/// Draw an age from the three-bucket mixture.
fn sample_age(rng: &mut SimRng) -> u32 {
    let pick = rng.unit();
    let mut acc = 0.0;
    for &(lo, hi, weight) in &AGE_BUCKETS {
        acc += weight;
        if pick < acc {
            return rng.inner().gen_range(lo..hi);
        }
    }
    let (lo, hi, _) = AGE_BUCKETS[AGE_BUCKETS.len() - 1];
    rng.inner().gen_range(lo..hi)
}
