//! Daily maximum temperature profiles.
//!
//! The synthetic profile is a seasonal sinusoid with its minimum at the start
//! of the year and its peak mid-year, plus Gaussian day-to-day noise:
//!
//! ```text
//! T(d) = 70 + 35 · sin(2π · (d mod 365) / 365 − π/2) + N(0, 5)
//! ```
//!
//! All temperatures are °F.

use std::f64::consts::PI;

use rand_distr::{Distribution, Normal};

use hs_core::{Day, SimRng};

use crate::{SimError, SimResult};

const MEAN_TEMP_F: f64 = 70.0;
const SEASONAL_AMPLITUDE_F: f64 = 35.0;
const DAILY_NOISE_SD_F: f64 = 5.0;
const DAYS_PER_YEAR: f64 = 365.0;

/// Offset mixed into the seed for the weather stream, keeping it independent
/// from the population stream.
const WEATHER_STREAM: u64 = 0x7765_6174_6865_72; // "weather"

/// The RNG an engine seeded with `seed` uses for synthetic temperatures.
pub fn weather_rng(seed: u64) -> SimRng {
    SimRng::new(seed).child(WEATHER_STREAM)
}

/// Seasonal mean for `day`, without noise.
pub fn seasonal_mean(day: Day) -> f64 {
    let phase = 2.0 * PI * f64::from(day.day_of_year()) / DAYS_PER_YEAR - PI / 2.0;
    MEAN_TEMP_F + SEASONAL_AMPLITUDE_F * phase.sin()
}

/// Synthesize `days` daily maxima starting at `start`.
pub fn seasonal_profile(start: Day, days: u32, rng: &mut SimRng) -> SimResult<Vec<f64>> {
    let noise = Normal::new(0.0, DAILY_NOISE_SD_F)
        .map_err(|e| SimError::Config(format!("temperature noise distribution: {e}")))?;
    Ok((0..days)
        .map(|d| seasonal_mean(start + d) + noise.sample(rng.inner()))
        .collect())
}

/// Reject profiles containing NaN or infinite temperatures.
pub fn check_profile(temps: &[f64]) -> SimResult<()> {
    match temps.iter().position(|t| !t.is_finite()) {
        Some(i) => Err(SimError::Config(format!(
            "temperature for day {i} is not a finite number ({})",
            temps[i]
        ))),
        None => Ok(()),
    }
}
