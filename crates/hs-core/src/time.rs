//! Simulation time model.
//!
//! The simulator advances in whole days.  `Day` is the canonical time unit;
//! `SimClock` holds the current day and is advanced exactly once per
//! simulated day by the engine.

use std::fmt;

// ── Day ───────────────────────────────────────────────────────────────────────

/// An absolute simulation day counter, starting at 0.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Day(pub u32);

impl Day {
    pub const ZERO: Day = Day(0);

    /// Position within a 365-day year (0-based).
    #[inline]
    pub fn day_of_year(self) -> u32 {
        self.0 % 365
    }
}

impl std::ops::Add<u32> for Day {
    type Output = Day;
    #[inline]
    fn add(self, rhs: u32) -> Day {
        Day(self.0 + rhs)
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "D{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// The engine's day counter.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// The current day, advanced by `SimClock::advance()` once per day.
    pub current_day: Day,
}

impl SimClock {
    pub fn new() -> Self {
        Self { current_day: Day::ZERO }
    }

    /// Advance the clock by one day.
    #[inline]
    pub fn advance(&mut self) {
        self.current_day = self.current_day + 1;
    }

    /// Rewind to day 0 (used when a fresh population is generated).
    pub fn reset(&mut self) {
        self.current_day = Day::ZERO;
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (day {} of year)", self.current_day, self.current_day.day_of_year())
    }
}
