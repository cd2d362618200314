//! Simulation observer trait for progress reporting and data collection.

use hs_agent::ResidentStore;
use hs_core::Day;

use crate::{DayRecord, ScenarioResult};

/// Callbacks invoked by [`HeatSim::run_scenario_with`][crate::HeatSim::run_scenario_with]
/// at key points in the day loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — heat-day counter
///
/// ```rust,ignore
/// struct HotDays(usize);
///
/// impl SimObserver for HotDays {
///     fn on_day_start(&mut self, _day: Day, max_temp_f: f64) {
///         if max_temp_f > 105.0 {
///             self.0 += 1;
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called before the residents are updated for `day`.
    fn on_day_start(&mut self, _day: Day, _max_temp_f: f64) {}

    /// Called after the day's record has been appended to the history.
    ///
    /// Provides read-only access to the population so output writers can
    /// record per-resident state without the engine knowing the format.
    fn on_day_end(&mut self, _record: &DayRecord, _residents: &ResidentStore) {}

    /// Called once after the final day of a scenario.
    fn on_scenario_end(&mut self, _result: &ScenarioResult) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
