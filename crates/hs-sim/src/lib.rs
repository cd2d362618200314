//! `hs-sim` — the day loop of the urban heat simulator.
//!
//! # One simulated day
//!
//! ```text
//! advance_day(T, interventions):
//!   ① Map       resolve interventions against the spatial index into
//!               per-resident effect flags.
//!   ② Update    every living resident applies the daily rule at T with its
//!               flags, drawing from its own RNG (parallel with `parallel`).
//!   ③ Tally     newly ill / severe residents are counted; ER visits and
//!               deaths are drawn.
//!   ④ Record    one `DayRecord` is appended to the history; clock advances.
//! ```
//!
//! A scenario repeats this over a temperature profile with one fixed
//! `InterventionSet`.  [`compare_scenarios`] runs a baseline and an
//! intervention engine from the same seed and profile.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs the per-resident update on Rayon's thread pool.   |
//! | `fx-hash`  | FxHash for the per-resident effect map.                |
//! | `serde`    | Serialize/Deserialize on outcomes and results.         |
//!
//! # Quick-start
//!
//! ```rust
//! use hs_intervention::InterventionSet;
//! use hs_sim::HeatSim;
//!
//! let mut sim = HeatSim::new(1_000).unwrap();
//! sim.generate_population().unwrap();
//! let result = sim.run_scenario(10, None, &InterventionSet::none()).unwrap();
//! assert_eq!(result.history.len(), 10);
//! ```

pub mod builder;
pub mod compare;
pub mod error;
pub mod observer;
pub mod outcomes;
pub mod sim;
pub mod weather;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use compare::{compare_scenarios, ScenarioComparison, VALUE_OF_STATISTICAL_LIFE};
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use outcomes::{DailyOutcomes, DayRecord, ScenarioResult, VulnerableResident};
pub use sim::HeatSim;
