//! `hs-output` — scenario output writers for the urban heat simulator.
//!
//! | Feature   | Backend | Files created                                        |
//! |-----------|---------|------------------------------------------------------|
//! | *(none)*  | CSV     | `daily_outcomes.csv`, `vulnerable_residents.csv`     |
//! | `sqlite`  | SQLite  | `output.db`                                          |
//!
//! All backends implement [`OutputWriter`].  [`ScenarioOutputObserver`]
//! implements `hs_sim::SimObserver` and writes one row per simulated day.
//!
//! # Usage
//!
//! ```rust,ignore
//! use hs_output::{CsvWriter, OutputWriter, ScenarioOutputObserver};
//!
//! let mut writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = ScenarioOutputObserver::new(&mut writer, "baseline");
//! sim.run_scenario_with(90, None, &InterventionSet::none(), &mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::ScenarioOutputObserver;
pub use row::{DailyOutcomeRow, VulnerableRow};
pub use writer::OutputWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;
