//! `hs-core` — foundational types for the urban heat simulator.
//!
//! This crate is a dependency of every other `hs-*` crate.  It intentionally
//! has no `hs-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `ResidentId`                                          |
//! | [`geo`]         | `GeoPoint`, km ↔ degree conversion                    |
//! | [`time`]        | `Day`, `SimClock`                                     |
//! | [`config`]      | `SimConfig`, `CityBounds`                             |
//! | [`rng`]         | `ResidentRng` (per-resident), `SimRng` (engine-wide)  |
//! | [`error`]       | `HsError`, `HsResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{CityBounds, SimConfig};
pub use error::{HsError, HsResult};
pub use geo::{GeoPoint, KM_PER_DEGREE};
pub use ids::ResidentId;
pub use rng::{ResidentRng, SimRng};
pub use time::{Day, SimClock};
