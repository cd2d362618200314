//! `hs-agent` — synthetic residents for the urban heat simulator.
//!
//! # Crate layout
//!
//! | Module            | Contents                                                  |
//! |-------------------|-----------------------------------------------------------|
//! | [`vulnerability`] | `vulnerability_score`, `RiskTier`, `TierBreakdown`,       |
//! |                   | `PopulationSummary`                                       |
//! | [`effects`]       | `Effect`, `EffectFlags` (per-resident intervention flags) |
//! | [`resident`]      | `Resident`, `Attributes`, `HealthStatus`, daily update    |
//! | [`store`]         | `ResidentStore`, `ResidentRngs`                           |
//! | [`population`]    | `PopulationGenerator` (seeded synthetic population)       |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on all public types.     |

pub mod effects;
pub mod population;
pub mod resident;
pub mod store;
pub mod vulnerability;


pub use effects::{Effect, EffectFlags};
pub use population::PopulationGenerator;
pub use resident::{Attributes, HealthStatus, Resident};
pub use store::{ResidentRngs, ResidentStore};
pub use vulnerability::{vulnerability_score, PopulationSummary, RiskTier, TierBreakdown};
