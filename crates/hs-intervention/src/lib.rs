//! `hs-intervention` — proposed heat-mitigation actions and their footprint.
//!
//! # Crate layout
//!
//! | Module           | Contents                                                   |
//! |------------------|------------------------------------------------------------|
//! | [`intervention`] | `Intervention`, `InterventionType`, `TargetArea`, checks   |
//! | [`catalog`]      | `CatalogEntry` — planning metadata per intervention type   |
//! | [`set`]          | `InterventionSet` — only validated interventions get in    |
//! | [`mapper`]       | `map_interventions` → `EffectMap` (resident → flags)       |
//! | [`error`]        | `InterventionError`, `InterventionResult<T>`               |
//!
//! # Validation flow
//!
//! ```text
//! Intervention ──check()──▶ InterventionSet ──map_interventions(index)──▶ EffectMap
//! ```
//!
//! The mapper and the engine accept only an `InterventionSet`, so an invalid
//! intervention cannot reach them.
//!
//! # Feature flags
//!
//! | Flag      | Effect                                                    |
//! |-----------|-----------------------------------------------------------|
//! | `fx-hash` | FxHash instead of SipHash for `EffectMap`.                |
//! | `serde`   | Derives `Serialize`/`Deserialize` on public types.        |

pub mod catalog;
pub mod error;
pub mod intervention;
pub mod mapper;
pub mod set;


pub use catalog::CatalogEntry;
pub use error::{InterventionError, InterventionResult};
pub use intervention::{Intervention, InterventionType, TargetArea};
pub use mapper::{map_interventions, EffectMap};
pub use set::InterventionSet;
