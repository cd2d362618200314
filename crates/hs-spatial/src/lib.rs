//! `hs-spatial` — spatial indexing of residents.
//!
//! # Crate layout
//!
//! | Module    | Contents                                                  |
//! |-----------|-----------------------------------------------------------|
//! | [`index`] | `ResidentIndex` (R-tree), radius queries                  |
//! | [`error`] | `SpatialError`, `SpatialResult<T>`                        |
//!
//! The index holds a positional copy (`ResidentId` + `[lat, lon]`) of the
//! population; it never owns or mutates residents.  It is rebuilt, not
//! updated, whenever the population changes.

pub mod error;
pub mod index;


pub use error::{SpatialError, SpatialResult};
pub use index::ResidentIndex;
