//! Spatial-subsystem error type.

use thiserror::Error;

use hs_core::GeoPoint;

/// Errors produced by `hs-spatial`.
#[derive(Debug, Error)]
pub enum SpatialError {
    #[error("query radius {0} is not a finite non-negative number")]
    InvalidRadius(f64),

    #[error("query center {0} is not a valid coordinate")]
    InvalidCenter(GeoPoint),
}

pub type SpatialResult<T> = Result<T, SpatialError>;
