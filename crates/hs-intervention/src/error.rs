//! Intervention error type.

use thiserror::Error;

use hs_spatial::SpatialError;

/// Why an intervention was rejected, or why mapping failed.
#[derive(Debug, Error)]
pub enum InterventionError {
    #[error("unknown intervention type `{0}`")]
    UnknownType(String),

    #[error("implementation cost must be positive (got {0})")]
    NonPositiveCost(f64),

    #[error("timeline must be at least one month")]
    ZeroTimeline,

    #[error("target latitude {0} outside [-90, 90]")]
    InvalidLatitude(f64),

    #[error("target longitude {0} outside [-180, 180]")]
    InvalidLongitude(f64),

    #[error("target radius {0} km outside (0, 50]")]
    InvalidRadius(f64),

    #[error("target area has `{present}` but no `{missing}`")]
    MissingCoordinate {
        present: &'static str,
        missing: &'static str,
    },

    #[error("intervention `{name}` rejected: {source}")]
    Rejected {
        name:   String,
        #[source]
        source: Box<InterventionError>,
    },

    #[error("spatial query failed: {0}")]
    Spatial(#[from] SpatialError),
}

pub type InterventionResult<T> = Result<T, InterventionError>;
