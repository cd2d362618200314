use hs_core::HsError;
use hs_intervention::InterventionError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("population has not been generated; call generate_population first")]
    PopulationNotGenerated,

    #[error(transparent)]
    Core(#[from] HsError),

    #[error("intervention error: {0}")]
    Intervention(#[from] InterventionError),
}

pub type SimResult<T> = Result<T, SimError>;
