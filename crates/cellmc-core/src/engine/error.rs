use crate::core::energy::model::EnergyError;
use crate::core::models::system::ModelError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Energy evaluation failed: {source}")]
    Energy {
        #[from]
        source: EnergyError,
    },

    #[error("System model error: {source}")]
    Model {
        #[from]
        source: ModelError,
    },
}
