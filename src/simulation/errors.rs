use crate::environment::errors::EnvironmentError;
use crate::errors::PolicyOrEnvironmentError;
use crate::policies::errors::PolicyError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("Invalid round count {0}, must be positive")]
    InvalidRoundCount(u64),
    #[error("No agents to run, the epsilon list is empty")]
    NoAgents,
    #[error(transparent)]
    Policy(#[from] PolicyError),
    #[error(transparent)]
    Environment(#[from] EnvironmentError),
    #[error(transparent)]
    Step(#[from] PolicyOrEnvironmentError),
    #[error("Failed to serialize report to JSON: {0}")]
    Serialization(#[from] serde_json::Error),
}
