use crate::environment::errors::EnvironmentError;
use crate::policies::errors::PolicyError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PolicyOrEnvironmentError {
    #[error(transparent)]
    Policy(#[from] PolicyError),
    #[error(transparent)]
    Environment(#[from] EnvironmentError),
}
