use thiserror::Error;

#[derive(Debug, Error)]
pub enum EnvironmentError {
    #[error("Invalid arm count {0}, must be positive")]
    InvalidArmCount(usize),
    #[error("Arm {0} not found")]
    ArmNotFound(usize),
    #[error("Invalid reward distribution: {0}")]
    Distribution(String),
}
