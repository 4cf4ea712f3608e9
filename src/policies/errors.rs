use thiserror::Error;

#[derive(Debug, Error)]
pub enum PolicyError {
    #[error("Invalid epsilon {0}, must be in [0, 1]")]
    InvalidEpsilon(f64),
    #[error("Invalid arm count {0}, must be positive")]
    InvalidArmCount(usize),
    #[error("No arms to draw from")]
    NoArmsAvailable,
    #[error("Arm {0} not found")]
    ArmNotFound(usize),
}
