use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SumError {
    #[error("expected 0 or 3 positional arguments, got {given}")]
    Usage { given: usize },

    #[error("invalid integer argument '{token}'")]
    InvalidInteger { token: String },

    #[error("divisor {name} must be non-zero")]
    ZeroDivisor { name: &'static str },

    #[error("bound {z} needs {steps} steps for the slow method (limit {limit})")]
    BoundTooLarge { z: u64, steps: u64, limit: u64 },

    #[error("arithmetic overflow while summing multiples")]
    Overflow,
}

pub type Result<T> = std::result::Result<T, SumError>;
