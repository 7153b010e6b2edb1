// src/error.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeometryError {
    #[error("Insufficient points for operation: expected at least {expected}, got {actual}")]
    InsufficientPoints { expected: usize, actual: usize },

    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("Geometric calculation failed: {operation}")]
    GeometricFailure { operation: String },
}

pub type GeometryResult<T> = Result<T, GeometryError>;
