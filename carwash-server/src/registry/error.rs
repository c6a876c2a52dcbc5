//! Registry error type
//!
//! Domain-level failures, free of HTTP concerns. The API layer converts
//! these into [`crate::AppError`] responses.

use thiserror::Error;
use uuid::Uuid;

/// Registry operation errors
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// No car with this id in the registry
    #[error("car {0} not found")]
    NotFound(Uuid),

    /// Requested move is not in the transition table, or the caller's role
    /// is not allowed to request it. Both cases fail identically.
    #[error("invalid transition: {0}")]
    InvalidTransition(String),

    /// Payment amount is not a positive number
    #[error("invalid amount: {0}")]
    InvalidAmount(String),
}

pub type RegistryResult<T> = Result<T, RegistryError>;
