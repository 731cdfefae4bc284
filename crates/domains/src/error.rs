//! # AppError
//!
//! Centralized error handling for the Encore core.
//! Maps domain-specific failures to actionable error types.

use thiserror::Error;

/// The primary error type for all core operations.
#[derive(Error, Debug)]
pub enum AppError {
    /// Resource not found (e.g., a submission id)
    #[error("{0} not found with ID {1}")]
    NotFound(String, String),

    /// Validation failure (e.g., blank nickname, missing caption)
    #[error("validation error: {0}")]
    ValidationError(String),

    /// Resource already exists (e.g., duplicate submission id)
    #[error("conflict: {0}")]
    Conflict(String),

    /// A collaborator outside the core failed (e.g., caption generation);
    /// retryable from the kiosk UI, nothing partial is persisted.
    #[error("external service error: {0}")]
    ExternalService(String),

    /// Infrastructure failure (e.g., store write failed)
    #[error("internal service error: {0}")]
    Internal(String),
}

/// A specialized Result type for Encore core logic.
pub type Result<T> = std::result::Result<T, AppError>;
