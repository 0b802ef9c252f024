//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for the RUM relay. It
//! provides concrete implementations for the external collaborators the
//! token core deliberately knows nothing about.
//!
//! ## Architecture
//!
//! The infrastructure layer contains:
//! - **Metrics**: downstream metrics ingestion backends (AWS CloudWatch,
//!   plus a mock for development and tests)
//! - **Relay**: the loopback HTTP client used by the smoke-test route
//!
//! ## Features
//!
//! - `aws-cloudwatch`: Enable the AWS CloudWatch backend (default)

// Re-export core error types for convenience
pub use rr_core::errors::*;

/// Metrics module - downstream ingestion backends
pub mod metrics;

/// Relay module - loopback HTTP client
pub mod relay;

use thiserror::Error;

/// Infrastructure layer errors
#[derive(Error, Debug)]
pub enum InfrastructureError {
    /// HTTP request error for external services
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Metrics backend error
    #[error("Metrics backend error: {0}")]
    Metrics(String),

    /// General infrastructure error
    #[error("Infrastructure error: {0}")]
    General(String),
}

impl From<InfrastructureError> for DomainError {
    fn from(err: InfrastructureError) -> Self {
        DomainError::Internal {
            message: err.to_string(),
        }
    }
}
