//! Domain-specific error types and error handling.

mod types;

// Re-export all error types
pub use types::TokenError;

use rr_shared::errors::error_codes;
use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Unauthorized access")]
    Unauthorized,

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Token(#[from] TokenError),
}

impl DomainError {
    /// Stable error code for API responses.
    ///
    /// Token failures map to the generic unauthorized code; the HTTP
    /// surface never reveals which validation stage rejected a token.
    pub fn error_code(&self) -> &'static str {
        match self {
            DomainError::Validation { .. } => error_codes::VALIDATION_ERROR,
            DomainError::Unauthorized | DomainError::Token(_) => error_codes::UNAUTHORIZED,
            DomainError::Internal { .. } => error_codes::INTERNAL_ERROR,
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_errors_map_to_unauthorized() {
        let err = DomainError::from(TokenError::SignatureMismatch);
        assert_eq!(err.error_code(), error_codes::UNAUTHORIZED);

        let err = DomainError::from(TokenError::TokenExpired);
        assert_eq!(err.error_code(), error_codes::UNAUTHORIZED);
    }

    #[test]
    fn test_error_codes() {
        let err = DomainError::Validation {
            message: "bad".to_string(),
        };
        assert_eq!(err.error_code(), error_codes::VALIDATION_ERROR);

        let err = DomainError::Internal {
            message: "boom".to_string(),
        };
        assert_eq!(err.error_code(), error_codes::INTERNAL_ERROR);
    }
}
