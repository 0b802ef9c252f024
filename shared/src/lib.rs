//! Shared utilities and common types for the RUM relay
//!
//! This crate provides common functionality used across all relay crates:
//! - Configuration types loaded from the environment
//! - Error response structures
//! - API response wrappers

pub mod config;
pub mod errors;
pub mod types;

// Re-export commonly used items at crate root
pub use config::{AppConfig, AuthConfig, ConfigError, Environment, MetricsConfig, ServerConfig};
pub use errors::{error_codes, ErrorResponse};
pub use types::ApiResponse;
