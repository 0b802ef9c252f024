//! # RUM Relay Core
//!
//! Core token scheme for the RUM relay. This crate contains the
//! shared-secret token services used to authenticate the two caller
//! classes (access and client), together with their building blocks:
//! random salts, keyed hashing, the token wire codec and the
//! expiration policy.

pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use errors::*;
pub use services::*;
