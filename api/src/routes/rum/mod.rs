//! RUM relay route handlers
//!
//! This module contains the relay's metric endpoints:
//! - Recording a metric batch downstream (create-entry)
//! - Minting an access token for a client (token)
//! - The loopback smoke test (test)

pub mod create_entry;
pub mod test;
pub mod token;

pub use create_entry::AppState;
