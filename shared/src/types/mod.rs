//! Common types shared across the relay

pub mod response;

pub use response::ApiResponse;
