//! Business services containing domain logic.

pub mod token;

// Re-export commonly used types
pub use token::{
    MaxAge, TokenConfig, TokenPayload, TokenService, ACCESS_SALT_BYTES, CLIENT_SALT_BYTES,
};
