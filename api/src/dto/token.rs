//! Token issuance DTOs

use serde::{Deserialize, Serialize};

/// Response returned when a client mints a fresh access token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueTokenResponse {
    /// Opaque access token for the create-entry endpoint
    pub access_token: String,

    /// Seconds until the token expires
    pub expires_in: i64,
}
