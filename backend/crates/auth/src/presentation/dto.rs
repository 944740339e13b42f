//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

/// Register / login request
///
/// Fields are optional so a missing field surfaces as a validation error
/// rather than a deserialization failure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialsRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

impl CredentialsRequest {
    /// Both fields present and non-blank
    pub fn into_fields(self) -> Option<(String, String)> {
        match (self.username, self.password) {
            (Some(u), Some(p)) if !u.trim().is_empty() && !p.trim().is_empty() => Some((u, p)),
            _ => None,
        }
    }
}

/// Register / login response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    pub token: String,
}
