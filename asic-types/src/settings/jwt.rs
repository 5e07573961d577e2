//! JWT token lifetimes and rotation policy.

use chrono::TimeDelta;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JwtSettings {
    #[serde(serialize_with = "super::as_secs::delta")]
    pub access_token_lifetime: TimeDelta,
    #[serde(serialize_with = "super::as_secs::delta")]
    pub refresh_token_lifetime: TimeDelta,
    /// Issue a new refresh token whenever one is used.
    pub rotate_refresh_tokens: bool,
    /// Blacklist the old refresh token after rotation.
    pub blacklist_after_rotation: bool,
    /// Signing algorithm; tokens are signed with the secret key.
    pub algorithm: String,
}

impl Default for JwtSettings {
    fn default() -> Self {
        Self {
            access_token_lifetime: TimeDelta::days(1),
            refresh_token_lifetime: TimeDelta::days(7),
            rotate_refresh_tokens: true,
            blacklist_after_rotation: true,
            algorithm: "HS256".to_string(),
        }
    }
}
