//! Sign-in, sign-up and token validation bodies.

use serde::{Deserialize, Serialize};

/// Credentials posted to `/api/auth/signin`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SigninRequest {
    /// Username or email address.
    pub username: String,

    /// Plain-text password.
    pub password: String,
}

/// Registration details posted to `/api/auth/signup`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SignupRequest {
    /// The user's display name.
    pub fullname: String,

    /// The desired username.
    pub username: String,

    /// Plain-text password.
    pub password: String,

    /// Contact email address.
    pub email: String,
}

/// Successful response body of the sign-in and sign-up endpoints.
///
/// The service omits `access_token` when it accepted the request but did not
/// open a session, so both fields are optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthResponse {
    /// Session token to persist client-side.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,

    /// Informational message from the service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl AuthResponse {
    /// Returns the access token when the service issued a non-empty one.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.access_token.as_deref().filter(|token| !token.is_empty())
    }
}

/// Body of `/api/auth/validate-token`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenValidationResponse {
    /// "Valid token" or the reason validation failed.
    #[serde(default)]
    pub message: String,
}
