//! Data models shared between the web client and the auth API.

pub mod auth;
pub mod errors;

pub use auth::{AuthResponse, SigninRequest, SignupRequest, TokenValidationResponse};
pub use errors::ApiErrorBody;
