//! Error bodies returned by the auth API.

use serde::{Deserialize, Serialize};

/// Error body returned by the auth API on a non-2xx response.
///
/// The gateway reports failures in `msg`; some endpoints of the user service
/// use `message` instead.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiErrorBody {
    /// Primary error message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub msg: Option<String>,

    /// Secondary error message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ApiErrorBody {
    /// Creates a body carrying only `msg`.
    #[must_use]
    pub fn new(msg: impl Into<String>) -> Self {
        Self {
            msg: Some(msg.into()),
            message: None,
        }
    }

    /// The message to show to a user, preferring `msg` over `message`.
    ///
    /// Blank strings count as missing.
    #[must_use]
    pub fn user_message(&self) -> Option<&str> {
        [self.msg.as_deref(), self.message.as_deref()]
            .into_iter()
            .flatten()
            .find(|text| !text.trim().is_empty())
    }
}

impl std::fmt::Display for ApiErrorBody {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.user_message().unwrap_or("no message"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_prefers_msg() {
        let body = ApiErrorBody {
            msg: Some("Wrong password".to_string()),
            message: Some("Unauthorized".to_string()),
        };
        assert_eq!(body.user_message(), Some("Wrong password"));
    }

    #[test]
    fn test_user_message_falls_back_to_message() {
        let body: ApiErrorBody =
            serde_json::from_str(r#"{"message":"Username already taken"}"#).unwrap();
        assert_eq!(body.user_message(), Some("Username already taken"));
    }

    #[test]
    fn test_blank_msg_is_ignored() {
        let body = ApiErrorBody {
            msg: Some("   ".to_string()),
            message: None,
        };
        assert_eq!(body.user_message(), None);
        assert_eq!(body.to_string(), "no message");
    }

    #[test]
    fn test_unknown_fields_are_tolerated() {
        let body: ApiErrorBody =
            serde_json::from_str(r#"{"msg":"Bad request","status":400}"#).unwrap();
        assert_eq!(body, ApiErrorBody::new("Bad request"));
    }
}
