//! Session credentials and the login/register request bodies.

use serde::{Deserialize, Serialize};

/// The viewer's identity as reported by `/api/authentication`, `/api/login`,
/// `/api/register` and `/api/logout`.
///
/// Always replaced wholesale; never patched field by field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    #[serde(default)]
    pub logged_in: bool,
    #[serde(default)]
    pub username: Option<String>,
}

impl Credentials {
    /// Credentials of a viewer without a session.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Credentials of an authenticated viewer.
    pub fn user(username: impl Into<String>) -> Self {
        Self {
            logged_in: true,
            username: Some(username.into()),
        }
    }

    /// Whether the viewer is authenticated as `username`.
    pub fn is(&self, username: &str) -> bool {
        self.logged_in && self.username.as_deref() == Some(username)
    }
}

/// Body of `POST /api/login`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Body of `POST /api/register`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirmation: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anonymous_payload_has_null_username() {
        let creds: Credentials =
            serde_json::from_str(r#"{"logged_in": false, "username": null}"#).unwrap();
        assert_eq!(creds, Credentials::anonymous());
        assert!(!creds.is("anyone"));
    }

    #[test]
    fn test_is_requires_login() {
        let creds = Credentials {
            logged_in: false,
            username: Some("alice".to_string()),
        };
        assert!(!creds.is("alice"));
        assert!(Credentials::user("alice").is("alice"));
        assert!(!Credentials::user("alice").is("bob"));
    }
}
