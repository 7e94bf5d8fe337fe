//! Login and registration forms.

use api::{ApiError, ApiResult, Credentials, FieldErrors, LoginRequest, RegisterRequest};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    pub error: Option<String>,
}

impl LoginForm {
    pub fn request(&self) -> LoginRequest {
        LoginRequest {
            username: self.username.clone(),
            password: self.password.clone(),
        }
    }

    /// Credentials to install on success; the error is kept otherwise.
    pub fn apply(&mut self, result: ApiResult<Credentials>) -> Option<Credentials> {
        match result {
            Ok(credentials) => {
                self.error = None;
                Some(credentials)
            }
            Err(e) => {
                self.error = Some(e.to_string());
                None
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegisterForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirmation: String,
    pub errors: FieldErrors,
}

impl RegisterForm {
    pub fn request(&self) -> RegisterRequest {
        RegisterRequest {
            username: self.username.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            confirmation: self.confirmation.clone(),
        }
    }

    pub fn apply(&mut self, result: ApiResult<Credentials>) -> Option<Credentials> {
        match result {
            Ok(credentials) => {
                self.errors = FieldErrors::new();
                Some(credentials)
            }
            Err(ApiError::Fields(errors)) => {
                self.errors = errors;
                None
            }
            Err(e) => {
                self.errors = FieldErrors::non_field(e.to_string());
                None
            }
        }
    }

    /// First message for `field`.
    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.first(field)
    }

    /// Errors not tied to a field, shown above the password input.
    pub fn non_field_error(&self) -> Option<&str> {
        self.errors.first(FieldErrors::NON_FIELD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::{MemoryBackend, NetworkApi};

    #[tokio::test]
    async fn test_login_error_then_success() {
        let backend = MemoryBackend::new();
        backend.add_user("alice", "alice@example.com", "pw");

        let mut form = LoginForm {
            username: "alice".to_string(),
            password: "nope".to_string(),
            error: None,
        };
        assert!(form.apply(backend.login(&form.request()).await).is_none());
        assert_eq!(form.error.as_deref(), Some("Invalid username and/or password."));

        form.password = "pw".to_string();
        let credentials = form.apply(backend.login(&form.request()).await);
        assert_eq!(credentials, Some(Credentials::user("alice")));
        assert!(form.error.is_none());
    }

    #[tokio::test]
    async fn test_register_field_errors() {
        let backend = MemoryBackend::new();
        backend.add_user("alice", "alice@example.com", "pw");

        let mut form = RegisterForm {
            username: "alice".to_string(),
            email: "bob@example.com".to_string(),
            password: "a".to_string(),
            confirmation: "b".to_string(),
            ..RegisterForm::default()
        };
        assert!(form.apply(backend.register(&form.request()).await).is_none());
        assert_eq!(form.error("username"), Some("Username alice already taken."));
        assert_eq!(form.error("email"), None);
        assert_eq!(form.non_field_error(), Some("Passwords must match."));

        form.username = "bob".to_string();
        form.confirmation = "a".to_string();
        let credentials = form.apply(backend.register(&form.request()).await);
        assert_eq!(credentials, Some(Credentials::user("bob")));
        assert!(form.errors.is_empty());
    }

    #[test]
    fn test_single_message_lands_in_non_field_bucket() {
        let mut form = RegisterForm::default();
        form.apply(Err(ApiError::message("POST request required.")));
        assert_eq!(form.non_field_error(), Some("POST request required."));
    }
}
