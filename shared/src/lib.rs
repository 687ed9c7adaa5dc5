use serde::{Deserialize, Serialize};

pub mod modal;
pub mod navigation;
pub mod reset_password;
pub mod store;
pub mod validation;

pub use modal::{dismiss_action, DismissTrigger, ModalError, ModalKind, ModalState, ResetPasswordProps};
pub use navigation::{NavClasses, NavItem, NavVariant, NAV_ITEMS};
pub use reset_password::{submit_reset_password, PasswordResetService, SubmitOutcome};
pub use store::{
    Action, Language, Notice, NoticeLevel, PersistError, PersistedState, Preferences, RootState,
    PERSIST_KEY, PERSIST_VERSION,
};
pub use validation::{validate_email, EmailError};

/// Values of the single-field email form used by the reset-password modal
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginForm {
    pub email: String,
}

impl LoginForm {
    pub fn new(email: impl Into<String>) -> Self {
        Self { email: email.into() }
    }

    /// Clear every field back to its initial value
    pub fn reset(&mut self) {
        self.email.clear();
    }
}

/// Body of `POST /authorize/login/resetPassword`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResetPasswordRequest {
    pub values: LoginForm,
}

/// Error body the server returns for any non-2xx response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: u16,
    pub message: String,
    /// Per-field messages, only present when request validation failed
    #[serde(default, alias = "errors", skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<String>,
}

impl ErrorResponse {
    /// Message suitable for showing to the user
    pub fn user_message(&self) -> String {
        if self.details.is_empty() {
            self.message.clone()
        } else {
            self.details.join("; ")
        }
    }
}

/// Failures talking to the backend
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Server error {status}: {message}")]
    Server { status: u16, message: String },
    #[error("Failed to serialize request: {0}")]
    Serialization(String),
}

impl ApiError {
    /// Build a server error from a non-2xx status and its raw body.
    ///
    /// Bodies in the `ErrorResponse` shape contribute their message; anything
    /// else is kept verbatim so nothing the server said gets lost.
    pub fn from_error_body(status: u16, body: &str) -> Self {
        let message = match serde_json::from_str::<ErrorResponse>(body) {
            Ok(error) => error.user_message(),
            Err(_) if body.trim().is_empty() => "Unknown error".to_string(),
            Err(_) => body.trim().to_string(),
        };
        ApiError::Server { status, message }
    }

    pub fn user_message(&self) -> String {
        match self {
            ApiError::Network(_) => {
                "We couldn't reach the server. Check your connection and try again.".to_string()
            }
            ApiError::Server { message, .. } => message.clone(),
            ApiError::Serialization(_) => "Something went wrong preparing your request.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_password_request_wire_shape() {
        let request = ResetPasswordRequest {
            values: LoginForm::new("user@example.com"),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json, serde_json::json!({ "values": { "email": "user@example.com" } }));
    }

    #[test]
    fn test_login_form_reset() {
        let mut form = LoginForm::new("user@example.com");
        form.reset();
        assert_eq!(form, LoginForm::default());
    }

    #[test]
    fn test_error_from_error_response_body() {
        let body = r#"{"status":404,"message":"User with email <a@b.c> not found."}"#;
        let error = ApiError::from_error_body(404, body);
        assert_eq!(
            error,
            ApiError::Server {
                status: 404,
                message: "User with email <a@b.c> not found.".to_string()
            }
        );
    }

    #[test]
    fn test_error_prefers_validation_details() {
        let body = r#"{"status":400,"message":"Validation failed","errors":["Email is invalid"]}"#;
        let error = ApiError::from_error_body(400, body);
        assert_eq!(error.user_message(), "Email is invalid");
    }

    #[test]
    fn test_error_from_unstructured_body() {
        assert_eq!(
            ApiError::from_error_body(502, "Bad Gateway\n").user_message(),
            "Bad Gateway"
        );
        assert_eq!(ApiError::from_error_body(500, "  ").user_message(), "Unknown error");
    }

    #[test]
    fn test_network_error_message_hides_details() {
        let error = ApiError::Network("TypeError: Failed to fetch".to_string());
        assert!(!error.user_message().contains("TypeError"));
        assert_eq!(error.to_string(), "Network error: TypeError: Failed to fetch");
    }
}
