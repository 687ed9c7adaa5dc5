use async_trait::async_trait;
use gloo::net::http::Request;
use shared::{ApiError, PasswordResetService, ResetPasswordRequest};

const DEFAULT_BASE_URL: &str = "http://localhost:8080/api/v1";
const RESET_PASSWORD_PATH: &str = "/authorize/login/resetPassword";

/// API client for communicating with the backend server
#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a client for the base URL baked in via `BOOKTI_API_BASE_URL`,
    /// falling back to a local backend
    pub fn new() -> Self {
        Self::with_base_url(option_env!("BOOKTI_API_BASE_URL").unwrap_or(DEFAULT_BASE_URL))
    }

    /// Create a new API client with a custom base URL
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Ask the backend to email a password reset link.
    ///
    /// Returns the raw response body; non-2xx responses become `ApiError::Server`.
    pub async fn reset_password(&self, request: &ResetPasswordRequest) -> Result<String, ApiError> {
        let url = self.endpoint(RESET_PASSWORD_PATH);

        let response = Request::post(&url)
            .json(request)
            .map_err(|e| ApiError::Serialization(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if response.ok() {
            Ok(body)
        } else {
            Err(ApiError::from_error_body(response.status(), &body))
        }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl PasswordResetService for ApiClient {
    async fn request_password_reset(&self, request: &ResetPasswordRequest) -> Result<String, ApiError> {
        self.reset_password(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_trailing_slash_is_trimmed() {
        let client = ApiClient::with_base_url("https://api.example.com/api/v1/");
        assert_eq!(client.base_url(), "https://api.example.com/api/v1");
    }

    #[wasm_bindgen_test]
    fn test_reset_password_endpoint() {
        let client = ApiClient::with_base_url("https://api.example.com/api/v1");
        assert_eq!(
            client.endpoint(RESET_PASSWORD_PATH),
            "https://api.example.com/api/v1/authorize/login/resetPassword"
        );
    }
}
