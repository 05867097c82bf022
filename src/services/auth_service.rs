use gloo_net::http::Request;
use serde::Serialize;
use thiserror::Error;

use crate::models::{ErrorBody, LoginRequest, LoginResponse, RegisterRequest, TokenData};
use crate::utils::{api_url, FALLBACK_ERROR_MESSAGE, LOGIN_PATH, REGISTER_PATH};

/// The only failure kind of the auth screen: the request failed.
///
/// Network errors, non-2xx statuses, unexpected bodies and storage errors all
/// end up here. The server message, when present, is what the user sees.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("request failed (status {status:?}): {}", .message.as_deref().unwrap_or("<no message>"))]
pub struct AuthError {
    pub status: Option<u16>,
    pub message: Option<String>,
}

impl AuthError {
    /// No response reached us.
    pub fn network(detail: impl std::fmt::Display) -> Self {
        log::error!("❌ Network error: {}", detail);
        Self { status: None, message: None }
    }

    /// Non-2xx response, with whatever `message` the body carried.
    pub fn rejected(status: u16, message: Option<String>) -> Self {
        Self { status: Some(status), message }
    }

    /// 2xx response we could not use, or a local failure after it.
    pub fn unexpected(detail: impl std::fmt::Display) -> Self {
        log::error!("❌ Unexpected auth failure: {}", detail);
        Self { status: None, message: None }
    }
}

/// Text shown in the dialog for a failed request: the server message, or the
/// generic fallback when it is missing or empty. Both submit paths use this.
pub fn user_message(error: &AuthError) -> String {
    error
        .message
        .as_deref()
        .filter(|m| !m.is_empty())
        .unwrap_or(FALLBACK_ERROR_MESSAGE)
        .to_string()
}

/// Error for a non-2xx response. A body that is not JSON, or has no
/// `message`, carries no message.
pub fn rejection(status: u16, body: &str) -> AuthError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|body| body.message);
    AuthError::rejected(status, message)
}

/// Token out of a 2xx login body. Missing `data.token` is a failure.
pub fn login_token(body: &str) -> Result<TokenData, AuthError> {
    serde_json::from_str::<LoginResponse>(body)
        .map(|response| response.data)
        .map_err(AuthError::unexpected)
}

/// Auth endpoints consumed by the screen.
#[allow(async_fn_in_trait)]
pub trait AuthApi {
    async fn login(&self, request: &LoginRequest) -> Result<TokenData, AuthError>;
    async fn register(&self, request: &RegisterRequest) -> Result<(), AuthError>;
}

/// HTTP client for the auth API - SOLO comunicación HTTP (stateless)
#[derive(Clone, PartialEq)]
pub struct HttpAuthApi {
    base_url: String,
}

impl HttpAuthApi {
    pub fn new() -> Self {
        Self::with_base_url(api_url())
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Body of a 2xx response, or the rejection for anything else.
    async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<String, AuthError> {
        let url = self.endpoint(path);
        let response = Request::post(&url)
            .json(body)
            .map_err(AuthError::unexpected)?
            .send()
            .await
            .map_err(AuthError::network)?;

        if response.ok() {
            return response.text().await.map_err(AuthError::unexpected);
        }

        let status = response.status();
        let text = response.text().await.unwrap_or_default();
        let error = rejection(status, &text);
        log::warn!("⚠️ POST {} -> HTTP {} ({:?})", path, status, error.message);
        Err(error)
    }
}

impl Default for HttpAuthApi {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthApi for HttpAuthApi {
    async fn login(&self, request: &LoginRequest) -> Result<TokenData, AuthError> {
        log::info!("🔐 Login para usuario: {}", request.username);
        let body = self.post(LOGIN_PATH, request).await?;
        login_token(&body)
    }

    async fn register(&self, request: &RegisterRequest) -> Result<(), AuthError> {
        log::info!("📝 Registro de usuario: {}", request.username);
        // El cuerpo de éxito se ignora
        self.post(REGISTER_PATH, request).await?;
        Ok(())
    }
}
