//! Calls to the Procuroid backend.
//!
//! Every function takes what it needs explicitly (no ambient session lookup) and
//! returns an [`ApiError`] for transport failures, non-2xx answers and bodies
//! that do not decode.

use common::model::session::{Session, User};
use common::requests::{
    AuthResponse, QuoteReceipt, QuoteRecord, QuoteRequest, SignInRequest, SignUpRequest,
};
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use thiserror::Error;
use web_sys::RequestCredentials;

/// Backend API root. The backend serves the frontend, so requests stay same-origin.
pub const API_BASE: &str = "/api";

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("server answered {status}: {message}")]
    Status { status: u16, message: String },
    #[error("unexpected response: {0}")]
    Decode(String),
    /// The backend understood the request and refused it (e.g. bad credentials).
    #[error("{0}")]
    Rejected(String),
}

pub fn quote_request_url(user_id: &str) -> String {
    format!(
        "{}/send-quote-request/{}",
        API_BASE,
        urlencoding::encode(user_id)
    )
}

pub fn quote_history_url(user_id: &str) -> String {
    format!("{}/quote-requests/{}", API_BASE, urlencoding::encode(user_id))
}

/// Extracts a readable message from an error body: the `error` member of a
/// JSON object when there is one, the raw text otherwise.
pub fn error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| value.get("error")?.as_str().map(str::to_string))
        .unwrap_or_else(|| body.trim().to_string())
}

async fn status_error(response: Response) -> ApiError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    ApiError::Status {
        status,
        message: error_message(&body),
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        return Err(status_error(response).await);
    }
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Sends an order to `POST /api/send-quote-request/{user_id}` with the bearer token.
pub async fn send_quote_request(
    user_id: &str,
    access_token: &str,
    payload: &QuoteRequest,
) -> Result<QuoteReceipt, ApiError> {
    let response = Request::post(&quote_request_url(user_id))
        .header("Authorization", &format!("Bearer {}", access_token))
        .credentials(RequestCredentials::Include)
        .json(payload)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode(response).await
}

/// Quote requests previously sent by the session's user.
pub async fn list_quote_requests(session: &Session) -> Result<Vec<QuoteRecord>, ApiError> {
    let response = Request::get(&quote_history_url(&session.user_id))
        .header("Authorization", &session.bearer())
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode(response).await
}

async fn post_auth<T: serde::Serialize>(path: &str, body: &T) -> Result<AuthResponse, ApiError> {
    let response = Request::post(&format!("{}/auth/{}", API_BASE, path))
        .json(body)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    let status = response.status();
    let ok = response.ok();
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    match serde_json::from_str::<AuthResponse>(&body) {
        Ok(auth) if auth.success => Ok(auth),
        Ok(auth) => Err(ApiError::Rejected(
            auth.error
                .unwrap_or_else(|| "Authentication failed".to_string()),
        )),
        Err(_) if !ok => Err(ApiError::Status {
            status,
            message: error_message(&body),
        }),
        Err(e) => Err(ApiError::Decode(e.to_string())),
    }
}

/// Creates an account. The returned response carries the user and a message.
pub async fn sign_up(request: &SignUpRequest) -> Result<AuthResponse, ApiError> {
    post_auth("signup", request).await
}

/// Signs in and returns the user with a fresh session.
pub async fn sign_in(request: &SignInRequest) -> Result<(User, Session), ApiError> {
    let auth = post_auth("signin", request).await?;
    match (auth.user, auth.session) {
        (Some(user), Some(session)) => Ok((user, session)),
        _ => Err(ApiError::Decode(
            "sign-in response without user or session".to_string(),
        )),
    }
}
