//! # Authentication Service Module
//!
//! Account creation and sign-in, plus the bearer-token check used by the other
//! services.
//!
//! ## Sub-modules:
//! - `sign_up`: registers an account from an email, a password and optional names.
//! - `sign_in`: checks credentials and issues a session with an access token.

mod sign_in;
mod sign_up;

use actix_web::http::header;
use actix_web::web::{post, scope};
use actix_web::{HttpRequest, HttpResponse, Scope};
use chrono::Utc;
use common::model::session::User;
use log::{error, warn};
use serde_json::json;

use crate::store::sessions::verify_user_token;
use crate::store::AppState;

/// The base path for all authentication endpoints.
const API_PATH: &str = "/api/auth";

/// Configures and returns the Actix `Scope` for the authentication routes.
///
/// # Registered Routes:
///
/// *   **`POST /signup`**: `sign_up::process`. Expects a `SignUpRequest` JSON body
///     and answers with an `AuthResponse` carrying the new user.
///
/// *   **`POST /signin`**: `sign_in::process`. Expects a `SignInRequest` JSON body
///     and answers with an `AuthResponse` carrying the user and a fresh session.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/signup", post().to(sign_up::process))
        .route("/signin", post().to(sign_in::process))
}

/// Token from an `Authorization: Bearer <token>` header.
pub fn bearer_token(req: &HttpRequest) -> Option<&str> {
    req.headers()
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Resolves the caller from its bearer token.
///
/// The `Err` side is the response to return as is: `401` for a missing,
/// unknown or expired token, `503` when the session store is unreachable.
pub fn authenticate(req: &HttpRequest, state: &AppState) -> Result<User, HttpResponse> {
    let token = bearer_token(req).ok_or_else(|| {
        HttpResponse::Unauthorized().json(json!({ "ok": false, "error": "Missing bearer token" }))
    })?;

    let user = state
        .connect()
        .and_then(|conn| verify_user_token(&conn, token, Utc::now()))
        .map_err(|e| {
            error!("Token verification error: {}", e);
            HttpResponse::ServiceUnavailable().json(json!({ "ok": false, "error": e.to_string() }))
        })?;

    user.ok_or_else(|| {
        warn!("Rejected unknown or expired token");
        HttpResponse::Unauthorized()
            .json(json!({ "ok": false, "error": "Invalid or expired token" }))
    })
}
