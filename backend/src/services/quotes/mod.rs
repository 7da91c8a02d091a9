//! # Quote Request Service Module
//!
//! Receives orders placed through the "Place Order" wizard and lets a user read
//! back what they sent. Both routes require `Authorization: Bearer <token>`
//! and only serve the user the token belongs to.
//!
//! ## Registered Routes:
//!
//! *   **`POST /api/send-quote-request/{user_id}`**: `send::process`. Stores the
//!     JSON `QuoteRequest` body as received and answers `201 Created` with a
//!     `QuoteReceipt`.
//!
//! *   **`GET /api/quote-requests/{user_id}`**: `list::process`. Returns the
//!     user's stored `QuoteRecord`s, oldest first.

mod list;
mod send;

use actix_web::web::{self, get, post};
use actix_web::{HttpRequest, HttpResponse};
use common::model::session::User;
use log::warn;
use serde_json::json;

use crate::services::auth::authenticate;
use crate::store::AppState;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/send-quote-request/{user_id}", post().to(send::process))
        .route("/api/quote-requests/{user_id}", get().to(list::process));
}

/// Authenticates the caller and checks it acts on its own `user_id`.
fn authorize(req: &HttpRequest, state: &AppState, user_id: &str) -> Result<User, HttpResponse> {
    let user = authenticate(req, state)?;
    if user.id != user_id {
        warn!("User {} tried to act as {}", user.id, user_id);
        return Err(HttpResponse::Forbidden()
            .json(json!({ "ok": false, "error": "Token does not belong to this user" })));
    }
    Ok(user)
}
