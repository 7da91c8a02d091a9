use actix_web::{web, HttpRequest, HttpResponse};
use log::error;
use serde_json::json;

use super::authorize;
use crate::store::quotes::quote_requests_for_user;
use crate::store::AppState;

/// `GET /api/quote-requests/{user_id}`: the caller's stored quote requests.
pub async fn process(
    req: HttpRequest,
    user_id: web::Path<String>,
    state: web::Data<AppState>,
) -> HttpResponse {
    let user_id = user_id.into_inner();
    if let Err(response) = authorize(&req, &state, &user_id) {
        return response;
    }

    match state
        .connect()
        .and_then(|conn| quote_requests_for_user(&conn, &user_id))
    {
        Ok(records) => HttpResponse::Ok().json(records),
        Err(e) => {
            error!("Failed to read quote requests for {}: {}", user_id, e);
            HttpResponse::ServiceUnavailable().json(json!({ "ok": false, "error": e.to_string() }))
        }
    }
}
