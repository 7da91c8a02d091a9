use actix_web::{web, HttpResponse, Responder};
use chrono::Utc;
use common::model::session::{Session, User};
use common::requests::{AuthResponse, SignInRequest};
use log::{error, info};

use crate::store::sessions::create_session;
use crate::store::users::verify_credentials;
use crate::store::{AppState, StoreError};

/// Actix web handler for `POST /api/auth/signin`.
///
/// - `200 OK` with the user and a new session.
/// - `401 Unauthorized` with `"Invalid credentials"` when email or password do not match.
/// - `503 Service Unavailable` when the store fails.
pub async fn process(
    payload: web::Json<SignInRequest>,
    state: web::Data<AppState>,
) -> impl Responder {
    match sign_in_user(&state, &payload) {
        Ok(Some((user, session))) => {
            info!("User signed in: {}", user.email);
            HttpResponse::Ok().json(AuthResponse {
                success: true,
                user: Some(user),
                session: Some(session),
                message: None,
                error: None,
            })
        }
        Ok(None) => HttpResponse::Unauthorized().json(AuthResponse::failure("Invalid credentials")),
        Err(e) => {
            error!("Sign in error: {}", e);
            HttpResponse::ServiceUnavailable().json(AuthResponse::failure(e.to_string()))
        }
    }
}

fn sign_in_user(
    state: &AppState,
    payload: &SignInRequest,
) -> Result<Option<(User, Session)>, StoreError> {
    let conn = state.connect()?;
    let Some(user) = verify_credentials(&conn, &payload.email, &payload.password)? else {
        return Ok(None);
    };
    let session = create_session(&conn, &user.id, state.session_ttl_secs, Utc::now())?;
    Ok(Some((user, session)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::testing::temp_state;
    use crate::store::users::create_user;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use common::model::session::UserMetadata;
    use serde_json::json;

    #[actix_web::test]
    async fn sign_in_issues_a_session_for_valid_credentials() {
        let dir = tempfile::tempdir().unwrap();
        let state = temp_state(&dir);
        let user = create_user(
            &state.connect().unwrap(),
            "buyer@example.com",
            "s3cret",
            UserMetadata::default(),
        )
        .unwrap();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(crate::services::auth::configure_routes()),
        )
        .await;

        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/auth/signin")
                .set_json(json!({ "email": "buyer@example.com", "password": "s3cret" }))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: AuthResponse = test::read_body_json(resp).await;
        let session = body.session.unwrap();
        assert_eq!(session.user_id, user.id);
        assert_eq!(session.expires_in, 3600);
        assert!(!session.access_token.is_empty());
    }

    #[actix_web::test]
    async fn wrong_password_is_unauthorized() {
        let dir = tempfile::tempdir().unwrap();
        let state = temp_state(&dir);
        create_user(
            &state.connect().unwrap(),
            "buyer@example.com",
            "s3cret",
            UserMetadata::default(),
        )
        .unwrap();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(crate::services::auth::configure_routes()),
        )
        .await;

        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/auth/signin")
                .set_json(json!({ "email": "buyer@example.com", "password": "guess" }))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body: AuthResponse = test::read_body_json(resp).await;
        assert_eq!(body.error.as_deref(), Some("Invalid credentials"));
    }
}
