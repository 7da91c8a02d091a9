use actix_web::{web, HttpResponse, Responder};
use common::model::session::{User, UserMetadata};
use common::requests::{AuthResponse, SignUpRequest};
use log::{error, info};

use crate::store::users::create_user;
use crate::store::{AppState, StoreError};

/// Actix web handler for `POST /api/auth/signup`.
///
/// - `200 OK` with the created user.
/// - `400 Bad Request` when email or password is blank.
/// - `409 Conflict` when the email is already registered.
/// - `503 Service Unavailable` when the user store fails.
pub async fn process(
    payload: web::Json<SignUpRequest>,
    state: web::Data<AppState>,
) -> impl Responder {
    if payload.email.trim().is_empty() || payload.password.is_empty() {
        return HttpResponse::BadRequest()
            .json(AuthResponse::failure("Email and password are required"));
    }

    match sign_up_user(&state, &payload) {
        Ok(user) => {
            info!("User signed up: {}", user.email);
            HttpResponse::Ok().json(AuthResponse {
                success: true,
                user: Some(user),
                session: None,
                message: Some("User created successfully.".to_string()),
                error: None,
            })
        }
        Err(e @ StoreError::DuplicateEmail(_)) => {
            HttpResponse::Conflict().json(AuthResponse::failure(e.to_string()))
        }
        Err(e) => {
            error!("Sign up error: {}", e);
            HttpResponse::ServiceUnavailable().json(AuthResponse::failure(e.to_string()))
        }
    }
}

fn sign_up_user(state: &AppState, payload: &SignUpRequest) -> Result<User, StoreError> {
    let conn = state.connect()?;
    create_user(
        &conn,
        &payload.email,
        &payload.password,
        UserMetadata::from_names(&payload.first_name, &payload.last_name),
    )
}
