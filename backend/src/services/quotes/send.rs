//! `POST /api/send-quote-request/{user_id}`
//!
//! Any JSON object is accepted and stored exactly as received; order
//! validation happens in the browser wizard. Every stored request gets a
//! `receivedAt` timestamp and the response reports the running total.

use actix_web::{web, HttpRequest, HttpResponse};
use chrono::{SecondsFormat, Utc};
use common::requests::{QuoteReceipt, QuoteRecord};
use log::{error, info};
use serde_json::{json, Value};

use super::authorize;
use crate::store::quotes::insert_quote_request;
use crate::store::{AppState, StoreError};

pub async fn process(
    req: HttpRequest,
    user_id: web::Path<String>,
    body: web::Bytes,
    state: web::Data<AppState>,
) -> HttpResponse {
    let user_id = user_id.into_inner();
    if let Err(response) = authorize(&req, &state, &user_id) {
        return response;
    }

    let (text, data) = match parse_body(&body) {
        Ok(parsed) => parsed,
        Err(message) => {
            return HttpResponse::BadRequest()
                .json(json!({ "ok": false, "error": format!("Invalid quote request: {}", message) }))
        }
    };

    match save_quote_request(&state, user_id, text, data) {
        Ok(receipt) => {
            let order = receipt.saved.order();
            info!(
                "Quote request received from {}: {} x {} {}",
                receipt.saved.user_id,
                order.product_name,
                order.quantity_required,
                order.unit_of_measurement
            );
            HttpResponse::Created().json(receipt)
        }
        Err(e) => {
            error!("Failed to store quote request: {}", e);
            HttpResponse::ServiceUnavailable().json(json!({ "ok": false, "error": e.to_string() }))
        }
    }
}

/// The body as text plus its parsed form. Only a JSON object is accepted.
fn parse_body(body: &[u8]) -> Result<(&str, Value), String> {
    let text = std::str::from_utf8(body).map_err(|e| e.to_string())?;
    match serde_json::from_str::<Value>(text) {
        Ok(data @ Value::Object(_)) => Ok((text, data)),
        Ok(_) => Err("expected a JSON object".to_string()),
        Err(e) => Err(e.to_string()),
    }
}

fn save_quote_request(
    state: &AppState,
    user_id: String,
    text: &str,
    data: Value,
) -> Result<QuoteReceipt, StoreError> {
    let record = QuoteRecord {
        user_id,
        data,
        received_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    };
    let conn = state.connect()?;
    let count = insert_quote_request(&conn, &record.user_id, text, &record.received_at)?;
    Ok(QuoteReceipt {
        ok: true,
        count,
        saved: record,
    })
}

#[cfg(test)]
mod tests {
    use crate::services::quotes::configure_routes;
    use crate::store::quotes::{count_quote_requests, quote_requests_for_user};
    use crate::store::sessions::create_session;
    use crate::store::testing::temp_state;
    use crate::store::users::create_user;
    use actix_web::http::{header, StatusCode};
    use actix_web::{test, web, App};
    use chrono::Utc;
    use common::model::order::{OrderDraft, OrderField};
    use common::model::session::{Session, UserMetadata};
    use common::requests::{QuoteReceipt, QuoteRequest};

    fn signed_in(state: &crate::store::AppState, email: &str) -> Session {
        let conn = state.connect().unwrap();
        let user = create_user(&conn, email, "pw", UserMetadata::default()).unwrap();
        create_session(&conn, &user.id, 3600, Utc::now()).unwrap()
    }

    fn steel_rod() -> QuoteRequest {
        let mut draft = OrderDraft::new();
        for (field, value) in [
            (OrderField::ProductName, "Steel Rod"),
            (OrderField::ItemDescription, "Grade 6061 rods"),
            (OrderField::QuantityRequired, "200"),
            (OrderField::UnitOfMeasurement, "pieces"),
            (OrderField::UnitPrice, "5"),
        ] {
            draft.set(field, value).unwrap();
        }
        QuoteRequest::from(&draft)
    }

    #[actix_web::test]
    async fn stores_request_and_reports_count() {
        let dir = tempfile::tempdir().unwrap();
        let state = temp_state(&dir);
        let session = signed_in(&state, "buyer@example.com");
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state.clone()))
                .configure(configure_routes),
        )
        .await;

        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri(&format!("/api/send-quote-request/{}", session.user_id))
                .insert_header((header::AUTHORIZATION, session.bearer()))
                .set_json(steel_rod())
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let receipt: QuoteReceipt = test::read_body_json(resp).await;
        assert!(receipt.ok);
        assert_eq!(receipt.count, 1);
        assert_eq!(receipt.saved.user_id, session.user_id);
        assert_eq!(receipt.saved.data["totalPriceEstimate"], "1000");
        assert_eq!(receipt.saved.order().product_name, "Steel Rod");
        assert!(receipt.saved.received_at.ends_with('Z'));
    }

    #[actix_web::test]
    async fn missing_token_is_unauthorized_and_nothing_is_stored() {
        let dir = tempfile::tempdir().unwrap();
        let state = temp_state(&dir);
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state.clone()))
                .configure(configure_routes),
        )
        .await;

        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/send-quote-request/demo-user-id")
                .set_json(steel_rod())
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(count_quote_requests(&state.connect().unwrap()).unwrap(), 0);
    }

    #[actix_web::test]
    async fn token_of_another_user_is_forbidden() {
        let dir = tempfile::tempdir().unwrap();
        let state = temp_state(&dir);
        let session = signed_in(&state, "buyer@example.com");
        let other = signed_in(&state, "other@example.com");
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(configure_routes),
        )
        .await;

        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri(&format!("/api/send-quote-request/{}", other.user_id))
                .insert_header((header::AUTHORIZATION, session.bearer()))
                .set_json(steel_rod())
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    }

    #[actix_web::test]
    async fn malformed_body_is_a_bad_request() {
        let dir = tempfile::tempdir().unwrap();
        let state = temp_state(&dir);
        let session = signed_in(&state, "buyer@example.com");
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(configure_routes),
        )
        .await;

        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri(&format!("/api/send-quote-request/{}", session.user_id))
                .insert_header((header::AUTHORIZATION, session.bearer()))
                .insert_header((header::CONTENT_TYPE, "application/json"))
                .set_payload("{ not json")
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn any_json_object_is_stored_as_received() {
        let dir = tempfile::tempdir().unwrap();
        let state = temp_state(&dir);
        let session = signed_in(&state, "buyer@example.com");
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state.clone()))
                .configure(configure_routes),
        )
        .await;

        let bodies = [
            r#"{"productName":"x","supplierType":""}"#,
            r#"{"quantityRequired":200}"#,
            r#"{"description":"two-step","orderType":"goods","quantity":"5"}"#,
        ];
        for body in bodies {
            let resp = test::call_service(
                &app,
                test::TestRequest::post()
                    .uri(&format!("/api/send-quote-request/{}", session.user_id))
                    .insert_header((header::AUTHORIZATION, session.bearer()))
                    .insert_header((header::CONTENT_TYPE, "application/json"))
                    .set_payload(body)
                    .to_request(),
            )
            .await;
            assert_eq!(resp.status(), StatusCode::CREATED, "{body}");
            let receipt: QuoteReceipt = test::read_body_json(resp).await;
            assert_eq!(receipt.saved.data, serde_json::from_str::<serde_json::Value>(body).unwrap());
        }

        let conn = state.connect().unwrap();
        let stored: Vec<String> = conn
            .prepare("SELECT data FROM quote_requests ORDER BY id")
            .unwrap()
            .query_map([], |row| row.get(0))
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(stored, bodies);

        let records = quote_requests_for_user(&conn, &session.user_id).unwrap();
        assert_eq!(records[0].order().product_name, "x");
        assert_eq!(records[0].order().supplier_type, None);
        assert_eq!(records[1].order().quantity_required, "200");
        assert_eq!(records[2].data["orderType"], "goods");
        assert_eq!(records[2].data["quantity"], "5");
    }

    #[actix_web::test]
    async fn json_that_is_not_an_object_is_a_bad_request() {
        let dir = tempfile::tempdir().unwrap();
        let state = temp_state(&dir);
        let session = signed_in(&state, "buyer@example.com");
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state.clone()))
                .configure(configure_routes),
        )
        .await;

        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri(&format!("/api/send-quote-request/{}", session.user_id))
                .insert_header((header::AUTHORIZATION, session.bearer()))
                .insert_header((header::CONTENT_TYPE, "application/json"))
                .set_payload("[1, 2, 3]")
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(count_quote_requests(&state.connect().unwrap()).unwrap(), 0);
    }
}
