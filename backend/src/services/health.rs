use actix_web::HttpResponse;
use serde_json::json;

/// `GET /api`
pub async fn root() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "message": "Procuroid API is running" }))
}

/// `GET /api/health`
pub async fn status() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "status": "ok" }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, web, App};

    #[actix_web::test]
    async fn health_reports_ok() {
        let app = test::init_service(
            App::new()
                .route("/api", web::get().to(root))
                .route("/api/health", web::get().to(status)),
        )
        .await;

        let body: serde_json::Value =
            test::call_and_read_body_json(&app, test::TestRequest::get().uri("/api/health").to_request())
                .await;
        assert_eq!(body, json!({ "status": "ok" }));

        let body: serde_json::Value =
            test::call_and_read_body_json(&app, test::TestRequest::get().uri("/api").to_request()).await;
        assert_eq!(body["message"], "Procuroid API is running");
    }
}
