//! Vigil Web Server
//!
//! Axum-based HTTP + WebSocket surface for the incident-report service.

pub mod auth;
pub mod routes;
pub mod state;
pub mod websocket;

use axum::{
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use vigil_db::DbPool;

use state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        // Reporter-facing
        .route("/report", post(routes::reports::submit_report))
        .route(
            "/user/reports/{reporter_id}",
            get(routes::reports::list_reporter_reports),
        )
        .route("/generate-user-id", post(routes::identity::generate_reporter_id))
        // Admin
        .route("/admin/login", post(routes::admin::login))
        .route("/admin/reports", get(routes::admin::list_reports))
        .route(
            "/admin/reports/{id}",
            put(routes::admin::update_report_status),
        )
        .route("/admin/dashboard-stats", get(routes::admin::dashboard_stats))
        .with_state(state.clone());

    Router::new()
        .nest("/api", api_routes)
        .route("/ws", get(websocket::ws_handler))
        .route(
            "/ws/reporter/{reporter_id}",
            get(websocket::reporter_ws_handler),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Run the web server.
pub async fn run_server(db: Arc<DbPool>, host: &str, port: u16) -> anyhow::Result<()> {
    let state = AppState::new(db);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(format!("{}:{}", host, port)).await?;
    tracing::info!("Web server listening on http://{}:{}", host, port);

    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;
    use vigil_db::migrations::run_migrations;

    const TOKEN: &str = "admin-token-prototype";

    fn test_router() -> Router {
        let pool = DbPool::in_memory().unwrap();
        run_migrations(&pool).unwrap();
        create_router(AppState::new(Arc::new(pool)))
    }

    fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn authed_request(method: &str, uri: &str, body: Option<Value>) -> Request<Body> {
        let builder = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::AUTHORIZATION, format!("Bearer {}", TOKEN))
            .header(header::CONTENT_TYPE, "application/json");
        match body {
            Some(body) => builder.body(Body::from(body.to_string())).unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        }
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_submit_report_happy_path() {
        let app = test_router();

        let response = app
            .oneshot(json_request(
                "POST",
                "/api/report",
                json!({
                    "reporterId": "USER_AB12CD34E",
                    "category": "fire",
                    "description": "smoke near gate 3",
                    "location": "terminal B"
                }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["reportId"], 1);
    }

    #[tokio::test]
    async fn test_submit_report_rejects_missing_field() {
        let app = test_router();

        let response = app
            .oneshot(json_request(
                "POST",
                "/api/report",
                json!({
                    "reporterId": "USER_AB12CD34E",
                    "category": "",
                    "description": "smoke",
                    "location": "terminal B"
                }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_generate_user_id() {
        let app = test_router();

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/generate-user-id")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        let id = body["reporterId"].as_str().unwrap();
        assert!(id.starts_with("USER_"));
        assert_eq!(id.len(), 14);
    }

    #[tokio::test]
    async fn test_admin_routes_require_bearer() {
        let app = test_router();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/admin/reports")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_admin_login() {
        let app = test_router();

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/admin/login",
                json!({"username": "admin", "password": "admin"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["token"], TOKEN);

        let response = app
            .oneshot(json_request(
                "POST",
                "/api/admin/login",
                json!({"username": "admin", "password": "nope"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_admin_list_and_update_flow() {
        let app = test_router();

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/report",
                json!({
                    "reporterId": "USER_AB12CD34E",
                    "category": "fire",
                    "description": "smoke near gate 3",
                    "location": "terminal B"
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .clone()
            .oneshot(authed_request("GET", "/api/admin/reports", None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["reports"].as_array().unwrap().len(), 1);
        assert_eq!(body["stats"]["total"], 1);
        assert_eq!(body["stats"]["pending"], 1);

        let response = app
            .clone()
            .oneshot(authed_request(
                "PUT",
                "/api/admin/reports/1",
                Some(json!({"status": "resolved"})),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "resolved");

        let response = app
            .clone()
            .oneshot(authed_request(
                "PUT",
                "/api/admin/reports/1",
                Some(json!({"status": "closed"})),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = app
            .clone()
            .oneshot(authed_request(
                "PUT",
                "/api/admin/reports/99",
                Some(json!({"status": "resolved"})),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = app
            .oneshot(authed_request("GET", "/api/admin/dashboard-stats", None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["total"], 1);
        assert_eq!(body["resolved"], 1);
        assert_eq!(body["inProgress"], 0);
    }

    #[tokio::test]
    async fn test_reporter_reads_own_reports_newest_first() {
        let app = test_router();

        for description in ["first", "second"] {
            let response = app
                .clone()
                .oneshot(json_request(
                    "POST",
                    "/api/report",
                    json!({
                        "reporterId": "USER_AB12CD34E",
                        "category": "fire",
                        "description": description,
                        "location": "terminal B"
                    }),
                ))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
        }

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/user/reports/USER_AB12CD34E")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        let reports = body.as_array().unwrap();
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0]["description"], "second");
        assert_eq!(reports[1]["description"], "first");
    }
}
