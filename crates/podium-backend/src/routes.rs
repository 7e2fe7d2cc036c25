//! Router assembly for the development backend.

use std::sync::Arc;

use axum::{
    Router,
    http::{HeaderName, HeaderValue, Method, header},
    routing::get,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use podium::data::USER_DATA_HEADER;

use crate::{AppState, handlers};

const DEV_PORTS: [u16; 5] = [3000, 5173, 8000, 8080, 8081];

fn allowed_origins() -> Vec<HeaderValue> {
    if !cfg!(debug_assertions) {
        // Production origins go here
        return Vec::new();
    }

    DEV_PORTS
        .iter()
        .flat_map(|port| {
            [
                format!("http://localhost:{port}"),
                format!("http://127.0.0.1:{port}"),
            ]
        })
        .filter_map(|origin| HeaderValue::from_str(&origin).ok())
        .collect()
}

fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed_origins()))
        .allow_methods([Method::GET])
        .allow_headers([
            header::CONTENT_TYPE,
            header::ACCEPT,
            HeaderName::from_static(USER_DATA_HEADER),
        ])
}

/// Build the application router with CORS and request tracing applied.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::probe::get))
        .route("/getUser", get(handlers::users::get))
        .route("/health", get(handlers::health::get))
        .layer(cors())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    use axum::{
        body::{Body, to_bytes},
        http::{Request, StatusCode},
    };
    use podium::serde_json::{self, Value, json};
    use tower::ServiceExt;

    fn app() -> Router {
        router(Arc::new(AppState::new()))
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn probe_reports_connected() {
        let response = app()
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({ "message": "connected" }));
    }

    #[tokio::test]
    async fn get_user_resolves_identity_from_header() {
        let identity = json!({ "uid": "fb-7", "displayName": "Ada", "email": "ada@example.com" });
        let request = Request::get("/getUser")
            .header(USER_DATA_HEADER, identity.to_string())
            .body(Body::empty())
            .unwrap();

        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["user"]["uid"], "fb-7");
        assert_eq!(body["user"]["displayName"], "Ada");
    }

    #[tokio::test]
    async fn get_user_without_header_is_bad_request() {
        let response = app()
            .oneshot(Request::get("/getUser").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn get_user_with_malformed_header_is_bad_request() {
        let request = Request::get("/getUser")
            .header(USER_DATA_HEADER, "not json")
            .body(Body::empty())
            .unwrap();

        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn health_counts_known_users() {
        let state = Arc::new(AppState::new());
        let app = router(state.clone());

        let request = Request::get("/getUser")
            .header(USER_DATA_HEADER, json!({ "uid": "fb-9" }).to_string())
            .body(Body::empty())
            .unwrap();
        app.clone().oneshot(request).await.unwrap();

        let response = app
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let body = body_json(response).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["services"]["known_users"], 1);
    }

    #[tokio::test]
    async fn dev_origin_is_allowed() {
        let request = Request::get("/")
            .header(header::ORIGIN, "http://localhost:8080")
            .body(Body::empty())
            .unwrap();

        let response = app().oneshot(request).await.unwrap();
        assert_eq!(
            response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN),
            Some(&HeaderValue::from_static("http://localhost:8080"))
        );
    }
}
