//! Top-level router assembly
//!
//! - `GET /health`, `GET /healthz` - liveness check
//! - every registered entity's routes
//! - a fallback rendering `Path not found: <path>` for anything else

use super::entity_registry::EntityRegistry;
use super::handlers::path_not_found;
use axum::{Json, Router, routing::get};
use serde_json::{Value, json};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Service name reported by the health check
pub const SERVICE_NAME: &str = "grubdash";

/// Build the application router
pub fn build_router(registry: &EntityRegistry) -> Router {
    health_routes()
        .merge(registry.build_routes())
        .fallback(path_not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
}

/// Build health check routes
fn health_routes() -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/healthz", get(health_check))
}

/// Health check endpoint handler
async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": SERVICE_NAME
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    async fn send(app: Router, method: &str, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    #[tokio::test]
    async fn test_health_check() {
        let app = build_router(&EntityRegistry::new());
        let (status, body) = send(app, "GET", "/healthz").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"status": "ok", "service": "grubdash"}));
    }

    #[tokio::test]
    async fn test_unknown_path_is_404() {
        let app = build_router(&EntityRegistry::new());
        let (status, body) = send(app, "GET", "/menus").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Path not found: /menus");
    }
}
