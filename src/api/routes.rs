//! API Routes
//!
//! Configures the Axum router with all password endpoints.

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    by_tag_handler, create_handler, delete_handler, generate_handler, get_handler,
    health_handler, list_handler, stats_handler, update_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Middleware
/// - CORS: Allows any origin (configurable for production)
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router with all endpoints
    Router::new()
        .route("/api/passwords", get(list_handler).post(create_handler))
        .route("/api/passwords/generate", get(generate_handler))
        .route("/api/passwords/by-tag", get(by_tag_handler))
        .route(
            "/api/passwords/:id",
            get(get_handler).put(update_handler).delete(delete_handler),
        )
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::PasswordCache;
    use crate::generator::Alphabet;
    use crate::service::{Argon2Hasher, PasswordService};
    use crate::store::MemoryRepository;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use std::sync::Arc;
    use tower::util::ServiceExt;

    fn create_test_app() -> Router {
        let service = PasswordService::new(
            Arc::new(MemoryRepository::new()),
            Arc::new(PasswordCache::new()),
            Arc::new(Argon2Hasher::new(8, 1, 1).unwrap()),
            Alphabet::default(),
        );
        create_router(AppState::new(service))
    }

    async fn status_of(uri: &str) -> StatusCode {
        create_test_app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
            .status()
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        assert_eq!(status_of("/health").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_stats_endpoint() {
        assert_eq!(status_of("/stats").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_list_endpoint() {
        assert_eq!(status_of("/api/passwords").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_generate_routes_before_id() {
        let status = status_of("/api/passwords/generate?length=8&complexity=1&owner=alice").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_get_not_found() {
        assert_eq!(status_of("/api/passwords/42").await, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_by_tag_endpoint() {
        assert_eq!(
            status_of("/api/passwords/by-tag?tagName=work").await,
            StatusCode::OK
        );
    }
}
