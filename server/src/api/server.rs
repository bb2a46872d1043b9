//! API server initialization

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use tokio::net::TcpListener;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use super::middleware;
use super::openapi::openapi_json;
use super::routes::{health, strings};
use crate::core::CoreApp;
use crate::core::constants::MAX_BODY_SIZE;
use crate::data::StringStore;

pub struct ApiServer {
    app: CoreApp,
}

impl ApiServer {
    pub fn new(app: CoreApp) -> Self {
        Self { app }
    }

    /// Serve until shutdown is signalled. Returns CoreApp for graceful shutdown.
    pub async fn start(self) -> Result<CoreApp> {
        let Self { app } = self;

        let shutdown = app.shutdown.clone();

        let host = app.config.server.host.clone();
        let port = app.config.server.port;
        let addr = SocketAddr::new(
            host.parse()
                .with_context(|| format!("Invalid server host address: {}", host))?,
            port,
        );

        let router = build_router(app.store.clone(), app.config.debug);

        let listener = TcpListener::bind(addr)
            .await
            .with_context(|| format!("Failed to bind {}", addr))?;
        tracing::info!(address = %addr, "Server listening");

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown.wait())
            .await?;

        Ok(app)
    }
}

/// Build the full application router over `store`
pub fn build_router(store: Arc<StringStore>, debug: bool) -> Router {
    let router = Router::new()
        .route("/", get(health::welcome))
        .route("/api/v1/health", get(health::health))
        .route("/api/openapi.json", get(openapi_json))
        .nest("/strings", strings::routes(store))
        .fallback(middleware::handle_404)
        .layer(CompressionLayer::new())
        .layer(middleware::cors())
        .layer(DefaultBodyLimit::max(MAX_BODY_SIZE));
    let router = middleware::security_headers(router);

    if debug {
        router.layer(TraceLayer::new_for_http())
    } else {
        router
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    async fn get_json(router: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null))
    }

    fn router() -> Router {
        build_router(Arc::new(StringStore::in_memory()), false)
    }

    #[tokio::test]
    async fn test_welcome() {
        let (status, body) = get_json(router(), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "Success");
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = get_json(router(), "/api/v1/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_openapi_json() {
        let (status, body) = get_json(router(), "/api/openapi.json").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["paths"].is_object());
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let (status, body) = get_json(router(), "/nope").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "ROUTE_NOT_FOUND");
    }

    #[tokio::test]
    async fn test_security_headers() {
        let response = router()
            .oneshot(Request::builder().uri("/strings").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let headers = response.headers();
        assert_eq!(headers["x-content-type-options"], "nosniff");
        assert_eq!(headers["x-frame-options"], "SAMEORIGIN");
        assert_eq!(headers["referrer-policy"], "no-referrer");
        assert_eq!(headers["cross-origin-opener-policy"], "same-origin");
    }

    #[tokio::test]
    async fn test_security_headers_on_errors() {
        let response = router()
            .oneshot(Request::builder().uri("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(response.headers()["x-content-type-options"], "nosniff");
    }

    #[tokio::test]
    async fn test_debug_router_serves_requests() {
        let router = build_router(Arc::new(StringStore::in_memory()), true);
        let (status, _) = get_json(router, "/api/v1/health").await;
        assert_eq!(status, StatusCode::OK);
    }
}
