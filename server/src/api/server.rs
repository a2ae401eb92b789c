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

use super::middleware::{self, AllowedOrigins};
use super::openapi::{openapi_json, swagger_ui_html};
use super::routes::{health, players};
use crate::core::CoreApp;
use crate::core::constants::DEFAULT_BODY_LIMIT;
use crate::data::PlayerStore;

pub struct ApiServer {
    app: CoreApp,
    allowed_origins: AllowedOrigins,
}

impl ApiServer {
    pub fn new(app: CoreApp) -> Self {
        let allowed_origins = AllowedOrigins::new(&app.config.server.host, app.config.server.port);
        Self {
            app,
            allowed_origins,
        }
    }

    /// Serve until the shutdown signal fires; returns CoreApp for graceful shutdown
    pub async fn start(self) -> Result<CoreApp> {
        let Self {
            app,
            allowed_origins,
        } = self;

        let shutdown = app.shutdown.clone();
        let host = app.config.server.host.clone();
        let port = app.config.server.port;
        let addr = SocketAddr::new(
            host.parse()
                .with_context(|| format!("Invalid bind address: {}", host))?,
            port,
        );

        let router = build_router(app.store.clone(), &allowed_origins);

        let listener = TcpListener::bind(addr)
            .await
            .with_context(|| format!("Failed to bind {}", addr))?;
        tracing::debug!(%addr, "Listening");

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown.wait())
            .await?;

        Ok(app)
    }
}

/// Assemble all routes and HTTP layers over one player store
pub fn build_router(store: Arc<PlayerStore>, allowed_origins: &AllowedOrigins) -> Router {
    Router::new()
        .nest("/api/v1/health", health::routes(store.clone()))
        .route("/api/openapi.json", get(openapi_json))
        .route("/api/docs", get(swagger_ui_html))
        .nest("/rest/players", players::routes(store))
        .fallback(middleware::handle_404)
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(middleware::cors(allowed_origins))
        .layer(DefaultBodyLimit::max(DEFAULT_BODY_LIMIT))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use tower::ServiceExt;

    fn router() -> Router {
        build_router(
            Arc::new(PlayerStore::memory()),
            &AllowedOrigins::new("127.0.0.1", 8080),
        )
    }

    async fn get_json(router: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = router
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health_reports_backend() {
        let (status, body) = get_json(router(), "/api/v1/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["backend"], "memory");
    }

    #[tokio::test]
    async fn test_unknown_route_returns_json_404() {
        let (status, body) = get_json(router(), "/nope").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "not_found");
        assert_eq!(body["code"], "ROUTE_NOT_FOUND");
    }

    #[tokio::test]
    async fn test_openapi_document_served() {
        let (status, body) = get_json(router(), "/api/openapi.json").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["paths"]["/rest/players"].is_object());
    }

    #[tokio::test]
    async fn test_players_mounted() {
        let (status, body) = get_json(router(), "/rest/players/count").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, serde_json::json!(0));
    }

    #[tokio::test]
    async fn test_cors_allows_local_origin() {
        let response = router()
            .oneshot(
                Request::get("/api/v1/health")
                    .header(header::ORIGIN, "http://localhost:8080")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "http://localhost:8080"
        );
    }
}
