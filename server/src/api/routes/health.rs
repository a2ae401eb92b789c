//! Health check endpoint

use std::sync::Arc;

use axum::Json;
use axum::Router;
use axum::extract::State;
use axum::routing::get;
use serde::Serialize;
use utoipa::ToSchema;

use crate::data::PlayerStore;

#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    /// Active player store backend (`sqlite` or `memory`)
    pub backend: String,
}

/// Build the health route
pub fn routes(store: Arc<PlayerStore>) -> Router<()> {
    Router::new().route("/", get(health)).with_state(store)
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/api/v1/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
pub async fn health(State(store): State<Arc<PlayerStore>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        backend: store.backend().to_string(),
    })
}
