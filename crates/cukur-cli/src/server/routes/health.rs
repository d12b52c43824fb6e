//! Liveness report including the order store

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::{Deserialize, Serialize};

use crate::server::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(check))
}

#[derive(Serialize, Deserialize)]
pub struct HealthResponse {
    /// "ok" or "degraded"
    pub status: String,
    pub version: String,
    /// "ok", or the storage error text
    pub database: String,
    /// Stored orders; absent when storage is unreachable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orders: Option<i64>,
}

async fn check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let version = env!("CARGO_PKG_VERSION").to_string();

    match state.orders().count().await {
        Ok(count) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "ok".to_string(),
                version,
                database: "ok".to_string(),
                orders: Some(count),
            }),
        ),
        Err(err) => {
            tracing::warn!(error = %err, "health check could not reach storage");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: "degraded".to_string(),
                    version,
                    database: err.to_string(),
                    orders: None,
                }),
            )
        }
    }
}
