use axum::{http, Json};
use serde::Serialize;

#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct HealthResponse {
    status: &'static str,
}

const HEALTHY: HealthResponse = HealthResponse { status: "healthy" };

#[tracing::instrument(name = "Health check")]
pub async fn health() -> (http::StatusCode, Json<HealthResponse>) {
    (http::StatusCode::OK, Json(HEALTHY))
}
