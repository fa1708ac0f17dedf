use axum::{Json, Router, http::StatusCode, response::IntoResponse, routing::get};

use crate::domain::ServiceKind;
use crate::presentation::http::dto::HealthResponseDto;

pub fn health_routes(kind: ServiceKind) -> Router {
    Router::new().route("/health", get(move || health_handler(kind)))
}

async fn health_handler(kind: ServiceKind) -> impl IntoResponse {
    (StatusCode::OK, Json(HealthResponseDto::healthy(kind.name())))
}
