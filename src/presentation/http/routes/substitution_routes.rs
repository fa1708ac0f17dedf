use axum::{Router, routing::post};
use std::sync::Arc;

use crate::presentation::http::handlers::SubstitutionHandler;

pub fn substitution_routes(substitution_handler: Arc<SubstitutionHandler>) -> Router {
    Router::new()
        .route("/", post(SubstitutionHandler::substitute))
        .with_state(substitution_handler)
}
