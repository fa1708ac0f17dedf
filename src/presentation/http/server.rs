use axum::Router;
use std::{net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;
use tower_http::classify::ServerErrorsFailureClass;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

use crate::domain::ServiceKind;
use crate::presentation::http::{
    handlers::SubstitutionHandler,
    routes::{health_routes, substitution_routes},
};

const MAX_BODY_BYTES: usize = 1024 * 1024;

pub struct HttpServer {
    kind: ServiceKind,
    substitution_handler: Arc<SubstitutionHandler>,
    port: u16,
}

impl HttpServer {
    pub fn new(
        kind: ServiceKind,
        substitution_handler: Arc<SubstitutionHandler>,
        port: u16,
    ) -> Self {
        Self {
            kind,
            substitution_handler,
            port,
        }
    }

    pub fn router(&self) -> Router {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        Router::new()
            .merge(health_routes(self.kind))
            .merge(substitution_routes(self.substitution_handler.clone()))
            .layer(cors)
            .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
            .layer(
                TraceLayer::new_for_http()
                    .on_request(
                        |request: &axum::http::Request<axum::body::Body>, _span: &tracing::Span| {
                            tracing::info!(
                                "Received request: {} {}",
                                request.method(),
                                request.uri()
                            );
                        },
                    )
                    .on_response(
                        |response: &axum::http::Response<_>,
                         latency: std::time::Duration,
                         _span: &tracing::Span| {
                            tracing::info!(
                                "Response: {} (took {} ms)",
                                response.status(),
                                latency.as_millis()
                            );
                        },
                    )
                    .on_failure(
                        |error: ServerErrorsFailureClass,
                         latency: std::time::Duration,
                         _span: &tracing::Span| {
                            tracing::error!(
                                "Request failed: {:?} (took {} ms)",
                                error,
                                latency.as_millis()
                            );
                        },
                    ),
            )
    }

    pub async fn run(self) -> Result<(), Box<dyn std::error::Error>> {
        let app = self.router();
        let addr = SocketAddr::from(([0, 0, 0, 0], self.port));

        let listener = TcpListener::bind(addr).await?;
        tracing::info!("{} service is running at http://localhost:{}", self.kind, self.port);

        axum::serve(listener, app).await?;

        Ok(())
    }
}
