#![allow(dead_code)]

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::{
    Json, Router,
    body::Body,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use http_body_util::BodyExt;
use serde_json::Value;
use url::Url;

use wordswap::domain::ServiceKind;
use wordswap::infrastructure::{AppContainer, ServiceConfig};

const RELATION_PARAMS: [&str; 3] = ["rel_jjb", "sl", "lc"];

/// In-process stand-in for the lexical API. Answers by word; unknown words
/// get an empty list. Every query it receives is recorded.
#[derive(Default)]
pub struct MockUpstream {
    answers: HashMap<String, (StatusCode, Value)>,
    hits: Mutex<Vec<HashMap<String, String>>>,
}

impl MockUpstream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answer(mut self, word: &str, body: Value) -> Self {
        self.answers.insert(word.to_string(), (StatusCode::OK, body));
        self
    }

    pub fn status(mut self, word: &str, status: StatusCode) -> Self {
        self.answers
            .insert(word.to_string(), (status, serde_json::json!({ "error": "nope" })));
        self
    }

    pub fn hits(&self) -> Vec<HashMap<String, String>> {
        self.hits.lock().unwrap().clone()
    }

    pub fn queried_words(&self) -> Vec<String> {
        self.hits()
            .iter()
            .filter_map(|params| {
                RELATION_PARAMS
                    .iter()
                    .find_map(|key| params.get(*key).cloned())
            })
            .collect()
    }

    /// Binds to an ephemeral port and returns the `/words` endpoint URL.
    pub async fn start(self: Arc<Self>) -> Url {
        let app = Router::new()
            .route("/words", get(mock_words))
            .with_state(self);

        let addr = serve(app).await;
        Url::parse(&format!("http://{}/words", addr)).unwrap()
    }
}

async fn mock_words(
    State(mock): State<Arc<MockUpstream>>,
    Query(params): Query<HashMap<String, String>>,
) -> impl IntoResponse {
    mock.hits.lock().unwrap().push(params.clone());

    let word = RELATION_PARAMS
        .iter()
        .find_map(|key| params.get(*key))
        .cloned()
        .unwrap_or_default();

    match mock.answers.get(&word) {
        Some((status, body)) => (*status, Json(body.clone())),
        None => (StatusCode::OK, Json(serde_json::json!([]))),
    }
}

pub async fn serve(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

/// A URL nothing is listening on.
pub async fn dead_upstream() -> Url {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    Url::parse(&format!("http://{}/words", addr)).unwrap()
}

pub fn create_app(kind: ServiceKind, upstream: Url) -> Router {
    let config = ServiceConfig::for_kind(kind).with_lexical_api_url(upstream);
    let container = AppContainer::new(config).unwrap();
    container.http_server().router()
}

pub async fn body_to_json(body: Body) -> Value {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
