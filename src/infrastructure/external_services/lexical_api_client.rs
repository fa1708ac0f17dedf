use async_trait::async_trait;
use reqwest::{Client, Error as ReqwestError, StatusCode};
use std::time::Duration;

use crate::application::ports::{LexicalLookup, LookupError};
use crate::domain::{Candidate, LookupQuery};

/// reqwest-backed client for the lexical API. One request per lookup,
/// never retried.
#[derive(Debug, Clone)]
pub struct LexicalApiClient {
    client: Client,
}

impl LexicalApiClient {
    pub fn new(timeout: Option<Duration>) -> Result<Self, ReqwestError> {
        let mut builder =
            Client::builder().user_agent(concat!("wordswap/", env!("CARGO_PKG_VERSION")));

        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
        })
    }
}

#[async_trait]
impl LexicalLookup for LexicalApiClient {
    async fn lookup(&self, query: &LookupQuery) -> Result<Vec<Candidate>, LookupError> {
        let url = query.to_url();

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| LookupError::NetworkError(e.without_url().to_string()))?;

        let status = response.status();
        if status != StatusCode::OK {
            tracing::warn!(%url, status = status.as_u16(), "Lexical API returned non-OK status");
            return Err(LookupError::UpstreamStatus(status.as_u16()));
        }

        response
            .json::<Vec<Candidate>>()
            .await
            .map_err(|e| LookupError::InvalidResponse(e.without_url().to_string()))
    }
}
