use async_trait::async_trait;

use crate::domain::{Candidate, LookupQuery};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// The lexical API answered with something other than 200.
    UpstreamStatus(u16),
    /// The lexical API could not be reached.
    NetworkError(String),
    /// A 200 answer whose body was not a candidate list.
    InvalidResponse(String),
}

impl std::fmt::Display for LookupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LookupError::UpstreamStatus(status) => {
                write!(f, "Lexical API returned status {}", status)
            }
            LookupError::NetworkError(msg) => write!(f, "Network error: {}", msg),
            LookupError::InvalidResponse(msg) => write!(f, "Invalid response: {}", msg),
        }
    }
}

impl std::error::Error for LookupError {}

#[async_trait]
pub trait LexicalLookup: Send + Sync {
    /// Issues one query and returns the ranked candidates, best first.
    async fn lookup(&self, query: &LookupQuery) -> Result<Vec<Candidate>, LookupError>;
}
