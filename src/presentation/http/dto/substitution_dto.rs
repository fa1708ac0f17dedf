use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::Value;

use crate::application::ports::LookupError;
use crate::application::use_cases::SubstitutionOutcome;
use crate::presentation::http::errors::AppError;

/// What a `POST /` body asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubstitutionRequest {
    /// No body, or a falsy JSON value (`null`, `false`, `0`, `""`).
    Missing,
    Words(Vec<String>),
}

impl SubstitutionRequest {
    pub fn from_body(body: &[u8]) -> Result<Self, AppError> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(SubstitutionRequest::Missing);
        }

        let value: Value = serde_json::from_slice(body)
            .map_err(|e| AppError::BadRequest(format!("Body is not valid JSON: {}", e)))?;

        if is_falsy(&value) {
            return Ok(SubstitutionRequest::Missing);
        }

        serde_json::from_value::<Vec<String>>(value)
            .map(SubstitutionRequest::Words)
            .map_err(|e| {
                AppError::BadRequest(format!("Body must be a JSON array of words: {}", e))
            })
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

/// Status and body written back for a substitution request.
#[derive(Debug, Clone, PartialEq)]
pub enum SubstitutionResponse {
    /// Answered with `{}` rather than `[]`; existing clients rely on it.
    NoBody,
    Outcome(SubstitutionOutcome),
}

impl SubstitutionResponse {
    pub fn status(&self) -> StatusCode {
        match self {
            SubstitutionResponse::NoBody => StatusCode::OK,
            SubstitutionResponse::Outcome(SubstitutionOutcome::Complete(_)) => StatusCode::OK,
            SubstitutionResponse::Outcome(SubstitutionOutcome::Partial { error, .. }) => {
                status_for(error)
            }
        }
    }
}

fn status_for(error: &LookupError) -> StatusCode {
    match error {
        LookupError::UpstreamStatus(status) => {
            StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
        }
        LookupError::NetworkError(_) | LookupError::InvalidResponse(_) => StatusCode::BAD_GATEWAY,
    }
}

impl IntoResponse for SubstitutionResponse {
    fn into_response(self) -> Response {
        let status = self.status();

        match self {
            SubstitutionResponse::NoBody => {
                (status, Json(Value::Object(serde_json::Map::new()))).into_response()
            }
            SubstitutionResponse::Outcome(outcome) => {
                (status, Json(outcome.into_substitutions())).into_response()
            }
        }
    }
}
