use axum::{body::Bytes, extract::State};
use std::sync::Arc;

use crate::application::use_cases::SubstituteWordsUseCase;
use crate::domain::ServiceKind;
use crate::presentation::http::dto::{SubstitutionRequest, SubstitutionResponse};
use crate::presentation::http::errors::AppError;

pub struct SubstitutionHandler {
    kind: ServiceKind,
    substitute_words_use_case: Arc<SubstituteWordsUseCase>,
}

impl SubstitutionHandler {
    pub fn new(kind: ServiceKind, substitute_words_use_case: Arc<SubstituteWordsUseCase>) -> Self {
        Self {
            kind,
            substitute_words_use_case,
        }
    }

    pub async fn substitute(
        State(handler): State<Arc<SubstitutionHandler>>,
        body: Bytes,
    ) -> Result<SubstitutionResponse, AppError> {
        tracing::info!(
            service = %handler.kind,
            body = %String::from_utf8_lossy(&body),
            "Substitution request body"
        );

        let words = match SubstitutionRequest::from_body(&body)? {
            SubstitutionRequest::Missing => return Ok(SubstitutionResponse::NoBody),
            SubstitutionRequest::Words(words) => words,
        };

        let outcome = handler.substitute_words_use_case.execute(&words).await;

        tracing::info!(
            service = %handler.kind,
            substitutions = ?outcome.substitutions(),
            complete = outcome.is_complete(),
            "Substitutions"
        );

        Ok(SubstitutionResponse::Outcome(outcome))
    }
}
