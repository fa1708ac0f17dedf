use std::sync::Arc;

use crate::application::ports::LookupError;
use crate::application::services::SubstitutionPipeline;

/// Result of substituting a word list.
///
/// `Partial` holds the substitutions computed before `error` stopped the
/// run; words after the failing one were never looked up.
#[derive(Debug, Clone, PartialEq)]
pub enum SubstitutionOutcome {
    Complete(Vec<String>),
    Partial {
        substitutions: Vec<String>,
        error: LookupError,
    },
}

impl SubstitutionOutcome {
    pub fn is_complete(&self) -> bool {
        matches!(self, SubstitutionOutcome::Complete(_))
    }

    pub fn substitutions(&self) -> &[String] {
        match self {
            SubstitutionOutcome::Complete(substitutions) => substitutions,
            SubstitutionOutcome::Partial { substitutions, .. } => substitutions,
        }
    }

    pub fn error(&self) -> Option<&LookupError> {
        match self {
            SubstitutionOutcome::Complete(_) => None,
            SubstitutionOutcome::Partial { error, .. } => Some(error),
        }
    }

    pub fn into_substitutions(self) -> Vec<String> {
        match self {
            SubstitutionOutcome::Complete(substitutions) => substitutions,
            SubstitutionOutcome::Partial { substitutions, .. } => substitutions,
        }
    }
}

pub struct SubstituteWordsUseCase {
    pipeline: Arc<SubstitutionPipeline>,
}

impl SubstituteWordsUseCase {
    pub fn new(pipeline: Arc<SubstitutionPipeline>) -> Self {
        Self { pipeline }
    }

    /// Substitutes words one at a time, in order. Each lookup finishes before
    /// the next starts, and the first failure ends the run.
    pub async fn execute(&self, words: &[String]) -> SubstitutionOutcome {
        let mut substitutions = Vec::with_capacity(words.len());

        for (index, word) in words.iter().enumerate() {
            match self.pipeline.substitute(word).await {
                Ok(substitute) => substitutions.push(substitute),
                Err(error) => {
                    tracing::warn!(
                        word = %word,
                        index,
                        completed = substitutions.len(),
                        "Substitution stopped: {}",
                        error
                    );
                    return SubstitutionOutcome::Partial {
                        substitutions,
                        error,
                    };
                }
            }
        }

        SubstitutionOutcome::Complete(substitutions)
    }
}
