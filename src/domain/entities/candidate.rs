use serde::Deserialize;

/// One ranked entry returned by the lexical API.
///
/// The API attaches scores, syllable counts and tags to each entry; only
/// `word` takes part in selection, `score` is kept for diagnostics.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Candidate {
    pub word: String,
    #[serde(default)]
    pub score: Option<f64>,
}

impl Candidate {
    pub fn new(word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            score: None,
        }
    }

    /// The lexical API ranks a bare "." first for follows-word lookups
    /// that carry no spelling constraint.
    pub fn is_period(&self) -> bool {
        self.word == "."
    }
}
