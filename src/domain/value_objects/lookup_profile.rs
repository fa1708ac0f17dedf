use url::Url;

use super::{LookupQuery, SelectionRule};

/// Everything that distinguishes one substitution service from another:
/// where to ask, what to ask for, and how to pick from the answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupProfile {
    pub base_url: Url,
    pub relation_param: String,
    pub fixed_params: Vec<(String, String)>,
    pub selection: SelectionRule,
}

impl LookupProfile {
    pub fn new(base_url: Url, relation_param: impl Into<String>, selection: SelectionRule) -> Self {
        Self {
            base_url,
            relation_param: relation_param.into(),
            fixed_params: Vec::new(),
            selection,
        }
    }

    pub fn with_fixed_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.fixed_params.push((key.into(), value.into()));
        self
    }

    /// Fixed pairs come first, the relation pair carrying `word` last.
    pub fn query_for(&self, word: &str) -> LookupQuery {
        self.fixed_params
            .iter()
            .fold(LookupQuery::new(self.base_url.clone()), |query, (key, value)| {
                query.with_param(key.as_str(), value.as_str())
            })
            .with_param(self.relation_param.as_str(), word)
    }
}
