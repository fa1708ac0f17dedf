use url::Url;

/// A GET against the lexical API: base endpoint plus ordered query pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupQuery {
    base_url: Url,
    params: Vec<(String, String)>,
}

impl LookupQuery {
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            params: Vec::new(),
        }
    }

    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }

    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Pairs are appended after any query already present on the base URL.
    pub fn to_url(&self) -> Url {
        let mut url = self.base_url.clone();

        if !self.params.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in &self.params {
                pairs.append_pair(key, value);
            }
        }

        url
    }
}
