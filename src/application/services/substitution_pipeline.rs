use std::sync::Arc;

use crate::application::ports::{LexicalLookup, LookupError};
use crate::domain::{LookupProfile, LookupQuery};

/// Turns one word into its substitute: build the query, ask the lexical API,
/// apply the profile's selection rule.
pub struct SubstitutionPipeline {
    profile: LookupProfile,
    lexical_lookup: Arc<dyn LexicalLookup>,
}

impl SubstitutionPipeline {
    pub fn new(profile: LookupProfile, lexical_lookup: Arc<dyn LexicalLookup>) -> Self {
        Self {
            profile,
            lexical_lookup,
        }
    }

    pub fn build_query(&self, word: &str) -> LookupQuery {
        self.profile.query_for(word)
    }

    pub async fn substitute(&self, word: &str) -> Result<String, LookupError> {
        let query = self.build_query(word);

        let candidates = self.lexical_lookup.lookup(&query).await?;
        tracing::info!(word, ?candidates, "Lexical API result");

        Ok(self.profile.selection.select(word, &candidates))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::lexical_lookup::stub::StubLookup;
    use crate::domain::SelectionRule;
    use url::Url;

    fn profile(relation: &str, selection: SelectionRule) -> LookupProfile {
        LookupProfile::new(
            Url::parse("https://api.datamuse.com/words").unwrap(),
            relation,
            selection,
        )
    }

    #[tokio::test]
    async fn test_substitute_takes_first_candidate() {
        let lookup = Arc::new(StubLookup::new().answer("happy", &["elated", "content"]));
        let pipeline = SubstitutionPipeline::new(
            profile("rel_jjb", SelectionRule::First),
            lookup.clone(),
        );

        assert_eq!(pipeline.substitute("happy").await.unwrap(), "elated");

        let seen = lookup.seen();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].param("rel_jjb"), Some("happy"));
    }

    #[tokio::test]
    async fn test_substitute_falls_back_to_word() {
        let lookup = Arc::new(StubLookup::new());
        let pipeline = SubstitutionPipeline::new(profile("sl", SelectionRule::First), lookup);

        assert_eq!(pipeline.substitute("xyzzyplugh").await.unwrap(), "xyzzyplugh");
    }

    #[tokio::test]
    async fn test_substitute_skips_leading_period() {
        let lookup = Arc::new(StubLookup::new().answer("happy", &[".", "birthday"]));
        let pipeline = SubstitutionPipeline::new(
            profile("lc", SelectionRule::SkipLeadingPeriod).with_fixed_param("sp", "*"),
            lookup.clone(),
        );

        assert_eq!(pipeline.substitute("happy").await.unwrap(), "birthday");
        assert_eq!(lookup.seen()[0].param("sp"), Some("*"));
    }

    #[tokio::test]
    async fn test_substitute_propagates_upstream_status() {
        let lookup = Arc::new(StubLookup::new().fail("happy", LookupError::UpstreamStatus(429)));
        let pipeline = SubstitutionPipeline::new(profile("sl", SelectionRule::First), lookup);

        assert_eq!(
            pipeline.substitute("happy").await,
            Err(LookupError::UpstreamStatus(429))
        );
    }
}
