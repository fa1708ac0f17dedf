use crate::domain::entities::Candidate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionRule {
    /// Take the top-ranked candidate.
    First,
    /// Take the top-ranked candidate unless it is a bare "." and a runner-up exists.
    SkipLeadingPeriod,
}

impl SelectionRule {
    /// Picks the substitute for `word`. An empty candidate list yields `word` itself.
    pub fn select(&self, word: &str, candidates: &[Candidate]) -> String {
        let chosen = match (self, candidates) {
            (_, []) => None,
            (SelectionRule::SkipLeadingPeriod, [first, second, ..]) if first.is_period() => {
                Some(second)
            }
            (_, [first, ..]) => Some(first),
        };

        chosen
            .map(|candidate| candidate.word.clone())
            .unwrap_or_else(|| word.to_string())
    }
}
