pub mod substitute_words;

pub use substitute_words::{SubstituteWordsUseCase, SubstitutionOutcome};
