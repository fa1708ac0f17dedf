pub mod lexical_lookup;

pub use lexical_lookup::{LexicalLookup, LookupError};
