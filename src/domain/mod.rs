pub mod entities;
pub mod value_objects;

pub use entities::Candidate;
pub use value_objects::{LookupProfile, LookupQuery, SelectionRule, ServiceKind};
