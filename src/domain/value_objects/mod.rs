pub mod lookup_profile;
pub mod lookup_query;
pub mod selection_rule;
pub mod service_kind;

pub use lookup_profile::LookupProfile;
pub use lookup_query::LookupQuery;
pub use selection_rule::SelectionRule;
pub use service_kind::ServiceKind;
