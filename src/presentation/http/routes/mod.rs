pub mod health_routes;
pub mod substitution_routes;

pub use health_routes::*;
pub use substitution_routes::*;
