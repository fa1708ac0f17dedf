pub mod substitution_handler;

pub use substitution_handler::SubstitutionHandler;
