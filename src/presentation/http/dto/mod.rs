pub mod response_dto;
pub mod substitution_dto;

pub use response_dto::*;
pub use substitution_dto::*;
