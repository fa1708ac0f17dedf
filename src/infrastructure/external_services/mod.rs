pub mod lexical_api_client;

pub use lexical_api_client::LexicalApiClient;
