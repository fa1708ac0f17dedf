use std::sync::Arc;

use crate::{
    application::{
        ports::LexicalLookup, services::SubstitutionPipeline, use_cases::SubstituteWordsUseCase,
    },
    infrastructure::{config::ServiceConfig, external_services::LexicalApiClient},
    presentation::http::{HttpServer, handlers::SubstitutionHandler},
};

pub struct AppContainer {
    pub config: ServiceConfig,

    // External Services
    pub lexical_lookup: Arc<dyn LexicalLookup>,

    // Application Services
    pub substitution_pipeline: Arc<SubstitutionPipeline>,

    // Use Cases
    pub substitute_words_use_case: Arc<SubstituteWordsUseCase>,

    // HTTP Handlers
    pub substitution_handler: Arc<SubstitutionHandler>,
}

impl AppContainer {
    pub fn new(config: ServiceConfig) -> Result<Self, Box<dyn std::error::Error>> {
        let lexical_lookup: Arc<dyn LexicalLookup> = Arc::new(
            LexicalApiClient::new(config.timeout)
                .map_err(|e| format!("Failed to create lexical API client: {}", e))?,
        );

        Ok(Self::with_lookup(config, lexical_lookup))
    }

    pub fn with_lookup(config: ServiceConfig, lexical_lookup: Arc<dyn LexicalLookup>) -> Self {
        let substitution_pipeline = Arc::new(SubstitutionPipeline::new(
            config.profile.clone(),
            lexical_lookup.clone(),
        ));

        let substitute_words_use_case =
            Arc::new(SubstituteWordsUseCase::new(substitution_pipeline.clone()));

        let substitution_handler = Arc::new(SubstitutionHandler::new(
            config.kind,
            substitute_words_use_case.clone(),
        ));

        Self {
            config,
            lexical_lookup,
            substitution_pipeline,
            substitute_words_use_case,
            substitution_handler,
        }
    }

    pub fn http_server(&self) -> HttpServer {
        HttpServer::new(
            self.config.kind,
            self.substitution_handler.clone(),
            self.config.port,
        )
    }
}
