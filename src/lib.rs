pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

use crate::application::ports::LookupError;
use crate::domain::ServiceKind;
use crate::infrastructure::{AppContainer, ServiceConfig, init_tracing};

/// Boots one substitution service: tracing, configuration, wiring, then
/// serves until the listener fails.
pub async fn run_service(kind: ServiceKind) -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let config = ServiceConfig::from_env(kind)?;
    tracing::info!(
        service = %kind,
        port = config.port,
        lexical_api = %config.profile.base_url,
        timeout = ?config.timeout,
        "Starting substitution service"
    );

    let container = AppContainer::new(config)?;
    container.http_server().run().await
}

/// Substitutes a JSON array of words read as text, the way the `garble`
/// tool does. Returns the JSON array of substitutions and, when the run
/// stopped early, the lookup error that stopped it.
pub async fn garble(
    config: ServiceConfig,
    input: &str,
) -> Result<(String, Option<LookupError>), Box<dyn std::error::Error>> {
    let words: Vec<String> = serde_json::from_str(input)
        .map_err(|e| format!("Input must be a JSON array of words: {}", e))?;

    let container = AppContainer::new(config)?;
    let outcome = container.substitute_words_use_case.execute(&words).await;

    let output = serde_json::to_string(outcome.substitutions())?;
    Ok((output, outcome.error().cloned()))
}
