use std::env;
use std::time::Duration;

use url::Url;

use crate::domain::{LookupProfile, SelectionRule, ServiceKind};

pub const DEFAULT_LEXICAL_API_URL: &str = "https://api.datamuse.com/words";

pub const PORT_ENV: &str = "PORT";
pub const LEXICAL_API_URL_ENV: &str = "LEXICAL_API_URL";
pub const LEXICAL_TIMEOUT_ENV: &str = "LEXICAL_TIMEOUT_SECS";

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort(String),
    InvalidUrl(String),
    InvalidTimeout(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidPort(msg) => write!(f, "Invalid {}: {}", PORT_ENV, msg),
            ConfigError::InvalidUrl(msg) => write!(f, "Invalid {}: {}", LEXICAL_API_URL_ENV, msg),
            ConfigError::InvalidTimeout(msg) => {
                write!(f, "Invalid {}: {}", LEXICAL_TIMEOUT_ENV, msg)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub kind: ServiceKind,
    pub port: u16,
    pub profile: LookupProfile,
    /// `None` waits on the lexical API for as long as it takes.
    pub timeout: Option<Duration>,
}

impl ServiceConfig {
    pub fn for_kind(kind: ServiceKind) -> Self {
        let base_url =
            Url::parse(DEFAULT_LEXICAL_API_URL).expect("default lexical API URL is valid");

        let (port, profile) = match kind {
            ServiceKind::Adjective => (
                8001,
                LookupProfile::new(base_url, "rel_jjb", SelectionRule::First),
            ),
            ServiceKind::SoundsLike => (
                8002,
                LookupProfile::new(base_url, "sl", SelectionRule::First),
            ),
            ServiceKind::WordsAfter => (
                8003,
                LookupProfile::new(base_url, "lc", SelectionRule::SkipLeadingPeriod)
                    .with_fixed_param("sp", "*"),
            ),
        };

        Self {
            kind,
            port,
            profile,
            timeout: None,
        }
    }

    /// Defaults for `kind`, overridden by `.env` and process environment.
    pub fn from_env(kind: ServiceKind) -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::for_kind(kind).with_overrides(|key| env::var(key).ok())
    }

    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(port) = lookup(PORT_ENV) {
            self.port = port
                .trim()
                .parse()
                .map_err(|e| ConfigError::InvalidPort(format!("'{}': {}", port, e)))?;
        }

        if let Some(url) = lookup(LEXICAL_API_URL_ENV) {
            let url = Url::parse(url.trim())
                .map_err(|e| ConfigError::InvalidUrl(format!("'{}': {}", url, e)))?;
            self = self.with_lexical_api_url(url);
        }

        if let Some(secs) = lookup(LEXICAL_TIMEOUT_ENV) {
            let secs: u64 = secs
                .trim()
                .parse()
                .map_err(|e| ConfigError::InvalidTimeout(format!("'{}': {}", secs, e)))?;
            if secs == 0 {
                return Err(ConfigError::InvalidTimeout(
                    "timeout must be at least one second".to_string(),
                ));
            }
            self.timeout = Some(Duration::from_secs(secs));
        }

        Ok(self)
    }

    pub fn with_lexical_api_url(mut self, url: Url) -> Self {
        self.profile.base_url = url;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn overrides(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_per_kind() {
        let adjective = ServiceConfig::for_kind(ServiceKind::Adjective);
        assert_eq!(adjective.port, 8001);
        assert_eq!(adjective.profile.relation_param, "rel_jjb");
        assert!(adjective.profile.fixed_params.is_empty());
        assert_eq!(adjective.profile.selection, SelectionRule::First);
        assert!(adjective.timeout.is_none());

        let sounds = ServiceConfig::for_kind(ServiceKind::SoundsLike);
        assert_eq!(sounds.port, 8002);
        assert_eq!(sounds.profile.relation_param, "sl");
        assert_eq!(sounds.profile.selection, SelectionRule::First);

        let after = ServiceConfig::for_kind(ServiceKind::WordsAfter);
        assert_eq!(after.port, 8003);
        assert_eq!(after.profile.relation_param, "lc");
        assert_eq!(
            after.profile.fixed_params,
            vec![("sp".to_string(), "*".to_string())]
        );
        assert_eq!(after.profile.selection, SelectionRule::SkipLeadingPeriod);

        for kind in ServiceKind::ALL {
            assert_eq!(
                ServiceConfig::for_kind(kind).profile.base_url.as_str(),
                DEFAULT_LEXICAL_API_URL
            );
        }
    }

    #[test]
    fn test_no_overrides_keeps_defaults() {
        let config = ServiceConfig::for_kind(ServiceKind::SoundsLike)
            .with_overrides(overrides(&[]))
            .unwrap();

        assert_eq!(config.port, 8002);
        assert!(config.timeout.is_none());
    }

    #[test]
    fn test_overrides_apply() {
        let config = ServiceConfig::for_kind(ServiceKind::Adjective)
            .with_overrides(overrides(&[
                (PORT_ENV, "9001"),
                (LEXICAL_API_URL_ENV, "http://127.0.0.1:7000/words"),
                (LEXICAL_TIMEOUT_ENV, "15"),
            ]))
            .unwrap();

        assert_eq!(config.port, 9001);
        assert_eq!(
            config.profile.base_url.as_str(),
            "http://127.0.0.1:7000/words"
        );
        assert_eq!(config.timeout, Some(Duration::from_secs(15)));
        assert_eq!(config.profile.relation_param, "rel_jjb");
    }

    #[test]
    fn test_invalid_overrides_are_rejected() {
        let bad_port = ServiceConfig::for_kind(ServiceKind::Adjective)
            .with_overrides(overrides(&[(PORT_ENV, "eighty")]));
        assert!(matches!(bad_port, Err(ConfigError::InvalidPort(_))));

        let bad_url = ServiceConfig::for_kind(ServiceKind::Adjective)
            .with_overrides(overrides(&[(LEXICAL_API_URL_ENV, "not a url")]));
        assert!(matches!(bad_url, Err(ConfigError::InvalidUrl(_))));

        let zero_timeout = ServiceConfig::for_kind(ServiceKind::Adjective)
            .with_overrides(overrides(&[(LEXICAL_TIMEOUT_ENV, "0")]));
        assert!(matches!(zero_timeout, Err(ConfigError::InvalidTimeout(_))));
    }
}
