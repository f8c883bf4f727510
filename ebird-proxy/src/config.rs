use serde::Deserialize;
use std::path::Path;
use thiserror::Error;
use url::Url;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Port cannot be 0")]
    InvalidPort,
}

/// Proxy configuration
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Config {
    /// Listener for incoming requests
    #[serde(default)]
    pub listener: Listener,
    /// Upstream eBird API settings
    #[serde(default)]
    pub ebird: EbirdConfig,
}

impl Config {
    /// Validates the proxy configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.listener.validate()
    }
}

/// Network listener configuration
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Listener {
    /// Host address to bind to (e.g., "0.0.0.0" or "127.0.0.1")
    pub host: String,
    /// Port number to listen on
    pub port: u16,
}

impl Default for Listener {
    fn default() -> Self {
        Listener {
            host: "127.0.0.1".into(),
            port: 3000,
        }
    }
}

impl Listener {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.port == 0 {
            return Err(ValidationError::InvalidPort);
        }
        Ok(())
    }
}

/// Upstream eBird API configuration
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct EbirdConfig {
    /// Base URL of the eBird v2 API
    ///
    /// Note: Uses the `url::Url` type so invalid URLs are rejected during
    /// config deserialization.
    #[serde(default = "default_base_url")]
    pub base_url: Url,
    /// API token sent to eBird as `X-eBirdApiToken`
    ///
    /// The `EBIRD_API_KEY` environment variable takes precedence when set.
    pub api_key: Option<String>,
}

impl Default for EbirdConfig {
    fn default() -> Self {
        EbirdConfig {
            base_url: default_base_url(),
            api_key: None,
        }
    }
}

fn default_base_url() -> Url {
    Url::parse("https://api.ebird.org/v2").expect("default eBird base URL must parse")
}

/// Loads and validates configuration from a YAML file.
///
/// The API key from the `EBIRD_API_KEY` environment variable is resolved
/// here, once, so the rest of the service only ever sees the injected value.
/// A missing key is not a load error: the fetch endpoint reports it
/// per-request instead.
pub fn load_from_file(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let contents = std::fs::read_to_string(path)?;
    let mut config: Config = serde_yaml::from_str(&contents)?;
    config.validate()?;

    if let Ok(key) = std::env::var("EBIRD_API_KEY") {
        config.ebird.api_key = Some(key);
    }

    Ok(config)
}
