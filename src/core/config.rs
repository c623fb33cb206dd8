//! Configuration management for the MCP server.
//!
//! Configuration is read once at startup (environment variables, optionally
//! seeded from a `.env` file) and then handed to the components that need it.
//! Nothing reads the environment after [`Config::from_env`] returns.

use super::error::{Error, Result};
use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Environment variable holding the Google Maps Platform API key.
pub const API_KEY_ENV: &str = "GOOGLE_MAPS_API_KEY";

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Google Maps Platform access configuration.
    pub google: GoogleConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// Access configuration for the Google Maps Platform APIs.
///
/// The base URLs are overridable so the tools can be pointed at a proxy or a
/// local mock server.
#[derive(Clone, Serialize, Deserialize)]
pub struct GoogleConfig {
    /// API key appended as `key=` to every request.
    pub api_key: Option<String>,

    /// Host serving the classic Maps web services (Distance Matrix, Places, Time Zone).
    pub maps_base_url: String,

    /// Host serving the Roads API.
    pub roads_base_url: String,

    /// Host serving the Weather API.
    pub weather_base_url: String,

    /// Timeout applied to every upstream request. `None` disables it.
    pub request_timeout_secs: Option<u64>,
}

/// Custom Debug implementation to redact the API key from logs.
impl std::fmt::Debug for GoogleConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoogleConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("maps_base_url", &self.maps_base_url)
            .field("roads_base_url", &self.roads_base_url)
            .field("weather_base_url", &self.weather_base_url)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .finish()
    }
}

impl GoogleConfig {
    /// The configured request timeout as a [`Duration`].
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    /// Configuration pointing every service at the same base URL.
    ///
    /// Handy for tests running against a single mock server.
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            api_key: Some(api_key.into()),
            maps_base_url: base_url.clone(),
            roads_base_url: base_url.clone(),
            weather_base_url: base_url,
            ..Self::default()
        }
    }
}

impl Default for GoogleConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            maps_base_url: "https://maps.googleapis.com".to_string(),
            roads_base_url: "https://roads.googleapis.com".to_string(),
            weather_base_url: "https://weather.googleapis.com".to_string(),
            request_timeout_secs: Some(30),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "maps-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: TransportConfig::default(),
            google: GoogleConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Server settings use the `MCP_` prefix (`MCP_SERVER_NAME`,
    /// `MCP_LOG_LEVEL`, ...). The API key is read from `GOOGLE_MAPS_API_KEY`.
    /// Runs before logging is initialized, so nothing is logged here: see
    /// [`Config::startup_warnings`].
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        config.transport = TransportConfig::from_env();

        config.google.api_key = std::env::var(API_KEY_ENV)
            .ok()
            .filter(|key| !key.is_empty());

        if let Ok(url) = std::env::var("MCP_MAPS_BASE_URL") {
            config.google.maps_base_url = url;
        }
        if let Ok(url) = std::env::var("MCP_ROADS_BASE_URL") {
            config.google.roads_base_url = url;
        }
        if let Ok(url) = std::env::var("MCP_WEATHER_BASE_URL") {
            config.google.weather_base_url = url;
        }

        if let Ok(timeout) = std::env::var("MCP_REQUEST_TIMEOUT_SECS") {
            config.google.request_timeout_secs = match timeout.trim().parse::<u64>() {
                Ok(0) => None,
                Ok(secs) => Some(secs),
                Err(_) => {
                    return Err(Error::config(format!(
                        "MCP_REQUEST_TIMEOUT_SECS must be a number of seconds, got '{}'",
                        timeout
                    )));
                }
            };
        }

        Ok(config)
    }

    /// Problems worth reporting once logging is up.
    ///
    /// A missing key is not fatal: requests go out with an empty key and the
    /// upstream rejection comes back through the normal error path.
    pub fn startup_warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        if self.google.api_key.is_none() {
            warnings.push(format!(
                "{} not set - requests will be sent without a valid key",
                API_KEY_ENV
            ));
        }
        warnings
    }
}
