//! Configuration data structures for the langbridge gateway.
//!
//! This module defines the schema for the application settings: the HTTP
//! listener, the upstream model endpoint and direction catalogue, the origin
//! filter, and logging.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The root configuration object for the application.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// HTTP server settings (host, port).
    #[serde(default)]
    pub server: ServerConfig,

    /// Upstream model endpoint and the directions served.
    #[serde(default)]
    pub models: ModelsConfig,

    /// Origin filter settings.
    #[serde(default)]
    pub access: AccessConfig,

    /// Logging and observability settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Settings for the built-in HTTP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The IP address or hostname the server should bind to.
    /// Default: `0.0.0.0`
    #[serde(default = "default_host")]
    pub host: String,

    /// The port number the server should listen on.
    /// Default: `8000`
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Settings for the pretrained translation models.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelsConfig {
    /// Base URL of a Hugging Face Inference compatible endpoint.
    /// Default: `https://api-inference.huggingface.co`
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Bearer token sent to the inference endpoint, if any.
    #[serde(default)]
    pub api_token: Option<String>,

    /// Per-call timeout in seconds.
    /// Default: `120`
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,

    /// Direction codes to serve, e.g. `en_ru`.
    #[serde(default = "default_directions")]
    pub directions: Vec<String>,

    /// Model id to use for a direction instead of the OPUS-MT default.
    #[serde(default)]
    pub overrides: HashMap<String, String>,
}

/// Settings for the origin filter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessConfig {
    /// Whether inbound requests are filtered by client address at all.
    /// Default: `false`
    #[serde(default)]
    pub enabled: bool,

    /// Add the IPv4 addresses of the host's own network interfaces,
    /// enumerated once at startup.
    /// Default: `true`
    #[serde(default = "default_true")]
    pub allow_local_interfaces: bool,

    /// Additional addresses or CIDR ranges, e.g. `10.0.0.0/8`.
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

/// Settings for application logging and output format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Minimum log level (`trace`, `debug`, `info`, `warn`, `error`).
    /// Default: `info`
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format for logs (`pretty`, `json`).
    /// Default: `pretty`
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for ModelsConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            api_token: None,
            timeout_seconds: default_timeout(),
            directions: default_directions(),
            overrides: HashMap::new(),
        }
    }
}

impl Default for AccessConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            allow_local_interfaces: true,
            allowed_origins: Vec::new(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

/// Directions served out of the box.
pub const DEFAULT_DIRECTIONS: &[&str] = &[
    "en_ru", "en_uk", "en_de", "en_es", "en_fr", "de_en", "pl_en", "ru_en", "uk_en", "es_en",
];

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_api_base_url() -> String {
    "https://api-inference.huggingface.co".to_string()
}

fn default_timeout() -> u64 {
    120
}

fn default_directions() -> Vec<String> {
    DEFAULT_DIRECTIONS.iter().map(|d| d.to_string()).collect()
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}
