//! Structured logging and trace utilities.
//!
//! This module configures the `tracing` ecosystem for the application and
//! provides a sanitizer that keeps inference API tokens out of log sinks.

use crate::config::LoggingConfig;
use crate::error::{BridgeError, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes the global tracing subscriber for the application.
///
/// Supports two output formats:
/// - `json`: Structured JSON logs for production ingestion.
/// - `pretty` (default): Human-readable, colorized output for development.
///
/// `RUST_LOG` takes precedence over the configured level.
pub fn init(config: &LoggingConfig) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.level));

    let registry = tracing_subscriber::registry().with(env_filter);
    let result = match config.format.as_str() {
        "json" => registry.with(tracing_subscriber::fmt::layer().json()).try_init(),
        _ => registry.with(tracing_subscriber::fmt::layer().pretty()).try_init(),
    };

    result.map_err(|e| BridgeError::Internal(format!("Failed to initialize logging: {}", e)))
}

/// Replaces credentials in `input` with a `[REDACTED]` placeholder.
///
/// Covers Hugging Face access tokens (`hf_...`) and the value following a
/// `Bearer ` prefix.
pub fn sanitize(input: &str) -> String {
    let mut result = input.to_string();
    redact_after(&mut result, "hf_", "[REDACTED_TOKEN]", 0);
    redact_after(&mut result, "Bearer ", "[REDACTED]", "Bearer ".len());
    result
}

/// Redact every occurrence of a token starting with `marker`, keeping the
/// first `keep` bytes of the marker itself.
fn redact_after(text: &mut String, marker: &str, placeholder: &str, keep: usize) {
    let mut from = 0;
    while let Some(pos) = text[from..].find(marker) {
        let start = from + pos + keep;
        let end = text[start..]
            .find(|c: char| c.is_whitespace() || c == '"' || c == '\'' || c == ',')
            .map(|i| start + i)
            .unwrap_or(text.len());
        if end > start {
            text.replace_range(start..end, placeholder);
            from = start + placeholder.len();
        } else {
            from += pos + marker.len();
        }
    }
}
