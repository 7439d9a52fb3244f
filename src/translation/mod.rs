//! Translation adapters and the direction registry.
//!
//! Every pretrained model sits behind the [`Translator`] trait, and the
//! [`DirectionRegistry`] maps direction codes such as `en_ru` to the adapter
//! serving them. Adapters are built once at startup by [`build_registry`] and
//! never mutated afterwards.

mod direction;
mod marian;
mod registry;

pub use direction::Direction;
pub use marian::{http_client, MarianAdapter};
pub use registry::{DirectionRegistry, RegistryBuilder};

use crate::config::ModelsConfig;
use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

/// Output of a translation: a single string, or one string per generated
/// sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Translation {
    Text(String),
    Segments(Vec<String>),
}

impl Translation {
    /// True when no non-blank text was produced.
    pub fn is_empty(&self) -> bool {
        match self {
            Translation::Text(text) => text.trim().is_empty(),
            Translation::Segments(segments) => segments.iter().all(|s| s.trim().is_empty()),
        }
    }
}

/// A single pretrained model: text in, translated text out.
#[async_trait]
pub trait Translator: Send + Sync {
    /// Identifier of the underlying model, used for logging.
    fn model_id(&self) -> &str;

    async fn translate(&self, text: &str) -> Result<Translation>;
}

/// Build one [`MarianAdapter`] per configured direction and collect them into
/// a registry.
pub fn build_registry(config: &ModelsConfig) -> Result<DirectionRegistry> {
    let client = http_client(config)?;
    let mut builder = DirectionRegistry::builder();

    for code in &config.directions {
        let direction: Direction = code.parse()?;
        let model_id = config
            .overrides
            .get(code)
            .cloned()
            .unwrap_or_else(|| direction.opus_mt_model());

        info!("Registering {} -> {}", direction, model_id);
        let adapter = MarianAdapter::new(client.clone(), config, model_id);
        builder = builder.register(direction, Arc::new(adapter))?;
    }

    builder.build()
}
