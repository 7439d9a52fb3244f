// Direction registry: direction code -> translation adapter

use super::{Direction, Translator};
use crate::error::{BridgeError, Result};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::warn;

/// Immutable mapping from direction code to the adapter serving it.
///
/// Built once at startup through [`RegistryBuilder`] and shared read-only
/// across request handlers.
pub struct DirectionRegistry {
    adapters: HashMap<String, Arc<dyn Translator>>,
}

impl DirectionRegistry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Look up the adapter for a direction code.
    pub fn get(&self, code: &str) -> Option<&Arc<dyn Translator>> {
        self.adapters.get(code)
    }

    /// Look up the adapter for a direction code, failing with
    /// [`BridgeError::InvalidDirection`] when it is not registered.
    pub fn resolve(&self, code: &str) -> Result<Arc<dyn Translator>> {
        self.get(code)
            .cloned()
            .ok_or_else(|| BridgeError::InvalidDirection(code.to_string()))
    }

    /// Registered direction codes, sorted.
    pub fn directions(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.adapters.keys().map(String::as_str).collect();
        codes.sort_unstable();
        codes
    }

    pub fn len(&self) -> usize {
        self.adapters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adapters.is_empty()
    }
}

#[derive(Default)]
pub struct RegistryBuilder {
    adapters: HashMap<String, Arc<dyn Translator>>,
}

impl RegistryBuilder {
    /// Register an adapter. A direction may only be registered once.
    pub fn register(mut self, direction: Direction, adapter: Arc<dyn Translator>) -> Result<Self> {
        let code = direction.to_string();
        if self.adapters.contains_key(&code) {
            return Err(BridgeError::DuplicateDirection(code));
        }
        self.adapters.insert(code, adapter);
        Ok(self)
    }

    /// Register an adapter, replacing any earlier one for the same direction.
    ///
    /// Startup wiring goes through [`RegistryBuilder::register`]; this keeps
    /// the last-registration-wins lookup available for callers that layer
    /// adapters on purpose, and pins that behaviour in tests.
    pub fn register_or_replace(mut self, direction: Direction, adapter: Arc<dyn Translator>) -> Self {
        let code = direction.to_string();
        if let Some(previous) = self.adapters.insert(code.clone(), adapter) {
            warn!("Direction {} re-registered, dropping {}", code, previous.model_id());
        }
        self
    }

    pub fn build(self) -> Result<DirectionRegistry> {
        if self.adapters.is_empty() {
            return Err(BridgeError::Config(
                "No translation directions configured".to_string(),
            ));
        }
        Ok(DirectionRegistry {
            adapters: self.adapters,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::translation::Translation;
    use async_trait::async_trait;

    struct Fixed(&'static str);

    #[async_trait]
    impl Translator for Fixed {
        fn model_id(&self) -> &str {
            self.0
        }

        async fn translate(&self, _text: &str) -> Result<Translation> {
            Ok(Translation::Text(self.0.to_string()))
        }
    }

    fn direction(code: &str) -> Direction {
        code.parse().unwrap()
    }

    #[test]
    fn test_resolve_registered_direction() {
        let registry = DirectionRegistry::builder()
            .register(direction("en_ru"), Arc::new(Fixed("a")))
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(registry.resolve("en_ru").unwrap().model_id(), "a");
        assert!(registry.get("ru_en").is_none());
        assert!(matches!(
            registry.resolve("xx_yy"),
            Err(BridgeError::InvalidDirection(code)) if code == "xx_yy"
        ));
    }

    #[test]
    fn test_register_rejects_duplicates() {
        let result = DirectionRegistry::builder()
            .register(direction("en_ru"), Arc::new(Fixed("a")))
            .unwrap()
            .register(direction("en_ru"), Arc::new(Fixed("b")));

        assert!(matches!(result, Err(BridgeError::DuplicateDirection(code)) if code == "en_ru"));
    }

    #[test]
    fn test_register_or_replace_keeps_last() {
        let registry = DirectionRegistry::builder()
            .register_or_replace(direction("en_ru"), Arc::new(Fixed("es")))
            .register_or_replace(direction("en_ru"), Arc::new(Fixed("fr")))
            .register_or_replace(direction("en_ru"), Arc::new(Fixed("ru")))
            .build()
            .unwrap();

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.resolve("en_ru").unwrap().model_id(), "ru");
    }

    #[test]
    fn test_empty_registry_is_an_error() {
        assert!(DirectionRegistry::builder().build().is_err());
    }

    #[test]
    fn test_directions_sorted() {
        let registry = DirectionRegistry::builder()
            .register(direction("ru_en"), Arc::new(Fixed("a")))
            .unwrap()
            .register(direction("de_en"), Arc::new(Fixed("b")))
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(registry.directions(), vec!["de_en", "ru_en"]);
    }
}
