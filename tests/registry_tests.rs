// Direction registry tests

use async_trait::async_trait;
use langbridge::error::{BridgeError, Result};
use langbridge::translation::{Direction, DirectionRegistry, Translation, Translator};
use proptest::prelude::*;
use std::sync::Arc;

struct Named(&'static str);

#[async_trait]
impl Translator for Named {
    fn model_id(&self) -> &str {
        self.0
    }

    async fn translate(&self, text: &str) -> Result<Translation> {
        Ok(Translation::Text(format!("{}:{}", self.0, text)))
    }
}

const SUPPORTED: &[&str] = &["en_ru", "en_uk", "en_de", "de_en", "pl_en", "ru_en", "uk_en"];

fn registry() -> DirectionRegistry {
    let mut builder = DirectionRegistry::builder();
    for code in SUPPORTED {
        builder = builder
            .register(code.parse().unwrap(), Arc::new(Named(*code)))
            .unwrap();
    }
    builder.build().unwrap()
}

#[tokio::test]
async fn test_resolved_adapter_translates() {
    let translator = registry().resolve("pl_en").unwrap();
    let result = translator.translate("Cześć").await.unwrap();
    assert_eq!(result, Translation::Text("pl_en:Cześć".to_string()));
}

#[test]
fn test_overwrite_retains_later_registration() {
    let direction: Direction = "en_ru".parse().unwrap();
    let registry = DirectionRegistry::builder()
        .register_or_replace(direction.clone(), Arc::new(Named("opus-mt-en-es")))
        .register_or_replace(direction.clone(), Arc::new(Named("opus-mt-en-fr")))
        .register_or_replace(direction, Arc::new(Named("opus-mt-en-ru")))
        .build()
        .unwrap();

    assert_eq!(registry.directions(), vec!["en_ru"]);
    assert_eq!(registry.resolve("en_ru").unwrap().model_id(), "opus-mt-en-ru");
}

#[test]
fn test_strict_registration_flags_duplicates() {
    let result = DirectionRegistry::builder()
        .register("en_ru".parse().unwrap(), Arc::new(Named("a")))
        .and_then(|b| b.register("en_ru".parse().unwrap(), Arc::new(Named("b"))));

    assert!(matches!(result, Err(BridgeError::DuplicateDirection(_))));
}

proptest! {
    #[test]
    fn unregistered_codes_never_resolve(code in "\\PC{0,12}") {
        prop_assume!(!SUPPORTED.contains(&code.as_str()));
        let registry = registry();
        prop_assert!(registry.get(&code).is_none());
        prop_assert!(
            matches!(registry.resolve(&code), Err(BridgeError::InvalidDirection(ref c)) if c == &code)
        );
    }
}
