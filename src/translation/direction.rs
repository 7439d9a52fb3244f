// Direction codes (`<source>_<target>`)

use crate::error::BridgeError;
use std::fmt;
use std::str::FromStr;

/// A source/target language pair such as `en_ru`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Direction {
    source: String,
    target: String,
}

impl Direction {
    pub fn new(source: &str, target: &str) -> Result<Self, BridgeError> {
        if !is_language_tag(source) || !is_language_tag(target) {
            return Err(BridgeError::Config(format!(
                "Malformed direction: {}_{}",
                source, target
            )));
        }
        Ok(Self {
            source: source.to_string(),
            target: target.to_string(),
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    /// The Helsinki-NLP OPUS-MT model trained for this pair,
    /// e.g. `Helsinki-NLP/opus-mt-en-ru`.
    pub fn opus_mt_model(&self) -> String {
        format!("Helsinki-NLP/opus-mt-{}-{}", self.source, self.target)
    }
}

fn is_language_tag(tag: &str) -> bool {
    !tag.is_empty() && tag.chars().all(|c| c.is_ascii_lowercase())
}

impl FromStr for Direction {
    type Err = BridgeError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        match code.split_once('_') {
            Some((source, target)) => Direction::new(source, target),
            None => Err(BridgeError::Config(format!("Malformed direction: {}", code))),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.source, self.target)
    }
}
