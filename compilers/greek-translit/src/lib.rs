pub mod ancient;
pub mod modern;
pub mod punctuation;
pub mod tables;

use greek_tokenizer::{Tokenizer, DEFAULT_CACHE_CAPACITY};

pub use crate::ancient::{transliterate_ancient, transliterate_ancient_cached};
pub use crate::modern::transliterate_modern;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Transliterates with the Polytonic (Ancient) rules when `polytonic` is
/// set, and with the Modern rules otherwise.
pub fn tr(text: &str, polytonic: bool) -> String {
    if polytonic {
        transliterate_ancient(text)
    } else {
        transliterate_modern(text)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Script {
    #[default]
    Polytonic,
    Modern,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct TranslitOptions {
    pub script: Script,
    /// Tokenizations kept for the Ancient engine; 0 disables caching.
    pub cache_capacity: usize,
}

impl Default for TranslitOptions {
    fn default() -> Self {
        Self {
            script: Script::default(),
            cache_capacity: DEFAULT_CACHE_CAPACITY,
        }
    }
}

/// Long-lived transliterator. The Ancient engine reuses one tokenizer
/// cache across calls.
#[derive(Debug)]
pub struct Transliterator {
    tokenizer: Tokenizer,
    script: Script,
}

impl Transliterator {
    pub fn new(options: TranslitOptions) -> Self {
        Self {
            tokenizer: Tokenizer::with_capacity(options.cache_capacity),
            script: options.script,
        }
    }

    pub fn script(&self) -> Script {
        self.script
    }

    /// Transliterates with the configured script.
    pub fn transliterate(&mut self, text: &str) -> String {
        match self.script {
            Script::Polytonic => self.ancient(text),
            Script::Modern => self.modern(text),
        }
    }

    pub fn ancient(&mut self, text: &str) -> String {
        transliterate_ancient_cached(&mut self.tokenizer, text)
    }

    pub fn modern(&self, text: &str) -> String {
        transliterate_modern(text)
    }

    pub fn tokenizer_mut(&mut self) -> &mut Tokenizer {
        &mut self.tokenizer
    }
}

impl Default for Transliterator {
    fn default() -> Self {
        Self::new(TranslitOptions::default())
    }
}
