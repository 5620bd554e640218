pub mod cache;
pub mod parser;
pub mod token;
mod scanner;

use std::sync::Arc;

use greek_normalize::decompose;

use crate::cache::LruCache;
pub use crate::token::{Diagnostic, Span, Token, Tokenization};

pub const DEFAULT_CACHE_CAPACITY: usize = 1024;

/// Breaks text into letters and diphthongs with their diacritics, reporting
/// misplaced marks alongside the tokens.
pub fn analyze(text: &str) -> Tokenization {
    scanner::scan(&decompose(text))
}

/// Breaks text into meaningful "tokens": individual letters or diphthongs
/// with their diacritics. Tokens are in NFD.
pub fn tokenize(text: &str) -> Vec<String> {
    analyze(text).into_texts()
}

/// Tokenizer that remembers recent results.
///
/// Tokenization is a pure function of the decomposed text, so cached results
/// are indistinguishable from fresh ones. The cache belongs to this instance.
#[derive(Debug)]
pub struct Tokenizer {
    cache: LruCache<Arc<Tokenization>>,
}

impl Tokenizer {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CACHE_CAPACITY)
    }

    /// A capacity of zero disables caching.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cache: LruCache::new(capacity),
        }
    }

    pub fn analyze(&mut self, text: &str) -> Arc<Tokenization> {
        let decomposed = decompose(text);
        if let Some(hit) = self.cache.get(&decomposed) {
            return hit;
        }

        let tokenization = Arc::new(scanner::scan(&decomposed));
        self.cache.insert(decomposed, Arc::clone(&tokenization));
        tokenization
    }

    pub fn tokenize(&mut self, text: &str) -> Vec<String> {
        self.analyze(text).texts()
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cached_len(&self) -> usize {
        self.cache.len()
    }

    pub fn capacity(&self) -> usize {
        self.cache.capacity()
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}
