use thiserror::Error;

/// Byte range into the decomposed (NFD) text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// A letter or diphthong together with the marks attached to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub span: Span,
    pub text: String,
}

/// Something odd noticed while tokenizing. Never fatal: the tokens are
/// produced either way.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Diagnostic {
    #[error("{} cannot have the diacritic \u{25CC}{mark} on it (byte {offset})", host_label(.host))]
    IneligibleHost {
        /// `None` when the text starts with the mark
        host: Option<char>,
        mark: char,
        offset: usize,
    },

    #[error("{host} should not have the accent \u{25CC}{mark} on it (byte {offset})")]
    MarkOnRho { host: char, mark: char, offset: usize },

    #[error("diaeresis found, but the previous token {token} could not be split because it does not consist of two Basic Greek characters followed by other characters (byte {offset})")]
    UnsplittableDiaeresis { token: String, offset: usize },
}

fn host_label(host: &Option<char>) -> String {
    match host {
        Some(c) => format!("the character {c}"),
        None => "the start of the text".to_string(),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tokenization {
    pub tokens: Vec<Token>,
    pub diagnostics: Vec<Diagnostic>,
}

impl Tokenization {
    pub fn texts(&self) -> Vec<String> {
        self.tokens.iter().map(|t| t.text.clone()).collect()
    }

    pub fn into_texts(self) -> Vec<String> {
        self.tokens.into_iter().map(|t| t.text).collect()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
