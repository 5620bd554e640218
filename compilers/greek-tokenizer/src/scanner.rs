use greek_protocol::{classify, CharClass, Offglide, DIAERESIS};
use tracing::{debug, debug_span, warn};

use crate::parser::split_diaeresis_host;
use crate::token::{Diagnostic, Span, Token, Tokenization};

/// Single forward pass over decomposed text. Tokens only ever grow at the end
/// of the list; the diaeresis split-back is the one place a finished token is
/// cut in two.
pub(crate) fn scan(decomposed: &str) -> Tokenization {
    let _span = debug_span!("scan", bytes = decomposed.len()).entered();

    let mut scanner = Scanner::default();
    for (offset, c) in decomposed.char_indices() {
        scanner.step(offset, c);
    }

    let tokenization = scanner.finish();
    debug!(
        tokens = tokenization.tokens.len(),
        diagnostics = tokenization.diagnostics.len()
    );
    tokenization
}

#[derive(Default)]
struct Scanner {
    tokens: Vec<String>,
    /// Vowels seen since the last diphthong, mark or consonant
    vowel_run: usize,
    prev: Option<(char, Option<CharClass>)>,
    diagnostics: Vec<Diagnostic>,
}

impl Scanner {
    fn step(&mut self, offset: usize, c: char) {
        let class = classify(c);

        match class {
            Some(class) if class.is_vowel() => self.vowel(c, class),
            Some(class) if class.is_diacritic() => self.diacritic(offset, c, class),
            _ => self.other(c),
        }

        self.prev = Some((c, class));
    }

    fn vowel(&mut self, c: char, class: CharClass) {
        self.vowel_run += 1;

        if let Some((_, prev_class)) = self.prev {
            let prev_is_vowel = prev_class.is_some_and(CharClass::is_vowel);
            let forms_diphthong = self.vowel_run == 2 && class.is_offglide() && prev_is_vowel;
            // υυ → υ, υ and ιυ → ι, υ
            let upsilon_after_offglide = prev_class.is_some_and(CharClass::is_offglide)
                && class == CharClass::Offglide(Offglide::Upsilon);
            // ιι → ι, ι
            let same_class = prev_class == Some(class);

            if !forms_diphthong || upsilon_after_offglide || same_class {
                self.start_token();
                if prev_is_vowel {
                    self.vowel_run = 1;
                }
            } else if self.vowel_run == 2 {
                self.vowel_run = 0;
            }
        }

        self.push(c);
    }

    fn diacritic(&mut self, offset: usize, c: char, class: CharClass) {
        self.vowel_run = 0;
        self.push(c);

        let prev_class = self.prev.and_then(|(_, class)| class);
        match prev_class {
            Some(prev) if prev.is_diacritic() || prev.is_vowel() => {
                if c == DIAERESIS {
                    self.split_before_diaeresis(offset);
                }
            }
            Some(CharClass::Rho) => {
                if class != CharClass::Breathing {
                    let host = self.prev.map_or('ρ', |(host, _)| host);
                    self.report(Diagnostic::MarkOnRho { host, mark: c, offset });
                }
            }
            _ => {
                let host = self.prev.map(|(host, _)| host);
                self.report(Diagnostic::IneligibleHost { host, mark: c, offset });
            }
        }
    }

    fn other(&mut self, c: char) {
        self.vowel_run = 0;
        if self.prev.is_some() {
            self.start_token();
        }
        self.push(c);
    }

    /// Split the diphthong in the current token: the first letter, then the
    /// second letter plus its diacritics.
    fn split_before_diaeresis(&mut self, offset: usize) {
        let Some(current) = self.tokens.last_mut() else {
            return;
        };

        match split_diaeresis_host(current) {
            Some((head, tail)) => {
                let (head, tail) = (head.to_owned(), tail.to_owned());
                *current = head;
                self.tokens.push(tail);
            }
            None => {
                let token = current.clone();
                self.report(Diagnostic::UnsplittableDiaeresis { token, offset });
            }
        }
    }

    fn start_token(&mut self) {
        self.tokens.push(String::new());
    }

    fn push(&mut self, c: char) {
        match self.tokens.last_mut() {
            Some(token) => token.push(c),
            None => self.tokens.push(c.to_string()),
        }
    }

    fn report(&mut self, diagnostic: Diagnostic) {
        match diagnostic {
            Diagnostic::UnsplittableDiaeresis { .. } => debug!(%diagnostic, "diaeresis left in place"),
            _ => warn!(%diagnostic, "misplaced diacritic"),
        }
        self.diagnostics.push(diagnostic);
    }

    fn finish(self) -> Tokenization {
        let mut start = 0;
        let tokens = self
            .tokens
            .into_iter()
            .map(|text| {
                let span = Span::new(start, start + text.len());
                start = span.end;
                Token { span, text }
            })
            .collect();

        Tokenization {
            tokens,
            diagnostics: self.diagnostics,
        }
    }
}
