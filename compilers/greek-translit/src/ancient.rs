//! Polytonic / Ancient Greek, following the Wiktionary conventions
//! (WT:GRC TR).

use greek_normalize::compose;
use greek_protocol::{is_velar, Marks, DIAERESIS, LATIN_CIRCUMFLEX, MACRON, SUBSCRIPT};
use greek_tokenizer::{tokenize, Tokenizer};
use tracing::trace;

use crate::punctuation::{middle_dots, question_marks};
use crate::tables;

/// Spacing rough breathing, which on its own stands for "h".
const LONE_ROUGH: &str = "\u{1FFE}";

/// Transliterates Polytonic Greek words or phrases into the Latin alphabet.
pub fn transliterate_ancient(text: &str) -> String {
    transliterate_with(text, tokenize)
}

/// Same as [`transliterate_ancient`], reusing `tokenizer`'s cache.
pub fn transliterate_ancient_cached(tokenizer: &mut Tokenizer, text: &str) -> String {
    transliterate_with(text, |prepared| tokenizer.tokenize(prepared))
}

fn transliterate_with(text: &str, split: impl FnOnce(&str) -> Vec<String>) -> String {
    if text == LONE_ROUGH {
        return "h".to_string();
    }

    let prepared = middle_dots(&question_marks(text));
    let tokens = split(&prepared);

    let output: String = tokens
        .iter()
        .enumerate()
        .map(|(i, token)| transliterate_token(&tokens, i, token))
        .collect();

    compose(&output)
}

fn transliterate_token(tokens: &[String], i: usize, token: &str) -> String {
    let lower = token.to_lowercase();
    let mut translit = tables::substitute(&lower, tables::ancient);

    if token == "γ" && tokens.get(i + 1).is_some_and(|next| starts_with_velar(next)) {
        translit = "n".to_string();
    } else if token == "ρ" && i > 0 && tokens[i - 1] == "ρ" {
        translit = "rh".to_string();
    } else if is_alpha_with_subscript(token) {
        translit = lengthen_alpha(&translit);
    }

    if Marks::scan(token).contains(Marks::ROUGH) {
        if token.starts_with(['Ρ', 'ρ']) {
            translit.push('h');
        } else {
            translit.insert(0, 'h');
        }
    }

    // The circumflex already marks length on η and ω.
    if has_macron_before_circumflex(&translit) {
        translit.retain(|c| c != MACRON);
    }

    if token != lower {
        translit = capitalize_first(&translit);
    }

    trace!(token, %translit);
    translit
}

fn starts_with_velar(token: &str) -> bool {
    token.chars().next().is_some_and(is_velar)
}

fn is_alpha_with_subscript(token: &str) -> bool {
    token.starts_with(['α', 'Α']) && token.ends_with(SUBSCRIPT)
}

/// Marks every `a` long: ᾳ → āi.
fn lengthen_alpha(translit: &str) -> String {
    let mut out = String::with_capacity(translit.len() + 2);
    for c in translit.chars() {
        out.push(c);
        if matches!(c, 'a' | 'A') {
            out.push(MACRON);
        }
    }
    out
}

/// Macron, optional diaeresis, then Latin circumflex.
fn has_macron_before_circumflex(translit: &str) -> bool {
    let chars: Vec<char> = translit.chars().collect();
    chars.iter().enumerate().any(|(i, &c)| {
        c == MACRON
            && match chars.get(i + 1) {
                Some(&LATIN_CIRCUMFLEX) => true,
                Some(&DIAERESIS) => chars.get(i + 2) == Some(&LATIN_CIRCUMFLEX),
                _ => false,
            }
    })
}

fn capitalize_first(translit: &str) -> String {
    let mut chars = translit.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(cases: &[(&str, &str)]) {
        for (greek, latin) in cases {
            assert_eq!(transliterate_ancient(greek), compose(latin), "transliterating {greek}");
        }
    }

    #[test]
    fn test_general() {
        check(&[
            ("λόγος", "lógos"),
            ("σφίγξ", "sphínx"),
            ("ϝάναξ", "wánax"),
            ("οἷαι", "hoîai"),
        ]);
    }

    #[test]
    fn test_upsilon() {
        check(&[
            ("ταῦρος", "taûros"),
            ("νηῦς", "nēûs"),
            ("σῦς", "sûs"),
            ("ὗς", "hûs"),
            ("γυῖον", "guîon"),
            ("ἀναῡ̈τέω", "anaṻtéō"),
            ("δαΐφρων", "daḯphrōn"),
        ]);
    }

    #[test]
    fn test_vowel_length() {
        check(&[
            ("τῶν", "tôn"),
            ("τοὶ", "toì"),
            ("τῷ", "tôi"),
            ("τούτῳ", "toútōi"),
            ("σοφίᾳ", "sophíāi"),
            ("μᾱ̆νός", "mānós"),
        ]);
    }

    #[test]
    fn test_rough_breathing() {
        check(&[
            ("ὁ", "ho"),
            ("οἱ", "hoi"),
            ("εὕρισκε", "heúriske"),
            ("ὑϊκός", "huïkós"),
            ("πυρρός", "purrhós"),
            ("ῥέω", "rhéō"),
            ("σάἁμον", "sáhamon"),
        ]);
    }

    #[test]
    fn test_capitals() {
        check(&[
            ("Ὀδυσσεύς", "Odusseús"),
            ("Εἵλως", "Heílōs"),
            ("ᾍδης", "Hā́idēs"),
            ("ἡ Ἑλήνη", "hē Helḗnē"),
        ]);
    }

    #[test]
    fn test_punctuation() {
        check(&[
            (
                "ἔχεις μοι εἰπεῖν, ὦ Σώκρατες, ἆρα διδακτὸν ἡ ἀρετή;",
                "ékheis moi eipeîn, ô Sṓkrates, âra didaktòn hē aretḗ?",
            ),
            (
                "τί τηνικάδε ἀφῖξαι, ὦ Κρίτων; ἢ οὐ πρῲ ἔτι ἐστίν;",
                "tí tēnikáde aphîxai, ô Krítōn? ḕ ou prṑi éti estín?",
            ),
            (
                "τούτων φωνήεντα μέν ἐστιν ἑπτά· α ε η ι ο υ ω.",
                "toútōn phōnḗenta mén estin heptá; a e ē i o u ō.",
            ),
            ("πήγ(νῡμῐ)", "pḗg(nūmi)"),
        ]);
    }

    #[test]
    fn test_html_entities() {
        check(&[
            ("καλός&nbsp;καὶ&nbsp;ἀγαθός", "kalós&nbsp;kaì&nbsp;agathós"),
            ("καλός&#32;καὶ&#32;ἀγαθός", "kalós&#32;kaì&#32;agathós"),
        ]);
    }

    #[test]
    fn test_just_h() {
        assert_eq!(transliterate_ancient("῾"), "h");
    }

    #[test]
    fn test_known_shortcomings() {
        // All-caps words only get their first letter per token capitalized.
        assert_ne!(transliterate_ancient("ΙΧΘΥΣ"), "IKHTHUS");
    }

    #[test]
    fn test_cached_matches_uncached() {
        let mut tokenizer = Tokenizer::new();
        for word in ["λόγος", "οἷαι", "ᾍδης", "λόγος"] {
            assert_eq!(
                transliterate_ancient_cached(&mut tokenizer, word),
                transliterate_ancient(word)
            );
        }
        assert_eq!(tokenizer.cached_len(), 3);
    }

    #[test]
    fn test_helpers() {
        assert!(has_macron_before_circumflex("o\u{0304}\u{0302}"));
        assert!(has_macron_before_circumflex("e\u{0304}\u{0308}\u{0302}"));
        assert!(!has_macron_before_circumflex("e\u{0304}u\u{0302}"));
        assert_eq!(lengthen_alpha("ai"), "a\u{0304}i");
        assert_eq!(capitalize_first("ha\u{0304}"), "Ha\u{0304}");
        assert_eq!(capitalize_first(""), "");
    }
}
