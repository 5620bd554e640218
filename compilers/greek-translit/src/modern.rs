//! Modern Greek, following the Wiktionary conventions (WT:EL TR).
//!
//! Each rule is one pass over the whole text. A pass first collects its
//! matches, plus any lookahead they need, against the pass's input, and only
//! then builds the output.

use std::ops::Range;

use greek_normalize::compose;
use greek_protocol::{ACUTE, DIAERESIS};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::punctuation::question_marks;
use crate::tables;

static UPSILON_DIGRAPH: Lazy<Regex> = Lazy::new(|| Regex::new("[αεηΑΕΗ][υύ]").unwrap());
static NEXT_SOUND: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\s\p{P}]").unwrap());
static VOWEL_ETA: Lazy<Regex> = Lazy::new(|| Regex::new("[αεοωΑΕΟΩ][ηή]").unwrap());
static OMEGA_IOTA: Lazy<Regex> = Lazy::new(|| Regex::new("[ωΩ][ιί]").unwrap());
static OMICRON_UPSILON: Lazy<Regex> = Lazy::new(|| Regex::new("[οΟ][υύ]").unwrap());
static MU_PI: Lazy<Regex> = Lazy::new(|| Regex::new("(.?)([μΜ])π").unwrap());
static NU_TAU: Lazy<Regex> = Lazy::new(|| Regex::new("(.?)([νΝ])τ").unwrap());
static GAMMA_VELAR: Lazy<Regex> = Lazy::new(|| Regex::new("γ([γξχ])").unwrap());

/// υ is voiceless before these, and at the end of the text.
const VOICELESS: &str = "θκξπσςτφχψ";

/// Dialectal letters, replaced before anything else.
const DIALECTAL: &[(&str, &str)] = &[
    ("χ\u{030C}", "š"),
    ("Χ\u{030C}", "Š"),
    ("ά\u{0324}", "ä\u{0301}"),
    ("Ά\u{0324}", "Ä\u{0301}"),
    ("α\u{0324}", "ä"),
    ("Α\u{0324}", "Ä"),
    ("ό\u{0324}", "ö\u{0301}"),
    ("Ό\u{0324}", "Ö\u{0301}"),
    ("ο\u{0324}", "ö"),
    ("Ο\u{0324}", "Ö"),
];

/// Transliterates Modern Greek words or phrases into the Latin alphabet.
pub fn transliterate_modern(text: &str) -> String {
    let text = compose(text);
    let text = dialectal(&text);
    let text = question_marks(&text);
    let text = upsilon_digraphs(&text);
    let text = eta_after_vowel(&text);
    let text = rewrite_pairs(&text, &OMEGA_IOTA, |_, _, _| None, omega_iota);
    let text = rewrite_pairs(&text, &OMICRON_UPSILON, |_, _, _| None, omicron_upsilon);
    let text = word_initial_stop(&text, &MU_PI, "b", "B");
    let text = word_initial_stop(&text, &NU_TAU, "d", "D");
    let text = GAMMA_VELAR.replace_all(&text, "n$1");

    compose(&tables::substitute(&text, tables::modern))
}

struct Rewrite {
    range: Range<usize>,
    replacement: String,
}

fn splice(text: &str, rewrites: &[Rewrite]) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;

    for rewrite in rewrites {
        out.push_str(&text[last..rewrite.range.start]);
        out.push_str(&rewrite.replacement);
        last = rewrite.range.end;
    }
    out.push_str(&text[last..]);

    out
}

fn dialectal(text: &str) -> String {
    DIALECTAL
        .iter()
        .fold(text.to_string(), |text, &(from, to)| text.replace(from, to))
}

/// Rewrites every two-letter match of `pattern`. `with_context` sees the
/// letters and the byte offset right after the match; `plain` only the letters.
fn rewrite_pairs(
    text: &str,
    pattern: &Regex,
    with_context: impl Fn(char, char, usize) -> Option<String>,
    plain: impl Fn(char, char) -> Option<String>,
) -> String {
    let rewrites: Vec<Rewrite> = pattern
        .find_iter(text)
        .filter_map(|m| {
            let mut letters = m.as_str().chars();
            let (first, second) = (letters.next()?, letters.next()?);
            let replacement = with_context(first, second, m.end()).or_else(|| plain(first, second))?;
            Some(Rewrite {
                range: m.range(),
                replacement,
            })
        })
        .collect();

    splice(text, &rewrites)
}

/// αυ, ευ, ηυ: f before a voiceless sound or at the end, v otherwise.
/// Spaces and punctuation are skipped when looking for the next sound.
fn upsilon_digraphs(text: &str) -> String {
    let voicing = |vowel: char, upsilon: char, end: usize| {
        let following = NEXT_SOUND
            .find_at(text, end)
            .and_then(|m| m.as_str().chars().next());
        let voiceless = following.map_or(true, |c| VOICELESS.contains(c));

        let mut latin = tables::modern(vowel).unwrap_or_default().to_string();
        if upsilon == 'ύ' {
            latin.push(ACUTE);
        }
        latin.push(if voiceless { 'f' } else { 'v' });
        Some(latin)
    };

    rewrite_pairs(text, &UPSILON_DIGRAPH, voicing, |_, _| None)
}

/// η after a vowel is written ï so it is not read as part of a digraph.
fn eta_after_vowel(text: &str) -> String {
    rewrite_pairs(text, &VOWEL_ETA, |_, _, _| None, |vowel, eta| {
        let mut latin = tables::modern(vowel).unwrap_or_default().to_string();
        latin.push('i');
        latin.push(DIAERESIS);
        if eta == 'ή' {
            latin.push(ACUTE);
        }
        Some(latin)
    })
}

fn omega_iota(omega: char, iota: char) -> Option<String> {
    let latin = match (omega, iota) {
        ('ω', 'ι') => "oï",
        ('ω', 'ί') => "oḯ",
        ('Ω', 'ι') => "Oï",
        ('Ω', 'ί') => "Oḯ",
        _ => return None,
    };
    Some(latin.to_string())
}

fn omicron_upsilon(omicron: char, upsilon: char) -> Option<String> {
    let latin = match (omicron, upsilon) {
        ('ο', 'υ') => "ou",
        ('ο', 'ύ') => "oú",
        ('Ο', 'υ') => "Ou",
        ('Ο', 'ύ') => "Oú",
        _ => return None,
    };
    Some(latin.to_string())
}

/// μπ → b and ντ → d at the start of the text or after a space or hyphen.
/// The character before the nasal is part of the match, as in `(.?)`.
fn word_initial_stop(text: &str, pattern: &Regex, lower: &str, upper: &str) -> String {
    let rewrites: Vec<Rewrite> = pattern
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let before = caps.get(1).map_or("", |m| m.as_str());
            let nasal = caps.get(2)?.as_str();

            if !matches!(before, "" | " " | "-") {
                return None;
            }

            let stop = if nasal.chars().next().is_some_and(char::is_uppercase) {
                upper
            } else {
                lower
            };
            Some(Rewrite {
                range: whole.range(),
                replacement: format!("{before}{stop}"),
            })
        })
        .collect();

    splice(text, &rewrites)
}

#[cfg(test)]
mod tests {
    use super::*;
    use greek_normalize::decompose;

    fn check(cases: &[(&str, &str)]) {
        for (greek, latin) in cases {
            assert_eq!(transliterate_modern(greek), compose(latin), "transliterating {greek}");
        }
    }

    #[test]
    fn test_general() {
        check(&[
            ("Ποσειδώνας", "Poseidónas"),
            ("αγιοποιούμαι", "agiopoioúmai"),
            ("αγγελιάζομαι", "angeliázomai"),
            ("άμπελος", "ámpelos"),
        ]);
    }

    #[test]
    fn test_upsilon() {
        check(&[
            ("αυτός", "aftós"),
            ("πλευρά", "plevrá"),
            ("άνευ", "ánef"),
            ("άνευ προηγουμένου", "ánef proïgouménou"),
            ("αύριο", "ávrio"),
            ("αύξηση", "áfxisi"),
            ("ευημερία", "evimería"),
            ("καθαρεύουσα", "katharévousa"),
            ("υπάρχω", "ypárcho"),
            ("ευευ", "evef"),
        ]);
    }

    #[test]
    fn test_diaeresis_for_disambiguation() {
        check(&[("βοήθεια", "voḯtheia")]);
    }

    #[test]
    fn test_nasal_stop_clusters() {
        check(&[
            ("μπαίνω", "baíno"),
            ("Μπάρος", "Báros"),
            ("ντύνω", "dýno"),
            ("ντετέκτιβ", "detéktiv"),
            ("Ντιζόν", "Dizón"),
            ("εντάξει", "entáxei"),
            ("Αγγλία", "Anglía"),
            ("το μπαρ", "to bar"),
            ("μπλε-μπεζ", "ble-bez"),
        ]);
    }

    #[test]
    fn test_diphthongs_ending_in_iota() {
        check(&[
            ("είναι", "eínai"),
            ("οικείος", "oikeíos"),
            ("κορόιδο", "koróido"),
            ("κοροϊδεύω", "koroïdévo"),
        ]);
    }

    #[test]
    fn test_parenthesis() {
        check(&[("ψεύ(της)", "pséf(tis)")]);
    }

    #[test]
    fn test_omega_iota() {
        check(&[("νωί", "noḯ"), ("Ωιν", "Oïn")]);
    }

    #[test]
    fn test_dialectal_and_punctuation() {
        check(&[
            ("χ\u{030C}ουλιό", "šouli\u{00F3}"),
            ("α\u{0324}", "ä"),
            ("τι;", "ti?"),
            ("πού·", "poú;"),
        ]);
    }

    #[test]
    fn test_decomposed_input() {
        assert_eq!(transliterate_modern(&decompose("αυτός")), "aftós");
        assert_eq!(transliterate_modern(&decompose("βοήθεια")), compose("voḯtheia"));
    }

    #[test]
    fn test_lookahead_reads_pass_input() {
        // The second digraph's lookahead hits the end, not a rewritten letter.
        assert_eq!(upsilon_digraphs("ευευ"), "evef");
        assert_eq!(upsilon_digraphs("αυ, θ"), "af, θ");
    }
}
