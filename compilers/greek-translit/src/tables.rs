//! Static letter tables. Anything not listed passes through unchanged.

use greek_protocol::{BREVE, CIRCUMFLEX, ROUGH, SMOOTH, SUBSCRIPT};

/// Lower-case, decomposed Ancient Greek scalar to Latin.
/// Macron, diaeresis, grave and acute are left as they are.
pub fn ancient(c: char) -> Option<&'static str> {
    let latin = match c {
        // Vowels
        'α' => "a",
        'ε' => "e",
        'η' => "e\u{0304}",
        'ι' => "i",
        'ο' => "o",
        'υ' => "u",
        'ω' => "o\u{0304}",

        // Consonants
        'β' => "b",
        'γ' => "g",
        'δ' => "d",
        'ζ' => "z",
        'θ' => "th",
        'κ' => "k",
        'λ' => "l",
        'μ' => "m",
        'ν' => "n",
        'ξ' => "x",
        'π' => "p",
        'ρ' => "r",
        'σ' | 'ς' => "s",
        'τ' => "t",
        'φ' => "ph",
        'χ' => "kh",
        'ψ' => "ps",

        // Archaic letters
        'ϝ' => "w",
        'ϻ' => "ś",
        'ϙ' => "q",
        'ϡ' => "š",
        'ͷ' => "v",

        // Symbol variants that should not appear in running text
        'ϐ' => "b",
        'ϑ' => "th",
        'ϰ' => "k",
        'ϱ' => "r",
        'ϲ' => "s",
        'ϕ' => "ph",

        // Diacritics
        BREVE | SMOOTH | ROUGH => "",
        CIRCUMFLEX => "\u{0302}",
        SUBSCRIPT => "i",

        _ => return None,
    };
    Some(latin)
}

/// Composed Modern Greek scalar to Latin.
pub fn modern(c: char) -> Option<&'static str> {
    let latin = match c {
        'α' => "a",
        'ά' => "á",
        'β' => "v",
        'γ' => "g",
        'δ' => "d",
        'ε' => "e",
        'έ' => "é",
        'ζ' => "z",
        'η' => "i",
        'ή' => "í",
        'θ' => "th",
        'ι' => "i",
        'ί' => "í",
        'ϊ' => "ï",
        'ΐ' => "ḯ",
        'κ' => "k",
        'λ' => "l",
        'μ' => "m",
        'ν' => "n",
        'ξ' => "x",
        'ο' => "o",
        'ό' => "ó",
        'π' => "p",
        'ρ' => "r",
        'σ' | 'ς' => "s",
        'τ' => "t",
        'υ' => "y",
        'ύ' => "ý",
        'ϋ' => "ÿ",
        'ΰ' => "ÿ\u{0301}",
        'φ' => "f",
        'χ' => "ch",
        'ψ' => "ps",
        'ω' => "o",
        'ώ' => "ó",

        'Α' => "A",
        'Ά' => "Á",
        'Β' => "V",
        'Γ' => "G",
        'Δ' => "D",
        'Ε' => "E",
        'Έ' => "É",
        'Ζ' => "Z",
        'Η' => "I",
        'Ή' => "Í",
        'Θ' => "Th",
        'Ι' => "I",
        'Ί' => "Í",
        'Κ' => "K",
        'Λ' => "L",
        'Μ' => "M",
        'Ν' => "N",
        'Ξ' => "X",
        'Ο' => "O",
        'Ό' => "Ó",
        'Π' => "P",
        'Ρ' => "R",
        'Σ' => "S",
        'Τ' => "T",
        'Υ' => "Y",
        'Ύ' => "Ý",
        'Φ' => "F",
        'Χ' => "Ch",
        'Ψ' => "Ps",
        'Ω' => "O",
        'Ώ' => "Ó",

        // punctuation
        '·' => ";",

        _ => return None,
    };
    Some(latin)
}

/// Replaces every scalar found in `table`, copying the rest.
pub(crate) fn substitute(text: &str, table: fn(char) -> Option<&'static str>) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match table(c) {
            Some(latin) => out.push_str(latin),
            None => out.push(c),
        }
    }
    out
}
