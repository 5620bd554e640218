use crate::diacritics::{
    is_combining_diacritic, ACUTE, BREVE, CIRCUMFLEX, DIAERESIS, GRAVE, MACRON, ROUGH, SMOOTH,
    SUBSCRIPT, UNDERTIE,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which of the two offglide vowels a letter is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Offglide {
    Iota,
    Upsilon,
}

/// Tokenizer-relevant class of a decomposed scalar value.
/// Anything without a class is an ordinary character (consonant, punctuation...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CharClass {
    /// α ε η ο ω
    Vowel,
    /// ι or υ, which can close a diphthong
    Offglide(Offglide),
    /// Length marks, diaeresis, accents, iota subscript
    Diacritic,
    /// Rough or smooth breathing
    Breathing,
    /// ρ, the only consonant allowed to carry a breathing
    Rho,
}

impl CharClass {
    pub const fn of(c: char) -> Option<CharClass> {
        match c {
            MACRON | BREVE | DIAERESIS | ACUTE | GRAVE | CIRCUMFLEX | SUBSCRIPT => {
                Some(CharClass::Diacritic)
            }
            ROUGH | SMOOTH => Some(CharClass::Breathing),
            'Α' | 'Ε' | 'Η' | 'Ο' | 'Ω' | 'α' | 'ε' | 'η' | 'ο' | 'ω' => Some(CharClass::Vowel),
            'Ι' | 'ι' => Some(CharClass::Offglide(Offglide::Iota)),
            'Υ' | 'υ' => Some(CharClass::Offglide(Offglide::Upsilon)),
            'Ρ' | 'ρ' => Some(CharClass::Rho),
            _ => None,
        }
    }

    pub const fn is_vowel(self) -> bool {
        matches!(self, CharClass::Vowel | CharClass::Offglide(_))
    }

    pub const fn is_offglide(self) -> bool {
        matches!(self, CharClass::Offglide(_))
    }

    pub const fn is_diacritic(self) -> bool {
        matches!(self, CharClass::Diacritic | CharClass::Breathing)
    }
}

pub fn classify(c: char) -> Option<CharClass> {
    CharClass::of(c)
}

pub const CONSONANTS: &str = "ΒβΓγΔδΖζΘθΚκΛλΜμΝνΞξΠπΡρΣσςΤτΦφΧχΨψ";
pub const CONSONANT_CLASS: &str = "[ΒβΓγΔδΖζΘθΚκΛλΜμΝνΞξΠπΡρΣσςΤτΦφΧχΨψ]";
pub const VOWELS: &str = "ΑαΕεΗηΙιΟοΥυΩω";
pub const VOWEL_CLASS: &str = "[ΑαΕεΗηΙιΟοΥυΩω]";
pub const VELARS: &str = "κγχξ";

/// Basic letters with and without diacritics, plus combining diacritics and undertie.
pub const WORD_CHARACTER_CLASS: &str = "[\u{0386}\u{0388}-\u{03CE}\u{03DC}\u{03DD}\u{1F00}-\u{1FBC}\u{1FC2}-\u{1FCC}\u{1FD0}-\u{1FDB}\u{1FE0}-\u{1FEC}\u{1FF2}-\u{1FFC}\u{0304}\u{0306}\u{0314}\u{0313}\u{0308}\u{0301}\u{0300}\u{0342}\u{0345}\u{035C}]";

pub fn is_consonant(c: char) -> bool {
    CONSONANTS.contains(c)
}

pub fn is_vowel(c: char) -> bool {
    VOWELS.contains(c)
}

pub fn is_velar(c: char) -> bool {
    VELARS.contains(c)
}

/// Basic Greek block, excluding its first line (ͰͱͲͳʹ͵Ͷͷͺͻͼͽ;Ϳ).
pub fn is_basic_greek(c: char) -> bool {
    ('\u{0380}'..='\u{03FF}').contains(&c)
}

pub fn is_word_character(c: char) -> bool {
    matches!(
        c,
        '\u{0386}'
            | '\u{0388}'..='\u{03CE}'
            | '\u{03DC}'
            | '\u{03DD}'
            | '\u{1F00}'..='\u{1FBC}'
            | '\u{1FC2}'..='\u{1FCC}'
            | '\u{1FD0}'..='\u{1FDB}'
            | '\u{1FE0}'..='\u{1FEC}'
            | '\u{1FF2}'..='\u{1FFC}'
            | UNDERTIE
    ) || is_combining_diacritic(c)
}
