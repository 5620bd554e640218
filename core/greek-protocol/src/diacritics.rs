use bitflags::bitflags;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// Combining marks used in storage order.
pub const MACRON: char = '\u{0304}';
pub const BREVE: char = '\u{0306}';
pub const ROUGH: char = '\u{0314}';
pub const SMOOTH: char = '\u{0313}';
pub const DIAERESIS: char = '\u{0308}';
pub const ACUTE: char = '\u{0301}';
pub const GRAVE: char = '\u{0300}';
pub const CIRCUMFLEX: char = '\u{0342}';
pub const SUBSCRIPT: char = '\u{0345}';

// Spacing and legacy forms.
pub const SPACING_MACRON: char = '\u{00AF}';
pub const MODIFIER_MACRON: char = '\u{02C9}';
pub const SPACING_BREVE: char = '\u{02D8}';
pub const LATIN_CIRCUMFLEX: char = '\u{0302}';
pub const CORONIS: char = '\u{0343}';
/// Actually "combining double breve below".
pub const UNDERTIE: char = '\u{035C}';

/// The nine combining diacritics that take part in storage ordering.
pub const COMBINING_DIACRITICS: [char; 9] = [
    MACRON, BREVE,
    ROUGH, SMOOTH, DIAERESIS,
    ACUTE, GRAVE, CIRCUMFLEX,
    SUBSCRIPT,
];

/// Character-class pattern over [`COMBINING_DIACRITICS`].
pub const COMBINING_DIACRITIC_CLASS: &str =
    "[\u{0304}\u{0306}\u{0314}\u{0313}\u{0308}\u{0301}\u{0300}\u{0342}\u{0345}]";

/// Every diacritic the data knows about, spacing forms included.
pub const ALL_DIACRITICS: [char; 15] = [
    MACRON, SPACING_MACRON, MODIFIER_MACRON, BREVE, SPACING_BREVE,
    ROUGH, SMOOTH, DIAERESIS, ACUTE, GRAVE, CIRCUMFLEX,
    LATIN_CIRCUMFLEX, CORONIS, SUBSCRIPT, UNDERTIE,
];

/// Character-class pattern over [`ALL_DIACRITICS`].
pub const DIACRITIC_CLASS: &str = "[\u{0304}\u{00AF}\u{02C9}\u{0306}\u{02D8}\u{0314}\u{0313}\u{0308}\u{0301}\u{0300}\u{0342}\u{0302}\u{0343}\u{0345}\u{035C}]";

pub fn is_combining_diacritic(c: char) -> bool {
    COMBINING_DIACRITICS.contains(&c)
}

pub fn is_diacritic(c: char) -> bool {
    ALL_DIACRITICS.contains(&c)
}

/// Precedence of a combining diacritic inside a run.
///
/// Storage order is `Length, Breathing, Accent, Subscript`.
/// Pronunciation order is `Breathing, Accent, Length, Subscript`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum Rank {
    /// Macron or breve
    Length = 1,
    /// Breathings or diaeresis
    Breathing = 2,
    /// Acute, grave or circumflex
    Accent = 3,
    /// Iota subscript
    Subscript = 4,
}

impl Rank {
    pub const PRONUNCIATION_ORDER: [Rank; 4] =
        [Rank::Breathing, Rank::Accent, Rank::Length, Rank::Subscript];

    pub const fn of(c: char) -> Option<Rank> {
        match c {
            MACRON | BREVE => Some(Rank::Length),
            ROUGH | SMOOTH | DIAERESIS => Some(Rank::Breathing),
            ACUTE | GRAVE | CIRCUMFLEX => Some(Rank::Accent),
            SUBSCRIPT => Some(Rank::Subscript),
            _ => None,
        }
    }

    /// Slot index used when laying a run out in storage order.
    pub const fn slot(self) -> usize {
        self as usize
    }
}

/// Per-diacritic precedence, exposed as data.
pub const PRECEDENCE: &[(char, Rank)] = &[
    (MACRON, Rank::Length),
    (BREVE, Rank::Length),
    (ROUGH, Rank::Breathing),
    (SMOOTH, Rank::Breathing),
    (DIAERESIS, Rank::Breathing),
    (ACUTE, Rank::Accent),
    (GRAVE, Rank::Accent),
    (CIRCUMFLEX, Rank::Accent),
    (SUBSCRIPT, Rank::Subscript),
];

bitflags! {
    /// Set of combining diacritics found on a letter, token or text.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
    pub struct Marks: u16 {
        const MACRON     = 1 << 0;
        const BREVE      = 1 << 1;
        const ROUGH      = 1 << 2;
        const SMOOTH     = 1 << 3;
        const DIAERESIS  = 1 << 4;
        const ACUTE      = 1 << 5;
        const GRAVE      = 1 << 6;
        const CIRCUMFLEX = 1 << 7;
        const SUBSCRIPT  = 1 << 8;

        // Rank groups
        const LENGTH = Self::MACRON.bits() | Self::BREVE.bits();
        const BREATHING = Self::ROUGH.bits() | Self::SMOOTH.bits() | Self::DIAERESIS.bits();
        const ACCENTS = Self::ACUTE.bits() | Self::GRAVE.bits() | Self::CIRCUMFLEX.bits();
    }
}

impl Marks {
    pub const fn of(c: char) -> Marks {
        match c {
            MACRON => Marks::MACRON,
            BREVE => Marks::BREVE,
            ROUGH => Marks::ROUGH,
            SMOOTH => Marks::SMOOTH,
            DIAERESIS => Marks::DIAERESIS,
            ACUTE => Marks::ACUTE,
            GRAVE => Marks::GRAVE,
            CIRCUMFLEX => Marks::CIRCUMFLEX,
            SUBSCRIPT => Marks::SUBSCRIPT,
            _ => Marks::empty(),
        }
    }

    /// Collects the combining diacritics present anywhere in `text`.
    /// Precomposed letters are not looked into; decompose first.
    pub fn scan(text: &str) -> Marks {
        text.chars().fold(Marks::empty(), |acc, c| acc | Marks::of(c))
    }
}

/// Spacing, modifier and precomposed-spacing forms mapped to combining sequences.
pub const LEGACY_CONVERSIONS: &[(char, &str)] = &[
    // spacing to combining
    (SPACING_MACRON, "\u{0304}"),
    (MODIFIER_MACRON, "\u{0304}"),
    (SPACING_BREVE, "\u{0306}"),
    // rough breathing, modifier letter reversed comma
    ('\u{1FFE}', "\u{0314}"),
    ('\u{02BD}', "\u{0314}"),
    // smooth breathing, modifier letter apostrophe, combining coronis
    ('\u{1FBF}', "\u{0313}"),
    ('\u{02BC}', "\u{0313}"),
    (CORONIS, "\u{0313}"),
    ('\u{00B4}', "\u{0301}"),
    ('`', "\u{0300}"),
    // perispomeni, modifier circumflex, combining Latin circumflex
    ('\u{1FC0}', "\u{0342}"),
    ('\u{02C6}', "\u{0342}"),
    (LATIN_CIRCUMFLEX, "\u{0342}"),
    // breathing + accent
    ('\u{1FCE}', "\u{0313}\u{0301}"),
    ('\u{1FCD}', "\u{0313}\u{0300}"),
    ('\u{1FCF}', "\u{0313}\u{0342}"),
    ('\u{1FDE}', "\u{0314}\u{0301}"),
    ('\u{1FDD}', "\u{0314}\u{0300}"),
    ('\u{1FDF}', "\u{0314}\u{0342}"),
    // diaeresis (+ accent)
    ('\u{00A8}', "\u{0308}"),
    ('\u{0385}', "\u{0308}\u{0301}"),
    ('\u{1FED}', "\u{0308}\u{0300}"),
    ('\u{1FC1}', "\u{0308}\u{0342}"),
];

pub fn legacy_conversion(c: char) -> Option<&'static str> {
    LEGACY_CONVERSIONS
        .iter()
        .find(|(legacy, _)| *legacy == c)
        .map(|(_, combining)| *combining)
}
