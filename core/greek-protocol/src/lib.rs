#![cfg_attr(not(any(feature = "std", test)), no_std)] // Tables only, usable from WASM/embedded

pub mod diacritics;
pub mod letters;

// Re-export core types for convenience
pub use diacritics::*;
pub use letters::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_combining_diacritic_has_a_rank() {
        for mark in COMBINING_DIACRITICS {
            assert!(Rank::of(mark).is_some(), "missing rank for U+{:04X}", mark as u32);
            assert!(is_combining_diacritic(mark));
            assert!(is_diacritic(mark));
        }
    }

    #[test]
    fn test_class_patterns_list_their_members() {
        for mark in COMBINING_DIACRITICS {
            assert!(COMBINING_DIACRITIC_CLASS.contains(mark));
        }
        for mark in ALL_DIACRITICS {
            assert!(DIACRITIC_CLASS.contains(mark));
        }
        assert!(CONSONANT_CLASS.starts_with('[') && CONSONANT_CLASS.ends_with(']'));
        assert!(VOWEL_CLASS.contains('ω'));
    }

    #[test]
    fn test_precedence_table_matches_rank() {
        assert_eq!(PRECEDENCE.len(), COMBINING_DIACRITICS.len());
        for (mark, rank) in PRECEDENCE {
            assert_eq!(Rank::of(*mark), Some(*rank));
        }
    }

    #[test]
    fn test_offglides_are_distinct() {
        let iota = classify('ι');
        let upsilon = classify('υ');
        assert!(iota.is_some_and(CharClass::is_offglide));
        assert!(upsilon.is_some_and(CharClass::is_offglide));
        assert_ne!(iota, upsilon);
        assert_eq!(classify('Υ'), Some(CharClass::Offglide(Offglide::Upsilon)));
    }
}
