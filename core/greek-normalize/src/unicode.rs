use icu_normalizer::{ComposingNormalizer, DecomposingNormalizer};

/// Canonical decomposition (NFD).
pub fn decompose(text: &str) -> String {
    DecomposingNormalizer::new_nfd().normalize(text)
}

/// Canonical composition (NFC).
pub fn compose(text: &str) -> String {
    ComposingNormalizer::new_nfc().normalize(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let decomposed = decompose("ᾍδης");
        assert_eq!(decomposed, "Α\u{0314}\u{0301}\u{0345}δης");
        assert_eq!(compose(&decomposed), "ᾍδης");
    }

    #[test]
    fn test_oxia_becomes_tonos() {
        // U+1F71 is canonically equivalent to U+03AC
        assert_eq!(compose("\u{1F71}"), "\u{03AC}");
    }
}
