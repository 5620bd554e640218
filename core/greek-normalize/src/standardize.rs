use greek_protocol::legacy_conversion;

use crate::unicode::decompose;

/// Converts spacing diacritics to combining ones, and nonstandard marks to
/// their Polytonic equivalents. Unmapped characters pass through.
pub fn standard_diacritics(text: &str) -> String {
    let decomposed = decompose(text);
    let mut converted = String::with_capacity(decomposed.len());

    for c in decomposed.chars() {
        match legacy_conversion(c) {
            Some(combining) => converted.push_str(combining),
            None => converted.push(c),
        }
    }

    // Inserted marks may sit out of canonical order (e.g. after a subscript).
    decompose(&converted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unicode::compose;
    use proptest::prelude::*;

    #[test]
    fn test_spacing_breve() {
        assert_eq!(compose(&standard_diacritics("ἄ˘κρος")), compose("ἄ̆κρος"));
    }

    #[test]
    fn test_precomposed_spacing_marks() {
        assert_eq!(standard_diacritics("α῞"), "α\u{0314}\u{0301}");
        assert_eq!(standard_diacritics("ι΅"), "ι\u{0308}\u{0301}");
        assert_eq!(standard_diacritics("ω῀"), "ω\u{0342}");
        assert_eq!(standard_diacritics("λογος"), "λογος");
    }

    #[test]
    fn test_marks_after_subscript_are_reordered() {
        assert_eq!(standard_diacritics("ᾳ´"), "α\u{0301}\u{0345}");
    }

    proptest! {
        #[test]
        fn test_idempotent(text in "[αεηιουωρλ Άᾷἁὕῤῥ˘¯´`῾᾿¨΅῀ˆ\u{0304}\u{0306}\u{0313}\u{0314}\u{0342}\u{0345}\u{0343}\u{0302}]{0,16}") {
            let once = standard_diacritics(&text);
            prop_assert_eq!(standard_diacritics(&once), once);
        }
    }
}
