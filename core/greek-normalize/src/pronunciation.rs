use greek_protocol::{is_diacritic, Marks, Rank, BREVE, MACRON, SPACING_BREVE, SPACING_MACRON};

use crate::rewrite_runs;
use crate::standardize::standard_diacritics;
use crate::unicode::compose;

/// Places diacritics in pronunciation order:
///
/// 1. breathings or diaeresis
/// 2. acute, circumflex, or grave
/// 3. macron or breve
/// 4. iota subscript
///
/// Length marks are turned into spacing marks so they display after the
/// accented letter. Returns composed (NFC) text.
pub fn pronunciation_order(text: &str) -> String {
    let text = standard_diacritics(text);

    if !Marks::scan(&text).intersects(Marks::ACCENTS) {
        return compose(&text);
    }

    let chars: Vec<char> = text.chars().collect();
    let ordered = rewrite_runs(&chars, is_diacritic, |run, out| {
        for rank in Rank::PRONUNCIATION_ORDER {
            if let Some(&mark) = run.iter().find(|c| Rank::of(**c) == Some(rank)) {
                out.push(mark);
            }
        }
    });

    let spaced: String = ordered
        .chars()
        .map(|c| match c {
            MACRON => SPACING_MACRON,
            BREVE => SPACING_BREVE,
            other => other,
        })
        .collect();

    compose(&spaced)
}
