use greek_protocol::{is_combining_diacritic, Rank, BREVE};

use crate::rewrite_runs;
use crate::unicode::decompose;

/// Arranges every run of two or more combining diacritics in storage order:
///
/// 1. macron or breve
/// 2. breathings or diaeresis
/// 3. acute, circumflex, or grave
/// 4. iota subscript
pub fn reorder_diacritics(text: &str) -> String {
    let chars: Vec<char> = decompose(text).chars().collect();
    rewrite_runs(&chars, is_combining_diacritic, storage_order)
}

/// Lays a run out by rank slot. A mark whose slot is taken is inserted next to
/// the occupant: a breve after it, anything else before it. Three or more
/// marks of mixed ranks sharing slots may come out only roughly ordered.
fn storage_order(run: &[char], out: &mut String) {
    let mut slots: Vec<Option<char>> = Vec::with_capacity(Rank::Subscript.slot() + run.len());

    for &mark in run {
        let Some(rank) = Rank::of(mark) else {
            continue;
        };
        let mut index = rank.slot();

        if let Some(Some(_)) = slots.get(index) {
            // Place breve after macron
            if mark == BREVE {
                index += 1;
            }
            slots.insert(index, Some(mark));
        } else {
            if slots.len() <= index {
                slots.resize(index + 1, None);
            }
            slots[index] = Some(mark);
        }
    }

    out.extend(slots.into_iter().flatten());
}
