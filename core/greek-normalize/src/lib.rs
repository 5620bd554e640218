//! Diacritic normalization for Polytonic Greek.
//!
//! Everything here works on NFD text: base letters and combining marks as
//! separate scalar values. Inputs are decomposed on entry, so callers can pass
//! precomposed text.

pub mod pronunciation;
pub mod reorder;
pub mod standardize;
pub mod unicode;

pub use pronunciation::pronunciation_order;
pub use reorder::reorder_diacritics;
pub use standardize::standard_diacritics;
pub use unicode::{compose, decompose};

/// Splits `chars` into maximal runs, calling `on_run` for each run of
/// `is_member` chars of length >= 2 and copying everything else verbatim.
pub(crate) fn rewrite_runs(
    chars: &[char],
    is_member: impl Fn(char) -> bool,
    mut on_run: impl FnMut(&[char], &mut String),
) -> String {
    let mut out = String::with_capacity(chars.len() * 2);
    let mut i = 0;

    while i < chars.len() {
        if !is_member(chars[i]) {
            out.push(chars[i]);
            i += 1;
            continue;
        }

        let start = i;
        while i < chars.len() && is_member(chars[i]) {
            i += 1;
        }

        let run = &chars[start..i];
        if run.len() >= 2 {
            on_run(run, &mut out);
        } else {
            out.extend(run);
        }
    }

    out
}
