/// Replaces a semicolon or Greek question mark with `?`, except directly
/// after an ASCII alphanumeric (so `&nbsp;` survives).
///
/// A converted mark consumes the character before it, so in `α;;` only the
/// first semicolon changes.
pub fn question_marks(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev: Option<char> = None;

    for c in text.chars() {
        let converts = matches!(c, ';' | '\u{037E}')
            && prev.is_some_and(|p| !p.is_ascii_alphanumeric());

        if converts {
            out.push('?');
            prev = None;
        } else {
            out.push(c);
            prev = Some(c);
        }
    }

    out
}

/// The middle dot works as semicolon or colon; semicolon is the more common.
pub fn middle_dots(text: &str) -> String {
    text.replace('·', ";")
}
