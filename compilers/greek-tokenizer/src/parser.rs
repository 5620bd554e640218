use greek_protocol::is_basic_greek;
use nom::{
    character::complete::satisfy,
    combinator::{recognize, rest, verify},
    sequence::pair,
    IResult,
};

/// Splits a token that just received a diaeresis into the first letter and
/// the second letter plus everything after it.
///
/// Matches only "Basic Greek letter, Basic Greek letter, at least one more
/// scalar". A vowel that already carries a mark was put in its own token
/// earlier, so e.g. Περικλῆῐ̈ arrives here as ῐ̈ alone and is left intact.
pub fn split_diaeresis_host(token: &str) -> Option<(&str, &str)> {
    let parsed: IResult<&str, (&str, &str)> = pair(
        recognize(satisfy(is_basic_greek)),
        recognize(pair(
            satisfy(is_basic_greek),
            verify(rest, |tail: &str| !tail.is_empty()),
        )),
    )(token);

    parsed.ok().map(|(_, parts)| parts)
}
