use crate::sql::matcher::Match;
use crate::*;
use itertools::Itertools;
use std::borrow::Cow;

/// Build the token for a claimed span `start..m.end` of `input`.
///
/// Reserved words, parens and operators get a canonical form: uppercased,
/// with every internal whitespace run collapsed to one space. Everything else
/// keeps its raw text.
pub fn emit<'a>(input: &'a str, start: usize, m: Match) -> Token<'a> {
    let raw = &input[start..m.end];
    let canonical = if m.kind.normalizes() {
        canonicalize(raw)
    } else {
        Cow::Borrowed(raw)
    };
    Token {
        kind: m.kind,
        raw,
        canonical,
        start,
        end: m.end,
        diagnostic: m.diagnostic,
    }
}

/// Uppercase `raw` and collapse whitespace runs to one space, borrowing when
/// nothing changes.
pub fn canonicalize(raw: &str) -> Cow<'_, str> {
    let single_spaced = raw.split(' ').all(|w| !w.is_empty() && !w.contains(char::is_whitespace));
    let upper = !raw.chars().any(char::is_lowercase);
    if single_spaced && upper {
        return Cow::Borrowed(raw);
    }
    Cow::Owned(raw.split_whitespace().map(str::to_uppercase).join(" "))
}
