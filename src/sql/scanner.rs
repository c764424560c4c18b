use crate::sql::{
    emitter::emit,
    matcher::{MATCHERS, Match},
};
use crate::*;

/// Scan one token at `offset` and return it with the offset just past it.
///
/// At end of input this yields a zero-length [`TokenKind::EndOfInput`] and
/// returns `offset` unchanged. A character no rule claims becomes a
/// one-character [`TokenKind::Unknown`] token with
/// [`Diagnostic::UnrecognizedCharacter`], so scanning always advances.
///
/// # Panics
///
/// If `offset` is past the end of `input` or not on a `char` boundary.
pub fn next_token<'a>(input: &'a str, rules: &DialectRuleSet, offset: usize) -> (Token<'a>, usize) {
    let cursor = Cursor::new(input, offset);
    if cursor.is_eof() {
        return (emit(input, offset, Match::new(TokenKind::EndOfInput, offset)), offset);
    }

    let m = MATCHERS
        .iter()
        .find_map(|(_, matcher)| matcher(&cursor, rules).filter(|m| m.end > offset))
        .unwrap_or_else(|| {
            Match::new(TokenKind::Unknown, cursor.next_boundary(offset))
                .with_diagnostic(Diagnostic::UnrecognizedCharacter)
        });
    (emit(input, offset, m), m.end)
}
