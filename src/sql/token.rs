//! Token model tying a `TokenKind` to its source span.
//!
//! A `Token` borrows its raw text from the SQL string passed to the scanner and
//! carries the canonical rendering the formatter uses for casing decisions.
//! Tokens are never mutated after emission.
use crate::sql::token_kind::TokenKind;
use std::borrow::Cow;

/// Non-fatal note attached to a best-effort token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Diagnostic {
    #[display("unterminated string literal")]
    UnterminatedString,
    #[display("unterminated quoted identifier")]
    UnterminatedIdentifier,
    #[display("unterminated block comment")]
    UnterminatedComment,
    #[display("unrecognized character")]
    UnrecognizedCharacter,
}

/// A lexical token with its inclusive start and exclusive end byte offsets.
///
/// Invariants:
/// - `end >= start`, both on `char` boundaries of the original input
/// - `raw == &input[start..end]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    /// Exact source text.
    pub raw: &'a str,
    /// Uppercased and whitespace-collapsed for reserved words, operators and
    /// parens; identical to `raw` otherwise.
    pub canonical: Cow<'a, str>,
    pub start: usize,
    pub end: usize,
    pub diagnostic: Option<Diagnostic>,
}

impl<'a> Token<'a> {
    /// Byte length of this token (`end - start`).
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// True if the token's length is zero (only `EndOfInput`).
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if the byte offset lies within this token's span.
    ///
    /// NOTE: End is exclusive, so `offset == end` returns false.
    pub fn contains(&self, offset: usize) -> bool {
        offset >= self.start && offset < self.end
    }

    pub const fn span(&self) -> (usize, usize) {
        (self.start, self.end)
    }

    pub fn is_trivia(&self) -> bool {
        self.kind.is_trivia()
    }

    pub fn is_reserved(&self) -> bool {
        self.kind.is_reserved()
    }

    /// True if this token has the given kind and canonical text, e.g.
    /// `is(TokenKind::Join, "LEFT JOIN")`.
    pub fn is(&self, kind: TokenKind, canonical: &str) -> bool {
        self.kind == kind && self.canonical == canonical
    }

    /// Returns the identifier text if this token is a quoted or unquoted identifier.
    pub fn ident(&self) -> Option<&'a str> {
        self.kind.is_identifier().then_some(self.raw)
    }

    /// Number of a `NumberedPlaceholder` (`$3` -> `3`).
    pub fn placeholder_index(&self) -> Option<u32> {
        if self.kind != TokenKind::NumberedPlaceholder {
            return None;
        }
        let mut chars = self.raw.chars();
        chars.next()?;
        chars.as_str().parse().ok()
    }
}
