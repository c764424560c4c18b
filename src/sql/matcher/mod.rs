//! Rule matchers, one per token category.
//!
//! Every matcher looks at the input from the cursor position and either claims
//! a non-empty span (returning a [`Match`]) or declines so the next matcher can
//! try. [`MATCHERS`] fixes the order: more specific rules come first so they
//! pre-empt the general ones (a `--` comment before the `-` operator, `<=`
//! before `<`, `CREATE TABLE AS` before `CREATE TABLE`).
pub mod comment;
pub mod number;
pub mod placeholder;
pub mod quoted;
pub mod symbol;
pub mod word;

use crate::*;

/// A matcher's claim: the token kind and where its span ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    pub kind: TokenKind,
    pub end: usize,
    pub diagnostic: Option<Diagnostic>,
}

impl Match {
    pub const fn new(kind: TokenKind, end: usize) -> Self {
        Self {
            kind,
            end,
            diagnostic: None,
        }
    }

    pub const fn with_diagnostic(mut self, diagnostic: Diagnostic) -> Self {
        self.diagnostic = Some(diagnostic);
        self
    }
}

pub type Matcher = fn(&Cursor<'_>, &DialectRuleSet) -> Option<Match>;

/// Matchers in priority order; the first one to claim a span wins.
pub const MATCHERS: [(&str, Matcher); 13] = [
    ("comment", comment::comment),
    ("string", quoted::string),
    ("quoted identifier", quoted::identifier),
    ("placeholder", placeholder::numbered_placeholder),
    ("phrase", word::phrase),
    ("keyword", word::keyword),
    ("function name", word::function_name),
    ("paren", symbol::paren),
    ("operator", symbol::operator),
    ("identifier", word::identifier),
    ("number", number::number),
    ("punctuation", symbol::punctuation),
    ("whitespace", symbol::whitespace),
];
