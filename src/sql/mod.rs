//! Dialect-driven SQL scanning.
//!
//! This module turns SQL text into a lossless stream of typed tokens using the
//! rules in a [`DialectRuleSet`](crate::DialectRuleSet). It never fails: input
//! that no rule recognizes still becomes tokens, flagged with a [`Diagnostic`].
//!
//! Modules:
//! - `cursor`     : Read-only position the matchers look ahead from.
//! - `matcher`    : One rule per token category, tried in a fixed priority order.
//! - `emitter`    : Builds a `Token` from a claimed span, computing canonical text.
//! - `scanner`    : `next_token`, one token at an offset.
//! - `token_kind` : Classification of lexical atoms.
//! - `token`      : Token struct pairing a `TokenKind` with its source span.
//! - `tokenizer`  : `tokenize`, the lazy `Tokens` iterator and the shareable `Tokenizer`.
//!
//! Public Re‑exports:
//! You can `use crate::sql::{tokenize, Token, TokenKind};` directly,
//! or pull everything via the `prelude` submodule.
//!
//! Example:
//! ```rust
//! use sqlscan::postgresql;
//! use sqlscan::prelude::*;
//!
//! let rules = postgresql().unwrap();
//! let tokens = tokenize("SELECT a, b FROM my_table", &rules);
//! assert!(tokens.iter().any(|t| t.is(TokenKind::Command, "FROM")));
//! assert!(tokens.iter().any(|t| t.ident() == Some("my_table")));
//! ```

pub mod cursor;
pub mod emitter;
pub mod matcher;
pub mod scanner;
pub mod token;
pub mod token_kind;
pub mod tokenizer;

pub use cursor::Cursor;
pub use scanner::next_token;
pub use token::{Diagnostic, Token};
pub use token_kind::TokenKind;
pub use tokenizer::{Tokenizer, Tokens, diagnostics, tokenize};

/// Convenience prelude re‑exporting the most commonly used items.
///
/// Import with:
/// `use sqlscan::prelude::*;`
pub mod prelude {
    pub use super::{Diagnostic, Token, TokenKind, Tokenizer, tokenize};
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::*;

    #[rstest]
    fn tokenize_and_access(rules: crate::DialectRuleSet) {
        let sql = "SELECT col FROM tbl";
        let tokens = tokenize(sql, &rules);
        assert!(tokens.iter().any(|t| t.is(TokenKind::Command, "SELECT")));
        assert!(tokens.iter().any(|t| t.is(TokenKind::Command, "FROM")));
        assert!(tokens.iter().any(|t| t.ident() == Some("col")));
        assert!(tokens.iter().any(|t| t.ident() == Some("tbl")));
    }

    #[rstest]
    fn prelude_import_works(rules: crate::DialectRuleSet) {
        use super::prelude::*;
        let toks = tokenize("from X", &rules);
        assert!(toks.iter().any(|t| t.is(TokenKind::Command, "FROM")));
        assert!(toks.iter().any(|t| t.ident() == Some("X")));
    }
}
