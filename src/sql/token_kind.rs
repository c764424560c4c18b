//! Token kind definitions for the dialect-driven SQL scanner.
//!
//! Each `TokenKind` variant names the rule category that claimed a span of
//! input. Kinds carry no payload: the source text lives on the `Token`, and the
//! dialect decides which words land in which category.
//!
//! Design goals:
//! - One kind per matcher so the formatter can make structural decisions
//!   (indent after `Command`, wrap around `Join`) from `kind` alone.
//! - Whitespace and comments are real kinds, which keeps the token stream
//!   lossless; `is_trivia` lets callers drop them.
//! - Ergonomic predicates to avoid long `matches!` at call sites.

/// Classification for a token produced by the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum TokenKind {
    /// Reserved command phrase (`SELECT`, `CREATE TABLE`, `GROUP BY`).
    Command,
    /// Set operator phrase (`UNION ALL`, `EXCEPT`).
    SetOperator,
    /// Join phrase (`LEFT OUTER JOIN`).
    Join,
    /// Clause that depends on an enclosing construct (`WHEN`, `ELSE`).
    DependentClause,
    /// Reserved single word.
    Keyword,
    /// Reserved function name directly followed by `(`.
    FunctionName,
    Operator,
    OpenParen,
    CloseParen,
    StringLiteral,
    QuotedIdentifier,
    UnquotedIdentifier,
    /// Prefix character followed by digits (`$1`).
    NumberedPlaceholder,
    NumericLiteral,
    /// Comma, semicolon, or a period that is not part of a number.
    Punctuation,
    LineComment,
    BlockComment,
    Whitespace,
    /// A single character no rule recognized.
    Unknown,
    /// Zero-length marker at the end of input.
    EndOfInput,
}

impl TokenKind {
    /// Reserved words and phrases whose canonical text is uppercased.
    pub const fn is_reserved(self) -> bool {
        matches!(
            self,
            TokenKind::Command
                | TokenKind::SetOperator
                | TokenKind::Join
                | TokenKind::DependentClause
                | TokenKind::Keyword
                | TokenKind::FunctionName
        )
    }

    /// Kinds matched as (possibly multi-word) phrases.
    pub const fn is_phrase(self) -> bool {
        matches!(
            self,
            TokenKind::Command
                | TokenKind::SetOperator
                | TokenKind::Join
                | TokenKind::DependentClause
        )
    }

    pub const fn is_comment(self) -> bool {
        matches!(self, TokenKind::LineComment | TokenKind::BlockComment)
    }

    /// Whitespace and comments: tokens a formatter may drop.
    pub const fn is_trivia(self) -> bool {
        matches!(self, TokenKind::Whitespace) || self.is_comment()
    }

    pub const fn is_paren(self) -> bool {
        matches!(self, TokenKind::OpenParen | TokenKind::CloseParen)
    }

    pub const fn is_identifier(self) -> bool {
        matches!(self, TokenKind::QuotedIdentifier | TokenKind::UnquotedIdentifier)
    }

    /// True if the canonical text is the uppercased, whitespace-collapsed raw text.
    pub const fn normalizes(self) -> bool {
        self.is_reserved() || self.is_paren() || matches!(self, TokenKind::Operator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reserved_classification() {
        assert!(TokenKind::Command.is_reserved());
        assert!(TokenKind::FunctionName.is_reserved());
        assert!(!TokenKind::UnquotedIdentifier.is_reserved());
        assert!(TokenKind::Join.is_phrase());
        assert!(!TokenKind::Keyword.is_phrase());
    }

    #[test]
    fn trivia_classification() {
        assert!(TokenKind::Whitespace.is_trivia());
        assert!(TokenKind::LineComment.is_trivia());
        assert!(TokenKind::BlockComment.is_trivia());
        assert!(!TokenKind::Punctuation.is_trivia());
        assert!(!TokenKind::EndOfInput.is_trivia());
    }

    #[test]
    fn normalization_classification() {
        assert!(TokenKind::Operator.normalizes());
        assert!(TokenKind::OpenParen.normalizes());
        assert!(TokenKind::Keyword.normalizes());
        assert!(!TokenKind::StringLiteral.normalizes());
        assert!(!TokenKind::QuotedIdentifier.normalizes());
        assert!(!TokenKind::Unknown.normalizes());
    }

    #[test]
    fn display_uses_variant_name() {
        assert_eq!(TokenKind::SetOperator.to_string(), "SetOperator");
        assert_eq!(TokenKind::EndOfInput.to_string(), "EndOfInput");
    }
}
