//! Dialect rule sets: the data that tells the scanner what each SQL dialect
//! considers a command, keyword, operator, quote or placeholder.
//!
//! A [`DialectRuleSet`] is built once through [`DialectRuleSetBuilder`], which
//! validates every entry, and is read-only afterwards. Share it by reference
//! (or through [`Tokenizer`](crate::Tokenizer), which holds an `Arc`) across
//! as many concurrent tokenizations as needed.
//!
//! ```rust
//! use sqlscan::{DialectRuleSet, QuoteStyle, TokenKind, tokenize};
//!
//! let rules = DialectRuleSet::builder("tiny")
//!     .commands(["SELECT", "FROM"])
//!     .joins(["JOIN", "LEFT JOIN"])
//!     .operators(["=", "<", "<="])
//!     .paren_pair("(", ")")
//!     .string_style(QuoteStyle::symmetric("'"))
//!     .build()
//!     .unwrap();
//!
//! let kinds = tokenize("SELECT a FROM t LEFT JOIN u", &rules)
//!     .into_iter()
//!     .filter(|t| !t.is_trivia())
//!     .map(|t| t.kind)
//!     .collect::<Vec<_>>();
//! assert_eq!(kinds[0], TokenKind::Command);
//! assert_eq!(kinds[4], TokenKind::Join);
//! ```
pub mod ident;
pub mod phrase;
pub mod postgres;
pub mod quote;

pub use ident::IdentChars;
pub use phrase::{Phrase, PhraseCategory, PhraseTable};
pub use postgres::postgresql;
pub use quote::{Delimiter, Escape, QuoteStyle};

use crate::*;
use itertools::Itertools;
use std::{cmp::Reverse, collections::HashSet};

/// A pair of bracket symbols, e.g. `(`/`)` or `[`/`]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParenPair {
    pub open: String,
    pub close: String,
}

/// Block comment delimiters, e.g. `/*` and `*/`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BlockComment {
    pub open: String,
    pub close: String,
    /// Whether an inner `open` starts a nested comment that needs its own `close`.
    pub nested: bool,
}

/// Validated, immutable per-dialect rules consumed by the scanner.
#[derive(Debug, Clone)]
pub struct DialectRuleSet {
    name: String,
    phrases: PhraseTable,
    keywords: HashSet<String>,
    function_names: HashSet<String>,
    /// Longest first.
    operators: Vec<String>,
    paren_pairs: Vec<ParenPair>,
    /// Every open and close symbol, longest first.
    paren_symbols: Vec<(String, TokenKind)>,
    string_styles: Vec<QuoteStyle>,
    identifier_styles: Vec<QuoteStyle>,
    placeholder_prefixes: Vec<char>,
    ident: IdentChars,
    line_comments: Vec<String>,
    block_comment: Option<BlockComment>,
}

impl DialectRuleSet {
    pub fn builder(name: impl Into<String>) -> DialectRuleSetBuilder {
        DialectRuleSetBuilder::new(name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phrases(&self) -> &PhraseTable {
        &self.phrases
    }

    /// Case-insensitive membership in the single-word keyword set.
    pub fn is_keyword(&self, word: &str) -> bool {
        self.keywords.contains(&word.to_uppercase())
    }

    /// Case-insensitive membership in the function-name set.
    pub fn is_function_name(&self, word: &str) -> bool {
        self.function_names.contains(&word.to_uppercase())
    }

    pub(crate) fn keywords(&self) -> &HashSet<String> {
        &self.keywords
    }

    pub(crate) fn function_names(&self) -> &HashSet<String> {
        &self.function_names
    }

    /// Operators ordered longest first.
    pub fn operators(&self) -> &[String] {
        &self.operators
    }

    pub fn paren_pairs(&self) -> &[ParenPair] {
        &self.paren_pairs
    }

    /// Open and close symbols ordered longest first, tagged with their kind.
    pub(crate) fn paren_symbols(&self) -> &[(String, TokenKind)] {
        &self.paren_symbols
    }

    pub fn string_styles(&self) -> &[QuoteStyle] {
        &self.string_styles
    }

    pub fn identifier_styles(&self) -> &[QuoteStyle] {
        &self.identifier_styles
    }

    pub fn placeholder_prefixes(&self) -> &[char] {
        &self.placeholder_prefixes
    }

    pub fn ident(&self) -> &IdentChars {
        &self.ident
    }

    pub fn line_comments(&self) -> &[String] {
        &self.line_comments
    }

    pub fn block_comment(&self) -> Option<&BlockComment> {
        self.block_comment.as_ref()
    }
}

/// Collects raw dialect entries; [`build`](Self::build) validates them.
#[derive(Debug, Clone)]
pub struct DialectRuleSetBuilder {
    name: String,
    phrases: Vec<(PhraseCategory, String)>,
    keywords: Vec<String>,
    function_names: Vec<String>,
    operators: Vec<String>,
    paren_pairs: Vec<ParenPair>,
    string_styles: Vec<QuoteStyle>,
    identifier_styles: Vec<QuoteStyle>,
    placeholder_prefixes: Vec<char>,
    ident_start: Vec<char>,
    ident_rest: Vec<char>,
    line_comments: Vec<String>,
    block_comment: Option<BlockComment>,
}

impl DialectRuleSetBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phrases: Vec::new(),
            keywords: Vec::new(),
            function_names: Vec::new(),
            operators: Vec::new(),
            paren_pairs: Vec::new(),
            string_styles: Vec::new(),
            identifier_styles: Vec::new(),
            placeholder_prefixes: Vec::new(),
            ident_start: Vec::new(),
            ident_rest: Vec::new(),
            line_comments: vec!["--".into()],
            block_comment: Some(BlockComment {
                open: "/*".into(),
                close: "*/".into(),
                nested: false,
            }),
        }
    }

    /// Add fully expanded phrases to a category.
    pub fn phrases(
        mut self,
        category: PhraseCategory,
        phrases: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.phrases
            .extend(phrases.into_iter().map(|p| (category, p.into())));
        self
    }

    pub fn commands(self, phrases: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.phrases(PhraseCategory::Command, phrases)
    }

    pub fn set_operators(self, phrases: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.phrases(PhraseCategory::SetOperator, phrases)
    }

    pub fn joins(self, phrases: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.phrases(PhraseCategory::Join, phrases)
    }

    pub fn dependent_clauses(self, phrases: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.phrases(PhraseCategory::DependentClause, phrases)
    }

    pub fn keywords(mut self, keywords: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.keywords.extend(keywords.into_iter().map(Into::into));
        self
    }

    pub fn function_names(mut self, names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.function_names.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn operators(mut self, operators: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.operators.extend(operators.into_iter().map(Into::into));
        self
    }

    pub fn paren_pair(mut self, open: impl Into<String>, close: impl Into<String>) -> Self {
        self.paren_pairs.push(ParenPair {
            open: open.into(),
            close: close.into(),
        });
        self
    }

    /// String styles are tried in the order they are added.
    pub fn string_style(mut self, style: QuoteStyle) -> Self {
        self.string_styles.push(style);
        self
    }

    /// Identifier styles are tried in the order they are added.
    pub fn identifier_style(mut self, style: QuoteStyle) -> Self {
        self.identifier_styles.push(style);
        self
    }

    pub fn placeholder_prefixes(mut self, prefixes: impl IntoIterator<Item = char>) -> Self {
        self.placeholder_prefixes.extend(prefixes);
        self
    }

    /// Extra characters allowed in unquoted identifiers after the first character.
    pub fn identifier_chars(mut self, chars: impl IntoIterator<Item = char>) -> Self {
        self.ident_rest.extend(chars);
        self
    }

    /// Extra characters allowed anywhere in unquoted identifiers, including first.
    pub fn identifier_start_chars(mut self, chars: impl IntoIterator<Item = char>) -> Self {
        self.ident_start.extend(chars);
        self
    }

    /// Replace the default `--` line comment prefixes.
    pub fn line_comments(mut self, prefixes: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.line_comments = prefixes.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the default `/*` `*/` block comment delimiters.
    pub fn block_comment(mut self, open: impl Into<String>, close: impl Into<String>) -> Self {
        let nested = self.block_comment.as_ref().is_some_and(|c| c.nested);
        self.block_comment = Some(BlockComment {
            open: open.into(),
            close: close.into(),
            nested,
        });
        self
    }

    pub fn no_block_comments(mut self) -> Self {
        self.block_comment = None;
        self
    }

    pub fn nested_block_comments(mut self, nested: bool) -> Self {
        if let Some(comment) = self.block_comment.as_mut() {
            comment.nested = nested;
        }
        self
    }

    /// Validate every entry and freeze the rule set.
    pub fn build(self) -> Result<DialectRuleSet> {
        for &c in self.ident_start.iter().chain(&self.ident_rest) {
            if c.is_whitespace() || c.is_ascii_digit() {
                return Err(Error::InvalidIdentifierChar(c));
            }
        }
        let ident = IdentChars::new(self.ident_start, self.ident_rest);

        let mut phrases = PhraseTable::default();
        for (category, text) in &self.phrases {
            phrases.insert(Phrase::parse(*category, text, &ident)?);
        }
        phrases.finish();

        let keywords = single_words("keywords", self.keywords, &ident)?;
        let function_names = single_words("function names", self.function_names, &ident)?;

        if self.operators.iter().any(String::is_empty) {
            return Err(Error::EmptyEntry("operator"));
        }
        if let Some(op) = self.operators.iter().find(|op| op.contains(char::is_whitespace)) {
            return Err(Error::InvalidOperator(op.clone()));
        }
        if let Some(op) = self.operators.iter().duplicates().next() {
            return Err(Error::DuplicateOperator(op.clone()));
        }
        let mut operators = self.operators;
        operators.sort_by_key(|op| Reverse(op.len()));

        for pair in &self.paren_pairs {
            if pair.open.is_empty() || pair.close.is_empty() {
                return Err(Error::EmptyEntry("paren"));
            }
            if pair.open == pair.close
                || pair.open.contains(char::is_whitespace)
                || pair.close.contains(char::is_whitespace)
            {
                return Err(Error::InvalidParenPair {
                    open: pair.open.clone(),
                    close: pair.close.clone(),
                });
            }
        }
        let mut paren_symbols = self
            .paren_pairs
            .iter()
            .flat_map(|p| {
                [
                    (p.open.clone(), TokenKind::OpenParen),
                    (p.close.clone(), TokenKind::CloseParen),
                ]
            })
            .unique()
            .collect::<Vec<_>>();
        paren_symbols.sort_by_key(|(symbol, _)| Reverse(symbol.len()));

        for style in self.string_styles.iter().chain(&self.identifier_styles) {
            style.validate()?;
        }

        for &c in &self.placeholder_prefixes {
            if c.is_whitespace() || c.is_ascii_digit() || ident.is_start(c) {
                return Err(Error::InvalidPlaceholderPrefix(c));
            }
        }

        if self.line_comments.iter().any(String::is_empty) {
            return Err(Error::EmptyEntry("line comment prefix"));
        }
        if let Some(comment) = &self.block_comment {
            if comment.open.is_empty() || comment.close.is_empty() {
                return Err(Error::EmptyEntry("block comment delimiter"));
            }
        }

        debug!(
            dialect = %self.name,
            phrases = phrases.len(),
            keywords = keywords.len(),
            functions = function_names.len(),
            operators = operators.len(),
            "built dialect rule set"
        );

        Ok(DialectRuleSet {
            name: self.name,
            phrases,
            keywords,
            function_names,
            operators,
            paren_pairs: self.paren_pairs,
            paren_symbols,
            string_styles: self.string_styles,
            identifier_styles: self.identifier_styles,
            placeholder_prefixes: self.placeholder_prefixes,
            ident,
            line_comments: self.line_comments,
            block_comment: self.block_comment,
        })
    }
}

/// Uppercase and de-duplicate single-word entries, rejecting anything that is
/// not one identifier-shaped word.
fn single_words(
    context: &'static str,
    entries: Vec<String>,
    ident: &IdentChars,
) -> Result<HashSet<String>> {
    entries
        .into_iter()
        .map(|entry| {
            if entry.is_empty() {
                Err(Error::EmptyEntry(context))
            } else if entry.contains(char::is_whitespace) {
                Err(Error::MultiWordKeyword { context, entry })
            } else if !ident.is_word(&entry) {
                Err(Error::InvalidWord {
                    context,
                    word: entry,
                })
            } else {
                Ok(entry.to_uppercase())
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builder() -> DialectRuleSetBuilder {
        DialectRuleSet::builder("test")
    }

    #[test]
    fn operators_are_sorted_longest_first() {
        let rules = builder().operators(["<", "<=", "<<=", "="]).build().unwrap();
        assert_eq!(rules.operators()[0], "<<=");
        assert_eq!(rules.operators()[1], "<=");
        assert_eq!(rules.operators().len(), 4);
    }

    #[test]
    fn duplicate_operator_is_rejected() {
        let err = builder().operators(["<", "<=", "<"]).build().unwrap_err();
        assert_eq!(err, Error::DuplicateOperator("<".into()));
    }

    #[rstest]
    #[case("")]
    #[case("< =")]
    fn malformed_operator_is_rejected(#[case] op: &str) {
        assert!(builder().operators([op]).build().is_err());
    }

    #[test]
    fn keywords_are_case_insensitive_and_deduplicated() {
        let rules = builder().keywords(["distinct", "DISTINCT", "As"]).build().unwrap();
        assert!(rules.is_keyword("Distinct"));
        assert!(rules.is_keyword("as"));
        assert_eq!(rules.keywords().len(), 2);
    }

    #[test]
    fn multi_word_keyword_is_rejected() {
        let err = builder().keywords(["NOT NULL"]).build().unwrap_err();
        assert_eq!(
            err,
            Error::MultiWordKeyword {
                context: "keywords",
                entry: "NOT NULL".into()
            }
        );
    }

    #[test]
    fn unexpanded_phrase_is_rejected_at_build() {
        let err = builder()
            .set_operators(["UNION [ALL | DISTINCT]"])
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            Error::UnexpandedPhrase {
                category: PhraseCategory::SetOperator,
                ..
            }
        ));
    }

    #[test]
    fn identifier_chars_are_applied_before_phrase_validation() {
        assert!(builder().keywords(["A$B"]).build().is_err());
        let rules = builder()
            .keywords(["A$B"])
            .identifier_chars(['$'])
            .build()
            .unwrap();
        assert!(rules.is_keyword("a$b"));
    }

    #[rstest]
    #[case("(", "(")]
    #[case("", ")")]
    #[case("( ", ")")]
    fn invalid_paren_pair_is_rejected(#[case] open: &str, #[case] close: &str) {
        assert!(builder().paren_pair(open, close).build().is_err());
    }

    #[test]
    fn paren_symbols_are_longest_first() {
        let rules = builder()
            .paren_pair("(", ")")
            .paren_pair("[[", "]]")
            .build()
            .unwrap();
        let symbols = rules.paren_symbols();
        assert_eq!(symbols.len(), 4);
        assert_eq!(symbols[0].0.len(), 2);
        assert_eq!(symbols[1].0.len(), 2);
        assert_eq!(rules.paren_pairs().len(), 2);
    }

    #[rstest]
    #[case('1')]
    #[case(' ')]
    #[case('a')]
    fn invalid_placeholder_prefix_is_rejected(#[case] prefix: char) {
        let err = builder().placeholder_prefixes([prefix]).build().unwrap_err();
        assert_eq!(err, Error::InvalidPlaceholderPrefix(prefix));
    }

    #[test]
    fn placeholder_prefix_must_not_start_identifiers() {
        let err = builder()
            .identifier_start_chars(['#'])
            .placeholder_prefixes(['#'])
            .build()
            .unwrap_err();
        assert_eq!(err, Error::InvalidPlaceholderPrefix('#'));

        // rest-only characters may still prefix placeholders
        let rules = builder()
            .identifier_chars(['$'])
            .placeholder_prefixes(['$'])
            .build()
            .unwrap();
        assert_eq!(rules.placeholder_prefixes(), ['$']);
    }

    #[test]
    fn start_chars_accept_keywords_and_phrases() {
        let rules = builder()
            .identifier_start_chars(['#'])
            .keywords(["#TEMP"])
            .commands(["CREATE #TEMP"])
            .build()
            .unwrap();
        assert!(rules.is_keyword("#temp"));
        assert!(rules.ident().is_start('#'));
        assert!(builder().keywords(["#TEMP"]).build().is_err());
    }

    #[test]
    fn invalid_identifier_char_is_rejected() {
        let err = builder().identifier_chars(['7']).build().unwrap_err();
        assert_eq!(err, Error::InvalidIdentifierChar('7'));
    }

    #[test]
    fn comment_defaults_and_overrides() {
        let rules = builder().build().unwrap();
        assert_eq!(rules.line_comments(), ["--"]);
        let block = rules.block_comment().unwrap();
        assert_eq!((block.open.as_str(), block.close.as_str()), ("/*", "*/"));
        assert!(!block.nested);

        let rules = builder()
            .line_comments(["#", "--"])
            .nested_block_comments(true)
            .build()
            .unwrap();
        assert_eq!(rules.line_comments().len(), 2);
        assert!(rules.block_comment().unwrap().nested);

        let rules = builder().no_block_comments().build().unwrap();
        assert!(rules.block_comment().is_none());
    }

    #[test]
    fn rule_set_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<DialectRuleSet>();
    }
}
