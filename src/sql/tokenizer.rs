use crate::sql::scanner::next_token;
use crate::*;
use std::{iter::FusedIterator, sync::Arc};

/// Tokenize `sql` with the given dialect rules.
///
/// Behavior:
/// - Lossless: token spans partition `0..sql.len()` in order, so concatenating
///   every `raw` gives back `sql` exactly.
/// - Never fails: malformed input still yields tokens, flagged through
///   [`Token::diagnostic`].
/// - Whitespace and comments are kept as typed tokens; filter them with
///   [`Token::is_trivia`] if unwanted.
/// - The last token is always a zero-length [`TokenKind::EndOfInput`].
///
/// Complexity:
/// - O(n) time in the input length for a fixed rule set.
pub fn tokenize<'a>(sql: &'a str, rules: &DialectRuleSet) -> Vec<Token<'a>> {
    let span = span!(tracing::Level::DEBUG, "tokenize", dialect = rules.name(), bytes = sql.len());
    let _enter = span.enter();

    let tokens = rules.tokens(sql).collect::<Vec<_>>();
    debug!(count = tokens.len(), "tokenized");
    tokens
}

/// Tokens of a `tokenize` call that carry a diagnostic.
pub fn diagnostics<'t, 'a>(
    tokens: &'t [Token<'a>],
) -> impl Iterator<Item = (&'t Token<'a>, Diagnostic)> {
    tokens
        .iter()
        .filter_map(|token| token.diagnostic.map(|diagnostic| (token, diagnostic)))
}

impl DialectRuleSet {
    /// Lazily scan `sql`, one token per `next()`.
    pub fn tokens<'a>(&self, sql: &'a str) -> Tokens<'a, '_> {
        Tokens {
            sql,
            rules: self,
            offset: 0,
            done: false,
        }
    }
}

/// Iterator over the tokens of one input. Ends after `EndOfInput`.
#[derive(Debug, Clone)]
pub struct Tokens<'a, 'r> {
    sql: &'a str,
    rules: &'r DialectRuleSet,
    offset: usize,
    done: bool,
}

impl<'a> Tokens<'a, '_> {
    /// Byte offset the next token will start at.
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn input(&self) -> &'a str {
        self.sql
    }
}

impl<'a> Iterator for Tokens<'a, '_> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let (token, next) = next_token(self.sql, self.rules, self.offset);
        self.offset = next;
        self.done = token.kind == TokenKind::EndOfInput;
        report(&token);
        Some(token)
    }
}

impl FusedIterator for Tokens<'_, '_> {}

fn report(token: &Token<'_>) {
    let settings = config();
    if let Some(diagnostic) = token.diagnostic {
        if settings.warn_diagnostics {
            warn!(start = token.start, end = token.end, "{diagnostic}");
        } else {
            debug!(start = token.start, end = token.end, "{diagnostic}");
        }
    }
    if settings.trace_tokens {
        trace!(kind = %token.kind, start = token.start, end = token.end, raw = token.raw);
    }
}

/// Shareable handle to one rule set. Clones are cheap and can move to other
/// threads.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    rules: Arc<DialectRuleSet>,
}

impl Tokenizer {
    pub fn new(rules: Arc<DialectRuleSet>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &DialectRuleSet {
        &self.rules
    }

    pub fn tokenize<'a>(&self, sql: &'a str) -> Vec<Token<'a>> {
        tokenize(sql, &self.rules)
    }

    pub fn tokens<'a>(&self, sql: &'a str) -> Tokens<'a, '_> {
        self.rules.tokens(sql)
    }
}

impl From<DialectRuleSet> for Tokenizer {
    fn from(rules: DialectRuleSet) -> Self {
        Self::new(Arc::new(rules))
    }
}
