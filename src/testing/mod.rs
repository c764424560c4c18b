#![cfg(test)]
crate::reexport!(fixtures);
pub use rstest::*;

use crate::*;

pub(in crate::testing) fn common_init() {
    use std::sync::Once;
    use tracing_subscriber::EnvFilter;
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        // Only initialize once for all tests
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env()) // <- reads RUST_LOG
            .with_test_writer() // ensures it integrates with `cargo test` output
            .init();
    });
}

/// `(kind, canonical)` of every token that is not trivia or `EndOfInput`.
pub fn significant<'t>(tokens: &'t [Token<'_>]) -> Vec<(TokenKind, &'t str)> {
    tokens
        .iter()
        .filter(|t| !t.is_trivia() && t.kind != TokenKind::EndOfInput)
        .map(|t| (t.kind, t.canonical.as_ref()))
        .collect()
}

/// Spans are gapless and in order, and the raw texts rebuild `sql`.
#[track_caller]
pub fn assert_lossless(sql: &str, tokens: &[Token<'_>]) {
    let mut offset = 0;
    for token in tokens {
        assert_eq!(token.start, offset, "gap or overlap before {token:?} in {sql:?}");
        assert!(token.end >= token.start);
        assert_eq!(token.raw, &sql[token.start..token.end]);
        offset = token.end;
    }
    assert_eq!(offset, sql.len(), "tokens do not cover {sql:?}");
    assert_eq!(tokens.iter().map(|t| t.raw).collect::<String>(), sql);
    assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::EndOfInput));
}

mod tests {
    use super::*;

    #[rstest]
    fn fixtures_build(rules: DialectRuleSet, pg: DialectRuleSet) {
        assert_eq!(rules.name(), "test");
        assert_eq!(pg.name(), "postgresql");
    }

    #[rstest]
    fn significant_skips_trivia(rules: DialectRuleSet) {
        let tokens = tokenize("select /* c */ a -- x", &rules);
        assert_eq!(
            significant(&tokens),
            vec![(TokenKind::Command, "SELECT"), (TokenKind::UnquotedIdentifier, "a")]
        );
    }
}
