use crate::sql::matcher::Match;
use crate::*;

/// Configured open/close bracket symbols, longest first.
pub fn paren(cursor: &Cursor<'_>, rules: &DialectRuleSet) -> Option<Match> {
    let rest = cursor.rest();
    rules
        .paren_symbols()
        .iter()
        .find(|(symbol, _)| rest.starts_with(symbol.as_str()))
        .map(|(symbol, kind)| Match::new(*kind, cursor.pos() + symbol.len()))
}

/// Operators are stored longest first, so the first hit is the longest match.
pub fn operator(cursor: &Cursor<'_>, rules: &DialectRuleSet) -> Option<Match> {
    let rest = cursor.rest();
    rules
        .operators()
        .iter()
        .find(|op| rest.starts_with(op.as_str()))
        .map(|op| Match::new(TokenKind::Operator, cursor.pos() + op.len()))
}

pub fn punctuation(cursor: &Cursor<'_>, _rules: &DialectRuleSet) -> Option<Match> {
    matches!(cursor.peek()?, ',' | ';' | '.')
        .then(|| Match::new(TokenKind::Punctuation, cursor.pos() + 1))
}

pub fn whitespace(cursor: &Cursor<'_>, _rules: &DialectRuleSet) -> Option<Match> {
    let end = cursor.skip_whitespace(cursor.pos());
    (end > cursor.pos()).then_some(Match::new(TokenKind::Whitespace, end))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(sql: &str) -> Cursor<'_> {
        Cursor::new(sql, 0)
    }

    #[rstest]
    #[case("<=b", 2)]
    #[case("<b", 1)]
    #[case("<>1", 2)]
    #[case("||'x'", 2)]
    #[case("::int", 2)]
    fn longest_operator_wins(rules: DialectRuleSet, #[case] sql: &str, #[case] end: usize) {
        assert_eq!(operator(&at(sql), &rules), Some(Match::new(TokenKind::Operator, end)));
    }

    #[rstest]
    fn unknown_symbol_is_not_an_operator(rules: DialectRuleSet) {
        assert_eq!(operator(&at("@x"), &rules), None);
        assert_eq!(operator(&at("a"), &rules), None);
    }

    #[rstest]
    fn postgres_operators(pg: DialectRuleSet) {
        assert_eq!(operator(&at("->>'a'"), &pg).unwrap().end, 3);
        assert_eq!(operator(&at("~<=~ x"), &pg).unwrap().end, 4);
        assert_eq!(operator(&at("||/ 27"), &pg).unwrap().end, 3);
        assert_eq!(operator(&at("!~~* x"), &pg).unwrap().end, 4);
    }

    #[rstest]
    #[case("(a", TokenKind::OpenParen, 1)]
    #[case(")", TokenKind::CloseParen, 1)]
    #[case("[1]", TokenKind::OpenParen, 1)]
    #[case("]", TokenKind::CloseParen, 1)]
    fn parens(
        rules: DialectRuleSet,
        #[case] sql: &str,
        #[case] kind: TokenKind,
        #[case] end: usize,
    ) {
        assert_eq!(paren(&at(sql), &rules), Some(Match::new(kind, end)));
    }

    #[test]
    fn multi_char_parens() {
        let rules = DialectRuleSet::builder("blocks")
            .paren_pair("(", ")")
            .paren_pair("(.", ".)")
            .build()
            .unwrap();
        assert_eq!(paren(&at("(.x"), &rules), Some(Match::new(TokenKind::OpenParen, 2)));
        assert_eq!(paren(&at(".)"), &rules), Some(Match::new(TokenKind::CloseParen, 2)));
        assert_eq!(paren(&at("(x"), &rules), Some(Match::new(TokenKind::OpenParen, 1)));
    }

    #[rstest]
    #[case(",", Some(1))]
    #[case(";", Some(1))]
    #[case(".", Some(1))]
    #[case(":", None)]
    #[case("", None)]
    fn punctuation_chars(rules: DialectRuleSet, #[case] sql: &str, #[case] end: Option<usize>) {
        assert_eq!(
            punctuation(&at(sql), &rules),
            end.map(|end| Match::new(TokenKind::Punctuation, end))
        );
    }

    #[rstest]
    fn whitespace_runs(rules: DialectRuleSet) {
        assert_eq!(
            whitespace(&at(" \t\r\n x"), &rules),
            Some(Match::new(TokenKind::Whitespace, 5))
        );
        assert_eq!(whitespace(&at("\u{3000}x"), &rules).unwrap().end, 3);
        assert_eq!(whitespace(&at("x"), &rules), None);
    }
}
