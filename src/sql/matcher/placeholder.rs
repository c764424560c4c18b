use crate::sql::matcher::Match;
use crate::*;

/// A configured prefix immediately followed by one or more ASCII digits.
pub fn numbered_placeholder(cursor: &Cursor<'_>, rules: &DialectRuleSet) -> Option<Match> {
    let prefix = cursor.peek()?;
    if !rules.placeholder_prefixes().contains(&prefix) {
        return None;
    }
    let digits_start = cursor.pos() + prefix.len_utf8();
    let digits = cursor.input()[digits_start..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    (digits > 0).then(|| Match::new(TokenKind::NumberedPlaceholder, digits_start + digits))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(sql: &str, rules: &DialectRuleSet) -> Option<Match> {
        numbered_placeholder(&Cursor::new(sql, 0), rules)
    }

    #[rstest]
    #[case("$1", 2)]
    #[case("$42 + 1", 3)]
    #[case(":7abc", 2)]
    fn placeholders(rules: DialectRuleSet, #[case] sql: &str, #[case] end: usize) {
        assert_eq!(scan(sql, &rules), Some(Match::new(TokenKind::NumberedPlaceholder, end)));
    }

    #[rstest]
    #[case("$")]
    #[case("$$abc$$")]
    #[case("$a")]
    #[case("?1")]
    #[case("1")]
    fn declined(rules: DialectRuleSet, #[case] sql: &str) {
        assert_eq!(scan(sql, &rules), None);
    }
}
