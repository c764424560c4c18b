use crate::sql::matcher::Match;
use crate::*;

/// Line comment (up to, not including, the line break) or block comment.
pub fn comment(cursor: &Cursor<'_>, rules: &DialectRuleSet) -> Option<Match> {
    line_comment(cursor, rules).or_else(|| block_comment(cursor, rules))
}

fn line_comment(cursor: &Cursor<'_>, rules: &DialectRuleSet) -> Option<Match> {
    rules
        .line_comments()
        .iter()
        .any(|prefix| cursor.starts_with(cursor.pos(), prefix))
        .then(|| {
            let rest = cursor.rest();
            let len = rest.find(['\n', '\r']).unwrap_or(rest.len());
            Match::new(TokenKind::LineComment, cursor.pos() + len)
        })
}

fn block_comment(cursor: &Cursor<'_>, rules: &DialectRuleSet) -> Option<Match> {
    let BlockComment {
        open,
        close,
        nested,
    } = rules.block_comment()?;
    if !cursor.starts_with(cursor.pos(), open) {
        return None;
    }

    let len = cursor.input().len();
    let mut depth = 1usize;
    let mut i = cursor.pos() + open.len();
    while i < len {
        if cursor.starts_with(i, close) {
            i += close.len();
            depth -= 1;
            if depth == 0 {
                return Some(Match::new(TokenKind::BlockComment, i));
            }
        } else if *nested && cursor.starts_with(i, open) {
            i += open.len();
            depth += 1;
        } else {
            i = cursor.next_boundary(i);
        }
    }
    Some(Match::new(TokenKind::BlockComment, len).with_diagnostic(Diagnostic::UnterminatedComment))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(sql: &str, rules: &DialectRuleSet) -> Option<Match> {
        comment(&Cursor::new(sql, 0), rules)
    }

    #[rstest]
    fn line_comment_stops_before_newline(rules: DialectRuleSet) {
        let m = scan("-- hi\nSELECT", &rules).unwrap();
        assert_eq!(m, Match::new(TokenKind::LineComment, 5));
        let m = scan("-- hi\r\n", &rules).unwrap();
        assert_eq!(m.end, 5);
        assert_eq!(scan("-- to the end", &rules).unwrap().end, 13);
    }

    #[rstest]
    fn block_comment_spans_lines(rules: DialectRuleSet) {
        let m = scan("/* a\n b */ x", &rules).unwrap();
        assert_eq!(m, Match::new(TokenKind::BlockComment, 10));
    }

    #[rstest]
    fn unterminated_block_comment_runs_to_end(rules: DialectRuleSet) {
        let m = scan("/* never closed", &rules).unwrap();
        assert_eq!(m.end, 15);
        assert_eq!(m.diagnostic, Some(Diagnostic::UnterminatedComment));
    }

    #[rstest]
    fn nesting_follows_dialect(rules: DialectRuleSet, pg: DialectRuleSet) {
        let sql = "/* a /* b */ c */";
        assert_eq!(scan(sql, &rules).unwrap().end, 12);
        assert_eq!(scan(sql, &pg).unwrap().end, sql.len());
    }

    #[rstest]
    fn minus_and_slash_are_not_comments(rules: DialectRuleSet) {
        assert_eq!(scan("- 1", &rules), None);
        assert_eq!(scan("/ 2", &rules), None);
    }

    #[test]
    fn custom_line_comment_prefix() {
        let rules = DialectRuleSet::builder("hash")
            .line_comments(["#"])
            .no_block_comments()
            .build()
            .unwrap();
        assert_eq!(scan("# x", &rules).unwrap().end, 3);
        assert_eq!(scan("-- x", &rules), None);
        assert_eq!(scan("/* x */", &rules), None);
    }
}
