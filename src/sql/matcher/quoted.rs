//! String literals and quoted identifiers.
//!
//! Both share one algorithm over the dialect's [`QuoteStyle`]s: styles are
//! tried in configuration order; for each, an optional (or required) prefix is
//! checked, then the opening delimiter, then the body is scanned up to the
//! closing delimiter honoring the style's escape rule. A construct that never
//! closes runs to the end of input and carries a diagnostic.
use crate::sql::matcher::Match;
use crate::*;

pub fn string(cursor: &Cursor<'_>, rules: &DialectRuleSet) -> Option<Match> {
    quoted(
        cursor,
        rules.string_styles(),
        TokenKind::StringLiteral,
        Diagnostic::UnterminatedString,
    )
}

pub fn identifier(cursor: &Cursor<'_>, rules: &DialectRuleSet) -> Option<Match> {
    quoted(
        cursor,
        rules.identifier_styles(),
        TokenKind::QuotedIdentifier,
        Diagnostic::UnterminatedIdentifier,
    )
}

fn quoted(
    cursor: &Cursor<'_>,
    styles: &[QuoteStyle],
    kind: TokenKind,
    unterminated: Diagnostic,
) -> Option<Match> {
    styles.iter().find_map(|style| {
        let (end, terminated) = scan_style(cursor, style)?;
        let m = Match::new(kind, end);
        Some(if terminated {
            m
        } else {
            m.with_diagnostic(unterminated)
        })
    })
}

/// `(end, terminated)` if `style` opens at the cursor.
fn scan_style(cursor: &Cursor<'_>, style: &QuoteStyle) -> Option<(usize, bool)> {
    let start = cursor.pos();
    let prefixed = style
        .prefixes()
        .iter()
        .filter(|prefix| cursor.starts_with_ci(start, prefix))
        .map(|prefix| start + prefix.len());
    let bare = (!style.is_prefix_required()).then_some(start);

    prefixed.chain(bare).find_map(|at| match style.delimiter() {
        Delimiter::Fixed { open, close } => cursor
            .starts_with(at, open)
            .then(|| scan_fixed(cursor, at + open.len(), close, style.escape())),
        Delimiter::DollarTag => scan_dollar(cursor, at),
    })
}

fn scan_fixed(cursor: &Cursor<'_>, from: usize, close: &str, escape: Escape) -> (usize, bool) {
    let len = cursor.input().len();
    let mut i = from;
    while i < len {
        if escape.allows_backslash() && cursor.starts_with(i, "\\") {
            i = cursor.next_boundary(i + 1);
        } else if cursor.starts_with(i, close) {
            i += close.len();
            if escape.allows_doubling() && cursor.starts_with(i, close) {
                i += close.len();
            } else {
                return (i, true);
            }
        } else {
            i = cursor.next_boundary(i);
        }
    }
    (len, false)
}

/// `$tag$ ... $tag$`. The tag is empty or a word of letters, digits and `_`
/// not starting with a digit, so `$1` is left for the placeholder matcher.
fn scan_dollar(cursor: &Cursor<'_>, at: usize) -> Option<(usize, bool)> {
    if !cursor.starts_with(at, "$") {
        return None;
    }
    let input = cursor.input();
    let tag_start = at + 1;
    if input[tag_start..].starts_with(|c: char| c.is_ascii_digit()) {
        return None;
    }
    let tag_len = input[tag_start..]
        .find(|c: char| !(c.is_alphanumeric() || c == '_'))
        .unwrap_or(input.len() - tag_start);
    let tag_end = tag_start + tag_len;
    if !cursor.starts_with(tag_end, "$") {
        return None;
    }

    let delimiter = &input[at..=tag_end];
    let body = tag_end + 1;
    Some(match input[body..].find(delimiter) {
        Some(i) => (body + i + delimiter.len(), true),
        None => (input.len(), false),
    })
}
