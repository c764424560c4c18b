use crate::sql::matcher::Match;
use crate::*;

/// Integer, decimal (`1.5`, `1.`, `.5`), exponent (`2.5E-3`) or hex (`0x1F`)
/// literal. Signs are left to the operator matcher.
pub fn number(cursor: &Cursor<'_>, rules: &DialectRuleSet) -> Option<Match> {
    let bytes = cursor.input().as_bytes();
    let start = cursor.pos();
    let digits = |from: usize| bytes[from..].iter().take_while(|b| b.is_ascii_digit()).count();

    if matches!(bytes[start..], [b'0', b'x' | b'X', ..]) {
        let hex = bytes[start + 2..]
            .iter()
            .take_while(|b| b.is_ascii_hexdigit())
            .count();
        if hex > 0 {
            return Some(Match::new(TokenKind::NumericLiteral, start + 2 + hex));
        }
    }

    let int = digits(start);
    let mut end = start + int;
    if bytes.get(end) == Some(&b'.') {
        let frac = digits(end + 1);
        if int == 0 && frac == 0 {
            return None;
        }
        // `1.col` keeps the period for punctuation, `1.e5` does not
        let before_word = cursor.input()[end + 1..]
            .chars()
            .next()
            .is_some_and(|c| rules.ident().is_start(c));
        if frac > 0 || !before_word || exponent_end(bytes, end + 1).is_some() {
            end += 1 + frac;
        }
    } else if int == 0 {
        return None;
    }

    if let Some(exp_end) = exponent_end(bytes, end) {
        end = exp_end;
    }

    Some(Match::new(TokenKind::NumericLiteral, end))
}

/// End of an `e[+-]digits` exponent starting at `at`.
fn exponent_end(bytes: &[u8], at: usize) -> Option<usize> {
    if !matches!(bytes.get(at), Some(b'e' | b'E')) {
        return None;
    }
    let mut digits_start = at + 1;
    if matches!(bytes.get(digits_start), Some(b'+' | b'-')) {
        digits_start += 1;
    }
    let digits = bytes
        .get(digits_start..)?
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .count();
    (digits > 0).then_some(digits_start + digits)
}
