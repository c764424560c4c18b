//! Word-shaped rules: reserved phrases, keywords, function names and plain
//! identifiers.
//!
//! Reserved matches must sit on word boundaries on both sides, so `SELECTOR`
//! stays one identifier and `ALTER_LOG` is never read as `ALTER`. The right
//! boundary comes for free from reading maximal words; the left one is checked
//! against the character before the cursor. A word directly after `.` is a
//! qualified name part (`t.select`, `o.order`) and never reserved.
use crate::sql::matcher::Match;
use crate::*;

/// The longest configured phrase whose words match consecutive words at the
/// cursor, case-insensitively and with any whitespace between them.
pub fn phrase(cursor: &Cursor<'_>, rules: &DialectRuleSet) -> Option<Match> {
    let (first_end, first) = reserved_word(cursor, rules)?;
    rules
        .phrases()
        .candidates(&first)
        .iter()
        .find_map(|phrase| {
            match_rest(cursor, rules, &phrase.words()[1..], first_end)
                .map(|end| Match::new(phrase.category().token_kind(), end))
        })
}

pub fn keyword(cursor: &Cursor<'_>, rules: &DialectRuleSet) -> Option<Match> {
    let (end, word) = reserved_word(cursor, rules)?;
    rules
        .keywords()
        .contains(&word)
        .then_some(Match::new(TokenKind::Keyword, end))
}

/// A function name only counts as one when an open paren follows.
pub fn function_name(cursor: &Cursor<'_>, rules: &DialectRuleSet) -> Option<Match> {
    let (end, word) = reserved_word(cursor, rules)?;
    let called = cursor.starts_with(cursor.skip_whitespace(end), "(");
    (called && rules.function_names().contains(&word))
        .then_some(Match::new(TokenKind::FunctionName, end))
}

pub fn identifier(cursor: &Cursor<'_>, rules: &DialectRuleSet) -> Option<Match> {
    let end = rules.ident().word_end(cursor.input(), cursor.pos())?;
    Some(Match::new(TokenKind::UnquotedIdentifier, end))
}

/// End and uppercased text of the word at the cursor, if it starts on a word
/// boundary and is not qualified by a preceding `.`.
fn reserved_word(cursor: &Cursor<'_>, rules: &DialectRuleSet) -> Option<(usize, String)> {
    let ident = rules.ident();
    if cursor.prev().is_some_and(|c| c == '.' || ident.is_rest(c)) {
        return None;
    }
    let end = ident.word_end(cursor.input(), cursor.pos())?;
    Some((end, cursor.input()[cursor.pos()..end].to_uppercase()))
}

fn match_rest(
    cursor: &Cursor<'_>,
    rules: &DialectRuleSet,
    words: &[String],
    from: usize,
) -> Option<usize> {
    let input = cursor.input();
    words.iter().try_fold(from, |end, word| {
        let start = cursor.skip_whitespace(end);
        if start == end {
            return None;
        }
        let word_end = rules.ident().word_end(input, start)?;
        input[start..word_end]
            .chars()
            .flat_map(char::to_uppercase)
            .eq(word.chars())
            .then_some(word_end)
    })
}
