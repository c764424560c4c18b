/// Character classes for unquoted identifiers and reserved words.
///
/// Letters, digits and `_` are always identifier characters. Dialects may add
/// characters allowed anywhere (`start`) or only after the first character
/// (`rest`, e.g. PostgreSQL's `$`). Both sets count for word boundaries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentChars {
    start: Vec<char>,
    rest: Vec<char>,
}

impl IdentChars {
    pub fn new(start: Vec<char>, rest: Vec<char>) -> Self {
        Self { start, rest }
    }

    /// Extra characters allowed as the first character of an identifier.
    pub fn extra_start(&self) -> &[char] {
        &self.start
    }

    /// Extra characters allowed after the first character only.
    pub fn extra_rest(&self) -> &[char] {
        &self.rest
    }

    pub fn is_start(&self, c: char) -> bool {
        c.is_alphabetic() || c == '_' || self.start.contains(&c)
    }

    /// True for any character that may appear inside an identifier. Anything
    /// else is a word boundary.
    pub fn is_rest(&self, c: char) -> bool {
        c.is_alphanumeric() || c == '_' || self.start.contains(&c) || self.rest.contains(&c)
    }

    /// Byte offset where the identifier-shaped word starting at `from` ends, or
    /// `None` if no word starts there.
    pub fn word_end(&self, text: &str, from: usize) -> Option<usize> {
        let mut chars = text[from..].char_indices();
        match chars.next() {
            Some((_, c)) if self.is_start(c) => {}
            _ => return None,
        }
        let end = chars
            .find(|&(_, c)| !self.is_rest(c))
            .map_or(text.len(), |(i, _)| from + i);
        Some(end)
    }

    /// True if `word` is a single identifier-shaped word.
    pub fn is_word(&self, word: &str) -> bool {
        self.word_end(word, 0) == Some(word.len())
    }
}
