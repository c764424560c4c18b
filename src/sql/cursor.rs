/// Read-only position in the SQL input offered to each matcher.
///
/// Matchers look ahead from `pos` without moving it; the scanner builds a new
/// cursor for every token. All offsets are byte offsets on `char` boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(input: &'a str, pos: usize) -> Self {
        Self { input, pos }
    }

    pub fn input(&self) -> &'a str {
        self.input
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn is_eof(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Input from the cursor position on.
    pub fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Character just before the cursor.
    pub fn prev(&self) -> Option<char> {
        self.input[..self.pos].chars().next_back()
    }

    pub fn starts_with(&self, at: usize, literal: &str) -> bool {
        self.input[at..].starts_with(literal)
    }

    /// ASCII case-insensitive `starts_with`. On success the match spans exactly
    /// `literal.len()` bytes.
    pub fn starts_with_ci(&self, at: usize, literal: &str) -> bool {
        self.input
            .get(at..at + literal.len())
            .is_some_and(|s| s.eq_ignore_ascii_case(literal))
    }

    /// First offset at or after `at` that is not whitespace.
    pub fn skip_whitespace(&self, at: usize) -> usize {
        self.input[at..]
            .find(|c: char| !c.is_whitespace())
            .map_or(self.input.len(), |i| at + i)
    }

    /// Offset just past the character starting at `at`.
    pub fn next_boundary(&self, at: usize) -> usize {
        self.input[at..]
            .chars()
            .next()
            .map_or(self.input.len(), |c| at + c.len_utf8())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn peek_and_prev() {
        let c = Cursor::new("ab", 1);
        assert_eq!(c.peek(), Some('b'));
        assert_eq!(c.prev(), Some('a'));
        assert_eq!(Cursor::new("ab", 0).prev(), None);
        assert!(Cursor::new("ab", 2).is_eof());
        assert_eq!(Cursor::new("ab", 2).peek(), None);
    }

    #[test]
    fn case_insensitive_prefix() {
        let c = Cursor::new("u&'x'", 0);
        assert!(c.starts_with_ci(0, "U&"));
        assert!(!c.starts_with(0, "U&"));
        assert!(!c.starts_with_ci(3, "x'y"));
        // slicing inside a multi-byte char must not panic
        assert!(!Cursor::new("é", 0).starts_with_ci(0, "e"));
    }

    #[test]
    fn whitespace_and_boundaries() {
        let c = Cursor::new("a \n\tb", 0);
        assert_eq!(c.skip_whitespace(1), 4);
        assert_eq!(c.skip_whitespace(0), 0);
        assert_eq!(Cursor::new("a  ", 0).skip_whitespace(1), 3);
        assert_eq!(Cursor::new("éa", 0).next_boundary(0), 2);
        assert_eq!(Cursor::new("", 0).next_boundary(0), 0);
    }
}
