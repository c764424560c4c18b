//! Quoting conventions for string literals and quoted identifiers.

/// How a quoted construct lets its own closing delimiter appear inside it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Escape {
    /// The closing delimiter written twice stands for itself (`'it''s'`).
    #[default]
    Doubled,
    /// A backslash escapes the next character (`'it\'s'`).
    Backslash,
    /// Either of the above.
    DoubledOrBackslash,
    /// No escapes; the first closing delimiter ends the construct.
    None,
}

impl Escape {
    pub const fn allows_doubling(self) -> bool {
        matches!(self, Escape::Doubled | Escape::DoubledOrBackslash)
    }

    pub const fn allows_backslash(self) -> bool {
        matches!(self, Escape::Backslash | Escape::DoubledOrBackslash)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Delimiter {
    /// Literal open and close symbols, e.g. `'`/`'`, `"`/`"` or `[`/`]`.
    Fixed { open: String, close: String },
    /// `$tag$ ... $tag$`, where the tag is empty or an identifier-shaped word.
    DollarTag,
}

/// One configured way of quoting a string literal or identifier.
///
/// ```rust
/// use sqlscan::{Escape, QuoteStyle};
///
/// let unicode_ident = QuoteStyle::symmetric("\"").with_prefixes(["U&"]);
/// let escape_string = QuoteStyle::symmetric("'")
///     .with_prefixes(["E"])
///     .prefix_required()
///     .with_escape(Escape::DoubledOrBackslash);
/// assert!(!unicode_ident.is_prefix_required());
/// assert!(escape_string.is_prefix_required());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QuoteStyle {
    delimiter: Delimiter,
    prefixes: Vec<String>,
    prefix_required: bool,
    escape: Escape,
}

impl QuoteStyle {
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            delimiter: Delimiter::Fixed {
                open: open.into(),
                close: close.into(),
            },
            prefixes: Vec::new(),
            prefix_required: false,
            escape: Escape::default(),
        }
    }

    /// Same symbol opens and closes.
    pub fn symmetric(delimiter: impl Into<String>) -> Self {
        let delimiter = delimiter.into();
        Self::new(delimiter.clone(), delimiter)
    }

    pub fn dollar_tagged() -> Self {
        Self {
            delimiter: Delimiter::DollarTag,
            prefixes: Vec::new(),
            prefix_required: false,
            escape: Escape::None,
        }
    }

    /// Literal prefixes that may precede the opening delimiter, matched
    /// case-insensitively.
    pub fn with_prefixes(mut self, prefixes: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.prefixes = prefixes.into_iter().map(Into::into).collect();
        self
    }

    /// Only match when one of the prefixes is present.
    pub fn prefix_required(mut self) -> Self {
        self.prefix_required = true;
        self
    }

    pub fn with_escape(mut self, escape: Escape) -> Self {
        self.escape = escape;
        self
    }

    pub fn delimiter(&self) -> &Delimiter {
        &self.delimiter
    }

    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }

    pub fn is_prefix_required(&self) -> bool {
        self.prefix_required
    }

    pub fn escape(&self) -> Escape {
        self.escape
    }

    pub(crate) fn validate(&self) -> crate::Result {
        if let Delimiter::Fixed { open, close } = &self.delimiter {
            if open.is_empty() || close.is_empty() {
                return Err(crate::Error::EmptyEntry("quote delimiter"));
            }
            if open.starts_with(char::is_whitespace) {
                return Err(crate::Error::InvalidQuoteStyle(format!(
                    "delimiter {open:?} starts with whitespace"
                )));
            }
        }
        if self.prefixes.iter().any(String::is_empty) {
            return Err(crate::Error::EmptyEntry("quote prefix"));
        }
        if self.prefix_required && self.prefixes.is_empty() {
            return Err(crate::Error::InvalidQuoteStyle(
                "prefix required but no prefixes configured".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn escape_flags() {
        assert!(Escape::Doubled.allows_doubling());
        assert!(!Escape::Doubled.allows_backslash());
        assert!(Escape::DoubledOrBackslash.allows_doubling());
        assert!(Escape::DoubledOrBackslash.allows_backslash());
        assert!(!Escape::None.allows_doubling());
    }

    #[test]
    fn symmetric_style() {
        let style = QuoteStyle::symmetric("'");
        assert_eq!(
            style.delimiter(),
            &Delimiter::Fixed {
                open: "'".into(),
                close: "'".into()
            }
        );
        assert_eq!(style.escape(), Escape::Doubled);
        assert!(style.validate().is_ok());
    }

    #[test]
    fn required_prefix_without_prefixes_is_rejected() {
        let style = QuoteStyle::symmetric("'").prefix_required();
        assert!(matches!(style.validate(), Err(Error::InvalidQuoteStyle(_))));
    }

    #[test]
    fn empty_delimiter_is_rejected() {
        let style = QuoteStyle::new("", "'");
        assert_eq!(style.validate(), Err(Error::EmptyEntry("quote delimiter")));
    }
}
