use crate::dialect::PhraseCategory;

/// Errors raised while building a [`DialectRuleSet`](crate::DialectRuleSet) or
/// loading configuration. Scanning itself never fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Empty {0} entry")]
    EmptyEntry(&'static str),

    #[error("Unexpanded phrase syntax in {category}: {phrase:?}")]
    UnexpandedPhrase {
        category: PhraseCategory,
        phrase: String,
    },

    #[error("Phrase is not whitespace-normalized in {category}: {phrase:?}")]
    UnnormalizedPhrase {
        category: PhraseCategory,
        phrase: String,
    },

    #[error("Invalid word {word:?} in {context}")]
    InvalidWord { context: &'static str, word: String },

    #[error("Expected a single word in {context}, got {entry:?}")]
    MultiWordKeyword { context: &'static str, entry: String },

    #[error("Duplicate operator: {0:?}")]
    DuplicateOperator(String),

    #[error("Invalid operator: {0:?}")]
    InvalidOperator(String),

    #[error("Invalid paren pair ({open:?}, {close:?})")]
    InvalidParenPair { open: String, close: String },

    #[error("Invalid placeholder prefix: {0:?}")]
    InvalidPlaceholderPrefix(char),

    #[error("Invalid identifier character: {0:?}")]
    InvalidIdentifierChar(char),

    #[error("Invalid quote style: {0}")]
    InvalidQuoteStyle(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T = ()> = std::result::Result<T, Error>;

impl From<confique::Error> for Error {
    fn from(value: confique::Error) -> Self {
        Error::Config(value.to_string())
    }
}
