//! Multi-word reserved phrases, grouped by category and indexed by their
//! leading word.
use crate::*;
use std::{cmp::Reverse, collections::HashMap};

/// Category of a reserved phrase. Declaration order is match precedence: when
/// two categories match the same number of words, the earlier one wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub enum PhraseCategory {
    #[display("commands")]
    Command,
    #[display("set operators")]
    SetOperator,
    #[display("joins")]
    Join,
    #[display("dependent clauses")]
    DependentClause,
}

impl PhraseCategory {
    pub const PRECEDENCE: [Self; 4] = [
        PhraseCategory::Command,
        PhraseCategory::SetOperator,
        PhraseCategory::Join,
        PhraseCategory::DependentClause,
    ];

    pub const fn token_kind(self) -> TokenKind {
        match self {
            PhraseCategory::Command => TokenKind::Command,
            PhraseCategory::SetOperator => TokenKind::SetOperator,
            PhraseCategory::Join => TokenKind::Join,
            PhraseCategory::DependentClause => TokenKind::DependentClause,
        }
    }
}

/// A literal reserved phrase of one or more uppercased words.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phrase {
    category: PhraseCategory,
    words: Box<[String]>,
}

impl Phrase {
    /// Validate and normalize a fully expanded phrase such as `"LEFT OUTER JOIN"`.
    ///
    /// The text must be words separated by single spaces; alternation syntax
    /// (`[ALL | DISTINCT]`) must have been expanded by the caller.
    pub fn parse(category: PhraseCategory, text: &str, ident: &IdentChars) -> Result<Self> {
        if text.is_empty() {
            return Err(Error::EmptyEntry("phrase"));
        }
        if text.contains(['[', ']', '{', '}', '|']) {
            return Err(Error::UnexpandedPhrase {
                category,
                phrase: text.to_string(),
            });
        }
        let words = text.split(' ').collect::<Vec<_>>();
        if words.iter().any(|w| w.is_empty() || w.contains(char::is_whitespace)) {
            return Err(Error::UnnormalizedPhrase {
                category,
                phrase: text.to_string(),
            });
        }
        if let Some(bad) = words.iter().find(|w| !ident.is_word(w)) {
            return Err(Error::InvalidWord {
                context: "phrase",
                word: bad.to_string(),
            });
        }
        Ok(Self {
            category,
            words: words.into_iter().map(str::to_uppercase).collect(),
        })
    }

    pub fn category(&self) -> PhraseCategory {
        self.category
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Number of words in the phrase.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Normalized text, e.g. `"LEFT OUTER JOIN"`.
    pub fn text(&self) -> String {
        self.words.join(" ")
    }
}

/// All phrases of a dialect, bucketed by uppercased first word.
///
/// Each bucket is ordered so that the first phrase that matches is the one to
/// use: more words first, then category precedence.
#[derive(Debug, Clone, Default)]
pub struct PhraseTable {
    by_first_word: HashMap<String, Vec<Phrase>>,
    len: usize,
}

impl PhraseTable {
    pub(crate) fn insert(&mut self, phrase: Phrase) {
        let bucket = self
            .by_first_word
            .entry(phrase.words[0].clone())
            .or_default();
        if !bucket.contains(&phrase) {
            bucket.push(phrase);
            self.len += 1;
        }
    }

    pub(crate) fn finish(&mut self) {
        for bucket in self.by_first_word.values_mut() {
            bucket.sort_by_key(|p| (Reverse(p.len()), p.category));
        }
    }

    /// Phrases starting with `first_word` (already uppercased), in match order.
    pub fn candidates(&self, first_word: &str) -> &[Phrase] {
        self.by_first_word
            .get(first_word)
            .map_or(&[], Vec::as_slice)
    }

    pub fn contains(&self, category: PhraseCategory, text: &str) -> bool {
        let upper = text.to_uppercase();
        let Some(first) = upper.split(' ').next() else {
            return false;
        };
        self.candidates(first)
            .iter()
            .any(|p| p.category == category && p.text() == upper)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of phrases in one category.
    pub fn count(&self, category: PhraseCategory) -> usize {
        self.by_first_word
            .values()
            .flatten()
            .filter(|p| p.category == category)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phrase(category: PhraseCategory, text: &str) -> Phrase {
        Phrase::parse(category, text, &IdentChars::default()).unwrap()
    }

    #[test]
    fn parse_uppercases_words() {
        let p = phrase(PhraseCategory::Join, "left outer join");
        assert_eq!(p.words(), ["LEFT", "OUTER", "JOIN"]);
        assert_eq!(p.text(), "LEFT OUTER JOIN");
        assert_eq!(p.len(), 3);
    }

    #[rstest]
    #[case("UNION [ALL | DISTINCT]")]
    #[case("INTERSECT {ALL}")]
    #[case("A | B")]
    fn unexpanded_syntax_is_rejected(#[case] text: &str) {
        let err = Phrase::parse(PhraseCategory::SetOperator, text, &IdentChars::default());
        assert!(matches!(err, Err(Error::UnexpandedPhrase { .. })), "{err:?}");
    }

    #[rstest]
    #[case(" SELECT")]
    #[case("SELECT ")]
    #[case("GROUP  BY")]
    #[case("GROUP\tBY")]
    fn unnormalized_phrase_is_rejected(#[case] text: &str) {
        let err = Phrase::parse(PhraseCategory::Command, text, &IdentChars::default());
        assert!(matches!(err, Err(Error::UnnormalizedPhrase { .. })), "{err:?}");
    }

    #[test]
    fn non_word_is_rejected() {
        let err = Phrase::parse(PhraseCategory::Command, "SELECT *", &IdentChars::default());
        assert_eq!(
            err,
            Err(Error::InvalidWord {
                context: "phrase",
                word: "*".into()
            })
        );
    }

    #[test]
    fn candidates_prefer_longer_then_precedence() {
        let mut table = PhraseTable::default();
        table.insert(phrase(PhraseCategory::Command, "CREATE TABLE"));
        table.insert(phrase(PhraseCategory::Command, "CREATE TABLE AS"));
        table.insert(phrase(PhraseCategory::Join, "CREATE"));
        table.insert(phrase(PhraseCategory::Command, "CREATE"));
        table.insert(phrase(PhraseCategory::Command, "create table"));
        table.finish();

        let texts = table
            .candidates("CREATE")
            .iter()
            .map(|p| (p.text(), p.category()))
            .collect::<Vec<_>>();
        assert_eq!(
            texts,
            vec![
                ("CREATE TABLE AS".to_string(), PhraseCategory::Command),
                ("CREATE TABLE".to_string(), PhraseCategory::Command),
                ("CREATE".to_string(), PhraseCategory::Command),
                ("CREATE".to_string(), PhraseCategory::Join),
            ]
        );
        assert_eq!(table.len(), 4);
        assert_eq!(table.count(PhraseCategory::Command), 3);
        assert!(table.contains(PhraseCategory::Command, "create table as"));
        assert!(table.candidates("DROP").is_empty());
    }

    #[test]
    fn precedence_matches_declaration_order() {
        let mut sorted = PhraseCategory::PRECEDENCE;
        sorted.sort();
        assert_eq!(sorted, PhraseCategory::PRECEDENCE);
        assert_eq!(PhraseCategory::Join.token_kind(), TokenKind::Join);
    }
}
