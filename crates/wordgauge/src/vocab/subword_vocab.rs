//! # Subword Vocabulary Index

use crate::types::WGHashSet;
use crate::vocab::MarkerConvention;

/// Set-like membership index over subword token strings.
///
/// Membership is case-sensitive and character-exact; no normalization is
/// performed here. The index is built once and is immutable for the lifetime
/// of any segmenter holding it.
#[derive(Debug, Clone, Default)]
pub struct SubwordVocab {
    entries: WGHashSet<String>,
    convention: MarkerConvention,
}

impl SubwordVocab {
    /// Build a vocabulary index.
    ///
    /// ## Arguments
    /// * `entries` - The token strings, in their marked vocabulary spelling.
    /// * `convention` - The marker convention the entries follow.
    pub fn new(
        entries: impl IntoIterator<Item = String>,
        convention: MarkerConvention,
    ) -> Self {
        Self {
            entries: entries.into_iter().collect(),
            convention,
        }
    }

    /// The active marker convention.
    pub fn convention(&self) -> MarkerConvention {
        self.convention
    }

    /// The number of entries in the vocabulary.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the vocabulary is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Exact membership test on a marked token string.
    pub fn contains(
        &self,
        token: &str,
    ) -> bool {
        self.entries.contains(token)
    }

    /// Position-aware lookup of a raw candidate substring.
    ///
    /// The candidate is spelled per the convention (see
    /// [`MarkerConvention::vocab_form`]) before the membership test.
    ///
    /// ## Arguments
    /// * `candidate` - The raw candidate substring.
    /// * `word_start` - Whether the candidate begins at offset 0 of the word.
    ///
    /// ## Returns
    /// The vocabulary spelling of the candidate on a hit, or None.
    pub fn lookup(
        &self,
        candidate: &str,
        word_start: bool,
    ) -> Option<String> {
        let form = self.convention.vocab_form(candidate, word_start);
        if self.entries.contains(form.as_ref()) {
            Some(form.into_owned())
        } else {
            None
        }
    }

    /// Returns true if every token of a bare gold segmentation exists in the
    /// vocabulary after marking per the convention.
    pub fn covers(
        &self,
        segmentation: &[String],
    ) -> bool {
        self.convention
            .mark_segmentation(segmentation)
            .iter()
            .all(|token| self.contains(token))
    }
}

impl FromIterator<String> for SubwordVocab {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self::new(iter, MarkerConvention::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocab(
        entries: &[&str],
        convention: MarkerConvention,
    ) -> SubwordVocab {
        SubwordVocab::new(
            entries.iter().map(|s| s.to_string()),
            convention,
        )
    }

    #[test]
    fn test_lookup_word_initial() {
        let v = vocab(&["un", "do"], MarkerConvention::WordInitial);

        assert_eq!(v.lookup("un", true).as_deref(), Some("un"));
        // WordInitial probes bare at every position.
        assert_eq!(v.lookup("do", false).as_deref(), Some("do"));
        assert_eq!(v.lookup("redo", false), None);
    }

    #[test]
    fn test_lookup_continuation_prefix() {
        let v = vocab(
            &["play", "##ing"],
            MarkerConvention::ContinuationPrefix,
        );

        assert_eq!(v.lookup("play", true).as_deref(), Some("play"));
        assert_eq!(v.lookup("ing", false).as_deref(), Some("##ing"));
        // Bare "ing" is not an entry, and word-start probes are bare.
        assert_eq!(v.lookup("ing", true), None);
    }

    #[test]
    fn test_covers() {
        let v = vocab(
            &["play", "##ing", "##er"],
            MarkerConvention::ContinuationPrefix,
        );

        let gold = |parts: &[&str]| -> Vec<String> {
            parts.iter().map(|s| s.to_string()).collect()
        };

        assert!(v.covers(&gold(&["play", "ing"])));
        assert!(v.covers(&gold(&["play", "er"])));
        assert!(!v.covers(&gold(&["play", "ed"])));
        // First gold token must be present bare.
        assert!(!v.covers(&gold(&["ing", "play"])));
    }
}
