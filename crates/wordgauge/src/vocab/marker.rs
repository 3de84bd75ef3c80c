//! # Subword Marker Conventions
//!
//! Subword vocabularies mark word position in one of two mutually exclusive
//! ways:
//!
//! * `WordInitial` - the *first* token of a word carries a leading marker
//!   (the byte-level / metaspace family, e.g. `"Ġ"`); later tokens are bare.
//! * `ContinuationPrefix` - every token *except* the first carries a prefix
//!   marker (the WordPiece family, e.g. `"##"`); the first token is bare.
//!
//! The segmenters and the coverage scorer never branch on the convention
//! directly; they go through [`MarkerConvention::vocab_form`] with a
//! "is this the start of the word?" flag.

use std::borrow::Cow;

/// Leading marker on the first token of a word, byte-level family.
pub const WORD_INITIAL_MARKER: &str = "Ġ";

/// Prefix marker on non-initial tokens, WordPiece family.
pub const CONTINUATION_MARKER: &str = "##";

/// How a vocabulary marks word position on its tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MarkerConvention {
    /// The first token of a word is marked; the rest are bare.
    #[default]
    WordInitial,

    /// Non-initial tokens carry [`CONTINUATION_MARKER`]; the first is bare.
    ContinuationPrefix,
}

impl MarkerConvention {
    /// Selects the convention from a tokenizer config file name.
    ///
    /// WordPiece-family configs (`wordpiece*`, `flota_wordpiece*`,
    /// `suffix_wordpiece*`) use [`MarkerConvention::ContinuationPrefix`];
    /// everything else is [`MarkerConvention::WordInitial`].
    pub fn from_config_name(name: &str) -> Self {
        if name.starts_with("wordpiece")
            || name.starts_with("flota_wordpiece")
            || name.starts_with("suffix_wordpiece")
        {
            MarkerConvention::ContinuationPrefix
        } else {
            MarkerConvention::WordInitial
        }
    }

    /// The marker string for this convention.
    pub fn marker(&self) -> &'static str {
        match self {
            MarkerConvention::WordInitial => WORD_INITIAL_MARKER,
            MarkerConvention::ContinuationPrefix => CONTINUATION_MARKER,
        }
    }

    /// The vocabulary form of a raw candidate at the given word position.
    ///
    /// `WordInitial` vocabularies are probed bare at every position;
    /// `ContinuationPrefix` vocabularies are probed bare at the word start
    /// and with [`CONTINUATION_MARKER`] prepended everywhere else.
    ///
    /// ## Arguments
    /// * `candidate` - The raw candidate substring.
    /// * `word_start` - Whether the candidate begins at offset 0 of the
    ///   original word.
    ///
    /// ## Returns
    /// The string to look up in the vocabulary.
    pub fn vocab_form<'a>(
        &self,
        candidate: &'a str,
        word_start: bool,
    ) -> Cow<'a, str> {
        match self {
            MarkerConvention::ContinuationPrefix if !word_start => {
                Cow::Owned(format!("{CONTINUATION_MARKER}{candidate}"))
            }
            _ => Cow::Borrowed(candidate),
        }
    }

    /// Applies the convention to a bare gold-standard segmentation.
    ///
    /// Note the asymmetry with [`MarkerConvention::vocab_form`]: probing is
    /// position-relative to the pre-token, while the spelling of a word's
    /// tokens marks the word-initial token for the byte-level family.
    ///
    /// ## Arguments
    /// * `segmentation` - Bare tokens whose concatenation is the word.
    ///
    /// ## Returns
    /// The tokens as this convention's vocabulary would spell them.
    pub fn mark_segmentation(
        &self,
        segmentation: &[String],
    ) -> Vec<String> {
        segmentation
            .iter()
            .enumerate()
            .map(|(idx, token)| {
                let mark = match self {
                    MarkerConvention::WordInitial => idx == 0,
                    MarkerConvention::ContinuationPrefix => idx != 0,
                };
                if mark {
                    format!("{}{token}", self.marker())
                } else {
                    token.clone()
                }
            })
            .collect()
    }

    /// Strips this convention's marker prefix from a token, if present.
    pub fn strip_marker<'a>(
        &self,
        token: &'a str,
    ) -> &'a str {
        token.strip_prefix(self.marker()).unwrap_or(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config_name() {
        assert_eq!(
            MarkerConvention::from_config_name("wordpiece_32k.json"),
            MarkerConvention::ContinuationPrefix
        );
        assert_eq!(
            MarkerConvention::from_config_name("suffix_wordpiece_32k.json"),
            MarkerConvention::ContinuationPrefix
        );
        assert_eq!(
            MarkerConvention::from_config_name("bpe_32k.json"),
            MarkerConvention::WordInitial
        );
        assert_eq!(
            MarkerConvention::from_config_name("flota_unigram_32k.json"),
            MarkerConvention::WordInitial
        );
    }

    #[test]
    fn test_vocab_form() {
        let wi = MarkerConvention::WordInitial;
        assert_eq!(wi.vocab_form("play", true), "play");
        assert_eq!(wi.vocab_form("ing", false), "ing");

        let cp = MarkerConvention::ContinuationPrefix;
        assert_eq!(cp.vocab_form("play", true), "play");
        assert_eq!(cp.vocab_form("ing", false), "##ing");
    }

    #[test]
    fn test_mark_and_strip() {
        let gold = vec!["un".to_string(), "do".to_string()];

        let cp = MarkerConvention::ContinuationPrefix;
        assert_eq!(cp.mark_segmentation(&gold), vec!["un", "##do"]);
        assert_eq!(
            MarkerConvention::WordInitial.mark_segmentation(&gold),
            vec!["Ġun", "do"]
        );

        assert_eq!(cp.strip_marker("##do"), "do");
        assert_eq!(cp.strip_marker("un"), "un");

        let wi = MarkerConvention::WordInitial;
        assert_eq!(wi.strip_marker("Ġplay"), "play");
        assert_eq!(wi.strip_marker("play"), "play");
    }
}
