//! # Greedy Segmentation Strategies
//!
//! The custom tokenization strategies evaluated alongside the standard
//! backends:
//!
//! * [`FlotaSegmenter`] - recursive longest-match-anywhere segmentation.
//! * [`LongestSuffixSegmenter`] - greedy suffix-growth segmentation.
//!
//! Both are deterministic, and both require the vocabulary to contain a
//! fallback entry for every single character of the input alphabet (in the
//! applicable marker form); a word that cannot be fully consumed is a
//! precondition violation and surfaces as
//! [`WordgaugeError::VocabIncomplete`](crate::WordgaugeError::VocabIncomplete).

pub mod flota;
pub mod longest_suffix;

#[doc(inline)]
pub use flota::FlotaSegmenter;
#[doc(inline)]
pub use longest_suffix::LongestSuffixSegmenter;

use crate::WGResult;
use crate::vocab::SubwordVocab;

/// Common interface for word segmentation strategies.
pub trait Segmenter: Send + Sync {
    /// The vocabulary this segmenter probes.
    fn vocab(&self) -> &SubwordVocab;

    /// Split a single word into an ordered sequence of subword tokens.
    ///
    /// The concatenation of the returned tokens, after marker stripping,
    /// reconstructs `word` exactly.
    fn segment(
        &self,
        word: &str,
    ) -> WGResult<Vec<String>>;

    /// Split whitespace-separated text, word by word.
    fn segment_text(
        &self,
        text: &str,
    ) -> WGResult<Vec<String>> {
        let mut tokens = Vec::new();
        for word in text.split_whitespace() {
            tokens.extend(self.segment(word)?);
        }
        Ok(tokens)
    }
}
