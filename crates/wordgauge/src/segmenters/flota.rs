//! # Flota Segmentation
//!
//! "Few Longest Token Approximation": repeatedly extract the longest
//! vocabulary-matching substring found *anywhere* in the unconsumed span of
//! the word, then stitch the matches back together in surface order.
//!
//! This differs from left-to-right greedy tokenizers in that a match may
//! start at any offset of the remaining span, not only at its left edge.
//!
//! Consumed positions are tracked with a boolean mask over the word's
//! characters, so no sentinel character is injected into the working buffer
//! and the input alphabet is unconstrained.

use std::sync::Arc;

use crate::errors::{WGResult, WordgaugeError};
use crate::segmenters::Segmenter;
use crate::vocab::SubwordVocab;

/// Greedy longest-match-anywhere segmenter.
///
/// Worst case is cubic in word length from the nested length/offset scan;
/// acceptable for natural-language words, and part of the contract rather
/// than something to optimize away.
#[derive(Debug, Clone)]
pub struct FlotaSegmenter {
    vocab: Arc<SubwordVocab>,
}

impl FlotaSegmenter {
    /// Create a segmenter over the given vocabulary.
    pub fn new(vocab: Arc<SubwordVocab>) -> Self {
        Self { vocab }
    }

    /// Find the longest unconsumed vocabulary match.
    ///
    /// Scans window lengths from longest to shortest, and offsets left to
    /// right within a length; the first hit wins. Windows overlapping a
    /// consumed position are skipped.
    ///
    /// ## Returns
    /// `(start, len, token)` of the match in its vocabulary spelling,
    /// or None when nothing matches.
    fn max_subword(
        &self,
        chars: &[char],
        consumed: &[bool],
    ) -> Option<(usize, usize, String)> {
        let n = chars.len();
        for len in (1..=n).rev() {
            for start in 0..=(n - len) {
                if consumed[start..start + len].iter().any(|&c| c) {
                    continue;
                }
                let candidate: String =
                    chars[start..start + len].iter().collect();
                if let Some(token) = self.vocab.lookup(&candidate, start == 0)
                {
                    return Some((start, len, token));
                }
            }
        }
        None
    }
}

impl Segmenter for FlotaSegmenter {
    fn vocab(&self) -> &SubwordVocab {
        &self.vocab
    }

    fn segment(
        &self,
        word: &str,
    ) -> WGResult<Vec<String>> {
        let chars: Vec<char> = word.chars().collect();
        let mut consumed = vec![false; chars.len()];
        let mut pieces: Vec<(usize, String)> = Vec::new();

        while consumed.iter().any(|&c| !c) {
            let Some((start, len, token)) =
                self.max_subword(&chars, &consumed)
            else {
                return Err(WordgaugeError::VocabIncomplete {
                    word: word.to_string(),
                });
            };

            consumed[start..start + len].fill(true);
            pieces.push((start, token));
        }

        pieces.sort_by_key(|&(start, _)| start);
        Ok(pieces.into_iter().map(|(_, token)| token).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segmenters::test_utils::{fallback_vocab, literal_vocab};
    use crate::vocab::MarkerConvention;
    use proptest::prelude::*;

    #[test]
    fn test_longest_match_wins() {
        let vocab = literal_vocab(
            &["un", "do", "und", "undo"],
            MarkerConvention::WordInitial,
        );
        let segmenter = FlotaSegmenter::new(vocab);

        assert_eq!(segmenter.segment("undo").unwrap(), vec!["undo"]);
    }

    #[test]
    fn test_match_anywhere() {
        // "visualization": the longest entry is an interior substring.
        let vocab = fallback_vocab(
            &["visual", "ization", "izat"],
            MarkerConvention::WordInitial,
        );
        let segmenter = FlotaSegmenter::new(vocab);

        assert_eq!(
            segmenter.segment("visualization").unwrap(),
            vec!["visual", "ization"]
        );
    }

    #[test]
    fn test_continuation_prefix_positions() {
        let vocab = literal_vocab(
            &["play", "##ing"],
            MarkerConvention::ContinuationPrefix,
        );
        let segmenter = FlotaSegmenter::new(vocab);

        assert_eq!(
            segmenter.segment("playing").unwrap(),
            vec!["play", "##ing"]
        );
    }

    #[test]
    fn test_unmarked_split_is_incomplete() {
        // Bare "ing" is never probed at a non-initial offset, so any split
        // beyond the (absent) whole-word match leaves "ing" unmatched.
        let vocab = literal_vocab(
            &["play", "ing"],
            MarkerConvention::ContinuationPrefix,
        );
        let segmenter = FlotaSegmenter::new(vocab);

        assert!(matches!(
            segmenter.segment("playing"),
            Err(WordgaugeError::VocabIncomplete { .. })
        ));
    }

    #[test]
    fn test_empty_word() {
        let vocab = fallback_vocab(&[], MarkerConvention::WordInitial);
        let segmenter = FlotaSegmenter::new(vocab);

        assert!(segmenter.segment("").unwrap().is_empty());
    }

    #[test]
    fn test_leftmost_tie_break() {
        // Both "ab" and "ba" are length-2 matches in "aba"; the leftmost
        // offset wins, leaving "a" for the single-character fallback.
        let vocab = fallback_vocab(
            &["ab", "ba"],
            MarkerConvention::WordInitial,
        );
        let segmenter = FlotaSegmenter::new(vocab);

        assert_eq!(segmenter.segment("aba").unwrap(), vec!["ab", "a"]);
    }

    proptest! {
        #[test]
        fn prop_round_trip_word_initial(word in "[a-z]{1,12}") {
            let vocab = fallback_vocab(
                &["ing", "er", "un", "play", "do"],
                MarkerConvention::WordInitial,
            );
            let segmenter = FlotaSegmenter::new(vocab);

            let tokens = segmenter.segment(&word).unwrap();
            let rebuilt: String = tokens.concat();
            prop_assert_eq!(&rebuilt, &word);
        }

        #[test]
        fn prop_round_trip_continuation(word in "[a-z]{1,12}") {
            let convention = MarkerConvention::ContinuationPrefix;
            let vocab = fallback_vocab(
                &["play", "##ing", "##er"],
                convention,
            );
            let segmenter = FlotaSegmenter::new(vocab);

            let tokens = segmenter.segment(&word).unwrap();
            let rebuilt: String = tokens
                .iter()
                .map(|t| convention.strip_marker(t))
                .collect();
            prop_assert_eq!(&rebuilt, &word);
        }

        #[test]
        fn prop_deterministic(word in "[a-z]{1,12}") {
            let vocab = fallback_vocab(
                &["ing", "at", "ion"],
                MarkerConvention::WordInitial,
            );
            let segmenter = FlotaSegmenter::new(vocab);

            prop_assert_eq!(
                segmenter.segment(&word).unwrap(),
                segmenter.segment(&word).unwrap()
            );
        }
    }
}
