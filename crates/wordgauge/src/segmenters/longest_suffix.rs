//! # Longest-Suffix Segmentation
//!
//! Scans a word left to right, committing the longest vocabulary-matching
//! *suffix* of the remaining prefix. Each committed suffix is pushed onto
//! the front of the output, so the sequence is already in surface order when
//! the prefix is exhausted.

use std::collections::VecDeque;
use std::sync::Arc;

use crate::errors::{WGResult, WordgaugeError};
use crate::segmenters::Segmenter;
use crate::vocab::SubwordVocab;

/// Greedy longest-suffix segmenter.
#[derive(Debug, Clone)]
pub struct LongestSuffixSegmenter {
    vocab: Arc<SubwordVocab>,
}

impl LongestSuffixSegmenter {
    /// Create a segmenter over the given vocabulary.
    pub fn new(vocab: Arc<SubwordVocab>) -> Self {
        Self { vocab }
    }
}

impl Segmenter for LongestSuffixSegmenter {
    fn vocab(&self) -> &SubwordVocab {
        &self.vocab
    }

    fn segment(
        &self,
        word: &str,
    ) -> WGResult<Vec<String>> {
        let chars: Vec<char> = word.chars().collect();
        let mut tokens: VecDeque<String> = VecDeque::new();

        // The working prefix is chars[..end]; the candidate suffix starts
        // at `start` and shrinks from the left on a miss. The working
        // prefix is always a prefix of the original word, so `start == 0`
        // is exactly "this token begins the word".
        let mut end = chars.len();
        let mut start = 0;

        while end > 0 {
            if start == end {
                return Err(WordgaugeError::VocabIncomplete {
                    word: word.to_string(),
                });
            }

            let candidate: String = chars[start..end].iter().collect();
            if let Some(token) = self.vocab.lookup(&candidate, start == 0) {
                tokens.push_front(token);
                end = start;
                start = 0;
            } else {
                start += 1;
            }
        }

        Ok(tokens.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segmenters::test_utils::{fallback_vocab, literal_vocab};
    use crate::vocab::MarkerConvention;

    #[test]
    fn test_suffix_growth() {
        let vocab =
            literal_vocab(&["un", "do"], MarkerConvention::WordInitial);
        let segmenter = LongestSuffixSegmenter::new(vocab);

        // "do" is found first from the right, then "un".
        assert_eq!(segmenter.segment("undo").unwrap(), vec!["un", "do"]);
    }

    #[test]
    fn test_whole_word_preferred() {
        let vocab = literal_vocab(
            &["un", "do", "undo"],
            MarkerConvention::WordInitial,
        );
        let segmenter = LongestSuffixSegmenter::new(vocab);

        // The full suffix is probed first.
        assert_eq!(segmenter.segment("undo").unwrap(), vec!["undo"]);
    }

    #[test]
    fn test_continuation_prefix_positions() {
        let vocab = literal_vocab(
            &["play", "##ing"],
            MarkerConvention::ContinuationPrefix,
        );
        let segmenter = LongestSuffixSegmenter::new(vocab);

        assert_eq!(
            segmenter.segment("playing").unwrap(),
            vec!["play", "##ing"]
        );
    }

    #[test]
    fn test_incomplete_vocab() {
        let vocab =
            literal_vocab(&["do"], MarkerConvention::WordInitial);
        let segmenter = LongestSuffixSegmenter::new(vocab);

        // "do" matches as a suffix, but "un" cannot be consumed.
        assert!(matches!(
            segmenter.segment("undo"),
            Err(WordgaugeError::VocabIncomplete { .. })
        ));
    }

    #[test]
    fn test_single_char_fallback() {
        let vocab = fallback_vocab(&[], MarkerConvention::WordInitial);
        let segmenter = LongestSuffixSegmenter::new(vocab);

        assert_eq!(
            segmenter.segment("cab").unwrap(),
            vec!["c", "a", "b"]
        );
    }

    #[test]
    fn test_segment_text() {
        let vocab = literal_vocab(
            &["un", "do", "play", "ing"],
            MarkerConvention::WordInitial,
        );
        let segmenter = LongestSuffixSegmenter::new(vocab);

        assert_eq!(
            segmenter.segment_text("undo playing").unwrap(),
            vec!["un", "do", "play", "ing"]
        );
    }
}
