//! # Fertility

use crate::errors::{WGResult, WordgaugeError};
use crate::segmenters::Segmenter;

/// Tokens emitted per whitespace word over a corpus.
///
/// A fertility of 1.0 means every word stays whole; higher values mean more
/// splitting.
///
/// ## Arguments
/// * `segmenter` - The segmenter under evaluation.
/// * `corpus` - Corpus lines.
pub fn fertility(
    segmenter: &dyn Segmenter,
    corpus: &[String],
) -> WGResult<f64> {
    let mut tokens = 0usize;
    let mut words = 0usize;

    for line in corpus {
        tokens += segmenter.segment_text(line)?.len();
        words += line.split_whitespace().count();
    }

    if words == 0 {
        return Err(WordgaugeError::DegenerateScore);
    }
    Ok(tokens as f64 / words as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segmenters::LongestSuffixSegmenter;
    use crate::segmenters::test_utils::fallback_vocab;
    use crate::vocab::MarkerConvention;

    #[test]
    fn test_fertility() {
        let vocab = fallback_vocab(
            &["un", "do", "playing"],
            MarkerConvention::WordInitial,
        );
        let segmenter = LongestSuffixSegmenter::new(vocab);

        // "undo" -> 2 tokens, "playing" -> 1 token; 3 tokens / 2 words.
        let corpus = vec!["undo playing".to_string()];
        assert_eq!(fertility(&segmenter, &corpus).unwrap(), 1.5);
    }

    #[test]
    fn test_empty_corpus() {
        let vocab = fallback_vocab(&[], MarkerConvention::WordInitial);
        let segmenter = LongestSuffixSegmenter::new(vocab);

        assert!(matches!(
            fertility(&segmenter, &[]),
            Err(WordgaugeError::DegenerateScore)
        ));
    }
}
