//! # Segmentation Diffing

use crate::errors::{WGResult, WordgaugeError};
use crate::segmenters::Segmenter;

/// Fraction of corpus words on which two segmenters disagree.
///
/// Both segmenters must share a vocabulary marker convention for the token
/// sequences to be comparable as-is.
///
/// ## Arguments
/// * `reference` - The baseline segmenter.
/// * `candidate` - The segmenter being compared.
/// * `corpus` - Corpus lines; compared word by word.
pub fn segmentation_diff(
    reference: &dyn Segmenter,
    candidate: &dyn Segmenter,
    corpus: &[String],
) -> WGResult<f64> {
    let mut diff = 0usize;
    let mut total = 0usize;

    for line in corpus {
        for word in line.split_whitespace() {
            if reference.segment(word)? != candidate.segment(word)? {
                diff += 1;
            }
            total += 1;
        }
    }

    if total == 0 {
        return Err(WordgaugeError::DegenerateScore);
    }
    Ok(diff as f64 / total as f64)
}
