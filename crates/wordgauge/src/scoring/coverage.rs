//! # Linguistic Coverage Evaluation
//!
//! Scores a segmenter's output against gold-standard morphological
//! segmentations, grouped by the dataset each gold word came from, and
//! reports one boundary F1 per origin plus their average.
//!
//! ## Coverage gating
//!
//! A word participates only when its gold segmentation is representable by
//! the vocabulary at all:
//!
//! * Words whose whole marked surface form is already a vocabulary entry are
//!   skipped; the gold split could never win against a single-token match.
//! * Words with any gold token missing from the vocabulary (in the marked
//!   form the convention dictates) are skipped entirely; they are not
//!   counted as zero.

use crate::errors::WGResult;
use crate::scoring::boundary::{BoundaryCounts, ScoreAccumulator};
use crate::segmenters::Segmenter;

/// One gold-standard segmentation record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoldRecord {
    /// The dataset the record came from (e.g. "MorphyNet").
    pub origin: String,

    /// The surface word.
    pub word: String,

    /// The bare gold segmentation; concatenates to `word`.
    pub segmentation: Vec<String>,
}

/// Per-origin coverage results.
#[derive(Debug, Clone, PartialEq)]
pub struct OriginCoverage {
    /// The dataset origin.
    pub origin: String,

    /// Boundary F1 over the origin's covered words.
    pub f1: f64,

    /// How many of the origin's words passed coverage gating.
    pub covered: usize,
}

/// Coverage results over a combined gold-standard table.
#[derive(Debug, Clone, PartialEq)]
pub struct CoverageReport {
    /// One entry per origin, in first-seen order.
    pub per_origin: Vec<OriginCoverage>,

    /// Unweighted mean of the per-origin F1 scores.
    pub avg_f1: f64,
}

/// Evaluate a segmenter against a combined gold-standard table.
///
/// Markers are stripped from the hypothesis before boundary computation;
/// gold segmentations are bare by construction, so both boundary sets live
/// on plain surface-character offsets.
///
/// ## Arguments
/// * `segmenter` - The segmenter under evaluation.
/// * `records` - The gold records, any mix of origins.
///
/// ## Returns
/// A [`CoverageReport`], or an error when any origin accumulates zero
/// boundary mass (see
/// [`WordgaugeError::DegenerateScore`](crate::WordgaugeError::DegenerateScore)).
pub fn segmentation_coverage(
    segmenter: &dyn Segmenter,
    records: &[GoldRecord],
) -> WGResult<CoverageReport> {
    let vocab = segmenter.vocab();
    let convention = vocab.convention();

    let mut origins: Vec<(String, ScoreAccumulator)> = Vec::new();

    for record in records {
        let whole_word =
            convention.mark_segmentation(std::slice::from_ref(&record.word));
        if vocab.contains(&whole_word[0]) {
            continue;
        }
        if !vocab.covers(&record.segmentation) {
            continue;
        }

        let hypothesis: Vec<String> = segmenter
            .segment(&record.word)?
            .iter()
            .map(|token| convention.strip_marker(token).to_string())
            .collect();

        let counts = BoundaryCounts::score(&hypothesis, &record.segmentation);

        let idx = match origins
            .iter()
            .position(|(origin, _)| *origin == record.origin)
        {
            Some(idx) => idx,
            None => {
                origins.push((record.origin.clone(), Default::default()));
                origins.len() - 1
            }
        };
        origins[idx].1.record(counts);
    }

    let mut per_origin = Vec::with_capacity(origins.len());
    let mut f1_sum = 0.0;
    for (origin, accumulator) in origins {
        let f1 = accumulator.f1()?;
        f1_sum += f1;
        log::debug!(
            "coverage[{origin}]: f1={f1:.4} covered={}",
            accumulator.covered()
        );
        per_origin.push(OriginCoverage {
            origin,
            f1,
            covered: accumulator.covered(),
        });
    }

    if per_origin.is_empty() {
        return Err(crate::WordgaugeError::DegenerateScore);
    }
    let avg_f1 = f1_sum / per_origin.len() as f64;

    Ok(CoverageReport { per_origin, avg_f1 })
}
