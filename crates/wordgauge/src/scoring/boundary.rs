//! # Boundary Scoring
//!
//! A segmentation of a word induces a set of interior character offsets,
//! one per token boundary. Agreement between a hypothesis segmentation and
//! a gold segmentation is scored set-wise: shared boundaries are true
//! positives, hypothesis-only boundaries are false positives, gold-only
//! boundaries are false negatives.
//!
//! Offsets are cumulative lengths of the literal token strings, so marker
//! characters count toward offsets as written. Callers must strip markers
//! from both sides first (see [`crate::scoring::segmentation_coverage`]),
//! otherwise the two boundary sets are not comparable.

use crate::errors::{WGResult, WordgaugeError};
use crate::types::WGHashSet;

/// Interior split points of a segmentation, as character offsets.
///
/// The word-start and word-end offsets are excluded; a single-token
/// segmentation has no boundaries.
pub fn boundaries(segmentation: &[String]) -> WGHashSet<usize> {
    let mut cuts = WGHashSet::default();
    if let Some((_, prefix)) = segmentation.split_last() {
        let mut offset = 0;
        for token in prefix {
            offset += token.chars().count();
            cuts.insert(offset);
        }
    }
    cuts
}

/// Boundary agreement counts for one or more scored words.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoundaryCounts {
    /// Boundaries present in both hypothesis and gold.
    pub true_positives: usize,

    /// Boundaries present only in the hypothesis.
    pub false_positives: usize,

    /// Boundaries present only in the gold.
    pub false_negatives: usize,
}

impl BoundaryCounts {
    /// Score one word's hypothesis segmentation against its gold.
    pub fn score(
        hypothesis: &[String],
        gold: &[String],
    ) -> Self {
        let hyp = boundaries(hypothesis);
        let ref_cuts = boundaries(gold);

        let true_positives =
            hyp.iter().filter(|cut| ref_cuts.contains(cut)).count();

        Self {
            true_positives,
            false_positives: hyp.len() - true_positives,
            false_negatives: ref_cuts
                .iter()
                .filter(|cut| !hyp.contains(cut))
                .count(),
        }
    }

    /// The total count mass.
    pub fn total(&self) -> usize {
        self.true_positives + self.false_positives + self.false_negatives
    }

    /// The F1 score over these counts.
    ///
    /// ## Returns
    /// `TP / (TP + 0.5 * (FP + FN))`, or
    /// [`WordgaugeError::DegenerateScore`] when all counts are zero.
    pub fn f1(&self) -> WGResult<f64> {
        if self.total() == 0 {
            return Err(WordgaugeError::DegenerateScore);
        }
        let tp = self.true_positives as f64;
        let fp = self.false_positives as f64;
        let fn_ = self.false_negatives as f64;
        Ok(tp / (tp + 0.5 * (fp + fn_)))
    }
}

impl core::ops::AddAssign for BoundaryCounts {
    fn add_assign(
        &mut self,
        rhs: Self,
    ) {
        self.true_positives += rhs.true_positives;
        self.false_positives += rhs.false_positives;
        self.false_negatives += rhs.false_negatives;
    }
}

/// Running boundary counts over a dataset pass.
///
/// Tracks how many words passed coverage gating alongside the counts; words
/// skipped by gating are never recorded here at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreAccumulator {
    counts: BoundaryCounts,
    covered: usize,
}

impl ScoreAccumulator {
    /// Record one covered word's counts.
    pub fn record(
        &mut self,
        counts: BoundaryCounts,
    ) {
        self.counts += counts;
        self.covered += 1;
    }

    /// The accumulated counts.
    pub fn counts(&self) -> BoundaryCounts {
        self.counts
    }

    /// The number of words recorded.
    pub fn covered(&self) -> usize {
        self.covered
    }

    /// The corpus-level F1 over the accumulated counts.
    pub fn f1(&self) -> WGResult<f64> {
        self.counts.f1()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_boundaries() {
        assert!(boundaries(&seg(&[])).is_empty());
        assert!(boundaries(&seg(&["undo"])).is_empty());

        let cuts = boundaries(&seg(&["un", "do"]));
        assert_eq!(cuts, [2usize].into_iter().collect());

        let cuts = boundaries(&seg(&["un", "do", "ing"]));
        assert_eq!(cuts, [2usize, 4].into_iter().collect());
    }

    #[test]
    fn test_score_disagreement() {
        // H = {2}, G = {} -> one false positive, F1 = 0.
        let counts =
            BoundaryCounts::score(&seg(&["un", "do"]), &seg(&["undo"]));
        assert_eq!(
            counts,
            BoundaryCounts {
                true_positives: 0,
                false_positives: 1,
                false_negatives: 0,
            }
        );
        assert_eq!(counts.f1().unwrap(), 0.0);
    }

    #[test]
    fn test_score_self_agreement() {
        let s = seg(&["un", "do", "ing"]);
        let counts = BoundaryCounts::score(&s, &s);
        assert_eq!(counts.false_positives, 0);
        assert_eq!(counts.false_negatives, 0);
        assert_eq!(counts.f1().unwrap(), 1.0);
    }

    #[test]
    fn test_partial_agreement() {
        // H = {2, 4}, G = {4}: tp=1, fp=1, fn=0 -> F1 = 1/1.5.
        let counts = BoundaryCounts::score(
            &seg(&["un", "do", "ing"]),
            &seg(&["undo", "ing"]),
        );
        assert_eq!(counts.true_positives, 1);
        assert_eq!(counts.false_positives, 1);
        assert_eq!(counts.false_negatives, 0);
        assert!((counts.f1().unwrap() - (1.0 / 1.5)).abs() < 1e-12);
    }

    #[test]
    fn test_degenerate_score() {
        let acc = ScoreAccumulator::default();
        assert!(matches!(
            acc.f1(),
            Err(crate::WordgaugeError::DegenerateScore)
        ));

        // Two single-token words: agreement, but zero boundary mass.
        let mut acc = ScoreAccumulator::default();
        acc.record(BoundaryCounts::score(&seg(&["undo"]), &seg(&["undo"])));
        assert_eq!(acc.covered(), 1);
        assert!(acc.f1().is_err());
    }

    #[test]
    fn test_accumulation() {
        let mut acc = ScoreAccumulator::default();
        acc.record(BoundaryCounts::score(
            &seg(&["un", "do"]),
            &seg(&["un", "do"]),
        ));
        acc.record(BoundaryCounts::score(
            &seg(&["un", "do"]),
            &seg(&["undo"]),
        ));

        assert_eq!(acc.covered(), 2);
        let counts = acc.counts();
        assert_eq!(counts.true_positives, 1);
        assert_eq!(counts.false_positives, 1);
        // F1 = 1 / (1 + 0.5).
        assert!((acc.f1().unwrap() - (1.0 / 1.5)).abs() < 1e-12);
    }
}
