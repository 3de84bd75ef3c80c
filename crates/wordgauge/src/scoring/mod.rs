//! # Segmentation Scoring
//!
//! Boundary-based agreement scoring between segmentations:
//! * [`boundaries`] / [`BoundaryCounts`] / [`ScoreAccumulator`] for the
//!   set-wise TP/FP/FN machinery.
//! * [`segmentation_coverage`] for gated, per-origin evaluation against a
//!   gold-standard morphology table.

pub mod boundary;
pub mod coverage;

#[doc(inline)]
pub use boundary::{BoundaryCounts, ScoreAccumulator, boundaries};
#[doc(inline)]
pub use coverage::{
    CoverageReport, GoldRecord, OriginCoverage, segmentation_coverage,
};
