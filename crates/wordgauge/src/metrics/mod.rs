//! # Corpus-Level Metrics
//!
//! The statistical and cognitive measures of the benchmark:
//! * [`fertility`] - tokens per word.
//! * [`entropy_score`] / [`renyi_efficiency`] - token distribution balance.
//! * [`cognitive_scores`] - chunkability correlations against
//!   lexical-decision data.
//! * [`segmentation_diff`] - disagreement rate between two segmenters.

pub mod cognitive;
pub mod compare;
pub mod entropy;
pub mod fertility;

#[doc(inline)]
pub use cognitive::{
    CategoryCorrelation, CognitiveReport, Correlation, Lexicality,
    LexicalRecord, chunkability, cognitive_scores,
};
#[doc(inline)]
pub use compare::segmentation_diff;
#[doc(inline)]
pub use entropy::{DEFAULT_RENYI_POWER, entropy_score, renyi_efficiency};
#[doc(inline)]
pub use fertility::fertility;
