//! # Cognitive Plausibility Features
//!
//! Correlates a segmenter's per-word "chunkability" against human
//! lexical-decision measurements (reaction times and accuracies), split by
//! lexicality.
//!
//! The correlation coefficient itself is supplied by the caller through the
//! [`Correlation`] seam; this module only derives the token-count features
//! and assembles the report.

use crate::errors::{WGResult, WordgaugeError};
use crate::segmenters::Segmenter;

/// A correlation function over two equal-length samples.
pub type Correlation = fn(&[f64], &[f64]) -> f64;

/// Whether a lexical-decision stimulus is a real word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lexicality {
    /// A real word.
    Word,
    /// A pronounceable nonword.
    Nonword,
}

impl Lexicality {
    /// The report label for this category.
    pub fn label(&self) -> &'static str {
        match self {
            Lexicality::Word => "words",
            Lexicality::Nonword => "nonwords",
        }
    }
}

/// One lexical-decision measurement.
#[derive(Debug, Clone, PartialEq)]
pub struct LexicalRecord {
    /// The stimulus spelling.
    pub spelling: String,

    /// Mean reaction time.
    pub rt: f64,

    /// Mean response accuracy.
    pub accuracy: f64,

    /// Word or nonword.
    pub lexicality: Lexicality,
}

/// Correlations for one lexicality category.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryCorrelation {
    /// The category label ("words" or "nonwords").
    pub category: String,

    /// Correlation of chunkability against reaction times.
    pub rt_correlation: f64,

    /// Correlation of chunkability against accuracies.
    pub accuracy_correlation: f64,
}

/// The cognitive correlation report for one segmenter.
#[derive(Debug, Clone, PartialEq)]
pub struct CognitiveReport {
    /// One entry per category.
    pub per_category: Vec<CategoryCorrelation>,

    /// Mean absolute correlation across all category/measurement pairs.
    pub score: f64,
}

/// Per-word chunkability: `1 - tokens / chars`.
///
/// A word kept whole scores close to 1; a word shattered into characters
/// scores 0.
pub fn chunkability(
    segmenter: &dyn Segmenter,
    words: &[String],
) -> WGResult<Vec<f64>> {
    words
        .iter()
        .map(|word| {
            let tokens = segmenter.segment(word)?.len();
            Ok(1.0 - tokens as f64 / word.chars().count() as f64)
        })
        .collect()
}

/// Correlate chunkability against lexical-decision measurements.
///
/// ## Arguments
/// * `segmenter` - The segmenter under evaluation.
/// * `records` - Lexical-decision rows; both lexicalities mixed.
/// * `correlation` - The correlation function (supplied by the caller, per
///   the scoring contract).
///
/// ## Returns
/// A [`CognitiveReport`], or [`WordgaugeError::DegenerateScore`] when either
/// category is empty.
pub fn cognitive_scores(
    segmenter: &dyn Segmenter,
    records: &[LexicalRecord],
    correlation: Correlation,
) -> WGResult<CognitiveReport> {
    let mut per_category = Vec::with_capacity(2);
    let mut abs_sum = 0.0;

    for lexicality in [Lexicality::Word, Lexicality::Nonword] {
        let rows: Vec<&LexicalRecord> = records
            .iter()
            .filter(|r| r.lexicality == lexicality)
            .collect();
        if rows.is_empty() {
            return Err(WordgaugeError::DegenerateScore);
        }

        let spellings: Vec<String> =
            rows.iter().map(|r| r.spelling.clone()).collect();
        let wordiness = chunkability(segmenter, &spellings)?;
        let rts: Vec<f64> = rows.iter().map(|r| r.rt).collect();
        let accs: Vec<f64> = rows.iter().map(|r| r.accuracy).collect();

        let rt_correlation = correlation(&wordiness, &rts);
        let accuracy_correlation = correlation(&wordiness, &accs);
        abs_sum += rt_correlation.abs() + accuracy_correlation.abs();

        per_category.push(CategoryCorrelation {
            category: lexicality.label().to_string(),
            rt_correlation,
            accuracy_correlation,
        });
    }

    let score = abs_sum / (2.0 * per_category.len() as f64);
    Ok(CognitiveReport {
        per_category,
        score,
    })
}
