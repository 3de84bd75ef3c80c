//! # Rényi Entropy Efficiency
//!
//! The entropy score of a tokenization is the Rényi entropy of its token
//! frequency distribution, normalized by the log of the number of distinct
//! token types observed. Peaked distributions (a few tokens dominating)
//! score low; balanced distributions score near 1.0.

use crate::errors::{WGResult, WordgaugeError};
use crate::segmenters::Segmenter;
use crate::types::WGHashMap;

/// The default Rényi power for entropy scoring.
pub const DEFAULT_RENYI_POWER: f64 = 2.5;

/// Rényi efficiency of a token stream.
///
/// ## Arguments
/// * `tokens` - The tokenized corpus, flattened.
/// * `power` - The Rényi order; 1.0 degrades to Shannon entropy.
///
/// ## Returns
/// `H_power(p) / ln(V)` over the observed type distribution, or
/// [`WordgaugeError::DegenerateScore`] for fewer than two observed types.
pub fn renyi_efficiency<'a>(
    tokens: impl IntoIterator<Item = &'a str>,
    power: f64,
) -> WGResult<f64> {
    let mut counts: WGHashMap<&str, usize> = WGHashMap::default();
    let mut total = 0usize;
    for token in tokens {
        *counts.entry(token).or_default() += 1;
        total += 1;
    }

    if counts.len() < 2 {
        return Err(WordgaugeError::DegenerateScore);
    }

    let n = total as f64;
    let entropy = if (power - 1.0).abs() < 1e-9 {
        counts
            .values()
            .map(|&c| {
                let p = c as f64 / n;
                -p * p.ln()
            })
            .sum::<f64>()
    } else {
        let mass: f64 = counts
            .values()
            .map(|&c| (c as f64 / n).powf(power))
            .sum();
        mass.ln() / (1.0 - power)
    };

    Ok(entropy / (counts.len() as f64).ln())
}

/// Tokenize a corpus and compute its Rényi efficiency.
pub fn entropy_score(
    segmenter: &dyn Segmenter,
    corpus: &[String],
    power: f64,
) -> WGResult<f64> {
    let mut tokens = Vec::new();
    for line in corpus {
        tokens.extend(segmenter.segment_text(line)?);
    }
    renyi_efficiency(tokens.iter().map(String::as_str), power)
}
