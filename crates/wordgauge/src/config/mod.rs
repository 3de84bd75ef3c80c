//! # Tokenizer Model Configs
//!
//! Tokenizer configs are JSON documents whose `model.type` string selects
//! the tokenization strategy and whose `model.vocab` carries the vocabulary,
//! either as a `{token: rank}` map or as a `[(token, score)]` list (the
//! Unigram-style spelling).
//!
//! Only the custom greedy strategies are built here; the standard backends
//! (BPE, WordPiece, Unigram, ...) live behind an external tokenization
//! library and dispatch to them produces
//! [`WordgaugeError::UnsupportedModel`](crate::WordgaugeError::UnsupportedModel).

use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

use crate::errors::{WGResult, WordgaugeError};
use crate::segmenters::{FlotaSegmenter, LongestSuffixSegmenter, Segmenter};
use crate::types::WGHashMap;
use crate::vocab::{MarkerConvention, SubwordVocab};

/// A parsed tokenizer config document.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct TokenizerConfig {
    /// The model section; normalizer/pre-tokenizer sections belong to the
    /// external backends and are ignored here.
    pub model: ModelConfig,
}

/// The `model` section of a tokenizer config.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct ModelConfig {
    /// The model type string, e.g. `"flota"` or `"WP_longest_suffix"`.
    #[serde(rename = "type")]
    pub kind: String,

    /// The vocabulary, in either config spelling.
    pub vocab: VocabSpec,
}

/// The two vocabulary spellings found in config files.
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(untagged)]
pub enum VocabSpec {
    /// `{token: rank}`, the BPE/WordPiece spelling.
    Ranked(WGHashMap<String, u32>),

    /// `[(token, score)]`, the Unigram spelling.
    Scored(Vec<(String, f64)>),
}

impl VocabSpec {
    /// The token strings, discarding ranks/scores.
    pub fn into_tokens(self) -> Vec<String> {
        match self {
            VocabSpec::Ranked(map) => map.into_keys().collect(),
            VocabSpec::Scored(entries) => {
                entries.into_iter().map(|(token, _)| token).collect()
            }
        }
    }

    /// The number of vocabulary entries.
    pub fn len(&self) -> usize {
        match self {
            VocabSpec::Ranked(map) => map.len(),
            VocabSpec::Scored(entries) => entries.len(),
        }
    }

    /// Returns true if the vocabulary is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The model types this crate can build segmenters for.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    strum::EnumString,
    strum::Display,
)]
pub enum ModelKind {
    /// Longest-match-anywhere, byte-level marker family.
    #[strum(serialize = "flota")]
    Flota,

    /// Longest-match-anywhere, WordPiece marker family.
    #[strum(serialize = "WP_flota")]
    WpFlota,

    /// Longest-suffix, byte-level marker family.
    #[strum(serialize = "longest_suffix")]
    LongestSuffix,

    /// Longest-suffix, WordPiece marker family.
    #[strum(serialize = "WP_longest_suffix")]
    WpLongestSuffix,
}

impl ModelKind {
    /// The marker convention the model's vocabulary follows.
    pub fn convention(&self) -> MarkerConvention {
        match self {
            ModelKind::Flota | ModelKind::LongestSuffix => {
                MarkerConvention::WordInitial
            }
            ModelKind::WpFlota | ModelKind::WpLongestSuffix => {
                MarkerConvention::ContinuationPrefix
            }
        }
    }
}

impl TokenizerConfig {
    /// Load a config document from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> WGResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// The parsed model kind.
    ///
    /// ## Returns
    /// The kind, or [`WordgaugeError::UnsupportedModel`] for the standard
    /// backend types this crate does not build.
    pub fn model_kind(&self) -> WGResult<ModelKind> {
        ModelKind::from_str(&self.model.kind).map_err(|_| {
            WordgaugeError::UnsupportedModel(self.model.kind.clone())
        })
    }

    /// Build the configured segmenter.
    pub fn build_segmenter(&self) -> WGResult<Arc<dyn Segmenter>> {
        let kind = self.model_kind()?;
        let vocab = Arc::new(SubwordVocab::new(
            self.model.vocab.clone().into_tokens(),
            kind.convention(),
        ));

        log::info!(
            "building {kind} segmenter over {} vocab entries",
            vocab.len()
        );

        Ok(match kind {
            ModelKind::Flota | ModelKind::WpFlota => {
                Arc::new(FlotaSegmenter::new(vocab))
            }
            ModelKind::LongestSuffix | ModelKind::WpLongestSuffix => {
                Arc::new(LongestSuffixSegmenter::new(vocab))
            }
        })
    }
}
