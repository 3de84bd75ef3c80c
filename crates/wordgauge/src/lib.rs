//! # `wordgauge` Subword Tokenizer Benchmark Suite
//!
//! `wordgauge` evaluates subword tokenizers against linguistic, cognitive,
//! and statistical criteria, producing a per-tokenizer metrics table.
//!
//! See:
//! * [`segmenters`] for the custom greedy segmentation strategies
//!   ([`FlotaSegmenter`], [`LongestSuffixSegmenter`]).
//! * [`scoring`] for boundary-based agreement scoring and gold-standard
//!   coverage evaluation.
//! * [`metrics`] for fertility, entropy, cognitive, and comparative
//!   measures.
//! * [`vocab`] for the vocabulary index and marker conventions.
//! * [`config`] for config-driven segmenter construction.
//! * [`data`] for dataset loading.
//!
//! Standard tokenizer backends (BPE, WordPiece, Unigram, their normalizers
//! and pre-tokenizers) are external collaborators: anything implementing
//! [`Segmenter`] can be scored, and config dispatch to a standard backend
//! type reports [`WordgaugeError::UnsupportedModel`].
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use wordgauge::scoring::BoundaryCounts;
//! use wordgauge::vocab::{MarkerConvention, SubwordVocab};
//! use wordgauge::{FlotaSegmenter, Segmenter};
//!
//! let vocab = Arc::new(SubwordVocab::new(
//!     ["un", "do", "undo"].map(String::from),
//!     MarkerConvention::WordInitial,
//! ));
//!
//! let segmenter = FlotaSegmenter::new(vocab);
//! let hypothesis = segmenter.segment("undo").unwrap();
//! assert_eq!(hypothesis, vec!["undo"]);
//!
//! let gold = ["un", "do"].map(String::from);
//! let counts = BoundaryCounts::score(&hypothesis, &gold);
//! assert_eq!(counts.false_negatives, 1);
//! ```
#![warn(missing_docs, unused)]

pub mod config;
pub mod data;
pub mod errors;
pub mod metrics;
pub mod scoring;
pub mod segmenters;
pub mod types;
pub mod vocab;

#[doc(inline)]
pub use errors::{WGResult, WordgaugeError};
#[doc(inline)]
pub use scoring::{BoundaryCounts, ScoreAccumulator};
#[doc(inline)]
pub use segmenters::{FlotaSegmenter, LongestSuffixSegmenter, Segmenter};
#[doc(inline)]
pub use vocab::{MarkerConvention, SubwordVocab};
