//! # Vocabulary
//!
//! This module provides the subword vocabulary index and the marker
//! conventions that govern how word position is spelled on its entries.
//!
//! The segmentation algorithms in [`crate::segmenters`] only touch the
//! vocabulary through [`SubwordVocab::lookup`], which hides the
//! `WordInitial` / `ContinuationPrefix` branching behind a single
//! position-aware probe.

pub mod marker;
pub mod subword_vocab;

#[doc(inline)]
pub use marker::{CONTINUATION_MARKER, MarkerConvention, WORD_INITIAL_MARKER};
#[doc(inline)]
pub use subword_vocab::SubwordVocab;
