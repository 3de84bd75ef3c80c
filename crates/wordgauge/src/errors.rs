//! # Error Types

/// Errors from wordgauge operations.
#[derive(Debug, thiserror::Error)]
pub enum WordgaugeError {
    /// A segmenter could not make progress on a word.
    ///
    /// Signals that the vocabulary is missing fallback single-character
    /// entries for the word's alphabet.
    #[error("vocabulary cannot segment {word:?}")]
    VocabIncomplete {
        /// The word that could not be segmented.
        word: String,
    },

    /// A score was requested over zero boundary counts.
    ///
    /// Signals an empty or fully-skipped evaluation set.
    #[error("no boundary counts accumulated; score is undefined")]
    DegenerateScore,

    /// A tokenizer config names a model type with no in-crate segmenter.
    #[error("unsupported model type: {0}")]
    UnsupportedModel(String),

    /// Malformed config or dataset content.
    #[error("parse error: {0}")]
    Parse(String),

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// CSV read error.
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// JSON config read error.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result type for wordgauge operations.
pub type WGResult<T> = core::result::Result<T, WordgaugeError>;
