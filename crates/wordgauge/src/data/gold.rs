//! # Gold-Standard Segmentation Table
//!
//! The combined morphology table is a CSV with one row per word, carrying
//! the dataset of origin and the gold segmentation as a Python-style list
//! literal (e.g. `['un', 'do']`), which is how the upstream datasets ship.

use std::path::Path;

use crate::errors::{WGResult, WordgaugeError};
use crate::scoring::GoldRecord;

#[derive(Debug, serde::Deserialize)]
struct RawGoldRow {
    #[serde(rename = "Origin")]
    origin: String,

    #[serde(rename = "Word")]
    word: String,

    #[serde(rename = "Gold_standard_segmentation")]
    segmentation: String,
}

/// Parse a Python-style list literal of strings.
///
/// Accepts single or double quoted items with backslash escapes, e.g.
/// `['un', 'do']` or `["isn't", "it"]`.
pub fn parse_segmentation_literal(text: &str) -> WGResult<Vec<String>> {
    let malformed =
        || WordgaugeError::Parse(format!("malformed list literal: {text:?}"));

    let inner = text
        .trim()
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .ok_or_else(malformed)?;

    let mut items = Vec::new();
    let mut chars = inner.chars().peekable();

    loop {
        // Skip separators and whitespace up to the next quoted item.
        while matches!(chars.peek(), Some(c) if c.is_whitespace() || *c == ',')
        {
            chars.next();
        }
        let Some(quote) = chars.next() else {
            break;
        };
        if quote != '\'' && quote != '"' {
            return Err(malformed());
        }

        let mut item = String::new();
        loop {
            match chars.next() {
                Some('\\') => match chars.next() {
                    Some(escaped) => item.push(escaped),
                    None => return Err(malformed()),
                },
                Some(c) if c == quote => break,
                Some(c) => item.push(c),
                None => return Err(malformed()),
            }
        }
        items.push(item);
    }

    Ok(items)
}

/// Load gold-standard records from the combined CSV table.
pub fn load_gold_records(path: impl AsRef<Path>) -> WGResult<Vec<GoldRecord>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut records = Vec::new();

    for row in reader.deserialize() {
        let row: RawGoldRow = row?;
        records.push(GoldRecord {
            origin: row.origin,
            word: row.word,
            segmentation: parse_segmentation_literal(&row.segmentation)?,
        });
    }

    Ok(records)
}
