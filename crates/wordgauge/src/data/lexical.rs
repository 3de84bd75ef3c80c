//! # Lexical-Decision Data

use std::path::Path;

use crate::errors::WGResult;
use crate::metrics::{Lexicality, LexicalRecord};

#[derive(Debug, serde::Deserialize)]
struct RawLexicalRow {
    spelling: Option<String>,
    rt: Option<f64>,
    accuracy: Option<f64>,
    lexicality: Option<String>,
}

/// Load lexical-decision rows from a CSV file.
///
/// Rows with missing measurements, and rows whose lexicality is neither
/// `"W"` nor `"N"`, are dropped.
pub fn load_lexical_records(
    path: impl AsRef<Path>,
) -> WGResult<Vec<LexicalRecord>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut records = Vec::new();
    let mut dropped = 0usize;

    for row in reader.deserialize() {
        let row: RawLexicalRow = row?;
        let (Some(spelling), Some(rt), Some(accuracy), Some(lexicality)) =
            (row.spelling, row.rt, row.accuracy, row.lexicality)
        else {
            dropped += 1;
            continue;
        };

        let lexicality = match lexicality.as_str() {
            "W" => Lexicality::Word,
            "N" => Lexicality::Nonword,
            _ => {
                dropped += 1;
                continue;
            }
        };

        records.push(LexicalRecord {
            spelling,
            rt,
            accuracy,
            lexicality,
        });
    }

    if dropped > 0 {
        log::debug!("dropped {dropped} incomplete lexical-decision rows");
    }
    Ok(records)
}
