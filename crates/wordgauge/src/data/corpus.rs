//! # Corpus Loading

use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::errors::WGResult;

/// Read a corpus file into a list of lines.
pub fn load_corpus(path: impl AsRef<Path>) -> WGResult<Vec<String>> {
    let reader = BufReader::new(std::fs::File::open(path)?);
    let mut corpus = Vec::new();
    for line in reader.lines() {
        corpus.push(line?);
    }
    Ok(corpus)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempdir::TempDir;

    #[test]
    fn test_load_corpus() {
        let dir = TempDir::new("wordgauge-corpus").unwrap();
        let path = dir.path().join("corpus.txt");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "the undo button").unwrap();
        writeln!(file, "still playing").unwrap();

        let corpus = load_corpus(&path).unwrap();
        assert_eq!(corpus, vec!["the undo button", "still playing"]);
    }

    #[test]
    fn test_missing_file() {
        assert!(load_corpus("/no/such/corpus.txt").is_err());
    }
}
