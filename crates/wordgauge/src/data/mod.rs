//! # Dataset Loading
//!
//! External tabular inputs of the benchmark:
//! * [`load_corpus`] - plain-text corpus, one line per entry.
//! * [`load_gold_records`] - combined gold-standard morphology CSV.
//! * [`load_lexical_records`] - lexical-decision measurements CSV.

pub mod corpus;
pub mod gold;
pub mod lexical;

#[doc(inline)]
pub use corpus::load_corpus;
#[doc(inline)]
pub use gold::{load_gold_records, parse_segmentation_literal};
#[doc(inline)]
pub use lexical::load_lexical_records;
