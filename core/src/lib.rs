//! Keyword search over a fixed corpus: term normalization, an inverted index with
//! per-document term counts, and AND queries ranked by summed term frequency.

pub mod engine;
pub mod error;
pub mod index;
pub mod query;
pub mod tokenizer;

use serde::{Deserialize, Serialize};

pub use engine::SearchEngine;
pub use error::{Error, Result};
pub use index::Index;
pub use query::{evaluate, search, QueryOutcome};
pub use tokenizer::{Normalizer, StopWords};

/// Document identifier, the source file name.
pub type DocId = String;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    pub doc_id: DocId,
    pub score: u32,
}
