use crate::error::{Error, Result};
use crate::index::Index;
use crate::query::{self, QueryOutcome};
use crate::tokenizer::Normalizer;
use crate::{DocId, SearchHit};
use std::sync::OnceLock;

/// Holds an index that is built exactly once and then only read.
///
/// Queries issued before [`SearchEngine::build`] fail with [`Error::IndexNotReady`]
/// instead of looking like "no matches". After the build the engine can be shared
/// across threads without locking.
#[derive(Debug, Default)]
pub struct SearchEngine {
    normalizer: Normalizer,
    index: OnceLock<Index>,
}

impl SearchEngine {
    pub fn new(normalizer: Normalizer) -> Self {
        Self { normalizer, index: OnceLock::new() }
    }

    pub fn build<I, D, S>(&self, documents: I) -> Result<&Index>
    where
        I: IntoIterator<Item = (D, S)>,
        D: Into<DocId>,
        S: AsRef<str>,
    {
        if self.index.get().is_some() {
            return Err(Error::AlreadyBuilt);
        }
        let built = Index::build(&self.normalizer, documents);
        self.index.set(built).map_err(|_| Error::AlreadyBuilt)?;
        self.index()
    }

    pub fn is_ready(&self) -> bool { self.index.get().is_some() }

    pub fn index(&self) -> Result<&Index> { self.index.get().ok_or(Error::IndexNotReady) }

    pub fn search(&self, query: &str) -> Result<Vec<SearchHit>> {
        Ok(query::search(self.index()?, query))
    }

    pub fn evaluate(&self, query: &str) -> Result<QueryOutcome> {
        Ok(query::evaluate(self.index()?, query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_before_build_is_an_error() {
        let engine = SearchEngine::default();
        assert!(!engine.is_ready());
        assert_eq!(engine.search("attack"), Err(Error::IndexNotReady));
        assert_eq!(engine.evaluate("attack"), Err(Error::IndexNotReady));
        assert!(engine.index().is_err());
    }

    #[test]
    fn builds_once() {
        let engine = SearchEngine::default();
        let idx = engine.build([("d1", "attack vector")]).map(|i| i.num_docs());
        assert_eq!(idx, Ok(1));
        assert_eq!(engine.build([("d2", "other")]).map(|i| i.num_docs()), Err(Error::AlreadyBuilt));
        let hits = engine.search("vector").unwrap_or_default();
        assert_eq!(hits, vec![SearchHit { doc_id: "d1".into(), score: 1 }]);
    }
}
