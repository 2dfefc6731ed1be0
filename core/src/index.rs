use crate::tokenizer::Normalizer;
use crate::DocId;
use std::collections::{HashMap, HashSet};

/// term -> documents containing it
pub type InvertedIndex = HashMap<String, HashSet<DocId>>;
/// term -> (document -> occurrences), counts are always >= 1
pub type TermFrequencies = HashMap<String, HashMap<DocId, u32>>;

/// Inverted index and term-frequency table for a fixed corpus.
///
/// Built once with [`Index::build`] and never mutated afterwards. The normalizer used
/// for the documents is kept so queries go through exactly the same rules.
#[derive(Debug, Clone, PartialEq)]
pub struct Index {
    normalizer: Normalizer,
    inverted: InvertedIndex,
    term_freq: TermFrequencies,
    num_docs: usize,
}

impl Index {
    /// Index every `(doc id, raw text)` pair. A repeated id adds its text to the same
    /// document and is counted once; documents without any surviving term still count
    /// towards [`Index::num_docs`].
    pub fn build<I, D, S>(normalizer: &Normalizer, documents: I) -> Self
    where
        I: IntoIterator<Item = (D, S)>,
        D: Into<DocId>,
        S: AsRef<str>,
    {
        let mut inverted: InvertedIndex = HashMap::new();
        let mut term_freq: TermFrequencies = HashMap::new();
        let mut seen: HashSet<DocId> = HashSet::new();

        for (doc_id, text) in documents {
            let doc_id: DocId = doc_id.into();
            seen.insert(doc_id.clone());
            for term in normalizer.normalize(text.as_ref()) {
                inverted.entry(term.clone()).or_default().insert(doc_id.clone());
                *term_freq.entry(term).or_default().entry(doc_id.clone()).or_insert(0) += 1;
            }
        }

        let num_docs = seen.len();
        tracing::debug!(num_docs, num_terms = inverted.len(), "index built");
        Self { normalizer: normalizer.clone(), inverted, term_freq, num_docs }
    }

    pub fn normalizer(&self) -> &Normalizer { &self.normalizer }
    pub fn num_docs(&self) -> usize { self.num_docs }
    pub fn num_terms(&self) -> usize { self.inverted.len() }
    pub fn contains_term(&self, term: &str) -> bool { self.inverted.contains_key(term) }

    /// Documents containing `term`, if it occurs anywhere in the corpus.
    pub fn docs_for(&self, term: &str) -> Option<&HashSet<DocId>> { self.inverted.get(term) }

    /// Occurrences of `term` in `doc`; 0 when absent.
    pub fn term_frequency(&self, term: &str, doc: &str) -> u32 {
        self.term_freq
            .get(term)
            .and_then(|per_doc| per_doc.get(doc))
            .copied()
            .unwrap_or(0)
    }

    pub fn inverted_index(&self) -> &InvertedIndex { &self.inverted }
    pub fn term_frequencies(&self) -> &TermFrequencies { &self.term_freq }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index(docs: &[(&str, &str)]) -> Index {
        Index::build(&Normalizer::default(), docs.iter().copied())
    }

    #[test]
    fn counts_every_occurrence() {
        let idx = index(&[("a.html", "attack attack attack"), ("b.html", "attack surface")]);
        assert_eq!(idx.term_frequency("attack", "a.html"), 3);
        assert_eq!(idx.term_frequency("attack", "b.html"), 1);
        assert_eq!(idx.term_frequency("surface", "a.html"), 0);
        assert_eq!(idx.docs_for("attack").map(|d| d.len()), Some(2));
    }

    #[test]
    fn stopword_only_document_has_no_terms() {
        let idx = index(&[("empty.html", "a is of"), ("blank.html", "")]);
        assert_eq!(idx.num_docs(), 2);
        assert_eq!(idx.num_terms(), 0);
        assert!(idx.term_frequencies().is_empty());
    }

    #[test]
    fn frequency_table_refines_inverted_index() {
        let idx = index(&[
            ("d1", "cloud security posture"),
            ("d2", "security of the cloud, cloud native"),
            ("d3", "nothing relevant"),
        ]);
        assert_eq!(idx.inverted_index().len(), idx.term_frequencies().len());
        for (term, docs) in idx.inverted_index() {
            let per_doc = &idx.term_frequencies()[term];
            let counted: HashSet<&DocId> = per_doc.keys().collect();
            assert_eq!(counted, docs.iter().collect::<HashSet<_>>());
            assert!(per_doc.values().all(|&c| c >= 1));
        }
    }

    #[test]
    fn repeated_doc_id_counts_once() {
        let idx = index(&[("a.html", "cloud"), ("a.html", "cloud breach"), ("b.html", "")]);
        assert_eq!(idx.num_docs(), 2);
        assert_eq!(idx.term_frequency("cloud", "a.html"), 2);
        assert_eq!(idx.docs_for("cloud").map(|d| d.len()), Some(1));
    }

    #[test]
    fn build_ignores_document_order() {
        let docs = [("x", "alpha beta beta"), ("y", "beta gamma"), ("z", "the")];
        let forward = index(&docs);
        let mut reversed = docs;
        reversed.reverse();
        assert_eq!(forward, index(&reversed));
        assert_eq!(forward, index(&docs));
    }
}
