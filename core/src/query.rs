use crate::index::Index;
use crate::{DocId, SearchHit};
use std::collections::HashSet;

/// What a single query resolved to. Every variant except `Matches` means "no results",
/// but callers can tell the user why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryOutcome {
    /// The query was blank.
    EmptyQuery,
    /// Only stopwords or single characters remained after normalization.
    NoTerms,
    /// This term never occurs in the corpus, so no document can contain every term.
    UnknownTerm(String),
    /// Every term is known but no single document contains all of them.
    NoMatches,
    /// Ranked hits, never empty.
    Matches(Vec<SearchHit>),
}

impl QueryOutcome {
    pub fn hits(&self) -> &[SearchHit] {
        match self {
            QueryOutcome::Matches(hits) => hits,
            _ => &[],
        }
    }

    pub fn into_hits(self) -> Vec<SearchHit> {
        match self {
            QueryOutcome::Matches(hits) => hits,
            _ => Vec::new(),
        }
    }
}

/// Distinct query terms in order of first appearance.
pub fn query_terms(index: &Index, query: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    index
        .normalizer()
        .normalize(query)
        .filter(|t| seen.insert(t.clone()))
        .collect()
}

/// Documents containing every query term, ranked by summed term frequency
/// (descending) then doc id (ascending).
pub fn search(index: &Index, query: &str) -> Vec<SearchHit> {
    evaluate(index, query).into_hits()
}

pub fn evaluate(index: &Index, query: &str) -> QueryOutcome {
    if query.trim().is_empty() {
        return QueryOutcome::EmptyQuery;
    }
    let terms = query_terms(index, query);
    if terms.is_empty() {
        tracing::debug!(query, "query has no searchable terms");
        return QueryOutcome::NoTerms;
    }

    // Posting sets per term; one unknown term empties the whole AND.
    let mut sets = Vec::with_capacity(terms.len());
    for term in &terms {
        match index.docs_for(term) {
            Some(docs) => sets.push(docs),
            None => {
                tracing::debug!(term = term.as_str(), "term not found in any document");
                return QueryOutcome::UnknownTerm(term.clone());
            }
        }
    }

    // Intersect starting from the rarest term.
    sets.sort_by_key(|docs| docs.len());
    let Some((smallest, rest)) = sets.split_first() else {
        return QueryOutcome::NoTerms;
    };
    let candidates: Vec<&DocId> = smallest
        .iter()
        .filter(|doc| rest.iter().all(|docs| docs.contains(*doc)))
        .collect();
    if candidates.is_empty() {
        return QueryOutcome::NoMatches;
    }

    let mut hits: Vec<SearchHit> = candidates
        .into_iter()
        .map(|doc| SearchHit {
            score: terms.iter().map(|t| index.term_frequency(t, doc)).sum(),
            doc_id: doc.clone(),
        })
        .collect();
    hits.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| a.doc_id.cmp(&b.doc_id)));
    QueryOutcome::Matches(hits)
}
