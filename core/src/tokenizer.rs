use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;

/// Terms shorter than this (in chars) are dropped.
pub const MIN_TERM_LEN: usize = 2;

lazy_static! {
    static ref RE: Regex = Regex::new(r"[\p{Alphabetic}\p{N}]+").expect("valid regex");
    static ref DEFAULT_STOPWORDS: Vec<&'static str> = vec![
        "a", "an", "the", "and", "or", "but", "is", "are", "was", "were",
        "in", "on", "at", "to", "for", "with", "by", "about", "like",
        "from", "of", "as", "this", "that", "these", "those", "it", "its",
    ];
}

/// Fixed set of terms excluded from indexing and from queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    pub fn empty() -> Self { Self { words: HashSet::new() } }

    /// Parse a stopword list: one word per line, blank lines and `#` comments ignored.
    pub fn parse(list: &str) -> Self {
        list.lines()
            .map(str::trim)
            .filter(|l| !l.is_empty() && !l.starts_with('#'))
            .collect()
    }

    pub fn contains(&self, term: &str) -> bool { self.words.contains(term) }
    pub fn len(&self) -> usize { self.words.len() }
    pub fn is_empty(&self) -> bool { self.words.is_empty() }
}

impl Default for StopWords {
    fn default() -> Self { DEFAULT_STOPWORDS.iter().copied().collect() }
}

impl<S: AsRef<str>> FromIterator<S> for StopWords {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self { words: iter.into_iter().map(|w| w.as_ref().to_lowercase()).collect() }
    }
}

/// Turns raw text into normalized terms. The same value is used for documents and queries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Normalizer {
    stopwords: StopWords,
}

impl Normalizer {
    pub fn new(stopwords: StopWords) -> Self { Self { stopwords } }

    pub fn stopwords(&self) -> &StopWords { &self.stopwords }

    /// Lowercase `text`, split it into maximal alphanumeric runs and lazily yield the
    /// runs that are long enough and not stopwords. Order and duplicates are preserved.
    pub fn normalize<'a>(&'a self, text: &'a str) -> impl Iterator<Item = String> + 'a {
        // Lowercasing can grow a char into several (e.g. 'İ'), so it happens before splitting.
        let lowered = text.to_lowercase();
        let spans: Vec<(usize, usize)> =
            RE.find_iter(&lowered).map(|m| (m.start(), m.end())).collect();
        spans
            .into_iter()
            .map(move |(start, end)| lowered[start..end].to_string())
            .filter(move |t| t.chars().count() >= MIN_TERM_LEN && !self.stopwords.contains(t))
    }
}
