//! Reads the on-disk corpus: HTML pages in a directory, the page → URL mapping, and
//! optional stopword lists.

use anyhow::{bail, Context, Result};
use minisearch_core::{DocId, StopWords};
use scraper::Html;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// doc id -> source URL
pub type UrlMap = HashMap<DocId, String>;

#[derive(Debug, Default)]
pub struct Corpus {
    /// doc id (file name) -> extracted plain text
    pub documents: BTreeMap<DocId, String>,
    /// Pages that could not be read or decoded.
    pub skipped: Vec<PathBuf>,
}

impl Corpus {
    pub fn len(&self) -> usize { self.documents.len() }
    pub fn is_empty(&self) -> bool { self.documents.is_empty() }
}

fn is_html(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("html") || ext.eq_ignore_ascii_case("htm"))
        .unwrap_or(false)
}

/// Load every `.html`/`.htm` file directly inside `dir`, keyed by file name.
pub fn load_corpus<P: AsRef<Path>>(dir: P) -> Result<Corpus> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        bail!("document directory '{}' not found", dir.display());
    }
    tracing::info!(dir = %dir.display(), "building index from documents");

    let mut corpus = Corpus::default();
    let entries = WalkDir::new(dir).min_depth(1).max_depth(1).sort_by_file_name();
    for entry in entries.into_iter().filter_map(|e| e.ok()) {
        let p = entry.path();
        if !p.is_file() || !is_html(p) { continue; }
        let doc_id: DocId = entry.file_name().to_string_lossy().into_owned();
        match fs::read_to_string(p) {
            Ok(html) => {
                corpus.documents.insert(doc_id, html_to_text(&html));
            }
            Err(err) => {
                tracing::warn!(file = %p.display(), %err, "skipping unreadable document");
                corpus.skipped.push(p.to_path_buf());
            }
        }
    }
    Ok(corpus)
}

/// All text nodes of the page concatenated, tags and comments dropped.
pub fn html_to_text(html: &str) -> String {
    Html::parse_document(html).root_element().text().collect()
}

/// Read the `<file name> <url>` mapping. A missing file yields an empty map.
pub fn load_url_map<P: AsRef<Path>>(path: P) -> Result<UrlMap> {
    let path = path.as_ref();
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            tracing::warn!(
                file = %path.display(),
                "URL mapping file not found, URLs will not be displayed"
            );
            return Ok(UrlMap::new());
        }
        Err(err) => {
            return Err(err).with_context(|| format!("reading URL mapping {}", path.display()))
        }
    };
    let urls = parse_url_map(&text);
    tracing::info!(count = urls.len(), "loaded URL mappings");
    Ok(urls)
}

/// One mapping per line; blank lines, `//` comments and lines without a URL are ignored.
pub fn parse_url_map(text: &str) -> UrlMap {
    let mut urls = UrlMap::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with("//") { continue; }
        if let Some((file, url)) = line.split_once(' ') {
            let url = url.trim();
            if !url.is_empty() {
                urls.insert(file.to_string(), url.to_string());
            }
        }
    }
    urls
}

pub fn load_stopwords<P: AsRef<Path>>(path: P) -> Result<StopWords> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading stopword list {}", path.display()))?;
    Ok(StopWords::parse(&text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_text_without_markup() {
        let text = html_to_text("<html><head><title>Cyber News</title></head><body><p>Malware <b>attack</b></p><!-- hidden --></body></html>");
        assert!(text.contains("Cyber News"));
        assert!(text.contains("Malware attack"));
        assert!(!text.contains('<'));
        assert!(!text.contains("hidden"));
    }

    #[test]
    fn url_map_skips_comments_and_malformed_lines() {
        let urls = parse_url_map("// header\ndoc1.html https://example.com/a\n\nbroken\ndoc2.html   https://example.com/b  \n");
        assert_eq!(urls.len(), 2);
        assert_eq!(urls["doc1.html"], "https://example.com/a");
        assert_eq!(urls["doc2.html"], "https://example.com/b");
    }
}
