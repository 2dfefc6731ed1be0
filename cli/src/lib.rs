use anyhow::{Context, Result};
use indexer::{load_corpus, load_stopwords, load_url_map, UrlMap};
use minisearch_core::{Normalizer, QueryOutcome, SearchEngine, SearchHit, StopWords};
use serde::Serialize;
use std::io::{BufRead, Write};
use std::path::PathBuf;

/// Queries run by the report mode when none are given on the command line.
pub const DEFAULT_REPORT_QUERIES: &[&str] = &[
    "",
    "the and is",
    "nonexistentterm",
    "threats",
    "cloud security",
    "cyber attack",
    "malware crypto",
];

const RULE_WIDTH: usize = 50;
const SEPARATOR_WIDTH: usize = 60;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Directory of .html/.htm pages
    pub webpages: PathBuf,
    /// URL mapping file, defaults to `<webpages>/input.txt`
    pub urls: Option<PathBuf>,
    pub stopwords: Option<PathBuf>,
    /// Maximum hits printed per query; the engine itself never truncates.
    pub limit: Option<usize>,
}

impl AppConfig {
    pub fn new<P: Into<PathBuf>>(webpages: P) -> Self {
        Self { webpages: webpages.into(), urls: None, stopwords: None, limit: None }
    }

    pub fn url_map_path(&self) -> PathBuf {
        self.urls.clone().unwrap_or_else(|| self.webpages.join("input.txt"))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

pub struct App {
    engine: SearchEngine,
    urls: UrlMap,
    limit: Option<usize>,
}

impl App {
    /// Load the corpus and URL mapping, then build the index once.
    pub fn open(config: &AppConfig) -> Result<Self> {
        let stopwords = match &config.stopwords {
            Some(path) => load_stopwords(path)?,
            None => StopWords::default(),
        };
        let corpus = load_corpus(&config.webpages)
            .with_context(|| format!("loading documents from {}", config.webpages.display()))?;
        let urls = load_url_map(config.url_map_path())?;

        let engine = SearchEngine::new(Normalizer::new(stopwords));
        let index = engine.build(&corpus.documents)?;
        tracing::info!(
            num_docs = index.num_docs(),
            num_terms = index.num_terms(),
            skipped = corpus.skipped.len(),
            "indexing complete"
        );
        Ok(Self { engine, urls, limit: config.limit })
    }

    pub fn new(engine: SearchEngine, urls: UrlMap) -> Self {
        Self { engine, urls, limit: None }
    }

    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }

    pub fn engine(&self) -> &SearchEngine { &self.engine }
    pub fn urls(&self) -> &UrlMap { &self.urls }

    pub fn evaluate(&self, query: &str) -> Result<QueryOutcome> {
        Ok(self.engine.evaluate(query)?)
    }

    pub fn url_for(&self, doc_id: &str) -> Option<&str> {
        self.urls.get(doc_id).map(String::as_str)
    }
}

/// Explain an empty outcome, then print whatever hits there are.
pub fn write_outcome<W: Write>(
    out: &mut W,
    outcome: &QueryOutcome,
    urls: &UrlMap,
    limit: Option<usize>,
) -> std::io::Result<()> {
    match outcome {
        QueryOutcome::EmptyQuery => writeln!(out, "Empty query. Please enter some search terms.")?,
        QueryOutcome::NoTerms => {
            writeln!(out, "Query contains only stopwords. Please use more specific terms.")?
        }
        QueryOutcome::UnknownTerm(term) => {
            writeln!(out, "Term '{term}' not found in any document.")?
        }
        QueryOutcome::NoMatches => writeln!(out, "No documents found matching all query terms.")?,
        QueryOutcome::Matches(_) => {}
    }
    write_results(out, outcome.hits(), urls, limit)
}

pub fn write_results<W: Write>(
    out: &mut W,
    hits: &[SearchHit],
    urls: &UrlMap,
    limit: Option<usize>,
) -> std::io::Result<()> {
    if hits.is_empty() {
        return writeln!(out, "No results to display.");
    }
    let rule = "-".repeat(RULE_WIDTH);
    writeln!(out, "\nFound {} matching documents:", hits.len())?;
    writeln!(out, "{rule}")?;
    let shown = limit.unwrap_or(hits.len()).min(hits.len());
    for (i, hit) in hits.iter().take(shown).enumerate() {
        let url = urls.get(&hit.doc_id).map(String::as_str).unwrap_or("URL not available");
        writeln!(out, "{}. {} (Relevance score: {})", i + 1, hit.doc_id, hit.score)?;
        writeln!(out, "   URL: {url}")?;
    }
    if shown < hits.len() {
        writeln!(out, "... and {} more", hits.len() - shown)?;
    }
    writeln!(out, "{rule}")
}

/// Prompt loop: one query per line until `exit` or end of input.
pub fn run_interactive<R: BufRead, W: Write>(app: &App, input: &mut R, out: &mut W) -> Result<()> {
    let index = app.engine.index()?;
    writeln!(
        out,
        "Indexed {} documents with {} unique terms.",
        index.num_docs(),
        index.num_terms()
    )?;
    writeln!(out, "\nMini Search Engine")?;
    writeln!(out, "Type 'exit' to quit")?;

    let mut line = String::new();
    loop {
        write!(out, "\nEnter search query: ")?;
        out.flush()?;
        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            break;
        }
        let query = line.trim_end_matches(&['\r', '\n'][..]);
        if query.trim().eq_ignore_ascii_case("exit") {
            break;
        }
        let outcome = app.evaluate(query)?;
        write_outcome(out, &outcome, &app.urls, app.limit)?;
    }
    writeln!(out, "Exiting search engine. Goodbye!")?;
    Ok(())
}

#[derive(Serialize)]
struct ReportLine<'a> {
    query: &'a str,
    outcome: &'static str,
    total_hits: usize,
    results: Vec<ReportHit<'a>>,
}

#[derive(Serialize)]
struct ReportHit<'a> {
    doc_id: &'a str,
    score: u32,
    url: Option<&'a str>,
}

fn outcome_label(outcome: &QueryOutcome) -> &'static str {
    match outcome {
        QueryOutcome::EmptyQuery => "empty_query",
        QueryOutcome::NoTerms => "no_terms",
        QueryOutcome::UnknownTerm(_) => "unknown_term",
        QueryOutcome::NoMatches => "no_matches",
        QueryOutcome::Matches(_) => "matches",
    }
}

/// Run each query and write the results, as readable text or one JSON object per line.
pub fn run_report<W: Write, S: AsRef<str>>(
    app: &App,
    queries: &[S],
    out: &mut W,
    format: ReportFormat,
) -> Result<()> {
    for query in queries {
        let query = query.as_ref();
        let outcome = app.evaluate(query)?;
        match format {
            ReportFormat::Text => {
                writeln!(out, "Query: '{query}'")?;
                write_outcome(out, &outcome, &app.urls, app.limit)?;
                writeln!(out, "\n{}\n", "=".repeat(SEPARATOR_WIDTH))?;
            }
            ReportFormat::Json => {
                let hits = outcome.hits();
                let shown = app.limit.unwrap_or(hits.len());
                let line = ReportLine {
                    query,
                    outcome: outcome_label(&outcome),
                    total_hits: hits.len(),
                    results: hits
                        .iter()
                        .take(shown)
                        .map(|h| ReportHit {
                            doc_id: &h.doc_id,
                            score: h.score,
                            url: app.url_for(&h.doc_id),
                        })
                        .collect(),
                };
                serde_json::to_writer(&mut *out, &line)?;
                writeln!(out)?;
            }
        }
    }
    Ok(())
}
