use anyhow::Result;
use clap::{Parser, Subcommand};
use indexer::{load_corpus, load_stopwords};
use minisearch_core::{Index, Normalizer, StopWords};
use std::collections::HashSet;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "indexer")]
#[command(about = "Index an HTML corpus and report per-document term counts", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Index every .html/.htm file in a directory
    Build {
        /// Directory holding the pages
        #[arg(long, default_value = "webpages")]
        input: String,
        /// Replace the built-in stopwords with a list (one per line)
        #[arg(long)]
        stopwords: Option<String>,
    },
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(std::io::stderr).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Build { input, stopwords } => build(&input, stopwords.as_deref()),
    }
}

fn build(input: &str, stopwords: Option<&str>) -> Result<()> {
    let stopwords = match stopwords {
        Some(path) => load_stopwords(path)?,
        None => StopWords::default(),
    };
    let normalizer = Normalizer::new(stopwords);
    let corpus = load_corpus(input)?;

    for (doc_id, text) in &corpus.documents {
        let unique: HashSet<String> = normalizer.normalize(text).collect();
        println!("Indexed document: {doc_id} with {} unique terms", unique.len());
    }
    for path in &corpus.skipped {
        println!("Skipped unreadable document: {}", path.display());
    }

    let index = Index::build(&normalizer, &corpus.documents);
    println!(
        "Indexing complete. {} documents indexed with {} unique terms.",
        index.num_docs(),
        index.num_terms()
    );
    Ok(())
}
