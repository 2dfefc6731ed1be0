use anyhow::{Context, Result};
use clap::Parser;
use minisearch::{run_interactive, run_report, App, AppConfig, ReportFormat, DEFAULT_REPORT_QUERIES};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "minisearch")]
#[command(about = "Keyword search over a directory of HTML pages", long_about = None)]
struct Args {
    /// Directory holding the .html/.htm pages
    #[arg(long, default_value = "webpages")]
    webpages: PathBuf,
    /// File name to URL mapping [default: <webpages>/input.txt]
    #[arg(long)]
    urls: Option<PathBuf>,
    /// Replace the built-in stopwords with a list (one per line)
    #[arg(long)]
    stopwords: Option<PathBuf>,
    /// Print at most this many hits per query
    #[arg(long)]
    limit: Option<usize>,
    /// Run the report queries and write the results to --output instead of prompting
    #[arg(long, default_value_t = false)]
    test: bool,
    /// Report file written in --test mode
    #[arg(long, default_value = "output.txt")]
    output: PathBuf,
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    format: ReportFormat,
    /// Report query (repeatable); replaces the built-in query list
    #[arg(long = "query")]
    queries: Vec<String>,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(io::stderr).init();
    let args = Args::parse();

    let config = AppConfig {
        webpages: args.webpages,
        urls: args.urls,
        stopwords: args.stopwords,
        limit: args.limit,
    };
    let app = App::open(&config)?;

    if args.test {
        let queries: Vec<String> = if args.queries.is_empty() {
            DEFAULT_REPORT_QUERIES.iter().map(|q| q.to_string()).collect()
        } else {
            args.queries
        };
        let file = File::create(&args.output)
            .with_context(|| format!("creating report {}", args.output.display()))?;
        let mut out = BufWriter::new(file);
        run_report(&app, &queries, &mut out, args.format)?;
        out.flush()?;
        println!("Test output saved to {}", args.output.display());
    } else {
        let stdin = io::stdin();
        let stdout = io::stdout();
        run_interactive(&app, &mut stdin.lock(), &mut stdout.lock())?;
    }
    Ok(())
}
