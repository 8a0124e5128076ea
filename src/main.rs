use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use book_pipeline::ingestion::{ingest_from_path, IngestionFormat, IngestionOptions, TracingObserver};
use book_pipeline::processing::Discount;
use book_pipeline::report::{write_report, ReportOptions, DEFAULT_PRICE_THRESHOLD};
use book_pipeline::types::{sample_catalog, Catalog};

/// Run the filter/map/reduce/flat-map demo over a book catalog
#[derive(Debug, Parser)]
#[command(name = "book-pipeline", version, about, long_about = None)]
struct Cli {
    /// Catalog file (.csv, .json, .ndjson). Uses the built-in sample catalog when omitted
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Force the input format instead of inferring it from the extension
    #[arg(long, value_enum, requires = "input")]
    format: Option<FormatArg>,

    /// Select books priced strictly below this
    #[arg(long, default_value_t = DEFAULT_PRICE_THRESHOLD)]
    threshold: i64,

    /// Share of the price kept by the sale transform, in percent
    #[arg(long, default_value_t = 80, value_parser = clap::value_parser!(u32).range(0..=100))]
    discount_percent: u32,

    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    Csv,
    Json,
}

impl From<FormatArg> for IngestionFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Csv => IngestionFormat::Csv,
            FormatArg::Json => IngestionFormat::Json,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    debug!(?cli, "book-pipeline started");

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(verbose >= 2)
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let catalog = load_catalog(cli)?;
    let opts = ReportOptions {
        price_threshold: cli.threshold,
        discount: Discount::new(cli.discount_percent),
        ..ReportOptions::default()
    };

    let stdout = io::stdout();
    write_report(&mut stdout.lock(), &catalog, &opts).context("failed to write report")?;
    Ok(())
}

fn load_catalog(cli: &Cli) -> anyhow::Result<Catalog> {
    let Some(path) = cli.input.as_ref() else {
        debug!("no input given, using the built-in sample catalog");
        return Ok(sample_catalog());
    };

    let opts = IngestionOptions {
        format: cli.format.map(IngestionFormat::from),
        observer: Some(Arc::new(TracingObserver)),
        ..Default::default()
    };
    ingest_from_path(path, &opts).with_context(|| format!("failed to load catalog from {}", path.display()))
}
