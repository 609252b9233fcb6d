//! CLI entry point: clean, split, and window an input table in one shot.
//!
//! ```text
//! vietseg --input data/raw/news.csv --output data/label_studio/import.json
//! ```
//!
//! Logging goes through `tracing`; set `RUST_LOG` to adjust verbosity
//! (defaults to `info`).

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use vietseg::{Pipeline, PipelineConfig, WindowConfig};

#[derive(Debug, Parser)]
#[command(
    name = "vietseg",
    version,
    about = "Prepare Vietnamese news articles for annotation: clean, split, window"
)]
struct Cli {
    /// Input CSV with ID, TITLE, CONTENT (and optional SOURCE) columns
    #[arg(long, value_name = "FILE")]
    input: PathBuf,

    /// Output JSON file of annotation-import tasks
    #[arg(long, value_name = "FILE")]
    output: PathBuf,

    /// Directory for the cleaned and split CSV tables
    #[arg(long, value_name = "DIR", default_value = "data/preprocessed")]
    table_dir: PathBuf,

    /// Skip the CSV tables and write only the JSON import
    #[arg(long, default_value_t = false)]
    skip_tables: bool,

    /// Sentences per window
    #[arg(long, default_value_t = 3)]
    window_size: usize,

    /// Sentences to advance between consecutive windows
    #[arg(long, default_value_t = 2)]
    step_size: usize,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let windows = WindowConfig::new(cli.window_size, cli.step_size)
        .context("invalid window configuration")?;

    let mut config = PipelineConfig::new(cli.input, cli.output);
    config.table_dir = cli.table_dir;
    config.save_table = !cli.skip_tables;
    config.windows = windows;

    let summary = Pipeline::new(config)
        .run()
        .context("preprocessing pipeline failed")?;

    tracing::info!(
        articles = summary.articles,
        tasks = summary.windows,
        "preprocessing complete"
    );
    Ok(())
}
