//! The end-to-end preprocessing pipeline.
//!
//! A single-pass, single-threaded batch transform:
//!
//! ```text
//! input CSV ──> Article ──> clean(title) + ". " + clean(content)
//!                      └──> sentences ──> windows ─┬─> split table (CSV)
//!                                                  ├─> task list (JSON)
//!                                                  └─> cleaned table (CSV)
//! ```
//!
//! Ordering guarantee: windows appear in input-table order, then in window
//! order within each article. Re-running on the same input produces
//! byte-identical artifacts — there is no randomness, no timestamps, no
//! partial state. Failure recovery is "rerun the job".

use std::ffi::OsStr;
use std::fs;
use std::path::PathBuf;

use tracing::info;

use crate::{
    build_windows, reader, writer, CleanedRow, Result, SentenceSplitter, TextCleaner, Window,
    WindowConfig,
};

/// Pipeline configuration.
///
/// ## Example
///
/// ```rust,no_run
/// use vietseg::{Pipeline, PipelineConfig};
///
/// let config = PipelineConfig::new("data/raw/news.csv", "data/label_studio/import.json");
/// let summary = Pipeline::new(config).run().unwrap();
/// println!("{} articles -> {} windows", summary.articles, summary.windows);
/// ```
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Input CSV (`ID, TITLE, CONTENT[, SOURCE]`).
    pub input_path: PathBuf,
    /// Output JSON task list.
    pub output_path: PathBuf,
    /// Directory receiving the two CSV table artifacts.
    pub table_dir: PathBuf,
    /// Whether to emit the CSV tables at all.
    pub save_table: bool,
    /// Window/step sizes.
    pub windows: WindowConfig,
}

impl PipelineConfig {
    /// Configuration with the reference defaults: tables on, windows of 3
    /// sentences advancing by 2, tables under `data/preprocessed`.
    pub fn new(input_path: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            output_path: output_path.into(),
            table_dir: PathBuf::from("data/preprocessed"),
            save_table: true,
            windows: WindowConfig::default(),
        }
    }
}

/// Counts reported by a completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineSummary {
    /// Articles read from the input table.
    pub articles: usize,
    /// Windows (= tasks) produced across all articles.
    pub windows: usize,
}

/// The batch transform: clean, split, window, write.
#[derive(Debug)]
pub struct Pipeline {
    config: PipelineConfig,
    cleaner: TextCleaner,
    splitter: SentenceSplitter,
}

impl Pipeline {
    /// Create a pipeline with the default cleaner and splitter.
    #[must_use]
    pub fn new(config: PipelineConfig) -> Self {
        Self::with_components(config, TextCleaner::new(), SentenceSplitter::default())
    }

    /// Create a pipeline with custom cleaning/splitting components.
    ///
    /// Lets a corpus bring its own abbreviation set or minimum sentence
    /// length without touching the pipeline logic.
    #[must_use]
    pub fn with_components(
        config: PipelineConfig,
        cleaner: TextCleaner,
        splitter: SentenceSplitter,
    ) -> Self {
        Self {
            config,
            cleaner,
            splitter,
        }
    }

    /// Run the transform and write all artifacts.
    ///
    /// # Errors
    ///
    /// Fails on unreadable input, missing required columns, or any artifact
    /// write error. No partial-state cleanup is attempted.
    pub fn run(&self) -> Result<PipelineSummary> {
        info!(
            input = %self.config.input_path.display(),
            window = self.config.windows.window_size(),
            step = self.config.windows.step_size(),
            "processing input table"
        );

        let articles = reader::read_articles(&self.config.input_path)?;

        let mut cleaned_rows = Vec::with_capacity(articles.len());
        let mut windows: Vec<Window> = Vec::new();

        for article in &articles {
            let full_text = format!(
                "{}. {}",
                self.cleaner.clean(Some(&article.title)),
                self.cleaner.clean(Some(&article.content))
            );
            let sentences = self.splitter.split(&full_text);
            windows.extend(build_windows(&article.id, &sentences, &self.config.windows));

            cleaned_rows.push(CleanedRow {
                id: article.id.clone(),
                text: full_text,
                source: article.source.clone().unwrap_or_default(),
            });
        }

        if self.config.save_table {
            fs::create_dir_all(&self.config.table_dir)?;

            let cleaned_path = self.table_path("_cleaned.csv");
            writer::write_cleaned_table(&cleaned_path, &cleaned_rows)?;
            info!(path = %cleaned_path.display(), rows = cleaned_rows.len(), "wrote cleaned table");

            let split_path = self.table_path("_cleaned_split.csv");
            writer::write_window_table(&split_path, &windows)?;
            info!(path = %split_path.display(), rows = windows.len(), "wrote split table");
        }

        writer::write_tasks(&self.config.output_path, &windows)?;
        info!(
            path = %self.config.output_path.display(),
            tasks = windows.len(),
            "wrote annotation import"
        );

        Ok(PipelineSummary {
            articles: articles.len(),
            windows: windows.len(),
        })
    }

    /// Table artifact path: `<table_dir>/<input stem><suffix>`.
    fn table_path(&self, suffix: &str) -> PathBuf {
        let stem = self
            .config
            .input_path
            .file_stem()
            .and_then(OsStr::to_str)
            .unwrap_or("input");
        self.config.table_dir.join(format!("{stem}{suffix}"))
    }

    /// Where the cleaned table will be written for this configuration.
    #[must_use]
    pub fn cleaned_table_path(&self) -> PathBuf {
        self.table_path("_cleaned.csv")
    }

    /// Where the split table will be written for this configuration.
    #[must_use]
    pub fn split_table_path(&self) -> PathBuf {
        self.table_path("_cleaned_split.csv")
    }

    /// Borrow the configuration.
    #[must_use]
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }
}
