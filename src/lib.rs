//! # vietseg
//!
//! Sentence segmentation and sliding-window chunking for Vietnamese
//! traffic-accident news, feeding an entity/relation annotation pipeline.
//!
//! ## The Problem
//!
//! Annotators (and the NER/RE models trained on their labels) work on chunks
//! of a few sentences, not whole articles. Getting from a scraped news dump
//! to clean, overlapping chunks is where the bugs live:
//!
//! - Raw fields carry newlines and photo credits (`Ảnh: Nguyễn Văn A`)
//!   glued straight onto the first sentence.
//! - Vietnamese abbreviations (`TP.`, `TS.`, `Th.S`) look exactly like
//!   sentence ends to a period-based splitter.
//! - Accented capitals (`Ủ`, `Đ`, `Ả`) must count as uppercase letters, or
//!   half the boundaries in real text are missed.
//! - Two output artifacts (a CSV table and an annotation-tool import file)
//!   describe the same windows and must never drift apart.
//!
//! ## The Pipeline
//!
//! ```text
//! input CSV (ID, TITLE, CONTENT[, SOURCE])
//!   │
//!   ├─ TextCleaner        strip credits, normalize whitespace
//!   ├─ SentenceSplitter   protect abbreviations, cut at [.?!] + space + capital
//!   ├─ build_windows      slide window_size over sentences by step_size
//!   │
//!   ├──> cleaned table    id, text, source          (audit)
//!   ├──> split table      id, text, article_id      (one row per window)
//!   └──> task list JSON   {"data": {text, ref_id, article_id}}
//! ```
//!
//! With the reference configuration (window 3, step 2) consecutive windows
//! share one sentence, so an entity mentioned at a chunk boundary is intact
//! in at least one chunk.
//!
//! ## Quick Start
//!
//! ```rust
//! use vietseg::{build_windows, SentenceSplitter, WindowConfig};
//!
//! let splitter = SentenceSplitter::default();
//! let sentences = splitter.split(
//!     "Một vụ tai nạn xảy ra tại TP. Hồ Chí Minh. Cảnh sát đang điều tra hiện trường.",
//! );
//! assert_eq!(sentences.len(), 2);
//!
//! let config = WindowConfig::new(2, 1).unwrap();
//! let windows = build_windows("bai-1", &sentences, &config);
//! assert_eq!(windows[0].chunk_id, "bai-1_w0");
//! assert_eq!(windows.len(), 2);
//! ```
//!
//! Or run the whole batch job:
//!
//! ```rust,no_run
//! use vietseg::{Pipeline, PipelineConfig};
//!
//! let config = PipelineConfig::new("data/raw/news.csv", "data/label_studio/import.json");
//! let summary = Pipeline::new(config).run().unwrap();
//! ```
//!
//! ## Known Limitations
//!
//! Sentence splitting is a punctuation/capitalization heuristic, not a
//! classifier: quoted speech and some dotted constructs misfire. Credit-line
//! removal can also strip a legitimate author attribution that happens to
//! match the capitalized-words pattern. Both are accepted trade-offs — the
//! abbreviation set and the alphabet tables are the supported extension
//! points, not pattern special-cases.

mod abbrev;
pub mod alphabet;
mod clean;
mod error;
mod pipeline;
pub mod reader;
mod record;
mod split;
mod window;
pub mod writer;

pub use abbrev::AbbreviationSet;
pub use clean::TextCleaner;
pub use error::{Error, Result};
pub use pipeline::{Pipeline, PipelineConfig, PipelineSummary};
pub use record::{Article, CleanedRow, Task, TaskData};
pub use split::SentenceSplitter;
pub use window::{build_windows, Window, WindowConfig};
