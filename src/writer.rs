//! Output artifact writing.
//!
//! Three artifacts leave the pipeline:
//!
//! | Artifact | Shape | Purpose |
//! |----------|-------|---------|
//! | cleaned table | CSV `id, text, source` | per-article audit of the cleaner |
//! | split table | CSV `id, text, article_id` | one row per window, human-checkable |
//! | annotation import | pretty JSON task list | Label Studio import |
//!
//! ## The Alignment Invariant
//!
//! Row `k` of the split table and element `k` of the task list describe the
//! same window. Both functions therefore take the *same* `&[Window]` slice
//! and walk it in order — there is no second windowing pass that could
//! drift after a future edit. Covered by the index-alignment integration
//! test.
//!
//! The JSON is written with 2-space indentation and raw (unescaped) UTF-8 so
//! Vietnamese text stays readable in the annotation tool and in diffs.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::{CleanedRow, Result, Task, Window};

/// Write the per-article cleaned-text table.
///
/// # Errors
///
/// Fails on filesystem or CSV serialization errors.
pub fn write_cleaned_table(path: &Path, rows: &[CleanedRow]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Write the split table, one row per window, in window order.
///
/// # Errors
///
/// Fails on filesystem or CSV serialization errors.
pub fn write_window_table(path: &Path, windows: &[Window]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for window in windows {
        writer.serialize(window)?;
    }
    writer.flush()?;
    Ok(())
}

/// Write the annotation-import task list, one task per window, same order.
///
/// # Errors
///
/// Fails on filesystem or JSON serialization errors.
pub fn write_tasks(path: &Path, windows: &[Window]) -> Result<()> {
    let tasks: Vec<Task> = windows.iter().map(Task::from).collect();
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, &tasks)?;
    writer.flush()?;
    Ok(())
}
