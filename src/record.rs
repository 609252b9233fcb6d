//! Input and output record types.

use serde::{Deserialize, Serialize};

use crate::Window;

/// A raw news article as read from the input table.
///
/// Immutable once read; everything downstream is derived from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    /// Stable article identifier.
    pub id: String,
    /// Raw headline, noise included.
    pub title: String,
    /// Raw body text, noise included.
    pub content: String,
    /// Publisher/outlet, when the input table has a SOURCE column.
    pub source: Option<String>,
}

/// One row of the cleaned-text audit table (`id, text, source`).
///
/// Independent of windowing; exists so a reviewer can eyeball what the
/// cleaner did to each article without decoding the task JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CleanedRow {
    /// Article id.
    pub id: String,
    /// Cleaned `title + ". " + content`.
    pub text: String,
    /// Publisher, empty string when absent.
    pub source: String,
}

/// An annotation-import task wrapping one window.
///
/// Matches the Label Studio import shape: the payload sits under a `data`
/// key. One task per window, same order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Task payload.
    pub data: TaskData,
}

/// Payload of a [`Task`]; mirrors its window field-for-field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskData {
    /// Window text.
    pub text: String,
    /// The window's chunk id.
    pub ref_id: String,
    /// The window's article id.
    pub article_id: String,
}

impl From<&Window> for Task {
    fn from(window: &Window) -> Self {
        Self {
            data: TaskData {
                text: window.text.clone(),
                ref_id: window.chunk_id.clone(),
                article_id: window.article_id.clone(),
            },
        }
    }
}
