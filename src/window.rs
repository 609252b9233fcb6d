//! Sliding-window chunking over sentence sequences.
//!
//! Annotators and extraction models work on chunks of a few sentences, not
//! whole articles. A fixed-size window slides over each article's sentence
//! list with a fixed step; step < window size makes consecutive windows
//! overlap, so entities and relations near a chunk boundary appear intact in
//! at least one chunk:
//!
//! ```text
//! sentences: [S0, S1, S2, S3, S4]     window = 3, step = 2
//!
//! w0: S0 S1 S2
//! w1:       S2 S3 S4      <- shares S2 with w0
//! w2:             S4      <- tail window, shorter than 3
//! ```
//!
//! Each window carries a chunk id `{article_id}_w{n}` where `n` counts
//! emitted windows from 0. `n` is an independent counter, not the loop
//! index: today they coincide (`n == i / step`), but the id must keep
//! numbering densely even if the emission logic ever learns to skip.

use serde::Serialize;

use crate::{Error, Result};

/// A contiguous, possibly overlapping slice of an article's sentences.
///
/// The annotation-facing unit: one window becomes one table row and one
/// annotation task. Field order matters — it is the column order of the
/// split-table artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Window {
    /// Derived id, `{article_id}_w{n}`.
    #[serde(rename = "id")]
    pub chunk_id: String,
    /// Space-joined sentence slice.
    pub text: String,
    /// Back-reference to the source article.
    pub article_id: String,
}

/// Validated window/step configuration.
///
/// ## Example
///
/// ```rust
/// use vietseg::WindowConfig;
///
/// let config = WindowConfig::new(3, 2).unwrap();
/// assert_eq!(config.overlap(), 1);
///
/// assert!(WindowConfig::new(0, 2).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowConfig {
    window_size: usize,
    step_size: usize,
}

impl WindowConfig {
    /// Create a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidWindowSize`] or [`Error::InvalidStepSize`]
    /// when either is zero.
    pub fn new(window_size: usize, step_size: usize) -> Result<Self> {
        if window_size == 0 {
            return Err(Error::InvalidWindowSize(window_size));
        }
        if step_size == 0 {
            return Err(Error::InvalidStepSize(step_size));
        }
        Ok(Self {
            window_size,
            step_size,
        })
    }

    /// Sentences per window.
    #[must_use]
    pub const fn window_size(&self) -> usize {
        self.window_size
    }

    /// Sentences advanced between window starts.
    #[must_use]
    pub const fn step_size(&self) -> usize {
        self.step_size
    }

    /// Sentences shared by consecutive full windows.
    #[must_use]
    pub const fn overlap(&self) -> usize {
        self.window_size.saturating_sub(self.step_size)
    }

    /// Number of windows produced for `sentence_count` sentences.
    #[must_use]
    pub fn window_count(&self, sentence_count: usize) -> usize {
        sentence_count.div_ceil(self.step_size)
    }
}

impl Default for WindowConfig {
    /// Reference configuration: 3-sentence windows advancing by 2.
    fn default() -> Self {
        Self {
            window_size: 3,
            step_size: 2,
        }
    }
}

/// Slide a window over `sentences` and emit the chunks for one article.
///
/// The tail window may hold fewer than `window_size` sentences; an article
/// with fewer sentences than a full window yields exactly one window with
/// all of them. Empty input yields nothing.
///
/// ## Example
///
/// ```rust
/// use vietseg::{build_windows, WindowConfig};
///
/// let sentences: Vec<String> =
///     ["Câu một.", "Câu hai.", "Câu ba."].map(String::from).to_vec();
/// let config = WindowConfig::new(2, 1).unwrap();
/// let windows = build_windows("7", &sentences, &config);
///
/// assert_eq!(windows.len(), 3);
/// assert_eq!(windows[0].chunk_id, "7_w0");
/// assert_eq!(windows[0].text, "Câu một. Câu hai.");
/// assert_eq!(windows[2].text, "Câu ba.");
/// ```
#[must_use]
pub fn build_windows(article_id: &str, sentences: &[String], config: &WindowConfig) -> Vec<Window> {
    let mut windows = Vec::with_capacity(config.window_count(sentences.len()));
    let mut emitted = 0usize;
    let mut start = 0usize;

    while start < sentences.len() {
        let end = (start + config.window_size()).min(sentences.len());
        let slice = &sentences[start..end];
        if !slice.is_empty() {
            windows.push(Window {
                chunk_id: format!("{article_id}_w{emitted}"),
                text: slice.join(" "),
                article_id: article_id.to_owned(),
            });
            emitted += 1;
        }
        start += config.step_size();
    }

    windows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentences(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("Câu số {i}.")).collect()
    }

    #[test]
    fn zero_window_size_rejected() {
        assert!(matches!(
            WindowConfig::new(0, 2),
            Err(Error::InvalidWindowSize(0))
        ));
    }

    #[test]
    fn zero_step_size_rejected() {
        assert!(matches!(
            WindowConfig::new(3, 0),
            Err(Error::InvalidStepSize(0))
        ));
    }

    #[test]
    fn default_is_three_by_two() {
        let config = WindowConfig::default();
        assert_eq!(config.window_size(), 3);
        assert_eq!(config.step_size(), 2);
        assert_eq!(config.overlap(), 1);
    }

    #[test]
    fn reference_configuration_over_five_sentences() {
        let config = WindowConfig::default();
        let sents = sentences(5);
        let windows = build_windows("42", &sents, &config);

        assert_eq!(windows.len(), 3); // ceil(5 / 2)
        assert_eq!(windows[0].chunk_id, "42_w0");
        assert_eq!(windows[0].text, "Câu số 0. Câu số 1. Câu số 2.");
        assert_eq!(windows[1].text, "Câu số 2. Câu số 3. Câu số 4.");
        assert_eq!(windows[2].text, "Câu số 4.");
        for window in &windows {
            assert_eq!(window.article_id, "42");
        }
    }

    #[test]
    fn consecutive_windows_share_the_overlap() {
        let config = WindowConfig::new(3, 2).unwrap();
        let sents = sentences(7);
        let windows = build_windows("a", &sents, &config);

        // Last sentence of each full window reappears first in the next.
        assert!(windows[0].text.ends_with("Câu số 2."));
        assert!(windows[1].text.starts_with("Câu số 2."));
        assert!(windows[1].text.ends_with("Câu số 4."));
        assert!(windows[2].text.starts_with("Câu số 4."));
    }

    #[test]
    fn short_article_yields_single_window() {
        let config = WindowConfig::new(3, 2).unwrap();
        let sents = sentences(2);
        let windows = build_windows("x", &sents, &config);

        assert_eq!(windows.len(), 1);
        assert_eq!(windows[0].chunk_id, "x_w0");
        assert_eq!(windows[0].text, "Câu số 0. Câu số 1.");
    }

    #[test]
    fn empty_sentences_yield_no_windows() {
        let config = WindowConfig::default();
        assert!(build_windows("x", &[], &config).is_empty());
    }

    #[test]
    fn window_count_matches_formula() {
        for (count, step, expected) in [(5, 2, 3), (4, 2, 2), (1, 2, 1), (6, 3, 2), (7, 3, 3)] {
            let config = WindowConfig::new(3, step).unwrap();
            assert_eq!(config.window_count(count), expected, "count={count} step={step}");
            assert_eq!(
                build_windows("t", &sentences(count), &config).len(),
                expected
            );
        }
    }

    #[test]
    fn non_overlapping_when_step_equals_window() {
        let config = WindowConfig::new(2, 2).unwrap();
        assert_eq!(config.overlap(), 0);
        let windows = build_windows("n", &sentences(4), &config);
        assert_eq!(windows.len(), 2);
        assert_eq!(windows[0].text, "Câu số 0. Câu số 1.");
        assert_eq!(windows[1].text, "Câu số 2. Câu số 3.");
    }
}
