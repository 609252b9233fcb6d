//! Noise removal for raw article text.
//!
//! Scraped Vietnamese news articles carry markup residue the annotators
//! should never see:
//!
//! - literal newlines and carriage returns inside a field
//! - photo/video credit preambles: `Ảnh: Nguyễn Văn A` jammed directly
//!   against the first real sentence
//! - runs of whitespace left behind by both of the above
//!
//! ## Credit Lines
//!
//! Credits are removed in two passes. The first targets the common shape
//! `Ảnh: <1–4 capitalized words>` immediately followed by another capitalized
//! word — the trailing capital is what distinguishes a credit glued onto
//! body text from a caption that ends the field:
//!
//! ```text
//! "Ảnh: Nguyen Van A Một vụ tai nạn..."
//!  ^^^^^^^^^^^^^^^^^ ^
//!  credit (removed)  body text (kept)
//! ```
//!
//! The second pass drops any leftover bare `Video:`/`Ảnh:` marker.
//!
//! This is a heuristic: an author attribution that happens to look like
//! `Ảnh: <capitalized words>` before a capitalized sentence is stripped too.
//! Accepted trade-off; the alternative (keeping credits) pollutes every
//! downstream annotation.

use regex::Regex;

use crate::alphabet;

/// Removes credit lines and normalizes whitespace in raw article fields.
///
/// All patterns are compiled once at construction.
///
/// ## Example
///
/// ```rust
/// use vietseg::TextCleaner;
///
/// let cleaner = TextCleaner::new();
/// assert_eq!(
///     cleaner.clean(Some("Ảnh: Nguyen Van A Một vụ tai nạn xảy ra")),
///     "Một vụ tai nạn xảy ra"
/// );
/// assert_eq!(cleaner.clean(None), "");
/// ```
#[derive(Debug, Clone)]
pub struct TextCleaner {
    credit_attribution: Regex,
    credit_marker: Regex,
    whitespace: Regex,
}

impl TextCleaner {
    /// Create a cleaner with the built-in credit patterns.
    #[must_use]
    pub fn new() -> Self {
        let upper = alphabet::UPPER;
        let lower = alphabet::LOWER;
        // 1-4 capitalized words after the marker, stripped only when yet
        // another capitalized word follows. `regex` has no lookahead, so the
        // trailing capital is captured and re-emitted by the replacement.
        let credit_attribution = Regex::new(&format!(
            r"(?:Video|Ảnh)\s*:\s*(?:[{upper}][{lower}]*\s+){{1,4}}([{upper}])"
        ))
        .expect("credit attribution pattern is valid");
        let credit_marker =
            Regex::new(r"(?:Video|Ảnh)\s*:\s*").expect("credit marker pattern is valid");
        let whitespace = Regex::new(r"\s+").expect("whitespace pattern is valid");

        Self {
            credit_attribution,
            credit_marker,
            whitespace,
        }
    }

    /// Clean one raw field value.
    ///
    /// `None` (an absent or non-string cell) degrades to an empty string;
    /// cleaning never fails.
    #[must_use]
    pub fn clean(&self, text: Option<&str>) -> String {
        let Some(text) = text else {
            return String::new();
        };

        let text = text.replace(['\n', '\r'], " ");
        let text = self.credit_attribution.replace_all(&text, "${1}");
        let text = self.credit_marker.replace_all(&text, "");
        let text = self.whitespace.replace_all(&text, " ");
        text.trim().to_owned()
    }
}

impl Default for TextCleaner {
    fn default() -> Self {
        Self::new()
    }
}
