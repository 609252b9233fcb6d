//! Sentence boundary detection for Vietnamese text.
//!
//! ## The Rule
//!
//! A boundary is any point where sentence-ending punctuation (`.`, `?`, `!`)
//! is followed by whitespace and then an uppercase letter — including the
//! accented Vietnamese capitals from [`alphabet::UPPER`]:
//!
//! ```text
//! "Xe tải lật trên đèo. Ủy ban ra công văn."
//!                     ^ boundary: '.' + ' ' + 'Ủ'
//! ```
//!
//! The punctuation stays with the preceding sentence; the capital opens the
//! next one.
//!
//! ## What This Is Not
//!
//! This is a heuristic, not a sentence-boundary classifier. It misfires on
//! quoted speech (`"Dừng lại!" Anh ta hét.`) and it cannot see every dotted
//! construct. Known trade-off; do not "fix" it by special-casing, extend the
//! abbreviation set instead.
//!
//! ## Pipeline per call
//!
//! 1. [`AbbreviationSet::protect`] rewrites known abbreviations so their
//!    periods cannot match the boundary rule.
//! 2. The text is cut at every boundary match.
//! 3. [`AbbreviationSet::restore`] puts the periods back.
//! 4. Candidates are trimmed; fragments at or under the minimum character
//!    count are dropped (stray punctuation, orphaned initials).

use regex::Regex;

use crate::{alphabet, AbbreviationSet};

/// Candidates with at most this many characters are discarded.
const DEFAULT_MIN_CHARS: usize = 10;

/// Splits cleaned article text into an ordered list of sentences.
///
/// ## Example
///
/// ```rust
/// use vietseg::SentenceSplitter;
///
/// let splitter = SentenceSplitter::default();
/// let sentences = splitter.split(
///     "TP. Hồ Chí Minh ùn tắc nghiêm trọng. Cảnh sát điều tra hiện trường.",
/// );
/// assert_eq!(sentences.len(), 2);
/// assert_eq!(sentences[0], "TP. Hồ Chí Minh ùn tắc nghiêm trọng.");
/// ```
#[derive(Debug, Clone)]
pub struct SentenceSplitter {
    abbreviations: AbbreviationSet,
    boundary: Regex,
    min_chars: usize,
}

impl SentenceSplitter {
    /// Create a splitter using the given abbreviation set.
    #[must_use]
    pub fn new(abbreviations: AbbreviationSet) -> Self {
        // The capital is captured so the cut lands exactly on it, keeping
        // the punctuation attached to the preceding sentence (lookaround
        // emulation; `regex` has none).
        let boundary = Regex::new(&format!(r"[.?!]\s+([{}])", alphabet::UPPER))
            .expect("boundary pattern is valid");
        Self {
            abbreviations,
            boundary,
            min_chars: DEFAULT_MIN_CHARS,
        }
    }

    /// Override the minimum sentence length.
    ///
    /// Candidates whose character count is `<= min_chars` after trimming are
    /// dropped. The default of 10 suits news prose; annotation experiments
    /// on short headline-style corpora may want it lower.
    #[must_use]
    pub fn with_min_chars(mut self, min_chars: usize) -> Self {
        self.min_chars = min_chars;
        self
    }

    /// Split `text` into sentences, in order.
    ///
    /// Empty input yields an empty vec. Never errors.
    #[must_use]
    pub fn split(&self, text: &str) -> Vec<String> {
        if text.is_empty() {
            return vec![];
        }

        let protected = self.abbreviations.protect(text);

        let mut cuts = vec![0];
        for captures in self.boundary.captures_iter(&protected) {
            if let Some(capital) = captures.get(1) {
                cuts.push(capital.start());
            }
        }
        cuts.push(protected.len());

        let mut sentences = Vec::with_capacity(cuts.len() - 1);
        for bounds in cuts.windows(2) {
            let candidate = self.abbreviations.restore(&protected[bounds[0]..bounds[1]]);
            let candidate = candidate.trim();
            if candidate.chars().count() > self.min_chars {
                sentences.push(candidate.to_owned());
            }
        }
        sentences
    }
}

impl Default for SentenceSplitter {
    fn default() -> Self {
        Self::new(AbbreviationSet::default())
    }
}
