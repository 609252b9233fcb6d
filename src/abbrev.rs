//! Abbreviation protection for sentence splitting.
//!
//! ## The Problem
//!
//! Vietnamese news text is full of dotted abbreviations:
//!
//! ```text
//! "TP. Hồ Chí Minh"   (Thành phố — city)
//! "TS. Nguyễn Văn A"  (Tiến sĩ — doctorate)
//! "Th.S Trần Thị B"   (Thạc sĩ — master's degree)
//! ```
//!
//! A period-based sentence splitter sees `TP.` and happily cuts the city name
//! in half. The classic fix: before splitting, rewrite each known
//! abbreviation so its period becomes a sentinel token the splitter ignores,
//! then swap the sentinel back afterwards.
//!
//! ```text
//! "TP. Hồ Chí Minh"  --protect-->  "TP<PRD> Hồ Chí Minh"
//!                    --split---->  (no boundary found)
//!                    --restore--> "TP. Hồ Chí Minh"
//! ```
//!
//! ## Ordering Matters
//!
//! Protection is plain sequential string replacement, so when one literal is
//! a substring of another the iteration order changes the result. The set
//! therefore stores an explicit *ordered* list, longest literal first, which
//! makes the outcome deterministic regardless of how the pairs were supplied.

/// Sentinel standing in for a protected period.
const PERIOD_SENTINEL: &str = "<PRD>";

/// An ordered set of abbreviation literals and their protected forms.
///
/// Immutable once built; construct one per corpus/locale and hand it to
/// [`SentenceSplitter`](crate::SentenceSplitter).
///
/// ## Example
///
/// ```rust
/// use vietseg::AbbreviationSet;
///
/// let abbrevs = AbbreviationSet::default();
/// let protected = abbrevs.protect("TP. Hồ Chí Minh");
/// assert_eq!(protected, "TP<PRD> Hồ Chí Minh");
/// assert_eq!(abbrevs.restore(&protected), "TP. Hồ Chí Minh");
/// ```
#[derive(Debug, Clone)]
pub struct AbbreviationSet {
    /// (literal, protected form), longest literal first.
    pairs: Vec<(String, String)>,
}

/// Default abbreviation set for Vietnamese news text.
///
/// Note `Th.S` keeps its internal period and gains a trailing sentinel; after
/// restore it reads `Th.S.`. Inherited behavior, kept for output stability.
const DEFAULT_PAIRS: &[(&str, &str)] = &[
    ("Mrs.", "Mrs<PRD>"),
    ("Th.S", "Th.S<PRD>"),
    ("TP.", "TP<PRD>"),
    ("Tp.", "Tp<PRD>"),
    ("Mr.", "Mr<PRD>"),
    ("Dr.", "Dr<PRD>"),
    ("TS.", "TS<PRD>"),
];

impl AbbreviationSet {
    /// Build a set from `(literal, protected form)` pairs.
    ///
    /// Pairs are reordered longest-literal-first so overlapping literals
    /// (one a substring of another) resolve deterministically. Protected
    /// forms should embed `<PRD>` wherever a period was removed so
    /// [`restore`](Self::restore) can undo the rewrite.
    #[must_use]
    pub fn new(pairs: Vec<(String, String)>) -> Self {
        let mut pairs = pairs;
        // Stable sort: equal-length literals keep their supplied order.
        pairs.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
        Self { pairs }
    }

    /// The number of abbreviations in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Rewrite every abbreviation occurrence into its protected form.
    #[must_use]
    pub fn protect(&self, text: &str) -> String {
        let mut text = text.to_owned();
        for (literal, protected) in &self.pairs {
            text = text.replace(literal.as_str(), protected);
        }
        text
    }

    /// Swap every sentinel back to a literal period.
    #[must_use]
    pub fn restore(&self, text: &str) -> String {
        text.replace(PERIOD_SENTINEL, ".")
    }
}

impl Default for AbbreviationSet {
    fn default() -> Self {
        Self::new(
            DEFAULT_PAIRS
                .iter()
                .map(|(l, p)| ((*l).to_owned(), (*p).to_owned()))
                .collect(),
        )
    }
}
