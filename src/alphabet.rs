//! Vietnamese alphabet character classes.
//!
//! Vietnamese uses a Latin script extended with diacritics (tone marks and
//! vowel modifications). A naive `[A-Z]` character class treats `Ảnh` or
//! `Ủy ban` as starting with a non-letter, which breaks both credit-line
//! detection and sentence-boundary detection.
//!
//! These tables enumerate the precomposed forms (NFC) actually seen in
//! Vietnamese news text. They are regex character-class *fragments*: splice
//! them into a pattern with `format!`, e.g. `[{UPPER}]`.
//!
//! Kept as constants rather than inline literals so every pattern in the
//! crate agrees on what counts as a letter.

/// Uppercase Vietnamese letters, as a regex character-class fragment.
///
/// Covers ASCII `A-Z` plus every precomposed accented uppercase form.
pub const UPPER: &str =
    "A-ZÀÁÂÃÈÉÊÌÍÒÓÔÕÙÚĂĐĨŨƠƯẠẢẤẦẨẪẬẮẰẲẴẶẸẺẼỀỂỄỆỈỊỌỎỐỒỔỖỘỚỜỞỠỢỤỦỨỪỬỮỰỲỴÝỶỸ";

/// Lowercase Vietnamese letters, as a regex character-class fragment.
pub const LOWER: &str =
    "a-zàáâãèéêìíòóôõùúăđĩũơưạảấầẩẫậắằẳẵặẹẻẽềểễệỉịọỏốồổỗộớờởỡợụủứừửữựỳỵýỷỹ";
