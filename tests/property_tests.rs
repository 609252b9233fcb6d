//! Property-based tests for segmentation and windowing.
//!
//! These verify the invariants the pipeline leans on:
//! - Count: an article with S sentences and step s yields ceil(S / s) windows
//! - Overlap: consecutive windows share window_size - step_size sentences
//! - Ids: chunk ids number windows densely from 0
//! - Protection: abbreviation protect/restore is reversible
//! - Filtering: every emitted sentence clears the minimum length

use proptest::prelude::*;
use vietseg::{build_windows, AbbreviationSet, SentenceSplitter, WindowConfig};

// =============================================================================
// Test Generators
// =============================================================================

/// Generate a non-empty list of sentence-like strings.
fn arbitrary_sentences() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(
        prop::string::string_regex("[A-Za-z][a-z]{3,20}\\.").unwrap(),
        1..40,
    )
}

/// Generate window/step configurations in the practical range.
fn arbitrary_config() -> impl Strategy<Value = WindowConfig> {
    (1usize..6, 1usize..6).prop_map(|(w, s)| WindowConfig::new(w, s).unwrap())
}

/// Generate prose-like text with periods and capitalized words.
fn prose_text() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::string::string_regex("[A-Z][a-z]{2,10}( [a-z]{2,10}){2,8}\\.").unwrap(),
        1..10,
    )
    .prop_map(|sentences| sentences.join(" "))
}

// =============================================================================
// Window Builder
// =============================================================================

proptest! {
    #[test]
    fn window_count_is_ceil_len_over_step(
        sentences in arbitrary_sentences(),
        config in arbitrary_config(),
    ) {
        let windows = build_windows("a", &sentences, &config);
        prop_assert_eq!(windows.len(), sentences.len().div_ceil(config.step_size()));
        prop_assert_eq!(windows.len(), config.window_count(sentences.len()));
    }

    #[test]
    fn window_text_matches_source_slice(
        sentences in arbitrary_sentences(),
        config in arbitrary_config(),
    ) {
        let windows = build_windows("a", &sentences, &config);
        for (n, window) in windows.iter().enumerate() {
            let start = n * config.step_size();
            let end = (start + config.window_size()).min(sentences.len());
            prop_assert_eq!(&window.text, &sentences[start..end].join(" "));
        }
    }

    #[test]
    fn chunk_ids_number_densely_from_zero(
        sentences in arbitrary_sentences(),
        config in arbitrary_config(),
    ) {
        let windows = build_windows("bai-9", &sentences, &config);
        for (n, window) in windows.iter().enumerate() {
            prop_assert_eq!(&window.chunk_id, &format!("bai-9_w{n}"));
            prop_assert_eq!(&window.article_id, "bai-9");
        }
    }

    #[test]
    fn full_consecutive_windows_share_the_overlap(
        sentences in arbitrary_sentences(),
        config in arbitrary_config(),
    ) {
        prop_assume!(config.overlap() > 0);
        let windows = build_windows("a", &sentences, &config);

        for n in 0..windows.len().saturating_sub(1) {
            let next_start = (n + 1) * config.step_size();
            // Only full-length neighbor pairs carry the whole overlap.
            if next_start + config.window_size() > sentences.len() {
                continue;
            }
            let shared = &sentences[next_start..next_start + config.overlap()];
            let shared = shared.join(" ");
            prop_assert!(windows[n].text.ends_with(&shared));
            prop_assert!(windows[n + 1].text.starts_with(&shared));
        }
    }

    #[test]
    fn windowing_is_deterministic(
        sentences in arbitrary_sentences(),
        config in arbitrary_config(),
    ) {
        prop_assert_eq!(
            build_windows("a", &sentences, &config),
            build_windows("a", &sentences, &config)
        );
    }
}

// =============================================================================
// Abbreviation Protection
// =============================================================================

proptest! {
    #[test]
    fn protect_restore_round_trips(text in "[A-Za-z0-9 .,?!]{0,120}") {
        // "Th.S" is the one default literal whose protected form is not a
        // plain period swap; everything else round-trips exactly.
        prop_assume!(!text.contains("Th.S"));
        let set = AbbreviationSet::default();
        prop_assert_eq!(set.restore(&set.protect(&text)), text);
    }

    #[test]
    fn protected_text_has_no_abbreviation_periods(text in "[A-Za-z .]{0,120}") {
        let set = AbbreviationSet::default();
        let protected = set.protect(&text);
        for literal in ["TP.", "Tp.", "Mr.", "Mrs.", "Dr.", "TS."] {
            prop_assert!(!protected.contains(literal));
        }
    }
}

// =============================================================================
// Sentence Splitter
// =============================================================================

proptest! {
    #[test]
    fn emitted_sentences_clear_the_minimum_length(text in prose_text()) {
        let splitter = SentenceSplitter::default();
        for sentence in splitter.split(&text) {
            prop_assert!(sentence.chars().count() > 10, "too short: {sentence:?}");
            prop_assert_eq!(sentence.trim(), sentence.as_str());
        }
    }

    #[test]
    fn splitting_is_deterministic(text in prose_text()) {
        let splitter = SentenceSplitter::default();
        prop_assert_eq!(splitter.split(&text), splitter.split(&text));
    }

    #[test]
    fn splitting_preserves_order(text in prose_text()) {
        // Every emitted sentence must appear in the input, at increasing
        // positions (the splitter never reorders).
        let splitter = SentenceSplitter::default().with_min_chars(0);
        let mut from = 0;
        for sentence in splitter.split(&text) {
            match text[from..].find(&sentence) {
                Some(at) => from += at + sentence.len(),
                None => prop_assert!(false, "missing or out of order: {sentence:?}"),
            }
        }
    }
}
