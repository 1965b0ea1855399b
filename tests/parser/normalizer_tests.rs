//! Normalizer tests.
//!
//! Tests for rewriting abbreviated book names to canonical ones.

use std::sync::Arc;

use proptest::prelude::*;
use versepage_parser::{AbbreviationTable, ReferenceNormalizer};

#[test]
fn expands_registered_abbreviation() {
    let normalizer = ReferenceNormalizer::default();
    assert_eq!(normalizer.normalize("Jn 3:16"), "John 3:16");
    assert_eq!(normalizer.normalize("Gen 1"), "Genesis 1");
}

#[test]
fn song_of_solomon_alias() {
    let normalizer = ReferenceNormalizer::default();
    assert_eq!(normalizer.normalize("Song of Solomon 2:1"), "Song of Songs 2:1");
}

#[test]
fn unknown_token_left_alone() {
    let normalizer = ReferenceNormalizer::default();
    assert_eq!(normalizer.normalize("Frobnicate 1:1"), "Frobnicate 1:1");
    assert_eq!(normalizer.normalize("John 3:16"), "John 3:16");
}

#[test]
fn custom_table_replaces_standard() {
    let table = AbbreviationTable::new().with("Jo", "John");
    let normalizer = ReferenceNormalizer::new(Arc::new(table));
    assert_eq!(normalizer.normalize("Jo 1:1"), "John 1:1");
    assert_eq!(normalizer.normalize("Gen 1:1"), "Gen 1:1");
}

proptest! {
    #[test]
    fn normalize_is_idempotent(
        book in prop::sample::select(vec![
            "Gen",
            "Ps",
            "Jn",
            "Song of Solomon",
            "Song of Songs",
            "Song",
            "1Cor",
            "1 Cor",
            "Matt",
            "Rev",
            "Nope",
        ]),
        chapter in 1u32..150,
        verse in 1u32..180,
    ) {
        let normalizer = ReferenceNormalizer::default();
        let once = normalizer.normalize(&format!("{book} {chapter}:{verse}"));
        prop_assert_eq!(normalizer.normalize(&once), once.clone());
    }
}
