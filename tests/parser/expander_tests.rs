//! Expander tests.
//!
//! Tests for resolving citations into ordered verse ids.

use std::sync::Arc;

use proptest::prelude::*;
use versepage_foundation::{BookId, BookTable, ErrorKind, VerseId};
use versepage_parser::RangeExpander;

fn id(book: u32, chapter: u32, verse: u32) -> VerseId {
    VerseId::new(BookId::new(book).unwrap(), chapter, verse).unwrap()
}

/// Psalms 119 is long, every other chapter has 20 verses.
fn psalter() -> RangeExpander {
    RangeExpander::new(
        Arc::new(BookTable::canonical()),
        Arc::new(|book: BookId, chapter: u32| {
            if book.name() == "Psalms" && chapter == 119 {
                176
            } else {
                20
            }
        }),
    )
}

#[test]
fn cross_chapter_range() {
    let ids = RangeExpander::default().expand("Romans 8:28-9:2").unwrap();
    assert_eq!(ids.len(), 23 + 2);
    assert_eq!(ids.first(), Some(&id(45, 8, 28)));
    assert_eq!(ids.last(), Some(&id(45, 9, 2)));
}

#[test]
fn injected_oracle_shapes_whole_chapters() {
    let expander = psalter();
    assert_eq!(expander.expand("Psalms 119").unwrap().len(), 176);
    assert_eq!(expander.expand("Psalms 118-120").unwrap().len(), 20 + 176 + 20);
    assert_eq!(RangeExpander::default().expand("Psalms 119").unwrap().len(), 50);
}

#[test]
fn reversed_range_is_empty() {
    let expander = RangeExpander::default();
    assert!(expander.expand("John 5-3").unwrap().is_empty());
    assert!(expander.expand("John 3:18-16").unwrap().is_empty());
    assert!(expander.parse("John 5-3").unwrap().is_reversed());
}

#[test]
fn unknown_book() {
    let err = RangeExpander::default().expand("Frobnicate 1:1").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnknownBook(_)));
}

#[test]
fn abbreviations_are_not_resolved_here() {
    let err = RangeExpander::default().expand("Jn 3:16").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnknownBook(_)));
}

#[test]
fn verse_past_encoding_limit() {
    let err = RangeExpander::default().expand("John 3:1000").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::EncodingOverflow { .. }));
}

proptest! {
    #[test]
    fn single_verse_expands_to_one(book in 1u32..=66, chapter in 1u32..=150, verse in 1u32..=176) {
        let name = BookId::new(book).unwrap().name();
        let ids = RangeExpander::default().expand(&format!("{name} {chapter}:{verse}")).unwrap();
        prop_assert_eq!(ids, vec![id(book, chapter, verse)]);
    }

    #[test]
    fn chapter_span_ascending(start in 110u32..125, len in 0u32..5) {
        let end = start + len;
        let ids = psalter().expand(&format!("Psalms {start}-{end}")).unwrap();
        prop_assert!(ids.windows(2).all(|w| w[0] < w[1]));
        let expected: u32 = (start..=end).map(|c| if c == 119 { 176 } else { 20 }).sum();
        prop_assert_eq!(ids.len(), expected as usize);
    }
}
