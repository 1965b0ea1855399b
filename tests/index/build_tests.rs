//! Index build tests.

use std::sync::Arc;

use versepage_foundation::{BookId, ErrorKind, VerseId};
use versepage_index::{IndexConfig, PageDataEntry, PageIndex, build_index};
use versepage_parser::AbbreviationTable;

fn verse(book: u32, chapter: u32, verse: u32) -> VerseId {
    VerseId::new(BookId::new(book).unwrap(), chapter, verse).unwrap()
}

fn pages(index: &PageIndex, id: VerseId) -> Vec<u32> {
    index
        .pages_for(id)
        .map(|p| p.iter().copied().collect())
        .unwrap_or_default()
}

#[test]
fn single_verse_spill_adds_next_page() {
    let index = PageIndex::builder().build(&[PageDataEntry::new(10, "John 3:16").spilling()]);
    assert_eq!(pages(&index, verse(43, 3, 16)), vec![10, 11]);
}

#[test]
fn spill_only_touches_last_verse() {
    let index = PageIndex::builder().build(&[PageDataEntry::new(10, "John 3:16-18").spilling()]);
    assert_eq!(pages(&index, verse(43, 3, 16)), vec![10]);
    assert_eq!(pages(&index, verse(43, 3, 18)), vec![10, 11]);
}

#[test]
fn bad_rows_are_skipped_not_fatal() {
    let entries = [
        PageDataEntry::new(1, "Genesis 1:1-10"),
        PageDataEntry::new(2, "Frobnicate 1:1"),
        PageDataEntry::new(3, "Genesis 1:11-"),
        PageDataEntry::new(4, "Gen 1:11-31"),
    ];
    let index = PageIndex::builder().build(&entries);
    let report = index.report();

    assert_eq!(report.rows, 4);
    assert_eq!(report.indexed, 2);
    assert!(!report.is_clean());
    assert_eq!(
        report.skipped.iter().map(|s| s.row).collect::<Vec<_>>(),
        vec![2, 3]
    );
    assert!(matches!(report.skipped[0].error.kind, ErrorKind::UnknownBook(_)));
    assert!(matches!(report.skipped[1].error.kind, ErrorKind::ParseError { .. }));
    assert_eq!(pages(&index, verse(1, 1, 31)), vec![4]);
}

#[test]
fn overlapping_rows_share_verses() {
    let index = PageIndex::builder().build(&[
        PageDataEntry::new(5, "Ruth 1:1-10"),
        PageDataEntry::new(6, "Ruth 1:10-20"),
    ]);
    assert_eq!(pages(&index, verse(8, 1, 10)), vec![5, 6]);
    assert_eq!(index.report().overlaps, 1);
}

#[test]
fn fallback_verses_from_config() {
    let index = PageIndex::builder()
        .with_config(IndexConfig::default().with_fallback_verses(12))
        .build(&[PageDataEntry::new(1, "Jude 1")]);
    assert_eq!(index.len(), 12);
}

#[test]
fn separate_indices_keep_their_own_tables() {
    let entries = [PageDataEntry::new(3, "Jo 1")];
    let short = build_index(
        &entries,
        AbbreviationTable::new().with("Jo", "John"),
        Arc::new(|_: BookId, _: u32| 3),
    );
    let standard = PageIndex::builder().build(&entries);

    assert_eq!(short.len(), 3);
    assert!(standard.is_empty());
    assert_eq!(standard.report().skipped.len(), 1);
}
