//! Lookup tests.

use versepage_index::{LookupError, LookupResult, PageDataEntry, PageIndex};

fn index() -> PageIndex {
    PageIndex::builder().build(&[
        PageDataEntry::new(5, "Romans 8:1-17"),
        PageDataEntry::new(6, "Romans 8:18-34"),
        PageDataEntry::new(7, "Romans 8:35-50"),
        PageDataEntry::new(9, "Romans 9:1-20"),
        PageDataEntry::new(30, "Song of Songs 2:1-17").spilling(),
    ])
}

fn display(result: LookupResult) -> (String, bool) {
    let found = result.into_result().unwrap();
    (found.page_display, found.is_range)
}

#[test]
fn exact_reference_is_single_page() {
    let (page, is_range) = display(index().lookup("Romans 8:28"));
    assert_eq!(page, "6");
    assert!(!is_range);
}

#[test]
fn contiguous_pages() {
    assert_eq!(display(index().lookup("Rom 8:10-40")), ("5-7".to_string(), true));
}

#[test]
fn scattered_pages() {
    let found = index().lookup("Romans 8:40-9:3").into_result().unwrap();
    assert_eq!(found.page_display, "7,9");
    assert!(found.is_range);
    assert_eq!(found.page_start(), Some(7));
    assert_eq!(found.page_end(), Some(9));
}

#[test]
fn song_of_solomon_finds_song_of_songs() {
    let found = index().lookup("Song of Solomon 2:17").into_result().unwrap();
    assert_eq!(found.reference, "Song of Songs 2:17");
    assert_eq!(found.pages, vec![30, 31]);
    assert_eq!(found.book_info.name, "Song of Songs");
    assert_eq!(found.book_info.chapter, Some(2));
}

#[test]
fn song_abbreviation_finds_song_of_songs() {
    let found = index().lookup("Song 2:3").into_result().unwrap();
    assert_eq!(found.reference, "Song of Songs 2:3");
    assert_eq!(found.page_display, "30");
}

#[test]
fn partial_coverage_warns() {
    let found = index().lookup("Romans 9").into_result().unwrap();
    assert_eq!(found.page_display, "9");
    assert_eq!(found.warning.unwrap().missing, 30);
    assert_eq!(found.warning.unwrap().to_string(), "30 verse(s) out of range.");
}

#[test]
fn empty_input() {
    for blank in ["", "   ", "\t\n"] {
        let error = index().lookup(blank).into_result().unwrap_err();
        assert_eq!(error, LookupError::EmptyInput);
        assert_eq!(error.to_string(), "Please enter a Bible reference.");
    }
}

#[test]
fn unknown_book_is_invalid_reference() {
    let error = index().lookup("Frobnicate 1:1").into_result().unwrap_err();
    assert!(error.to_string().contains("Invalid reference format"));
}

#[test]
fn all_missing_reports_count() {
    let error = index().lookup("Genesis 1:1-7").into_result().unwrap_err();
    assert_eq!(error, LookupError::AllOutOfRange { missing: 7 });
    assert_eq!(error.to_string(), "All 7 verse(s) out of range.");
}

#[test]
fn reversed_range_has_no_verses() {
    let error = index().lookup("Romans 9-8").into_result().unwrap_err();
    assert_eq!(error, LookupError::NoVerses);
}
