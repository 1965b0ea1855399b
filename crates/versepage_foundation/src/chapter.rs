//! Chapter-length oracles.
//!
//! The range expander asks an oracle for the last verse of a chapter whenever
//! a reference leaves the end of a chapter open ("John 3", "Genesis 1-3").

use crate::book::BookId;

/// Verse count assumed for every chapter when no real table is supplied.
pub const DEFAULT_FALLBACK_VERSES: u32 = 50;

/// Supplies the highest verse number of a chapter.
pub trait ChapterLengths: Send + Sync {
    /// Returns the last verse of `chapter` in `book`. Must be at least 1.
    fn max_verse(&self, book: BookId, chapter: u32) -> u32;
}

/// Treats every chapter of every book as having the same length.
///
/// This is an approximation; callers needing real counts plug in their own
/// [`ChapterLengths`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct UniformChapterLength(pub u32);

impl Default for UniformChapterLength {
    fn default() -> Self {
        Self(DEFAULT_FALLBACK_VERSES)
    }
}

impl ChapterLengths for UniformChapterLength {
    fn max_verse(&self, _book: BookId, _chapter: u32) -> u32 {
        self.0
    }
}

impl<F> ChapterLengths for F
where
    F: Fn(BookId, u32) -> u32 + Send + Sync,
{
    fn max_verse(&self, book: BookId, chapter: u32) -> u32 {
        self(book, chapter)
    }
}
