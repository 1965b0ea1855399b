//! Range resolution and verse-id expansion.

use std::fmt;
use std::sync::Arc;

use tracing::debug;
use versepage_foundation::{
    BookId, BookTable, ChapterLengths, Error, MAX_COMPONENT, Result, UniformChapterLength, VerseId,
};

use crate::grammar::{CitationShape, scan};

/// A resolved citation: one book, an inclusive start and end position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParsedRange {
    /// The cited book.
    pub book: BookId,
    /// First chapter of the range.
    pub start_chapter: u32,
    /// First verse in the first chapter.
    pub start_verse: u32,
    /// Last chapter of the range.
    pub end_chapter: u32,
    /// Last verse in the last chapter.
    pub end_verse: u32,
}

impl ParsedRange {
    /// Returns true if the end position comes before the start position.
    #[must_use]
    pub fn is_reversed(&self) -> bool {
        (self.end_chapter, self.end_verse) < (self.start_chapter, self.start_verse)
    }

    /// Lists every verse id in the range, ordered by chapter then verse.
    ///
    /// Interior chapters run from verse 1 to the oracle's last verse. A
    /// reversed range yields no ids.
    ///
    /// # Errors
    ///
    /// Returns an encoding overflow error if the range reaches past chapter
    /// or verse 999.
    pub fn verse_ids(&self, oracle: &dyn ChapterLengths) -> Result<Vec<VerseId>> {
        if self.start_chapter <= self.end_chapter && self.end_chapter > MAX_COMPONENT {
            return Err(Error::encoding_overflow(self.end_chapter, self.end_verse));
        }

        let mut ids = Vec::new();
        for chapter in self.start_chapter..=self.end_chapter {
            let first = if chapter == self.start_chapter {
                self.start_verse
            } else {
                1
            };
            let last = if chapter == self.end_chapter {
                self.end_verse
            } else {
                oracle.max_verse(self.book, chapter)
            };
            for verse in first..=last {
                ids.push(VerseId::new(self.book, chapter, verse)?);
            }
        }
        Ok(ids)
    }
}

impl fmt::Display for ParsedRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}:{}-{}:{}",
            self.book, self.start_chapter, self.start_verse, self.end_chapter, self.end_verse
        )
    }
}

/// Parses canonical citations and expands them into verse ids.
///
/// The book table and chapter-length oracle are injected so expanders with
/// different oracles can coexist.
#[derive(Clone)]
pub struct RangeExpander {
    books: Arc<BookTable>,
    oracle: Arc<dyn ChapterLengths>,
}

impl RangeExpander {
    /// Creates an expander over the given book table and oracle.
    #[must_use]
    pub fn new(books: Arc<BookTable>, oracle: Arc<dyn ChapterLengths>) -> Self {
        Self { books, oracle }
    }

    /// Returns the chapter-length oracle.
    #[must_use]
    pub fn oracle(&self) -> &dyn ChapterLengths {
        self.oracle.as_ref()
    }

    /// Parses a canonical citation into a range.
    ///
    /// A verse on the start side makes a bare trailing number a verse
    /// ("John 3:16-18"); without one it is a chapter ("Genesis 1-3").
    ///
    /// # Errors
    ///
    /// Returns a parse error for malformed text and an unknown-book error
    /// when the book name is not canonical.
    pub fn parse(&self, reference: &str) -> Result<ParsedRange> {
        let CitationShape {
            book,
            start_chapter,
            start_verse,
            end,
            end_verse,
        } = scan(reference)?;
        let book = self
            .books
            .resolve(book)
            .ok_or_else(|| Error::unknown_book(book))?;

        let (end_chapter, end_verse) = match (start_verse, end, end_verse) {
            (_, Some(chapter), Some(verse)) => (chapter, verse),
            (Some(_), Some(verse), None) => (start_chapter, verse),
            (None, Some(chapter), None) => (chapter, self.oracle.max_verse(book, chapter)),
            (Some(verse), None, _) => (start_chapter, verse),
            (None, None, _) => (start_chapter, self.oracle.max_verse(book, start_chapter)),
        };

        Ok(ParsedRange {
            book,
            start_chapter,
            start_verse: start_verse.unwrap_or(1),
            end_chapter,
            end_verse,
        })
    }

    /// Expands a canonical citation into its ordered verse ids.
    ///
    /// # Errors
    ///
    /// Propagates [`RangeExpander::parse`] errors and encoding overflow.
    pub fn expand(&self, reference: &str) -> Result<Vec<VerseId>> {
        let range = self.parse(reference)?;
        if range.is_reversed() {
            debug!(%range, reference, "reversed range expands to no verses");
        }
        range.verse_ids(self.oracle.as_ref())
    }
}

impl Default for RangeExpander {
    fn default() -> Self {
        Self::new(
            Arc::new(BookTable::canonical()),
            Arc::new(UniformChapterLength::default()),
        )
    }
}

impl fmt::Debug for RangeExpander {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RangeExpander")
            .field("books", &self.books.len())
            .finish_non_exhaustive()
    }
}
