//! Dense verse identifiers.

use std::fmt;

use crate::book::BookId;
use crate::error::{Error, Result};

/// Largest chapter or verse number the encoding can hold.
pub const MAX_COMPONENT: u32 = 999;

const BOOK_STRIDE: u32 = 1_000_000;
const CHAPTER_STRIDE: u32 = 1_000;

/// Dense key for a `(book, chapter, verse)` triple.
///
/// # Layout
/// `book * 1_000_000 + chapter * 1_000 + verse`, so ids of one book sort by
/// chapter then verse. Chapters and verses must stay at or below
/// [`MAX_COMPONENT`]; larger values would alias a neighbouring key and are
/// rejected by [`VerseId::new`].
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VerseId(u32);

impl VerseId {
    /// Encodes a verse.
    ///
    /// # Errors
    ///
    /// Returns an encoding overflow error if `chapter` or `verse` exceeds
    /// [`MAX_COMPONENT`].
    pub fn new(book: BookId, chapter: u32, verse: u32) -> Result<Self> {
        if chapter > MAX_COMPONENT || verse > MAX_COMPONENT {
            return Err(Error::encoding_overflow(chapter, verse));
        }
        Ok(Self(book.get() * BOOK_STRIDE + chapter * CHAPTER_STRIDE + verse))
    }

    /// Reinterprets a raw encoded value.
    ///
    /// # Errors
    ///
    /// Returns an error if the book component is not a canonical book.
    pub fn from_raw(raw: u32) -> Result<Self> {
        BookId::new(raw / BOOK_STRIDE)?;
        Ok(Self(raw))
    }

    /// Returns the raw encoded value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Returns the book component.
    #[must_use]
    pub const fn book(self) -> BookId {
        // Every constructor validates the book component.
        BookId::from_validated(self.0 / BOOK_STRIDE)
    }

    /// Returns the chapter component.
    #[must_use]
    pub const fn chapter(self) -> u32 {
        (self.0 % BOOK_STRIDE) / CHAPTER_STRIDE
    }

    /// Returns the verse component.
    #[must_use]
    pub const fn verse(self) -> u32 {
        self.0 % CHAPTER_STRIDE
    }
}

impl fmt::Debug for VerseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VerseId({})", self.0)
    }
}

impl fmt::Display for VerseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}:{}", self.book(), self.chapter(), self.verse())
    }
}
