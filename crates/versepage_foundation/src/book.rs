//! Canonical book identifiers and the book-name table.

use std::collections::HashMap;
use std::fmt;

use crate::error::{Error, ErrorKind, Result};

/// Canonical book names in canonical order. Index `i` holds book id `i + 1`.
pub const CANONICAL_BOOKS: [&str; 66] = [
    "Genesis",
    "Exodus",
    "Leviticus",
    "Numbers",
    "Deuteronomy",
    "Joshua",
    "Judges",
    "Ruth",
    "1 Samuel",
    "2 Samuel",
    "1 Kings",
    "2 Kings",
    "1 Chronicles",
    "2 Chronicles",
    "Ezra",
    "Nehemiah",
    "Esther",
    "Job",
    "Psalms",
    "Proverbs",
    "Ecclesiastes",
    "Song of Songs",
    "Isaiah",
    "Jeremiah",
    "Lamentations",
    "Ezekiel",
    "Daniel",
    "Hosea",
    "Joel",
    "Amos",
    "Obadiah",
    "Jonah",
    "Micah",
    "Nahum",
    "Habakkuk",
    "Zephaniah",
    "Haggai",
    "Zechariah",
    "Malachi",
    "Matthew",
    "Mark",
    "Luke",
    "John",
    "Acts",
    "Romans",
    "1 Corinthians",
    "2 Corinthians",
    "Galatians",
    "Ephesians",
    "Philippians",
    "Colossians",
    "1 Thessalonians",
    "2 Thessalonians",
    "1 Timothy",
    "2 Timothy",
    "Titus",
    "Philemon",
    "Hebrews",
    "James",
    "1 Peter",
    "2 Peter",
    "1 John",
    "2 John",
    "3 John",
    "Jude",
    "Revelation",
];

/// Identifier of a canonical book, 1 (Genesis) through 66 (Revelation).
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BookId(u8);

impl BookId {
    /// The first canonical book.
    pub const GENESIS: Self = Self(1);
    /// The last canonical book.
    pub const REVELATION: Self = Self(66);

    /// Creates a book id, checking that it lies in 1..=66.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidBookId`] for values outside the canon.
    pub fn new(id: u32) -> Result<Self> {
        match u8::try_from(id) {
            Ok(n @ 1..=66) => Ok(Self(n)),
            _ => Err(Error::new(ErrorKind::InvalidBookId(id))),
        }
    }

    /// Wraps a value already known to be in 1..=66.
    #[allow(clippy::cast_possible_truncation)]
    pub(crate) const fn from_validated(id: u32) -> Self {
        Self(id as u8)
    }

    /// Returns the numeric id.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0 as u32
    }

    /// Returns the canonical name of this book.
    #[must_use]
    pub const fn name(self) -> &'static str {
        CANONICAL_BOOKS[self.0 as usize - 1]
    }

    /// Iterates over every canonical book in order.
    pub fn all() -> impl Iterator<Item = Self> {
        (1..=66u8).map(Self)
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Read-only mapping from canonical book name to [`BookId`].
///
/// Lookup is exact and case-sensitive.
#[derive(Clone, Debug)]
pub struct BookTable {
    by_name: HashMap<String, BookId>,
}

impl BookTable {
    /// Returns the standard 66-book table.
    #[must_use]
    pub fn canonical() -> Self {
        Self::from_names(BookId::all().map(|id| (id.name().to_string(), id)))
    }

    /// Builds a table from arbitrary `(name, id)` pairs.
    pub fn from_names(names: impl IntoIterator<Item = (String, BookId)>) -> Self {
        Self {
            by_name: names.into_iter().collect(),
        }
    }

    /// Resolves a book name.
    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<BookId> {
        self.by_name.get(name).copied()
    }

    /// Number of names in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    /// Returns true if the table has no names.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

impl Default for BookTable {
    fn default() -> Self {
        Self::canonical()
    }
}
