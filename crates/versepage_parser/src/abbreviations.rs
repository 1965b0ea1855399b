//! Abbreviation table.
//!
//! Maps a single leading token ("Gen", "1Cor", "Ps") to the canonical book
//! name used by the book table.

use std::collections::HashMap;

/// Standard abbreviations, each pointing at a canonical book name.
const STANDARD: &[(&str, &str)] = &[
    ("Gen", "Genesis"),
    ("Ex", "Exodus"),
    ("Lev", "Leviticus"),
    ("Num", "Numbers"),
    ("Deut", "Deuteronomy"),
    ("Josh", "Joshua"),
    ("Judg", "Judges"),
    ("Ruth", "Ruth"),
    ("1Sam", "1 Samuel"),
    ("2Sam", "2 Samuel"),
    ("1Kings", "1 Kings"),
    ("2Kings", "2 Kings"),
    ("1Chron", "1 Chronicles"),
    ("2Chron", "2 Chronicles"),
    ("Ezra", "Ezra"),
    ("Neh", "Nehemiah"),
    ("Esth", "Esther"),
    ("Job", "Job"),
    ("Ps", "Psalms"),
    ("Psalm", "Psalms"),
    ("Prov", "Proverbs"),
    ("Eccl", "Ecclesiastes"),
    ("Song", "Song of Songs"),
    ("Isa", "Isaiah"),
    ("Jer", "Jeremiah"),
    ("Lam", "Lamentations"),
    ("Ezek", "Ezekiel"),
    ("Dan", "Daniel"),
    ("Hos", "Hosea"),
    ("Joel", "Joel"),
    ("Amos", "Amos"),
    ("Obad", "Obadiah"),
    ("Jonah", "Jonah"),
    ("Mic", "Micah"),
    ("Nah", "Nahum"),
    ("Hab", "Habakkuk"),
    ("Zeph", "Zephaniah"),
    ("Hag", "Haggai"),
    ("Zech", "Zechariah"),
    ("Mal", "Malachi"),
    ("Matt", "Matthew"),
    ("Mark", "Mark"),
    ("Luke", "Luke"),
    ("John", "John"),
    ("Jn", "John"),
    ("Acts", "Acts"),
    ("Rom", "Romans"),
    ("1Cor", "1 Corinthians"),
    ("2Cor", "2 Corinthians"),
    ("Gal", "Galatians"),
    ("Eph", "Ephesians"),
    ("Phil", "Philippians"),
    ("Col", "Colossians"),
    ("1Thess", "1 Thessalonians"),
    ("2Thess", "2 Thessalonians"),
    ("1Tim", "1 Timothy"),
    ("2Tim", "2 Timothy"),
    ("Titus", "Titus"),
    ("Phlm", "Philemon"),
    ("Heb", "Hebrews"),
    ("Jas", "James"),
    ("1Pet", "1 Peter"),
    ("2Pet", "2 Peter"),
    ("1John", "1 John"),
    ("2John", "2 John"),
    ("3John", "3 John"),
    ("Jude", "Jude"),
    ("Rev", "Revelation"),
];

/// Read-only token → canonical book name table.
///
/// Lookup is exact and case-sensitive.
#[derive(Clone, Debug, Default)]
pub struct AbbreviationTable {
    entries: HashMap<String, String>,
}

impl AbbreviationTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the standard table covering all 66 books.
    #[must_use]
    pub fn standard() -> Self {
        STANDARD
            .iter()
            .map(|&(abbrev, full)| (abbrev.to_string(), full.to_string()))
            .collect()
    }

    /// Registers an abbreviation, replacing any previous expansion.
    pub fn insert(&mut self, abbrev: impl Into<String>, full: impl Into<String>) {
        self.entries.insert(abbrev.into(), full.into());
    }

    /// Adds an abbreviation, builder style.
    #[must_use]
    pub fn with(mut self, abbrev: impl Into<String>, full: impl Into<String>) -> Self {
        self.insert(abbrev, full);
        self
    }

    /// Looks up the canonical name for a token.
    #[must_use]
    pub fn get(&self, abbrev: &str) -> Option<&str> {
        self.entries.get(abbrev).map(String::as_str)
    }

    /// Number of registered abbreviations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no abbreviations are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, String)> for AbbreviationTable {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
