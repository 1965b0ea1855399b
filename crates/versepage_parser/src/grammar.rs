//! Citation grammar.
//!
//! Accepted shape (after normalization):
//!
//! ```text
//! Book SP+ Chapter [":" Verse] ["-" Number [":" Verse]]
//! ```
//!
//! The book name is the shortest prefix that is followed by whitespace and a
//! tail matching the numeric part completely, so "1 Samuel 3:4" splits as
//! "1 Samuel" / "3:4" rather than "1" / "Samuel 3:4".

use versepage_foundation::{Error, Result};

/// Raw structure of a citation, before book resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CitationShape<'a> {
    /// Book name text as written (not yet resolved).
    pub book: &'a str,
    /// First chapter.
    pub start_chapter: u32,
    /// Verse after the first chapter, if any.
    pub start_verse: Option<u32>,
    /// Number after the dash: a chapter or a verse depending on context.
    pub end: Option<u32>,
    /// Verse after the second chapter, if any.
    pub end_verse: Option<u32>,
}

/// Digit runs of the numeric tail, unconverted.
struct Tail<'a> {
    start_chapter: &'a str,
    start_verse: Option<&'a str>,
    end: Option<&'a str>,
    end_verse: Option<&'a str>,
}

/// Scans a citation into its parts.
///
/// # Errors
///
/// Returns a parse error when no split of the input matches the grammar, and
/// an invalid-number error when a matched number does not fit in a `u32`.
pub fn scan(input: &str) -> Result<CitationShape<'_>> {
    for (split, ch) in input.char_indices() {
        if split == 0 || !ch.is_whitespace() {
            continue;
        }
        let book = &input[..split];
        if book.contains(['\n', '\r']) {
            break;
        }
        let rest = input[split..].trim_start();
        if let Some(tail) = match_tail(rest) {
            return Ok(CitationShape {
                book,
                start_chapter: number(tail.start_chapter)?,
                start_verse: tail.start_verse.map(number).transpose()?,
                end: tail.end.map(number).transpose()?,
                end_verse: tail.end_verse.map(number).transpose()?,
            });
        }
    }
    Err(Error::parse(input))
}

/// Finds the leading `Book Chapter` pair of a citation, ignoring whatever
/// follows the chapter number.
#[must_use]
pub fn leading_book_and_chapter(input: &str) -> Option<(&str, u32)> {
    for (split, ch) in input.char_indices() {
        if split == 0 || !ch.is_whitespace() {
            continue;
        }
        let book = &input[..split];
        if book.contains(['\n', '\r']) {
            return None;
        }
        let rest = input[split..].trim_start();
        let (digits, _) = take_digits(rest);
        if !digits.is_empty() {
            return number(digits).ok().map(|chapter| (book, chapter));
        }
    }
    None
}

/// Matches the whole numeric tail or nothing.
fn match_tail(text: &str) -> Option<Tail<'_>> {
    let (start_chapter, mut rest) = take_digits(text);
    if start_chapter.is_empty() {
        return None;
    }

    let mut start_verse = None;
    if let Some(after) = rest.strip_prefix(':') {
        let (digits, remaining) = take_digits(after);
        if digits.is_empty() {
            return None;
        }
        start_verse = Some(digits);
        rest = remaining;
    }

    let mut end = None;
    let mut end_verse = None;
    if let Some(after) = rest.strip_prefix('-') {
        let (digits, remaining) = take_digits(after);
        if digits.is_empty() {
            return None;
        }
        end = Some(digits);
        rest = remaining;

        if let Some(after) = rest.strip_prefix(':') {
            let (digits, remaining) = take_digits(after);
            if digits.is_empty() {
                return None;
            }
            end_verse = Some(digits);
            rest = remaining;
        }
    }

    rest.is_empty().then_some(Tail {
        start_chapter,
        start_verse,
        end,
        end_verse,
    })
}

/// Splits off the leading ASCII digit run.
fn take_digits(text: &str) -> (&str, &str) {
    let len = text.bytes().take_while(u8::is_ascii_digit).count();
    text.split_at(len)
}

fn number(digits: &str) -> Result<u32> {
    digits.parse().map_err(|_| Error::invalid_number(digits))
}
