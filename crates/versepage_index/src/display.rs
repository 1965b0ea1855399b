//! Page set classification.

use std::fmt;

/// How a set of pages is presented.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PageDisplay {
    /// Exactly one page, shown as `"5"`.
    Single(u32),
    /// A gap-free run, shown as `"5-7"`.
    Contiguous {
        /// First page of the run.
        first: u32,
        /// Last page of the run.
        last: u32,
    },
    /// Pages with gaps, shown as `"5,7,9"`.
    Scattered(Vec<u32>),
}

impl PageDisplay {
    /// Classifies ascending, distinct pages. Returns `None` for no pages.
    #[must_use]
    pub fn classify(pages: &[u32]) -> Option<Self> {
        let (&first, &last) = (pages.first()?, pages.last()?);
        if pages.len() == 1 {
            return Some(Self::Single(first));
        }
        if u64::from(last) - u64::from(first) + 1 == pages.len() as u64 {
            Some(Self::Contiguous { first, last })
        } else {
            Some(Self::Scattered(pages.to_vec()))
        }
    }

    /// Returns true for anything spanning more than one page.
    #[must_use]
    pub fn is_range(&self) -> bool {
        !matches!(self, Self::Single(_))
    }
}

impl fmt::Display for PageDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(page) => write!(f, "{page}"),
            Self::Contiguous { first, last } => write!(f, "{first}-{last}"),
            Self::Scattered(pages) => {
                for (i, page) in pages.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{page}")?;
                }
                Ok(())
            }
        }
    }
}
