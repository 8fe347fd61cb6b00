//! Page range resolution and validation

use crate::error::{Error, Result};

/// End-page sentinel meaning "through the last page"
pub const LAST_PAGE: i32 = -1;

/// A closed, non-empty interval of zero-based page indices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRange {
    start: u32,
    end: u32,
}

impl PageRange {
    pub fn start(&self) -> u32 {
        self.start
    }

    pub fn end(&self) -> u32 {
        self.end
    }

    /// Number of pages in the range (never zero)
    pub fn page_count(&self) -> u32 {
        self.end - self.start + 1
    }

    /// Page indices in ascending order
    pub fn iter(&self) -> std::ops::RangeInclusive<u32> {
        self.start..=self.end
    }
}

impl IntoIterator for PageRange {
    type Item = u32;
    type IntoIter = std::ops::RangeInclusive<u32>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Resolve a requested `[start, end]` against a document of `page_count` pages.
///
/// `end == LAST_PAGE` resolves to the last page. The start page is checked
/// first, then the end page.
pub fn resolve_page_range(start: i32, end: i32, page_count: u32) -> Result<PageRange> {
    let last = i64::from(page_count) - 1;
    let start = i64::from(start);
    let end = if end == LAST_PAGE {
        last
    } else {
        i64::from(end)
    };

    if start < 0 || start > last || start > end {
        return Err(Error::InvalidStartPage {
            start,
            end,
            page_count,
        });
    }

    if end < start || end > last {
        return Err(Error::InvalidEndPage {
            start,
            end,
            page_count,
        });
    }

    // both bounds now lie in [0, page_count - 1]
    Ok(PageRange {
        start: start as u32,
        end: end as u32,
    })
}
