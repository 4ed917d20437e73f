//! # Pagination Module
//!
//! Page-size parsing, window math, and navigation links for the listing.
//!
//! ## How a Listing Request Flows
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  GET /products?search=wid&perPage=5&page=3                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ListQuery { search: "wid", per_page: Limited(5), page: 3 }            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Repository filters + paginates → items, filteredCount, totalCount     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  PageWindow::compute(filteredCount, per_page, page)                    │
//! │       ├── from = (page-1) * size + 1                                   │
//! │       ├── to   = min(page * size, filteredCount)                       │
//! │       └── last_page = max(1, ceil(filteredCount / size))               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  page_links(query, last_page)                                          │
//! │       «Previous  [1] [2] [3*] [4]  Next»                               │
//! │       (every url round-trips search + perPage)                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The "All" Sentinel
//! `perPage=-1` disables pagination: every matching record lands on a single
//! page whose window spans the whole filtered set.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::urls;
use crate::PER_PAGE_ALL_SENTINEL;

// =============================================================================
// Page Size
// =============================================================================

/// The requested page size: a positive limit, or "everything on one page".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSize {
    /// Paginate with this many rows per page.
    Limited(u32),
    /// The `-1` sentinel: pagination disabled.
    All,
}

impl PageSize {
    /// Parses the raw `perPage` query value.
    ///
    /// ## Rules
    /// - `"-1"` selects [`PageSize::All`]
    /// - any positive integer selects that limit
    /// - anything else (absent, zero, garbage) falls back to `default`
    pub fn parse(raw: Option<&str>, default: u32) -> Self {
        match raw.map(str::trim) {
            Some(PER_PAGE_ALL_SENTINEL) => PageSize::All,
            Some(value) => match value.parse::<u32>() {
                Ok(n) if n > 0 => PageSize::Limited(n),
                _ => PageSize::Limited(default),
            },
            None => PageSize::Limited(default),
        }
    }

    /// The value this size round-trips as in a query string.
    pub fn as_query_value(&self) -> String {
        match self {
            PageSize::Limited(n) => n.to_string(),
            PageSize::All => PER_PAGE_ALL_SENTINEL.to_string(),
        }
    }

    /// The row limit, or `None` when pagination is disabled.
    pub const fn limit(&self) -> Option<u32> {
        match self {
            PageSize::Limited(n) => Some(*n),
            PageSize::All => None,
        }
    }
}

// =============================================================================
// List Query
// =============================================================================

/// A normalized listing request: filter, page size, and 1-based page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    /// Literal substring filter over name/description/price, if any.
    pub search: Option<String>,
    pub per_page: PageSize,
    pub page: u32,
}

impl ListQuery {
    /// Creates a query, clamping the page to at least 1.
    pub fn new(search: Option<String>, per_page: PageSize, page: u32) -> Self {
        ListQuery {
            search,
            per_page,
            page: page.max(1),
        }
    }

    /// The same filter and size, targeting a different page.
    pub fn with_page(&self, page: u32) -> Self {
        ListQuery {
            search: self.search.clone(),
            per_page: self.per_page,
            page: page.max(1),
        }
    }
}

// =============================================================================
// Page Window
// =============================================================================

/// The visible slice of the filtered set: `from`..=`to` of `last_page` pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PageWindow {
    /// 1-based ordinal of the first row on this page.
    pub from: u64,
    /// 1-based ordinal of the last row on this page.
    /// `from > to` means the page is empty.
    pub to: u64,
    /// Number of pages in the filtered set (at least 1, even when empty).
    pub last_page: u64,
}

impl PageWindow {
    /// Computes the window for one page of the filtered set.
    ///
    /// Out-of-range pages are not an error: they produce a window whose
    /// `from` exceeds `to`, mirroring the empty row slice the store returns.
    pub fn compute(filtered_count: u64, per_page: PageSize, page: u32) -> Self {
        match per_page {
            PageSize::All => PageWindow {
                from: 1,
                to: filtered_count,
                last_page: 1,
            },
            PageSize::Limited(size) => {
                let size = u64::from(size);
                let page = u64::from(page.max(1));
                PageWindow {
                    from: (page - 1) * size + 1,
                    to: (page * size).min(filtered_count),
                    last_page: filtered_count.div_ceil(size).max(1),
                }
            }
        }
    }

    /// The offset the store should skip to reach this page.
    pub const fn offset(&self) -> u64 {
        self.from - 1
    }
}

// =============================================================================
// Page Links
// =============================================================================

/// Label used for the previous-page link. The client renders the HTML entity.
const PREVIOUS_LABEL: &str = "&laquo; Previous";

/// Label used for the next-page link.
const NEXT_LABEL: &str = "Next &raquo;";

/// One navigation entry of the pagination control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PageLink {
    pub label: String,
    /// Target URL; `None` when the target page is out of range.
    pub url: Option<String>,
    /// True on the entry for the current page.
    pub active: bool,
}

/// Builds the ordered link sequence: previous, every numbered page, next.
///
/// Every URL is produced by [`urls::list_url`], so the active search term and
/// page size round-trip into each link's query string.
pub fn page_links(query: &ListQuery, last_page: u64) -> Vec<PageLink> {
    let current = u64::from(query.page);
    let target = |page: u64| -> Option<String> {
        // Links never point outside 1..=last_page.
        if page >= 1 && page <= last_page {
            Some(urls::list_url(&query.with_page(page as u32)))
        } else {
            None
        }
    };

    let mut links = Vec::with_capacity(last_page as usize + 2);

    links.push(PageLink {
        label: PREVIOUS_LABEL.to_string(),
        url: if current > 1 { target(current - 1) } else { None },
        active: false,
    });

    for page in 1..=last_page {
        links.push(PageLink {
            label: page.to_string(),
            url: target(page),
            active: page == current,
        });
    }

    links.push(PageLink {
        label: NEXT_LABEL.to_string(),
        url: target(current + 1),
        active: false,
    });

    links
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn query(search: Option<&str>, per_page: PageSize, page: u32) -> ListQuery {
        ListQuery::new(search.map(str::to_string), per_page, page)
    }

    #[test]
    fn test_page_size_parse() {
        assert_eq!(PageSize::parse(Some("10"), 5), PageSize::Limited(10));
        assert_eq!(PageSize::parse(Some("-1"), 5), PageSize::All);
        assert_eq!(PageSize::parse(Some("0"), 5), PageSize::Limited(5));
        assert_eq!(PageSize::parse(Some("many"), 5), PageSize::Limited(5));
        assert_eq!(PageSize::parse(None, 5), PageSize::Limited(5));
    }

    #[test]
    fn test_window_middle_page() {
        let window = PageWindow::compute(12, PageSize::Limited(5), 3);
        assert_eq!(window.from, 11);
        assert_eq!(window.to, 12);
        assert_eq!(window.last_page, 3);
        assert_eq!(window.offset(), 10);
    }

    #[test]
    fn test_window_full_page() {
        let window = PageWindow::compute(12, PageSize::Limited(5), 1);
        assert_eq!(window.from, 1);
        assert_eq!(window.to, 5);
        assert_eq!(window.last_page, 3);
    }

    #[test]
    fn test_window_out_of_range_page_is_empty() {
        let window = PageWindow::compute(12, PageSize::Limited(5), 9);
        assert!(window.from > window.to);
        assert_eq!(window.last_page, 3);
    }

    #[test]
    fn test_window_empty_set() {
        let window = PageWindow::compute(0, PageSize::Limited(5), 1);
        assert_eq!(window.from, 1);
        assert_eq!(window.to, 0);
        assert_eq!(window.last_page, 1);
    }

    #[test]
    fn test_window_all_sentinel_spans_everything() {
        let window = PageWindow::compute(42, PageSize::All, 1);
        assert_eq!(window.from, 1);
        assert_eq!(window.to, 42);
        assert_eq!(window.last_page, 1);
    }

    #[test]
    fn test_links_mark_current_page_active() {
        let links = page_links(&query(None, PageSize::Limited(5), 2), 3);
        // previous + 3 pages + next
        assert_eq!(links.len(), 5);

        let active: Vec<_> = links.iter().filter(|l| l.active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].label, "2");
    }

    #[test]
    fn test_links_null_urls_at_the_edges() {
        let links = page_links(&query(None, PageSize::Limited(5), 1), 3);
        assert_eq!(links[0].label, "&laquo; Previous");
        assert!(links[0].url.is_none());
        assert!(links.last().unwrap().url.is_some());

        let links = page_links(&query(None, PageSize::Limited(5), 3), 3);
        assert!(links[0].url.is_some());
        assert!(links.last().unwrap().url.is_none());
    }

    #[test]
    fn test_links_round_trip_search_and_per_page() {
        let links = page_links(&query(Some("widget"), PageSize::Limited(10), 1), 2);
        let second = links[2].url.as_deref().unwrap();
        assert!(second.contains("search=widget"));
        assert!(second.contains("perPage=10"));
        assert!(second.contains("page=2"));
    }

    #[test]
    fn test_links_empty_set_is_single_page() {
        let links = page_links(&query(None, PageSize::Limited(5), 1), 1);
        assert_eq!(links.len(), 3);
        assert!(links[0].url.is_none());
        assert!(links[1].active);
        assert!(links[2].url.is_none());
    }
}
