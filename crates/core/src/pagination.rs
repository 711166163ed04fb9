//! Page-number pagination for list endpoints.
//!
//! The list endpoint takes a 1-based `?page=` parameter and returns an
//! envelope with the total count, the total page count and the neighbouring
//! page numbers. Everything here is pure arithmetic; the repository turns a
//! [`PageWindow`] into `LIMIT`/`OFFSET`.
//!
//! Bad input never produces an error: a malformed or non-positive page
//! becomes page 1, and a page past the end becomes an empty window.

use serde::Serialize;

/// Fixed page size for the film list.
pub const DEFAULT_PAGE_SIZE: i64 = 50;

/// Query value selecting the final page.
pub const LAST_PAGE: &str = "last";

/// A page selection as requested by the client, before it is resolved
/// against the record count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageRequest {
    Number(i64),
    Last,
}

impl PageRequest {
    /// Interpret a raw `page` query value.
    ///
    /// ```
    /// use catalog_core::pagination::PageRequest;
    /// assert_eq!(PageRequest::parse(Some("3")), PageRequest::Number(3));
    /// assert_eq!(PageRequest::parse(Some("last")), PageRequest::Last);
    /// assert_eq!(PageRequest::parse(Some("abc")), PageRequest::Number(1));
    /// assert_eq!(PageRequest::parse(None), PageRequest::Number(1));
    /// ```
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw.map(str::trim) else {
            return PageRequest::Number(1);
        };
        if raw == LAST_PAGE {
            return PageRequest::Last;
        }
        match raw.parse::<i64>() {
            Ok(n) if n >= 1 => PageRequest::Number(n),
            _ => PageRequest::Number(1),
        }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        PageRequest::Number(1)
    }
}

/// Splits `count` records into pages of `page_size`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    count: i64,
    page_size: i64,
}

impl Paginator {
    pub fn new(count: i64, page_size: i64) -> Self {
        Self {
            count: count.max(0),
            page_size: page_size.max(1),
        }
    }

    pub fn count(&self) -> i64 {
        self.count
    }

    /// Number of pages. An empty record set still has one (empty) page.
    pub fn total_pages(&self) -> i64 {
        if self.count == 0 {
            1
        } else {
            (self.count + self.page_size - 1) / self.page_size
        }
    }

    /// Resolve a request into the concrete window to fetch.
    pub fn window(&self, request: PageRequest) -> PageWindow {
        let total_pages = self.total_pages();
        let number = match request {
            PageRequest::Number(n) => n.max(1),
            PageRequest::Last => total_pages,
        };

        if number > total_pages {
            // Past the end: nothing to fetch, point back at the last real page.
            return PageWindow {
                number,
                offset: self.count,
                limit: 0,
                prev: Some(total_pages),
                next: None,
            };
        }

        let offset = (number - 1) * self.page_size;
        PageWindow {
            number,
            offset,
            limit: self.page_size.min(self.count - offset),
            prev: (number > 1).then(|| number - 1),
            next: (number < total_pages).then(|| number + 1),
        }
    }
}

/// The slice of records a single page covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    /// 1-based page number that was resolved.
    pub number: i64,
    pub offset: i64,
    /// Rows on this page. Zero for pages past the end and for an empty set.
    pub limit: i64,
    pub prev: Option<i64>,
    pub next: Option<i64>,
}

impl PageWindow {
    pub fn is_empty(&self) -> bool {
        self.limit == 0
    }
}

/// List envelope returned to clients.
///
/// Field order is the serialized order: `count, total_pages, prev, next,
/// results`. `prev`/`next` serialize as `null` when there is no such page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub count: i64,
    pub total_pages: i64,
    pub prev: Option<i64>,
    pub next: Option<i64>,
    pub results: Vec<T>,
}

impl Paginator {
    /// Wrap the rows fetched for `window` in the list envelope.
    pub fn page<T>(&self, window: PageWindow, results: Vec<T>) -> Page<T> {
        Page {
            count: self.count,
            total_pages: self.total_pages(),
            prev: window.prev,
            next: window.next,
            results,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
