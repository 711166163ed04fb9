//! Shared query parameter types for API handlers.

use catalog_core::pagination::PageRequest;
use serde::Deserialize;

/// Page-number pagination parameters (`?page=`).
///
/// `page` is taken as raw text so a malformed value reaches
/// [`PageRequest::parse`] (and falls back to page 1) instead of being
/// rejected by the extractor.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<String>,
}

impl PageParams {
    pub fn page_request(&self) -> PageRequest {
        PageRequest::parse(self.page.as_deref())
    }
}
