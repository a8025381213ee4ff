//! Pagination types for list operations.

use serde::{Deserialize, Serialize};

/// A request for a page of results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// The page number (0-indexed).
    pub page: usize,
    /// The number of items per page.
    pub size: usize,
}

impl PageRequest {
    /// Creates a new page request, clamping the size to `max_size`.
    #[must_use]
    pub fn bounded(page: usize, size: usize, max_size: usize) -> Self {
        Self {
            page,
            size: size.min(max_size),
        }
    }

    /// Returns the offset for database queries, or `None` when the page
    /// starts beyond any addressable row.
    #[must_use]
    pub const fn offset(&self) -> Option<usize> {
        self.page.checked_mul(self.size)
    }

    /// Returns the limit for database queries.
    #[must_use]
    pub const fn limit(&self) -> usize {
        self.size
    }
}

/// Information about a page of results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    /// The current page number (0-indexed).
    pub page: usize,
    /// The number of items per page.
    pub size: usize,
    /// The total number of items across all pages.
    pub total_elements: u64,
    /// The total number of pages.
    pub total_pages: u64,
    /// Whether this is the first page.
    pub first: bool,
    /// Whether this is the last page.
    pub last: bool,
    /// The number of items on this page.
    pub number_of_elements: usize,
}

impl PageInfo {
    /// Creates a new page info.
    #[must_use]
    pub fn new(page: usize, size: usize, total_elements: u64, number_of_elements: usize) -> Self {
        let total_pages = if size > 0 {
            total_elements.div_ceil(size as u64)
        } else {
            0
        };

        Self {
            page,
            size,
            total_elements,
            total_pages,
            first: page == 0,
            last: page as u64 >= total_pages.saturating_sub(1),
            number_of_elements,
        }
    }
}

/// A page of results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Page<T> {
    /// The items on this page.
    pub content: Vec<T>,
    /// Information about this page.
    #[serde(flatten)]
    pub info: PageInfo,
}

impl<T> Page<T> {
    /// Creates a new page.
    #[must_use]
    pub fn new(content: Vec<T>, page: usize, size: usize, total_elements: u64) -> Self {
        let number_of_elements = content.len();
        Self {
            content,
            info: PageInfo::new(page, size, total_elements, number_of_elements),
        }
    }

    /// Returns true if the page holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounded_clamps_size() {
        let req = PageRequest::bounded(1, 50, 25);
        assert_eq!(req.size, 25);
        assert_eq!(req.limit(), 25);
        assert_eq!(req.offset(), Some(25));
    }

    #[test]
    fn test_offset_overflow_is_none() {
        let req = PageRequest::bounded(i64::MAX as usize, 10, 100);
        assert_eq!(req.offset(), None);

        let req = PageRequest::bounded(usize::MAX, 1, 100);
        assert_eq!(req.offset(), Some(usize::MAX));
    }

    #[test]
    fn test_page_info() {
        let page: Page<i32> = Page::new(vec![1, 2, 3], 0, 10, 25);
        assert!(page.info.first);
        assert!(!page.info.last);
        assert_eq!(page.info.total_pages, 3);
        assert_eq!(page.info.number_of_elements, 3);
    }

    #[test]
    fn test_page_info_last_page() {
        let page: Page<i32> = Page::new(vec![1, 2], 2, 10, 22);
        assert!(!page.info.first);
        assert!(page.info.last);
    }

    #[test]
    fn test_page_past_the_end_is_empty() {
        let page: Page<i32> = Page::new(vec![], 5, 10, 22);
        assert!(page.is_empty());
        assert!(page.info.last);
        assert_eq!(page.info.total_elements, 22);
        assert_eq!(page.info.total_pages, 3);
    }

    #[test]
    fn test_zero_total_has_no_pages() {
        let page: Page<i32> = Page::new(vec![], 0, 10, 0);
        assert_eq!(page.info.total_pages, 0);
        assert!(page.info.first);
        assert!(page.info.last);
    }

    #[test]
    fn test_page_json_shape() {
        let page = Page::new(vec!["a"], 0, 5, 11);
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["content"][0], "a");
        assert_eq!(json["page"], 0);
        assert_eq!(json["size"], 5);
        assert_eq!(json["totalElements"], 11);
        assert_eq!(json["totalPages"], 3);
        assert_eq!(json["numberOfElements"], 1);
    }
}
