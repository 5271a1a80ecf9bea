use serde::{Deserialize, Serialize};

/// Pagination part of every list request. Pages are 1-based on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRequest {
    pub page_number: usize,
    pub page_size: usize,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page_number: 1,
            page_size: 10,
        }
    }
}

impl PageRequest {
    pub fn new(page_number: usize, page_size: usize) -> Self {
        Self {
            page_number: page_number.max(1),
            page_size: page_size.max(1),
        }
    }

    /// Same page size, back on the first page. Used after filter changes.
    pub fn first(self) -> Self {
        Self {
            page_number: 1,
            page_size: self.page_size,
        }
    }
}

/// Pagination metadata returned alongside every list response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub total_count: usize,
    pub total_pages: usize,
    pub current_page: usize,
    pub page_size: usize,
    pub has_next: bool,
    pub has_previous: bool,
}

impl PageMeta {
    /// Derive the full metadata block from a total count and the requested page.
    ///
    /// `current_page` is clamped into `1..=total_pages` so an out-of-range
    /// request after a shrinking result set still lands on a real page.
    pub fn compute(total_count: usize, current_page: usize, page_size: usize) -> Self {
        let page_size = page_size.max(1);
        let total_pages = total_count.div_ceil(page_size);
        let current_page = if total_pages == 0 {
            1
        } else {
            current_page.clamp(1, total_pages)
        };
        Self {
            total_count,
            total_pages,
            current_page,
            page_size,
            has_next: current_page < total_pages,
            has_previous: total_pages > 0 && current_page > 1,
        }
    }

    /// Index range `[start, end)` of the current page within the full result set.
    pub fn page_bounds(&self) -> (usize, usize) {
        if self.total_count == 0 {
            return (0, 0);
        }
        let start = (self.current_page - 1) * self.page_size;
        let end = (start + self.page_size).min(self.total_count);
        (start, end)
    }

    /// Number of items on the current page.
    pub fn page_len(&self) -> usize {
        let (start, end) = self.page_bounds();
        end - start
    }
}

/// List-read response envelope: one page of records plus pagination metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paged<T> {
    pub items: Vec<T>,
    #[serde(flatten)]
    pub meta: PageMeta,
}

impl<T> Paged<T> {
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            meta: PageMeta::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_full_pages() {
        let meta = PageMeta::compute(47, 1, 10);
        assert_eq!(meta.total_pages, 5);
        assert_eq!(meta.total_count, 47);
        assert!(meta.has_next);
        assert!(!meta.has_previous);
    }

    #[test]
    fn test_last_page_is_partial() {
        let meta = PageMeta::compute(47, 5, 10);
        assert_eq!(meta.page_bounds(), (40, 47));
        assert_eq!(meta.page_len(), 7);
        assert!(!meta.has_next);
        assert!(meta.has_previous);
    }

    #[test]
    fn test_exact_multiple() {
        let meta = PageMeta::compute(40, 4, 10);
        assert_eq!(meta.total_pages, 4);
        assert_eq!(meta.page_len(), 10);
        assert!(!meta.has_next);
    }

    #[test]
    fn test_empty_result_set() {
        let meta = PageMeta::compute(0, 3, 10);
        assert_eq!(meta.total_pages, 0);
        assert_eq!(meta.current_page, 1);
        assert_eq!(meta.page_bounds(), (0, 0));
        assert!(!meta.has_next);
        assert!(!meta.has_previous);
    }

    #[test]
    fn test_out_of_range_page_is_clamped() {
        let meta = PageMeta::compute(12, 9, 10);
        assert_eq!(meta.current_page, 2);
        assert_eq!(meta.page_len(), 2);
    }

    #[test]
    fn test_wire_naming() {
        let meta = PageMeta::compute(2, 1, 10);
        let json = serde_json::to_value(&meta).unwrap();
        assert_eq!(json["totalCount"], 2);
        assert_eq!(json["hasPrevious"], false);
    }

    #[test]
    fn test_default_page_request() {
        let req = PageRequest::default();
        assert_eq!(req.page_number, 1);
        assert_eq!(req.page_size, 10);
    }
}
