//! Offset pagination

/// Page size used when none (or garbage) is requested
pub const DEFAULT_PAGE_SIZE: u32 = 25;
/// Largest page size accepted from clients
pub const MAX_PAGE_SIZE: u32 = 100;

/// A validated page window
///
/// Page numbers are 1-based. Out-of-range inputs are coerced rather than
/// rejected: page < 1 becomes 1 and page size < 1 becomes 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    page_size: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageRequest {
    /// Coerce client-supplied values; page size is capped at `MAX_PAGE_SIZE`
    pub fn new(page: Option<i64>, page_size: Option<i64>) -> Self {
        let page = page.unwrap_or(1).clamp(1, i64::from(u32::MAX)) as u32;
        let page_size = page_size
            .unwrap_or(i64::from(DEFAULT_PAGE_SIZE))
            .clamp(1, i64::from(MAX_PAGE_SIZE)) as u32;
        Self { page, page_size }
    }

    /// Window without the client cap, for internal callers
    pub fn with_size(page: u32, page_size: u32) -> Self {
        Self {
            page: page.max(1),
            page_size: page_size.max(1),
        }
    }

    #[inline]
    pub fn page(&self) -> u32 {
        self.page
    }

    #[inline]
    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// `(page - 1) * page_size`
    #[inline]
    pub fn offset(&self) -> i64 {
        (i64::from(self.page) - 1) * i64::from(self.page_size)
    }

    #[inline]
    pub fn limit(&self) -> i64 {
        i64::from(self.page_size)
    }
}

/// Pagination metadata derived from a count and the requested window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationMeta {
    pub current_page: u32,
    pub total_pages: u32,
    pub total_items: i64,
    pub page_size: u32,
    pub has_next: bool,
    pub has_prev: bool,
}

impl PaginationMeta {
    pub fn new(request: PageRequest, total_items: i64) -> Self {
        let total_items = total_items.max(0);
        let page_size = i64::from(request.page_size());
        let total_pages = ((total_items + page_size - 1) / page_size) as u32;
        let current_page = request.page();

        Self {
            current_page,
            total_pages,
            total_items,
            page_size: request.page_size(),
            has_next: current_page < total_pages,
            has_prev: current_page > 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let page = PageRequest::new(None, None);
        assert_eq!(page.page(), 1);
        assert_eq!(page.page_size(), DEFAULT_PAGE_SIZE);
        assert_eq!(page.offset(), 0);
        assert_eq!(PageRequest::default(), page);
    }

    #[test]
    fn test_offset() {
        assert_eq!(PageRequest::new(Some(3), Some(25)).offset(), 50);
        assert_eq!(PageRequest::new(Some(2), Some(10)).offset(), 10);
        assert_eq!(PageRequest::new(Some(1), Some(100)).limit(), 100);
    }

    #[test]
    fn test_coercion() {
        let page = PageRequest::new(Some(0), Some(-5));
        assert_eq!(page.page(), 1);
        assert_eq!(page.page_size(), 1);

        let page = PageRequest::new(Some(-3), Some(500));
        assert_eq!(page.page(), 1);
        assert_eq!(page.page_size(), MAX_PAGE_SIZE);

        let page = PageRequest::with_size(0, 0);
        assert_eq!(page.page(), 1);
        assert_eq!(page.page_size(), 1);

        assert_eq!(PageRequest::with_size(1, 10_000).page_size(), 10_000);
    }

    #[test]
    fn test_pagination_math() {
        let meta = PaginationMeta::new(PageRequest::new(Some(1), Some(25)), 53);
        assert_eq!(meta.total_pages, 3);
        assert!(meta.has_next);
        assert!(!meta.has_prev);

        let meta = PaginationMeta::new(PageRequest::new(Some(3), Some(25)), 53);
        assert_eq!(meta.total_pages, 3);
        assert!(!meta.has_next);
        assert!(meta.has_prev);

        let meta = PaginationMeta::new(PageRequest::new(Some(2), Some(25)), 53);
        assert!(meta.has_next);
        assert!(meta.has_prev);
    }

    #[test]
    fn test_exact_multiple_and_empty() {
        let meta = PaginationMeta::new(PageRequest::new(Some(2), Some(25)), 50);
        assert_eq!(meta.total_pages, 2);
        assert!(!meta.has_next);

        let meta = PaginationMeta::new(PageRequest::default(), 0);
        assert_eq!(meta.total_pages, 0);
        assert_eq!(meta.total_items, 0);
        assert!(!meta.has_next);
        assert!(!meta.has_prev);
    }

    #[test]
    fn test_page_past_the_end() {
        let meta = PaginationMeta::new(PageRequest::new(Some(9), Some(25)), 53);
        assert_eq!(meta.current_page, 9);
        assert!(!meta.has_next);
        assert!(meta.has_prev);
    }
}
