/// Pagination helper
///
/// Splits an ordered result set into fixed-size windows. The `page` query
/// parameter is parsed leniently: missing, non-numeric, zero, negative, or
/// out-of-range values all fall back to the first page. That fallback is an
/// explicit policy, covered by tests, not an accident.
use serde::Serialize;

/// Page size for all listings.
pub const DEFAULT_PAGE_SIZE: i64 = 5;

/// A 1-based page number as requested by the client, before clamping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest(pub i64);

impl PageRequest {
    /// Parses a raw `page` query parameter. Anything that is not a positive
    /// integer falls back to page 1.
    pub fn from_param(raw: Option<&str>) -> Self {
        let number = raw
            .and_then(|value| value.trim().parse::<i64>().ok())
            .filter(|n| *n >= 1)
            .unwrap_or(1);
        PageRequest(number)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        PageRequest(1)
    }
}

/// Computes page counts and offsets for a known result-set size.
#[derive(Debug, Clone, Copy)]
pub struct Pager {
    total_items: i64,
    page_size: i64,
}

impl Pager {
    /// A non-positive page size is clamped to 1 rather than panicking.
    pub fn new(total_items: i64, page_size: i64) -> Self {
        Pager {
            total_items: total_items.max(0),
            page_size: page_size.max(1),
        }
    }

    pub fn page_size(&self) -> i64 {
        self.page_size
    }

    pub fn total_items(&self) -> i64 {
        self.total_items
    }

    /// An empty result set still yields one (empty) page.
    pub fn total_pages(&self) -> i64 {
        if self.total_items == 0 {
            1
        } else {
            (self.total_items + self.page_size - 1) / self.page_size
        }
    }

    /// Resolves a requested page to an actual page number: out-of-range
    /// requests fall back to the first page.
    pub fn resolve(&self, requested: PageRequest) -> i64 {
        if requested.0 >= 1 && requested.0 <= self.total_pages() {
            requested.0
        } else {
            1
        }
    }

    pub fn offset(&self, page_number: i64) -> i64 {
        (page_number - 1) * self.page_size
    }
}

/// A bounded slice of an ordered result set plus navigation metadata.
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub number: i64,
    pub page_size: i64,
    pub total_items: i64,
    pub total_pages: i64,
    pub has_next: bool,
    pub has_previous: bool,
}

impl<T> Page<T> {
    /// Builds a page from an already-windowed item slice (repository
    /// LIMIT/OFFSET path).
    pub fn new(items: Vec<T>, number: i64, page_size: i64, total_items: i64) -> Self {
        let pager = Pager::new(total_items, page_size);
        let total_pages = pager.total_pages();
        Page {
            items,
            number,
            page_size: pager.page_size(),
            total_items: pager.total_items(),
            total_pages,
            has_next: number < total_pages,
            has_previous: number > 1,
        }
    }

    /// Windows an in-memory sequence; resolves the requested page first.
    pub fn from_items(all: Vec<T>, page_size: i64, requested: PageRequest) -> Self {
        let pager = Pager::new(all.len() as i64, page_size);
        let number = pager.resolve(requested);
        let offset = pager.offset(number) as usize;
        let items: Vec<T> = all
            .into_iter()
            .skip(offset)
            .take(page_size as usize)
            .collect();
        Page::new(items, number, page_size, pager.total_items())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_twelve_items_make_three_pages_of_five() {
        let items: Vec<i32> = (1..=12).collect();
        let page = Page::from_items(items, 5, PageRequest::from_param(Some("1")));

        assert_eq!(page.total_pages, 3);
        assert_eq!(page.total_items, 12);
        assert_eq!(page.items, vec![1, 2, 3, 4, 5]);
        assert!(page.has_next);
        assert!(!page.has_previous);
    }

    #[test]
    fn test_last_page_holds_the_remainder() {
        let items: Vec<i32> = (1..=12).collect();
        let page = Page::from_items(items, 5, PageRequest::from_param(Some("3")));

        assert_eq!(page.number, 3);
        assert_eq!(page.items, vec![11, 12]);
        assert!(!page.has_next);
        assert!(page.has_previous);
    }

    #[test]
    fn test_non_numeric_page_falls_back_to_first() {
        let request = PageRequest::from_param(Some("abc"));
        assert_eq!(request, PageRequest(1));

        let items: Vec<i32> = (1..=12).collect();
        let page = Page::from_items(items, 5, request);
        assert_eq!(page.number, 1);
        assert_eq!(page.items, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_out_of_range_page_falls_back_to_first() {
        let items: Vec<i32> = (1..=12).collect();
        let page = Page::from_items(items, 5, PageRequest::from_param(Some("99")));

        assert_eq!(page.number, 1);
        assert_eq!(page.items, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_zero_and_negative_pages_fall_back_to_first() {
        assert_eq!(PageRequest::from_param(Some("0")), PageRequest(1));
        assert_eq!(PageRequest::from_param(Some("-3")), PageRequest(1));
        assert_eq!(PageRequest::from_param(None), PageRequest(1));
    }

    #[test]
    fn test_empty_result_set_is_a_single_empty_page() {
        let page: Page<i32> = Page::from_items(Vec::new(), 5, PageRequest::default());

        assert_eq!(page.number, 1);
        assert_eq!(page.total_pages, 1);
        assert!(page.items.is_empty());
        assert!(!page.has_next);
        assert!(!page.has_previous);
    }

    #[test]
    fn test_pager_clamps_non_positive_page_size_to_one() {
        let pager = Pager::new(3, 0);
        assert_eq!(pager.page_size(), 1);
        assert_eq!(pager.total_pages(), 3);

        let pager = Pager::new(3, -5);
        assert_eq!(pager.page_size(), 1);
        assert_eq!(pager.offset(2), 1);
    }

    #[test]
    fn test_pager_offsets() {
        let pager = Pager::new(12, 5);
        assert_eq!(pager.offset(1), 0);
        assert_eq!(pager.offset(2), 5);
        assert_eq!(pager.offset(3), 10);
    }

    #[test]
    fn test_exact_multiple_has_no_partial_page() {
        let items: Vec<i32> = (1..=10).collect();
        let page = Page::from_items(items, 5, PageRequest::from_param(Some("2")));

        assert_eq!(page.total_pages, 2);
        assert_eq!(page.items.len(), 5);
        assert!(!page.has_next);
    }
}
