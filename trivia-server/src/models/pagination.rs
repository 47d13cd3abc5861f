//! Pagination types
//!
//! Pages are fixed at ten items and 1-indexed. A page past the end (or below
//! 1) is empty rather than an error; handlers decide what empty means.

use serde::Deserialize;

/// Items per page
pub const QUESTIONS_PER_PAGE: usize = 10;

/// Pagination parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Page number (1-indexed, no upper bound)
    pub page: i64,
}

impl Pagination {
    pub fn new(page: i64) -> Self {
        Self { page }
    }

    /// The first page, used for listings returned after a write.
    pub fn first() -> Self {
        Self { page: 1 }
    }

    /// Offset of the first item, or `None` for pages below 1.
    pub fn offset(&self) -> Option<usize> {
        if self.page < 1 {
            return None;
        }
        usize::try_from(self.page - 1)
            .ok()
            .and_then(|p| p.checked_mul(QUESTIONS_PER_PAGE))
    }

    /// Get LIMIT value.
    pub fn limit(&self) -> usize {
        QUESTIONS_PER_PAGE
    }

    /// Slice an ordered list down to this page.
    ///
    /// `total` is the length of `items` before slicing.
    pub fn paginate<T>(&self, items: Vec<T>) -> Paginated<T> {
        let total = items.len();
        let items = match self.offset() {
            Some(offset) => items.into_iter().skip(offset).take(self.limit()).collect(),
            None => Vec::new(),
        };

        Paginated { items, total }
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::first()
    }
}

/// One page of items plus the pre-pagination count
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paginated<T> {
    /// Items for current page
    pub items: Vec<T>,
    /// Total count across all pages
    pub total: usize,
}

impl<T> Paginated<T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Query parameters for pagination
///
/// `page` is kept as a string so that a malformed value falls back to the
/// first page instead of rejecting the request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaginationParams {
    pub page: Option<String>,
}

impl From<PaginationParams> for Pagination {
    fn from(params: PaginationParams) -> Self {
        params
            .page
            .and_then(|p| p.trim().parse::<i64>().ok())
            .map(Self::new)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(page: &str) -> PaginationParams {
        PaginationParams {
            page: Some(page.to_owned()),
        }
    }

    #[test]
    fn offset_calculation() {
        assert_eq!(Pagination::new(1).offset(), Some(0));
        assert_eq!(Pagination::new(2).offset(), Some(10));
        assert_eq!(Pagination::new(7).offset(), Some(60));
        assert_eq!(Pagination::new(0).offset(), None);
        assert_eq!(Pagination::new(-3).offset(), None);
    }

    #[test]
    fn paginate_slices_pages() {
        let items: Vec<i32> = (1..=25).collect();

        let first = Pagination::new(1).paginate(items.clone());
        assert_eq!(first.items, (1..=10).collect::<Vec<_>>());
        assert_eq!(first.total, 25);

        let last = Pagination::new(3).paginate(items);
        assert_eq!(last.items, vec![21, 22, 23, 24, 25]);
        assert_eq!(last.total, 25);
    }

    #[test]
    fn page_past_the_end_is_empty() {
        let items: Vec<i32> = (1..=20).collect();
        // ceil(20 / 10) + 1
        let page = Pagination::new(3).paginate(items);
        assert!(page.is_empty());
        assert_eq!(page.total, 20);
    }

    #[test]
    fn huge_page_is_empty() {
        let page = Pagination::new(i64::MAX).paginate(vec![1, 2, 3]);
        assert!(page.is_empty());
    }

    #[test]
    fn non_positive_page_is_empty() {
        assert!(Pagination::new(0).paginate(vec![1, 2, 3]).is_empty());
        assert!(Pagination::new(-1).paginate(vec![1, 2, 3]).is_empty());
    }

    #[test]
    fn params_default_to_first_page() {
        assert_eq!(Pagination::from(PaginationParams::default()), Pagination::first());
        assert_eq!(Pagination::from(params("abc")), Pagination::first());
        assert_eq!(Pagination::from(params("")), Pagination::first());
    }

    #[test]
    fn params_parse_integers() {
        assert_eq!(Pagination::from(params("4")), Pagination::new(4));
        assert_eq!(Pagination::from(params("200")), Pagination::new(200));
        assert_eq!(Pagination::from(params("-2")), Pagination::new(-2));
    }
}
