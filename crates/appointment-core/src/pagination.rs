//! Pagination State
//!
//! Page numbers are 1-based. With nothing to show there are zero pages and the
//! current page stays at 1.

use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    current_page: usize,
    total_pages: usize,
    items_per_page: usize,
}

impl Pagination {
    pub fn new(items_per_page: usize) -> Self {
        Self {
            current_page: 1,
            total_pages: 0,
            items_per_page: items_per_page.max(1),
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// Recompute the page count for `len` rows and clamp the current page
    pub fn update(&mut self, len: usize) {
        self.total_pages = len.div_ceil(self.items_per_page);
        if self.current_page > self.total_pages {
            self.current_page = self.total_pages.max(1);
        }
    }

    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    /// Jump to `page` if it exists
    pub fn go_to(&mut self, page: usize) {
        if page >= 1 && page <= self.total_pages {
            self.current_page = page;
        }
    }

    pub fn next(&mut self) {
        if self.has_next() {
            self.current_page += 1;
        }
    }

    pub fn prev(&mut self) {
        if self.has_prev() {
            self.current_page -= 1;
        }
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    /// Index of the first row on the current page
    pub fn offset(&self) -> usize {
        (self.current_page - 1) * self.items_per_page
    }

    /// Rows of a `len`-long list visible on the current page
    pub fn range(&self, len: usize) -> Range<usize> {
        let start = self.offset().min(len);
        let end = (start + self.items_per_page).min(len);
        start..end
    }

    pub fn page_numbers(&self) -> Vec<usize> {
        (1..=self.total_pages).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_empty() {
        let mut pages = Pagination::new(9);
        pages.update(0);
        assert_eq!(pages.total_pages(), 0);
        assert_eq!(pages.current_page(), 1);
        assert_eq!(pages.range(0), 0..0);
        assert!(pages.page_numbers().is_empty());
    }

    #[test]
    fn test_navigation() {
        let mut pages = Pagination::new(9);
        pages.update(20);
        assert_eq!(pages.total_pages(), 3);

        pages.prev();
        assert_eq!(pages.current_page(), 1);
        pages.next();
        pages.next();
        assert_eq!(pages.current_page(), 3);
        pages.next();
        assert_eq!(pages.current_page(), 3);
        assert_eq!(pages.range(20), 18..20);
    }

    #[test]
    fn test_clamps_when_rows_disappear() {
        let mut pages = Pagination::new(9);
        pages.update(27);
        pages.go_to(3);
        pages.update(10);
        assert_eq!(pages.current_page(), 2);
        pages.update(0);
        assert_eq!(pages.current_page(), 1);
    }

    proptest! {
        #[test]
        fn total_pages_is_ceiling(len in 0usize..500) {
            let mut pages = Pagination::new(9);
            pages.update(len);
            prop_assert_eq!(pages.total_pages(), (len + 8) / 9);
        }

        #[test]
        fn go_to_out_of_range_is_ignored(len in 0usize..100, page in 0usize..20) {
            let mut pages = Pagination::new(9);
            pages.update(len);
            let before = pages.current_page();
            pages.go_to(page);
            if page >= 1 && page <= pages.total_pages() {
                prop_assert_eq!(pages.current_page(), page);
            } else {
                prop_assert_eq!(pages.current_page(), before);
            }
        }
    }
}
