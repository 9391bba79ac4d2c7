//! Pagination window

/// Default rows per page
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// 1-based pagination state with a fixed page size.
///
/// The current page is clamped against the filtered row count on every
/// derivation, not only on explicit navigation - a narrowing search must
/// pull the view back into range.
#[derive(Debug, Clone)]
pub struct PageState {
    current: usize,
    page_size: usize,
}

impl PageState {
    /// Create page state starting at page 1. A zero page size is treated
    /// as the default.
    pub fn new(page_size: usize) -> Self {
        Self {
            current: 1,
            page_size: if page_size == 0 {
                DEFAULT_PAGE_SIZE
            } else {
                page_size
            },
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Number of pages for `total` rows; minimum 1 even when empty
    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.page_size).max(1)
    }

    /// Clamp the current page into `[1, page_count]`
    pub fn clamp(&mut self, total: usize) {
        self.current = self.current.clamp(1, self.page_count(total));
    }

    /// Jump to a specific page, clamped into range
    pub fn go_to(&mut self, page: usize, total: usize) {
        self.current = page.clamp(1, self.page_count(total));
    }

    /// Advance one page; no-op at the last page
    pub fn next(&mut self, total: usize) {
        if self.current < self.page_count(total) {
            self.current += 1;
        }
    }

    /// Go back one page; no-op at page 1
    pub fn previous(&mut self) {
        if self.current > 1 {
            self.current -= 1;
        }
    }

    /// The half-open slice of an already sorted-and-filtered sequence
    /// visible on the current page.
    pub fn window<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = (self.current - 1) * self.page_size;
        let end = (start + self.page_size).min(items.len());
        if start >= items.len() {
            &[]
        } else {
            &items[start..end]
        }
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_count_rounds_up() {
        let page = PageState::new(2);
        assert_eq!(page.page_count(3), 2);
        assert_eq!(page.page_count(4), 2);
        assert_eq!(page.page_count(5), 3);
    }

    #[test]
    fn page_count_is_at_least_one() {
        let page = PageState::new(2);
        assert_eq!(page.page_count(0), 1);
    }

    #[test]
    fn window_slices_pages() {
        let items = vec!["a", "b", "c"];
        let mut page = PageState::new(2);

        assert_eq!(page.window(&items), &["a", "b"]);
        page.next(items.len());
        assert_eq!(page.window(&items), &["c"]);
    }

    #[test]
    fn go_to_clamps_out_of_range() {
        let mut page = PageState::new(2);
        page.go_to(3, 3);
        assert_eq!(page.current(), 2);

        page.go_to(0, 3);
        assert_eq!(page.current(), 1);
    }

    #[test]
    fn next_is_noop_at_last_page() {
        let mut page = PageState::new(2);
        page.next(3);
        page.next(3);
        page.next(3);
        assert_eq!(page.current(), 2);
    }

    #[test]
    fn previous_is_noop_at_first_page() {
        let mut page = PageState::new(2);
        page.previous();
        assert_eq!(page.current(), 1);
    }

    #[test]
    fn clamp_pulls_page_back_when_rows_shrink() {
        let mut page = PageState::new(2);
        page.go_to(3, 6);
        assert_eq!(page.current(), 3);

        // A filter narrowed the set to one row
        page.clamp(1);
        assert_eq!(page.current(), 1);
    }

    #[test]
    fn zero_page_size_falls_back_to_default() {
        let page = PageState::new(0);
        assert_eq!(page.page_size(), DEFAULT_PAGE_SIZE);
    }
}
