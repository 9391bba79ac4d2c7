//! Table view derivation

use crate::domain::job::Job;
use crate::domain::table::{filter_jobs, sort_jobs, PageState, SortColumn, SortState};

/// The visible slice of the table plus the numbers the pager displays
#[derive(Debug, Clone)]
pub struct TableWindow {
    pub rows: Vec<Job>,
    pub page: usize,
    pub page_count: usize,
    /// Rows surviving the filter, across all pages
    pub total_matching: usize,
}

/// Session-scoped view state: sort directions, search query, and page.
///
/// On every derivation the store snapshot flows sort -> filter -> paginate,
/// and the current page is re-clamped against the filtered count so a
/// narrowing search can never leave the view stranded past the last page.
#[derive(Debug, Clone)]
pub struct TableView {
    sort: SortState,
    query: String,
    page: PageState,
}

impl TableView {
    pub fn new(page_size: usize) -> Self {
        Self {
            sort: SortState::new(),
            query: String::new(),
            page: PageState::new(page_size),
        }
    }

    /// Toggle a column's tri-state sort direction and make it the active key
    pub fn toggle_sort(&mut self, column: SortColumn) {
        self.sort.toggle(column);
    }

    pub fn sort(&self) -> &SortState {
        &self.sort
    }

    /// Replace the search query (resets nothing else; the page clamps on
    /// the next derivation)
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn page(&self) -> &PageState {
        &self.page
    }

    /// Advance one page against the current filtered count
    pub fn next_page(&mut self, jobs: &[Job]) {
        let total = self.matching_count(jobs);
        self.page.next(total);
    }

    /// Go back one page
    pub fn previous_page(&mut self) {
        self.page.previous();
    }

    /// Jump to a page, clamped against the current filtered count
    pub fn go_to_page(&mut self, page: usize, jobs: &[Job]) {
        let total = self.matching_count(jobs);
        self.page.go_to(page, total);
    }

    /// Derive the visible window from a store snapshot.
    ///
    /// Sorting runs over the full store-ordered list (stable, so equal keys
    /// keep insertion order), then the filter narrows it, then the page is
    /// clamped and the slice taken.
    pub fn derive(&mut self, jobs: &[Job]) -> TableWindow {
        let mut sorted = jobs.to_vec();
        if let Some((column, direction)) = self.sort.active() {
            sort_jobs(&mut sorted, column, direction);
        }

        let matching = filter_jobs(sorted, &self.query);

        self.page.clamp(matching.len());
        let rows = self.page.window(&matching).to_vec();

        TableWindow {
            rows,
            page: self.page.current(),
            page_count: self.page.page_count(matching.len()),
            total_matching: matching.len(),
        }
    }

    fn matching_count(&self, jobs: &[Job]) -> usize {
        if self.query.is_empty() {
            return jobs.len();
        }
        let needle = self.query.to_lowercase();
        jobs.iter()
            .filter(|job| job.name.to_lowercase().contains(&needle))
            .count()
    }
}

impl Default for TableView {
    fn default() -> Self {
        Self::new(PageState::default().page_size())
    }
}
