//! Table view domain module
//!
//! Pure view-derivation logic: tri-state column sorting, name filtering,
//! and pagination. These operate on snapshots of the job list and never
//! mutate the underlying store order.

mod filter;
mod page;
mod sort;

pub use filter::filter_jobs;
pub use page::{PageState, DEFAULT_PAGE_SIZE};
pub use sort::{sort_jobs, SortColumn, SortDirection, SortState};
