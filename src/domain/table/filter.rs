//! Name filtering

use crate::domain::job::Job;

/// Keep jobs whose name contains the query as a case-insensitive substring.
///
/// An empty query is the identity filter. Applied after sorting and before
/// pagination, so filtering never disturbs the sorted order of survivors.
pub fn filter_jobs(jobs: Vec<Job>, query: &str) -> Vec<Job> {
    if query.is_empty() {
        return jobs;
    }

    let needle = query.to_lowercase();
    jobs.into_iter()
        .filter(|job| job.name.to_lowercase().contains(&needle))
        .collect()
}
