//! Job store - the single owner of the job collection

use std::sync::{Arc, Mutex};

use crate::domain::job::{Job, JobId};

/// Shared handle to the job store.
///
/// All mutation happens on short critical sections; the lock is never held
/// across an await point.
pub type SharedJobStore = Arc<Mutex<JobStore>>;

/// Fields merged into a job when its transcription request resolves.
/// Absent fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct JobUpdate {
    pub duration_label: Option<String>,
    pub transcript: Option<String>,
    pub failed: Option<String>,
}

impl JobUpdate {
    /// Update for a successful transcription result
    pub fn resolved(duration_label: String, transcript: String) -> Self {
        Self {
            duration_label: Some(duration_label),
            transcript: Some(transcript),
            failed: None,
        }
    }

    /// Update for a failed transcription request
    pub fn failed(message: String) -> Self {
        Self {
            duration_label: None,
            transcript: None,
            failed: Some(message),
        }
    }
}

/// Owns the ordered collection of transcription jobs.
///
/// Insertion order is the canonical default order; sorting and filtering
/// derive views elsewhere and never reorder the store. Jobs are only
/// created and updated here, keyed strictly by id.
#[derive(Debug, Default)]
pub struct JobStore {
    jobs: Vec<Job>,
    next_id: u64,
}

impl JobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a shared handle to a fresh store
    pub fn shared() -> SharedJobStore {
        Arc::new(Mutex::new(Self::new()))
    }

    /// Append a pending job and return its freshly allocated id.
    ///
    /// Synchronous so a placeholder row can render before any network
    /// activity completes.
    pub fn create(&mut self, name: impl Into<String>, size_mb: f64) -> JobId {
        self.next_id += 1;
        let id = JobId::new(self.next_id);
        self.jobs.push(Job::pending(id, name, size_mb));
        id
    }

    /// Merge the given fields into the job matching `id`.
    ///
    /// Unknown ids are a silent no-op: an asynchronous completion racing a
    /// store it no longer belongs to must never crash the caller. A
    /// successful resolution clears any earlier failure so retried jobs
    /// come back as ready.
    pub fn update(&mut self, id: JobId, update: JobUpdate) {
        let Some(job) = self.jobs.iter_mut().find(|job| job.id == id) else {
            return;
        };

        if let Some(label) = update.duration_label {
            job.duration_label = Some(label);
        }
        if let Some(transcript) = update.transcript {
            job.transcript = Some(transcript);
            job.error = None;
        }
        if let Some(message) = update.failed {
            job.error = Some(message);
        }
    }

    /// Read-only snapshot of the jobs in insertion order
    pub fn list(&self) -> &[Job] {
        &self.jobs
    }

    /// Cloned snapshot for view derivation
    pub fn snapshot(&self) -> Vec<Job> {
        self.jobs.clone()
    }

    /// Look up a single job by id
    pub fn get(&self, id: JobId) -> Option<&Job> {
        self.jobs.iter().find(|job| job.id == id)
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::job::JobStatus;

    #[test]
    fn create_appends_pending_job() {
        let mut store = JobStore::new();
        let id = store.create("meeting.wav", 1.25);

        let job = store.get(id).unwrap();
        assert_eq!(job.name, "meeting.wav");
        assert_eq!(job.size_mb, 1.25);
        assert_eq!(job.status(), JobStatus::Pending);
    }

    #[test]
    fn ids_are_unique_and_never_reused() {
        let mut store = JobStore::new();
        let a = store.create("a.wav", 1.0);
        let b = store.create("a.wav", 1.0);
        assert_ne!(a, b);
    }

    #[test]
    fn update_resolves_job_by_id() {
        let mut store = JobStore::new();
        let id = store.create("a.wav", 1.0);

        store.update(
            id,
            JobUpdate::resolved("00:01:01".to_string(), "hello".to_string()),
        );

        let job = store.get(id).unwrap();
        assert_eq!(job.status(), JobStatus::Ready);
        assert_eq!(job.duration_label.as_deref(), Some("00:01:01"));
        assert_eq!(job.transcript.as_deref(), Some("hello"));
    }

    #[test]
    fn update_unknown_id_is_a_noop() {
        let mut store = JobStore::new();
        store.create("a.wav", 1.0);

        store.update(
            JobId::new(999),
            JobUpdate::resolved("00:00:01".to_string(), "ghost".to_string()),
        );

        assert_eq!(store.len(), 1);
        assert_eq!(store.list()[0].status(), JobStatus::Pending);
    }

    #[test]
    fn update_with_failure_marks_job_failed() {
        let mut store = JobStore::new();
        let id = store.create("a.wav", 1.0);

        store.update(id, JobUpdate::failed("HTTP 500".to_string()));

        let job = store.get(id).unwrap();
        assert_eq!(job.status(), JobStatus::Failed);
        assert_eq!(job.error.as_deref(), Some("HTTP 500"));
    }

    #[test]
    fn successful_update_clears_earlier_failure() {
        let mut store = JobStore::new();
        let id = store.create("a.wav", 1.0);

        store.update(id, JobUpdate::failed("timeout".to_string()));
        store.update(
            id,
            JobUpdate::resolved("00:00:05".to_string(), "retried".to_string()),
        );

        let job = store.get(id).unwrap();
        assert_eq!(job.status(), JobStatus::Ready);
        assert!(job.error.is_none());
    }

    #[test]
    fn list_preserves_insertion_order() {
        let mut store = JobStore::new();
        store.create("c.wav", 1.0);
        store.create("a.wav", 1.0);
        store.create("b.wav", 1.0);

        let names: Vec<&str> = store.list().iter().map(|j| j.name.as_str()).collect();
        assert_eq!(names, vec!["c.wav", "a.wav", "b.wav"]);
    }

    #[test]
    fn duplicate_names_stay_distinct_rows() {
        let mut store = JobStore::new();
        let a = store.create("take.wav", 1.0);
        let b = store.create("take.wav", 2.0);

        store.update(
            b,
            JobUpdate::resolved("00:00:02".to_string(), "second".to_string()),
        );

        assert_eq!(store.get(a).unwrap().status(), JobStatus::Pending);
        assert_eq!(store.get(b).unwrap().transcript.as_deref(), Some("second"));
    }
}
