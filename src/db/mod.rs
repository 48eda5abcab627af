pub(crate) mod models;
pub(crate) mod points;
pub(crate) mod seed;
pub(crate) mod types;

use tokio::sync::{Mutex, MutexGuard};

use crate::db::models::Submission;

/// In-memory submission table. Every access holds the lock for its whole
/// duration, so reads and transitions never interleave.
pub(crate) struct Database {
    submissions: Mutex<Vec<Submission>>,
}

impl Database {
    pub(crate) fn seeded() -> Self {
        let submissions = seed::submissions();
        tracing::info!(count = submissions.len(), "Seeded submission store");
        Self::from_submissions(submissions)
    }

    pub(crate) fn from_submissions(submissions: Vec<Submission>) -> Self {
        Self { submissions: Mutex::new(submissions) }
    }

    pub(crate) async fn submissions(&self) -> MutexGuard<'_, Vec<Submission>> {
        self.submissions.lock().await
    }
}
