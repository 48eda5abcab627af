use std::sync::Arc;

use tokio::sync::{Mutex, MutexGuard};

use crate::core::config::Settings;
use crate::db::Database;
use crate::services::grading::{RandomSampler, ScoreSampler};
use crate::services::rubrics::RubricRegistry;

/// Shared handle passed to every handler. Cloning is cheap.
#[derive(Clone)]
pub(crate) struct AppState {
    inner: Arc<InnerState>,
}

struct InnerState {
    settings: Settings,
    db: Database,
    rubrics: RubricRegistry,
    sampler: Mutex<Box<dyn ScoreSampler>>,
}

impl AppState {
    pub(crate) fn new(
        settings: Settings,
        db: Database,
        rubrics: RubricRegistry,
        sampler: Box<dyn ScoreSampler>,
    ) -> Self {
        Self { inner: Arc::new(InnerState { settings, db, rubrics, sampler: Mutex::new(sampler) }) }
    }

    /// Seeded store, canonical rubrics and a sampler built from `GRADING_SEED`.
    pub(crate) fn from_settings(settings: Settings) -> Self {
        let sampler: Box<dyn ScoreSampler> = match settings.grading().seed {
            Some(seed) => Box::new(RandomSampler::seeded(seed)),
            None => Box::new(RandomSampler::from_entropy()),
        };
        Self::new(settings, Database::seeded(), RubricRegistry::canonical(), sampler)
    }

    pub(crate) fn settings(&self) -> &Settings {
        &self.inner.settings
    }

    pub(crate) fn db(&self) -> &Database {
        &self.inner.db
    }

    pub(crate) fn rubrics(&self) -> &RubricRegistry {
        &self.inner.rubrics
    }

    pub(crate) async fn sampler(&self) -> MutexGuard<'_, Box<dyn ScoreSampler>> {
        self.inner.sampler.lock().await
    }
}
