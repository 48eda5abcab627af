use std::sync::{Arc, OnceLock};

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request},
    Router,
};
use tokio::sync::{Mutex, OwnedMutexGuard};

use crate::api;
use crate::core::{config::Settings, state::AppState};
use crate::db::Database;
use crate::services::grading::ScoreSampler;
use crate::services::rubrics::RubricRegistry;

const GRADING_ENV_VARS: &[&str] = &[
    "GRADING_HOST",
    "GRADING_PORT",
    "GRADING_ENV",
    "ENVIRONMENT",
    "BACKEND_CORS_ORIGINS",
    "GRADING_SEED",
    "GRADER_ID",
    "SCORE_FRACTION_MIN",
    "SCORE_FRACTION_MAX",
    "LOG_LEVEL",
    "LOG_JSON",
    "PROMETHEUS_ENABLED",
    "PROJECT_NAME",
    "VERSION",
];

pub(crate) struct TestContext {
    pub(crate) state: AppState,
    pub(crate) app: Router,
    _guard: OwnedMutexGuard<()>,
}

/// Always returns the same fraction and feedback index.
pub(crate) struct FixedSampler {
    pub(crate) fraction: f64,
    pub(crate) pick: usize,
}

impl ScoreSampler for FixedSampler {
    fn fraction(&mut self, _low: f64, _high: f64) -> f64 {
        self.fraction
    }

    fn pick(&mut self, len: usize) -> usize {
        self.pick.min(len.saturating_sub(1))
    }
}

pub(crate) async fn env_lock() -> OwnedMutexGuard<()> {
    static LOCK: OnceLock<Arc<Mutex<()>>> = OnceLock::new();
    let lock = LOCK.get_or_init(|| Arc::new(Mutex::new(()))).clone();
    lock.lock_owned().await
}

pub(crate) fn clear_grading_env() {
    for key in GRADING_ENV_VARS {
        std::env::remove_var(key);
    }
}

pub(crate) fn set_test_env() {
    clear_grading_env();
    std::env::set_var("GRADING_ENV", "test");
}

pub(crate) fn build_state(settings: Settings, sampler: Box<dyn ScoreSampler>) -> AppState {
    AppState::new(settings, Database::seeded(), RubricRegistry::canonical(), sampler)
}

/// Seeded store, default settings and a sampler pinned to `fraction`.
pub(crate) async fn setup_test_context(fraction: f64) -> TestContext {
    let guard = env_lock().await;
    set_test_env();

    let settings = Settings::load().expect("settings");
    let state = build_state(settings, Box::new(FixedSampler { fraction, pick: 0 }));
    let app = api::router::router(state.clone());

    TestContext { state, app, _guard: guard }
}

pub(crate) fn json_request(
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
) -> Request<Body> {
    let builder = Request::builder().method(method).uri(uri);

    if let Some(body) = body {
        let bytes = serde_json::to_vec(&body).expect("serialize body");
        builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(bytes))
            .expect("request body")
    } else {
        builder.body(Body::empty()).expect("request body")
    }
}

pub(crate) async fn read_json(response: axum::response::Response<Body>) -> serde_json::Value {
    let body = to_bytes(response.into_body(), usize::MAX).await.expect("response body");
    serde_json::from_slice(&body).unwrap_or_else(|err| {
        let body_text = String::from_utf8_lossy(&body);
        panic!("json parse: {err}; body: {body_text}");
    })
}
