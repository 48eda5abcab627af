use std::sync::OnceLock;

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

use crate::core::config::Settings;

static PROM_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

pub(crate) fn init(settings: &Settings) -> anyhow::Result<()> {
    if !settings.telemetry().prometheus_enabled || PROM_HANDLE.get().is_some() {
        return Ok(());
    }

    let handle = PrometheusBuilder::new().install_recorder()?;
    let _ = PROM_HANDLE.set(handle);
    Ok(())
}

pub(crate) fn render() -> Option<String> {
    PROM_HANDLE.get().map(|handle| handle.render())
}

/// Counts a lifecycle transition, `kind` is `graded` or `released`.
pub(crate) fn record_transition(kind: &'static str) {
    metrics::counter!("submission_transitions_total", "kind" => kind).increment(1);
}

pub(crate) fn record_simulation(assignment_type: &str, percentage: f64) {
    metrics::histogram!(
        "simulated_grade_percentage",
        "assignment_type" => assignment_type.to_string()
    )
    .record(percentage);
}
