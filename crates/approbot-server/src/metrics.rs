use actix_web_prom::{PrometheusMetrics, PrometheusMetricsBuilder};
use approbot_models::{ApprovalOutcome, ApprovalSummary};
use lazy_static::lazy_static;
use prometheus::IntCounter;

use crate::{Result, ServerError};

lazy_static! {
    pub static ref GITHUB_API_CALLS: IntCounter =
        IntCounter::new("github_api_calls", "GitHub API calls").unwrap();
    pub static ref SLACK_API_CALLS: IntCounter =
        IntCounter::new("slack_api_calls", "Slack API calls").unwrap();
    pub static ref REDIS_CALLS: IntCounter = IntCounter::new("redis_calls", "Redis calls").unwrap();
    pub static ref APPROVALS_SUBMITTED: IntCounter =
        IntCounter::new("approvals_submitted", "Approvals submitted").unwrap();
    pub static ref APPROVALS_SKIPPED: IntCounter = IntCounter::new(
        "approvals_skipped",
        "Approvals skipped because already approved"
    )
    .unwrap();
    pub static ref APPROVALS_FAILED: IntCounter =
        IntCounter::new("approvals_failed", "Approvals failed").unwrap();
}

pub fn build_metrics_handler() -> Result<PrometheusMetrics> {
    let prometheus = PrometheusMetricsBuilder::new("api")
        .endpoint("/metrics")
        .build()
        .map_err(|e| ServerError::MetricsError { source: e })?;

    setup_process_metrics(&prometheus)?;

    for counter in [
        &*GITHUB_API_CALLS,
        &*SLACK_API_CALLS,
        &*REDIS_CALLS,
        &*APPROVALS_SUBMITTED,
        &*APPROVALS_SKIPPED,
        &*APPROVALS_FAILED,
    ] {
        prometheus
            .registry
            .register(Box::new(counter.clone()))
            .map_err(|e| ServerError::MetricsError { source: e.into() })?;
    }

    Ok(prometheus)
}

pub fn record_approval_summary(summary: &ApprovalSummary) {
    for record in summary.records() {
        match record.outcome {
            ApprovalOutcome::Approved => APPROVALS_SUBMITTED.inc(),
            ApprovalOutcome::AlreadyApproved => APPROVALS_SKIPPED.inc(),
            ApprovalOutcome::Failed { .. } => APPROVALS_FAILED.inc(),
        }
    }
}

#[cfg(target_os = "linux")]
fn setup_process_metrics(metrics: &PrometheusMetrics) -> Result<()> {
    use prometheus::process_collector::ProcessCollector;

    metrics
        .registry
        .register(Box::new(ProcessCollector::for_self()))
        .map_err(|e| ServerError::MetricsError { source: e.into() })
}

#[cfg(not(target_os = "linux"))]
fn setup_process_metrics(_metrics: &PrometheusMetrics) -> Result<()> {
    tracing::warn!("Process metrics are only supported on Linux.");
    Ok(())
}
