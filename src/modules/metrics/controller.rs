use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::AppState;
use super::schema::ProcessQuery;

// =============================================================================
// POST /api/metrics/process - Simulate processing work
// =============================================================================

pub async fn process(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ProcessQuery>,
) -> String {
    let duration_ms = query.duration_ms;

    state.metrics.request_count.inc();
    tracing::info!("Received process request with duration: {}ms", duration_ms);

    // Work arriving
    let size = state.queue.add();
    tracing::info!("Added to queue. Current size: {}", size);

    // Simulated work occupies a blocking-pool thread for the full duration.
    // Negative durations sleep zero; the raw value is still echoed back.
    let start = Instant::now();
    let worked = tokio::task::spawn_blocking(move || {
        std::thread::sleep(Duration::from_millis(duration_ms.max(0) as u64));
    })
    .await;
    if let Err(e) = worked {
        // A cancelled or panicked work task does not fail the request
        tracing::error!("Processing interrupted: {}", e);
    }
    state.metrics.process_duration.observe(start.elapsed().as_secs_f64());

    // Work finished
    let size = state.queue.remove();
    tracing::info!("Request processed. Removed from queue. Current size: {}", size);

    format!("Processed in {}ms", duration_ms)
}

// =============================================================================
// POST /api/metrics/queue/add - Manually grow the queue
// =============================================================================

pub async fn queue_add(State(state): State<Arc<AppState>>) -> String {
    let size = state.queue.add();
    tracing::info!("Manual queue add. Current size: {}", size);

    format!("Added to queue. Current size: {}", size)
}

// =============================================================================
// POST /api/metrics/queue/remove - Manually shrink the queue (no floor)
// =============================================================================

pub async fn queue_remove(State(state): State<Arc<AppState>>) -> String {
    let size = state.queue.remove();
    tracing::info!("Manual queue remove. Current size: {}", size);

    format!("Removed from queue. Current size: {}", size)
}

// =============================================================================
// GET /api/metrics/hello - Greeting
// =============================================================================

pub async fn hello(State(state): State<Arc<AppState>>) -> &'static str {
    state.metrics.request_count.inc();
    tracing::info!("Hello endpoint called");

    "Hello World!"
}

// =============================================================================
// GET /metrics - Prometheus text exposition
// =============================================================================

pub async fn get_metrics(State(state): State<Arc<AppState>>) -> Response {
    match state.metrics.export() {
        Ok(output) => (
            StatusCode::OK,
            [("Content-Type", "text/plain; version=0.0.4")],
            output,
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Failed to export metrics: {}", e),
        )
            .into_response(),
    }
}
