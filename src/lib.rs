pub mod config;
pub mod modules;
pub mod services;

use axum::{middleware, routing::get, Json, Router};
use serde::Serialize;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use modules::metrics::{controller, metrics_routes, model::QueueSizeState};
use services::metrics::{metrics_middleware, MetricsRegistry};

pub struct AppState {
    pub metrics: Arc<MetricsRegistry>,
    pub queue: Arc<QueueSizeState>,
}

pub fn create_app(metrics: Arc<MetricsRegistry>, queue: Arc<QueueSizeState>) -> Router {
    let state = Arc::new(AppState {
        metrics: metrics.clone(),
        queue,
    });

    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .route("/metrics", get(controller::get_metrics))
        .nest("/api/metrics", metrics_routes())
        .layer(middleware::from_fn_with_state(metrics, metrics_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn root() -> &'static str {
    "Metrics Demo API"
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
