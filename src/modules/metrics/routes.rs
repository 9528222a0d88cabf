use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::AppState;
use super::controller;

pub fn metrics_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/process", post(controller::process))
        .route("/queue/add", post(controller::queue_add))
        .route("/queue/remove", post(controller::queue_remove))
        .route("/hello", get(controller::hello))
}
