use axum_test::TestServer;
use std::sync::Arc;

use metrics_demo::modules::metrics::model::QueueSizeState;
use metrics_demo::services::metrics::MetricsRegistry;

// Allow dead_code for utilities used by other test files
#[allow(dead_code)]
pub struct TestContext {
    pub server: TestServer,
    pub metrics: Arc<MetricsRegistry>,
    pub queue: Arc<QueueSizeState>,
}

#[allow(dead_code)]
impl TestContext {
    pub fn new() -> Self {
        let queue = Arc::new(QueueSizeState::new());
        let metrics = MetricsRegistry::new("us-east", queue.clone())
            .expect("Failed to initialize metrics registry");

        let app = metrics_demo::create_app(metrics.clone(), queue.clone());
        let server = TestServer::new(app).expect("Failed to create test server");

        Self {
            server,
            metrics,
            queue,
        }
    }

    /// Current gauge value as rendered by the exporter
    pub fn exported_queue_size(&self) -> i64 {
        let output = self.metrics.export().expect("Failed to export metrics");
        output
            .lines()
            .find(|line| line.starts_with("custom_queue_size "))
            .and_then(|line| line.split_whitespace().nth(1))
            .and_then(|value| value.parse().ok())
            .expect("custom_queue_size not found in export")
    }
}
