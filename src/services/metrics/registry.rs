use prometheus::{
    CounterVec, Encoder, Histogram, HistogramOpts, HistogramVec, IntCounter, Opts, Registry,
    TextEncoder,
};
use std::sync::Arc;
use thiserror::Error;

use super::collectors::QueueSizeCollector;
use crate::modules::metrics::model::QueueSizeState;

#[derive(Debug, Error)]
pub enum MetricsError {
    #[error("prometheus error: {0}")]
    Prometheus(#[from] prometheus::Error),
    #[error("metrics output was not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

/// Central metrics registry for the demo service
pub struct MetricsRegistry {
    registry: Registry,

    // Demo instruments
    pub request_count: IntCounter,
    pub process_duration: Histogram,

    // HTTP Metrics
    pub http_requests_total: CounterVec,
    pub http_request_duration_seconds: HistogramVec,
}

impl MetricsRegistry {
    pub fn new(region: &str, queue: Arc<QueueSizeState>) -> Result<Arc<Self>, MetricsError> {
        let registry = Registry::new();

        // Counter: counts requests to the demo endpoints
        let request_count = IntCounter::with_opts(
            Opts::new(
                "custom_request_count",
                "Total number of requests to the custom endpoint",
            )
            .const_label("region", region),
        )?;
        registry.register(Box::new(request_count.clone()))?;

        // Timer: duration of simulated processing
        let process_duration = Histogram::with_opts(
            HistogramOpts::new("custom_process_duration", "Time taken to process the request")
                .buckets(vec![0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0]),
        )?;
        registry.register(Box::new(process_duration.clone()))?;

        // Gauge: current queue depth, sampled from the shared counter at scrape time
        registry.register(Box::new(QueueSizeCollector::new(queue)?))?;

        // HTTP Metrics
        let http_requests_total = CounterVec::new(
            Opts::new("demo_http_requests_total", "Total HTTP requests"),
            &["method", "endpoint", "status"],
        )?;
        registry.register(Box::new(http_requests_total.clone()))?;

        let http_request_duration_seconds = HistogramVec::new(
            HistogramOpts::new(
                "demo_http_request_duration_seconds",
                "HTTP request duration",
            )
            .buckets(vec![0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0]),
            &["method", "endpoint"],
        )?;
        registry.register(Box::new(http_request_duration_seconds.clone()))?;

        Ok(Arc::new(Self {
            registry,
            request_count,
            process_duration,
            http_requests_total,
            http_request_duration_seconds,
        }))
    }

    /// Export metrics in Prometheus text format
    pub fn export(&self) -> Result<String, MetricsError> {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        encoder.encode(&metric_families, &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }

    /// Get the underlying registry
    pub fn registry(&self) -> &Registry {
        &self.registry
    }
}
