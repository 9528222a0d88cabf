use prometheus::core::{Collector, Desc};
use prometheus::proto::MetricFamily;
use prometheus::{IntGauge, Opts};
use std::sync::Arc;

use crate::modules::metrics::model::QueueSizeState;

/// Collector that samples the queue depth at scrape time
///
/// The gauge follows the shared counter instead of being set from the
/// handlers, so concurrent mutations can never leave it stale.
pub struct QueueSizeCollector {
    gauge: IntGauge,
    state: Arc<QueueSizeState>,
}

impl QueueSizeCollector {
    pub fn new(state: Arc<QueueSizeState>) -> Result<Self, prometheus::Error> {
        let gauge = IntGauge::with_opts(Opts::new(
            "custom_queue_size",
            "Current size of the processing queue",
        ))?;
        Ok(Self { gauge, state })
    }
}

impl Collector for QueueSizeCollector {
    fn desc(&self) -> Vec<&Desc> {
        self.gauge.desc()
    }

    fn collect(&self) -> Vec<MetricFamily> {
        self.gauge.set(self.state.get());
        self.gauge.collect()
    }
}
