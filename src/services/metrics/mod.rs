pub mod collectors;
pub mod middleware;
pub mod registry;

pub use collectors::QueueSizeCollector;
pub use middleware::metrics_middleware;
pub use registry::{MetricsError, MetricsRegistry};
