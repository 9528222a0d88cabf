use metrics_demo::config::environment::Config;
use metrics_demo::modules::metrics::model::QueueSizeState;
use metrics_demo::services::metrics::MetricsRegistry;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "metrics_demo=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().expect("Failed to load environment configuration");

    let queue = Arc::new(QueueSizeState::new());
    let metrics = MetricsRegistry::new(&config.metrics_region, queue.clone())
        .expect("Failed to initialize metrics registry");
    tracing::info!("Metrics registry initialized (region={})", config.metrics_region);

    let app = metrics_demo::create_app(metrics, queue);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    tracing::info!("Server running on http://{}", addr);
    axum::serve(listener, app).await.unwrap();
}
