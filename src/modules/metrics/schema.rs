use serde::Deserialize;

// Request query parameters for POST /api/metrics/process
#[derive(Debug, Deserialize, Clone)]
pub struct ProcessQuery {
    // Simulated work duration in milliseconds. Accepted unvalidated:
    // negative values sleep zero, huge values block for the full duration.
    #[serde(rename = "durationMs", default = "default_duration_ms")]
    pub duration_ms: i64,
}

fn default_duration_ms() -> i64 {
    100
}
