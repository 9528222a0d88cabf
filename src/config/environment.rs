use std::env;

/// Environment configuration
/// Loads and validates environment variables
pub struct Config {
    pub host: String,
    pub port: u16,
    pub metrics_region: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        dotenvy::dotenv().ok();

        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| "PORT must be a valid port number".to_string())?;

        let metrics_region =
            env::var("METRICS_REGION").unwrap_or_else(|_| "us-east".to_string());

        Ok(Self {
            host,
            port,
            metrics_region,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
