use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AppConfig {
    pub log_level: String,
    pub log_dir: String,
    pub log_file: String,
    pub use_json: bool,
    pub rotation: String,
    pub gateway: GatewayConfig,
    /// Uniform timeout applied to every downstream HTTP call.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    pub product_service: ServiceEndpoint,
    pub recommendation_service: ServiceEndpoint,
    pub review_service: ServiceEndpoint,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GatewayConfig {
    pub host: String,
    pub port: u16,
}

/// Host and port of one downstream backend.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ServiceEndpoint {
    pub host: String,
    pub port: u16,
}

fn default_request_timeout_secs() -> u64 {
    30
}

impl AppConfig {
    pub fn load(env: &str) -> Self {
        let config_path = format!("config/{}.yaml", env);
        let content = fs::read_to_string(&config_path)
            .unwrap_or_else(|_| panic!("Failed to read config file: {}", config_path));
        serde_yaml::from_str(&content).expect("Failed to parse config yaml")
    }
}
