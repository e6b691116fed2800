// Configuration types module
// Defines all configuration-related data structures

use serde::Deserialize;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub performance: PerformanceConfig,
    pub http: HttpConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// Server configuration: one listener for the API, one for the web UI
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub api_host: String,
    pub api_port: u16,
    pub ui_host: String,
    pub ui_port: u16,
    pub workers: Option<usize>,
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub access_log: bool,
    /// Log request bodies of mutating API calls (POST/PATCH)
    pub log_request_body: bool,
    /// Access log format (combined, common, or json)
    #[serde(default = "default_access_log_format")]
    pub access_log_format: String,
    /// Access log file path (optional, stdout if not set)
    #[serde(default)]
    pub access_log_file: Option<String>,
    /// Error log file path (optional, stderr if not set)
    #[serde(default)]
    pub error_log_file: Option<String>,
}

#[allow(clippy::missing_const_for_fn)]
fn default_access_log_format() -> String {
    "combined".to_string()
}

/// Performance configuration
#[derive(Debug, Deserialize, Clone)]
pub struct PerformanceConfig {
    pub keep_alive_timeout: u64,
    pub read_timeout: u64,
    pub write_timeout: u64,
    pub max_connections: Option<u64>,
}

/// HTTP configuration
#[derive(Debug, Deserialize, Clone)]
pub struct HttpConfig {
    pub enable_cors: bool,
    /// Origin allowed to call the API (the UI listener, typically)
    pub cors_allow_origin: String,
    pub max_body_size: u64,
}

/// Web UI configuration
#[derive(Debug, Deserialize, Clone, Default)]
pub struct UiConfig {
    /// Optional directory of extra static assets served by the UI listener
    #[serde(default)]
    pub static_dir: Option<String>,
}

/// Catalog configuration
#[derive(Debug, Deserialize, Clone, Default)]
pub struct CatalogConfig {
    /// Optional TOML file replacing the built-in seed products
    #[serde(default)]
    pub seed_file: Option<String>,
}
