// Configuration module entry point
// Loads config.toml + environment overrides and holds runtime state

mod state;
mod types;

use std::net::SocketAddr;

// Re-export public types
pub use state::AppState;
pub use types::{
    CatalogConfig, Config, HttpConfig, LoggingConfig, PerformanceConfig, ServerConfig, UiConfig,
};

impl Config {
    /// Load configuration from "config.toml" in the working directory
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from the specified file path (without extension)
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(config::Environment::with_prefix("CATALOG"))
            .set_default("server.api_host", "127.0.0.1")?
            .set_default("server.api_port", 3000)?
            .set_default("server.ui_host", "127.0.0.1")?
            .set_default("server.ui_port", 3001)?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", true)?
            .set_default("logging.log_request_body", false)?
            .set_default("performance.keep_alive_timeout", 75)?
            .set_default("performance.read_timeout", 30)?
            .set_default("performance.write_timeout", 30)?
            .set_default("http.enable_cors", true)?
            .set_default("http.cors_allow_origin", "http://localhost:3001")?
            .set_default("http.max_body_size", 1_048_576)? // 1MB
            .build()?;

        settings.try_deserialize()
    }

    pub fn get_api_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.api_host, self.server.api_port)
            .parse()
            .map_err(|e| format!("Invalid API address: {e}"))
    }

    pub fn get_ui_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.ui_host, self.server.ui_port)
            .parse()
            .map_err(|e| format!("Invalid UI address: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_config_file() {
        let cfg = Config::load_from("does-not-exist").unwrap();

        assert_eq!(cfg.server.api_port, 3000);
        assert_eq!(cfg.server.ui_port, 3001);
        assert!(cfg.http.enable_cors);
        assert_eq!(cfg.http.cors_allow_origin, "http://localhost:3001");
        assert_eq!(cfg.http.max_body_size, 1_048_576);
        assert_eq!(cfg.logging.access_log_format, "combined");
        assert!(cfg.ui.static_dir.is_none());
        assert!(cfg.catalog.seed_file.is_none());
    }

    #[test]
    fn test_socket_addrs() {
        let cfg = Config::load_from("does-not-exist").unwrap();
        assert!(cfg.get_api_socket_addr().is_ok());
        assert!(cfg.get_ui_socket_addr().is_ok());
    }
}
