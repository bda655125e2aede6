// Configuration module entry point
// Loads application configuration and builds the shared runtime state

mod state;
mod types;

use std::net::SocketAddr;

// Re-export public types
pub use state::{AppState, StartupError};
pub use types::{
    Config, ContentConfig, HttpConfig, LoggingConfig, PerformanceConfig, RoutingConfig,
    ServerConfig,
};

impl Config {
    /// Load configuration from specified file path (without extension).
    ///
    /// Values are layered: built-in defaults, then the file, then `CMS_*`
    /// environment variables (`CMS_SERVER__PORT=9000`).
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(config::Environment::with_prefix("CMS").separator("__"))
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8080)?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", true)?
            .set_default("logging.access_log_format", "combined")?
            .set_default("performance.keep_alive_timeout", 75)?
            .set_default("performance.read_timeout", 30)?
            .set_default("performance.write_timeout", 30)?
            .set_default("http.server_name", "paged-cms/0.1")?
            .set_default("http.max_body_size", 10_485_760)? // 10MB
            .set_default("routing.case_sensitive", false)?
            .set_default("routing.trailing_slash", false)?
            .set_default("content.store_path", "content.toml")?
            .set_default("content.page_break_marker", crate::pagination::DEFAULT_PAGE_BREAK)?
            .set_default("content.page_separator", crate::pagination::DEFAULT_SEPARATOR)?
            .set_default("content.page_param", "p")?
            .set_default("content.view_param", "view")?
            .set_default("content.trim_pages", false)?
            .set_default("content.items_per_page", 10)?
            .set_default("content.list_page_param", "page")?
            .build()?;

        settings.try_deserialize()
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}
