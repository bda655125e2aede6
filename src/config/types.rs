// Configuration types module
// Defines all configuration-related data structures

use serde::Deserialize;

use crate::pagination::{DEFAULT_PAGE_BREAK, DEFAULT_SEPARATOR};
use crate::routing::RouterOptions;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub performance: PerformanceConfig,
    pub http: HttpConfig,
    #[serde(default)]
    pub routing: RoutingConfig,
    #[serde(default)]
    pub content: ContentConfig,
}

/// Server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub access_log: bool,
    /// Access log format: combined, common, json, or a custom pattern
    #[serde(default = "default_access_log_format")]
    pub access_log_format: String,
    /// Access log file path (stdout when unset)
    #[serde(default)]
    pub access_log_file: Option<String>,
    /// Error log file path (stderr when unset)
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
    pub server_name: String,
    pub max_body_size: u64,
}

/// Route table configuration
#[derive(Debug, Deserialize, Clone, Default)]
pub struct RoutingConfig {
    #[serde(default)]
    pub case_sensitive: bool,
    #[serde(default)]
    pub trailing_slash: bool,
    /// TOML route manifest; the built-in routes are used when unset
    #[serde(default)]
    pub manifest: Option<String>,
}

impl RoutingConfig {
    pub const fn router_options(&self) -> RouterOptions {
        RouterOptions {
            case_sensitive: self.case_sensitive,
            trailing_slash: self.trailing_slash,
        }
    }
}

/// Content store and pagination configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ContentConfig {
    #[serde(default = "default_store_path")]
    pub store_path: String,
    #[serde(default = "default_page_break_marker")]
    pub page_break_marker: String,
    /// Markup shown in place of each marker in the full view
    #[serde(default = "default_page_separator")]
    pub page_separator: String,
    /// Query parameter carrying the requested page number
    #[serde(default = "default_page_param")]
    pub page_param: String,
    /// Query parameter selecting the view mode (`full` shows every page)
    #[serde(default = "default_view_param")]
    pub view_param: String,
    /// Trim pages and drop empty ones when splitting
    #[serde(default)]
    pub trim_pages: bool,
    /// Listing size for the article/photobook indexes
    #[serde(default = "default_items_per_page")]
    pub items_per_page: usize,
    /// Query parameter carrying the requested listing page
    #[serde(default = "default_list_page_param")]
    pub list_page_param: String,
}

#[allow(clippy::missing_const_for_fn)]
fn default_store_path() -> String {
    "content.toml".to_string()
}

#[allow(clippy::missing_const_for_fn)]
fn default_page_break_marker() -> String {
    DEFAULT_PAGE_BREAK.to_string()
}

#[allow(clippy::missing_const_for_fn)]
fn default_page_separator() -> String {
    DEFAULT_SEPARATOR.to_string()
}

#[allow(clippy::missing_const_for_fn)]
fn default_page_param() -> String {
    "p".to_string()
}

#[allow(clippy::missing_const_for_fn)]
fn default_view_param() -> String {
    "view".to_string()
}

const fn default_items_per_page() -> usize {
    10
}

#[allow(clippy::missing_const_for_fn)]
fn default_list_page_param() -> String {
    "page".to_string()
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            store_path: default_store_path(),
            page_break_marker: default_page_break_marker(),
            page_separator: default_page_separator(),
            page_param: default_page_param(),
            view_param: default_view_param(),
            trim_pages: false,
            items_per_page: default_items_per_page(),
            list_page_param: default_list_page_param(),
        }
    }
}
