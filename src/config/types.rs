// Configuration types module
// Defines all configuration-related data structures

use serde::Deserialize;

/// Main configuration structure
///
/// Built once at process start and passed explicitly to the listener and
/// banner-printing routines. Immutable for the process lifetime.
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub site: SiteConfig,
    pub browser: BrowserConfig,
    pub logging: LoggingConfig,
}

/// Listener configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub workers: Option<usize>,
}

/// Static site configuration
#[derive(Debug, Deserialize, Clone)]
pub struct SiteConfig {
    /// Directory static files are resolved against
    pub root: String,
    /// File served for "/"
    pub index_file: String,
    /// Redirect target after a form submission
    pub success_page: String,
}

/// Browser auto-open configuration
#[derive(Debug, Deserialize, Clone)]
pub struct BrowserConfig {
    pub open: bool,
    pub delay_secs: u64,
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub access_log: bool,
}
