// Configuration module entry point
// Loads the immutable process configuration and resolves the listen address

mod types;

pub use types::{BrowserConfig, Config, LoggingConfig, ServerConfig, SiteConfig};

use std::io;
use std::net::{SocketAddr, ToSocketAddrs};

impl Config {
    /// Load configuration from the optional `devserve.toml` in the working
    /// directory, falling back to built-in defaults for everything.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("devserve")
    }

    /// Load configuration from the specified file path (without extension)
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .set_default("server.host", "localhost")?
            .set_default("server.port", 3000)?
            .set_default("site.root", ".")?
            .set_default("site.index_file", "index.html")?
            .set_default("site.success_page", "/success.html")?
            .set_default("browser.open", true)?
            .set_default("browser.delay_secs", 2)?
            .set_default("logging.access_log", true)?
            .build()?;

        settings.try_deserialize()
    }

    /// Resolve the configured host/port to a socket address.
    ///
    /// The host is a name ("localhost"), so this goes through the resolver
    /// rather than `SocketAddr::parse`.
    pub fn socket_addr(&self) -> io::Result<SocketAddr> {
        (self.server.host.as_str(), self.server.port)
            .to_socket_addrs()?
            .next()
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::AddrNotAvailable,
                    format!("host '{}' did not resolve to any address", self.server.host),
                )
            })
    }

    /// Human-facing base URL, kept in terms of the configured host name.
    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.server.host, self.server.port)
    }
}

/// Config with defaults pointed at a test site root.
#[cfg(test)]
pub fn test_config(root: &str) -> Config {
    Config {
        server: ServerConfig {
            host: "localhost".to_string(),
            port: 3000,
            workers: None,
        },
        site: SiteConfig {
            root: root.to_string(),
            index_file: "index.html".to_string(),
            success_page: "/success.html".to_string(),
        },
        browser: BrowserConfig {
            open: false,
            delay_secs: 2,
        },
        logging: LoggingConfig { access_log: false },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_original_constants() {
        let cfg = Config::load_from("no-such-config-file").expect("defaults should load");
        assert_eq!(cfg.server.host, "localhost");
        assert_eq!(cfg.server.port, 3000);
        assert_eq!(cfg.server.workers, None);
        assert_eq!(cfg.site.root, ".");
        assert_eq!(cfg.site.index_file, "index.html");
        assert_eq!(cfg.site.success_page, "/success.html");
        assert!(cfg.browser.open);
        assert_eq!(cfg.browser.delay_secs, 2);
        assert!(cfg.logging.access_log);
    }

    #[test]
    fn base_url_uses_host_name() {
        let cfg = Config::load_from("no-such-config-file").unwrap();
        assert_eq!(cfg.base_url(), "http://localhost:3000");
    }

    #[test]
    fn localhost_resolves() {
        let cfg = Config::load_from("no-such-config-file").unwrap();
        let addr = cfg.socket_addr().expect("localhost should resolve");
        assert_eq!(addr.port(), 3000);
        assert!(addr.ip().is_loopback());
    }
}
