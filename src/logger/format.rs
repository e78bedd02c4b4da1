//! Access log format module
//!
//! Renders access log lines in the Common Log Format (CLF).

use chrono::Local;

/// Access log entry containing request/response information
#[derive(Debug, Clone)]
pub struct AccessLogEntry {
    /// Client address (ip:port)
    pub remote_addr: String,
    /// Request timestamp
    pub time: chrono::DateTime<Local>,
    /// HTTP method (GET, POST, etc.)
    pub method: String,
    /// Request URI path
    pub path: String,
    /// HTTP version (1.0, 1.1)
    pub http_version: String,
    /// Response status code
    pub status: u16,
    /// Response body size in bytes
    pub body_bytes: usize,
}

impl AccessLogEntry {
    /// Create a new access log entry with current timestamp
    pub fn new(remote_addr: String, method: String, path: String) -> Self {
        Self {
            remote_addr,
            time: Local::now(),
            method,
            path,
            http_version: "1.1".to_string(),
            status: 200,
            body_bytes: 0,
        }
    }

    /// Common Log Format (CLF)
    /// `$remote_addr - - [$time_local] "$request" $status $body_bytes_sent`
    pub fn format_common(&self) -> String {
        format!(
            "{} - - [{}] \"{} {} HTTP/{}\" {} {}",
            self.remote_addr,
            self.time.format("%d/%b/%Y:%H:%M:%S %z"),
            self.method,
            self.path,
            self.http_version,
            self.status,
            self.body_bytes,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_entry() -> AccessLogEntry {
        let mut entry = AccessLogEntry::new(
            "127.0.0.1:54321".to_string(),
            "GET".to_string(),
            "/index.html".to_string(),
        );
        entry.status = 200;
        entry.body_bytes = 1234;
        entry
    }

    #[test]
    fn test_format_common() {
        let entry = create_test_entry();
        let log = entry.format_common();
        assert!(log.contains("127.0.0.1:54321"));
        assert!(log.contains("\"GET /index.html HTTP/1.1\""));
        assert!(log.ends_with("200 1234"));
    }

    #[test]
    fn test_format_includes_request_line() {
        let mut entry = AccessLogEntry::new(
            "127.0.0.1:40000".to_string(),
            "POST".to_string(),
            "/reach-out.html".to_string(),
        );
        entry.status = 302;
        let log = entry.format_common();
        assert!(log.contains("\"POST /reach-out.html HTTP/1.1\" 302"));
    }
}
