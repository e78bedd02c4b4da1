//! Logger module
//!
//! Console logging for the dev server: startup banner, access log lines in
//! Common Log Format, warnings and errors.

mod format;

pub use format::AccessLogEntry;

use crate::config::Config;

pub fn log_info(message: &str) {
    println!("[*] {message}");
}

pub fn log_warning(message: &str) {
    eprintln!("[WARN] {message}");
}

pub fn log_error(message: &str) {
    eprintln!("[ERROR] {message}");
}

/// Log a formatted access log entry
pub fn log_access(entry: &AccessLogEntry) {
    println!("{}", entry.format_common());
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    eprintln!("[ERROR] Failed to serve connection: {err:?}");
}

/// Print the startup banner.
///
/// The page list is informational and fixed; it is not derived from the
/// filesystem.
pub fn log_server_start(config: &Config) {
    let base = config.base_url();
    let root = std::fs::canonicalize(&config.site.root)
        .map_or_else(|_| config.site.root.clone(), |p| p.display().to_string());

    println!("\n[*] Development server started!");
    println!("=============================================");
    println!("[*] Server URL: {base}");
    println!("[*] Serving files from: {root}");
    println!("[*] Form handling: ENABLED (simulated)");
    println!("=============================================");
    println!("\nAvailable pages:");
    println!("   - Home: {base}/");
    println!("   - About: {base}/who-we-are.html");
    println!("   - Technical: {base}/under-the-hood.html");
    println!("   - Enterprise: {base}/enterprise-product.html");
    println!("   - IoT: {base}/connected-everything.html");
    println!("   - Partners: {base}/partners.html");
    println!("   - Team: {base}/whos-behind-this.html");
    println!("   - Contact: {base}/reach-out.html");
    println!("\nTips:");
    println!("   - Forms redirect to the success page (simulated)");
    println!("   - Press Ctrl+C to stop the server\n");
}

pub fn log_shutdown() {
    println!("\n[*] Shutting down development server...");
    println!("[OK] Server stopped.");
}
