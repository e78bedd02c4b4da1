//! Deferred browser opening
//!
//! A detached task sleeps for the configured delay and then asks the OS to
//! open the server URL. Failure is logged and never reaches the serving
//! path, and the task does not keep the process alive.

use crate::logger;
use std::time::Duration;

/// Schedule a one-shot, fire-and-forget browser launch.
pub fn schedule_open(url: String, delay: Duration) {
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        logger::log_info(&format!("Opening browser at {url}"));
        if let Err(e) = open::that(&url) {
            logger::log_warning(&format!(
                "Could not open browser automatically: {e}. Please visit: {url}"
            ));
        }
    });
}
