//! Request handler module
//!
//! Dispatches requests by method and serves them. The capability set is the
//! `RequestHandler` trait (GET, POST, header finalization); `DevHandler` is
//! the one concrete implementation, handed to the hyper service by
//! composition.

pub mod forms;
pub mod router;
pub mod static_files;

// Re-export main entry point
pub use router::handle_request;

use crate::config::Config;
use crate::http;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::sync::Arc;

/// Capability set every request passes through: one method handler plus the
/// header finalizer that runs on every response.
pub trait RequestHandler {
    /// Serve a GET (or HEAD) request for `path`.
    async fn handle_get(&self, path: &str, is_head: bool) -> Response<Full<Bytes>>;

    /// Handle a form submission body and build the redirect response.
    async fn handle_post(&self, body: Bytes) -> Response<Full<Bytes>>;

    /// Last touch before a response is written out.
    fn finalize_headers(&self, response: &mut Response<Full<Bytes>>);
}

/// Serves files from the configured site root and echoes form submissions.
pub struct DevHandler {
    config: Arc<Config>,
}

impl DevHandler {
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }

    pub fn access_log_enabled(&self) -> bool {
        self.config.logging.access_log
    }
}

impl RequestHandler for DevHandler {
    async fn handle_get(&self, path: &str, is_head: bool) -> Response<Full<Bytes>> {
        static_files::serve(&self.config, path, is_head).await
    }

    async fn handle_post(&self, body: Bytes) -> Response<Full<Bytes>> {
        forms::handle_submission(&self.config, &body)
    }

    fn finalize_headers(&self, response: &mut Response<Full<Bytes>>) {
        http::apply_cors_headers(response);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_config;

    #[tokio::test]
    async fn finalizer_adds_cors_to_every_handler_response() {
        let handler = DevHandler::new(Arc::new(test_config(".")));

        let mut get_resp = handler.handle_get("/no-such-file.html", false).await;
        handler.finalize_headers(&mut get_resp);
        assert_eq!(get_resp.status(), 404);
        assert_eq!(get_resp.headers()["Access-Control-Allow-Origin"], "*");

        let mut post_resp = handler.handle_post(Bytes::from_static(b"a=1")).await;
        handler.finalize_headers(&mut post_resp);
        assert_eq!(post_resp.status(), 302);
        assert_eq!(
            post_resp.headers()["Access-Control-Allow-Methods"],
            "GET, POST, OPTIONS"
        );
        assert_eq!(
            post_resp.headers()["Access-Control-Allow-Headers"],
            "Content-Type"
        );
    }
}
