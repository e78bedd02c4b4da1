//! Static file serving module
//!
//! Resolves request paths against the site root and serves file contents
//! with an inferred Content-Type.

use crate::config::Config;
use crate::http::{self, mime};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::path::{Component, Path, PathBuf};
use tokio::fs;

/// Serve a GET/HEAD request for `path` from the configured site root.
pub async fn serve(config: &Config, path: &str, is_head: bool) -> Response<Full<Bytes>> {
    let Some(file_path) = resolve_path(&config.site.root, &config.site.index_file, path) else {
        return http::build_403_response();
    };

    if !file_path.is_file() {
        return http::build_404_response(path);
    }

    match fs::read(&file_path).await {
        Ok(content) => {
            let content_type =
                mime::get_content_type(file_path.extension().and_then(|e| e.to_str()));
            http::build_file_response(content, content_type, is_head)
        }
        Err(e) => {
            logger::log_error(&format!(
                "Failed to read file '{}': {e}",
                file_path.display()
            ));
            http::build_500_response()
        }
    }
}

/// Map a request path to a filesystem path under `root`.
///
/// "/" is rewritten to the index file. Returns `None` when the path would
/// walk out of the root; the caller answers those with 403.
pub fn resolve_path(root: &str, index_file: &str, path: &str) -> Option<PathBuf> {
    let rewritten = if path == "/" {
        index_file
    } else {
        path.trim_start_matches('/')
    };

    let relative = Path::new(rewritten);
    let escapes_root = relative.components().any(|c| {
        matches!(
            c,
            Component::ParentDir | Component::RootDir | Component::Prefix(_)
        )
    });
    if escapes_root {
        logger::log_warning(&format!("Path traversal attempt blocked: {path}"));
        return None;
    }

    Some(Path::new(root).join(relative))
}
