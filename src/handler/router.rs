//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: method dispatch, body collection
//! for form posts, access logging, and header finalization.

use crate::handler::{DevHandler, RequestHandler};
use crate::http;
use crate::logger::{self, AccessLogEntry};
use http_body_util::{BodyExt, Full};
use hyper::body::{Body, Bytes};
use hyper::{Method, Request, Response, Version};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;

/// Main entry point for HTTP request handling
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    handler: Arc<DevHandler>,
    peer_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let version = http_version_label(req.version());

    let mut response = match method {
        Method::GET | Method::HEAD => handler.handle_get(&path, method == Method::HEAD).await,
        Method::POST => {
            let body = read_form_body(req).await;
            handler.handle_post(body).await
        }
        Method::OPTIONS => http::build_options_response(),
        _ => http::build_405_response(),
    };

    // Every response passes through the finalizer, error paths included.
    handler.finalize_headers(&mut response);

    if handler.access_log_enabled() {
        let mut entry = AccessLogEntry::new(peer_addr.to_string(), method.to_string(), path);
        entry.http_version = version;
        entry.status = response.status().as_u16();
        entry.body_bytes = body_len(&response);
        logger::log_access(&entry);
    }

    Ok(response)
}

/// Read the form body, honoring Content-Length.
///
/// A zero declared length means no body is read at all; there is no
/// blocking wait for data that will never arrive.
async fn read_form_body(req: Request<hyper::body::Incoming>) -> Bytes {
    if declared_content_length(req.headers()) == 0 {
        return Bytes::new();
    }

    match req.into_body().collect().await {
        Ok(collected) => collected.to_bytes(),
        Err(e) => {
            logger::log_warning(&format!("Failed to read request body: {e}"));
            Bytes::new()
        }
    }
}

/// Content-Length as declared by the client.
///
/// An absent, non-numeric, or zero header counts as zero.
fn declared_content_length(headers: &hyper::HeaderMap) -> u64 {
    headers
        .get(hyper::header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(0)
}

fn body_len(response: &Response<Full<Bytes>>) -> usize {
    usize::try_from(response.body().size_hint().exact().unwrap_or(0)).unwrap_or(usize::MAX)
}

fn http_version_label(version: Version) -> String {
    match version {
        Version::HTTP_10 => "1.0".to_string(),
        Version::HTTP_2 => "2".to_string(),
        _ => "1.1".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header_map(value: Option<&'static str>) -> hyper::HeaderMap {
        let mut headers = hyper::HeaderMap::new();
        if let Some(v) = value {
            headers.insert(
                hyper::header::CONTENT_LENGTH,
                hyper::header::HeaderValue::from_static(v),
            );
        }
        headers
    }

    #[test]
    fn missing_content_length_counts_as_zero() {
        assert_eq!(declared_content_length(&header_map(None)), 0);
    }

    #[test]
    fn zero_content_length_counts_as_zero() {
        assert_eq!(declared_content_length(&header_map(Some("0"))), 0);
    }

    #[test]
    fn non_numeric_content_length_counts_as_zero() {
        assert_eq!(declared_content_length(&header_map(Some("banana"))), 0);
        assert_eq!(declared_content_length(&header_map(Some("-5"))), 0);
    }

    #[test]
    fn numeric_content_length_is_honored() {
        assert_eq!(declared_content_length(&header_map(Some("24"))), 24);
    }

    #[test]
    fn version_labels() {
        assert_eq!(http_version_label(Version::HTTP_10), "1.0");
        assert_eq!(http_version_label(Version::HTTP_11), "1.1");
        assert_eq!(http_version_label(Version::HTTP_2), "2");
    }

    #[test]
    fn body_len_reads_full_body_size() {
        let resp = http::build_file_response(b"12345".to_vec(), "text/plain", false);
        assert_eq!(body_len(&resp), 5);

        let empty = http::build_redirect_response("/success.html");
        assert_eq!(body_len(&empty), 0);
    }
}
