//! HTTP response building module
//!
//! Provides builders for the status codes the dev server produces, decoupled
//! from the request handling logic. CORS injection lives here too: the
//! handler runs `apply_cors_headers` on every outgoing response, error
//! responses included.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::header::HeaderValue;
use hyper::Response;

/// Add the permissive development CORS headers to a finished response.
pub fn apply_cors_headers(response: &mut Response<Full<Bytes>>) {
    let headers = response.headers_mut();
    headers.insert("Access-Control-Allow-Origin", HeaderValue::from_static("*"));
    headers.insert(
        "Access-Control-Allow-Methods",
        HeaderValue::from_static("GET, POST, OPTIONS"),
    );
    headers.insert(
        "Access-Control-Allow-Headers",
        HeaderValue::from_static("Content-Type"),
    );
}

/// Build 200 response for a static file
pub fn build_file_response(
    data: Vec<u8>,
    content_type: &str,
    is_head: bool,
) -> Response<Full<Bytes>> {
    let content_length = data.len();
    let body = if is_head {
        Bytes::new()
    } else {
        Bytes::from(data)
    };

    Response::builder()
        .status(200)
        .header("Content-Type", content_type)
        .header("Content-Length", content_length)
        .body(Full::new(body))
        .unwrap_or_else(|e| {
            log_build_error("200", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 302 redirect response with no body (form submissions land here)
pub fn build_redirect_response(target: &str) -> Response<Full<Bytes>> {
    Response::builder()
        .status(302)
        .header("Location", target)
        .body(Full::new(Bytes::new()))
        .unwrap_or_else(|e| {
            log_build_error("302", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 403 Forbidden response (path traversal attempts)
pub fn build_403_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(403)
        .header("Content-Type", "text/plain")
        .body(Full::new(Bytes::from("Forbidden")))
        .unwrap_or_else(|e| {
            log_build_error("403", &e);
            Response::new(Full::new(Bytes::from("Forbidden")))
        })
}

/// Build 404 Not Found response with a small HTML page naming the path
pub fn build_404_response(path: &str) -> Response<Full<Bytes>> {
    let html = format!(
        "<!DOCTYPE html>\n<html>\n<head><title>404 - Page Not Found</title></head>\n<body>\n\
         <h1>404 - Page Not Found</h1>\n\
         <p>The requested file <strong>{path}</strong> was not found.</p>\n\
         <p><a href=\"/\">Back to Home</a></p>\n</body>\n</html>\n"
    );

    Response::builder()
        .status(404)
        .header("Content-Type", "text/html; charset=utf-8")
        .body(Full::new(Bytes::from(html)))
        .unwrap_or_else(|e| {
            log_build_error("404", &e);
            Response::new(Full::new(Bytes::from("404 Not Found")))
        })
}

/// Build 405 Method Not Allowed response
pub fn build_405_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(405)
        .header("Content-Type", "text/plain")
        .header("Allow", "GET, HEAD, POST, OPTIONS")
        .body(Full::new(Bytes::from("405 Method Not Allowed")))
        .unwrap_or_else(|e| {
            log_build_error("405", &e);
            Response::new(Full::new(Bytes::from("405 Method Not Allowed")))
        })
}

/// Build OPTIONS response (preflight request)
///
/// OPTIONS is answered directly with 204 instead of falling through to 405:
/// the CORS headers advertise it, so a browser preflight gets a usable
/// reply.
pub fn build_options_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(204)
        .header("Allow", "GET, HEAD, POST, OPTIONS")
        .body(Full::new(Bytes::new()))
        .unwrap_or_else(|e| {
            log_build_error("OPTIONS", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 500 Internal Server Error response (file read failures)
pub fn build_500_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(500)
        .header("Content-Type", "text/plain")
        .body(Full::new(Bytes::from("Internal Server Error")))
        .unwrap_or_else(|e| {
            log_build_error("500", &e);
            Response::new(Full::new(Bytes::from("Internal Server Error")))
        })
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header_value<'a>(response: &'a Response<Full<Bytes>>, name: &str) -> Option<&'a str> {
        response.headers().get(name).and_then(|v| v.to_str().ok())
    }

    fn cors_headers_present(response: &Response<Full<Bytes>>) -> bool {
        header_value(response, "Access-Control-Allow-Origin") == Some("*")
            && header_value(response, "Access-Control-Allow-Methods")
                == Some("GET, POST, OPTIONS")
            && header_value(response, "Access-Control-Allow-Headers") == Some("Content-Type")
    }

    #[test]
    fn cors_applies_to_success_responses() {
        let mut resp = build_file_response(b"hello".to_vec(), "text/plain", false);
        apply_cors_headers(&mut resp);
        assert!(cors_headers_present(&resp));
    }

    #[test]
    fn cors_applies_to_error_responses() {
        let mut resp = build_404_response("/missing.html");
        apply_cors_headers(&mut resp);
        assert!(cors_headers_present(&resp));

        let mut resp = build_405_response();
        apply_cors_headers(&mut resp);
        assert!(cors_headers_present(&resp));
    }

    #[test]
    fn redirect_has_location_and_no_body() {
        let resp = build_redirect_response("/success.html");
        assert_eq!(resp.status(), 302);
        assert_eq!(resp.headers()["Location"], "/success.html");
    }

    #[test]
    fn file_response_sets_content_headers() {
        let resp = build_file_response(b"body".to_vec(), "text/html; charset=utf-8", false);
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["Content-Type"], "text/html; charset=utf-8");
        assert_eq!(resp.headers()["Content-Length"], "4");
    }

    #[test]
    fn not_found_page_names_the_path() {
        let resp = build_404_response("/nonexistent.file");
        assert_eq!(resp.status(), 404);

        let body = collect_body(resp);
        assert!(body.contains("/nonexistent.file"));
    }

    // Full<Bytes> resolves immediately; a tiny runtime is enough to drain it.
    fn collect_body(resp: Response<Full<Bytes>>) -> String {
        use http_body_util::BodyExt;

        let rt = tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap();
        let bytes = rt
            .block_on(resp.into_body().collect())
            .unwrap()
            .to_bytes();
        String::from_utf8_lossy(&bytes).into_owned()
    }
}
