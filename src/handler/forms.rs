//! Form submission handling
//!
//! The dev server does not store submissions: the body is echoed to the
//! console and the client is redirected to the success page.

use crate::config::Config;
use crate::http;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

/// Echo the submitted form body and redirect to the success page.
pub fn handle_submission(config: &Config, body: &Bytes) -> Response<Full<Bytes>> {
    println!("{}", format_submission(body));
    http::build_redirect_response(&config.site.success_page)
}

/// Console line for a submission, decoded as (lossy) UTF-8.
fn format_submission(body: &[u8]) -> String {
    format!("FORM: {}", String::from_utf8_lossy(body))
}
