//! HTTP building blocks
//!
//! MIME type detection and response builders shared by the handlers.

pub mod mime;
pub mod response;

pub use response::{
    apply_cors_headers, build_403_response, build_404_response, build_405_response,
    build_500_response, build_file_response, build_options_response, build_redirect_response,
};
