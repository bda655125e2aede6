//! HTTP protocol layer
//!
//! Response builders shared by the front controller, kept free of routing
//! and content logic.

pub mod response;

pub use response::{build_405_response, build_413_response, build_html_response};
