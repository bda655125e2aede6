//! Request handler module
//!
//! Turns HTTP requests into route lookups and controller calls.

mod context;
pub mod router;

pub use context::RequestContext;
pub use router::{handle_request, route_request, Routed};
