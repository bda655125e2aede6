//! Routing error types

use super::method::Method;

/// Errors raised while building or querying the route table
#[derive(Debug, thiserror::Error)]
pub enum RouteError {
    /// No registered route accepts the method and path.
    /// The front controller maps this to a 404.
    #[error("no route matches {method} {path}")]
    NoRouteMatch { method: Method, path: String },

    /// A route declaration is structurally malformed
    #[error("invalid route declaration at {location}: {reason}")]
    InvalidGroupNesting { location: String, reason: String },

    /// A leaf names a controller/action pair with no handler behind it
    #[error("route {method} {pattern} points at unknown handler {handler}")]
    UnknownHandler {
        method: Method,
        pattern: String,
        handler: String,
    },

    #[error("failed to read route manifest: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse route manifest: {0}")]
    Manifest(#[from] toml::de::Error),
}
