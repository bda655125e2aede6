//! Routing module
//!
//! Turns `(method, path)` into a handler and its path parameters:
//! - Route table built from nested prefix/namespace groups
//! - First-match-wins dispatch over declaration order
//! - Optional TOML manifest as the registration surface

mod error;
mod manifest;
mod matcher;
mod method;
mod pattern;
mod table;

pub use error::RouteError;
pub use manifest::{load_manifest, parse_manifest};
pub use matcher::{Params, RouteMatch, Router, RouterOptions};
pub use method::{Method, UnknownMethod};
pub use pattern::{join_paths, Segment};
pub use table::{Handler, HandlerRef, Route, RouteDecl, RouteTable};
