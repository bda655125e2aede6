//! TOML route manifest
//!
//! Routes can be declared in a file instead of code:
//!
//! ```toml
//! [[routes]]
//! prefix = "/admin"
//! namespace = "Admin"
//!
//!   [[routes.routes]]
//!   method = "GET"
//!   path = "/users/{id}/edit"
//!   controller = "Users"
//!   action = "edit"
//! ```
//!
//! An entry with a nested `routes` list is a group, an entry with
//! `method`/`path`/`controller` is a leaf. `action` defaults to `index`.

use serde::Deserialize;
use std::path::Path;

use super::error::RouteError;
use super::method::{Method, UnknownMethod};
use super::table::RouteDecl;

const DEFAULT_ACTION: &str = "index";

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ManifestFile {
    #[serde(default)]
    routes: Vec<Entry>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct Entry {
    prefix: Option<String>,
    namespace: Option<String>,
    routes: Option<Vec<Entry>>,
    method: Option<String>,
    path: Option<String>,
    controller: Option<String>,
    action: Option<String>,
}

impl Entry {
    const fn has_group_fields(&self) -> bool {
        self.prefix.is_some() || self.namespace.is_some() || self.routes.is_some()
    }

    const fn has_leaf_fields(&self) -> bool {
        self.method.is_some()
            || self.path.is_some()
            || self.controller.is_some()
            || self.action.is_some()
    }
}

/// Read and parse a manifest file
pub fn load_manifest(path: impl AsRef<Path>) -> Result<Vec<RouteDecl>, RouteError> {
    let text = std::fs::read_to_string(path)?;
    parse_manifest(&text)
}

/// Parse manifest text into route declarations
pub fn parse_manifest(text: &str) -> Result<Vec<RouteDecl>, RouteError> {
    let file: ManifestFile = toml::from_str(text)?;
    convert_entries(file.routes, "routes")
}

fn convert_entries(entries: Vec<Entry>, location: &str) -> Result<Vec<RouteDecl>, RouteError> {
    entries
        .into_iter()
        .enumerate()
        .map(|(i, entry)| convert_entry(entry, &format!("{location}[{i}]")))
        .collect()
}

fn convert_entry(entry: Entry, location: &str) -> Result<RouteDecl, RouteError> {
    let invalid = |reason: &str| RouteError::InvalidGroupNesting {
        location: location.to_string(),
        reason: reason.to_string(),
    };

    match (entry.has_group_fields(), entry.has_leaf_fields()) {
        (true, true) => Err(invalid("entry mixes group fields with route fields")),
        (false, false) => Err(invalid("entry is neither a group nor a route")),
        (true, false) => {
            let children = entry
                .routes
                .ok_or_else(|| invalid("group declares no `routes` list"))?;
            Ok(RouteDecl::Group {
                prefix: entry.prefix.unwrap_or_default(),
                namespace: entry.namespace.unwrap_or_default(),
                children: convert_entries(children, &format!("{location}.routes"))?,
            })
        }
        (false, true) => {
            let method: Method = entry
                .method
                .as_deref()
                .ok_or_else(|| invalid("route declares no method"))?
                .parse()
                .map_err(|e: UnknownMethod| invalid(&e.to_string()))?;
            let pattern = entry
                .path
                .ok_or_else(|| invalid("route declares no path"))?;
            let controller = entry
                .controller
                .ok_or_else(|| invalid("route declares no controller"))?;
            Ok(RouteDecl::Leaf {
                method,
                pattern,
                controller,
                action: entry.action.unwrap_or_else(|| DEFAULT_ACTION.to_string()),
            })
        }
    }
}
