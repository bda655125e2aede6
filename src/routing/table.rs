//! Route table construction
//!
//! Routes are declared as a tree of groups and leaves. Building the table
//! flattens the tree in declaration order, composing every enclosing group's
//! path prefix and namespace into each leaf, and resolves each leaf's
//! controller/action pair into a concrete handler value.

use std::collections::HashSet;
use std::fmt;

use super::error::RouteError;
use super::method::Method;
use super::pattern::{join_paths, parse_pattern, Segment};
use crate::logger;

/// Separator between namespace, controller and action names
pub const NAMESPACE_SEPARATOR: &str = "::";

/// Fully composed (namespace, controller, action) triple of a route
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HandlerRef {
    /// Enclosing group namespaces joined with `::`, possibly empty
    pub namespace: String,
    pub controller: String,
    pub action: String,
}

impl HandlerRef {
    pub fn new(namespace: &str, controller: &str, action: &str) -> Self {
        Self {
            namespace: namespace.to_string(),
            controller: controller.to_string(),
            action: action.to_string(),
        }
    }

    /// Namespace and controller, e.g. `Admin::Users`
    pub fn controller_path(&self) -> String {
        if self.namespace.is_empty() {
            self.controller.clone()
        } else {
            format!("{}{NAMESPACE_SEPARATOR}{}", self.namespace, self.controller)
        }
    }
}

impl fmt::Display for HandlerRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{NAMESPACE_SEPARATOR}{}", self.controller_path(), self.action)
    }
}

/// Turns a composed handler reference into a dispatchable value.
///
/// Implemented by the application's action enum so that every registered
/// route is checked against a real handler when the table is built.
pub trait Handler: Sized {
    fn resolve(handler_ref: &HandlerRef) -> Option<Self>;
}

/// Unchecked tables keep the raw reference as their handler
impl Handler for HandlerRef {
    fn resolve(handler_ref: &HandlerRef) -> Option<Self> {
        Some(handler_ref.clone())
    }
}

/// A route or group declaration, before composition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecl {
    Group {
        prefix: String,
        namespace: String,
        children: Vec<RouteDecl>,
    },
    Leaf {
        method: Method,
        pattern: String,
        controller: String,
        action: String,
    },
}

impl RouteDecl {
    pub fn group(prefix: &str, namespace: &str, children: Vec<Self>) -> Self {
        Self::Group {
            prefix: prefix.to_string(),
            namespace: namespace.to_string(),
            children,
        }
    }

    pub fn route(method: Method, pattern: &str, controller: &str, action: &str) -> Self {
        Self::Leaf {
            method,
            pattern: pattern.to_string(),
            controller: controller.to_string(),
            action: action.to_string(),
        }
    }

    pub fn get(pattern: &str, controller: &str, action: &str) -> Self {
        Self::route(Method::Get, pattern, controller, action)
    }

    pub fn post(pattern: &str, controller: &str, action: &str) -> Self {
        Self::route(Method::Post, pattern, controller, action)
    }
}

/// A registered route
#[derive(Debug, Clone)]
pub struct Route<H> {
    pub method: Method,
    /// Normalized effective pattern, e.g. `/admin/users/{id}/edit`
    pub pattern: String,
    pub handler: H,
    pub handler_ref: HandlerRef,
    segments: Vec<Segment>,
}

impl<H> Route<H> {
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }
}

/// Flat, ordered, immutable list of routes
#[derive(Debug, Clone)]
pub struct RouteTable<H> {
    routes: Vec<Route<H>>,
}

impl<H: Handler> RouteTable<H> {
    /// Flatten a declaration tree into a table.
    ///
    /// Duplicate method+pattern pairs are kept (the earlier one wins at match
    /// time) and reported as warnings.
    pub fn build(decls: &[RouteDecl]) -> Result<Self, RouteError> {
        let mut routes = Vec::new();
        let mut scope = Scope::default();
        collect(decls, &mut scope, &mut routes)?;

        warn_duplicates(&routes);
        Ok(Self { routes })
    }
}

impl<H> RouteTable<H> {
    pub fn routes(&self) -> &[Route<H>] {
        &self.routes
    }

    pub fn iter(&self) -> impl Iterator<Item = &Route<H>> {
        self.routes.iter()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

/// Prefixes and namespaces of the groups enclosing the current declaration
#[derive(Default)]
struct Scope<'a> {
    prefixes: Vec<&'a str>,
    namespaces: Vec<&'a str>,
}

impl Scope<'_> {
    fn namespace(&self) -> String {
        self.namespaces
            .iter()
            .copied()
            .filter(|ns| !ns.is_empty())
            .collect::<Vec<_>>()
            .join(NAMESPACE_SEPARATOR)
    }
}

fn warn_duplicates<H>(routes: &[Route<H>]) {
    let mut seen = HashSet::new();
    for route in routes {
        if !seen.insert((route.method, route.pattern.as_str())) {
            logger::log_duplicate_route(route.method.as_str(), &route.pattern);
        }
    }
}

fn collect<'a, H: Handler>(
    decls: &'a [RouteDecl],
    scope: &mut Scope<'a>,
    out: &mut Vec<Route<H>>,
) -> Result<(), RouteError> {
    for decl in decls {
        match decl {
            RouteDecl::Group {
                prefix,
                namespace,
                children,
            } => {
                scope.prefixes.push(prefix);
                scope.namespaces.push(namespace);
                let result = collect(children, scope, out);
                scope.prefixes.pop();
                scope.namespaces.pop();
                result?;
            }
            RouteDecl::Leaf {
                method,
                pattern,
                controller,
                action,
            } => {
                let pattern = join_paths(
                    scope
                        .prefixes
                        .iter()
                        .copied()
                        .chain(std::iter::once(pattern.as_str())),
                );
                let handler_ref = HandlerRef::new(&scope.namespace(), controller, action);
                let handler =
                    H::resolve(&handler_ref).ok_or_else(|| RouteError::UnknownHandler {
                        method: *method,
                        pattern: pattern.clone(),
                        handler: handler_ref.to_string(),
                    })?;

                out.push(Route {
                    method: *method,
                    segments: parse_pattern(&pattern),
                    pattern,
                    handler,
                    handler_ref,
                });
            }
        }
    }
    Ok(())
}
