//! Route matching
//!
//! Resolves a method and path against the route table. Routes are scanned in
//! registration order and the first full match wins.

use super::error::RouteError;
use super::method::Method;
use super::pattern::{path_segments, strip_trailing_slash, Segment};
use super::table::{Route, RouteTable};

/// Path normalization switches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RouterOptions {
    /// Compare literal segments exactly; when false both sides are
    /// lower-cased before comparing
    pub case_sensitive: bool,
    /// Keep a trailing `/` significant; when false one trailing `/` is
    /// stripped from the request path (the root is never stripped)
    pub trailing_slash: bool,
}

/// Parameters captured from a matched path, in pattern order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(Vec<(String, String)>);

impl Params {
    /// Value bound to `name`; with repeated names the first binding is returned
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A successful match
#[derive(Debug)]
pub struct RouteMatch<'a, H> {
    pub route: &'a Route<H>,
    pub params: Params,
}

impl<H> RouteMatch<'_, H> {
    pub const fn handler(&self) -> &H {
        &self.route.handler
    }
}

/// Dispatcher over an immutable route table
#[derive(Debug, Clone)]
pub struct Router<H> {
    table: RouteTable<H>,
    options: RouterOptions,
}

impl<H> Router<H> {
    pub const fn new(table: RouteTable<H>, options: RouterOptions) -> Self {
        Self { table, options }
    }

    pub const fn table(&self) -> &RouteTable<H> {
        &self.table
    }

    /// Find the first route registered for `method` that matches `path`
    pub fn match_route(&self, method: Method, path: &str) -> Result<RouteMatch<'_, H>, RouteError> {
        let normalized = if self.options.trailing_slash {
            path
        } else {
            strip_trailing_slash(path)
        };
        let segments: Vec<&str> = path_segments(normalized).collect();

        self.table
            .iter()
            .filter(|route| route.method == method)
            .find_map(|route| {
                match_segments(route.segments(), &segments, self.options.case_sensitive)
                    .map(|params| RouteMatch { route, params })
            })
            .ok_or_else(|| RouteError::NoRouteMatch {
                method,
                path: path.to_string(),
            })
    }
}

/// Match request segments against a parsed pattern, binding parameters
fn match_segments(pattern: &[Segment], segments: &[&str], case_sensitive: bool) -> Option<Params> {
    if pattern.len() != segments.len() {
        return None;
    }

    let mut params = Vec::new();
    for (expected, actual) in pattern.iter().zip(segments) {
        if !expected.accepts(actual, case_sensitive) {
            return None;
        }
        if let Segment::Param(name) = expected {
            params.push((name.clone(), (*actual).to_string()));
        }
    }
    Some(Params(params))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::table::{HandlerRef, RouteDecl};

    fn router(decls: &[RouteDecl], options: RouterOptions) -> Router<HandlerRef> {
        Router::new(RouteTable::build(decls).unwrap(), options)
    }

    fn public_routes() -> Vec<RouteDecl> {
        vec![RouteDecl::group(
            "",
            "Public",
            vec![
                RouteDecl::get("/", "Home", "index"),
                RouteDecl::get("/articles", "Articles", "index"),
                RouteDecl::get("/article/{alias}", "Articles", "show"),
                RouteDecl::get("/page/{alias}", "Pages", "show"),
            ],
        )]
    }

    #[test]
    fn test_match_binds_parameters() {
        let router = router(&public_routes(), RouterOptions::default());
        let m = router
            .match_route(Method::Get, "/article/storytellers-legacy")
            .unwrap();
        assert_eq!(m.handler().to_string(), "Public::Articles::show");
        assert_eq!(m.params.get("alias"), Some("storytellers-legacy"));
        assert_eq!(m.params.len(), 1);
    }

    #[test]
    fn test_match_root() {
        let router = router(&public_routes(), RouterOptions::default());
        let m = router.match_route(Method::Get, "/").unwrap();
        assert_eq!(m.handler().to_string(), "Public::Home::index");
        assert!(m.params.is_empty());
    }

    #[test]
    fn test_match_is_deterministic() {
        let router = router(&public_routes(), RouterOptions::default());
        let first = router.match_route(Method::Get, "/page/about").unwrap();
        let second = router.match_route(Method::Get, "/page/about").unwrap();
        assert!(std::ptr::eq(first.route, second.route));
        assert_eq!(first.params, second.params);
    }

    #[test]
    fn test_first_match_wins() {
        let decls = vec![
            RouteDecl::get("/menus/{id}", "Menus", "edit"),
            RouteDecl::get("/menus/items", "Menus", "items"),
            RouteDecl::get("/menus/{id}", "Menus", "duplicate"),
        ];
        let router = router(&decls, RouterOptions::default());
        let m = router.match_route(Method::Get, "/menus/items").unwrap();
        assert_eq!(m.handler().action, "edit");
        assert_eq!(m.params.get("id"), Some("items"));

        let m = router.match_route(Method::Get, "/menus/7").unwrap();
        assert_eq!(m.handler().action, "edit");
    }

    #[test]
    fn test_method_filters_candidates() {
        let decls = vec![
            RouteDecl::get("/login", "Auth", "login"),
            RouteDecl::post("/login", "Auth", "authenticate"),
        ];
        let router = router(&decls, RouterOptions::default());
        assert_eq!(
            router.match_route(Method::Post, "/login").unwrap().handler().action,
            "authenticate"
        );
        assert!(matches!(
            router.match_route(Method::Delete, "/login"),
            Err(RouteError::NoRouteMatch { method: Method::Delete, .. })
        ));
    }

    #[test]
    fn test_group_composition_matches() {
        let decls = vec![RouteDecl::group(
            "/admin",
            "Admin",
            vec![RouteDecl::group(
                "/users",
                "",
                vec![RouteDecl::get("/{id}/edit", "Users", "edit")],
            )],
        )];
        let router = router(&decls, RouterOptions::default());
        let m = router.match_route(Method::Get, "/admin/users/42/edit").unwrap();
        assert_eq!(m.params.get("id"), Some("42"));
        assert_eq!(m.handler().to_string(), "Admin::Users::edit");
    }

    #[test]
    fn test_case_insensitive_literals() {
        let decls = vec![RouteDecl::get("/admin/login", "Auth", "login")];
        let folding = router(&decls, RouterOptions::default());
        assert!(folding.match_route(Method::Get, "/Admin/Login").is_ok());

        let strict = RouterOptions {
            case_sensitive: true,
            ..RouterOptions::default()
        };
        let exact = router(&decls, strict);
        assert!(exact.match_route(Method::Get, "/Admin/Login").is_err());
        assert!(exact.match_route(Method::Get, "/admin/login").is_ok());
    }

    #[test]
    fn test_param_values_keep_case() {
        let router = router(&public_routes(), RouterOptions::default());
        let m = router.match_route(Method::Get, "/ARTICLE/Mixed-Case").unwrap();
        assert_eq!(m.params.get("alias"), Some("Mixed-Case"));
    }

    #[test]
    fn test_trailing_slash_stripped_by_default() {
        let router = router(&public_routes(), RouterOptions::default());
        let with = router.match_route(Method::Get, "/articles/").unwrap();
        let without = router.match_route(Method::Get, "/articles").unwrap();
        assert!(std::ptr::eq(with.route, without.route));
        // Only one separator is stripped
        assert!(router.match_route(Method::Get, "/articles//").is_err());
    }

    #[test]
    fn test_trailing_slash_significant_when_enabled() {
        let options = RouterOptions {
            trailing_slash: true,
            ..RouterOptions::default()
        };
        let router = router(&public_routes(), options);
        assert!(router.match_route(Method::Get, "/articles").is_ok());
        assert!(router.match_route(Method::Get, "/articles/").is_err());
        assert!(router.match_route(Method::Get, "/").is_ok());
    }

    #[test]
    fn test_segment_count_mismatch() {
        let router = router(&public_routes(), RouterOptions::default());
        let err = router
            .match_route(Method::Get, "/article/a/b")
            .unwrap_err();
        assert_eq!(err.to_string(), "no route matches GET /article/a/b");
        assert!(router.match_route(Method::Get, "/article").is_err());
    }

    #[test]
    fn test_param_never_spans_separator_or_empty() {
        let router = router(&public_routes(), RouterOptions::default());
        assert!(router.match_route(Method::Get, "/article//").is_err());
        assert!(router.match_route(Method::Get, "/page/a/b").is_err());
    }

    #[test]
    fn test_arbitrary_input_never_panics() {
        let router = router(&public_routes(), RouterOptions::default());
        for path in ["", "no-leading-slash", "///", "/%zz/\u{0}", "/article/ü"] {
            let _ = router.match_route(Method::Get, path);
        }
        assert!(router.match_route(Method::Get, "").is_ok());
    }
}
