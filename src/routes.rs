//! Built-in route registrations
//!
//! Used when no route manifest is configured.

use crate::routing::RouteDecl;

/// Public site and admin panel routes, in matching priority order
pub fn default_routes() -> Vec<RouteDecl> {
    vec![
        RouteDecl::group(
            "",
            "Public",
            vec![
                RouteDecl::get("/", "Home", "index"),
                RouteDecl::get("/articles", "Articles", "index"),
                RouteDecl::get("/photobooks", "Photobooks", "index"),
                RouteDecl::get("/article/{alias}", "Articles", "show"),
                RouteDecl::get("/photobook/{alias}", "Photobooks", "show"),
                RouteDecl::get("/page/{alias}", "Pages", "show"),
            ],
        ),
        RouteDecl::group(
            "/admin",
            "Admin",
            vec![
                RouteDecl::get("/login", "Auth", "login"),
                RouteDecl::post("/login", "Auth", "authenticate"),
                RouteDecl::post("/logout", "Auth", "logout"),
                RouteDecl::get("/dashboard", "Dashboard", "index"),
                RouteDecl::group(
                    "/users",
                    "",
                    vec![
                        RouteDecl::get("/", "Users", "index"),
                        RouteDecl::get("/create", "Users", "create"),
                        RouteDecl::post("/store", "Users", "store"),
                        RouteDecl::get("/{id}/edit", "Users", "edit"),
                        RouteDecl::post("/{id}/update", "Users", "update"),
                        RouteDecl::post("/{id}/delete", "Users", "delete"),
                    ],
                ),
                RouteDecl::group(
                    "/content",
                    "",
                    vec![
                        RouteDecl::get("/", "Content", "index"),
                        RouteDecl::get("/create", "Content", "create"),
                        RouteDecl::post("/store", "Content", "store"),
                        RouteDecl::get("/{id}/edit", "Content", "edit"),
                        RouteDecl::post("/{id}/update", "Content", "update"),
                        RouteDecl::post("/{id}/delete", "Content", "delete"),
                        RouteDecl::post("/autosave", "Content", "autosave"),
                    ],
                ),
                RouteDecl::get("/reorder", "Content", "reorder"),
                RouteDecl::post("/reorder", "Content", "updateOrder"),
                RouteDecl::post("/upload/tinymce", "Upload", "tinymce"),
                RouteDecl::group(
                    "/pages",
                    "",
                    vec![
                        RouteDecl::get("/", "Pages", "index"),
                        RouteDecl::get("/create", "Pages", "create"),
                        RouteDecl::post("/store", "Pages", "store"),
                        RouteDecl::get("/{id}/edit", "Pages", "edit"),
                        RouteDecl::post("/{id}/update", "Pages", "update"),
                        RouteDecl::post("/{id}/delete", "Pages", "delete"),
                    ],
                ),
                RouteDecl::get("/settings", "Settings", "index"),
                RouteDecl::post("/settings/update", "Settings", "update"),
                RouteDecl::group(
                    "/menus",
                    "",
                    vec![
                        RouteDecl::get("/", "Menus", "index"),
                        RouteDecl::get("/{id}", "Menus", "edit"),
                        RouteDecl::post("/{id}", "Menus", "update"),
                        RouteDecl::post("/{id}/items", "Menus", "addItem"),
                        RouteDecl::post("/items/{id}/delete", "Menus", "deleteItem"),
                        RouteDecl::post("/reorder", "Menus", "reorderItems"),
                    ],
                ),
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::{Action, AdminAction, PublicAction};
    use crate::routing::{Method, RouteError, RouteTable, Router, RouterOptions};

    fn router() -> Router<Action> {
        Router::new(
            RouteTable::build(&default_routes()).unwrap(),
            RouterOptions::default(),
        )
    }

    #[test]
    fn test_every_default_route_resolves() {
        let table: RouteTable<Action> = RouteTable::build(&default_routes()).unwrap();
        assert_eq!(table.len(), 40);
    }

    #[test]
    fn test_public_routes() {
        let router = router();
        let m = router.match_route(Method::Get, "/article/storytellers-legacy").unwrap();
        assert_eq!(*m.handler(), Action::Public(PublicAction::ArticlesShow));
        assert_eq!(m.params.get("alias"), Some("storytellers-legacy"));
        assert_eq!(
            *router.match_route(Method::Get, "/").unwrap().handler(),
            Action::Public(PublicAction::HomeIndex)
        );
    }

    #[test]
    fn test_admin_routes() {
        let router = router();
        let m = router.match_route(Method::Get, "/admin/users/42/edit").unwrap();
        assert_eq!(*m.handler(), Action::Admin(AdminAction::UsersEdit));
        assert_eq!(m.params.get("id"), Some("42"));

        let m = router.match_route(Method::Get, "/Admin/Login").unwrap();
        assert_eq!(*m.handler(), Action::Admin(AdminAction::AuthLogin));

        let m = router.match_route(Method::Get, "/admin/users/").unwrap();
        assert_eq!(*m.handler(), Action::Admin(AdminAction::UsersIndex));
    }

    #[test]
    fn test_registration_order_decides_overlaps() {
        // `/menus/{id}` (POST) is declared before `/menus/reorder`
        let router = router();
        let m = router.match_route(Method::Post, "/admin/menus/reorder").unwrap();
        assert_eq!(*m.handler(), Action::Admin(AdminAction::MenusUpdate));
        assert_eq!(m.params.get("id"), Some("reorder"));
    }

    #[test]
    fn test_sample_manifest_builds() {
        let decls = crate::routing::parse_manifest(include_str!("../routes.toml")).unwrap();
        let table: RouteTable<Action> = RouteTable::build(&decls).unwrap();
        assert_eq!(table.len(), 6);
    }

    #[test]
    fn test_unknown_path() {
        assert!(matches!(
            router().match_route(Method::Get, "/admin/users/42"),
            Err(RouteError::NoRouteMatch { .. })
        ));
    }
}
