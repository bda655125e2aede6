//! Controller module
//!
//! Every controller/action pair the site registers is a variant of
//! [`Action`]. Route tables are built as `RouteTable<Action>`, so a route
//! naming a controller or action that does not exist fails at startup, and
//! dispatch is an exhaustive `match` instead of a lookup by name.

mod public;

use crate::config::AppState;
use crate::handler::RequestContext;
use crate::routing::{Handler, HandlerRef, Params};
use crate::view;

/// Actions served by the public site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PublicAction {
    HomeIndex,
    ArticlesIndex,
    ArticlesShow,
    PhotobooksIndex,
    PhotobooksShow,
    PagesShow,
}

/// Actions served by the admin panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdminAction {
    AuthLogin,
    AuthAuthenticate,
    AuthLogout,
    DashboardIndex,
    UsersIndex,
    UsersCreate,
    UsersStore,
    UsersEdit,
    UsersUpdate,
    UsersDelete,
    ContentIndex,
    ContentCreate,
    ContentStore,
    ContentEdit,
    ContentUpdate,
    ContentDelete,
    ContentReorder,
    ContentUpdateOrder,
    ContentAutosave,
    UploadTinymce,
    PagesIndex,
    PagesCreate,
    PagesStore,
    PagesEdit,
    PagesUpdate,
    PagesDelete,
    SettingsIndex,
    SettingsUpdate,
    MenusIndex,
    MenusEdit,
    MenusUpdate,
    MenusAddItem,
    MenusDeleteItem,
    MenusReorderItems,
}

/// A dispatchable controller action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Public(PublicAction),
    Admin(AdminAction),
}

const PUBLIC_NAMESPACE: &str = "Public";
const ADMIN_NAMESPACE: &str = "Admin";

const PUBLIC_ACTIONS: &[(&str, &str, PublicAction)] = &[
    ("Home", "index", PublicAction::HomeIndex),
    ("Articles", "index", PublicAction::ArticlesIndex),
    ("Articles", "show", PublicAction::ArticlesShow),
    ("Photobooks", "index", PublicAction::PhotobooksIndex),
    ("Photobooks", "show", PublicAction::PhotobooksShow),
    ("Pages", "show", PublicAction::PagesShow),
];

const ADMIN_ACTIONS: &[(&str, &str, AdminAction)] = &[
    ("Auth", "login", AdminAction::AuthLogin),
    ("Auth", "authenticate", AdminAction::AuthAuthenticate),
    ("Auth", "logout", AdminAction::AuthLogout),
    ("Dashboard", "index", AdminAction::DashboardIndex),
    ("Users", "index", AdminAction::UsersIndex),
    ("Users", "create", AdminAction::UsersCreate),
    ("Users", "store", AdminAction::UsersStore),
    ("Users", "edit", AdminAction::UsersEdit),
    ("Users", "update", AdminAction::UsersUpdate),
    ("Users", "delete", AdminAction::UsersDelete),
    ("Content", "index", AdminAction::ContentIndex),
    ("Content", "create", AdminAction::ContentCreate),
    ("Content", "store", AdminAction::ContentStore),
    ("Content", "edit", AdminAction::ContentEdit),
    ("Content", "update", AdminAction::ContentUpdate),
    ("Content", "delete", AdminAction::ContentDelete),
    ("Content", "reorder", AdminAction::ContentReorder),
    ("Content", "updateOrder", AdminAction::ContentUpdateOrder),
    ("Content", "autosave", AdminAction::ContentAutosave),
    ("Upload", "tinymce", AdminAction::UploadTinymce),
    ("Pages", "index", AdminAction::PagesIndex),
    ("Pages", "create", AdminAction::PagesCreate),
    ("Pages", "store", AdminAction::PagesStore),
    ("Pages", "edit", AdminAction::PagesEdit),
    ("Pages", "update", AdminAction::PagesUpdate),
    ("Pages", "delete", AdminAction::PagesDelete),
    ("Settings", "index", AdminAction::SettingsIndex),
    ("Settings", "update", AdminAction::SettingsUpdate),
    ("Menus", "index", AdminAction::MenusIndex),
    ("Menus", "edit", AdminAction::MenusEdit),
    ("Menus", "update", AdminAction::MenusUpdate),
    ("Menus", "addItem", AdminAction::MenusAddItem),
    ("Menus", "deleteItem", AdminAction::MenusDeleteItem),
    ("Menus", "reorderItems", AdminAction::MenusReorderItems),
];

fn lookup<T: Copy>(table: &[(&str, &str, T)], controller: &str, action: &str) -> Option<T> {
    table
        .iter()
        .find(|(c, a, _)| *c == controller && *a == action)
        .map(|(_, _, value)| *value)
}

impl Handler for Action {
    fn resolve(handler_ref: &HandlerRef) -> Option<Self> {
        let HandlerRef {
            namespace,
            controller,
            action,
        } = handler_ref;
        match namespace.as_str() {
            PUBLIC_NAMESPACE => lookup(PUBLIC_ACTIONS, controller, action).map(Self::Public),
            ADMIN_NAMESPACE => lookup(ADMIN_ACTIONS, controller, action).map(Self::Admin),
            _ => None,
        }
    }
}

/// Rendered outcome of an action, before it becomes an HTTP response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub status: u16,
    pub body: String,
}

impl Reply {
    pub const fn ok(body: String) -> Self {
        Self { status: 200, body }
    }

    pub fn not_found() -> Self {
        Self {
            status: 404,
            body: view::render_not_found(),
        }
    }

    pub fn not_implemented(what: &str) -> Self {
        Self {
            status: 501,
            body: view::render_not_implemented(what),
        }
    }
}

/// Run `action` for a matched request
pub fn dispatch(action: Action, params: &Params, ctx: &RequestContext, state: &AppState) -> Reply {
    match action {
        Action::Public(action) => public::dispatch(action, params, ctx, state),
        // Auth, sessions and forms live in the admin application
        Action::Admin(action) => Reply::not_implemented(&format!("{action:?}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_public_and_admin() {
        assert_eq!(
            Action::resolve(&HandlerRef::new("Public", "Articles", "show")),
            Some(Action::Public(PublicAction::ArticlesShow))
        );
        assert_eq!(
            Action::resolve(&HandlerRef::new("Admin", "Menus", "deleteItem")),
            Some(Action::Admin(AdminAction::MenusDeleteItem))
        );
    }

    #[test]
    fn test_resolve_requires_namespace() {
        assert_eq!(Action::resolve(&HandlerRef::new("", "Articles", "show")), None);
        assert_eq!(Action::resolve(&HandlerRef::new("Admin", "Articles", "show")), None);
        assert_eq!(Action::resolve(&HandlerRef::new("Public", "Articles", "Show")), None);
    }

    #[test]
    fn test_action_tables_have_no_duplicates() {
        for (i, (c, a, _)) in PUBLIC_ACTIONS.iter().enumerate() {
            assert!(!PUBLIC_ACTIONS[i + 1..].iter().any(|(c2, a2, _)| c == c2 && a == a2));
        }
        for (i, (c, a, _)) in ADMIN_ACTIONS.iter().enumerate() {
            assert!(!ADMIN_ACTIONS[i + 1..].iter().any(|(c2, a2, _)| c == c2 && a == a2));
        }
    }
}
