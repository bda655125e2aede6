// Application state module
// Holds the immutable route table, content and pagination policy shared by
// every connection

use std::sync::Arc;
use tokio::sync::Notify;

use super::types::Config;
use crate::content::{ContentError, ContentStore};
use crate::controller::Action;
use crate::logger;
use crate::pagination::Paginator;
use crate::routes::default_routes;
use crate::routing::{load_manifest, RouteError, RouteTable, Router};

/// Errors that prevent the server from starting
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("route table: {0}")]
    Routes(#[from] RouteError),

    #[error("content store: {0}")]
    Content(#[from] ContentError),
}

/// Application state
pub struct AppState {
    pub config: Config,
    pub router: Router<Action>,
    pub content: ContentStore,
    pub paginator: Paginator,

    /// Notified once when the server should stop accepting connections
    pub shutdown_signal: Arc<Notify>,
}

impl AppState {
    /// Assemble state from already-built parts
    pub fn new(config: &Config, router: Router<Action>, content: ContentStore) -> Self {
        let paginator = Paginator::new(&config.content.page_break_marker)
            .with_trimmed_pages(config.content.trim_pages)
            .with_separator(&config.content.page_separator);

        Self {
            config: config.clone(),
            router,
            content,
            paginator,
            shutdown_signal: Arc::new(Notify::new()),
        }
    }

    /// Build the route table and load the content store named by `config`
    pub fn load(config: &Config) -> Result<Self, StartupError> {
        let decls = match &config.routing.manifest {
            Some(path) => load_manifest(path)?,
            None => default_routes(),
        };
        let table = RouteTable::build(&decls)?;
        let router = Router::new(table, config.routing.router_options());
        logger::log_route_table_built(router.table().len(), config.routing.manifest.as_deref());

        let content = ContentStore::load(&config.content.store_path)?;
        logger::log_content_loaded(content.len(), &config.content.store_path);

        Ok(Self::new(config, router, content))
    }
}
