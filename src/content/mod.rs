//! Content module
//!
//! Content records served by the public site and the store they are looked
//! up in. Articles, static pages and photobooks share one record shape and
//! differ only in their kind.

mod store;

pub use store::{ContentError, ContentStore};

use serde::Deserialize;

use crate::pagination::{PageView, Paginator};

/// Kind of a content item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    Article,
    Page,
    Photobook,
}

impl ContentKind {
    /// Human-readable label
    pub const fn label(self) -> &'static str {
        match self {
            Self::Article => "Article",
            Self::Page => "Page",
            Self::Photobook => "Photobook",
        }
    }

    /// Public URL of an item of this kind
    pub fn url(self, alias: &str) -> String {
        match self {
            Self::Article => format!("/article/{alias}"),
            Self::Page => format!("/page/{alias}"),
            Self::Photobook => format!("/photobook/{alias}"),
        }
    }
}

/// Publication status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentStatus {
    #[default]
    Draft,
    Published,
    Archived,
}

/// A stored content item
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ContentRecord {
    pub id: u64,
    pub kind: ContentKind,
    #[serde(default)]
    pub status: ContentStatus,
    pub title: String,
    /// Unique per kind; used in public URLs
    pub alias: String,
    #[serde(default)]
    pub summary: Option<String>,
    /// Rich-text body, possibly containing page-break markers
    #[serde(default)]
    pub body: String,
}

impl ContentRecord {
    pub fn is_published(&self) -> bool {
        self.status == ContentStatus::Published
    }

    pub fn url(&self) -> String {
        self.kind.url(&self.alias)
    }

    /// The requested page of this record's body
    pub fn page(&self, paginator: &Paginator, requested: Option<i64>) -> PageView {
        paginator.paginate(&self.body, requested)
    }
}
