//! In-memory content store loaded from a TOML file
//!
//! ```toml
//! [[content]]
//! id = 1
//! kind = "article"
//! status = "published"
//! title = "The Storyteller's Legacy"
//! alias = "storytellers-legacy"
//! body = "<p>One</p><!-- pagebreak --><p>Two</p>"
//! ```

use serde::Deserialize;
use std::cmp::Reverse;
use std::collections::HashSet;
use std::path::Path;

use super::{ContentKind, ContentRecord};
use crate::logger;

#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("failed to read content store: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse content store: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("duplicate {} alias `{alias}`", .kind.label())]
    DuplicateAlias { kind: ContentKind, alias: String },
}

#[derive(Debug, Default, Deserialize)]
struct StoreFile {
    #[serde(default)]
    content: Vec<ContentRecord>,
}

/// Read-only collection of content records
#[derive(Debug, Clone, Default)]
pub struct ContentStore {
    records: Vec<ContentRecord>,
}

impl ContentStore {
    /// Build a store, rejecting records that reuse an alias within a kind
    pub fn new(records: Vec<ContentRecord>) -> Result<Self, ContentError> {
        {
            let mut seen = HashSet::new();
            if let Some(dup) = records
                .iter()
                .find(|r| !seen.insert((r.kind, r.alias.as_str())))
            {
                return Err(ContentError::DuplicateAlias {
                    kind: dup.kind,
                    alias: dup.alias.clone(),
                });
            }
        }
        Ok(Self { records })
    }

    pub fn from_toml(text: &str) -> Result<Self, ContentError> {
        let file: StoreFile = toml::from_str(text)?;
        Self::new(file.content)
    }

    /// Load the store file; a missing file gives an empty store
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ContentError> {
        let path = path.as_ref();
        if !path.exists() {
            logger::log_warning(&format!(
                "Content store {} not found, serving no content",
                path.display()
            ));
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)?;
        Self::from_toml(&text)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Published record of `kind` with `alias`
    pub fn find_published(&self, kind: ContentKind, alias: &str) -> Option<&ContentRecord> {
        self.records
            .iter()
            .find(|r| r.kind == kind && r.alias == alias && r.is_published())
    }

    /// Published records of `kind`. Articles come newest first,
    /// pages and photobooks by title.
    pub fn published(&self, kind: ContentKind) -> Vec<&ContentRecord> {
        let mut records: Vec<_> = self
            .records
            .iter()
            .filter(|r| r.kind == kind && r.is_published())
            .collect();
        match kind {
            ContentKind::Article => records.sort_by_key(|r| Reverse(r.id)),
            ContentKind::Page | ContentKind::Photobook => {
                records.sort_by(|a, b| a.title.cmp(&b.title));
            }
        }
        records
    }

    /// Up to `limit` published records of `kind`, newest first
    pub fn recent(&self, kind: ContentKind, limit: usize) -> Vec<&ContentRecord> {
        let mut records: Vec<_> = self
            .records
            .iter()
            .filter(|r| r.kind == kind && r.is_published())
            .collect();
        records.sort_by_key(|r| Reverse(r.id));
        records.truncate(limit);
        records
    }
}
