//! Pagination module
//!
//! Splits a stored rich-text body into pages along an editor-inserted
//! page-break marker and serves one page at a time. Articles, static pages
//! and photobooks all paginate through the same [`Paginator`].

mod select;
mod split;

pub use select::{parse_page_number, select, select_items, ItemSelection, PageSelection};
pub use split::{render_full, split, split_trimmed};

/// Page-break marker emitted by the rich-text editor
pub const DEFAULT_PAGE_BREAK: &str = "<!-- pagebreak -->";

/// Markup shown in place of each marker when all pages are viewed at once
pub const DEFAULT_SEPARATOR: &str =
    r#"<div class="page-break-indicator"><span>Page Break</span></div>"#;

/// One page of a body, detached from the body it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    pub index: usize,
    pub total_pages: usize,
    pub content: String,
}

impl From<PageSelection<'_>> for PageView {
    fn from(selection: PageSelection<'_>) -> Self {
        Self {
            index: selection.index,
            total_pages: selection.total_pages,
            content: selection.content.to_string(),
        }
    }
}

/// Marker and splitting policy shared by every paginated content type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paginator {
    marker: String,
    separator: String,
    trim_pages: bool,
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_BREAK)
    }
}

impl Paginator {
    pub fn new(marker: &str) -> Self {
        Self {
            marker: marker.to_string(),
            separator: DEFAULT_SEPARATOR.to_string(),
            trim_pages: false,
        }
    }

    /// Trim fragments and drop empty ones when splitting
    #[must_use]
    pub const fn with_trimmed_pages(mut self, trim_pages: bool) -> Self {
        self.trim_pages = trim_pages;
        self
    }

    #[must_use]
    pub fn with_separator(mut self, separator: &str) -> Self {
        self.separator = separator.to_string();
        self
    }

    pub fn marker(&self) -> &str {
        &self.marker
    }

    /// Split `raw` according to the configured policy
    pub fn pages<'a>(&self, raw: &'a str) -> Vec<&'a str> {
        if self.trim_pages {
            split_trimmed(raw, &self.marker)
        } else {
            split(raw, &self.marker)
        }
    }

    /// Split `raw` and select the requested 1-based page
    pub fn paginate(&self, raw: &str, requested: Option<i64>) -> PageView {
        select(&self.pages(raw), requested).into()
    }

    /// The whole body with visible separators in place of the markers
    pub fn full(&self, raw: &str) -> String {
        render_full(raw, &self.marker, &self.separator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body() -> String {
        format!("<p>intro</p>{DEFAULT_PAGE_BREAK}\n{DEFAULT_PAGE_BREAK}<p>second</p>")
    }

    #[test]
    fn test_paginate_keeps_whitespace_pages_by_default() {
        let paginator = Paginator::default();
        let view = paginator.paginate(&body(), Some(2));
        assert_eq!(view.total_pages, 3);
        assert_eq!(view.content, "\n");
    }

    #[test]
    fn test_paginate_trimmed() {
        let paginator = Paginator::default().with_trimmed_pages(true);
        let view = paginator.paginate(&body(), Some(2));
        assert_eq!(view.total_pages, 2);
        assert_eq!(view.index, 2);
        assert_eq!(view.content, "<p>second</p>");
    }

    #[test]
    fn test_paginate_trimmed_blank_body() {
        let paginator = Paginator::default().with_trimmed_pages(true);
        let view = paginator.paginate("   ", Some(3));
        assert_eq!(
            view,
            PageView {
                index: 1,
                total_pages: 1,
                content: String::new()
            }
        );
    }

    #[test]
    fn test_custom_marker() {
        let paginator = Paginator::new("<!--page-->");
        assert_eq!(paginator.marker(), "<!--page-->");
        let view = paginator.paginate("a<!--page-->b", Some(99));
        assert_eq!(view.index, 2);
        assert_eq!(view.content, "b");
    }

    #[test]
    fn test_full_view() {
        let paginator = Paginator::default().with_separator("<hr>");
        assert_eq!(
            paginator.full(&body()),
            "<p>intro</p><hr>\n<hr><p>second</p>"
        );
    }
}
