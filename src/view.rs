//! Minimal HTML rendering for the public site
//!
//! Titles and summaries are escaped. Bodies are stored rich text and are
//! inserted as they are.

use std::fmt::Write;

use crate::content::ContentRecord;
use crate::pagination::{ItemSelection, PageView};

/// Escape text for use in HTML element content and quoted attributes
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn layout(title: &str, main: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{}</title>\n</head>\n<body>\n<main>\n{main}\n</main>\n</body>\n</html>\n",
        escape_html(title)
    )
}

/// Query parameters of a page link
pub struct LinkParams<'a> {
    pub page_param: &'a str,
    pub view_param: &'a str,
}

/// Previous/next links plus a position indicator. Empty for single-page
/// bodies.
fn page_nav(base: &str, param: &str, index: usize, total_pages: usize) -> String {
    if total_pages <= 1 {
        return String::new();
    }
    let mut nav = String::from("<nav class=\"pagination\">");
    if index > 1 {
        let _ = write!(
            nav,
            "<a rel=\"prev\" href=\"{base}?{param}={}\">Previous</a> ",
            index - 1
        );
    }
    let _ = write!(nav, "<span>Page {index} of {total_pages}</span>");
    if index < total_pages {
        let _ = write!(
            nav,
            " <a rel=\"next\" href=\"{base}?{param}={}\">Next</a>",
            index + 1
        );
    }
    nav.push_str("</nav>");
    nav
}

/// One page of a record. `allow_full` adds a link to the full view.
pub fn render_record(
    record: &ContentRecord,
    page: &PageView,
    links: &LinkParams<'_>,
    allow_full: bool,
) -> String {
    let url = escape_html(&record.url());
    let mut main = format!(
        "<article class=\"{}\">\n<h1>{}</h1>\n<div class=\"content\">\n{}\n</div>\n",
        record.kind.label().to_ascii_lowercase(),
        escape_html(&record.title),
        page.content
    );
    main.push_str(&page_nav(&url, links.page_param, page.index, page.total_pages));
    if allow_full && page.total_pages > 1 {
        let _ = write!(
            main,
            "\n<a class=\"view-all\" href=\"{url}?{}=full\">View all pages</a>",
            links.view_param
        );
    }
    main.push_str("\n</article>");
    layout(&record.title, &main)
}

/// A record's whole body with page breaks shown as separators
pub fn render_full(record: &ContentRecord, body: &str) -> String {
    let main = format!(
        "<article class=\"{} full\">\n<h1>{}</h1>\n<div class=\"content\">\n{body}\n</div>\n\
         <a class=\"view-paged\" href=\"{}\">View page by page</a>\n</article>",
        record.kind.label().to_ascii_lowercase(),
        escape_html(&record.title),
        escape_html(&record.url()),
    );
    layout(&record.title, &main)
}

/// Linked titles with summaries, or a placeholder when there are none
fn item_list(out: &mut String, records: &[&ContentRecord]) {
    if records.is_empty() {
        out.push_str("<p class=\"empty\">Nothing published yet.</p>\n");
        return;
    }
    out.push_str("<ul class=\"listing\">\n");
    for record in records {
        let _ = write!(
            out,
            "<li><a href=\"{}\">{}</a>",
            escape_html(&record.url()),
            escape_html(&record.title)
        );
        if let Some(summary) = &record.summary {
            let _ = write!(out, "<p>{}</p>", escape_html(summary));
        }
        out.push_str("</li>\n");
    }
    out.push_str("</ul>\n");
}

/// Home page: recent articles and recent photobooks, each linking to its
/// full index
pub fn render_home(articles: &[&ContentRecord], photobooks: &[&ContentRecord]) -> String {
    let mut main = String::from(
        "<h1>Home</h1>\n<section class=\"recent-articles\">\n<h2>Recent articles</h2>\n",
    );
    item_list(&mut main, articles);
    main.push_str("<a href=\"/articles\">All articles</a>\n</section>\n");
    main.push_str("<section class=\"recent-photobooks\">\n<h2>Recent photobooks</h2>\n");
    item_list(&mut main, photobooks);
    main.push_str("<a href=\"/photobooks\">All photobooks</a>\n</section>");
    layout("Home", &main)
}

/// A page of a listing with links to each item
pub fn render_listing(
    heading: &str,
    base: &str,
    selection: &ItemSelection<'_, &ContentRecord>,
    list_page_param: &str,
) -> String {
    let mut main = format!("<h1>{}</h1>\n", escape_html(heading));
    item_list(&mut main, selection.items);
    main.push_str(&page_nav(
        base,
        list_page_param,
        selection.index,
        selection.total_pages,
    ));
    layout(heading, &main)
}

pub fn render_not_found() -> String {
    layout(
        "Not Found",
        "<h1>404 Not Found</h1>\n<p>The requested page does not exist.</p>",
    )
}

pub fn render_not_implemented(what: &str) -> String {
    layout(
        "Not Implemented",
        &format!(
            "<h1>501 Not Implemented</h1>\n<p>{} is not served by this site.</p>",
            escape_html(what)
        ),
    )
}
