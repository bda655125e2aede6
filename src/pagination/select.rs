//! Picking one page out of a split body

use std::num::IntErrorKind;

/// The page chosen for a request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSelection<'a> {
    /// 1-based, always within `1..=total_pages`
    pub index: usize,
    /// At least 1, even for a body with no pages
    pub total_pages: usize,
    pub content: &'a str,
}

/// Clamp `requested` into range and return that page.
///
/// A missing request means page 1. Never fails: out-of-range numbers snap to
/// the nearest bound, and an empty page list reads as one empty page.
pub fn select<'a>(pages: &[&'a str], requested: Option<i64>) -> PageSelection<'a> {
    let total_pages = pages.len().max(1);
    let index = clamp_page(requested, total_pages);

    PageSelection {
        index,
        total_pages,
        content: pages.get(index - 1).copied().unwrap_or(""),
    }
}

/// One page of a listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemSelection<'a, T> {
    /// 1-based, always within `1..=total_pages`
    pub index: usize,
    /// At least 1, even for an empty listing
    pub total_pages: usize,
    pub items: &'a [T],
}

/// Cut a listing into pages of `per_page` items and return the requested one.
///
/// Uses the same clamping as [`select`]; a `per_page` of 0 is treated as 1.
pub fn select_items<T>(items: &[T], per_page: usize, requested: Option<i64>) -> ItemSelection<'_, T> {
    let per_page = per_page.max(1);
    let total_pages = items.len().div_ceil(per_page).max(1);
    let index = clamp_page(requested, total_pages);
    let start = ((index - 1) * per_page).min(items.len());
    let end = (start + per_page).min(items.len());

    ItemSelection {
        index,
        total_pages,
        items: &items[start..end],
    }
}

/// Clamp a requested 1-based page into `1..=total_pages`; absent means 1
fn clamp_page(requested: Option<i64>, total_pages: usize) -> usize {
    match requested {
        None => 1,
        Some(n) if n <= 1 => 1,
        Some(n) => usize::try_from(n).map_or(total_pages, |n| n.min(total_pages)),
    }
}

/// Read a page number from a query value.
///
/// Surrounding whitespace is ignored, non-numeric text gives `None`, and
/// numbers too large for `i64` saturate so they still clamp to the last page.
pub fn parse_page_number(value: Option<&str>) -> Option<i64> {
    let value = value?.trim();
    match value.parse::<i64>() {
        Ok(n) => Some(n),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Some(i64::MAX),
            IntErrorKind::NegOverflow => Some(i64::MIN),
            _ => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGES: [&str; 3] = ["first", "second", "third"];

    #[test]
    fn test_select_in_range() {
        let sel = select(&PAGES, Some(2));
        assert_eq!(sel.index, 2);
        assert_eq!(sel.total_pages, 3);
        assert_eq!(sel.content, "second");
    }

    #[test]
    fn test_select_clamps_low() {
        assert_eq!(select(&PAGES, Some(0)).index, 1);
        assert_eq!(select(&PAGES, Some(-5)).index, 1);
        assert_eq!(select(&PAGES, Some(i64::MIN)).content, "first");
    }

    #[test]
    fn test_select_clamps_high() {
        let sel = select(&PAGES, Some(99));
        assert_eq!(sel.index, 3);
        assert_eq!(sel.content, "third");
        assert_eq!(select(&PAGES, Some(i64::MAX)).index, 3);
    }

    #[test]
    fn test_select_absent_is_first() {
        let sel = select(&PAGES, None);
        assert_eq!(sel.index, 1);
        assert_eq!(sel.content, "first");
    }

    #[test]
    fn test_select_single_empty_page() {
        for requested in [None, Some(-1), Some(0), Some(1), Some(7)] {
            let sel = select(&[""], requested);
            assert_eq!(sel.index, 1);
            assert_eq!(sel.total_pages, 1);
            assert_eq!(sel.content, "");
        }
    }

    #[test]
    fn test_select_no_pages() {
        let sel = select(&[], Some(4));
        assert_eq!(sel.index, 1);
        assert_eq!(sel.total_pages, 1);
        assert_eq!(sel.content, "");
    }

    #[test]
    fn test_parse_page_number() {
        assert_eq!(parse_page_number(Some("2")), Some(2));
        assert_eq!(parse_page_number(Some(" 3 ")), Some(3));
        assert_eq!(parse_page_number(Some("-4")), Some(-4));
        assert_eq!(parse_page_number(Some("two")), None);
        assert_eq!(parse_page_number(Some("2abc")), None);
        assert_eq!(parse_page_number(Some("")), None);
        assert_eq!(parse_page_number(None), None);
    }

    #[test]
    fn test_parse_page_number_saturates() {
        assert_eq!(parse_page_number(Some("99999999999999999999999")), Some(i64::MAX));
        assert_eq!(parse_page_number(Some("-99999999999999999999999")), Some(i64::MIN));
    }

    #[test]
    fn test_select_items() {
        let items: Vec<u32> = (1..=7).collect();
        let page = select_items(&items, 3, Some(2));
        assert_eq!(page.index, 2);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.items, &[4, 5, 6]);

        let last = select_items(&items, 3, Some(40));
        assert_eq!(last.index, 3);
        assert_eq!(last.items, &[7]);

        assert_eq!(select_items(&items, 3, Some(-2)).items, &[1, 2, 3]);
    }

    #[test]
    fn test_select_items_empty_listing() {
        let items: Vec<u32> = Vec::new();
        let page = select_items(&items, 10, Some(5));
        assert_eq!(page.index, 1);
        assert_eq!(page.total_pages, 1);
        assert!(page.items.is_empty());
    }

    #[test]
    fn test_select_items_zero_per_page() {
        let items = ["a", "b"];
        let page = select_items(&items, 0, Some(2));
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.items, &["b"]);
    }

    #[test]
    fn test_non_numeric_selects_first_page() {
        let sel = select(&PAGES, parse_page_number(Some("abc")));
        assert_eq!(sel.index, 1);
    }
}
