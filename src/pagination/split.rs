//! Splitting a body into pages along a literal marker

/// Split `raw` on every non-overlapping occurrence of `marker`.
///
/// The result is never empty, and joining it back with `marker` yields `raw`.
/// An empty marker never splits.
pub fn split<'a>(raw: &'a str, marker: &str) -> Vec<&'a str> {
    if marker.is_empty() {
        return vec![raw];
    }
    raw.split(marker).collect()
}

/// Split, trim every fragment and drop the ones left empty.
///
/// A body made only of whitespace and markers yields no pages at all.
pub fn split_trimmed<'a>(raw: &'a str, marker: &str) -> Vec<&'a str> {
    split(raw, marker)
        .into_iter()
        .map(str::trim)
        .filter(|page| !page.is_empty())
        .collect()
}

/// Show every page at once, with each marker replaced by `separator`
pub fn render_full(raw: &str, marker: &str, separator: &str) -> String {
    if marker.is_empty() {
        return raw.to_string();
    }
    raw.replace(marker, separator)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MARKER: &str = "<!--page-->";

    #[test]
    fn test_split_without_marker() {
        assert_eq!(split("hello world", MARKER), vec!["hello world"]);
    }

    #[test]
    fn test_split_empty_body() {
        assert_eq!(split("", MARKER), vec![""]);
    }

    #[test]
    fn test_split_keeps_whitespace_pages() {
        let raw = "<p>one</p><!--page-->  <!--page--><p>three</p>";
        assert_eq!(split(raw, MARKER), vec!["<p>one</p>", "  ", "<p>three</p>"]);
    }

    #[test]
    fn test_split_edges() {
        assert_eq!(split("<!--page-->a<!--page-->", MARKER), vec!["", "a", ""]);
        assert_eq!(split("<!--page--><!--page-->", MARKER), vec!["", "", ""]);
    }

    #[test]
    fn test_split_round_trip() {
        let bodies = [
            "",
            "plain",
            "a<!--page-->b",
            "<!--page-->",
            "<!--page--><!--page-->x<!--page-->",
            "  leading<!--page-->trailing  \n",
            "<!--page<!--page-->-->",
        ];
        for raw in bodies {
            assert_eq!(split(raw, MARKER).join(MARKER), raw, "round trip of {raw:?}");
        }
    }

    #[test]
    fn test_split_non_overlapping() {
        assert_eq!(split("aaaa", "aa"), vec!["", "", ""]);
        assert_eq!(split("aaa", "aa"), vec!["", "a"]);
    }

    #[test]
    fn test_empty_marker_never_splits() {
        assert_eq!(split("abc", ""), vec!["abc"]);
        assert_eq!(render_full("abc", "", "|"), "abc");
    }

    #[test]
    fn test_split_trimmed() {
        let raw = "\n<p>one</p>\n<!--page-->   <!--page-->\n<p>three</p>";
        assert_eq!(split_trimmed(raw, MARKER), vec!["<p>one</p>", "<p>three</p>"]);
        assert!(split_trimmed("  <!--page-->\n", MARKER).is_empty());
        assert!(split_trimmed("", MARKER).is_empty());
    }

    #[test]
    fn test_render_full() {
        assert_eq!(render_full("a<!--page-->b<!--page-->c", MARKER, "<hr>"), "a<hr>b<hr>c");
        assert_eq!(render_full("no breaks", MARKER, "<hr>"), "no breaks");
    }
}
