//! Path template parsing and normalization
//!
//! A pattern is a `/`-separated list of segments. A segment wrapped in braces
//! (`{alias}`) captures exactly one request segment under that name; every
//! other segment is a literal.

/// One parsed pattern segment
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Must equal the request segment (modulo case folding)
    Literal(String),
    /// Accepts any single non-empty request segment
    Param(String),
}

impl Segment {
    /// Classify a raw pattern segment
    pub fn parse(raw: &str) -> Self {
        match raw.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
            Some(name) if !name.is_empty() => Self::Param(name.to_string()),
            _ => Self::Literal(raw.to_string()),
        }
    }

    /// Test a single request segment against this pattern segment
    pub fn accepts(&self, segment: &str, case_sensitive: bool) -> bool {
        match self {
            Self::Param(_) => !segment.is_empty(),
            Self::Literal(literal) if case_sensitive => literal == segment,
            Self::Literal(literal) => eq_folded(literal, segment),
        }
    }
}

/// Parse a normalized pattern into segments
pub fn parse_pattern(pattern: &str) -> Vec<Segment> {
    path_segments(pattern).map(Segment::parse).collect()
}

/// Concatenate prefixes and a leaf pattern into one normalized pattern.
///
/// Runs of `/` collapse to one, the result always starts with `/`, and a
/// trailing `/` is dropped unless the whole pattern is the root.
pub fn join_paths<'a>(parts: impl IntoIterator<Item = &'a str>) -> String {
    let mut joined = String::from("/");
    for segment in parts
        .into_iter()
        .flat_map(|part| part.split('/'))
        .filter(|segment| !segment.is_empty())
    {
        if joined.len() > 1 {
            joined.push('/');
        }
        joined.push_str(segment);
    }
    joined
}

/// Split a path into its segments after dropping one leading `/`.
///
/// The root path yields no segments. Inner empty segments are kept so that
/// `//x` never lines up with a two-segment pattern.
pub fn path_segments(path: &str) -> impl Iterator<Item = &str> {
    let rest = path.strip_prefix('/').unwrap_or(path);
    let mut iter = rest.split('/');
    if rest.is_empty() {
        // `"".split('/')` yields one empty item; the root has none
        iter.next();
    }
    iter
}

/// Strip a single trailing `/`, never reducing the root to an empty path
pub fn strip_trailing_slash(path: &str) -> &str {
    if path.len() > 1 {
        path.strip_suffix('/').unwrap_or(path)
    } else {
        path
    }
}

/// Unicode case-insensitive comparison without allocating
fn eq_folded(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}
