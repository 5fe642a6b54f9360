use serde::{Deserialize, Serialize};

/// A visited page that satisfied the inclusion rule, with the lines of its
/// text that matched the content pattern. The list is empty for pages
/// included because of `negate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub link: String,
    pub matches: Vec<String>,
}

impl SearchResult {
    pub fn new(link: impl Into<String>, matches: Vec<String>) -> Self {
        Self {
            link: link.into(),
            matches,
        }
    }
}

/// Counters for one traversal run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraversalStats {
    pub pages_fetched: usize,
    pub fetch_failures: usize,
    pub results: usize,
}
