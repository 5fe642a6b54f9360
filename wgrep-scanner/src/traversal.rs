use crate::error::Result;
use crate::fetch::Fetch;
use crate::links::LinkFilter;
use crate::matcher::ContentMatcher;
use crate::page::Page;
use crate::result::{SearchResult, TraversalStats};
use crate::sink::ResultSink;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Called with `(depth, link)` right before each fetch.
pub type ProgressCallback = Arc<dyn Fn(usize, String) + Send + Sync>;

/// Everything one search run needs. Fixed for the duration of the run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraversalConfig {
    pub root_link: String,
    /// Links are followed only if this matches somewhere in the absolute URL.
    pub url_pattern: String,
    /// Matched case-insensitively against each line of page text.
    pub content_pattern: String,
    /// Report pages that do *not* match instead of pages that do.
    pub negate: bool,
    /// Root is depth 0; pages at `max_depth` are fetched but not followed.
    pub max_depth: usize,
}

/// Depth-bounded, link-following content search.
///
/// Walks pre-order from the root: a page's own result is delivered before
/// any result from the pages it links to, and children are visited in the
/// order their links first appear. There is no crawl-wide visited set, so a
/// page reachable along several paths is fetched once per path. Only the
/// depth bound guarantees termination.
pub struct Traverser<F> {
    fetcher: F,
    config: TraversalConfig,
    link_filter: LinkFilter,
    matcher: ContentMatcher,
    progress_callback: Option<ProgressCallback>,
}

impl<F: Fetch> Traverser<F> {
    /// Fails if either pattern does not compile.
    pub fn new(fetcher: F, config: TraversalConfig) -> Result<Self> {
        let link_filter = LinkFilter::new(&config.url_pattern)?;
        let matcher = ContentMatcher::new(&config.content_pattern)?;

        Ok(Self {
            fetcher,
            config,
            link_filter,
            matcher,
            progress_callback: None,
        })
    }

    pub fn with_progress_callback(mut self, callback: ProgressCallback) -> Self {
        self.progress_callback = Some(callback);
        self
    }

    pub fn config(&self) -> &TraversalConfig {
        &self.config
    }

    /// Runs the search to completion, delivering each result to `sink` as
    /// soon as its page has been judged.
    pub async fn run<S: ResultSink>(&self, mut sink: S) -> TraversalStats {
        let max_depth = self.config.max_depth;
        info!(
            "Searching from {} (max depth {}, negate {})",
            self.config.root_link, max_depth, self.config.negate
        );

        let mut stats = TraversalStats::default();
        let mut pending: Vec<(String, usize)> = vec![(self.config.root_link.clone(), 0)];

        while let Some((link, depth)) = pending.pop() {
            if let Some(ref callback) = self.progress_callback {
                callback(depth, link.clone());
            }

            let page = self.load_page(&link, &mut stats).await;
            let matches = self.matcher.matching_lines(&page.text);

            if self.is_included(&matches) {
                debug!("[depth {}] {} included ({} lines)", depth, link, matches.len());
                stats.results += 1;
                sink.accept(SearchResult::new(link.clone(), matches));
            }

            // Nothing deeper than max_depth is ever queued, so never fetched.
            if depth < max_depth {
                let children = self.link_filter.relevant_links(&link, page.out_links.as_slice());
                debug!("[depth {}] following {} link(s) from {}", depth, children.len(), link);

                // Reversed so the first link is popped first.
                pending.extend(children.into_iter().rev().map(|child| (child, depth + 1)));
            }
        }

        info!(
            "Search complete. {} page(s) fetched, {} failed, {} result(s)",
            stats.pages_fetched, stats.fetch_failures, stats.results
        );
        stats
    }

    /// Aggregate mode.
    pub async fn collect(&self) -> (Vec<SearchResult>, TraversalStats) {
        let mut results = Vec::new();
        let stats = self.run(&mut results).await;
        (results, stats)
    }

    async fn load_page(&self, link: &str, stats: &mut TraversalStats) -> Page {
        info!("Fetching {}", link);
        stats.pages_fetched += 1;

        match self.fetcher.fetch(link).await {
            Ok(html) => Page::parse(&html),
            Err(e) => {
                warn!("Fetch failed for {}: {}", link, e);
                stats.fetch_failures += 1;
                Page::empty()
            }
        }
    }

    fn is_included(&self, matches: &[String]) -> bool {
        !matches.is_empty() != self.config.negate
    }
}
