use crate::error::Result;
use crate::resolve::{domain_of, resolve_relative};
use regex::Regex;
use std::collections::HashSet;
use tracing::debug;

/// Decides which of a page's hrefs are worth following.
#[derive(Debug, Clone)]
pub struct LinkFilter {
    pattern: Regex,
}

impl LinkFilter {
    pub fn new(pattern: &str) -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
        })
    }

    pub fn is_relevant(&self, link: &str) -> bool {
        self.pattern.is_match(link)
    }

    /// Absolutizes `hrefs` against the domain of `page_link`, keeps those the
    /// pattern matches and drops repeats. First occurrence wins.
    ///
    /// The seen-set lives only for this call; a link that also appears on
    /// another page is returned again there.
    pub fn relevant_links<S: AsRef<str>>(&self, page_link: &str, hrefs: &[S]) -> Vec<String> {
        let domain = match domain_of(page_link) {
            Ok(domain) => domain,
            Err(e) => {
                debug!("No base for links on {}: {}", page_link, e);
                return Vec::new();
            }
        };

        let mut seen = HashSet::new();
        let mut links = Vec::new();

        for href in hrefs {
            let Some(link) = resolve_relative(&domain, href.as_ref()) else {
                continue;
            };
            if !self.is_relevant(&link) {
                debug!("  -> {} filtered out", link);
                continue;
            }
            if seen.insert(link.clone()) {
                links.push(link);
            }
        }

        links
    }
}
