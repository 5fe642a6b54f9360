use crate::error::Result;
use regex::{Regex, RegexBuilder};

/// Case-insensitive line matcher for page text.
#[derive(Debug, Clone)]
pub struct ContentMatcher {
    pattern: Regex,
}

impl ContentMatcher {
    pub fn new(pattern: &str) -> Result<Self> {
        let pattern = RegexBuilder::new(pattern).case_insensitive(true).build()?;
        Ok(Self { pattern })
    }

    /// Lines of `text` containing a match, in their original order.
    pub fn matching_lines(&self, text: &str) -> Vec<String> {
        text.lines()
            .filter(|line| self.pattern.is_match(line))
            .map(str::to_string)
            .collect()
    }
}
