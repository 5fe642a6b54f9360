// Rendering of search results for the console

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use wgrep_scanner::{SearchResult, TraversalStats};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("Unknown output format '{}'", other)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// One result block:
///
/// ```text
///
/// == https://a.test/ ==
/// > System Alert
/// ```
///
/// A page included by negation has no `> ` lines.
pub fn render_result(result: &SearchResult) -> String {
    let mut block = format!("\n== {} ==\n", result.link);
    for line in &result.matches {
        block.push_str("> ");
        block.push_str(line);
        block.push('\n');
    }
    block
}

/// All blocks, in result order.
pub fn render_text(results: &[SearchResult]) -> String {
    results.iter().map(render_result).collect()
}

pub fn render_json(results: &[SearchResult]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(results)
}

/// A single result as one line of JSON, for streaming.
pub fn render_json_line(result: &SearchResult) -> serde_json::Result<String> {
    let mut line = serde_json::to_string(result)?;
    line.push('\n');
    Ok(line)
}

pub fn render(results: &[SearchResult], format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(results)),
        OutputFormat::Json => {
            let mut json = render_json(results)?;
            json.push('\n');
            Ok(json)
        }
    }
}

pub fn render_summary(stats: &TraversalStats) -> String {
    format!(
        "{} page(s) fetched, {} failed, {} result(s)",
        stats.pages_fetched, stats.fetch_failures, stats.results
    )
}
