use anyhow::{Context, anyhow};
use clap::ArgMatches;
use colored::Colorize;
use tracing::Level;
use url::Url;
use wgrep_core::report::render_summary;
use wgrep_core::{OutputFormat, SearchOptions, SinkMode, execute_search};
use wgrep_scanner::{TraversalConfig, TraversalStats};

/// Check that the root link is an absolute URL the search can start from
pub fn parse_root_link(link: &str) -> Result<String, String> {
    match Url::parse(link) {
        Ok(url) if url.cannot_be_a_base() => {
            Err(format!("'{}' cannot be used as a root link", link))
        }
        // Keep the link exactly as given; result links are compared byte-for-byte.
        Ok(_) => Ok(link.to_string()),
        Err(e) => Err(format!("Invalid root link '{}': {}", link, e)),
    }
}

/// Build search options from parsed arguments.
///
/// Fails when --link or --content is missing or unusable. Nothing has been
/// fetched at that point.
pub fn search_options_from_matches(args: &ArgMatches) -> Result<SearchOptions, String> {
    let link = args
        .get_one::<String>("link")
        .ok_or_else(|| "A root link is required (--link)".to_string())?;
    let content = args
        .get_one::<String>("content")
        .ok_or_else(|| "A content pattern is required (--content)".to_string())?;

    let root_link = parse_root_link(link)?;

    let url_pattern = args
        .get_one::<String>("urls")
        .cloned()
        .unwrap_or_else(|| ".*".to_string());
    let max_depth = *args.get_one::<usize>("depth").unwrap_or(&2);
    let timeout_secs = *args.get_one::<u64>("timeout").unwrap_or(&10);
    let format = args
        .get_one::<String>("format")
        .map(|f| f.parse::<OutputFormat>())
        .transpose()?
        .unwrap_or_default();

    let mode = if args.get_flag("stream") {
        SinkMode::Streaming
    } else {
        SinkMode::Aggregate
    };
    let quiet = args.get_flag("quiet");

    Ok(SearchOptions {
        config: TraversalConfig {
            root_link,
            url_pattern,
            content_pattern: content.clone(),
            negate: args.get_flag("negate"),
            max_depth,
        },
        timeout_secs,
        mode,
        format,
        show_progress: !quiet && mode == SinkMode::Aggregate,
    })
}

/// Map -v occurrences to a log level. Fetch failures show by default.
pub fn log_level(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    }
}

pub fn init_tracing(verbosity: u8) {
    tracing_subscriber::fmt()
        .with_max_level(log_level(verbosity))
        .with_writer(std::io::stderr)
        .init();
}

/// Run a search with already-validated options, printing results to stdout
pub async fn handle_search(options: SearchOptions, quiet: bool) -> anyhow::Result<TraversalStats> {
    let print_summary = !quiet && options.mode == SinkMode::Aggregate;

    let mut stdout = std::io::stdout().lock();
    let stats = execute_search(options, &mut stdout)
        .await
        .map_err(|e| anyhow!(e))
        .context("Search failed")?;

    if print_summary {
        eprintln!("\n{} {}", "✓".green().bold(), render_summary(&stats));
    }

    Ok(stats)
}

pub fn print_error(msg: &str) {
    eprintln!("{} {}", "✗".red().bold(), msg);
}
