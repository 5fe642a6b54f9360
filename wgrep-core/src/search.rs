use crate::report::{self, OutputFormat};
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, Write};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tracing::debug;
use wgrep_scanner::sink::ResultSink;
use wgrep_scanner::{
    Fetch, HttpFetcher, ProgressCallback, SearchResult, TraversalConfig, TraversalStats,
    Traverser,
};

/// How results reach the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SinkMode {
    /// Collect the whole run, then print everything.
    #[default]
    Aggregate,
    /// Print each result as soon as its page has been judged.
    Streaming,
}

/// Options for configuring a search run
pub struct SearchOptions {
    pub config: TraversalConfig,
    pub timeout_secs: u64,
    pub mode: SinkMode,
    pub format: OutputFormat,
    pub show_progress: bool,
}

/// Execute a search over HTTP, writing rendered results to `out`.
pub async fn execute_search<W: Write>(
    options: SearchOptions,
    out: &mut W,
) -> Result<TraversalStats, String> {
    let fetcher = HttpFetcher::with_timeout(options.timeout_secs)
        .map_err(|e| format!("Failed to create HTTP client: {}", e))?;
    run_search(fetcher, options, out).await
}

/// Execute a search with any transport.
pub async fn run_search<F: Fetch, W: Write>(
    fetcher: F,
    options: SearchOptions,
    out: &mut W,
) -> Result<TraversalStats, String> {
    let SearchOptions {
        config,
        mode,
        format,
        show_progress,
        ..
    } = options;

    let traverser = Traverser::new(fetcher, config).map_err(|e| e.to_string())?;

    match mode {
        SinkMode::Aggregate => {
            let progress_bar = show_progress.then(|| Arc::new(search_spinner()));
            let traverser = match progress_bar.clone() {
                Some(pb) => traverser.with_progress_callback(spinner_callback(pb)),
                None => traverser,
            };

            let (results, stats) = traverser.collect().await;

            if let Some(pb) = progress_bar {
                pb.finish_and_clear();
            }

            let rendered = report::render(&results, format)
                .map_err(|e| format!("Failed to render results: {}", e))?;
            out.write_all(rendered.as_bytes())
                .and_then(|_| out.flush())
                .map_err(|e| format!("Failed to write results: {}", e))?;

            Ok(stats)
        }
        SinkMode::Streaming => {
            let mut sink = WriterSink::new(out, format);
            let stats = traverser.run(&mut sink).await;
            sink.finish()
                .map_err(|e| format!("Failed to write results: {}", e))?;
            Ok(stats)
        }
    }
}

fn search_spinner() -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
        pb.set_style(style);
    }
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message("Starting search...");
    pb
}

fn spinner_callback(pb: Arc<ProgressBar>) -> ProgressCallback {
    let fetched = Arc::new(AtomicUsize::new(0));
    Arc::new(move |depth: usize, link: String| {
        let count = fetched.fetch_add(1, Ordering::Relaxed) + 1;
        pb.set_message(format!(
            "Searching... {} page(s) fetched [depth {}] {}",
            count, depth, link
        ));
    })
}

/// Streams each result to a writer. The first write error stops further
/// output and is reported by `finish`.
struct WriterSink<'a, W: Write> {
    out: &'a mut W,
    format: OutputFormat,
    error: Option<io::Error>,
}

impl<'a, W: Write> WriterSink<'a, W> {
    fn new(out: &'a mut W, format: OutputFormat) -> Self {
        Self {
            out,
            format,
            error: None,
        }
    }

    fn write_result(&mut self, result: &SearchResult) -> io::Result<()> {
        let rendered = match self.format {
            OutputFormat::Text => report::render_result(result),
            OutputFormat::Json => report::render_json_line(result)?,
        };
        self.out.write_all(rendered.as_bytes())?;
        self.out.flush()
    }

    fn finish(self) -> io::Result<()> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

impl<W: Write> ResultSink for WriterSink<'_, W> {
    fn accept(&mut self, result: SearchResult) {
        if self.error.is_some() {
            return;
        }
        if let Err(e) = self.write_result(&result) {
            debug!("Stopping output after write error: {}", e);
            self.error = Some(e);
        }
    }
}
