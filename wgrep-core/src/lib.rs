pub mod report;
pub mod search;

pub use report::OutputFormat;
pub use search::{SearchOptions, SinkMode, execute_search, run_search};
