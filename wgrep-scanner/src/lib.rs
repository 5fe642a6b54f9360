pub mod error;
pub mod fetch;
pub mod links;
pub mod matcher;
pub mod page;
pub mod resolve;
pub mod result;
pub mod sink;
pub mod traversal;

pub use error::ScanError;
pub use fetch::{Fetch, HttpFetcher};
pub use result::{SearchResult, TraversalStats};
pub use sink::ResultSink;
pub use traversal::{ProgressCallback, TraversalConfig, Traverser};
