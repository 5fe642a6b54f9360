pub mod commands;
pub mod handlers;

// Re-export commonly used handler functions for convenience
pub use handlers::{handle_search, parse_root_link, search_options_from_matches};

// Re-export search functionality from wgrep-core
pub use wgrep_core::{OutputFormat, SearchOptions, SinkMode, execute_search};
