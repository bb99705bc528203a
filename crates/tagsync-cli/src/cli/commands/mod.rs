//! CLI command handlers, one per file.

mod columns;
mod extract_impression;
mod process;
mod rewrite_url;

pub use columns::run_columns;
pub use extract_impression::run_extract_impression;
pub use process::run_process;
pub use rewrite_url::run_rewrite_url;
