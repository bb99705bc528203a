pub mod config;
pub mod logging;

pub mod columns;
pub mod error;
pub mod export;
pub mod impression;
pub mod loader;
pub mod memo;
pub mod pipeline;
pub mod table;
pub mod url_model;

pub use error::{ErrorKind, PipelineError, SourceRole};
pub use loader::InputFile;
pub use pipeline::{process, process_files, JoinStats, ProcessOutput};
pub use table::{Table, Value};
