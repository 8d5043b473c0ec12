pub mod bytes_format;
pub mod config;
pub mod error;
pub mod evaluation_client;
pub mod file_source;
pub mod images;
pub mod report;

pub use config::EvaluatorConfig;
pub use error::{EvaluateError, ReadFailure};
pub use evaluation_client::EvaluationClient;
pub use file_source::{DiskFile, FileSource, MemoryFile};
pub use images::FileEncoder;
