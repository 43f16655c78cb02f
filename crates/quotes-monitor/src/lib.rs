//! Logging setup.

mod logging;

pub use logging::{log_file_writer, setup_logging};
pub use tracing_appender::non_blocking::WorkerGuard;
