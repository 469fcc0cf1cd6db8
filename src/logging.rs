use std::fs;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("parus_members=info"))
}

/// Initializes console logging on stderr, and a daily-rotated JSON log file
/// when `log_dir` is given. Stdout is left to the human-readable report.
///
/// The returned guard must be held until exit so buffered file logs are flushed.
pub fn init_logging(log_dir: Option<&Path>) -> Option<WorkerGuard> {
    match log_dir {
        Some(dir) => {
            let _ = fs::create_dir_all(dir);

            let file_appender = tracing_appender::rolling::daily(dir, "parus_members.log");
            let (non_blocking_writer, guard) = tracing_appender::non_blocking(file_appender);
            let file_layer = fmt::layer().json().with_writer(non_blocking_writer);

            tracing_subscriber::registry()
                .with(env_filter())
                .with(file_layer)
                .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
                .init();

            Some(guard)
        }
        None => {
            tracing_subscriber::registry()
                .with(env_filter())
                .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
                .init();
            None
        }
    }
}
