use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Environment variable that overrides the configured log filter
pub const LOG_ENV: &str = "DAYBOARD_LOG";

/// Build the log filter: `DAYBOARD_LOG` if set and valid, else the configured level.
pub fn build_filter(configured: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(configured))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Route logs to a daily-rolling file in `dir`. The TUI owns the terminal, so
/// nothing is written to stdout or stderr.
///
/// The returned guard flushes buffered lines on drop and must be kept alive
/// for the whole session.
pub fn init_file_logging(dir: &Path, level: &str) -> Result<WorkerGuard, std::io::Error> {
    std::fs::create_dir_all(dir)?;
    let appender = tracing_appender::rolling::daily(dir, "dayboard.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);
    // A second init (e.g. in tests) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter(level))
        .with_writer(writer)
        .with_ansi(false)
        .try_init();
    Ok(guard)
}

/// Log warnings and errors to stderr for the non-interactive subcommands
pub fn init_stderr_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter("warn"))
        .with_writer(std::io::stderr)
        .without_time()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn file_logging_creates_directory() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("nested").join("logs");
        let guard = init_file_logging(&dir, "debug").unwrap();
        assert!(dir.is_dir());
        drop(guard);
    }

    #[test]
    fn invalid_level_falls_back() {
        // Must not panic on garbage directives
        let filter = build_filter("not a [valid] filter ===");
        let _ = filter.to_string();
    }
}
