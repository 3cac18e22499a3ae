//! Tracing subscriber initialization.
//!
//! Logs are written to a file so they never interleave with layout output
//! on stdout. Monitor them with `tail -f`.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error type for logging initialization failures.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// Failed to create log directory
    #[error("Failed to create log directory at {path:?}: {source}")]
    DirectoryCreation {
        /// The directory path that failed to be created
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Invalid log file path (no filename component)
    #[error("Invalid log file path: {0:?}")]
    InvalidPath(PathBuf),

    /// Log path has no parent directory
    #[error("Log path has no parent directory: {0:?}")]
    NoParentDirectory(PathBuf),

    /// Tracing subscriber already initialized
    #[error("Tracing subscriber already initialized")]
    SubscriberAlreadySet,
}

/// Filter used when `RUST_LOG` is unset or unparsable: layout events from
/// this crate at `info`, everything else at `warn`.
pub const DEFAULT_FILTER: &str = "warn,waterfall=info";

/// Initialize the tracing subscriber with file-based logging.
///
/// Respects the RUST_LOG environment variable, falling back to
/// [`DEFAULT_FILTER`]. Layout placement events are emitted at `trace`,
/// extension and invalidation at `debug`, rejected oracle heights at `warn`.
///
/// Creates the log directory if it doesn't exist. The file is appended to,
/// never rotated.
///
/// # Errors
///
/// Returns `Err(LoggingError)` if the path has no parent or file name,
/// directory creation failed, or a subscriber was already installed.
pub fn init(log_path: &Path) -> Result<(), LoggingError> {
    let (directory, file_name) = split_log_path(log_path)?;

    std::fs::create_dir_all(directory).map_err(|source| LoggingError::DirectoryCreation {
        path: directory.to_path_buf(),
        source,
    })?;

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(tracing_appender::rolling::never(directory, file_name))
        .with_ansi(false)
        .try_init()
        .map_err(|_| LoggingError::SubscriberAlreadySet)
}

/// Split `log_path` into the directory to create and the file name inside it.
fn split_log_path(log_path: &Path) -> Result<(&Path, &str), LoggingError> {
    let directory = log_path
        .parent()
        .ok_or_else(|| LoggingError::NoParentDirectory(log_path.to_path_buf()))?;
    let file_name = log_path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| LoggingError::InvalidPath(log_path.to_path_buf()))?;
    Ok((directory, file_name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{ItemIndex, LayoutEngine, LayoutParams};
    use serial_test::serial;
    use std::fs;
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    /// In-memory writer for capturing formatted events.
    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Captured {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn capture<F: FnOnce()>(level: tracing::Level, f: F) -> String {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(level)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        captured.contents()
    }

    #[test]
    #[serial(tracing_init)]
    fn init_creates_log_directory_if_missing() {
        let test_dir = std::env::temp_dir().join("waterfall_test_logs_create");
        let log_file = test_dir.join("test.log");

        let _ = fs::remove_dir_all(&test_dir);

        // May fail if subscriber already set, which is fine
        let _ = init(&log_file);

        assert!(
            test_dir.exists(),
            "Log directory should be created: {:?}",
            test_dir
        );

        let _ = fs::remove_dir_all(&test_dir);
    }

    #[test]
    #[serial(tracing_init)]
    fn init_rejects_root_path() {
        let result = init(Path::new("/"));
        assert!(matches!(result, Err(LoggingError::NoParentDirectory(_))));
    }

    #[test]
    fn split_log_path_separates_directory_and_file() {
        let path = Path::new("/var/tmp/waterfall/waterfall.log");
        let (directory, file_name) = split_log_path(path).expect("valid log path");
        assert_eq!(directory, Path::new("/var/tmp/waterfall"));
        assert_eq!(file_name, "waterfall.log");
    }

    #[test]
    fn split_log_path_rejects_directory_only_path() {
        let result = split_log_path(Path::new("/var/tmp/.."));
        assert!(matches!(result, Err(LoggingError::InvalidPath(_))));
    }

    #[test]
    fn engine_warns_on_invalid_height() {
        let output = capture(tracing::Level::WARN, || {
            let mut engine =
                LayoutEngine::new(LayoutParams::new(2, 400.0, 0.0, 0.0)).expect("valid params");
            let _ = engine.ensure_laid_out(1, &mut |_: ItemIndex, _: f64| -5.0);
        });

        assert!(output.contains("WARN"), "got: {}", output);
        assert!(output.contains("invalid height"), "got: {}", output);
        assert!(output.contains("height=-5"), "got: {}", output);
    }

    #[test]
    fn engine_logs_extension_at_debug() {
        let output = capture(tracing::Level::DEBUG, || {
            let mut engine =
                LayoutEngine::new(LayoutParams::new(2, 400.0, 0.0, 0.0)).expect("valid params");
            let _ = engine.ensure_laid_out(3, &mut |_: ItemIndex, _: f64| 10.0);
            engine.invalidate_all();
        });

        assert!(output.contains("Layout extended"), "got: {}", output);
        assert!(output.contains("added=3"), "got: {}", output);
        assert!(output.contains("Layout invalidated"), "got: {}", output);
    }
}
