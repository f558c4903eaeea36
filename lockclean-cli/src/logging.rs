use std::path::{Path, PathBuf};

use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

/// Environment variable holding an `EnvFilter` directive
pub const LOG_ENV: &str = "LOCKCLEAN_LOG";

const DEFAULT_FILTER: &str = "lockclean=info,lockclean_core=info";
const VERBOSE_FILTER: &str = "lockclean=debug,lockclean_core=debug";
const LOG_FILE_NAME: &str = "lockclean.log";

/// `<cache dir>/lockclean/lockclean.log`, if the platform has a cache dir
pub fn default_log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|d| d.join("lockclean").join(LOG_FILE_NAME))
}

/// Install the file logger.
///
/// The terminal belongs to the TUI, so logs only go to a file. Returns `None`
/// (logging disabled) when there is nowhere to write; the guard must be held
/// until exit so buffered lines get flushed.
pub fn init_logging(log_file: Option<PathBuf>, verbose: bool) -> Option<WorkerGuard> {
    let path = log_file.or_else(default_log_path)?;
    let (dir, file_name) = split_log_path(&path)?;
    std::fs::create_dir_all(&dir).ok()?;

    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name.to_string_lossy())
        .build(dir)
        .ok()?;
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let default = if verbose { VERBOSE_FILTER } else { DEFAULT_FILTER };
    let filter_layer =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true),
        )
        .with(filter_layer)
        .try_init()
        .ok()?;

    info!(path = %path.display(), "logging to file");

    Some(guard)
}

fn split_log_path(path: &Path) -> Option<(PathBuf, PathBuf)> {
    let file_name = PathBuf::from(path.file_name()?);
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    Some((dir, file_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_log_path() {
        assert_eq!(
            split_log_path(Path::new("/tmp/logs/app.log")),
            Some((PathBuf::from("/tmp/logs"), PathBuf::from("app.log")))
        );
        assert_eq!(
            split_log_path(Path::new("app.log")),
            Some((PathBuf::from("."), PathBuf::from("app.log")))
        );
        assert_eq!(split_log_path(Path::new("/")), None);
    }

    #[test]
    fn test_default_log_path_file_name() {
        if let Some(path) = default_log_path() {
            assert!(path.ends_with("lockclean/lockclean.log"));
        }
    }
}
