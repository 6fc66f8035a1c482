use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::constants::LOG_FILE_ENV;

/// Resolve the log file from an explicit path or the `HEALTHTEEN_LOG_FILE` env var.
pub fn log_file_from_env(explicit: Option<&Path>) -> Option<PathBuf> {
    explicit
        .map(Path::to_path_buf)
        .or_else(|| std::env::var_os(LOG_FILE_ENV).map(PathBuf::from))
}

/// Install the global subscriber.
///
/// The terminal belongs to the UI, so events are only written when a log file
/// is configured. Without one, tracing stays a no-op.
pub fn init_tracing(log_file: Option<&Path>) -> Result<()> {
    let Some(log_path) = log_file_from_env(log_file) else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_filter(filter);

    tracing_subscriber::registry().with(file_layer).try_init()?;
    tracing::info!(path = %log_path.display(), "file logging enabled");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_path_wins() {
        let path = Path::new("/tmp/explicit.log");
        assert_eq!(log_file_from_env(Some(path)), Some(path.to_path_buf()));
    }
}
