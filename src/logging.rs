//! Tracing subscriber setup
//!
//! Plain mode logs to stderr. The TUI owns the terminal, so it only logs when
//! a log file is configured.

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Where log events go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget<'a> {
    Stderr,
    File(&'a Path),
    Disabled,
}

/// Install the global subscriber. `RUST_LOG` overrides the default level.
pub fn init(target: LogTarget<'_>, verbose: bool) -> Result<(), BoxError> {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    match target {
        LogTarget::Disabled => Ok(()),
        LogTarget::Stderr => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init(),
        LogTarget::File(path) => {
            let file = File::create(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_target_creates_log_file() {
        let path = std::env::temp_dir().join(format!("bigcalc-log-{}.log", std::process::id()));
        let _ = std::fs::remove_file(&path);

        init(LogTarget::File(&path), true).unwrap();
        tracing::debug!("log file test");

        assert!(path.exists());
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_disabled_target_installs_nothing() {
        assert!(init(LogTarget::Disabled, false).is_ok());
    }
}
