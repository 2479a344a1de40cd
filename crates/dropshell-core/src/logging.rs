//! Logging configuration using tracing

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

const LOG_FILE_NAME: &str = "dropshell.log";

/// Environment variable that overrides the default filter
pub const LOG_ENV_VAR: &str = "DROPSHELL_LOG";

/// Initialize the logging subsystem
///
/// The selector owns stdout and the remote shell owns the whole terminal,
/// so logs only ever go to a file under `~/.local/share/dropshell/logs/`.
/// Log level is controlled by the `DROPSHELL_LOG` environment variable.
///
/// # Examples
/// ```bash
/// DROPSHELL_LOG=debug dropshell droplet ssh
/// DROPSHELL_LOG=dropshell_ssh=trace dropshell droplet ssh
/// ```
pub fn init() -> Result<()> {
    let log_dir = get_log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_NAME);

    // Target prefixes match every dropshell_* crate
    let env_filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new("dropshell=info,warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!("───────────────────────────────────────────────");
    tracing::info!("dropshell {} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!("Log directory: {}", log_dir.display());
    tracing::info!("───────────────────────────────────────────────");

    Ok(())
}

fn get_log_directory() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("dropshell").join("logs")
}

/// Path of the active log file, shown to the user after a fatal error
pub fn current_log_file() -> PathBuf {
    get_log_directory().join(LOG_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_file_lives_under_dropshell_logs() {
        let path = current_log_file();
        assert!(path.ends_with("dropshell/logs/dropshell.log"));
    }
}
