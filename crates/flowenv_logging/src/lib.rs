//! Shared logging setup for Flowenv binaries.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

const DEFAULT_LOG_FILTER: &str = "flowenv=info,flowenv_settings=info";
const VERBOSE_LOG_FILTER: &str = "flowenv=debug,flowenv_settings=debug";

/// Logging configuration shared by Flowenv binaries.
pub struct LogConfig<'a> {
    pub app_name: &'a str,
    pub verbose: bool,
    /// Also write plain-text logs to a daily rolling file here.
    pub log_dir: Option<PathBuf>,
}

/// Filter directives used when `RUST_LOG` is not set.
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        VERBOSE_LOG_FILTER
    } else {
        DEFAULT_LOG_FILTER
    }
}

fn env_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)))
}

/// Initialize tracing with stderr output and an optional rolling log file.
///
/// Fails if a global subscriber is already installed. A log directory that
/// cannot be created only drops the file layer; stderr logging stays on.
pub fn init_logging(config: LogConfig<'_>) -> Result<()> {
    let file_layer = match config.log_dir.as_deref().filter(|dir| ensure_log_dir(dir)) {
        Some(dir) => {
            let appender =
                tracing_appender::rolling::daily(dir, log_file_name(config.app_name));
            Some(
                tracing_subscriber::fmt::layer()
                    .with_writer(appender)
                    .with_ansi(false)
                    .with_filter(env_filter(config.verbose)),
            )
        }
        None => None,
    };

    let console_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_filter(env_filter(config.verbose));

    tracing_subscriber::registry()
        .with(file_layer)
        .with(console_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(())
}

fn ensure_log_dir(dir: &Path) -> bool {
    match std::fs::create_dir_all(dir) {
        Ok(()) => true,
        Err(err) => {
            eprintln!(
                "Warning: failed to create logs directory {}: {}",
                dir.display(),
                err
            );
            false
        }
    }
}

fn log_file_name(app_name: &str) -> String {
    let base: String = app_name
        .chars()
        .map(|ch| if ch.is_ascii_alphanumeric() || ch == '-' || ch == '_' { ch } else { '_' })
        .collect();
    let base = if base.is_empty() { "flowenv".to_string() } else { base };
    format!("{}.log", base)
}
