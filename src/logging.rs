//! Process-wide `tracing` setup.
//!
//! Everything goes to one append-only log file (never rotated) through a
//! non-blocking writer, and optionally to stderr as well. Call
//! [`init_logging`] once near process start; later calls are no-ops that hand
//! back the resolved file path.

use anyhow::Context;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();
static LOG_PATH: OnceLock<PathBuf> = OnceLock::new();

#[derive(Debug, Clone)]
pub struct LogConfig {
    pub file: PathBuf,
    /// Duplicate events to stderr.
    pub emit_stderr: bool,
    /// Used when `RUST_LOG` is unset.
    pub default_filter: &'static str,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from(crate::config::DEFAULT_LOG_FILE),
            emit_stderr: true,
            default_filter: "property_analyst=debug,info",
        }
    }
}

pub fn init_logging(config: LogConfig) -> anyhow::Result<PathBuf> {
    if let Some(path) = LOG_PATH.get() {
        return Ok(path.clone());
    }

    let (dir, file_name) = split_log_path(&config.file)?;
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create log directory: {}", dir.display()))?;

    let appender = tracing_appender::rolling::never(&dir, &file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let _ = LOG_GUARD.set(guard);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.default_filter));

    let file_layer = fmt::layer().with_writer(writer).with_ansi(false);
    let stderr_layer = config
        .emit_stderr
        .then(|| fmt::layer().with_writer(std::io::stderr).with_target(false));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(stderr_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("tracing setup failed: {e}"))?;

    let full_path = std::path::absolute(dir.join(&file_name)).unwrap_or(dir.join(&file_name));
    let _ = LOG_PATH.set(full_path.clone());
    Ok(full_path)
}

fn split_log_path(path: &Path) -> anyhow::Result<(PathBuf, String)> {
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .with_context(|| format!("log path has no file name: {}", path.display()))?
        .to_string();

    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };

    Ok((dir, file_name))
}
