use std::path::PathBuf;
use tracing::debug;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Directory holding the rolling log files, `~/.valdr/logs`.
pub fn log_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".valdr/logs")
}

/// Filter from `VALDR_LOG`, then `RUST_LOG`, defaulting to `info`.
fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env("VALDR_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Log to `<log_dir>/<component>.<date>`, and to stderr when `verbose`.
/// Keep the returned guard alive until exit so buffered lines are flushed.
pub fn init_logging(component: &str, verbose: bool) -> WorkerGuard {
    let dir = log_dir();
    let dir_ready = std::fs::create_dir_all(&dir);

    let (file_writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::daily(&dir, component));

    let file_layer = fmt::layer()
        .with_writer(file_writer)
        .with_ansi(false)
        .with_target(true);
    let stderr_layer = verbose.then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
    });

    tracing_subscriber::registry()
        .with(env_filter())
        .with(file_layer)
        .with(stderr_layer)
        .init();

    match dir_ready {
        Ok(()) => debug!("Logging {} to {}", component, dir.display()),
        Err(e) => debug!("Log directory {} unavailable: {}", dir.display(), e),
    }

    guard
}
