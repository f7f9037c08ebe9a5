use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt::Layer, prelude::*, EnvFilter, Registry};

/// Wires the global subscriber with a stdout layer and a plain-text
/// file layer appending to `log_path`.
///
/// `RUST_LOG` overrides the default verbosity when set. The returned
/// guards must stay alive until exit or buffered lines are dropped.
///
/// # Errors
///
/// Returns an error if the log directory cannot be created, the path
/// has no file name, or a global subscriber is already installed.
pub fn init_logging(log_path: &Path, verbose: bool) -> Result<Vec<WorkerGuard>> {
    let dir = log_path.parent().unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(dir).context("Failed to create log directory")?;
    let file_name = log_path.file_name().context("Log path has no file name")?;

    let mut guards = vec![];

    // Setup stdout layer.
    let (stdout_writer, stdout_guard) = tracing_appender::non_blocking(std::io::stdout());
    let stdout_layer = Layer::new().with_writer(stdout_writer);
    guards.push(stdout_guard);

    // Setup file layer. One fixed file, appended across invocations.
    let appender = tracing_appender::rolling::never(dir, file_name);
    let (file_writer, file_guard) = tracing_appender::non_blocking(appender);
    let file_layer = Layer::new().with_writer(file_writer).with_ansi(false);
    guards.push(file_guard);

    let default_level = if verbose { "debug" } else { "info" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    Registry::default()
        .with(env_filter)
        .with(stdout_layer)
        .with(file_layer)
        .try_init()
        .context("Failed to install global subscriber")?;

    Ok(guards)
}
