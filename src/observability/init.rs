//! Tracing initialization and subscriber setup.

use super::file_writer::FileWriter;
use crate::infrastructure::paths::expand_tilde;
use crate::Config;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes the global tracing subscriber.
///
/// Sets up a `fmt` layer filtered by:
/// 1. `RUST_LOG` if set and valid
/// 2. `config.trace_level`
/// 3. Default: `"info"`
///
/// Output goes to `config.log_file` through a rotating [`FileWriter`], or to
/// stderr when no log file is configured or its directory cannot be created.
///
/// Idempotent: only the first call installs a subscriber.
///
/// # Example
///
/// ```rust
/// use objlist::observability::init_tracing;
/// use objlist::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
///
/// init_tracing(&config);
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let level = config
        .trace_level
        .as_deref()
        .unwrap_or("info")
        .to_ascii_lowercase();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let log_path = config.log_file.as_deref().map(expand_tilde).filter(|path| {
        path.parent()
            .map_or(true, |dir| dir.as_os_str().is_empty() || std::fs::create_dir_all(dir).is_ok())
    });

    let registry = tracing_subscriber::registry().with(filter);

    let _ = match log_path {
        Some(path) => registry
            .with(fmt::layer().with_ansi(false).with_writer(FileWriter::new(path)))
            .try_init(),
        None => registry.with(fmt::layer().with_writer(std::io::stderr)).try_init(),
    };
}
