//! Structured logging for the biome map generator.
//!
//! Console output with uptime timestamps and module paths, plus optional JSON
//! file logging. The configured level applies unless `RUST_LOG` is set.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use biomap_config::Config;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when neither `RUST_LOG` nor the config names a level.
pub const DEFAULT_FILTER: &str = "info";

/// Name of the JSON log file inside the log directory.
pub const LOG_FILE_NAME: &str = "biomap.log";

/// Filter string for `config`: its `debug.log_level` if set, else [`DEFAULT_FILTER`].
pub fn filter_directive(config: Option<&Config>) -> String {
    match config {
        Some(config) if !config.debug.log_level.trim().is_empty() => {
            config.debug.log_level.clone()
        }
        _ => DEFAULT_FILTER.to_string(),
    }
}

/// Create the JSON log file in `log_dir`, creating the directory if needed.
pub fn create_log_file(log_dir: &Path) -> io::Result<(PathBuf, std::fs::File)> {
    std::fs::create_dir_all(log_dir)?;
    let path = log_dir.join(LOG_FILE_NAME);
    let file = std::fs::File::create(&path)?;
    Ok((path, file))
}

/// Initialize the global tracing subscriber.
///
/// Sets up:
/// - Console output with uptime, module path and level
/// - A JSON file layer in `log_dir` when `config.debug.log_to_file` is set
/// - Environment-based filtering (`RUST_LOG` wins over the config)
///
/// A log file that cannot be created is reported on the console and skipped.
///
/// # Examples
///
/// ```no_run
/// use biomap_log::init_logging;
/// use biomap_config::Config;
///
/// init_logging(None, None);
///
/// let mut config = Config::default();
/// config.debug.log_to_file = true;
/// init_logging(Some(std::path::Path::new("./logs")), Some(&config));
/// ```
pub fn init_logging(log_dir: Option<&Path>, config: Option<&Config>) {
    let filter_str = filter_directive(config);
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&filter_str));

    let console_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_target(true)
        .with_thread_names(true)
        .with_level(true)
        .with_timer(fmt::time::uptime());

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer);

    let want_file = config.is_some_and(|c| c.debug.log_to_file);
    if want_file && let Some(log_dir) = log_dir {
        match create_log_file(log_dir) {
            Ok((path, log_file)) => {
                let file_layer = fmt::layer()
                    .with_writer(Mutex::new(log_file))
                    .with_ansi(false)
                    .with_target(true)
                    .with_timer(fmt::time::uptime())
                    .json();

                subscriber.with(file_layer).init();
                tracing::debug!(path = %path.display(), "file logging enabled");
                return;
            }
            Err(e) => {
                subscriber.init();
                tracing::warn!(dir = %log_dir.display(), error = %e, "file logging disabled");
                return;
            }
        }
    }

    subscriber.init();
}
