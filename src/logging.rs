//! File-based tracing setup.
//!
//! The TUI owns stdout and stderr while it runs, so log output goes to
//! `<cache_dir>/envswitch/envswitch.log`. Without a writable log file,
//! nothing is logged.

use std::fs::{self, File, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Environment variable holding the log filter directives.
pub const LOG_ENV: &str = "ENVSWITCH_LOG";

/// Install the global subscriber. Safe to call more than once.
pub fn init() {
    let env_filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    let Some((path, file)) = open_log_file() else {
        return;
    };

    let installed = tracing_subscriber::registry()
        .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
        .with(env_filter)
        .try_init()
        .is_ok();

    if installed {
        tracing::info!(path = %path.display(), "logging initialized");
    }
}

fn log_file_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("envswitch").join("envswitch.log"))
}

fn open_log_file() -> Option<(PathBuf, File)> {
    let path = log_file_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).ok()?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .ok()?;

    Some((path, file))
}
