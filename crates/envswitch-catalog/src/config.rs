//! Layered user configuration discovery.
//!
//! The project directory and each of its ancestors are searched for one of
//! [`SEARCH_PLACES`]; the first file found wins. When none exists, the
//! user-global locations are tried: `~/.env-switcher.json`, then
//! `<config_dir>/env-switcher/config.toml`.

use std::path::{Path, PathBuf};

use thiserror::Error;

use envswitch_core::UserConfig;

/// Base name shared by every configuration file.
pub const CONFIG_NAME: &str = "env-switcher";

/// File names checked in each directory, in priority order.
pub const SEARCH_PLACES: &[&str] = &[
    ".env-switcherrc",
    ".env-switcherrc.json",
    ".env-switcher.json",
    ".env-switcher.toml",
];

/// Errors loading a configuration file. Never fatal to the caller.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Error reading config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error parsing config {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },
}

/// Search `start` and its ancestors for a configuration file.
pub fn find_in_ancestors(start: &Path) -> Option<PathBuf> {
    start.ancestors().find_map(|dir| {
        SEARCH_PLACES
            .iter()
            .map(|name| dir.join(name))
            .find(|candidate| candidate.is_file())
    })
}

/// User-global fallback locations, in priority order.
pub fn global_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(format!(".{CONFIG_NAME}.json")));
    }
    if let Some(config) = dirs::config_dir() {
        paths.push(config.join(CONFIG_NAME).join("config.toml"));
    }
    paths
}

/// Find the configuration file that applies to a project directory.
pub fn find_user_config(start: &Path) -> Option<PathBuf> {
    find_in_ancestors(start).or_else(|| {
        global_config_paths()
            .into_iter()
            .find(|candidate| candidate.is_file())
    })
}

/// Load and parse a configuration file.
///
/// `.toml` files are parsed as TOML and `.json` files as JSON. The
/// extension-less rc file is tried as JSON first, then as TOML.
pub fn load_config(path: &Path) -> Result<UserConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let parse_error = |message: String| ConfigError::Parse {
        path: path.to_path_buf(),
        message,
    };

    match path.extension().and_then(|e| e.to_str()) {
        Some("toml") => toml::from_str(&content).map_err(|e| parse_error(e.message().to_string())),
        Some("json") => serde_json::from_str(&content).map_err(|e| parse_error(e.to_string())),
        _ => serde_json::from_str(&content).or_else(|json_err| {
            toml::from_str(&content).map_err(|_| parse_error(json_err.to_string()))
        }),
    }
}

/// Find and load the configuration for a project directory.
///
/// Returns `None` when no configuration file exists anywhere.
pub fn load_user_config(start: &Path) -> Option<Result<(PathBuf, UserConfig), ConfigError>> {
    let path = find_user_config(start)?;
    tracing::debug!(path = %path.display(), "found user config");
    Some(load_config(&path).map(|config| (path, config)))
}
