//! Catalog and user configuration types.

use std::path::PathBuf;

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::Command;

/// Configuration for listing candidate files and commands.
#[derive(Debug, Clone, Builder, Serialize, Deserialize)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct CatalogConfig {
    /// Project directory to list.
    pub directory: PathBuf,

    /// Glob a file name must match to be a candidate.
    #[builder(default = "default_pattern()")]
    #[serde(default = "default_pattern")]
    pub pattern: String,

    /// Manifest file holding the named scripts.
    #[builder(default = "default_manifest()")]
    #[serde(default = "default_manifest")]
    pub manifest: String,

    /// Prefix prepended to a script name to run it.
    #[builder(default = "default_script_runner()")]
    #[serde(default = "default_script_runner")]
    pub script_runner: String,

    /// Look for a user configuration file before falling back to the manifest.
    #[builder(default = "true")]
    #[serde(default = "default_true")]
    pub search_user_config: bool,
}

fn default_pattern() -> String {
    ".env.*".to_string()
}

fn default_manifest() -> String {
    "package.json".to_string()
}

fn default_script_runner() -> String {
    "npm run".to_string()
}

fn default_true() -> bool {
    true
}

impl CatalogConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        match self.directory {
            Some(ref dir) if dir.as_os_str().is_empty() => {
                Err("Directory cannot be empty".to_string())
            }
            Some(_) => Ok(()),
            None => Err("Directory is required".to_string()),
        }
    }
}

impl CatalogConfig {
    /// Create a new catalog config builder.
    pub fn builder() -> CatalogConfigBuilder {
        CatalogConfigBuilder::default()
    }

    /// Create a config with defaults for a project directory.
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            pattern: default_pattern(),
            manifest: default_manifest(),
            script_runner: default_script_runner(),
            search_user_config: true,
        }
    }

    /// Path of the manifest inside the project directory.
    pub fn manifest_path(&self) -> PathBuf {
        self.directory.join(&self.manifest)
    }

    /// Invocation string that runs a named script.
    pub fn script_command(&self, script: &str) -> String {
        format!("{} {}", self.script_runner, script)
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self::new(".")
    }
}

/// User configuration file contents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserConfig {
    /// Commands offered after switching, replacing the manifest scripts.
    pub commands: Vec<Command>,
}
