//! Combined catalog of candidate files and commands.

use std::path::{Path, PathBuf};

use envswitch_core::{CatalogConfig, Command, EnvFile, SwitchError};

use crate::config::load_user_config;
use crate::files::list_candidate_files;
use crate::manifest::read_manifest_scripts;

/// Where a command list came from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CommandSource {
    /// A user configuration file.
    UserConfig(PathBuf),
    /// The manifest's scripts section.
    Manifest(PathBuf),
    /// No commands were found.
    #[default]
    None,
}

impl CommandSource {
    /// File the commands were read from.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::UserConfig(path) | Self::Manifest(path) => Some(path),
            Self::None => None,
        }
    }
}

/// Commands offered after switching, plus any non-fatal diagnostics.
#[derive(Debug, Clone, Default)]
pub struct CommandList {
    pub commands: Vec<Command>,
    pub source: CommandSource,
    pub diagnostics: Vec<String>,
}

/// List the commands available for a project directory.
///
/// User configuration takes precedence when it is found and lists at least
/// one command; otherwise each manifest script becomes a command that runs it
/// through the configured script runner. This never fails: read and parse
/// errors are recorded as diagnostics.
pub fn list_commands(config: &CatalogConfig) -> CommandList {
    let mut list = CommandList::default();

    if config.search_user_config {
        match load_user_config(&config.directory) {
            Some(Ok((path, user))) if !user.commands.is_empty() => {
                tracing::debug!(
                    path = %path.display(),
                    count = user.commands.len(),
                    "using commands from user config"
                );
                list.commands = user.commands;
                list.source = CommandSource::UserConfig(path);
                return list;
            }
            Some(Ok(_)) | None => {}
            Some(Err(e)) => {
                tracing::warn!("{e}");
                list.diagnostics.push(e.to_string());
            }
        }
    }

    let manifest = config.manifest_path();
    match read_manifest_scripts(&manifest) {
        Ok(Some(scripts)) => {
            list.commands = scripts
                .into_iter()
                .map(|name| {
                    let command = config.script_command(&name);
                    Command::new(name, command)
                })
                .collect();
            if !list.commands.is_empty() {
                list.source = CommandSource::Manifest(manifest);
            }
        }
        Ok(None) => {
            tracing::debug!(path = %manifest.display(), "no manifest");
        }
        Err(e) => {
            tracing::warn!("{e}");
            list.diagnostics.push(e.to_string());
        }
    }

    list
}

/// Everything the selection UI needs from the project directory.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// Candidate files, sorted by name. May be empty.
    pub files: Vec<EnvFile>,
    /// Commands offered after switching.
    pub commands: Vec<Command>,
    /// Where the commands came from.
    pub source: CommandSource,
    /// Non-fatal problems encountered while listing commands.
    pub diagnostics: Vec<String>,
}

impl Catalog {
    /// Load the catalog for the configured directory.
    ///
    /// Only an unreadable directory or an invalid pattern is an error; an
    /// empty file list is returned as-is for the caller to judge.
    pub fn load(config: &CatalogConfig) -> Result<Self, SwitchError> {
        let files = list_candidate_files(config)?;
        let CommandList {
            commands,
            source,
            diagnostics,
        } = list_commands(config);

        Ok(Self {
            files,
            commands,
            source,
            diagnostics,
        })
    }
}
