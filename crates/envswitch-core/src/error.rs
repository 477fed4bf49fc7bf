//! Error types for catalog, copy and execution failures.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while switching environment files.
#[derive(Debug, Error)]
pub enum SwitchError {
    /// No candidate files matched in the project directory.
    #[error("No candidate files found")]
    CatalogEmpty,

    /// The project directory could not be listed.
    #[error("Cannot read directory {path}: {source}")]
    CatalogRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The candidate file pattern is not a valid glob.
    #[error("Invalid file pattern `{pattern}`: {message}")]
    InvalidPattern { pattern: String, message: String },

    /// Copying the selected file to the destination failed.
    #[error("Failed to copy {source_path} to {destination}: {source}")]
    Copy {
        source_path: PathBuf,
        destination: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The follow-up command could not be launched.
    #[error("Failed to run command `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The follow-up command string contains no program.
    #[error("Failed to run command: command string is empty")]
    EmptyCommand,

    /// The follow-up command ran but did not succeed.
    #[error("Command `{command}` exited with status {code}")]
    ChildExit { command: String, code: i32 },
}

impl SwitchError {
    /// Process exit code the host should terminate with for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ChildExit { code, .. } => *code,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        let err = SwitchError::ChildExit {
            command: "npm run test".to_string(),
            code: 3,
        };
        assert_eq!(err.exit_code(), 3);
        assert_eq!(SwitchError::EmptyCommand.exit_code(), 1);
    }

    #[test]
    fn test_catalog_empty_message() {
        assert_eq!(
            SwitchError::CatalogEmpty.to_string(),
            "No candidate files found"
        );
    }
}
