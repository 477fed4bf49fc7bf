//! Core types for envswitch.
//!
//! This crate provides the data model shared by the catalog provider,
//! the file operations and the TUI: candidate environment files, runnable
//! commands, the error type and catalog configuration.

mod config;
mod error;
mod model;

pub use config::{CatalogConfig, CatalogConfigBuilder, UserConfig};
pub use error::SwitchError;
pub use model::{Command, EnvFile};

/// Name of the file every selection overwrites.
pub const DESTINATION_FILE: &str = ".env";
