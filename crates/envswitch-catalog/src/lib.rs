//! Candidate file and command discovery for envswitch.
//!
//! # Overview
//!
//! `envswitch-catalog` answers two questions about a project directory:
//!
//! - **Which environment files can be activated?** Every directory entry
//!   whose name matches the candidate pattern (`.env.*` by default),
//!   sorted by name.
//! - **Which commands can be launched afterwards?** The `commands` list of a
//!   user configuration file when one is found and non-empty, otherwise the
//!   `scripts` section of `package.json`.
//!
//! Command discovery never fails: unreadable or malformed manifests and
//! configuration files degrade to an empty list plus a diagnostic.
//!
//! # Example
//!
//! ```rust,no_run
//! use envswitch_catalog::Catalog;
//! use envswitch_core::CatalogConfig;
//!
//! let catalog = Catalog::load(&CatalogConfig::new(".")).unwrap();
//! for file in &catalog.files {
//!     println!("{}", file.name);
//! }
//! ```

mod catalog;
pub mod config;
mod files;
mod manifest;

pub use catalog::{Catalog, CommandList, CommandSource, list_commands};
pub use config::{ConfigError, find_user_config, load_user_config};
pub use files::{candidate_matcher, list_candidate_files};
pub use manifest::{ManifestError, read_manifest_scripts};

// Re-export core types for convenience
pub use envswitch_core::{CatalogConfig, Command, EnvFile, SwitchError, UserConfig};
