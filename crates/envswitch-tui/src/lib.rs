//! Terminal user interface for envswitch.
//!
//! # Overview
//!
//! `envswitch-tui` walks the user from a list of `.env.*` candidates to an
//! activated `.env`:
//!
//! - **Selector** - the candidate files, one highlighted
//! - **Preview** - the highlighted file with comments, keys and values
//!   colored
//! - **Command chooser** - shown after switching when the project offers
//!   more than one follow-up command
//!
//! The UI never runs the follow-up command itself. [`run`] restores the
//! terminal and returns an [`Outcome`] telling the host what to do next.
//!
//! # Usage
//!
//! ```rust,no_run
//! use envswitch_tui::{Outcome, TuiConfig};
//!
//! let outcome = envswitch_tui::run(TuiConfig::new(".")).unwrap();
//! if let Outcome::Run(command) = outcome {
//!     println!("would run {}", command.command);
//! }
//! ```
//!
//! # Keyboard Navigation
//!
//! - `j`/`k`, `↑`/`↓` - Move highlight or scroll the preview
//! - `Tab` - Switch between selector and preview
//! - `Enter` - Activate the highlighted file or pick a command
//! - `Esc` - Close the command chooser
//! - `t` - Toggle theme
//! - `q` - Quit

pub mod app;
mod event;
pub mod preview;
mod theme;
mod ui;

use std::path::{Path, PathBuf};

use envswitch_core::{CatalogConfig, Command, EnvFile};

pub use app::{App, AppResult, ExitReason};
pub use theme::{Theme, ThemeVariant};

/// What the host should do once the UI has closed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The user left without activating anything.
    Exit(ExitReason),
    /// The run failed with a message the user has seen.
    Failed(String),
    /// A file was activated and there is nothing to run.
    Done { file: EnvFile, destination: PathBuf },
    /// A file was activated; run this command in the restored terminal.
    Run(Command),
}

/// Settings for one run of the UI.
#[derive(Debug, Clone)]
pub struct TuiConfig {
    /// Where candidates, the manifest and user config are looked up.
    pub catalog: CatalogConfig,
    /// File every selection overwrites.
    pub destination: PathBuf,
}

impl TuiConfig {
    /// Defaults for a project directory.
    pub fn new(directory: impl AsRef<Path>) -> Self {
        let directory = directory.as_ref();
        Self {
            catalog: CatalogConfig::new(directory),
            destination: envswitch_ops::destination_path(directory),
        }
    }

    /// Use a custom catalog configuration.
    pub fn with_catalog(mut self, catalog: CatalogConfig) -> Self {
        self.catalog = catalog;
        self
    }

    /// Write selections somewhere other than `<directory>/.env`.
    pub fn with_destination(mut self, destination: impl Into<PathBuf>) -> Self {
        self.destination = destination.into();
        self
    }
}

/// Run the TUI application.
pub fn run(config: TuiConfig) -> AppResult<Outcome> {
    // Create tokio runtime for async operations
    let rt = tokio::runtime::Runtime::new()?;

    let terminal = ratatui::init();
    let result = rt.block_on(App::new(config).run(terminal));
    ratatui::restore();

    // A copy still in flight gets a moment to finish its rename
    rt.shutdown_timeout(std::time::Duration::from_millis(100));

    result
}
