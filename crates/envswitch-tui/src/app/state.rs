//! Selection state and the transitions between phases.
//!
//! [`SelectionState::dispatch`] is the only way state changes. It performs
//! no I/O: anything that touches the filesystem or the process is returned
//! as an [`Effect`] for the runtime to carry out, and the result comes back
//! as another [`AppEvent`].

use std::path::PathBuf;

use strum::Display;

use envswitch_catalog::{Catalog, CommandSource};
use envswitch_core::{Command, EnvFile, SwitchError};

use super::constants::{DEFAULT_TERMINAL_ROWS, INTERRUPT_EXIT_CODE, PAGE_SIZE};
use super::dispatch::{Route, route};

/// Lifecycle phase of a run.
///
/// Phases only move forward: `Loading → Selecting → Running | Done | Failed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum AppPhase {
    /// Waiting for the catalog scan.
    #[default]
    Loading,
    /// The user is choosing a file (and possibly a command).
    Selecting,
    /// A follow-up command has been handed the terminal.
    Running,
    /// The file was activated and there is nothing to run.
    Done,
    /// Something went wrong; the error message is shown until quit.
    Failed,
}

/// Which panel receives directional keys while selecting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum Panel {
    #[default]
    Selector,
    Preview,
}

impl Panel {
    /// Switch to the other panel.
    pub fn toggle(self) -> Self {
        match self {
            Self::Selector => Self::Preview,
            Self::Preview => Self::Selector,
        }
    }
}

/// Why the user asked to leave.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    /// The quit key.
    Quit,
    /// Ctrl-C.
    Interrupt,
}

impl ExitReason {
    /// Process exit code for this reason.
    pub fn exit_code(self) -> i32 {
        match self {
            Self::Quit => 0,
            Self::Interrupt => INTERRUPT_EXIT_CODE,
        }
    }
}

/// Input to the state machine: key-level actions, terminal changes and
/// results of effects.
#[derive(Debug)]
pub enum AppEvent {
    /// Fired once at startup.
    Init,
    /// The catalog scan finished.
    CatalogLoaded(Result<Catalog, SwitchError>),
    Quit,
    Interrupt,
    CloseModal,
    SwitchPanel,
    MoveUp,
    MoveDown,
    PageUp,
    PageDown,
    JumpToTop,
    JumpToBottom,
    /// Highlight a specific file in the selector.
    Highlight(EnvFile),
    /// Scroll the preview by a signed number of lines.
    ScrollPreview(isize),
    /// Commit whatever has focus: the modal entry or the highlighted file.
    Enter,
    /// Commit a specific file.
    Confirm(EnvFile),
    /// The copy to the destination finished.
    CopyFinished(Result<u64, SwitchError>),
    /// Run a specific command from the modal.
    SelectCommand(Command),
    /// The terminal now has this many rows.
    Resize(u16),
    /// Lower the preview offset to this last-page offset after `End`.
    ClampScroll(usize),
}

/// Side effect requested by a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Scan the project directory; answer with [`AppEvent::CatalogLoaded`].
    LoadCatalog,
    /// Copy a file; answer with [`AppEvent::CopyFinished`].
    CopyFile {
        source: PathBuf,
        destination: PathBuf,
    },
    /// Leave the UI and hand the terminal to a command.
    RunCommand(Command),
    /// Leave the UI after a successful switch with nothing to run.
    Finish,
    /// Leave immediately.
    Exit(ExitReason),
}

/// The complete, exclusively owned state of a run.
#[derive(Debug)]
pub struct SelectionState {
    phase: AppPhase,
    destination: PathBuf,
    files: Vec<EnvFile>,
    commands: Vec<Command>,
    command_source: CommandSource,
    diagnostics: Vec<String>,
    /// Index into `files`, so the highlight is always a member of the list.
    highlighted: Option<usize>,
    confirmed: Option<EnvFile>,
    chosen_command: Option<Command>,
    panel: Panel,
    scroll: usize,
    modal_visible: bool,
    modal_cursor: usize,
    terminal_rows: u16,
    error: Option<String>,
    catalog_pending: bool,
    copy_pending: bool,
    copied: bool,
}

impl SelectionState {
    /// Create the initial state for a run that writes to `destination`.
    pub fn new(destination: impl Into<PathBuf>) -> Self {
        Self {
            phase: AppPhase::Loading,
            destination: destination.into(),
            files: Vec::new(),
            commands: Vec::new(),
            command_source: CommandSource::None,
            diagnostics: Vec::new(),
            highlighted: None,
            confirmed: None,
            chosen_command: None,
            panel: Panel::Selector,
            scroll: 0,
            modal_visible: false,
            modal_cursor: 0,
            terminal_rows: DEFAULT_TERMINAL_ROWS,
            error: None,
            catalog_pending: false,
            copy_pending: false,
            copied: false,
        }
    }

    /// Apply one event and return the side effect it requires, if any.
    pub fn dispatch(&mut self, event: AppEvent) -> Option<Effect> {
        tracing::debug!(phase = %self.phase, ?event, "dispatch");

        match event {
            // Valid in every phase.
            AppEvent::Quit => Some(Effect::Exit(ExitReason::Quit)),
            AppEvent::Interrupt => Some(Effect::Exit(ExitReason::Interrupt)),
            AppEvent::Resize(rows) => {
                self.terminal_rows = rows;
                None
            }
            AppEvent::ClampScroll(max) => {
                self.scroll = self.scroll.min(max);
                None
            }

            // Results of effects.
            AppEvent::Init => self.init(),
            AppEvent::CatalogLoaded(result) => {
                self.on_catalog_loaded(result);
                None
            }
            AppEvent::CopyFinished(result) => self.on_copy_finished(result),

            // Nothing to interact with anymore: Enter and Esc leave too.
            AppEvent::Enter | AppEvent::CloseModal
                if matches!(self.phase, AppPhase::Failed | AppPhase::Done) =>
            {
                Some(Effect::Exit(ExitReason::Quit))
            }

            // Everything below is interaction, ignored outside of selection
            // and while a scan or copy is outstanding.
            _ if self.phase != AppPhase::Selecting || self.is_busy() => None,

            AppEvent::CloseModal => {
                self.modal_visible = false;
                None
            }
            AppEvent::SwitchPanel => {
                if !self.modal_visible {
                    self.panel = self.panel.toggle();
                }
                None
            }
            AppEvent::MoveUp => {
                self.move_by(-1);
                None
            }
            AppEvent::MoveDown => {
                self.move_by(1);
                None
            }
            AppEvent::PageUp => {
                self.move_by(-(PAGE_SIZE as isize));
                None
            }
            AppEvent::PageDown => {
                self.move_by(PAGE_SIZE as isize);
                None
            }
            AppEvent::JumpToTop => {
                self.jump(false);
                None
            }
            AppEvent::JumpToBottom => {
                self.jump(true);
                None
            }
            AppEvent::Highlight(file) => {
                if self.panel == Panel::Selector && !self.modal_visible {
                    if let Some(index) = self.index_of(&file) {
                        self.highlight_index(index);
                    }
                }
                None
            }
            AppEvent::ScrollPreview(delta) => {
                if self.panel == Panel::Preview && !self.modal_visible {
                    self.scroll_by(delta);
                }
                None
            }
            AppEvent::Enter => {
                if self.modal_visible {
                    let command = self.commands.get(self.modal_cursor).cloned()?;
                    self.select_command(command)
                } else {
                    let file = self.highlighted().cloned()?;
                    self.confirm(file)
                }
            }
            AppEvent::Confirm(file) => self.confirm(file),
            AppEvent::SelectCommand(command) => self.select_command(command),
        }
    }

    fn init(&mut self) -> Option<Effect> {
        if self.phase != AppPhase::Loading || self.catalog_pending {
            return None;
        }
        self.catalog_pending = true;
        Some(Effect::LoadCatalog)
    }

    fn on_catalog_loaded(&mut self, result: Result<Catalog, SwitchError>) {
        if self.phase != AppPhase::Loading {
            return;
        }
        self.catalog_pending = false;

        match result {
            Ok(catalog) if catalog.files.is_empty() => {
                self.fail(SwitchError::CatalogEmpty.to_string());
            }
            Ok(catalog) => {
                self.files = catalog.files;
                self.commands = catalog.commands;
                self.command_source = catalog.source;
                self.diagnostics = catalog.diagnostics;
                self.highlighted = Some(0);
                self.scroll = 0;
                self.phase = AppPhase::Selecting;
                tracing::info!(
                    files = self.files.len(),
                    commands = self.commands.len(),
                    "catalog loaded"
                );
            }
            Err(e) => self.fail(e.to_string()),
        }
    }

    fn confirm(&mut self, file: EnvFile) -> Option<Effect> {
        if self.modal_visible {
            return None;
        }

        if self.confirmed.is_some() {
            // One copy per run. A dismissed modal can be brought back.
            if self.copied && self.commands.len() > 1 && self.chosen_command.is_none() {
                self.open_modal();
            }
            return None;
        }

        self.index_of(&file)?;
        tracing::info!(file = %file.name, "confirmed");

        let source = file.path.clone();
        self.confirmed = Some(file);
        self.copy_pending = true;

        Some(Effect::CopyFile {
            source,
            destination: self.destination.clone(),
        })
    }

    fn on_copy_finished(&mut self, result: Result<u64, SwitchError>) -> Option<Effect> {
        if !self.copy_pending {
            return None;
        }
        self.copy_pending = false;

        if let Err(e) = result {
            self.fail(e.to_string());
            return None;
        }
        self.copied = true;

        match route(&self.commands) {
            Route::Finish => {
                self.phase = AppPhase::Done;
                Some(Effect::Finish)
            }
            Route::Run(command) => self.launch(command),
            Route::Choose => {
                self.open_modal();
                None
            }
        }
    }

    fn select_command(&mut self, command: Command) -> Option<Effect> {
        if !self.modal_visible || !self.commands.contains(&command) {
            return None;
        }
        self.modal_visible = false;
        self.launch(command)
    }

    fn launch(&mut self, command: Command) -> Option<Effect> {
        tracing::info!(command = %command.command, "running");
        self.phase = AppPhase::Running;
        self.chosen_command = Some(command.clone());
        Some(Effect::RunCommand(command))
    }

    fn open_modal(&mut self) {
        self.modal_visible = true;
        self.modal_cursor = 0;
    }

    fn fail(&mut self, message: String) {
        tracing::warn!(%message, "failed");
        self.error = Some(message);
        self.modal_visible = false;
        self.phase = AppPhase::Failed;
    }

    fn move_by(&mut self, delta: isize) {
        if self.modal_visible {
            self.modal_cursor = clamp_offset(self.modal_cursor, delta, self.commands.len());
            return;
        }

        match self.panel {
            Panel::Selector => {
                let current = self.highlighted.unwrap_or(0);
                let index = clamp_offset(current, delta, self.files.len());
                if !self.files.is_empty() {
                    self.highlight_index(index);
                }
            }
            Panel::Preview => self.scroll_by(delta),
        }
    }

    fn jump(&mut self, to_end: bool) {
        if self.modal_visible {
            self.modal_cursor = if to_end {
                self.commands.len().saturating_sub(1)
            } else {
                0
            };
            return;
        }

        match self.panel {
            Panel::Selector if !self.files.is_empty() => {
                let index = if to_end { self.files.len() - 1 } else { 0 };
                self.highlight_index(index);
            }
            Panel::Preview => self.scroll = if to_end { usize::MAX } else { 0 },
            Panel::Selector => {}
        }
    }

    fn highlight_index(&mut self, index: usize) {
        self.highlighted = Some(index);
        self.scroll = 0;
    }

    fn scroll_by(&mut self, delta: isize) {
        self.scroll = self.scroll.saturating_add_signed(delta);
    }

    fn index_of(&self, file: &EnvFile) -> Option<usize> {
        self.files.iter().position(|f| f == file)
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> AppPhase {
        self.phase
    }

    /// Whether a scan or copy is outstanding.
    pub fn is_busy(&self) -> bool {
        self.catalog_pending || self.copy_pending
    }

    /// Candidate files, sorted by name.
    pub fn files(&self) -> &[EnvFile] {
        &self.files
    }

    /// Commands offered after switching.
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Where the commands came from.
    pub fn command_source(&self) -> &CommandSource {
        &self.command_source
    }

    /// Non-fatal catalog problems.
    pub fn diagnostics(&self) -> &[String] {
        &self.diagnostics
    }

    /// The highlighted file.
    pub fn highlighted(&self) -> Option<&EnvFile> {
        self.highlighted.and_then(|i| self.files.get(i))
    }

    /// Index of the highlighted file.
    pub fn highlighted_index(&self) -> Option<usize> {
        self.highlighted
    }

    /// The file the user committed to, once confirmed.
    pub fn confirmed(&self) -> Option<&EnvFile> {
        self.confirmed.as_ref()
    }

    /// The command handed the terminal, once chosen.
    pub fn chosen_command(&self) -> Option<&Command> {
        self.chosen_command.as_ref()
    }

    /// Panel receiving directional keys.
    pub fn panel(&self) -> Panel {
        self.panel
    }

    /// Preview scroll offset; the upper bound is applied when rendering.
    pub fn scroll(&self) -> usize {
        self.scroll
    }

    /// Whether the command modal is shown.
    pub fn modal_visible(&self) -> bool {
        self.modal_visible
    }

    /// Highlighted entry in the command modal.
    pub fn modal_cursor(&self) -> usize {
        self.modal_cursor
    }

    /// Last known terminal height.
    pub fn terminal_rows(&self) -> u16 {
        self.terminal_rows
    }

    /// Message shown in the `Failed` phase.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// File every selection overwrites.
    pub fn destination(&self) -> &PathBuf {
        &self.destination
    }
}

/// Move `current` by `delta` within `0..len`.
fn clamp_offset(current: usize, delta: isize, len: usize) -> usize {
    current
        .saturating_add_signed(delta)
        .min(len.saturating_sub(1))
}
