//! Application state and event loop.

mod constants;
pub mod dispatch;
mod render;
pub mod state;

use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyEvent, KeyEventKind};
use futures::StreamExt;
use ratatui::DefaultTerminal;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use tokio::sync::mpsc;

use crate::event::KeyAction;
use crate::preview::{PreviewError, PreviewLoader, PreviewWindow};
use crate::theme::Theme;
use crate::{Outcome, TuiConfig};

use constants::{TASK_CHANNEL_SIZE, TICK_INTERVAL_MS};
use dispatch::{start_catalog, start_copy};
use render::{RenderContext, preview_viewport, render_app};

pub use dispatch::{Route, route};
pub use state::{AppEvent, AppPhase, Effect, ExitReason, Panel, SelectionState};

/// Result type for the application.
pub type AppResult<T> = color_eyre::Result<T>;

/// The runtime around [`SelectionState`]: performs effects, feeds their
/// results back, and renders.
pub struct App {
    state: SelectionState,
    config: TuiConfig,
    theme: Theme,
    /// Window of the highlighted file, recomputed after every event.
    preview: Option<Result<PreviewWindow, PreviewError>>,
    task_tx: mpsc::Sender<AppEvent>,
    task_rx: mpsc::Receiver<AppEvent>,
    outcome: Option<Outcome>,
    needs_redraw: bool,
}

impl App {
    /// Create a new application for a project directory.
    pub fn new(config: TuiConfig) -> Self {
        let (task_tx, task_rx) = mpsc::channel(TASK_CHANNEL_SIZE);

        Self {
            state: SelectionState::new(config.destination.clone()),
            config,
            theme: Theme::default(),
            preview: None,
            task_tx,
            task_rx,
            outcome: None,
            needs_redraw: true,
        }
    }

    /// Run the application until it produces an outcome.
    pub async fn run(mut self, mut terminal: DefaultTerminal) -> AppResult<Outcome> {
        if let Ok((_, rows)) = crossterm::terminal::size() {
            self.apply(AppEvent::Resize(rows));
        }
        self.apply(AppEvent::Init);

        let period = Duration::from_millis(TICK_INTERVAL_MS);
        let mut interval = tokio::time::interval(period);
        let mut events = EventStream::new();

        loop {
            if self.needs_redraw {
                terminal.draw(|frame| frame.render_widget(&self, frame.area()))?;
                self.needs_redraw = false;
            }

            if let Some(outcome) = self.outcome.take() {
                return Ok(outcome);
            }

            tokio::select! {
                biased;

                Some(Ok(event)) = events.next() => {
                    self.handle_terminal_event(event);
                }

                Some(event) = self.task_rx.recv() => {
                    self.apply(event);
                }

                _ = interval.tick() => {}
            }
        }
    }

    /// Translate a terminal event into state machine input.
    pub fn handle_terminal_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
            Event::Resize(_, rows) => self.apply(AppEvent::Resize(rows)),
            _ => {}
        }
    }

    /// Handle a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        let action = KeyAction::from_key_event(key);

        if action == KeyAction::ToggleTheme {
            self.theme = self.theme.toggle();
            self.needs_redraw = true;
            return;
        }

        if let Some(event) = action.to_event() {
            self.apply(event);
        }
    }

    /// Dispatch one event and carry out the resulting effect.
    pub fn apply(&mut self, event: AppEvent) {
        let to_end = matches!(event, AppEvent::JumpToBottom);
        if let Some(effect) = self.state.dispatch(event) {
            self.perform(effect);
        }
        self.refresh_preview();
        if to_end {
            self.settle_preview_end();
        }
        self.needs_redraw = true;
    }

    /// Wait for the next background result and apply it.
    ///
    /// Returns `false` once no task can deliver anything anymore.
    pub async fn process_task(&mut self) -> bool {
        match self.task_rx.recv().await {
            Some(event) => {
                self.apply(event);
                true
            }
            None => false,
        }
    }

    fn perform(&mut self, effect: Effect) {
        tracing::debug!(?effect, "perform");

        match effect {
            Effect::LoadCatalog => {
                start_catalog(self.config.catalog.clone(), self.task_tx.clone());
            }
            Effect::CopyFile {
                source,
                destination,
            } => {
                start_copy(source, destination, self.task_tx.clone());
            }
            Effect::RunCommand(command) => {
                self.outcome = Some(Outcome::Run(command));
            }
            Effect::Finish => {
                self.outcome = Some(match self.state.confirmed() {
                    Some(file) => Outcome::Done {
                        file: file.clone(),
                        destination: self.state.destination().clone(),
                    },
                    None => Outcome::Exit(ExitReason::Quit),
                });
            }
            Effect::Exit(ExitReason::Quit) if self.state.phase() == AppPhase::Failed => {
                let message = self.state.error().unwrap_or_default().to_string();
                self.outcome = Some(Outcome::Failed(message));
            }
            Effect::Exit(reason) => {
                self.outcome = Some(Outcome::Exit(reason));
            }
        }
    }

    /// Read the highlighted file again and cut the visible window.
    fn refresh_preview(&mut self) {
        if self.state.phase() != AppPhase::Selecting {
            return;
        }
        self.preview = self.state.highlighted().map(|file| {
            PreviewLoader::render(&file.path, self.state.scroll(), self.viewport())
        });
    }

    /// Turn the open-ended offset left by `End` in the preview into the
    /// offset of the last page, so scrolling back up starts from there.
    ///
    /// Other scrolling stores whatever offset it reaches; the window is
    /// clamped when it is cut.
    fn settle_preview_end(&mut self) {
        if self.state.panel() != Panel::Preview || self.state.modal_visible() {
            return;
        }
        if let Some(Ok(window)) = &self.preview {
            self.state.dispatch(AppEvent::ClampScroll(window.first_line));
        }
    }

    fn viewport(&self) -> usize {
        preview_viewport(self.state.terminal_rows(), self.state.diagnostics().len())
    }

    fn preview_window(&self) -> Option<Result<PreviewWindow, PreviewError>> {
        self.preview.clone()
    }

    /// Current selection state.
    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    /// Outcome produced so far, if the run has ended.
    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    /// Current theme.
    pub fn theme(&self) -> &Theme {
        &self.theme
    }
}

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let ctx = RenderContext {
            state: &self.state,
            theme: &self.theme,
            preview: self.preview_window(),
        };
        render_app(&ctx, area, buf);
    }
}
