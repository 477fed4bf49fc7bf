//! Application rendering.

use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::event::hint_bindings;
use crate::preview::{PreviewError, PreviewWindow};
use crate::theme::Theme;
use crate::ui::modals::{CommandModal, StatusMessage};
use crate::ui::{EnvSelector, PreviewPanel, left_panel_width, truncate_to_width};

use super::constants::MAX_DIAGNOSTIC_LINES;
use super::state::{AppPhase, Panel, SelectionState};

/// Rows taken by the footer.
const FOOTER_HEIGHT: u16 = 1;

/// Rows taken by a panel's top and bottom border.
const BORDER_ROWS: u16 = 2;

/// Render context containing all the state needed for rendering.
pub struct RenderContext<'a> {
    pub state: &'a SelectionState,
    pub theme: &'a Theme,
    pub preview: Option<Result<PreviewWindow, PreviewError>>,
}

/// Rows given to the diagnostics strip.
pub fn diagnostics_height(count: usize) -> u16 {
    count.min(MAX_DIAGNOSTIC_LINES) as u16
}

/// Number of file lines visible in the preview panel.
pub fn preview_viewport(terminal_rows: u16, diagnostics: usize) -> usize {
    terminal_rows
        .saturating_sub(FOOTER_HEIGHT)
        .saturating_sub(diagnostics_height(diagnostics))
        .saturating_sub(BORDER_ROWS) as usize
}

/// Main render function for the application.
pub fn render_app(ctx: &RenderContext, area: Rect, buf: &mut Buffer) {
    let theme = ctx.theme;
    let state = ctx.state;

    // Never draw past the last known terminal height
    let area = Rect {
        height: area.height.min(state.terminal_rows()),
        ..area
    };
    buf.set_style(area, Style::new().fg(theme.foreground));

    let diagnostics: &[String] = if state.phase() == AppPhase::Selecting {
        state.diagnostics()
    } else {
        &[]
    };

    let [content, diag_area, footer] = Layout::vertical([
        Constraint::Min(1),
        Constraint::Length(diagnostics_height(diagnostics.len())),
        Constraint::Length(FOOTER_HEIGHT),
    ])
    .areas(area);

    match state.phase() {
        AppPhase::Loading => {
            StatusMessage::new(theme, "Loading...", theme.muted).render(content, buf);
        }
        AppPhase::Failed => {
            let message = format!("Error: {}", state.error().unwrap_or("unknown error"));
            StatusMessage::new(theme, message, theme.error)
                .hint("Press q to quit")
                .render(content, buf);
        }
        AppPhase::Done => {
            let name = state.confirmed().map(|f| f.name.as_str()).unwrap_or_default();
            let destination = state
                .destination()
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            StatusMessage::new(
                theme,
                format!("✓ Done! {name} copied to {destination}"),
                theme.success,
            )
            .render(content, buf);
        }
        AppPhase::Running => {
            StatusMessage::new(theme, "Running command...", theme.muted).render(content, buf);
        }
        AppPhase::Selecting => render_selecting(ctx, content, buf),
    }

    render_diagnostics(theme, diagnostics, diag_area, buf);
    render_footer(ctx, footer, buf);

    if state.phase() == AppPhase::Selecting && state.modal_visible() {
        CommandModal::new(theme, state.commands(), state.modal_cursor())
            .source(state.command_source().path())
            .render(area, buf);
    }
}

fn render_selecting(ctx: &RenderContext, area: Rect, buf: &mut Buffer) {
    let state = ctx.state;
    let selector_width = left_panel_width(state.files());

    let [selector_area, preview_area] =
        Layout::horizontal([Constraint::Length(selector_width), Constraint::Min(10)]).areas(area);

    EnvSelector::new(
        ctx.theme,
        state.files(),
        state.highlighted_index(),
        state.panel() == Panel::Selector,
    )
    .render(selector_area, buf);

    PreviewPanel::new(
        ctx.theme,
        ctx.preview.as_ref(),
        state.panel() == Panel::Preview,
    )
    .render(preview_area, buf);
}

fn render_diagnostics(theme: &Theme, diagnostics: &[String], area: Rect, buf: &mut Buffer) {
    if area.height == 0 {
        return;
    }

    let width = area.width as usize;
    let lines: Vec<Line> = diagnostics
        .iter()
        .take(area.height as usize)
        .map(|d| {
            Line::styled(
                truncate_to_width(&format!("! {d}"), width),
                Style::new().fg(theme.muted),
            )
        })
        .collect();

    Paragraph::new(lines).render(area, buf);
}

fn render_footer(ctx: &RenderContext, area: Rect, buf: &mut Buffer) {
    let hints = hint_bindings(ctx.state);

    let mut spans: Vec<Span> = Vec::with_capacity(hints.len() * 3);
    for (i, hint) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", ctx.theme.help_desc));
        }
        spans.push(Span::styled(hint.keys, ctx.theme.help_key));
        spans.push(Span::styled(format!(": {}", hint.description), ctx.theme.help_desc));
    }

    Paragraph::new(Line::from(spans)).render(area, buf);
}
