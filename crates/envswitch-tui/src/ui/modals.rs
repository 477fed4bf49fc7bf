//! Modal dialog widgets.

use std::path::Path;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Widget};
use unicode_width::UnicodeWidthStr;

use envswitch_core::Command;

use crate::theme::Theme;
use crate::ui::{centered_popup, truncate_to_width};

const COMMAND_MODAL_TITLE: &str = "Select command to run:";

/// Chooser for the follow-up command.
pub struct CommandModal<'a> {
    theme: &'a Theme,
    commands: &'a [Command],
    cursor: usize,
    source: Option<String>,
}

impl<'a> CommandModal<'a> {
    /// Create a new command chooser.
    pub fn new(theme: &'a Theme, commands: &'a [Command], cursor: usize) -> Self {
        Self {
            theme,
            commands,
            cursor,
            source: None,
        }
    }

    /// Name the file the commands were read from in the bottom border.
    pub fn source(mut self, path: Option<&Path>) -> Self {
        self.source = path
            .and_then(Path::file_name)
            .map(|name| format!(" from {} ", name.to_string_lossy()));
        self
    }
}

impl Widget for CommandModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let widest = self
            .commands
            .iter()
            .map(|c| c.name.width())
            .chain(std::iter::once(COMMAND_MODAL_TITLE.width()))
            .chain(self.source.as_deref().map(|s| s.width()))
            .max()
            .unwrap_or(0);

        // Borders, marker and the hint line
        let popup_width = u16::try_from(widest + 8).unwrap_or(u16::MAX).max(32);
        let popup_height = u16::try_from(self.commands.len() + 4).unwrap_or(u16::MAX);
        let popup_area = centered_popup(popup_width, popup_height, area);

        Clear.render(popup_area, buf);

        let mut block = Block::default()
            .title(format!(" {COMMAND_MODAL_TITLE} "))
            .title_style(self.theme.title)
            .borders(Borders::ALL)
            .border_style(self.theme.border_active);
        if let Some(source) = self.source {
            block = block.title_bottom(Line::styled(source, Style::new().fg(self.theme.muted)));
        }

        let inner = block.inner(popup_area);
        block.render(popup_area, buf);

        let list_height = (inner.height as usize).saturating_sub(2);
        let label_width = (inner.width as usize).saturating_sub(2);
        let offset = if self.cursor >= list_height && list_height > 0 {
            self.cursor + 1 - list_height
        } else {
            0
        };

        let mut lines: Vec<Line> = self
            .commands
            .iter()
            .enumerate()
            .skip(offset)
            .take(list_height)
            .map(|(index, command)| {
                let label = truncate_to_width(&command.name, label_width);
                if index == self.cursor {
                    Line::from(vec![
                        Span::styled("❯ ", self.theme.highlighted),
                        Span::styled(label, self.theme.highlighted),
                    ])
                } else {
                    Line::from(vec![Span::raw("  "), Span::styled(label, self.theme.file)])
                }
            })
            .collect();

        lines.push(Line::raw(""));
        lines.push(Line::from(vec![
            Span::styled("Esc", self.theme.help_key),
            Span::styled(": Cancel | ", self.theme.help_desc),
            Span::styled("Enter", self.theme.help_key),
            Span::styled(": Select", self.theme.help_desc),
        ]));

        Paragraph::new(lines)
            .style(Style::new().fg(self.theme.foreground))
            .render(inner, buf);
    }
}

/// Centered status message used for loading, errors and completion.
pub struct StatusMessage<'a> {
    theme: &'a Theme,
    message: String,
    color: ratatui::style::Color,
    hint: Option<&'a str>,
}

impl<'a> StatusMessage<'a> {
    pub fn new(theme: &'a Theme, message: impl Into<String>, color: ratatui::style::Color) -> Self {
        Self {
            theme,
            message: message.into(),
            color,
            hint: None,
        }
    }

    /// Add a dimmed second line.
    pub fn hint(mut self, hint: &'a str) -> Self {
        self.hint = Some(hint);
        self
    }
}

impl Widget for StatusMessage<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut lines = vec![Line::styled(
            self.message,
            Style::new().fg(self.color).add_modifier(Modifier::BOLD),
        )];
        if let Some(hint) = self.hint {
            lines.push(Line::raw(""));
            lines.push(Line::styled(hint, Style::new().fg(self.theme.muted)));
        }

        let height = lines.len() as u16;
        let y = area.y + area.height.saturating_sub(height) / 2;
        let centered = Rect::new(area.x, y, area.width, height.min(area.height));

        Paragraph::new(lines).centered().render(centered, buf);
    }
}
