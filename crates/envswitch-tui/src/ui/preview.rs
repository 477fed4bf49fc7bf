//! Preview panel widget.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget, Wrap};

use crate::preview::{PreviewError, PreviewLine, PreviewWindow};
use crate::theme::Theme;

/// Colored, scrollable view of the highlighted file.
pub struct PreviewPanel<'a> {
    theme: &'a Theme,
    window: Option<&'a Result<PreviewWindow, PreviewError>>,
    focused: bool,
}

impl<'a> PreviewPanel<'a> {
    pub fn new(
        theme: &'a Theme,
        window: Option<&'a Result<PreviewWindow, PreviewError>>,
        focused: bool,
    ) -> Self {
        Self {
            theme,
            window,
            focused,
        }
    }

    fn styled_line(&self, line: &PreviewLine) -> Line<'static> {
        match line {
            PreviewLine::Comment(text) => Line::styled(text.clone(), self.theme.comment),
            PreviewLine::Blank => Line::raw(""),
            PreviewLine::KeyValue { key, value } => Line::from(vec![
                Span::styled(key.clone(), self.theme.key),
                Span::styled("=", self.theme.equals),
                Span::styled(value.clone(), self.theme.value),
            ]),
            PreviewLine::Plain(text) => Line::raw(text.clone()),
        }
    }

    fn block(&self) -> Block<'static> {
        Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.panel_border(self.focused))
    }
}

impl Widget for PreviewPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        match self.window {
            Some(Ok(window)) => {
                let indicators = format!(
                    " {}{} ",
                    if window.can_scroll_up { "↑" } else { " " },
                    if window.can_scroll_down { "↓" } else { " " },
                );
                let block = self
                    .block()
                    .title(Line::from(vec![
                        Span::styled(" Preview: ", self.theme.title),
                        Span::styled(
                            format!("{} ", window.position_label()),
                            Style::new().fg(self.theme.muted),
                        ),
                    ]))
                    .title(
                        Line::styled(indicators, self.theme.scroll_indicator).right_aligned(),
                    );

                let lines: Vec<Line> = window.lines.iter().map(|l| self.styled_line(l)).collect();
                Paragraph::new(lines).block(block).render(area, buf);
            }
            Some(Err(e)) => {
                let block = self.block().title(Span::styled(
                    " Error reading file ",
                    Style::new()
                        .fg(self.theme.error)
                        .add_modifier(Modifier::BOLD),
                ));
                Paragraph::new(Line::styled(e.to_string(), Style::new().fg(self.theme.error)))
                    .wrap(Wrap { trim: true })
                    .block(block)
                    .render(area, buf);
            }
            None => {
                let block = self
                    .block()
                    .title(Span::styled(" Preview: ", self.theme.title));
                Paragraph::new(Line::styled(
                    "No file highlighted",
                    Style::new().fg(self.theme.muted),
                ))
                .block(block)
                .render(area, buf);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_render_window_and_indicators() {
        let theme = Theme::default();
        let content = (1..=10).map(|i| format!("K{i}=v")).collect::<Vec<_>>().join("\n");
        let window = Ok(PreviewWindow::from_content(&content, 2, 3));

        let area = Rect::new(0, 0, 40, 5);
        let mut buf = Buffer::empty(area);
        PreviewPanel::new(&theme, Some(&window), false).render(area, &mut buf);

        let title = row(&buf, 0);
        assert!(title.contains("Preview:"));
        assert!(title.contains("3-5 / 10"));
        assert!(title.contains("↑↓"));
        assert!(row(&buf, 1).contains("K3=v"));
    }

    #[test]
    fn test_render_error() {
        let theme = Theme::default();
        let window = Err(PreviewError::NotText);

        let area = Rect::new(0, 0, 40, 4);
        let mut buf = Buffer::empty(area);
        PreviewPanel::new(&theme, Some(&window), false).render(area, &mut buf);

        assert!(row(&buf, 0).contains("Error reading file"));
        assert!(row(&buf, 1).contains("Not a text file"));
    }
}
