//! Environment file list.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

use envswitch_core::EnvFile;

use crate::theme::Theme;

use super::truncate_to_width;

/// Title of the selector panel.
pub const SELECTOR_TITLE: &str = "Select .env file:";

/// List of candidate files with the highlighted one marked.
pub struct EnvSelector<'a> {
    theme: &'a Theme,
    files: &'a [EnvFile],
    highlighted: Option<usize>,
    focused: bool,
}

impl<'a> EnvSelector<'a> {
    pub fn new(
        theme: &'a Theme,
        files: &'a [EnvFile],
        highlighted: Option<usize>,
        focused: bool,
    ) -> Self {
        Self {
            theme,
            files,
            highlighted,
            focused,
        }
    }

    /// First visible row so the highlight stays on screen.
    fn offset(&self, height: usize) -> usize {
        match self.highlighted {
            Some(index) if height > 0 && index >= height => index + 1 - height,
            _ => 0,
        }
    }
}

impl Widget for EnvSelector<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(Span::styled(format!(" {SELECTOR_TITLE} "), self.theme.title))
            .borders(Borders::ALL)
            .border_style(self.theme.panel_border(self.focused));

        let inner = block.inner(area);
        block.render(area, buf);

        let height = inner.height as usize;
        let name_width = (inner.width as usize).saturating_sub(2);
        let offset = self.offset(height);

        let lines: Vec<Line> = self
            .files
            .iter()
            .enumerate()
            .skip(offset)
            .take(height)
            .map(|(index, file)| {
                let name = truncate_to_width(&file.name, name_width);
                if Some(index) == self.highlighted {
                    Line::from(vec![
                        Span::styled("❯ ", self.theme.highlighted),
                        Span::styled(name, self.theme.highlighted),
                    ])
                    .style(self.theme.highlighted)
                } else {
                    Line::from(vec![Span::raw("  "), Span::styled(name, self.theme.file)])
                }
            })
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn files(count: usize) -> Vec<EnvFile> {
        (0..count)
            .map(|i| EnvFile::new(format!(".env.{i}"), format!("/app/.env.{i}")))
            .collect()
    }

    #[test]
    fn test_offset_keeps_highlight_visible() {
        let theme = Theme::default();
        let files = files(20);

        assert_eq!(EnvSelector::new(&theme, &files, Some(3), true).offset(5), 0);
        assert_eq!(EnvSelector::new(&theme, &files, Some(12), true).offset(5), 8);
        assert_eq!(EnvSelector::new(&theme, &files, None, true).offset(5), 0);
    }

    #[test]
    fn test_render_marks_highlight() {
        let theme = Theme::default();
        let files = files(2);
        let area = Rect::new(0, 0, 25, 4);
        let mut buf = Buffer::empty(area);

        EnvSelector::new(&theme, &files, Some(1), true).render(area, &mut buf);

        let row: String = (0..area.width)
            .map(|x| buf[(x, 2)].symbol().to_string())
            .collect();
        assert!(row.contains("❯ .env.1"), "row was {row:?}");
    }
}
