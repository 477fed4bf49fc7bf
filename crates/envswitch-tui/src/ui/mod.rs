//! UI components and widgets.

pub mod modals;
mod preview;
mod selector;

pub use preview::PreviewPanel;
pub use selector::{EnvSelector, SELECTOR_TITLE};

use ratatui::layout::Rect;
use unicode_width::UnicodeWidthStr;

use envswitch_core::EnvFile;

/// Narrowest the selector panel gets.
const MIN_SELECTOR_WIDTH: u16 = 25;

/// Widest the selector panel gets.
const MAX_SELECTOR_WIDTH: u16 = 50;

/// Room for borders, the highlight marker and padding.
const SELECTOR_PADDING: usize = 8;

/// Width of the selector panel for a list of files.
pub fn left_panel_width(files: &[EnvFile]) -> u16 {
    let widest = files
        .iter()
        .map(|f| f.name.width())
        .chain(std::iter::once(SELECTOR_TITLE.width()))
        .max()
        .unwrap_or(0);

    let width = u16::try_from(widest + SELECTOR_PADDING).unwrap_or(u16::MAX);
    width.clamp(MIN_SELECTOR_WIDTH, MAX_SELECTOR_WIDTH)
}

/// A `width` x `height` rectangle centered in `area`, shrunk to fit.
pub fn centered_popup(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width.saturating_sub(4));
    let height = height.min(area.height.saturating_sub(2));

    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;

    Rect::new(x, y, width, height)
}

/// Truncate `text` to `max` display columns, marking the cut with `…`.
pub fn truncate_to_width(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w + 1 > max {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}
