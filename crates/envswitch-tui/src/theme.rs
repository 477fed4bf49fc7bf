//! Color theme for the TUI.
//!
//! Dark and light variants built from the Tailwind CSS slate palette, with
//! semantic slots for the selector, the preview syntax and the footer.

use ratatui::style::{Color, Modifier, Style};

/// Theme variant (dark or light).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeVariant {
    #[default]
    Dark,
    Light,
}

/// Color theme for the TUI.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Current theme variant.
    pub variant: ThemeVariant,

    // Base colors
    pub foreground: Color,
    pub muted: Color,

    // Selector
    pub highlighted: Style,
    pub file: Style,

    // Status colors
    pub success: Color,
    pub error: Color,

    // Panels
    pub border: Style,
    pub border_active: Style,
    pub title: Style,

    // Preview syntax
    pub comment: Style,
    pub key: Style,
    pub equals: Style,
    pub value: Style,
    pub scroll_indicator: Style,

    // Footer
    pub help_key: Style,
    pub help_desc: Style,
}

impl Theme {
    /// Dark theme using a slate-based palette.
    pub fn dark() -> Self {
        let slate_50 = Color::Rgb(248, 250, 252);
        let slate_100 = Color::Rgb(241, 245, 249);
        let slate_300 = Color::Rgb(203, 213, 225);
        let slate_400 = Color::Rgb(148, 163, 184);
        let slate_500 = Color::Rgb(100, 116, 139);
        let slate_600 = Color::Rgb(71, 85, 105);
        let slate_700 = Color::Rgb(51, 65, 85);

        let blue_400 = Color::Rgb(96, 165, 250);
        let green_500 = Color::Rgb(34, 197, 94);
        let yellow_400 = Color::Rgb(250, 204, 21);
        let red_500 = Color::Rgb(239, 68, 68);
        let cyan_400 = Color::Rgb(34, 211, 238);

        Self {
            variant: ThemeVariant::Dark,
            foreground: slate_100,
            muted: slate_500,

            highlighted: Style::new()
                .bg(slate_700)
                .fg(slate_50)
                .add_modifier(Modifier::BOLD),
            file: Style::new().fg(slate_300),

            success: green_500,
            error: red_500,

            border: Style::new().fg(slate_600),
            border_active: Style::new().fg(blue_400),
            title: Style::new().fg(blue_400).add_modifier(Modifier::BOLD),

            comment: Style::new().fg(slate_500),
            key: Style::new().fg(cyan_400),
            equals: Style::new().fg(slate_50),
            value: Style::new().fg(yellow_400),
            scroll_indicator: Style::new().fg(slate_400),

            help_key: Style::new().fg(blue_400).add_modifier(Modifier::BOLD),
            help_desc: Style::new().fg(slate_400),
        }
    }

    /// Light theme using a slate-based palette.
    pub fn light() -> Self {
        let slate_200 = Color::Rgb(226, 232, 240);
        let slate_400 = Color::Rgb(148, 163, 184);
        let slate_500 = Color::Rgb(100, 116, 139);
        let slate_600 = Color::Rgb(71, 85, 105);
        let slate_700 = Color::Rgb(51, 65, 85);
        let slate_900 = Color::Rgb(15, 23, 42);

        // Darker accents for contrast on light backgrounds
        let blue_700 = Color::Rgb(29, 78, 216);
        let green_600 = Color::Rgb(22, 163, 74);
        let yellow_700 = Color::Rgb(161, 98, 7);
        let red_600 = Color::Rgb(220, 38, 38);
        let cyan_700 = Color::Rgb(14, 116, 144);

        Self {
            variant: ThemeVariant::Light,
            foreground: slate_900,
            muted: slate_500,

            highlighted: Style::new()
                .bg(slate_200)
                .fg(slate_900)
                .add_modifier(Modifier::BOLD),
            file: Style::new().fg(slate_700),

            success: green_600,
            error: red_600,

            border: Style::new().fg(slate_400),
            border_active: Style::new().fg(blue_700),
            title: Style::new().fg(blue_700).add_modifier(Modifier::BOLD),

            comment: Style::new().fg(slate_500),
            key: Style::new().fg(cyan_700),
            equals: Style::new().fg(slate_900),
            value: Style::new().fg(yellow_700),
            scroll_indicator: Style::new().fg(slate_600),

            help_key: Style::new().fg(blue_700).add_modifier(Modifier::BOLD),
            help_desc: Style::new().fg(slate_600),
        }
    }

    /// Toggle between dark and light themes.
    pub fn toggle(&self) -> Self {
        match self.variant {
            ThemeVariant::Dark => Self::light(),
            ThemeVariant::Light => Self::dark(),
        }
    }

    /// Border style for a panel, depending on focus.
    pub fn panel_border(&self, focused: bool) -> Style {
        if focused {
            self.border_active
        } else {
            self.border
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
