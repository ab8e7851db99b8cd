use crate::presentation::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

const BACK_ARROW: &str = "←";

/// Colors of the title bar.
#[allow(missing_docs)]
pub struct TitleBarStyle {
    pub background: Style,
    pub title: Style,
    pub back: Style,
}

impl TitleBarStyle {
    /// Derives the title bar colors from the accent.
    #[must_use]
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            title: theme.title_style,
            back: Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
            ..Self::default()
        }
    }
}

impl Default for TitleBarStyle {
    fn default() -> Self {
        Self {
            background: Style::default(),
            title: Style::default().add_modifier(Modifier::BOLD),
            back: Style::default(),
        }
    }
}

/// Single-row app bar with an optional back arrow.
pub struct TitleBar<'a> {
    title: &'a str,
    back_indicator: bool,
    style: TitleBarStyle,
}

impl<'a> TitleBar<'a> {
    /// Creates a title bar with default colors.
    #[must_use]
    pub fn new(title: &'a str) -> Self {
        Self {
            title,
            back_indicator: false,
            style: TitleBarStyle::default(),
        }
    }

    /// Prefixes the title with a back arrow.
    #[must_use]
    pub const fn back_indicator(mut self, show: bool) -> Self {
        self.back_indicator = show;
        self
    }

    /// Sets the colors.
    #[must_use]
    pub const fn style(mut self, style: TitleBarStyle) -> Self {
        self.style = style;
        self
    }
}

impl Widget for TitleBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        for x in area.left()..area.right() {
            buf[(x, area.y)]
                .set_char(' ')
                .set_style(self.style.background);
        }

        let mut spans = vec![Span::raw(" ")];
        if self.back_indicator {
            spans.push(Span::styled(BACK_ARROW, self.style.back));
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(self.title, self.style.title));

        let row = Rect::new(area.x, area.y, area.width, 1);
        Paragraph::new(Line::from(spans)).render(row, buf);
    }
}
