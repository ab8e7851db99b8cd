use crate::domain::keybinding::Keybind;
use crate::presentation::theme::Theme;
use crate::presentation::theme::adapter::ColorConverter;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

/// Colors of the footer bar.
#[allow(missing_docs)]
pub struct FooterBarStyle {
    pub background: Style,
    pub label_style: Style,
    pub key_style: Style,
    pub info: Style,
    pub screen_indicator: Style,
}

impl FooterBarStyle {
    /// Derives the footer colors from the accent.
    #[must_use]
    pub fn from_theme(theme: &Theme) -> Self {
        let key_bg = ColorConverter::with_tone(theme.accent, 0.5, 0.08);

        Self {
            label_style: Style::default()
                .bg(theme.accent)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            key_style: Style::default().bg(key_bg).fg(Color::White),
            screen_indicator: Style::default()
                .bg(key_bg)
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
            ..Self::default()
        }
    }
}

impl Default for FooterBarStyle {
    fn default() -> Self {
        Self {
            background: Style::default(),
            label_style: Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            key_style: Style::default().fg(Color::White).bg(Color::DarkGray),
            info: Style::default().fg(Color::DarkGray),
            screen_indicator: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        }
    }
}

/// Bottom row listing the keys of the visible screen.
pub struct FooterBar<'a> {
    keybindings: &'a [Keybind],
    screen: Option<&'a str>,
    right_info: Option<&'a str>,
    style: &'a FooterBarStyle,
}

impl<'a> FooterBar<'a> {
    /// Creates a footer listing `keybindings`.
    #[must_use]
    pub fn new(keybindings: &'a [Keybind], style: &'a FooterBarStyle) -> Self {
        Self {
            keybindings,
            screen: None,
            right_info: None,
            style,
        }
    }

    /// Name shown at the left edge.
    #[must_use]
    pub const fn screen(mut self, name: &'a str) -> Self {
        self.screen = Some(name);
        self
    }

    /// Text right-aligned after the key hints.
    #[must_use]
    pub const fn right_info(mut self, info: Option<&'a str>) -> Self {
        self.right_info = info;
        self
    }

    fn format_key(key: &KeyEvent) -> String {
        use std::fmt::Write;
        let mut s = String::new();
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            s.push_str("C-");
        }
        if key.modifiers.contains(KeyModifiers::ALT) {
            s.push_str("A-");
        }
        if key.modifiers.contains(KeyModifiers::SHIFT) && !matches!(key.code, KeyCode::Char(_)) {
            s.push_str("S-");
        }

        match key.code {
            KeyCode::Char(' ') => s.push_str("Space"),
            KeyCode::Char(c) => s.push(c),
            KeyCode::Enter => s.push_str("Enter"),
            KeyCode::Esc => s.push_str("Esc"),
            KeyCode::Tab => s.push_str("Tab"),
            KeyCode::Backspace => s.push_str("Bksp"),
            KeyCode::Up => s.push('↑'),
            KeyCode::Down => s.push('↓'),
            KeyCode::Left => s.push('←'),
            KeyCode::Right => s.push('→'),
            KeyCode::F(n) => {
                let _ = write!(s, "F{n}");
            }
            _ => {
                let _ = write!(s, "{:?}", key.code);
            }
        }
        s
    }

    fn build_left_spans(&self) -> Vec<Span<'a>> {
        let mut spans = Vec::new();

        if let Some(screen) = self.screen {
            spans.push(Span::styled(
                format!(" {screen} "),
                self.style.screen_indicator,
            ));
            spans.push(Span::raw(" "));
        }

        for (i, binding) in self.keybindings.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }

            spans.push(Span::styled(
                format!(" {} ", binding.label),
                self.style.label_style,
            ));
            spans.push(Span::styled(
                format!(" {} ", Self::format_key(&binding.key)),
                self.style.key_style,
            ));
        }

        spans
    }
}

impl Widget for FooterBar<'_> {
    #[allow(clippy::cast_possible_truncation)]
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        for x in area.left()..area.right() {
            buf[(x, area.y)]
                .set_char(' ')
                .set_style(self.style.background);
        }

        let right_width = self.right_info.map_or(0, |s| s.width() as u16);
        let left_width = area.width.saturating_sub(right_width + 1);

        let left_area = Rect::new(area.x, area.y, left_width, 1);
        Paragraph::new(Line::from(self.build_left_spans())).render(left_area, buf);

        if let Some(info) = self.right_info
            && right_width < area.width
        {
            let right_x = area.right().saturating_sub(right_width);
            let right_area = Rect::new(right_x, area.y, right_width, 1);
            Paragraph::new(Span::styled(info, self.style.info)).render(right_area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::keybinding::Action;

    fn row_text(buf: &Buffer) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, 0)].symbol())
            .collect::<String>()
            .trim_end()
            .to_string()
    }

    #[test]
    fn test_format_key() {
        let fmt = |code, modifiers| FooterBar::format_key(&KeyEvent::new(code, modifiers));
        assert_eq!(fmt(KeyCode::Char('q'), KeyModifiers::CONTROL), "C-q");
        assert_eq!(fmt(KeyCode::Char('G'), KeyModifiers::SHIFT), "G");
        assert_eq!(fmt(KeyCode::Char(' '), KeyModifiers::NONE), "Space");
        assert_eq!(fmt(KeyCode::F(1), KeyModifiers::NONE), "F1");
        assert_eq!(fmt(KeyCode::Tab, KeyModifiers::SHIFT), "S-Tab");
    }

    #[test]
    fn test_renders_screen_and_bindings() {
        let binds = vec![
            Keybind::new(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE), Action::Back, "Back"),
            Keybind::new(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE), Action::Quit, "Quit"),
        ];
        let style = FooterBarStyle::default();
        let area = Rect::new(0, 0, 60, 1);
        let mut buf = Buffer::empty(area);

        FooterBar::new(&binds, &style)
            .screen("TEXT")
            .right_info(Some("depth 3"))
            .render(area, &mut buf);

        let text = row_text(&buf);
        assert!(text.starts_with(" TEXT   Back  Esc   Quit  q "));
        assert!(text.ends_with("depth 3"));
    }
}
