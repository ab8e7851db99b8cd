//! Text formatting showcase.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Paragraph, Widget},
};

use crate::domain::NavigationEvent;
use crate::domain::keybinding::Action;
use crate::presentation::theme::Theme;
use crate::presentation::widgets::{TitleBar, TitleBarStyle};

const TITLE: &str = "Text Detail";
const BROWN: Color = Color::Rgb(0xB5, 0x6D, 0x07);

/// Formatted text sample.
pub struct TextDetailScreen {
    theme: Theme,
}

impl TextDetailScreen {
    /// Creates the screen.
    #[must_use]
    pub const fn new(theme: Theme) -> Self {
        Self { theme }
    }

    /// Actions listed in the footer.
    pub const ACTIONS: &'static [Action] = &[Action::Back, Action::ToggleHelp, Action::Quit];

    /// Back pops the screen.
    pub fn handle_action(&mut self, action: Action) -> Option<NavigationEvent> {
        match action {
            Action::Back => Some(NavigationEvent::Pop),
            _ => None,
        }
    }

    /// "The quick Brown fox jumps over the lazy dog." with a different style per word.
    #[must_use]
    pub fn formatted_text() -> Text<'static> {
        let plain = Style::default();
        let bold = plain.add_modifier(Modifier::BOLD);

        // blank rows stand in for the tall line height
        Text::from(vec![
            Line::from(vec![
                Span::raw("The "),
                Span::styled("quick", plain.add_modifier(Modifier::CROSSED_OUT)),
                Span::raw(" "),
                Span::styled("Brown", bold.fg(BROWN)),
            ]),
            Line::raw(""),
            Line::from(vec![Span::raw("fox j u m p s"), Span::styled(" over", bold)]),
            Line::raw(""),
            Line::from(vec![
                Span::styled("the", plain.add_modifier(Modifier::UNDERLINED)),
                Span::styled(" lazy", plain.add_modifier(Modifier::ITALIC)),
                Span::raw(" dog."),
            ]),
        ])
    }
}

impl Widget for &mut TextDetailScreen {
    #[allow(clippy::cast_possible_truncation)]
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [title_area, body] =
            Layout::vertical([Constraint::Length(1), Constraint::Fill(1)]).areas(area);

        TitleBar::new(TITLE)
            .back_indicator(true)
            .style(TitleBarStyle::from_theme(&self.theme))
            .render(title_area, buf);

        let text = TextDetailScreen::formatted_text();
        let [text_area] = Layout::vertical([Constraint::Length(text.height() as u16)])
            .flex(Flex::Center)
            .areas(body);

        Paragraph::new(text).centered().render(text_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_back_pops() {
        let mut screen = TextDetailScreen::new(Theme::default());
        assert_eq!(screen.handle_action(Action::Back), Some(NavigationEvent::Pop));
        assert_eq!(screen.handle_action(Action::Select), None);
    }

    #[test]
    fn test_formatted_text_styles() {
        let text = TextDetailScreen::formatted_text();
        let first = &text.lines[0];

        assert_eq!(first.spans[1].content, "quick");
        assert!(first.spans[1].style.add_modifier.contains(Modifier::CROSSED_OUT));
        assert_eq!(first.spans[3].style.fg, Some(BROWN));
        assert!(first.spans[3].style.add_modifier.contains(Modifier::BOLD));

        let last = &text.lines[4];
        assert!(last.spans[0].style.add_modifier.contains(Modifier::UNDERLINED));
        assert!(last.spans[1].style.add_modifier.contains(Modifier::ITALIC));
    }

    #[test]
    fn test_plain_text_reads_as_sentence() {
        let words: Vec<String> = TextDetailScreen::formatted_text()
            .lines
            .iter()
            .map(ToString::to_string)
            .filter(|line| !line.is_empty())
            .collect();

        assert_eq!(words, vec!["The quick Brown", "fox j u m p s over", "the lazy dog."]);
    }

    #[test]
    fn test_render_has_back_arrow_and_text() {
        let mut screen = TextDetailScreen::new(Theme::default());
        let area = Rect::new(0, 0, 40, 20);
        let mut buf = Buffer::empty(area);
        screen.render(area, &mut buf);

        let rows: Vec<String> = (0..area.height)
            .map(|y| (0..area.width).map(|x| buf[(x, y)].symbol()).collect())
            .collect();

        assert!(rows[0].contains("←  Text Detail"));
        assert!(rows.iter().any(|row| row.contains("The quick Brown")));
        assert!(rows.iter().any(|row| row.contains("the lazy dog.")));
    }
}
