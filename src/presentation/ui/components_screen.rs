//! Components list screen.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{HighlightSpacing, List, ListItem, ListState, StatefulWidget, Widget},
};

use crate::domain::catalog::{CatalogEntry, ComponentItem, Emphasis};
use crate::domain::keybinding::Action;
use crate::domain::NavigationEvent;
use crate::presentation::theme::Theme;
use crate::presentation::widgets::{TitleBar, TitleBarStyle};

const TITLE: &str = "UI Components List";
const LIST_MARGIN: u16 = 2;

/// Scrollable catalog grouped by category.
pub struct ComponentsListScreen {
    entries: Vec<CatalogEntry>,
    selected: Option<usize>,
    list_state: ListState,
    theme: Theme,
}

impl ComponentsListScreen {
    /// Selects the first component.
    #[must_use]
    pub fn new(entries: Vec<CatalogEntry>, theme: Theme) -> Self {
        let selected = entries.iter().position(|e| e.component().is_some());
        Self {
            entries,
            selected,
            list_state: ListState::default().with_selected(selected),
            theme,
        }
    }

    /// Actions listed in the footer.
    pub const ACTIONS: &'static [Action] = &[
        Action::NavigateUp,
        Action::NavigateDown,
        Action::Select,
        Action::ToggleHelp,
        Action::Quit,
    ];

    /// Component under the cursor.
    #[must_use]
    pub fn selected_item(&self) -> Option<&ComponentItem> {
        self.selected
            .and_then(|i| self.entries.get(i))
            .and_then(CatalogEntry::component)
    }

    /// Moves the selection, or activates the selected item.
    pub fn handle_action(&mut self, action: Action) -> Option<NavigationEvent> {
        match action {
            Action::NavigateDown => self.select_next(),
            Action::NavigateUp => self.select_previous(),
            Action::SelectFirst => self.select_edge(false),
            Action::SelectLast => self.select_edge(true),
            Action::Select => {
                return self
                    .selected_item()
                    .and_then(|item| item.interaction.on_activate());
            }
            _ => {}
        }
        None
    }

    fn is_selectable(&self, index: usize) -> bool {
        self.entries
            .get(index)
            .is_some_and(|entry| entry.component().is_some())
    }

    fn select(&mut self, index: usize) {
        self.selected = Some(index);
        self.list_state.select(Some(index));
        // nothing selectable above: scroll the leading header back into view
        if !(0..index).any(|i| self.is_selectable(i)) {
            *self.list_state.offset_mut() = 0;
        }
    }

    fn select_next(&mut self) {
        let Some(current) = self.selected else {
            return;
        };
        if let Some(next) = (current + 1..self.entries.len()).find(|&i| self.is_selectable(i)) {
            self.select(next);
        }
    }

    fn select_previous(&mut self) {
        let Some(current) = self.selected else {
            return;
        };
        if let Some(prev) = (0..current).rev().find(|&i| self.is_selectable(i)) {
            self.select(prev);
        }
    }

    fn select_edge(&mut self, last: bool) {
        let mut indices = 0..self.entries.len();
        let edge = if last {
            indices.rfind(|&i| self.is_selectable(i))
        } else {
            indices.find(|&i| self.is_selectable(i))
        };
        if let Some(index) = edge {
            self.select(index);
        }
    }

    fn list_item<'a>(&self, entry: &'a CatalogEntry) -> ListItem<'a> {
        match entry {
            CatalogEntry::Category(title) => ListItem::new(Text::from(vec![
                Line::raw(""),
                Line::styled(*title, self.theme.title_style),
            ])),
            CatalogEntry::Component(item) => {
                let (card, title_style) = match item.emphasis {
                    Emphasis::Normal => (
                        self.theme.item_style,
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Emphasis::Highlight => (
                        self.theme.highlight_item_style,
                        self.theme.highlight_title_style,
                    ),
                };

                let mut title = vec![Span::styled(format!(" {}", item.title), title_style)];
                if item.is_interactive() {
                    title.push(Span::styled(" ›", Style::default().fg(self.theme.accent)));
                }

                ListItem::new(Text::from(vec![
                    Line::from(title),
                    Line::styled(
                        format!(" {}", item.description),
                        Style::default().fg(Color::Gray),
                    ),
                ]))
                .style(card)
            }
        }
    }
}

impl Widget for &mut ComponentsListScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [title_area, _, list_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .areas(area);

        TitleBar::new(TITLE)
            .style(TitleBarStyle::from_theme(&self.theme))
            .render(title_area, buf);

        let [_, list_area, _] = Layout::horizontal([
            Constraint::Length(LIST_MARGIN),
            Constraint::Fill(1),
            Constraint::Length(LIST_MARGIN),
        ])
        .areas(list_area);

        let items: Vec<ListItem> = self.entries.iter().map(|e| self.list_item(e)).collect();
        let list = List::new(items)
            .highlight_style(self.theme.selection_style)
            .highlight_symbol("▶ ")
            .highlight_spacing(HighlightSpacing::Always);

        StatefulWidget::render(list, list_area, buf, &mut self.list_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ScreenId;
    use crate::domain::catalog::component_catalog;
    use test_case::test_case;

    fn screen() -> ComponentsListScreen {
        ComponentsListScreen::new(component_catalog(), Theme::default())
    }

    fn title_after(actions: &[Action]) -> &'static str {
        let mut screen = screen();
        for action in actions {
            screen.handle_action(*action);
        }
        screen.selected_item().unwrap().title
    }

    #[test]
    fn test_starts_on_first_component() {
        assert_eq!(title_after(&[]), "Text");
    }

    #[test_case(&[Action::NavigateDown], "Image" ; "down")]
    #[test_case(&[Action::NavigateDown, Action::NavigateDown], "TextField" ; "down_skips_header")]
    #[test_case(&[Action::NavigateUp], "Text" ; "up_at_top_stays")]
    #[test_case(&[Action::SelectLast], "Self-study" ; "last")]
    #[test_case(&[Action::SelectLast, Action::NavigateDown], "Self-study" ; "down_at_bottom_stays")]
    #[test_case(&[Action::SelectLast, Action::SelectFirst], "Text" ; "first")]
    #[test_case(&[Action::SelectLast, Action::NavigateUp], "Row" ; "up_from_last")]
    #[test_case(&[Action::NavigateDown, Action::NavigateDown, Action::NavigateUp], "Image" ; "up_skips_header")]
    fn test_selection(actions: &[Action], expected: &str) {
        assert_eq!(title_after(actions), expected);
    }

    #[test]
    fn test_select_text_opens_detail() {
        let mut screen = screen();
        assert_eq!(
            screen.handle_action(Action::Select),
            Some(NavigationEvent::Push(ScreenId::TextDetail))
        );
    }

    #[test]
    fn test_select_static_item_does_nothing() {
        let mut screen = screen();
        screen.handle_action(Action::NavigateDown);
        assert_eq!(screen.handle_action(Action::Select), None);
    }

    #[test]
    fn test_back_is_not_wired() {
        let mut screen = screen();
        assert_eq!(screen.handle_action(Action::Back), None);
    }

    #[test]
    fn test_empty_catalog() {
        let mut screen = ComponentsListScreen::new(Vec::new(), Theme::default());
        assert!(screen.selected_item().is_none());
        assert_eq!(screen.handle_action(Action::NavigateDown), None);
        assert_eq!(screen.handle_action(Action::Select), None);
    }

    #[test]
    fn test_render_lists_catalog() {
        let mut screen = screen();
        let area = Rect::new(0, 0, 60, 30);
        let mut buf = Buffer::empty(area);
        screen.render(area, &mut buf);

        let text: String = (0..area.height)
            .map(|y| (0..area.width).map(|x| buf[(x, y)].symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n");

        assert!(text.contains(TITLE));
        assert!(text.contains("Display"));
        assert!(text.contains("▶  Text ›"));
        assert!(text.contains("Input field for passwords"));
        assert!(text.contains("Self-study"));
    }
}
