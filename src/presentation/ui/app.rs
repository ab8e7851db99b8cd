//! Main application orchestrator.

use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyEvent};
use futures_util::StreamExt;
use ratatui::layout::{Constraint, Layout};
use ratatui::{DefaultTerminal, Frame};
use tokio::time::interval;
use tracing::{debug, info};

use super::{RootRouter, StaticScreenRegistry};
use crate::domain::keybinding::Action;
use crate::domain::ports::AssetPort;
use crate::domain::{NavigationController, Profile};
use crate::infrastructure::AppConfig;
use crate::presentation::commands::CommandRegistry;
use crate::presentation::events::{EventHandler, EventResult};
use crate::presentation::theme::Theme;
use crate::presentation::widgets::{FooterBar, FooterBarStyle};

const ANIMATION_TICK_RATE: Duration = Duration::from_millis(33);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AppState {
    Running,
    Exiting,
}

/// Terminal application: event loop, navigation and footer.
pub struct App {
    state: AppState,
    navigation: NavigationController<RootRouter<StaticScreenRegistry>>,
    commands: CommandRegistry,
    footer_style: FooterBarStyle,
    show_key_hints: bool,
}

impl App {
    /// Creates the app on the welcome screen.
    #[must_use]
    pub fn new(config: &AppConfig, assets: Arc<dyn AssetPort>) -> Self {
        let theme = Theme::new(&config.theme.accent_color);
        let registry = StaticScreenRegistry::new(theme, Profile::from(&config.profile), assets)
            .with_animations(config.ui.enable_animations);

        Self {
            state: AppState::Running,
            navigation: NavigationController::new(RootRouter::new(registry)),
            commands: CommandRegistry::with_overrides(&config.keybindings),
            footer_style: FooterBarStyle::from_theme(&theme),
            show_key_hints: config.ui.show_key_hints,
        }
    }

    /// # Errors
    /// Returns error if drawing or reading terminal events fails.
    pub async fn run(mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        let mut terminal_events = EventStream::new();
        let mut animation_interval = interval(ANIMATION_TICK_RATE);

        terminal.draw(|frame| self.render(frame))?;

        while self.state != AppState::Exiting {
            tokio::select! {
                maybe_event = terminal_events.next() => {
                    let result = match maybe_event {
                        Some(Ok(event)) => self.handle_terminal_event(&event),
                        Some(Err(e)) => return Err(e.into()),
                        None => EventResult::Exit,
                    };
                    match result {
                        EventResult::Exit => self.state = AppState::Exiting,
                        EventResult::Redraw => {
                            terminal.draw(|frame| self.render(frame))?;
                        }
                        EventResult::Continue => {}
                    }
                }

                _ = animation_interval.tick() => {
                    if let Some(view) = self.navigation.observer_mut().view_mut()
                        && view.is_animating()
                    {
                        view.tick(ANIMATION_TICK_RATE);
                        terminal.draw(|frame| self.render(frame))?;
                    }
                }
            }
        }

        info!(
            screen = %self.navigation.current_screen(),
            depth = self.navigation.depth(),
            "Application exiting normally"
        );
        Ok(())
    }

    fn handle_terminal_event(&mut self, event: &Event) -> EventResult {
        match event {
            Event::Key(key) => self.handle_key(*key),
            Event::Resize(..) => EventResult::Redraw,
            _ => EventResult::Continue,
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> EventResult {
        if !EventHandler::is_actionable(&key) {
            return EventResult::Continue;
        }
        if EventHandler::is_force_quit(&key) {
            return EventResult::Exit;
        }

        let Some(action) = self.commands.resolve(&key) else {
            return EventResult::Continue;
        };
        debug!(?action, screen = %self.navigation.current_screen(), "Key action");

        self.handle_action(action)
    }

    fn handle_action(&mut self, action: Action) -> EventResult {
        match action {
            Action::Quit => return EventResult::Exit,
            Action::ToggleHelp => self.show_key_hints = !self.show_key_hints,
            _ => {
                let intent = self
                    .navigation
                    .observer_mut()
                    .view_mut()
                    .and_then(|view| view.handle_action(action));
                if let Some(event) = intent {
                    self.navigation.dispatch(event);
                }
            }
        }

        EventResult::Redraw
    }

    fn render(&mut self, frame: &mut Frame) {
        let [content_area, footer_area] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(frame.area());

        let depth = self.navigation.depth();
        let Some(view) = self.navigation.observer_mut().view_mut() else {
            return;
        };
        frame.render_widget(&mut *view, content_area);

        let keybinds = if self.show_key_hints {
            self.commands.keybinds(view.actions())
        } else {
            Vec::new()
        };
        let info = format!("depth {depth}");
        let footer = FooterBar::new(&keybinds, &self.footer_style)
            .screen(view.id().display_name())
            .right_info(Some(&info));
        frame.render_widget(footer, footer_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ScreenId;
    use crate::infrastructure::BundledAssets;
    use crossterm::event::{KeyCode, KeyEventKind, KeyModifiers};
    use ratatui::{Terminal, backend::TestBackend};

    fn app() -> App {
        let mut config = AppConfig::default();
        config.ui.enable_animations = false;
        App::new(&config, Arc::new(BundledAssets::default()))
    }

    fn press(app: &mut App, code: KeyCode) -> EventResult {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_app_starts_on_welcome() {
        let app = app();
        assert_eq!(app.state, AppState::Running);
        assert_eq!(app.navigation.current_screen(), ScreenId::Welcome);
    }

    #[test]
    fn test_full_tour() {
        let mut app = app();

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.navigation.current_screen(), ScreenId::ComponentsList);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.navigation.current_screen(), ScreenId::TextDetail);

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.navigation.current_screen(), ScreenId::ComponentsList);
        assert_eq!(app.navigation.depth(), 2);
    }

    #[test]
    fn test_back_on_components_list_is_unwired() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Esc);

        assert_eq!(app.navigation.current_screen(), ScreenId::ComponentsList);
    }

    #[test]
    fn test_static_item_does_not_navigate() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.navigation.current_screen(), ScreenId::ComponentsList);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app();
        assert_eq!(press(&mut app, KeyCode::Char('q')), EventResult::Exit);
        assert_eq!(
            app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            EventResult::Exit
        );
    }

    #[test]
    fn test_release_is_ignored() {
        let mut app = app();
        let release = KeyEvent::new_with_kind(KeyCode::Enter, KeyModifiers::NONE, KeyEventKind::Release);

        assert_eq!(app.handle_key(release), EventResult::Continue);
        assert_eq!(app.navigation.current_screen(), ScreenId::Welcome);
    }

    fn footer_row(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        terminal.draw(|frame| app.render(frame)).unwrap();
        let buf = terminal.backend().buffer();
        (0..buf.area.width).map(|x| buf[(x, buf.area.height - 1)].symbol()).collect()
    }

    #[test]
    fn test_toggle_help_hides_only_key_hints() {
        let mut app = app();
        let shown = footer_row(&mut app);
        assert!(shown.contains("Select"));

        press(&mut app, KeyCode::F(1));
        let hidden = footer_row(&mut app);
        assert!(!hidden.contains("Select"));
        assert!(hidden.contains("WELCOME"));
        assert!(hidden.contains("depth 1"));

        press(&mut app, KeyCode::Char('?'));
        assert!(footer_row(&mut app).contains("Select"));
    }

    #[test]
    fn test_unbound_key_is_ignored() {
        let mut app = app();
        assert_eq!(press(&mut app, KeyCode::Char('z')), EventResult::Continue);
    }
}
