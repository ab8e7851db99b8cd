//! The rendered form of a screen.

use std::time::Duration;

use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use super::{ComponentsListScreen, TextDetailScreen, WelcomeScreen};
use crate::domain::keybinding::Action;
use crate::domain::{NavigationEvent, ScreenId};

/// A screen ready to draw, holding its transient UI state.
#[allow(missing_docs)]
pub enum ScreenView {
    Welcome(WelcomeScreen),
    ComponentsList(ComponentsListScreen),
    TextDetail(TextDetailScreen),
}

impl ScreenView {
    /// Screen this view was built for.
    #[must_use]
    pub const fn id(&self) -> ScreenId {
        match self {
            Self::Welcome(_) => ScreenId::Welcome,
            Self::ComponentsList(_) => ScreenId::ComponentsList,
            Self::TextDetail(_) => ScreenId::TextDetail,
        }
    }

    /// Actions the screen responds to, for the footer.
    #[must_use]
    pub const fn actions(&self) -> &'static [Action] {
        match self {
            Self::Welcome(_) => WelcomeScreen::ACTIONS,
            Self::ComponentsList(_) => ComponentsListScreen::ACTIONS,
            Self::TextDetail(_) => TextDetailScreen::ACTIONS,
        }
    }

    /// Handles an action, returning the navigation it triggers.
    pub fn handle_action(&mut self, action: Action) -> Option<NavigationEvent> {
        match self {
            Self::Welcome(screen) => screen.handle_action(action),
            Self::ComponentsList(screen) => screen.handle_action(action),
            Self::TextDetail(screen) => screen.handle_action(action),
        }
    }

    /// Whether an effect still needs ticks.
    #[must_use]
    pub const fn is_animating(&self) -> bool {
        match self {
            Self::Welcome(screen) => screen.is_animating(),
            Self::ComponentsList(_) | Self::TextDetail(_) => false,
        }
    }

    /// Advances running effects by `duration`.
    pub fn tick(&mut self, duration: Duration) {
        if let Self::Welcome(screen) = self {
            screen.tick(duration);
        }
    }
}

impl Widget for &mut ScreenView {
    fn render(self, area: Rect, buf: &mut Buffer) {
        match self {
            ScreenView::Welcome(screen) => screen.render(area, buf),
            ScreenView::ComponentsList(screen) => screen.render(area, buf),
            ScreenView::TextDetail(screen) => screen.render(area, buf),
        }
    }
}
