//! Screen lookup.

use std::sync::Arc;

use super::{ComponentsListScreen, ScreenView, TextDetailScreen, WelcomeScreen};
use crate::domain::catalog::{Profile, component_catalog};
use crate::domain::ports::{AssetId, AssetPort};
use crate::domain::ScreenId;
use crate::presentation::theme::Theme;

/// Builds the view for a screen identifier.
#[cfg_attr(test, mockall::automock)]
pub trait ScreenRegistry {
    /// Returns a freshly built view of `id`.
    fn render(&self, id: ScreenId) -> ScreenView;
}

/// Registry of the built-in screens.
pub struct StaticScreenRegistry {
    theme: Theme,
    profile: Profile,
    assets: Arc<dyn AssetPort>,
    animations: bool,
}

impl StaticScreenRegistry {
    /// Creates a registry with animations off.
    #[must_use]
    pub fn new(theme: Theme, profile: Profile, assets: Arc<dyn AssetPort>) -> Self {
        Self {
            theme,
            profile,
            assets,
            animations: false,
        }
    }

    /// Plays the welcome intro effect on each visit.
    #[must_use]
    pub fn with_animations(mut self, enabled: bool) -> Self {
        self.animations = enabled;
        self
    }
}

impl ScreenRegistry for StaticScreenRegistry {
    fn render(&self, id: ScreenId) -> ScreenView {
        match id {
            ScreenId::Welcome => {
                let screen = WelcomeScreen::new(
                    self.profile.clone(),
                    self.assets.image(&AssetId::LOGO),
                    self.theme,
                );
                ScreenView::Welcome(if self.animations {
                    screen.with_intro_animation()
                } else {
                    screen
                })
            }
            ScreenId::ComponentsList => {
                ScreenView::ComponentsList(ComponentsListScreen::new(component_catalog(), self.theme))
            }
            ScreenId::TextDetail => ScreenView::TextDetail(TextDetailScreen::new(self.theme)),
        }
    }
}
