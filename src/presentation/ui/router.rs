//! Root router: swaps the displayed screen on navigation.

use tracing::info;

use super::{ScreenRegistry, ScreenView};
use crate::domain::{NavigationObserver, ScreenId};

/// Keeps the view of the visible screen in sync with the back-stack.
pub struct RootRouter<R: ScreenRegistry> {
    registry: R,
    view: Option<ScreenView>,
}

impl<R: ScreenRegistry> RootRouter<R> {
    /// Creates a router showing nothing until the first navigation.
    #[must_use]
    pub const fn new(registry: R) -> Self {
        Self {
            registry,
            view: None,
        }
    }

    /// Returns the displayed view, once a screen has been routed to.
    #[must_use]
    pub const fn view(&self) -> Option<&ScreenView> {
        self.view.as_ref()
    }

    /// Mutable access to the displayed view.
    pub fn view_mut(&mut self) -> Option<&mut ScreenView> {
        self.view.as_mut()
    }
}

impl<R: ScreenRegistry> NavigationObserver for RootRouter<R> {
    fn on_navigate(&mut self, current: ScreenId) {
        info!(screen = %current, "Routing to screen");
        self.view = Some(self.registry.render(current));
    }
}
