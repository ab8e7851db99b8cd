//! UI screens.

mod app;
mod components_screen;
mod preview;
mod registry;
mod router;
mod text_detail_screen;
mod view;
mod welcome_screen;

pub use app::App;
pub use components_screen::ComponentsListScreen;
pub use preview::render_preview;
#[cfg(test)]
pub use registry::MockScreenRegistry;
pub use registry::{ScreenRegistry, StaticScreenRegistry};
pub use router::RootRouter;
pub use text_detail_screen::TextDetailScreen;
pub use view::ScreenView;
pub use welcome_screen::WelcomeScreen;
