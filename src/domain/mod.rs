//! Domain layer: screens, navigation state machine and static content.

/// Component catalog and welcome copy.
pub mod catalog;
/// Domain error types.
pub mod errors;
/// Actions and key bindings.
pub mod keybinding;
/// Back-stack and navigation controller.
pub mod navigation;
/// Port definitions.
pub mod ports;
/// Screen identifiers.
pub mod screen;

pub use catalog::{CatalogEntry, ComponentItem, Emphasis, Interaction, Profile};
pub use navigation::{NavigationController, NavigationEvent, NavigationObserver, NavigationState};
pub use screen::ScreenId;
