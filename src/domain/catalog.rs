//! Static content shown by the screens.

use std::borrow::Cow;

use super::navigation::NavigationEvent;
use super::screen::ScreenId;

/// What happens when a list item is activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interaction {
    /// Display only.
    Static,
    /// Activating the item emits a navigation event.
    Interactive {
        /// Event emitted on activation.
        on_activate: NavigationEvent,
    },
}

impl Interaction {
    /// Returns the event emitted on activation, if any.
    #[must_use]
    pub const fn on_activate(self) -> Option<NavigationEvent> {
        match self {
            Self::Static => None,
            Self::Interactive { on_activate } => Some(on_activate),
        }
    }
}

/// Visual weight of a list item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Emphasis {
    /// Regular card.
    #[default]
    Normal,
    /// Set apart from the regular components.
    Highlight,
}

/// One entry of the component catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentItem {
    /// Name shown in bold.
    pub title: &'static str,
    /// One-line summary under the title.
    pub description: &'static str,
    /// Card styling.
    pub emphasis: Emphasis,
    /// What activating the item does.
    pub interaction: Interaction,
}

impl ComponentItem {
    const fn new(title: &'static str, description: &'static str) -> Self {
        Self {
            title,
            description,
            emphasis: Emphasis::Normal,
            interaction: Interaction::Static,
        }
    }

    const fn navigates_to(mut self, target: ScreenId) -> Self {
        self.interaction = Interaction::Interactive {
            on_activate: NavigationEvent::Push(target),
        };
        self
    }

    const fn highlighted(mut self) -> Self {
        self.emphasis = Emphasis::Highlight;
        self
    }

    /// Whether activating the item navigates.
    #[must_use]
    pub const fn is_interactive(&self) -> bool {
        matches!(self.interaction, Interaction::Interactive { .. })
    }
}

/// One row group of the components list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogEntry {
    /// Section header.
    Category(&'static str),
    /// A component card.
    Component(ComponentItem),
}

impl CatalogEntry {
    /// Returns the component, if this entry is one.
    #[must_use]
    pub const fn component(&self) -> Option<&ComponentItem> {
        match self {
            Self::Category(_) => None,
            Self::Component(item) => Some(item),
        }
    }
}

/// Entries of the components list, top to bottom.
#[must_use]
pub fn component_catalog() -> Vec<CatalogEntry> {
    use CatalogEntry::{Category, Component};

    vec![
        Category("Display"),
        Component(ComponentItem::new("Text", "Displays text").navigates_to(ScreenId::TextDetail)),
        Component(ComponentItem::new("Image", "Displays an image")),
        Category("Input"),
        Component(ComponentItem::new("TextField", "Input field for text")),
        Component(ComponentItem::new("PasswordField", "Input field for passwords")),
        Category("Layout"),
        Component(ComponentItem::new("Column", "Arranges elements vertically")),
        Component(ComponentItem::new("Row", "Arranges elements horizontally")),
        Component(
            ComponentItem::new("Self-study", "Find all of the basic UI components yourself")
                .highlighted(),
        ),
    ]
}

/// Welcome screen copy.
pub mod welcome {
    /// Headline under the logo.
    pub const TITLE: &str = "Jetpack Compose";
    /// Paragraph under the headline.
    pub const INTRO: &str = "Jetpack Compose is a modern UI toolkit for building native Android applications using a declarative programming approach.";
    /// Label of the button leading to the catalog.
    pub const READY_BUTTON: &str = "I'm ready";
}

/// Person shown in the welcome header.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(missing_docs)]
pub struct Profile {
    pub name: Cow<'static, str>,
    pub student_id: Cow<'static, str>,
}

impl Profile {
    /// Name used when none is configured.
    pub const DEFAULT_NAME: &'static str = "Nguyễn Văn A";
    /// Identifier used when none is configured.
    pub const DEFAULT_STUDENT_ID: &'static str = "2342312323";

    /// Creates a profile.
    #[must_use]
    pub fn new(name: impl Into<Cow<'static, str>>, student_id: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            student_id: student_id.into(),
        }
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self::new(Self::DEFAULT_NAME, Self::DEFAULT_STUDENT_ID)
    }
}
