use crossterm::event::KeyEvent;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Commands a key can be bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum Action {
    Quit,
    ToggleHelp,

    // Navigation
    Back,
    Select,
    NavigateUp,
    NavigateDown,
    SelectFirst,
    SelectLast,
}

impl Action {
    /// Short name for the footer.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Quit => "Quit",
            Self::ToggleHelp => "Help",
            Self::Back => "Back",
            Self::Select => "Select",
            Self::NavigateUp => "Up",
            Self::NavigateDown => "Down",
            Self::SelectFirst => "First",
            Self::SelectLast => "Last",
        }
    }
}

/// A key paired with the action it triggers, as shown in the footer.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(missing_docs)]
pub struct Keybind {
    pub key: KeyEvent,
    pub action: Action,
    pub label: Cow<'static, str>,
}

impl Keybind {
    /// Creates a footer entry.
    pub fn new(key: KeyEvent, action: Action, label: impl Into<Cow<'static, str>>) -> Self {
        Self {
            key,
            action,
            label: label.into(),
        }
    }
}
