//! Navigable screen identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::errors::RouteError;

/// Identifier of one of the navigable screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScreenId {
    /// Start screen with the profile header and the "I'm ready" button.
    Welcome,
    /// Catalog of UI component categories.
    ComponentsList,
    /// Rich text formatting showcase.
    TextDetail,
}

impl ScreenId {
    /// Every screen, in navigation order.
    pub const ALL: [Self; 3] = [Self::Welcome, Self::ComponentsList, Self::TextDetail];

    /// Screen the back-stack starts with.
    pub const START: Self = Self::Welcome;

    /// Stable route name used on the command line and in logs.
    #[must_use]
    pub const fn route(self) -> &'static str {
        match self {
            Self::Welcome => "welcome",
            Self::ComponentsList => "list",
            Self::TextDetail => "textDetail",
        }
    }

    /// Short label shown in the footer bar.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Welcome => "WELCOME",
            Self::ComponentsList => "COMPONENTS",
            Self::TextDetail => "TEXT",
        }
    }
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.route())
    }
}

impl FromStr for ScreenId {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.route().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| RouteError::unknown(s))
    }
}
