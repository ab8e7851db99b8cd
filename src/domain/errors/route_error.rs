//! Route parsing error types.

use thiserror::Error;

/// Route error variants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// The name does not match any screen.
    #[error("unknown route: {route}")]
    Unknown {
        /// Route name as given.
        route: String,
    },
}

impl RouteError {
    /// Creates unknown route error.
    #[must_use]
    pub fn unknown(route: impl Into<String>) -> Self {
        Self::Unknown {
            route: route.into(),
        }
    }
}
