//! uitour - A terminal tour of basic UI components.
//!
//! This crate provides three screens (welcome, component catalog, formatted
//! text) connected by a back-stack navigation controller.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Domain layer containing screens, navigation, and port definitions.
pub mod domain;
/// Infrastructure layer containing configuration and asset adapters.
pub mod infrastructure;
/// Presentation layer containing UI components and event handling.
pub mod presentation;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "uitour";
