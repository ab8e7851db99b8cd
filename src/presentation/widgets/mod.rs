mod footer_bar;
mod title_bar;

pub use footer_bar::{FooterBar, FooterBarStyle};
pub use title_bar::{TitleBar, TitleBarStyle};
