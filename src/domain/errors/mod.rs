//! Domain error types.

mod asset_error;
mod route_error;

pub use asset_error::AssetError;
pub use route_error::RouteError;
