//! Port definitions for external collaborators.

mod asset_port;

#[cfg(test)]
pub use asset_port::MockAssetPort;
pub use asset_port::{AssetId, AssetPort, ImageAsset};
