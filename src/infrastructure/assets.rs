//! Text-art asset provider.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::domain::errors::AssetError;
use crate::domain::ports::{AssetId, AssetPort, ImageAsset};

const LOGO_ART: &str = "
        ▄▄████▄▄
     ▄██▀▀    ▀▀██▄
   ▄█▀   ▄████▄   ▀█▄
   ██   ██▀  ▀██   ██
   ██   ██▄  ▄██   ██
   ▀█▄   ▀████▀   ▄█▀
     ▀██▄▄    ▄▄██▀
        ▀▀████▀▀";

const ASSET_EXTENSION: &str = "txt";

/// Serves built-in art, optionally overridden by files in a directory.
///
/// An override for `logo_app` lives at `<dir>/logo_app.txt`.
pub struct BundledAssets {
    override_dir: Option<PathBuf>,
}

impl BundledAssets {
    /// Uses `<override_dir>/<id>.txt` ahead of the bundled art when set.
    #[must_use]
    pub fn new(override_dir: Option<PathBuf>) -> Self {
        Self { override_dir }
    }

    fn bundled(id: &AssetId) -> Option<ImageAsset> {
        match id.as_str() {
            "logo_app" => Some(ImageAsset::from_art(id.clone(), LOGO_ART)),
            _ => None,
        }
    }

    fn load_override(dir: &Path, id: &AssetId) -> Result<Option<ImageAsset>, AssetError> {
        let path = dir.join(id.as_str()).with_extension(ASSET_EXTENSION);
        if !path.exists() {
            return Ok(None);
        }

        let art = fs::read_to_string(&path).map_err(|e| AssetError::read(&path, e))?;
        let image = ImageAsset::from_art(id.clone(), &art);
        if image.is_blank() {
            return Err(AssetError::empty(path));
        }

        debug!(asset = %id, path = %path.display(), "Loaded asset override");
        Ok(Some(image))
    }
}

impl Default for BundledAssets {
    fn default() -> Self {
        Self::new(None)
    }
}

impl AssetPort for BundledAssets {
    fn image(&self, id: &AssetId) -> Option<ImageAsset> {
        if let Some(dir) = &self.override_dir {
            match Self::load_override(dir, id) {
                Ok(Some(image)) => return Some(image),
                Ok(None) => {}
                Err(e) => warn!(asset = %id, error = %e, "Falling back to bundled asset"),
            }
        }

        Self::bundled(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_bundled_logo() {
        let assets = BundledAssets::default();
        let logo = assets.image(&AssetId::LOGO).unwrap();

        assert_eq!(logo.id(), &AssetId::LOGO);
        assert_eq!(logo.height(), 8);
        assert!(!logo.is_blank());
    }

    #[test]
    fn test_unknown_asset() {
        let assets = BundledAssets::default();
        assert!(assets.image(&AssetId::new("missing")).is_none());
    }

    #[test]
    fn test_override_replaces_bundled() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("logo_app.txt"), "\n<>\n[]\n").unwrap();

        let assets = BundledAssets::new(Some(dir.path().to_path_buf()));
        let logo = assets.image(&AssetId::LOGO).unwrap();

        assert_eq!(logo.rows(), &["<>".to_string(), "[]".to_string()]);
    }

    #[test]
    fn test_blank_override_falls_back() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("logo_app.txt"), "   \n\n").unwrap();

        let assets = BundledAssets::new(Some(dir.path().to_path_buf()));
        let logo = assets.image(&AssetId::LOGO).unwrap();

        assert_eq!(logo.height(), 8);
    }

    #[test]
    fn test_missing_override_dir_uses_bundled() {
        let dir = tempdir().unwrap();
        let assets = BundledAssets::new(Some(dir.path().join("nope")));

        assert!(assets.image(&AssetId::LOGO).is_some());
    }
}
