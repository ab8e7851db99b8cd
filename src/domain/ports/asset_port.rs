//! Static image asset port.

use std::borrow::Cow;
use std::fmt;

/// Identifier of a bundled image.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AssetId(Cow<'static, str>);

impl AssetId {
    /// Application logo on the welcome screen.
    pub const LOGO: Self = Self(Cow::Borrowed("logo_app"));

    /// Creates an identifier.
    #[must_use]
    pub fn new(id: impl Into<Cow<'static, str>>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Text-art image, one string per row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageAsset {
    id: AssetId,
    rows: Vec<String>,
}

impl ImageAsset {
    /// Creates an image from its rows.
    #[must_use]
    pub fn new(id: AssetId, rows: Vec<String>) -> Self {
        Self { id, rows }
    }

    /// Creates an image by splitting `art` into lines.
    ///
    /// Leading and trailing blank lines are dropped.
    #[must_use]
    pub fn from_art(id: AssetId, art: &str) -> Self {
        let rows = art
            .trim_matches('\n')
            .lines()
            .map(|line| line.trim_end().to_string())
            .collect();
        Self::new(id, rows)
    }

    /// Identifier the art was looked up by.
    #[must_use]
    pub const fn id(&self) -> &AssetId {
        &self.id
    }

    /// Text rows of the art, right-trimmed.
    #[must_use]
    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    /// Returns the height in rows.
    #[must_use]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Returns whether the image has no visible content.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.rows.iter().all(|row| row.trim().is_empty())
    }
}

/// Supplies static images by identifier.
#[cfg_attr(test, mockall::automock)]
pub trait AssetPort: Send + Sync {
    /// Returns the image for `id`, or `None` if there is none.
    fn image(&self, id: &AssetId) -> Option<ImageAsset>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_art_trims_blank_edges() {
        let image = ImageAsset::from_art(AssetId::LOGO, "\n ab  \ncd\n\n");
        assert_eq!(image.rows(), &[" ab".to_string(), "cd".to_string()]);
        assert_eq!(image.height(), 2);
        assert!(!image.is_blank());
    }

    #[test]
    fn test_blank_image() {
        let image = ImageAsset::from_art(AssetId::new("empty"), "   \n  ");
        assert!(image.is_blank());
    }
}
