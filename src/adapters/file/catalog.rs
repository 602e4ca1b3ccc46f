//! Directory-backed catalog of wardrobes and outfits
//!
//! Implements the `WardrobeSource` and `OutfitSource` port traits.
//!
//! ```text
//! root/
//! ├── wardrobes/
//! │   └── <user>.toml | <user>.json
//! └── outfits/
//!     └── <id>.toml | <id>.json
//! ```

use std::path::{Path, PathBuf};

use crate::core::models::{Outfit, Wardrobe};
use crate::core::ports::{OutfitSource, WardrobeSource};

use super::parser::{FileFormat, load_outfit, load_wardrobe};

/// Wardrobe subdirectory
pub const WARDROBES_DIR: &str = "wardrobes";

/// Outfit subdirectory
pub const OUTFITS_DIR: &str = "outfits";

/// Catalog of wardrobe and outfit files under one root directory
#[derive(Debug, Clone)]
pub struct FileCatalog {
    root: PathBuf,
}

impl FileCatalog {
    /// Create a catalog rooted at `root`
    #[must_use]
    pub const fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// The catalog root
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Locate `<root>/<dir>/<name>.{toml,json}`, first existing extension wins
    ///
    /// Names containing path separators are rejected.
    fn locate(&self, dir: &str, name: &str) -> Option<PathBuf> {
        if name.is_empty() || name.contains(['/', '\\']) || name == ".." {
            log::warn!("ignoring invalid catalog name: {name:?}");
            return None;
        }

        FileFormat::EXTENSIONS
            .iter()
            .map(|ext| self.root.join(dir).join(format!("{name}.{ext}")))
            .find(|p| p.is_file())
    }
}

impl WardrobeSource for FileCatalog {
    fn wardrobe_for(&self, user: &str) -> anyhow::Result<Option<Wardrobe>> {
        let Some(path) = self.locate(WARDROBES_DIR, user) else {
            log::debug!("no wardrobe for {user} under {}", self.root.display());
            return Ok(None);
        };

        let mut wardrobe = load_wardrobe(&path)?;
        if wardrobe.owner.is_none() {
            wardrobe.owner = Some(user.to_string());
        }
        Ok(Some(wardrobe))
    }
}

impl OutfitSource for FileCatalog {
    fn outfit(&self, id: &str) -> anyhow::Result<Option<Outfit>> {
        let Some(path) = self.locate(OUTFITS_DIR, id) else {
            log::debug!("no outfit {id} under {}", self.root.display());
            return Ok(None);
        };

        Ok(Some(load_outfit(&path)?))
    }
}
