//! Parser for wardrobe and outfit files
//!
//! Both formats share one shape. An outfit in TOML:
//!
//! ```toml
//! id = "weekend"
//! name = "Weekend casual"
//!
//! [[slots]]
//! item = { color = "black", subtype = "tshirt", brand = "X" }
//!
//! # An unfilled slot
//! [[slots]]
//! ```
//!
//! A wardrobe in TOML:
//!
//! ```toml
//! owner = "alex"
//!
//! [[items]]
//! color = "black"
//! subtype = "tshirt"
//! ```
//!
//! JSON files use the same keys. A slot may also be `null` in JSON.
//! Unknown keys are a parse error.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::core::models::{ClothingDescriptor, Outfit, Wardrobe};

/// Errors that can occur while loading a file
#[derive(Debug, Error)]
pub enum LoadError {
    /// File could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        /// The file being read
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// File is not valid TOML for the expected shape
    #[error("invalid TOML in {path}: {source}")]
    Toml {
        /// The file being parsed
        path: PathBuf,
        /// Underlying error
        source: toml::de::Error,
    },

    /// File is not valid JSON for the expected shape
    #[error("invalid JSON in {path}: {source}")]
    Json {
        /// The file being parsed
        path: PathBuf,
        /// Underlying error
        source: serde_json::Error,
    },

    /// Extension is neither `.toml` nor `.json`
    #[error("unsupported file format: {0} (expected .toml or .json)")]
    UnsupportedFormat(PathBuf),
}

/// Supported on-disk formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    /// `.toml`
    Toml,
    /// `.json`
    Json,
}

impl FileFormat {
    /// Extensions tried, in order, when looking a file up by stem
    pub const EXTENSIONS: [&str; 2] = ["toml", "json"];

    /// Detect the format from a path's extension
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
            "toml" => Some(Self::Toml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// An outfit file
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutfitFile {
    /// Outfit identifier (defaults to the file stem)
    #[serde(default)]
    pub id: Option<String>,

    /// Display name
    #[serde(default)]
    pub name: Option<String>,

    /// Slots in outfit order
    #[serde(default)]
    pub slots: Vec<Option<SlotEntry>>,
}

/// One slot in an outfit file
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SlotEntry {
    /// The item in this slot (absent = unfilled)
    #[serde(default)]
    pub item: Option<ClothingDescriptor>,
}

/// A wardrobe file
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WardrobeFile {
    /// Owner of the wardrobe
    #[serde(default)]
    pub owner: Option<String>,

    /// Items owned
    #[serde(default)]
    pub items: Vec<ClothingDescriptor>,
}

impl OutfitFile {
    /// Convert into the domain model
    #[must_use]
    pub fn into_outfit(self) -> Outfit {
        let slots = self.slots.into_iter().map(|s| s.and_then(|e| e.item)).collect();
        Outfit {
            id: self.id,
            name: self.name,
            slots,
        }
    }
}

impl WardrobeFile {
    /// Convert into the domain model
    #[must_use]
    pub fn into_wardrobe(self) -> Wardrobe {
        Wardrobe {
            owner: self.owner,
            items: self.items,
        }
    }
}

fn parse<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T, LoadError> {
    let format = FileFormat::from_path(path)
        .ok_or_else(|| LoadError::UnsupportedFormat(path.to_path_buf()))?;

    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    match format {
        FileFormat::Toml => toml::from_str(&content).map_err(|source| LoadError::Toml {
            path: path.to_path_buf(),
            source,
        }),
        FileFormat::Json => serde_json::from_str(&content).map_err(|source| LoadError::Json {
            path: path.to_path_buf(),
            source,
        }),
    }
}

fn warn_incomplete<'a>(path: &Path, items: impl Iterator<Item = (usize, &'a ClothingDescriptor)>) {
    for (i, item) in items.filter(|(_, d)| !d.is_complete()) {
        log::warn!(
            "{}: entry {i} is missing color or subtype and will never match",
            path.display()
        );
        log::debug!("incomplete entry: {item:?}");
    }
}

/// Load an outfit from a `.toml` or `.json` file
///
/// When the file has no `id`, the file stem is used.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_outfit(path: &Path) -> Result<Outfit, LoadError> {
    let file: OutfitFile = parse(path)?;
    let mut outfit = file.into_outfit();

    if outfit.id.is_none() {
        outfit.id = path.file_stem().map(|s| s.to_string_lossy().into_owned());
    }

    warn_incomplete(path, outfit.filled_slots());
    log::debug!(
        "loaded outfit {} from {} ({} slot(s), {} filled)",
        outfit.label(),
        path.display(),
        outfit.slots.len(),
        outfit.filled_count()
    );
    Ok(outfit)
}

/// Load a wardrobe from a `.toml` or `.json` file
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_wardrobe(path: &Path) -> Result<Wardrobe, LoadError> {
    let file: WardrobeFile = parse(path)?;
    let wardrobe = file.into_wardrobe();

    warn_incomplete(path, wardrobe.items.iter().enumerate());
    log::debug!("loaded wardrobe from {} ({} item(s))", path.display(), wardrobe.len());
    Ok(wardrobe)
}
