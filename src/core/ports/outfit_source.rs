//! Outfit source port
//!
//! Defines the interface for loading curated outfits.

use super::super::models::Outfit;

/// Source of curated outfits
pub trait OutfitSource: Send + Sync {
    /// Load the outfit with the given identifier
    ///
    /// Returns `Ok(None)` when no such outfit exists.
    fn outfit(&self, id: &str) -> anyhow::Result<Option<Outfit>>;

    /// Load several outfits, preserving the requested order
    ///
    /// Missing outfits yield `None` in their position.
    fn outfits(&self, ids: &[String]) -> anyhow::Result<Vec<Option<Outfit>>> {
        ids.iter().map(|id| self.outfit(id)).collect()
    }
}
