//! Wardrobe source port
//!
//! Defines the interface for loading a user's wardrobe.

use super::super::models::Wardrobe;

/// Source of user wardrobes
pub trait WardrobeSource: Send + Sync {
    /// Load the wardrobe owned by `user`
    ///
    /// Returns `Ok(None)` when the user has no wardrobe on record.
    fn wardrobe_for(&self, user: &str) -> anyhow::Result<Option<Wardrobe>>;
}
