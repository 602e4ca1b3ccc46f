//! Wardrobe model
//!
//! The clothing a user owns. Unordered; duplicates are independent candidates.

use serde::{Deserialize, Serialize};

use super::ClothingDescriptor;

/// A user's wardrobe
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wardrobe {
    /// Owner of the wardrobe, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,

    /// Items owned
    #[serde(default)]
    pub items: Vec<ClothingDescriptor>,
}

impl Wardrobe {
    /// Create a wardrobe from its items
    #[must_use]
    pub const fn new(items: Vec<ClothingDescriptor>) -> Self {
        Self { owner: None, items }
    }

    /// Set the owner
    #[must_use]
    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    /// Whether the wardrobe holds no items
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of items
    #[must_use]
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    /// Look up an item by index
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ClothingDescriptor> {
        self.items.get(index)
    }
}

impl FromIterator<ClothingDescriptor> for Wardrobe {
    fn from_iter<I: IntoIterator<Item = ClothingDescriptor>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
