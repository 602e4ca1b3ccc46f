//! Outfit model
//!
//! An outfit is an ordered sequence of slots. A slot holds one descriptor
//! or is empty; empty slots are skipped by the scorer.

use serde::{Deserialize, Serialize};

use super::ClothingDescriptor;

/// A curated outfit
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outfit {
    /// Outfit identifier, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Ordered slots (`None` = unfilled)
    #[serde(default)]
    pub slots: Vec<Option<ClothingDescriptor>>,
}

impl Outfit {
    /// Create an outfit from its slots
    #[must_use]
    pub const fn new(slots: Vec<Option<ClothingDescriptor>>) -> Self {
        Self {
            id: None,
            name: None,
            slots,
        }
    }

    /// Create an outfit where every slot is filled
    #[must_use]
    pub fn from_items(items: impl IntoIterator<Item = ClothingDescriptor>) -> Self {
        Self::new(items.into_iter().map(Some).collect())
    }

    /// Set the identifier
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the display name
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Iterate over non-empty slots as `(slot_index, descriptor)`
    pub fn filled_slots(&self) -> impl Iterator<Item = (usize, &ClothingDescriptor)> {
        self.slots.iter().enumerate().filter_map(|(i, s)| s.as_ref().map(|d| (i, d)))
    }

    /// Number of non-empty slots
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Label used when presenting the outfit
    #[must_use]
    pub fn label(&self) -> &str {
        self.name.as_deref().or(self.id.as_deref()).unwrap_or("outfit")
    }
}
