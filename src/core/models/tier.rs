//! Match tiers
//!
//! How closely a wardrobe item reproduces an outfit slot.

use serde::{Deserialize, Serialize};

/// Credit units awarded for an exact match
pub const EXACT_CREDIT: u64 = 100;

/// Credit units awarded for a loose match
pub const LOOSE_CREDIT: u64 = 50;

/// Match tier levels, ordered from worst to best
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum MatchTier {
    /// No wardrobe item covers the slot
    #[default]
    Unmatched,
    /// Color, subtype and material align; pattern and brand ignored
    Loose,
    /// Every specified attribute aligns
    Exact,
}

impl MatchTier {
    /// Credit units this tier contributes to the aggregate
    #[must_use]
    pub const fn credit(self) -> u64 {
        match self {
            Self::Unmatched => 0,
            Self::Loose => LOOSE_CREDIT,
            Self::Exact => EXACT_CREDIT,
        }
    }

    /// Whether the slot is covered (at least loose)
    #[must_use]
    pub const fn is_covered(self) -> bool {
        !matches!(self, Self::Unmatched)
    }
}

impl std::fmt::Display for MatchTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unmatched => write!(f, "unmatched"),
            Self::Loose => write!(f, "loose"),
            Self::Exact => write!(f, "exact"),
        }
    }
}
