//! Compatibility scorer - how much of an outfit a wardrobe can reproduce
//!
//! Every filled slot is scored on its own against the whole wardrobe:
//! 100 credit for an exact match, 50 for a loose match, 0 otherwise.
//! Items are not reserved, so one wardrobe item may cover several slots.
//! The score is the rounded mean credit over filled slots.
//!
//! # Examples
//!
//! ```
//! use fitcheck::core::models::{ClothingDescriptor, Outfit, Wardrobe};
//! use fitcheck::core::services::score;
//!
//! let outfit = Outfit::from_items([
//!     ClothingDescriptor::new("black", "tshirt").with_brand("X"),
//!     ClothingDescriptor::new("blue", "jeans"),
//! ]);
//! let wardrobe = Wardrobe::new(vec![
//!     ClothingDescriptor::new("black", "tshirt").with_brand("Y"),
//!     ClothingDescriptor::new("blue", "jeans"),
//! ]);
//!
//! // (50 + 100) / 2
//! assert_eq!(score(&outfit, &wardrobe).value(), 75);
//! ```

use serde::{Deserialize, Serialize};

use crate::core::models::{MatchTier, Outfit, Percentage, Rounding, Wardrobe};

use super::matcher::{best_tier, qualifying_items};

/// Options controlling aggregation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScoreOptions {
    /// How `.5` means are rounded
    #[serde(default)]
    pub rounding: Rounding,
}

/// Per-slot outcome of a detailed score
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotResult {
    /// Position of the slot in the outfit
    pub slot: usize,
    /// Achieved tier, `None` when the slot is empty
    pub tier: Option<MatchTier>,
    /// Wardrobe indices qualifying at the achieved tier
    pub items: Vec<usize>,
}

impl SlotResult {
    /// Whether the slot was empty and excluded from the score
    #[must_use]
    pub const fn is_skipped(&self) -> bool {
        self.tier.is_none()
    }

    /// Credit units this slot contributed
    #[must_use]
    pub fn credit(&self) -> u64 {
        self.tier.map_or(0, MatchTier::credit)
    }
}

/// Aggregate score plus the per-slot breakdown
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailedScore {
    /// The aggregate percentage, identical to [`score`]
    pub percentage: Percentage,
    /// Number of filled slots (the denominator)
    pub counted_slots: usize,
    /// Sum of slot credits (the numerator)
    pub total_credit: u64,
    /// One entry per outfit slot, in outfit order
    pub slots: Vec<SlotResult>,
}

impl DetailedScore {
    fn zero(outfit: &Outfit) -> Self {
        let slots = outfit
            .slots
            .iter()
            .enumerate()
            .map(|(i, s)| SlotResult {
                slot: i,
                tier: s.as_ref().map(|_| MatchTier::Unmatched),
                items: Vec::new(),
            })
            .collect();

        Self {
            percentage: Percentage::ZERO,
            counted_slots: outfit.filled_count(),
            total_credit: 0,
            slots,
        }
    }

    /// Number of slots at the given tier
    #[must_use]
    pub fn count_tier(&self, tier: MatchTier) -> usize {
        self.slots.iter().filter(|s| s.tier == Some(tier)).count()
    }
}

/// Scores outfits against wardrobes
///
/// Holds only options; every call is independent and side-effect free.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CompatibilityScorer {
    options: ScoreOptions,
}

impl CompatibilityScorer {
    /// Create a scorer with the given options
    #[must_use]
    pub const fn new(options: ScoreOptions) -> Self {
        Self { options }
    }

    /// Create a scorer with a specific rounding mode
    #[must_use]
    pub const fn with_rounding(rounding: Rounding) -> Self {
        Self::new(ScoreOptions { rounding })
    }

    /// The options in effect
    #[must_use]
    pub const fn options(&self) -> ScoreOptions {
        self.options
    }

    /// Score an outfit against a wardrobe
    #[must_use]
    pub fn score(&self, outfit: &Outfit, wardrobe: &Wardrobe) -> Percentage {
        let counted = outfit.filled_count();
        if counted == 0 || wardrobe.is_empty() {
            return Percentage::ZERO;
        }

        let total: u64 =
            outfit.filled_slots().map(|(_, target)| best_tier(target, wardrobe).credit()).sum();

        let percentage = Percentage::from_mean(total, counted as u64, self.options.rounding);
        log::trace!("scored {counted} slot(s): credit {total} -> {percentage}");
        percentage
    }

    /// Score when either side may be absent; absence scores zero
    #[must_use]
    pub fn score_available(
        &self,
        outfit: Option<&Outfit>,
        wardrobe: Option<&Wardrobe>,
    ) -> Percentage {
        match (outfit, wardrobe) {
            (Some(outfit), Some(wardrobe)) => self.score(outfit, wardrobe),
            _ => Percentage::ZERO,
        }
    }

    /// Score with a per-slot breakdown
    ///
    /// The aggregate is computed exactly as in [`CompatibilityScorer::score`].
    #[must_use]
    pub fn score_detailed(&self, outfit: &Outfit, wardrobe: &Wardrobe) -> DetailedScore {
        let counted = outfit.filled_count();
        if counted == 0 || wardrobe.is_empty() {
            return DetailedScore::zero(outfit);
        }

        let slots: Vec<SlotResult> = outfit
            .slots
            .iter()
            .enumerate()
            .map(|(i, slot)| match slot {
                None => SlotResult {
                    slot: i,
                    tier: None,
                    items: Vec::new(),
                },
                Some(target) => {
                    let tier = best_tier(target, wardrobe);
                    log::trace!("slot {i} ({target}): {tier}");
                    SlotResult {
                        slot: i,
                        tier: Some(tier),
                        items: qualifying_items(target, wardrobe, tier),
                    }
                },
            })
            .collect();

        let total_credit: u64 = slots.iter().map(SlotResult::credit).sum();

        DetailedScore {
            percentage: Percentage::from_mean(total_credit, counted as u64, self.options.rounding),
            counted_slots: counted,
            total_credit,
            slots,
        }
    }
}

/// Score an outfit against a wardrobe with default options
#[must_use]
pub fn score(outfit: &Outfit, wardrobe: &Wardrobe) -> Percentage {
    CompatibilityScorer::default().score(outfit, wardrobe)
}

/// Score with a per-slot breakdown using default options
#[must_use]
pub fn score_detailed(outfit: &Outfit, wardrobe: &Wardrobe) -> DetailedScore {
    CompatibilityScorer::default().score_detailed(outfit, wardrobe)
}
