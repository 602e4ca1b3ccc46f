//! Descriptor matcher service - classifies wardrobe items against outfit slots
//!
//! This module contains pure matching logic with no I/O dependencies.
//!
//! Two tiers exist:
//! - **Loose**: color and subtype equal, material equal when the target specifies one
//! - **Exact**: loose, plus pattern and brand equal when the target specifies them
//!
//! An absent optional attribute on the target is satisfied by any wardrobe value.
//! A missing color or subtype on either side never matches.

use crate::core::models::{ClothingDescriptor, MatchTier, Wardrobe};

/// Check whether an optional constraint is satisfied by a candidate value
///
/// An absent constraint accepts anything, including an absent candidate.
/// `Some("")` is a real value and only matches `Some("")`.
#[must_use]
pub fn attribute_satisfied(constraint: Option<&str>, candidate: Option<&str>) -> bool {
    constraint.is_none_or(|c| candidate == Some(c))
}

/// Check whether a required attribute matches
///
/// Both sides must be present and equal.
#[must_use]
pub fn required_match(target: Option<&str>, candidate: Option<&str>) -> bool {
    matches!((target, candidate), (Some(t), Some(c)) if t == c)
}

/// Check whether `item` satisfies the loose tier for `target`
#[must_use]
pub fn matches_loose(target: &ClothingDescriptor, item: &ClothingDescriptor) -> bool {
    required_match(target.color(), item.color())
        && required_match(target.subtype(), item.subtype())
        && attribute_satisfied(target.material(), item.material())
}

/// Check whether `item` satisfies the exact tier for `target`
///
/// Built on [`matches_loose`], so an exact match is always a loose match.
#[must_use]
pub fn matches_exact(target: &ClothingDescriptor, item: &ClothingDescriptor) -> bool {
    matches_loose(target, item)
        && attribute_satisfied(target.pattern(), item.pattern())
        && attribute_satisfied(target.brand(), item.brand())
}

/// Classify a single wardrobe item against a target
#[must_use]
pub fn classify(target: &ClothingDescriptor, item: &ClothingDescriptor) -> MatchTier {
    if matches_exact(target, item) {
        MatchTier::Exact
    } else if matches_loose(target, item) {
        MatchTier::Loose
    } else {
        MatchTier::Unmatched
    }
}

/// Best tier any wardrobe item reaches for `target`
///
/// Stops scanning at the first exact match.
#[must_use]
pub fn best_tier(target: &ClothingDescriptor, wardrobe: &Wardrobe) -> MatchTier {
    let mut best = MatchTier::Unmatched;
    for item in &wardrobe.items {
        let tier = classify(target, item);
        if tier == MatchTier::Exact {
            return tier;
        }
        best = best.max(tier);
    }
    best
}

/// Indices of wardrobe items that qualify for `target` at `tier`
///
/// For [`MatchTier::Loose`] this includes exact matches as well, since every
/// exact match also satisfies the loose tier. [`MatchTier::Unmatched`]
/// yields nothing.
#[must_use]
pub fn qualifying_items(
    target: &ClothingDescriptor,
    wardrobe: &Wardrobe,
    tier: MatchTier,
) -> Vec<usize> {
    let predicate: fn(&ClothingDescriptor, &ClothingDescriptor) -> bool = match tier {
        MatchTier::Exact => matches_exact,
        MatchTier::Loose => matches_loose,
        MatchTier::Unmatched => return Vec::new(),
    };

    wardrobe
        .items
        .iter()
        .enumerate()
        .filter(|(_, item)| predicate(target, item))
        .map(|(i, _)| i)
        .collect()
}
