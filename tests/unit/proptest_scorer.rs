//! Property-based tests for the scorer
//!
//! Uses proptest to verify properties that should hold for all inputs.

use fitcheck::core::models::{ClothingDescriptor, MatchTier, Outfit, Rounding, Wardrobe};
use fitcheck::core::services::{
    CompatibilityScorer, classify, matches_exact, matches_loose, score, score_detailed,
};
use proptest::prelude::*;

/// Small vocabularies so that collisions (and therefore matches) are common
fn attr(values: &'static [&'static str]) -> impl Strategy<Value = String> {
    prop::sample::select(values).prop_map(String::from)
}

fn descriptor() -> impl Strategy<Value = ClothingDescriptor> {
    (
        prop::option::weighted(0.95, attr(&["black", "white", "blue"])),
        prop::option::weighted(0.95, attr(&["tshirt", "jeans"])),
        prop::option::of(attr(&["cotton", "wool", ""])),
        prop::option::of(attr(&["plain", "striped"])),
        prop::option::of(attr(&["X", "Y"])),
    )
        .prop_map(|(color, subtype, material, pattern, brand)| {
            ClothingDescriptor::from_parts(color, subtype, material, pattern, brand)
        })
}

fn outfit() -> impl Strategy<Value = Outfit> {
    prop::collection::vec(prop::option::weighted(0.8, descriptor()), 0..6).prop_map(Outfit::new)
}

fn wardrobe_items() -> impl Strategy<Value = Vec<ClothingDescriptor>> {
    prop::collection::vec(descriptor(), 0..8)
}

fn rounding() -> impl Strategy<Value = Rounding> {
    prop_oneof![Just(Rounding::HalfAwayFromZero), Just(Rounding::HalfEven)]
}

proptest! {
    /// Score is always within [0, 100]
    #[test]
    fn score_is_bounded(outfit in outfit(), items in wardrobe_items(), rounding in rounding()) {
        let p = CompatibilityScorer::with_rounding(rounding).score(&outfit, &Wardrobe::new(items));
        prop_assert!(p.value() <= 100);
    }

    /// An empty wardrobe always scores zero
    #[test]
    fn empty_wardrobe_scores_zero(outfit in outfit()) {
        prop_assert_eq!(score(&outfit, &Wardrobe::default()).value(), 0);
    }

    /// An outfit with no filled slots always scores zero
    #[test]
    fn empty_outfit_scores_zero(items in wardrobe_items(), empties in 0usize..4) {
        let outfit = Outfit::new(vec![None; empties]);
        prop_assert_eq!(score(&outfit, &Wardrobe::new(items)).value(), 0);
    }

    /// Every exact match is also a loose match
    #[test]
    fn exact_implies_loose(target in descriptor(), item in descriptor()) {
        if matches_exact(&target, &item) {
            prop_assert!(matches_loose(&target, &item));
        }
    }

    /// A descriptor with both required fields matches itself exactly
    #[test]
    fn complete_descriptor_matches_itself(d in descriptor()) {
        prop_assume!(d.is_complete());
        prop_assert_eq!(classify(&d, &d), MatchTier::Exact);
    }

    /// Wardrobe order never changes the score
    #[test]
    fn score_ignores_wardrobe_order(
        outfit in outfit(),
        items in wardrobe_items().prop_shuffle(),
    ) {
        let mut reversed = items.clone();
        reversed.reverse();

        let forward = score_detailed(&outfit, &Wardrobe::new(items));
        let backward = score_detailed(&outfit, &Wardrobe::new(reversed));

        prop_assert_eq!(forward.percentage, backward.percentage);
        for (a, b) in forward.slots.iter().zip(&backward.slots) {
            prop_assert_eq!(a.tier, b.tier);
        }
    }

    /// Adding an item equal to a slot's target never lowers the score
    #[test]
    fn adding_exact_item_is_monotone(
        outfit in outfit(),
        items in wardrobe_items(),
        pick in any::<prop::sample::Index>(),
    ) {
        let filled: Vec<&ClothingDescriptor> = outfit.filled_slots().map(|(_, d)| d).collect();
        prop_assume!(!filled.is_empty());

        let target = pick.get(&filled);
        let before = score(&outfit, &Wardrobe::new(items.clone()));

        let mut more = items;
        more.push((*target).clone());
        let after = score(&outfit, &Wardrobe::new(more));

        prop_assert!(after >= before);
    }

    /// Per-slot credit is 0, 50 or 100 and the aggregate is its rounded mean
    #[test]
    fn aggregate_is_rounded_mean(
        outfit in outfit(),
        items in wardrobe_items(),
        rounding in rounding(),
    ) {
        let wardrobe = Wardrobe::new(items);
        let scorer = CompatibilityScorer::with_rounding(rounding);
        let detailed = scorer.score_detailed(&outfit, &wardrobe);

        for slot in &detailed.slots {
            prop_assert!([0, 50, 100].contains(&slot.credit()));
        }

        prop_assert_eq!(detailed.percentage, scorer.score(&outfit, &wardrobe));
        if detailed.counted_slots > 0 && !wardrobe.is_empty() {
            let expected = rounding.divide(detailed.total_credit, detailed.counted_slots as u64);
            prop_assert_eq!(u64::from(detailed.percentage.value()), expected);
        }
    }
}
