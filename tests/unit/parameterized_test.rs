//! Parameterized tests using test-case
//!
//! These tests use test-case to run the same test logic with different inputs.

use fitcheck::core::models::{ClothingDescriptor, MatchTier, Rounding};
use fitcheck::core::services::classify;
use test_case::test_case;

// =============================================================================
// Tier Classification Tests
// =============================================================================

type Attrs<'a> = (Option<&'a str>, Option<&'a str>, Option<&'a str>);

fn descriptor(
    color: &str,
    subtype: &str,
    (material, pattern, brand): Attrs<'_>,
) -> ClothingDescriptor {
    ClothingDescriptor::from_parts(
        Some(color.to_string()),
        Some(subtype.to_string()),
        material.map(String::from),
        pattern.map(String::from),
        brand.map(String::from),
    )
}

#[test_case((None, None, None), (None, None, None), MatchTier::Exact ; "bare target matches bare item")]
#[test_case((None, None, None), (Some("wool"), Some("check"), Some("Z")), MatchTier::Exact ; "bare target matches rich item")]
#[test_case((Some("wool"), None, None), (Some("wool"), None, None), MatchTier::Exact ; "material equal")]
#[test_case((Some("wool"), None, None), (Some("silk"), None, None), MatchTier::Unmatched ; "material differs")]
#[test_case((Some("wool"), None, None), (None, None, None), MatchTier::Unmatched ; "material required but missing")]
#[test_case((None, Some("plain"), None), (None, Some("striped"), None), MatchTier::Loose ; "pattern differs")]
#[test_case((None, Some("plain"), None), (None, None, None), MatchTier::Loose ; "pattern required but missing")]
#[test_case((None, None, Some("X")), (None, None, Some("Y")), MatchTier::Loose ; "brand differs")]
#[test_case((None, Some("plain"), Some("X")), (None, Some("plain"), Some("X")), MatchTier::Exact ; "pattern and brand equal")]
#[test_case((Some("cotton"), Some("plain"), Some("X")), (Some("cotton"), Some("dots"), Some("Y")), MatchTier::Loose ; "material equal others differ")]
#[test_case((None, None, Some("")), (None, None, None), MatchTier::Loose ; "empty brand is not absent")]
#[test_case((None, None, Some("")), (None, None, Some("")), MatchTier::Exact ; "empty brand matches empty brand")]
fn test_optional_attribute_tiers(target: Attrs<'_>, item: Attrs<'_>, expected: MatchTier) {
    let target = descriptor("black", "tshirt", target);
    let item = descriptor("black", "tshirt", item);
    assert_eq!(classify(&target, &item), expected);
}

#[test_case("black", "tshirt", MatchTier::Exact ; "same color and subtype")]
#[test_case("red", "tshirt", MatchTier::Unmatched ; "different color")]
#[test_case("black", "jacket", MatchTier::Unmatched ; "different subtype")]
#[test_case("Black", "tshirt", MatchTier::Unmatched ; "comparison is case sensitive")]
fn test_required_attribute_tiers(color: &str, subtype: &str, expected: MatchTier) {
    let target = ClothingDescriptor::new("black", "tshirt");
    let item = ClothingDescriptor::new(color, subtype);
    assert_eq!(classify(&target, &item), expected);
}

// =============================================================================
// Rounding Tests
// =============================================================================

#[test_case(50, 4, 13, 12 ; "12.5")]
#[test_case(150, 4, 38, 38 ; "37.5")]
#[test_case(250, 4, 63, 62 ; "62.5")]
#[test_case(350, 4, 88, 88 ; "87.5")]
#[test_case(100, 3, 33, 33 ; "33.3")]
#[test_case(200, 3, 67, 67 ; "66.7")]
#[test_case(300, 6, 50, 50 ; "exact 50")]
#[test_case(50, 8, 6, 6 ; "6.25")]
fn test_rounding_modes(total: u64, count: u64, away: u64, even: u64) {
    assert_eq!(Rounding::HalfAwayFromZero.divide(total, count), away);
    assert_eq!(Rounding::HalfEven.divide(total, count), even);
}

#[test_case("half-away-from-zero", Rounding::HalfAwayFromZero ; "kebab away")]
#[test_case("HALF-AWAY-FROM-ZERO", Rounding::HalfAwayFromZero ; "uppercase away")]
#[test_case("half-up", Rounding::HalfAwayFromZero ; "half up alias")]
#[test_case("half-even", Rounding::HalfEven ; "kebab even")]
#[test_case("bankers", Rounding::HalfEven ; "bankers alias")]
fn test_rounding_parsing(input: &str, expected: Rounding) {
    let parsed: Rounding = input.parse().unwrap();
    assert_eq!(parsed, expected);
}

#[test_case("" ; "empty string")]
#[test_case("nearest" ; "unknown mode")]
#[test_case("half_even" ; "underscore is not valid")]
fn test_rounding_parsing_errors(input: &str) {
    let result: Result<Rounding, _> = input.parse();
    assert!(result.is_err(), "Expected error for input: {input:?}");
}
