//! Domain models for fitcheck
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`ClothingDescriptor`] - The attributes of one clothing item
//! - [`Outfit`] - Ordered slots, each holding a descriptor or empty
//! - [`Wardrobe`] - The items a user owns
//! - [`MatchTier`] - How closely a slot is reproduced
//! - [`Percentage`] / [`Rounding`] - The aggregate score and how it is rounded

mod descriptor;
mod outfit;
mod percentage;
mod tier;
mod wardrobe;

pub use descriptor::ClothingDescriptor;
pub use outfit::Outfit;
pub use percentage::{ParseRoundingError, Percentage, Rounding};
pub use tier::{EXACT_CREDIT, LOOSE_CREDIT, MatchTier};
pub use wardrobe::Wardrobe;
