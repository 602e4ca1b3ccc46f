//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between the scoring core
//! and the systems that supply its inputs (files, databases, services).
//!
//! Implementations live in the `adapters` module.
//!
//! ## Design Principle
//!
//! The scorer never loads anything itself. Callers resolve a wardrobe and
//! an outfit through these ports, then hand them to the scorer. A source
//! returning `Ok(None)` means the input is absent, which scores zero.

mod outfit_source;
mod wardrobe_source;

pub use outfit_source::OutfitSource;
pub use wardrobe_source::WardrobeSource;
