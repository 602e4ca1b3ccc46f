//! Business logic services
//!
//! Pure logic that operates on domain models.
//! These services have no I/O dependencies - they operate on
//! data passed in and return results.
//!
//! - [`matcher`] - Classify wardrobe items against outfit slots
//! - [`scorer`] - Aggregate slot tiers into a compatibility percentage

pub mod matcher;
pub mod scorer;

pub use matcher::{classify, matches_exact, matches_loose};
pub use scorer::{
    CompatibilityScorer, DetailedScore, ScoreOptions, SlotResult, score, score_detailed,
};
