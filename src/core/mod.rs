//! Core domain logic for fitcheck
//!
//! This module contains pure business logic with no I/O dependencies.
//! All external interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (ClothingDescriptor, Outfit, Wardrobe, MatchTier)
//! - `services/` - Matching and scoring
//! - `ports/` - Trait definitions for wardrobe and outfit sources

pub mod models;
pub mod ports;
pub mod services;
