//! File-based wardrobe and outfit sources
//!
//! Implements `WardrobeSource` and `OutfitSource` over `.toml` / `.json` files.
//!
//! - [`parser`] - Read and deserialize wardrobe and outfit files
//! - [`catalog`] - Directory layout implementing both ports

pub mod catalog;
pub mod parser;

pub use catalog::FileCatalog;
pub use parser::{
    FileFormat, LoadError, OutfitFile, SlotEntry, WardrobeFile, load_outfit, load_wardrobe,
};
