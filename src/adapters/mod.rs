//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `file/` - TOML and JSON wardrobe/outfit files

pub mod file;
