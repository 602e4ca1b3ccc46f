//! Clothing descriptor model
//!
//! A descriptor is the attribute tuple identifying one clothing item.
//! `color` and `subtype` are required for comparison; `material`,
//! `pattern` and `brand` are optional and act as wildcards when absent.
//!
//! # Examples
//!
//! ```
//! use fitcheck::core::models::ClothingDescriptor;
//!
//! let tee = ClothingDescriptor::new("black", "tshirt").with_brand("X");
//! assert!(tee.is_complete());
//! assert_eq!(tee.brand(), Some("X"));
//! assert_eq!(tee.material(), None);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// The attributes of one clothing item
///
/// Every field is optional on the wire so that records with a missing
/// required field can still be loaded. Such descriptors never match
/// anything (see [`ClothingDescriptor::is_complete`]). Unknown keys are
/// rejected, so a misspelled attribute never turns into a wildcard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClothingDescriptor {
    /// Color category (required)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    color: Option<String>,

    /// Garment sub-kind, e.g. "tshirt" or "jacket" (required)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    subtype: Option<String>,

    /// Material category, wildcard when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    material: Option<String>,

    /// Pattern category, wildcard when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pattern: Option<String>,

    /// Brand, wildcard when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    brand: Option<String>,
}

impl ClothingDescriptor {
    /// Create a descriptor with both required attributes set
    #[must_use]
    pub fn new(color: impl Into<String>, subtype: impl Into<String>) -> Self {
        Self {
            color: Some(color.into()),
            subtype: Some(subtype.into()),
            ..Self::default()
        }
    }

    /// Set the material
    #[must_use]
    pub fn with_material(mut self, material: impl Into<String>) -> Self {
        self.material = Some(material.into());
        self
    }

    /// Set the pattern
    #[must_use]
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    /// Set the brand
    #[must_use]
    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    /// Build a descriptor from raw, possibly incomplete, attributes
    #[must_use]
    pub const fn from_parts(
        color: Option<String>,
        subtype: Option<String>,
        material: Option<String>,
        pattern: Option<String>,
        brand: Option<String>,
    ) -> Self {
        Self {
            color,
            subtype,
            material,
            pattern,
            brand,
        }
    }

    /// Color category
    #[must_use]
    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    /// Garment sub-kind
    #[must_use]
    pub fn subtype(&self) -> Option<&str> {
        self.subtype.as_deref()
    }

    /// Material category, if specified
    #[must_use]
    pub fn material(&self) -> Option<&str> {
        self.material.as_deref()
    }

    /// Pattern category, if specified
    #[must_use]
    pub fn pattern(&self) -> Option<&str> {
        self.pattern.as_deref()
    }

    /// Brand, if specified
    #[must_use]
    pub fn brand(&self) -> Option<&str> {
        self.brand.as_deref()
    }

    /// Whether both required attributes (color and subtype) are present
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.color.is_some() && self.subtype.is_some()
    }
}

impl fmt::Display for ClothingDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}",
            self.color().unwrap_or("?"),
            self.subtype().unwrap_or("?")
        )?;

        let extras: Vec<&str> =
            [self.material(), self.pattern(), self.brand()].into_iter().flatten().collect();
        if !extras.is_empty() {
            write!(f, " ({})", extras.join(", "))?;
        }
        Ok(())
    }
}
