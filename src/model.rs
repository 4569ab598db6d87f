//! Palette data model.

use serde::{Deserialize, Serialize};

/// One derived color at a fixed shade level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Swatch {
    /// Shade level this entry sits at.
    pub shade: u16,
    /// Derived color, lowercase `#rrggbb`.
    pub hex: String,
}

/// A complete generated ramp for one seed color.
///
/// Immutable once built. Exactly one swatch's shade equals
/// `base_shade`; that entry reproduces the seed through the HSL
/// round-trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    /// Display name ("Custom" or a capitalized category name).
    pub name: String,
    /// Seed color the ramp was generated from.
    pub seed: String,
    /// Shade level the seed was classified into.
    pub base_shade: u16,
    /// One entry per fixed shade level, ascending.
    pub swatches: Vec<Swatch>,
}

impl Palette {
    /// The swatch at the palette's base shade.
    pub fn base_swatch(&self) -> Option<&Swatch> {
        self.swatches.iter().find(|s| s.shade == self.base_shade)
    }

    /// Look up the hex for a given shade level.
    pub fn hex_at(&self, shade: u16) -> Option<&str> {
        self.swatches
            .iter()
            .find(|s| s.shade == shade)
            .map(|s| s.hex.as_str())
    }
}
