//! shade-ramp - generate a design-system shade ramp from one seed color.
//!
//! Takes a seed color (hex string or a category from the built-in named
//! table), classifies which shade level it reads as, and derives one
//! color per fixed shade level by interpolating lightness, saturation,
//! and hue around the seed.
//!
//! # Example
//!
//! ```
//! use shade_ramp::build_palette;
//!
//! let palette = build_palette("#FF6B6B", None).unwrap();
//! assert_eq!(palette.base_shade, 300);
//! assert_eq!(palette.swatches.len(), 13);
//! assert_eq!(palette.base_swatch().unwrap().hex, "#ff6b6b");
//! ```

pub mod classify;
pub mod config;
pub mod convert;
pub mod error;
pub mod model;
pub mod named;
pub mod ramp;
pub mod store;
pub mod validate;

// Re-exports for convenience
pub use classify::{classify_base_shade, contrast_text, luminance};
pub use config::{MAX_PALETTES, SHADE_LEVELS};
pub use convert::{hex_to_rgb, hsl_to_rgb, rgb_to_hex, rgb_to_hsl, Hsl, Rgb};
pub use error::{PaletteError, Result};
pub use model::{Palette, Swatch};
pub use named::NamedColorTable;
pub use ramp::generate_ramp;
pub use store::PaletteStore;
pub use validate::{is_valid_hex, normalize_hex};

/// Build a complete palette from a seed color.
///
/// This is the main high-level function that performs the full pipeline:
/// 1. Validate and normalize the hex string
/// 2. Classify the base shade from luminance
/// 3. Generate the ramp around the seed
///
/// # Arguments
///
/// * `seed` - Seed color, hex with or without the leading `#`
/// * `name` - Display name; defaults to "Custom"
pub fn build_palette(seed: &str, name: Option<&str>) -> Result<Palette> {
    let seed = validate::normalize_hex(seed)?;
    let base_shade = classify::classify_base_shade(&seed)?;
    let swatches = ramp::generate_ramp(&seed, base_shade)?;

    Ok(Palette {
        name: name.unwrap_or("Custom").to_string(),
        seed,
        base_shade,
        swatches,
    })
}

/// Build a palette from a named category in a reference table.
///
/// Reads the category's 500 entry as the seed and runs the same
/// pipeline as [`build_palette`]; the display name is the capitalized
/// category name.
pub fn build_named_palette(table: &NamedColorTable, name: &str) -> Result<Palette> {
    let (display, hex) = table.seed_for(name)?;
    build_palette(hex, Some(&display))
}
