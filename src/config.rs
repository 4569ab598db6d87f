//! Fixed constants of the shade scale.

/// The fixed, ordered shade levels of the scale, lightest to darkest.
pub const SHADE_LEVELS: [u16; 13] = [
    50, 75, 100, 200, 300, 400, 500, 600, 700, 800, 900, 925, 950,
];

/// Darkest shade level. Anchors the darker-direction scaling factor.
pub const MAX_SHADE: u16 = 950;

/// Lightness ceiling for lightened shades.
pub const MAX_LIGHTNESS: f64 = 0.97;

/// Lightness floor for darkened shades.
pub const MIN_LIGHTNESS: f64 = 0.03;

/// Lightness target the lighter direction interpolates towards.
pub const LIGHT_TARGET: f64 = 0.9;

/// Saturation floor for lightened shades.
pub const MIN_SATURATION_LIGHT: f64 = 0.03;

/// Saturation floor for very dark shades.
pub const MIN_SATURATION_DARK: f64 = 0.05;

/// Saturation drain rate towards the light end of the ramp.
pub const SATURATION_DRAIN: f64 = 0.3;

/// Saturation boost rate for mid-dark shades.
pub const SATURATION_BOOST: f64 = 0.15;

/// Lightness drain rate towards the dark end of the ramp.
pub const LIGHTNESS_DRAIN: f64 = 0.85;

/// Hue shift in degrees applied at the extremes of the ramp.
pub const HUE_SHIFT_DEGREES: f64 = 5.0;

/// Shade at or below which the lighter-direction hue shift applies.
pub const HUE_SHIFT_LIGHT_SHADE: u16 = 100;

/// Shade at or above which the darker-direction hue shift applies.
pub const HUE_SHIFT_DARK_SHADE: u16 = 900;

/// Shade below which darkening boosts saturation instead of draining it.
pub const SATURATION_BOOST_LIMIT: u16 = 700;

/// Descending luminance thresholds mapped to base shade levels.
///
/// Levels 50, 75, and 925 are absent on purpose: they are produced as
/// ramp entries but never classified as a base.
pub const LUMINANCE_LADDER: [(f64, u16); 9] = [
    (0.8, 100),
    (0.6, 200),
    (0.45, 300),
    (0.3, 400),
    (0.2, 500),
    (0.1, 600),
    (0.05, 700),
    (0.025, 800),
    (0.01, 900),
];

/// Base shade when luminance clears none of the ladder thresholds.
pub const DARKEST_BASE_SHADE: u16 = 950;

/// Luminance above which swatch text is drawn dark.
pub const TEXT_LUMINANCE_THRESHOLD: f64 = 0.5;

/// Maximum number of palettes a store holds at once.
pub const MAX_PALETTES: usize = 5;

/// Shade level read from the named-color table when a category is picked.
pub const NAMED_SEED_SHADE: u16 = 500;

/// Check whether a value is one of the fixed shade levels.
#[inline]
pub fn is_shade_level(shade: u16) -> bool {
    SHADE_LEVELS.contains(&shade)
}
