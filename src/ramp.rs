//! Ramp generation: one derived color per fixed shade level.

use crate::config::{
    self, HUE_SHIFT_DARK_SHADE, HUE_SHIFT_DEGREES, HUE_SHIFT_LIGHT_SHADE, LIGHTNESS_DRAIN,
    LIGHT_TARGET, MAX_LIGHTNESS, MAX_SHADE, MIN_LIGHTNESS, MIN_SATURATION_DARK,
    MIN_SATURATION_LIGHT, SATURATION_BOOST, SATURATION_BOOST_LIMIT, SATURATION_DRAIN,
    SHADE_LEVELS,
};
use crate::convert::{hex_to_rgb, hsl_to_rgb, rgb_to_hex, rgb_to_hsl, Hsl};
use crate::error::{PaletteError, Result};
use crate::model::Swatch;

/// Generate the full shade ramp for a seed color.
///
/// Returns exactly one swatch per fixed shade level, in ascending
/// order. The entry at `base_shade` carries the seed's HSL unchanged,
/// so it reproduces the seed hex. Pure function of its arguments.
pub fn generate_ramp(seed_hex: &str, base_shade: u16) -> Result<Vec<Swatch>> {
    if !config::is_shade_level(base_shade) {
        return Err(PaletteError::UnknownShadeLevel { shade: base_shade });
    }

    let seed = rgb_to_hsl(hex_to_rgb(seed_hex)?);

    Ok(SHADE_LEVELS
        .iter()
        .map(|&shade| Swatch {
            shade,
            hex: rgb_to_hex(hsl_to_rgb(shade_hsl(seed, shade, base_shade))),
        })
        .collect())
}

/// Derive the HSL for one shade level from the seed's HSL.
fn shade_hsl(seed: Hsl, shade: u16, base_shade: u16) -> Hsl {
    let Hsl {
        mut h,
        mut s,
        mut l,
    } = seed;

    if shade < base_shade {
        // Lighter direction: raise lightness towards the light target,
        // drain saturation. The factor divides by base_shade, so its
        // steepness varies with the classified base; kept as-is for
        // output compatibility with the reference scale.
        let factor = 1.0 - f64::from(shade) / f64::from(base_shade);
        l = (l + (LIGHT_TARGET - l) * factor).min(MAX_LIGHTNESS);
        s = (s - s * SATURATION_DRAIN * factor).max(MIN_SATURATION_LIGHT);

        if shade <= HUE_SHIFT_LIGHT_SHADE {
            h = (h + HUE_SHIFT_DEGREES) % 360.0;
        }
    } else if shade > base_shade {
        // Darker direction: the denominator is zero only when
        // base_shade == MAX_SHADE, and no fixed level is darker than
        // that, so this branch never runs with a zero denominator. A
        // zero factor keeps the seed HSL should the scale ever grow.
        let span = f64::from(MAX_SHADE) - f64::from(base_shade);
        let factor = if span == 0.0 {
            0.0
        } else {
            (f64::from(shade) - f64::from(base_shade)) / span
        };
        l = (l - l * LIGHTNESS_DRAIN * factor).max(MIN_LIGHTNESS);

        // Mid-dark shades gain saturation, very dark ones lose it.
        if shade < SATURATION_BOOST_LIMIT {
            s = (s + SATURATION_BOOST * factor).min(1.0);
        } else {
            s = (s - s * SATURATION_DRAIN * factor).max(MIN_SATURATION_DARK);
        }

        if shade >= HUE_SHIFT_DARK_SHADE {
            h = (h - HUE_SHIFT_DEGREES + 360.0) % 360.0;
        }
    }

    Hsl { h, s, l }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn lightness_of(hex: &str) -> f64 {
        rgb_to_hsl(hex_to_rgb(hex).unwrap()).l
    }

    #[test]
    fn produces_thirteen_entries_in_ascending_order() {
        let ramp = generate_ramp("#ff6b6b", 300).unwrap();
        assert_eq!(ramp.len(), 13);
        let shades: Vec<u16> = ramp.iter().map(|s| s.shade).collect();
        assert_eq!(shades, SHADE_LEVELS.to_vec());
    }

    #[test]
    fn every_entry_is_well_formed_hex() {
        let ramp = generate_ramp("#3b82f6", 300).unwrap();
        for swatch in &ramp {
            assert!(crate::validate::is_valid_hex(&swatch.hex));
            assert_eq!(swatch.hex.len(), 7);
            assert_eq!(swatch.hex, swatch.hex.to_ascii_lowercase());
        }
    }

    #[test]
    fn base_entry_reproduces_the_seed() {
        let ramp = generate_ramp("#FF6B6B", 300).unwrap();
        let base = ramp.iter().find(|s| s.shade == 300).unwrap();
        assert_eq!(base.hex, "#ff6b6b");

        let ramp = generate_ramp("#3b82f6", 300).unwrap();
        let base = ramp.iter().find(|s| s.shade == 300).unwrap();
        assert_eq!(base.hex, "#3b82f6");
    }

    #[test]
    fn known_ramp_for_ff6b6b() {
        let ramp = generate_ramp("#ff6b6b", 300).unwrap();
        let expected = [
            (50, "#f7c8c4"),
            (75, "#f7c1bc"),
            (100, "#f7bab4"),
            (200, "#f99191"),
            (300, "#ff6b6b"),
            (400, "#ff3c3c"),
            (500, "#ff0c0c"),
            (600, "#dc0000"),
            (700, "#9d1010"),
            (800, "#6f0e0e"),
            (900, "#430b0f"),
            (925, "#390a0d"),
            (950, "#2e080b"),
        ];
        for (swatch, (shade, hex)) in ramp.iter().zip(expected) {
            assert_eq!(swatch.shade, shade);
            assert_eq!(swatch.hex, hex);
        }
    }

    #[test]
    fn lightness_is_monotone_on_both_sides_of_the_base() {
        let ramp = generate_ramp("#ff6b6b", 300).unwrap();

        // Lighter side: lightness decreases towards the base.
        let lighter: Vec<f64> = ramp
            .iter()
            .filter(|s| s.shade <= 300)
            .map(|s| lightness_of(&s.hex))
            .collect();
        assert!(lighter.windows(2).all(|w| w[0] >= w[1]));

        // Darker side: lightness keeps decreasing past the base.
        let darker: Vec<f64> = ramp
            .iter()
            .filter(|s| s.shade >= 300)
            .map(|s| lightness_of(&s.hex))
            .collect();
        assert!(darker.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn identical_inputs_give_identical_output() {
        let a = generate_ramp("#3b82f6", 300).unwrap();
        let b = generate_ramp("#3b82f6", 300).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn darkest_base_shade_has_no_darker_branch() {
        // Black classifies as 950; every other level lightens from it
        // and the ramp ends at the seed itself.
        let ramp = generate_ramp("#000000", 950).unwrap();
        assert_eq!(ramp.len(), 13);
        assert_eq!(ramp.last().unwrap().hex, "#000000");
        assert_eq!(ramp[0].hex, "#dbd8d8");
    }

    #[test]
    fn rejects_shade_outside_the_fixed_scale() {
        assert!(matches!(
            generate_ramp("#ff6b6b", 150),
            Err(PaletteError::UnknownShadeLevel { shade: 150 })
        ));
    }

    #[test]
    fn rejects_invalid_seed() {
        assert!(generate_ramp("#zzzzzz", 300).is_err());
    }
}
