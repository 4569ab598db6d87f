//! Base-shade classification from perceived luminance.

use tracing::debug;

use crate::config::{DARKEST_BASE_SHADE, LUMINANCE_LADDER, TEXT_LUMINANCE_THRESHOLD};
use crate::convert::{hex_to_rgb, Rgb};
use crate::error::Result;

/// Gamma-weighted relative luminance, normalized to [0, 1].
///
/// Uses the Rec. 601 weights over raw 8-bit channels rather than CIE
/// luminance; the ladder thresholds are tuned to this exact form.
pub fn luminance(rgb: Rgb) -> f64 {
    (0.299 * f64::from(rgb.r) + 0.587 * f64::from(rgb.g) + 0.114 * f64::from(rgb.b)) / 255.0
}

/// Map a color to the shade level it reads as on the scale.
///
/// Walks the threshold ladder from lightest to darkest and returns the
/// first level whose threshold the luminance exceeds. Only the 9 ladder
/// levels plus 950 can be returned; 50, 75, and 925 never classify as a
/// base, they only appear as derived ramp entries.
pub fn classify_base_shade(hex: &str) -> Result<u16> {
    let lum = luminance(hex_to_rgb(hex)?);

    let shade = LUMINANCE_LADDER
        .iter()
        .find(|(threshold, _)| lum > *threshold)
        .map(|&(_, shade)| shade)
        .unwrap_or(DARKEST_BASE_SHADE);

    debug!(hex, luminance = lum, shade, "classified base shade");
    Ok(shade)
}

/// Pick black or white text for a given swatch background.
pub fn contrast_text(rgb: Rgb) -> &'static str {
    if luminance(rgb) > TEXT_LUMINANCE_THRESHOLD {
        "#000000"
    } else {
        "#ffffff"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn luminance_of_known_colors() {
        let lum = luminance(hex_to_rgb("#ff6b6b").unwrap());
        assert!((lum - 0.593_145_098).abs() < 1e-9);

        assert_eq!(luminance(Rgb::new(255, 255, 255)), 1.0);
        assert_eq!(luminance(Rgb::new(0, 0, 0)), 0.0);
    }

    #[test]
    fn classifies_known_seeds() {
        assert_eq!(classify_base_shade("#ffffff").unwrap(), 100);
        assert_eq!(classify_base_shade("#ff6b6b").unwrap(), 300);
        assert_eq!(classify_base_shade("#3b82f6").unwrap(), 300);
        assert_eq!(classify_base_shade("#0a0a0a").unwrap(), 800);
        assert_eq!(classify_base_shade("#000000").unwrap(), 950);
    }

    #[test]
    fn three_digit_input_classifies_like_expanded() {
        assert_eq!(
            classify_base_shade("#fff").unwrap(),
            classify_base_shade("#ffffff").unwrap()
        );
    }

    #[test]
    fn classification_is_monotone_in_luminance() {
        // Walk a gray ramp from white to black; the shade level must
        // never decrease as luminance drops.
        let mut last = 0;
        for v in (0..=255u16).rev() {
            let v = v as u8;
            let hex = crate::convert::rgb_to_hex(Rgb::new(v, v, v));
            let shade = classify_base_shade(&hex).unwrap();
            assert!(shade >= last, "shade went backwards at {hex}");
            last = shade;
        }
        assert_eq!(last, 950);
    }

    #[test]
    fn only_reachable_levels_are_returned() {
        let unreachable = [50, 75, 925];
        for v in 0..=255u16 {
            let v = v as u8;
            let hex = crate::convert::rgb_to_hex(Rgb::new(v, v, v));
            let shade = classify_base_shade(&hex).unwrap();
            assert!(!unreachable.contains(&shade));
            assert!(crate::config::is_shade_level(shade));
        }
    }

    #[test]
    fn contrast_text_flips_at_midpoint() {
        assert_eq!(contrast_text(Rgb::new(255, 255, 255)), "#000000");
        assert_eq!(contrast_text(Rgb::new(0, 0, 0)), "#ffffff");
        // #808080 sits just above the 0.5 threshold.
        assert_eq!(contrast_text(Rgb::new(128, 128, 128)), "#000000");
    }
}
