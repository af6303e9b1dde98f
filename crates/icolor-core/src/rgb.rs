// SPDX-License-Identifier: MIT
//
// Integer RGB/opacity constructors and the clamping helper they share.
//
// Inputs use the ranges people type into design tools: 0–255 per channel
// and 0–100 for opacity. Nothing here fails; out-of-range values are
// pinned to the nearest bound and then scaled to fractions in real
// arithmetic.

use std::ops::RangeInclusive;

use crate::color::{ColorSpec, Rgb};

/// Valid range for an 8-bit color channel.
pub const RGB_RANGE: RangeInclusive<i32> = 0..=255;

/// Valid range for an opacity percentage.
pub const OPACITY_RANGE: RangeInclusive<i32> = 0..=100;

/// Restrict `value` to the closed `range`.
///
/// Below the start gives the start, above the end gives the end, anything
/// else is returned unchanged.
#[inline]
#[must_use]
pub fn clamp<T: PartialOrd + Copy>(value: T, range: &RangeInclusive<T>) -> T {
    if value < *range.start() {
        *range.start()
    } else if value > *range.end() {
        *range.end()
    } else {
        value
    }
}

/// Convert an opacity percentage to a fraction, clamping to 0–100 first.
#[inline]
#[must_use]
pub fn opacity_fraction(percent: i32) -> f64 {
    f64::from(clamp(percent, &OPACITY_RANGE)) / 100.0
}

#[inline]
fn channel_fraction(value: i32) -> f64 {
    f64::from(clamp(value, &RGB_RANGE)) / 255.0
}

impl ColorSpec {
    /// Create an opaque color from 0–255 channels.
    #[must_use]
    pub fn from_rgb(red: i32, green: i32, blue: i32) -> Self {
        Self::from_rgba(red, green, blue, 100)
    }

    /// Create a color from 0–255 channels and a 0–100 opacity.
    ///
    /// Every argument is clamped to its range; there is no error path.
    #[must_use]
    pub fn from_rgba(red: i32, green: i32, blue: i32, opacity: i32) -> Self {
        Self::Rgb(Rgb {
            red: channel_fraction(red),
            green: channel_fraction(green),
            blue: channel_fraction(blue),
            opacity: opacity_fraction(opacity),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn clamp_below_range() {
        assert_eq!(clamp(-10, &RGB_RANGE), 0);
        assert_eq!(clamp(i32::MIN, &OPACITY_RANGE), 0);
    }

    #[test]
    fn clamp_above_range() {
        assert_eq!(clamp(300, &RGB_RANGE), 255);
        assert_eq!(clamp(i32::MAX, &OPACITY_RANGE), 100);
    }

    #[test]
    fn clamp_inside_range_is_identity() {
        assert_eq!(clamp(0, &RGB_RANGE), 0);
        assert_eq!(clamp(128, &RGB_RANGE), 128);
        assert_eq!(clamp(255, &RGB_RANGE), 255);
    }

    #[test]
    fn clamp_works_on_floats() {
        assert_eq!(clamp(1.5, &(0.0..=1.0)), 1.0);
        assert_eq!(clamp(0.25, &(0.0..=1.0)), 0.25);
    }

    #[test]
    fn channels_scale_to_fractions() {
        let rgb = ColorSpec::from_rgb(255, 0, 51).to_rgb();
        assert_eq!(rgb, Rgb::new(1.0, 0.0, 0.2));
    }

    #[test]
    fn mid_values_do_not_truncate() {
        let rgb = ColorSpec::from_rgba(128, 64, 1, 50).to_rgb();
        assert!(rgb.red > 0.5 && rgb.red < 0.51);
        assert!(rgb.green > 0.25 && rgb.green < 0.26);
        assert!(rgb.blue > 0.0);
        assert_eq!(rgb.opacity, 0.5);
    }

    #[test]
    fn out_of_range_inputs_are_clamped() {
        assert_eq!(
            ColorSpec::from_rgba(-10, 300, 128, 150),
            ColorSpec::from_rgba(0, 255, 128, 100)
        );
    }

    #[test]
    fn default_opacity_is_opaque() {
        assert_eq!(ColorSpec::from_rgb(1, 2, 3), ColorSpec::from_rgba(1, 2, 3, 100));
        assert_eq!(ColorSpec::from_rgb(1, 2, 3).opacity(), 1.0);
    }

    #[test]
    fn negative_opacity_is_transparent() {
        assert_eq!(ColorSpec::from_rgba(10, 20, 30, -1).opacity(), 0.0);
    }

    #[test]
    fn bytes_survive_the_trip() {
        assert_eq!(ColorSpec::from_rgba(12, 200, 99, 100).to_rgba8(), [12, 200, 99, 255]);
    }
}
