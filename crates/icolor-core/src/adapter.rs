// SPDX-License-Identifier: MIT
//
// The seam between icolor and the host toolkit's own color type.
//
// icolor never links against a GUI framework. The host implements
// ColorAdapter for its color type once, and every preset and constructor
// in the workspace becomes available as that type via
// `ColorSpec::into_native`.

use crate::color::{ColorSpec, Hsb, Rgb};

/// Build a host color value from a [`ColorSpec`].
///
/// The built-in adapters always hand over components in range, even for
/// specs built with the unchecked `ColorSpec::hsb` / `ColorSpec::rgb`.
///
/// ```
/// use icolor_core::{ColorAdapter, ColorSpec};
///
/// struct HostColor(u32);
///
/// impl ColorAdapter for HostColor {
///     fn from_spec(spec: &ColorSpec) -> Self {
///         let [r, g, b, a] = spec.to_rgba8();
///         Self(u32::from_be_bytes([r, g, b, a]))
///     }
/// }
///
/// let native: HostColor = ColorSpec::from_rgb(255, 0, 0).into_native();
/// assert_eq!(native.0, 0xFF00_00FF);
/// ```
pub trait ColorAdapter: Sized {
    fn from_spec(spec: &ColorSpec) -> Self;
}

/// Normalized `[r, g, b, a]`, the layout GPU vertex colors use.
impl ColorAdapter for [f32; 4] {
    #[allow(clippy::cast_possible_truncation)]
    fn from_spec(spec: &ColorSpec) -> Self {
        let rgb = spec.to_rgb();
        [
            rgb.red as f32,
            rgb.green as f32,
            rgb.blue as f32,
            rgb.opacity as f32,
        ]
    }
}

/// 8-bit `[r, g, b, a]`.
impl ColorAdapter for [u8; 4] {
    fn from_spec(spec: &ColorSpec) -> Self {
        spec.to_rgba8()
    }
}

impl ColorAdapter for Rgb {
    fn from_spec(spec: &ColorSpec) -> Self {
        spec.to_rgb()
    }
}

/// Hosts that take HSB directly. RGB specs are converted back; grays get
/// hue 0.
impl ColorAdapter for Hsb {
    fn from_spec(spec: &ColorSpec) -> Self {
        match *spec {
            ColorSpec::Hsb(hsb) => hsb.clamped(),
            ColorSpec::Rgb(rgb) => rgb_to_hsb(rgb.clamped()),
        }
    }
}

fn rgb_to_hsb(rgb: Rgb) -> Hsb {
    let Rgb { red, green, blue, opacity } = rgb;
    let max = red.max(green).max(blue);
    let min = red.min(green).min(blue);
    let delta = max - min;

    let saturation = if max > 0.0 { delta / max } else { 0.0 };
    let hue = if delta <= 0.0 {
        0.0
    } else if (max - red).abs() < f64::EPSILON {
        ((green - blue) / delta).rem_euclid(6.0) / 6.0
    } else if (max - green).abs() < f64::EPSILON {
        ((blue - red) / delta + 2.0) / 6.0
    } else {
        ((red - green) / delta + 4.0) / 6.0
    };

    Hsb {
        hue,
        saturation,
        brightness: max,
        opacity,
    }
}
