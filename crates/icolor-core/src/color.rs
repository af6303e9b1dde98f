// SPDX-License-Identifier: MIT
//
// ColorSpec — an immutable color value in one of two representations.
//
// Presets are written in HSB, hex strings and byte channels arrive as
// sRGB. Rather than forcing one into the other at construction time, a
// ColorSpec remembers which form it was built from and converts lazily
// when a host asks for sRGB. Every component is a fraction in [0, 1];
// hue is a fraction of a full turn (0.5 = 180°).
//
// Single-letter names (h, s, v, p, q, t) follow the usual HSV formulas.
#![allow(clippy::many_single_char_names)]

use std::fmt;

use crate::adapter::ColorAdapter;

// ─── Hsb ─────────────────────────────────────────────────────────────────────

/// Hue, saturation and brightness with opacity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsb {
    /// Hue as a fraction of a turn: 0.0 (red) through 1.0 (red again).
    pub hue: f64,
    /// Saturation: 0.0 (gray) to 1.0 (fully saturated).
    pub saturation: f64,
    /// Brightness: 0.0 (black) to 1.0 (full value).
    pub brightness: f64,
    /// Opacity: 0.0 (transparent) to 1.0 (opaque).
    pub opacity: f64,
}

impl Hsb {
    /// Create a fully opaque HSB color.
    #[inline]
    #[must_use]
    pub const fn new(hue: f64, saturation: f64, brightness: f64) -> Self {
        Self {
            hue,
            saturation,
            brightness,
            opacity: 1.0,
        }
    }

    /// Return a copy with every component in range: hue wrapped into
    /// [0, 1), the rest clamped to 0.0–1.0. A non-finite hue becomes 0.0.
    #[must_use]
    pub fn clamped(self) -> Self {
        Self {
            hue: wrap_hue(self.hue),
            saturation: clamp_unit(self.saturation),
            brightness: clamp_unit(self.brightness),
            opacity: clamp_unit(self.opacity),
        }
    }

    /// Convert to normalized sRGB.
    ///
    /// Components are brought into range with [`Hsb::clamped`] first, so
    /// every output channel is in 0.0–1.0.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn to_rgb(self) -> Rgb {
        let Self {
            hue,
            saturation: s,
            brightness: v,
            opacity,
        } = self.clamped();

        if s <= 0.0 {
            return Rgb { red: v, green: v, blue: v, opacity };
        }

        let h = hue * 6.0;
        let sector = h.floor();
        let f = h - sector;

        let p = v * (1.0 - s);
        let q = v * s.mul_add(-f, 1.0);
        let t = v * s.mul_add(f - 1.0, 1.0);

        // Safe: wrap_hue keeps h in [0, 6), so sector is 0..=5.
        let (red, green, blue) = match sector as u8 {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        };

        Rgb { red, green, blue, opacity }
    }
}

// ─── Rgb ─────────────────────────────────────────────────────────────────────

/// Normalized sRGB with opacity, every component in 0.0–1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub opacity: f64,
}

impl Rgb {
    /// Create a fully opaque sRGB color.
    #[inline]
    #[must_use]
    pub const fn new(red: f64, green: f64, blue: f64) -> Self {
        Self {
            red,
            green,
            blue,
            opacity: 1.0,
        }
    }

    /// Return a copy with every component clamped to 0.0–1.0 (NaN → 0.0).
    #[must_use]
    pub fn clamped(self) -> Self {
        Self {
            red: clamp_unit(self.red),
            green: clamp_unit(self.green),
            blue: clamp_unit(self.blue),
            opacity: clamp_unit(self.opacity),
        }
    }

    /// Convert to 8-bit RGBA, rounding each channel.
    #[must_use]
    pub fn to_rgba8(self) -> [u8; 4] {
        [
            to_u8(self.red),
            to_u8(self.green),
            to_u8(self.blue),
            to_u8(self.opacity),
        ]
    }

    /// Format as `#RRGGBB`, or `#RRGGBBAA` when the alpha byte is below 255.
    #[must_use]
    pub fn to_hex(self) -> String {
        let [r, g, b, a] = self.to_rgba8();
        if a == u8::MAX {
            format!("#{r:02X}{g:02X}{b:02X}")
        } else {
            format!("#{r:02X}{g:02X}{b:02X}{a:02X}")
        }
    }
}

// ─── ColorSpec ───────────────────────────────────────────────────────────────

/// An immutable color value, built from HSB or from sRGB.
///
/// Equality is plain value equality on the stored representation: an HSB
/// spec never compares equal to an RGB spec, even if both would render
/// the same pixel.
///
/// # Examples
///
/// ```
/// use icolor_core::ColorSpec;
///
/// let sky = ColorSpec::from_hex("#18B5DF").unwrap();
/// let same = ColorSpec::from_rgb(0x18, 0xB5, 0xDF);
/// assert_eq!(sky, same);
///
/// // Out-of-range channels are clamped, not rejected.
/// assert_eq!(
///     ColorSpec::from_rgba(-10, 300, 128, 150),
///     ColorSpec::from_rgba(0, 255, 128, 100),
/// );
/// ```
#[derive(Clone, Copy, PartialEq)]
pub enum ColorSpec {
    Hsb(Hsb),
    Rgb(Rgb),
}

impl ColorSpec {
    /// Create an opaque color from HSB fractions.
    ///
    /// Stored as given, unchecked; this is what the preset palette is built
    /// from. Every conversion out of a `ColorSpec` clamps.
    #[inline]
    #[must_use]
    pub const fn hsb(hue: f64, saturation: f64, brightness: f64) -> Self {
        Self::Hsb(Hsb::new(hue, saturation, brightness))
    }

    /// Create an opaque color from normalized sRGB fractions.
    ///
    /// Stored as given, unchecked. Every conversion out of a `ColorSpec`
    /// clamps.
    #[inline]
    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::Rgb(Rgb::new(red, green, blue))
    }

    /// The opacity fraction, whichever representation is stored.
    #[inline]
    #[must_use]
    pub const fn opacity(self) -> f64 {
        match self {
            Self::Hsb(hsb) => hsb.opacity,
            Self::Rgb(rgb) => rgb.opacity,
        }
    }

    /// Return a copy with the given opacity (clamped to 0.0–1.0).
    #[must_use]
    pub fn with_opacity(self, opacity: f64) -> Self {
        let opacity = clamp_unit(opacity);
        match self {
            Self::Hsb(hsb) => Self::Hsb(Hsb { opacity, ..hsb }),
            Self::Rgb(rgb) => Self::Rgb(Rgb { opacity, ..rgb }),
        }
    }

    /// The HSB triple this spec was built from, if any.
    #[must_use]
    pub const fn as_hsb(self) -> Option<Hsb> {
        match self {
            Self::Hsb(hsb) => Some(hsb),
            Self::Rgb(_) => None,
        }
    }

    /// Convert to normalized sRGB, every component in 0.0–1.0.
    #[must_use]
    pub fn to_rgb(self) -> Rgb {
        match self {
            Self::Hsb(hsb) => hsb.to_rgb(),
            Self::Rgb(rgb) => rgb.clamped(),
        }
    }

    /// Convert to 8-bit RGBA.
    #[must_use]
    pub fn to_rgba8(self) -> [u8; 4] {
        self.to_rgb().to_rgba8()
    }

    /// Format as `#RRGGBB` (or `#RRGGBBAA` when translucent).
    #[must_use]
    pub fn to_hex(self) -> String {
        self.to_rgb().to_hex()
    }

    /// Hand this color to the host toolkit.
    #[inline]
    #[must_use]
    pub fn into_native<T: ColorAdapter>(self) -> T {
        T::from_spec(&self)
    }
}

impl fmt::Debug for ColorSpec {
    #[allow(clippy::float_cmp)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hsb(c) if c.opacity == 1.0 => write!(
                f,
                "ColorSpec::hsb({:?}, {:?}, {:?})",
                c.hue, c.saturation, c.brightness
            ),
            Self::Hsb(c) => write!(
                f,
                "ColorSpec::hsb({:?}, {:?}, {:?}).with_opacity({:?})",
                c.hue, c.saturation, c.brightness, c.opacity
            ),
            Self::Rgb(c) if c.opacity == 1.0 => write!(
                f,
                "ColorSpec::rgb({:?}, {:?}, {:?})",
                c.red, c.green, c.blue
            ),
            Self::Rgb(c) => write!(
                f,
                "ColorSpec::rgb({:?}, {:?}, {:?}).with_opacity({:?})",
                c.red, c.green, c.blue, c.opacity
            ),
        }
    }
}

impl fmt::Display for ColorSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl From<Hsb> for ColorSpec {
    fn from(hsb: Hsb) -> Self {
        Self::Hsb(hsb)
    }
}

impl From<Rgb> for ColorSpec {
    fn from(rgb: Rgb) -> Self {
        Self::Rgb(rgb)
    }
}

// ─── Helpers ─────────────────────────────────────────────────────────────────

/// Clamp a fraction to 0.0–1.0. NaN becomes 0.0.
#[inline]
#[must_use]
pub fn clamp_unit(v: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}

/// Wrap a hue into [0, 1). NaN and infinities become 0.0.
#[inline]
#[must_use]
pub fn wrap_hue(hue: f64) -> f64 {
    if !hue.is_finite() {
        return 0.0;
    }
    // rem_euclid can round up to exactly 1.0 for tiny negative inputs.
    let wrapped = hue.rem_euclid(1.0);
    if wrapped >= 1.0 { 0.0 } else { wrapped }
}

/// Convert a fraction (0.0–1.0) to a byte with correct rounding.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_u8(v: f64) -> u8 {
    // Safe: clamp guarantees 0.0 <= value <= 255.0 before truncation.
    clamp_unit(v).mul_add(255.0, 0.5).clamp(0.0, 255.0) as u8
}

// ─── Tests ───────────────────────────────────────────────────────────────────
