// SPDX-License-Identifier: MIT
//
// Hex string constructors.
//
// Accepted shape: optional surrounding whitespace, an optional leading
// `#`, then exactly six hexadecimal digits in any case. The digits are
// read as one 24-bit value laid out as 0xRRGGBB. Anything else is a
// MalformedHex error, which the `from_hex*` constructors surface as None.

use std::str::FromStr;

use crate::color::{ColorSpec, Rgb, clamp_unit};
use crate::error::ColorError;
use crate::rgb::opacity_fraction;

/// Parse a six-digit hex color into opaque sRGB.
///
/// # Errors
///
/// Returns [`ColorError::MalformedHex`] when the cleaned input is not
/// exactly six hexadecimal digits.
pub fn parse_hex(hex: &str) -> Result<Rgb, ColorError> {
    let cleaned = hex.trim().to_uppercase();
    let digits = cleaned.strip_prefix('#').unwrap_or(&cleaned);

    let value = if digits.len() == 6 {
        digits
            .bytes()
            .try_fold(0u32, |acc, c| parse_hex_digit(c).map(|d| acc << 4 | u32::from(d)))
    } else {
        None
    };

    let Some(value) = value else {
        log::debug!("rejecting malformed hex color {hex:?}");
        return Err(ColorError::MalformedHex {
            input: digits.to_owned(),
        });
    };

    Ok(Rgb::new(
        channel(value >> 16),
        channel(value >> 8),
        channel(value),
    ))
}

impl ColorSpec {
    /// Create an opaque color from a hex string such as `"#18B5DF"`.
    ///
    /// Case-insensitive; the `#` is optional.
    ///
    /// # Errors
    ///
    /// Returns `None` if the string is not six hexadecimal digits.
    #[must_use]
    pub fn from_hex(hex: &str) -> Option<Self> {
        Self::from_hex_with_opacity(hex, 1.0)
    }

    /// Create a color from a hex string and an opacity fraction (0.0–1.0).
    ///
    /// The opacity is clamped; NaN becomes fully transparent.
    #[must_use]
    pub fn from_hex_with_opacity(hex: &str, opacity: f64) -> Option<Self> {
        let rgb = parse_hex(hex).ok()?;
        Some(Self::Rgb(Rgb {
            opacity: clamp_unit(opacity),
            ..rgb
        }))
    }

    /// Create a color from a hex string and an opacity percentage (0–100).
    ///
    /// The percentage is clamped, then scaled as a real number, so 50
    /// gives an opacity of 0.5.
    #[must_use]
    pub fn from_hex_with_percent(hex: &str, opacity: i32) -> Option<Self> {
        Self::from_hex_with_opacity(hex, opacity_fraction(opacity))
    }
}

impl FromStr for ColorSpec {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hex(s).map(Self::Rgb)
    }
}

/// Low byte of `value` as a fraction of 255.
#[inline]
fn channel(value: u32) -> f64 {
    f64::from(value & 0xFF) / 255.0
}

#[inline]
const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}
