// SPDX-License-Identifier: MIT
//
// icolor-core — the color value behind every icolor constructor.
//
// A host GUI toolkit already owns a color type. This crate does not try to
// replace it: it builds a small, immutable `ColorSpec` from the inputs
// people actually type (hex strings, 0–255 channels, 0–100 opacity) and
// hands it to the host through the `ColorAdapter` trait. Out-of-range
// numbers are clamped, never rejected. The only failure is a hex string
// that is not six hexadecimal digits.

pub mod adapter;
pub mod color;
pub mod error;
pub mod hex;
pub mod rgb;

pub use adapter::ColorAdapter;
pub use color::{ColorSpec, Hsb, Rgb, clamp_unit, wrap_hue};
pub use error::ColorError;
pub use hex::parse_hex;
pub use rgb::{OPACITY_RANGE, RGB_RANGE, clamp, opacity_fraction};
