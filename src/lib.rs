// SPDX-License-Identifier: MIT
//
// icolor — preset colors and hex/RGB constructors for GUI color types.
//
// This is the crate applications depend on. It re-exports the pieces:
//
//   icolor-core    → ColorSpec, hex and RGB constructors, ColorAdapter
//   icolor-palette → the 27 named presets and TOML-extensible palettes
//
// A host toolkit implements ColorAdapter for its own color type once:
//
//   let brand: MyColor = ColorSpec::from_hex("#18B5DF")?.into_native();
//   let warn:  MyColor = presets::NEON_ORANGE.into_native();

pub use icolor_core::{
    ColorAdapter, ColorError, ColorSpec, Hsb, OPACITY_RANGE, RGB_RANGE, Rgb, clamp, parse_hex,
};
pub use icolor_palette::{
    Family, Palette, PaletteError, Shade, Tone, gray, preset, preset_names, presets, swatch,
};
