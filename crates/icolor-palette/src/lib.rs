//! # icolor-palette — named preset colors
//!
//! Twenty-seven ready-made colors: eight hue families in three tones plus
//! three grays. Every preset is an HSB triple stored as a `const`, so
//! they cost nothing until a host converts one.
//!
//! ```text
//!             Neon           Light          Dark
//!             s 0.65 b 1.0   s 0.30 b 1.0   s 0.70 b 0.35
//! Red     0°  NEON_RED       LIGHT_RED      DARK_RED
//! ...
//! Pink  335°  NEON_PINK      LIGHT_PINK     DARK_PINK
//! Gray        LIGHT_GRAY (0.80) · MEDIUM_GRAY (0.60) · DARK_GRAY (0.25)
//! ```
//!
//! Green's neon tone is the exception at saturation 0.55.
//!
//! [`Palette`] starts from these presets and lets applications add their
//! own named colors from a TOML table.

pub mod config;
pub mod presets;

pub use config::{Palette, PaletteError};
pub use presets::{Family, Shade, Tone, gray, preset, preset_names, swatch};
