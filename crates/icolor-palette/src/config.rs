//! Application palettes: the presets plus user-defined colors from TOML.
//!
//! ```toml
//! [palette]
//! brand = "#18B5DF"
//! accent = { hue = 200.0, saturation = 0.6, brightness = 0.9 }
//! shadow = { hex = "#000000", opacity = 40 }
//! ```
//!
//! Hue is in degrees and opacity is a 0–100 percentage, matching the
//! integer constructors. A `nan` or `inf` hue is read as 0°. Entries
//! replace presets of the same name.

use std::collections::{BTreeMap, HashMap};

use icolor_core::{ColorError, ColorSpec, clamp_unit, opacity_fraction, wrap_hue};
use serde::Deserialize;
use thiserror::Error;

use crate::presets::PRESETS;

/// Errors from loading a palette file.
#[derive(Debug, Error)]
pub enum PaletteError {
    #[error("invalid palette file: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("palette entry `{name}`: {source}")]
    Color {
        name: String,
        #[source]
        source: ColorError,
    },
}

// ---------------------------------------------------------------------------
// File format
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct PaletteFile {
    #[serde(default)]
    palette: BTreeMap<String, Entry>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Entry {
    Hex(String),
    HexWithOpacity {
        hex: String,
        #[serde(default = "opaque")]
        opacity: i32,
    },
    Hsb {
        hue: f64,
        saturation: f64,
        brightness: f64,
        #[serde(default = "opaque")]
        opacity: i32,
    },
}

const fn opaque() -> i32 {
    100
}

impl Entry {
    fn into_color(self, name: &str) -> Result<ColorSpec, PaletteError> {
        let parse = |hex: &str| {
            hex.parse::<ColorSpec>().map_err(|source| PaletteError::Color {
                name: name.to_owned(),
                source,
            })
        };

        Ok(match self {
            Self::Hex(hex) => parse(&hex)?,
            Self::HexWithOpacity { hex, opacity } => {
                parse(&hex)?.with_opacity(opacity_fraction(opacity))
            }
            Self::Hsb {
                hue,
                saturation,
                brightness,
                opacity,
            } => ColorSpec::hsb(
                wrap_hue(hue / 360.0),
                clamp_unit(saturation),
                clamp_unit(brightness),
            )
            .with_opacity(opacity_fraction(opacity)),
        })
    }
}

// ---------------------------------------------------------------------------
// Palette
// ---------------------------------------------------------------------------

/// A set of named colors.
///
/// The default palette holds every preset under its camelCase name.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    colors: HashMap<String, ColorSpec>,
}

impl Default for Palette {
    fn default() -> Self {
        let colors = PRESETS
            .iter()
            .map(|&(name, color)| (name.to_owned(), color))
            .collect();
        Self { colors }
    }
}

impl Palette {
    /// A palette with no colors at all, not even the presets.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            colors: HashMap::new(),
        }
    }

    /// The presets extended with the `[palette]` table of a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::Toml`] for syntax or shape errors and
    /// [`PaletteError::Color`] for an entry with a malformed hex string.
    pub fn from_toml(source: &str) -> Result<Self, PaletteError> {
        let mut palette = Self::default();
        palette.extend_from_toml(source)?;
        Ok(palette)
    }

    /// Add the `[palette]` table of a TOML document to this palette.
    ///
    /// Nothing is added unless every entry is valid.
    ///
    /// # Errors
    ///
    /// See [`Palette::from_toml`].
    pub fn extend_from_toml(&mut self, source: &str) -> Result<(), PaletteError> {
        let file: PaletteFile = toml::from_str(source)?;

        let entries = file
            .palette
            .into_iter()
            .map(|(name, entry)| {
                let color = entry.into_color(&name)?;
                Ok((name, color))
            })
            .collect::<Result<Vec<_>, PaletteError>>()?;

        for (name, color) in entries {
            self.insert(name, color);
        }
        Ok(())
    }

    /// Add or replace a named color, returning the previous one.
    pub fn insert(&mut self, name: impl Into<String>, color: ColorSpec) -> Option<ColorSpec> {
        let name = name.into();
        let previous = self.colors.insert(name.clone(), color);
        if previous.is_some() {
            log::debug!("palette entry `{name}` replaces an existing color");
        }
        previous
    }

    /// Look up a color by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<ColorSpec> {
        self.colors.get(name).copied()
    }

    /// All names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.colors.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
