//! The preset constants and lookups over them.
//!
//! Hues are written in degrees and stored as a fraction of a turn, the
//! form [`ColorSpec::hsb`] takes.

use icolor_core::ColorSpec;

const fn hsb(degrees: f64, saturation: f64, brightness: f64) -> ColorSpec {
    ColorSpec::hsb(degrees / 360.0, saturation, brightness)
}

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

pub const NEON_RED: ColorSpec = hsb(0.0, 0.65, 1.00);
pub const LIGHT_RED: ColorSpec = hsb(0.0, 0.30, 1.00);
pub const DARK_RED: ColorSpec = hsb(0.0, 0.70, 0.35);

pub const NEON_ORANGE: ColorSpec = hsb(30.0, 0.65, 1.00);
pub const LIGHT_ORANGE: ColorSpec = hsb(30.0, 0.30, 1.00);
pub const DARK_ORANGE: ColorSpec = hsb(30.0, 0.70, 0.35);

pub const NEON_YELLOW: ColorSpec = hsb(60.0, 0.65, 1.00);
pub const LIGHT_YELLOW: ColorSpec = hsb(60.0, 0.30, 1.00);
pub const DARK_YELLOW: ColorSpec = hsb(60.0, 0.70, 0.35);

pub const NEON_GREEN: ColorSpec = hsb(155.0, 0.55, 1.00);
pub const LIGHT_GREEN: ColorSpec = hsb(155.0, 0.30, 1.00);
pub const DARK_GREEN: ColorSpec = hsb(155.0, 0.70, 0.35);

pub const NEON_OCEAN_BLUE: ColorSpec = hsb(190.0, 0.65, 1.00);
pub const LIGHT_OCEAN_BLUE: ColorSpec = hsb(190.0, 0.30, 1.00);
pub const DARK_OCEAN_BLUE: ColorSpec = hsb(190.0, 0.70, 0.35);

pub const NEON_BLUE: ColorSpec = hsb(205.0, 0.65, 1.00);
pub const LIGHT_BLUE: ColorSpec = hsb(205.0, 0.30, 1.00);
pub const DARK_BLUE: ColorSpec = hsb(205.0, 0.70, 0.35);

pub const NEON_PURPLE: ColorSpec = hsb(240.0, 0.65, 1.00);
pub const LIGHT_PURPLE: ColorSpec = hsb(240.0, 0.30, 1.00);
pub const DARK_PURPLE: ColorSpec = hsb(240.0, 0.70, 0.35);

pub const NEON_PINK: ColorSpec = hsb(335.0, 0.65, 1.00);
pub const LIGHT_PINK: ColorSpec = hsb(335.0, 0.30, 1.00);
pub const DARK_PINK: ColorSpec = hsb(335.0, 0.70, 0.35);

pub const LIGHT_GRAY: ColorSpec = hsb(0.0, 0.0, 0.80);
pub const MEDIUM_GRAY: ColorSpec = hsb(0.0, 0.0, 0.60);
pub const DARK_GRAY: ColorSpec = hsb(0.0, 0.0, 0.25);

/// Every preset with its lookup name, in table order.
pub const PRESETS: [(&str, ColorSpec); 27] = [
    ("neonRed", NEON_RED),
    ("lightRed", LIGHT_RED),
    ("darkRed", DARK_RED),
    ("neonOrange", NEON_ORANGE),
    ("lightOrange", LIGHT_ORANGE),
    ("darkOrange", DARK_ORANGE),
    ("neonYellow", NEON_YELLOW),
    ("lightYellow", LIGHT_YELLOW),
    ("darkYellow", DARK_YELLOW),
    ("neonGreen", NEON_GREEN),
    ("lightGreen", LIGHT_GREEN),
    ("darkGreen", DARK_GREEN),
    ("neonOceanBlue", NEON_OCEAN_BLUE),
    ("lightOceanBlue", LIGHT_OCEAN_BLUE),
    ("darkOceanBlue", DARK_OCEAN_BLUE),
    ("neonBlue", NEON_BLUE),
    ("lightBlue", LIGHT_BLUE),
    ("darkBlue", DARK_BLUE),
    ("neonPurple", NEON_PURPLE),
    ("lightPurple", LIGHT_PURPLE),
    ("darkPurple", DARK_PURPLE),
    ("neonPink", NEON_PINK),
    ("lightPink", LIGHT_PINK),
    ("darkPink", DARK_PINK),
    ("lightGray", LIGHT_GRAY),
    ("mediumGray", MEDIUM_GRAY),
    ("darkGray", DARK_GRAY),
];

// ---------------------------------------------------------------------------
// Lookup by name
// ---------------------------------------------------------------------------

/// Look up a preset by its camelCase name (`"neonRed"`, `"darkOceanBlue"`).
///
/// `"mediumgray"` is accepted for `"mediumGray"`. Returns `None` if the
/// name is not recognized.
#[must_use]
pub fn preset(name: &str) -> Option<ColorSpec> {
    let name = if name == "mediumgray" { "mediumGray" } else { name };
    PRESETS
        .iter()
        .find(|(preset_name, _)| *preset_name == name)
        .map(|&(_, color)| color)
}

const NAMES: [&str; PRESETS.len()] = {
    let mut names = [""; PRESETS.len()];
    let mut i = 0;
    while i < PRESETS.len() {
        names[i] = PRESETS[i].0;
        i += 1;
    }
    names
};

/// List all preset names, in table order.
#[must_use]
pub const fn preset_names() -> &'static [&'static str] {
    &NAMES
}

// ---------------------------------------------------------------------------
// Family × tone grid
// ---------------------------------------------------------------------------

/// The eight hue families of the chromatic presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    Red,
    Orange,
    Yellow,
    Green,
    OceanBlue,
    Blue,
    Purple,
    Pink,
}

impl Family {
    pub const ALL: [Self; 8] = [
        Self::Red,
        Self::Orange,
        Self::Yellow,
        Self::Green,
        Self::OceanBlue,
        Self::Blue,
        Self::Purple,
        Self::Pink,
    ];

    /// The family's hue in degrees.
    #[must_use]
    pub const fn hue_degrees(self) -> f64 {
        match self {
            Self::Red => 0.0,
            Self::Orange => 30.0,
            Self::Yellow => 60.0,
            Self::Green => 155.0,
            Self::OceanBlue => 190.0,
            Self::Blue => 205.0,
            Self::Purple => 240.0,
            Self::Pink => 335.0,
        }
    }
}

/// Saturation/brightness variant of a family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    /// Vivid and bright.
    Neon,
    /// Pastel.
    Light,
    /// Deep and dim.
    Dark,
}

impl Tone {
    pub const ALL: [Self; 3] = [Self::Neon, Self::Light, Self::Dark];
}

/// The three achromatic presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shade {
    Light,
    Medium,
    Dark,
}

/// The preset for a family in a tone.
#[must_use]
pub const fn swatch(family: Family, tone: Tone) -> ColorSpec {
    match (family, tone) {
        (Family::Red, Tone::Neon) => NEON_RED,
        (Family::Red, Tone::Light) => LIGHT_RED,
        (Family::Red, Tone::Dark) => DARK_RED,
        (Family::Orange, Tone::Neon) => NEON_ORANGE,
        (Family::Orange, Tone::Light) => LIGHT_ORANGE,
        (Family::Orange, Tone::Dark) => DARK_ORANGE,
        (Family::Yellow, Tone::Neon) => NEON_YELLOW,
        (Family::Yellow, Tone::Light) => LIGHT_YELLOW,
        (Family::Yellow, Tone::Dark) => DARK_YELLOW,
        (Family::Green, Tone::Neon) => NEON_GREEN,
        (Family::Green, Tone::Light) => LIGHT_GREEN,
        (Family::Green, Tone::Dark) => DARK_GREEN,
        (Family::OceanBlue, Tone::Neon) => NEON_OCEAN_BLUE,
        (Family::OceanBlue, Tone::Light) => LIGHT_OCEAN_BLUE,
        (Family::OceanBlue, Tone::Dark) => DARK_OCEAN_BLUE,
        (Family::Blue, Tone::Neon) => NEON_BLUE,
        (Family::Blue, Tone::Light) => LIGHT_BLUE,
        (Family::Blue, Tone::Dark) => DARK_BLUE,
        (Family::Purple, Tone::Neon) => NEON_PURPLE,
        (Family::Purple, Tone::Light) => LIGHT_PURPLE,
        (Family::Purple, Tone::Dark) => DARK_PURPLE,
        (Family::Pink, Tone::Neon) => NEON_PINK,
        (Family::Pink, Tone::Light) => LIGHT_PINK,
        (Family::Pink, Tone::Dark) => DARK_PINK,
    }
}

/// The gray preset for a shade.
#[must_use]
pub const fn gray(shade: Shade) -> ColorSpec {
    match shade {
        Shade::Light => LIGHT_GRAY,
        Shade::Medium => MEDIUM_GRAY,
        Shade::Dark => DARK_GRAY,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use icolor_core::Hsb;
    use pretty_assertions::assert_eq;

    fn triple(color: ColorSpec) -> (f64, f64, f64) {
        let Hsb { hue, saturation, brightness, .. } =
            color.as_hsb().expect("presets are stored as HSB");
        (hue, saturation, brightness)
    }

    #[test]
    fn all_names_resolve() {
        for name in preset_names() {
            assert!(preset(name).is_some(), "Preset '{name}' did not resolve");
        }
    }

    #[test]
    fn unknown_returns_none() {
        assert!(preset("nonexistent").is_none());
        assert!(preset("NeonRed").is_none());
    }

    #[test]
    fn legacy_mediumgray_alias() {
        assert_eq!(preset("mediumgray"), Some(MEDIUM_GRAY));
        assert_eq!(preset("mediumGray"), Some(MEDIUM_GRAY));
    }

    #[test]
    fn triples_match_literals() {
        // (name, hue in degrees, saturation, brightness)
        let expected: [(&str, f64, f64, f64); 27] = [
            ("neonRed", 0.0, 0.65, 1.00),
            ("lightRed", 0.0, 0.30, 1.00),
            ("darkRed", 0.0, 0.70, 0.35),
            ("neonOrange", 30.0, 0.65, 1.00),
            ("lightOrange", 30.0, 0.30, 1.00),
            ("darkOrange", 30.0, 0.70, 0.35),
            ("neonYellow", 60.0, 0.65, 1.00),
            ("lightYellow", 60.0, 0.30, 1.00),
            ("darkYellow", 60.0, 0.70, 0.35),
            ("neonGreen", 155.0, 0.55, 1.00),
            ("lightGreen", 155.0, 0.30, 1.00),
            ("darkGreen", 155.0, 0.70, 0.35),
            ("neonOceanBlue", 190.0, 0.65, 1.00),
            ("lightOceanBlue", 190.0, 0.30, 1.00),
            ("darkOceanBlue", 190.0, 0.70, 0.35),
            ("neonBlue", 205.0, 0.65, 1.00),
            ("lightBlue", 205.0, 0.30, 1.00),
            ("darkBlue", 205.0, 0.70, 0.35),
            ("neonPurple", 240.0, 0.65, 1.00),
            ("lightPurple", 240.0, 0.30, 1.00),
            ("darkPurple", 240.0, 0.70, 0.35),
            ("neonPink", 335.0, 0.65, 1.00),
            ("lightPink", 335.0, 0.30, 1.00),
            ("darkPink", 335.0, 0.70, 0.35),
            ("lightGray", 0.0, 0.0, 0.80),
            ("mediumGray", 0.0, 0.0, 0.60),
            ("darkGray", 0.0, 0.0, 0.25),
        ];

        assert_eq!(expected.len(), PRESETS.len());
        for ((name, degrees, saturation, brightness), (preset_name, color)) in
            expected.into_iter().zip(PRESETS)
        {
            assert_eq!(name, preset_name);
            assert_eq!(
                triple(color),
                (degrees / 360.0, saturation, brightness),
                "{name} does not match its literal"
            );
        }
    }

    #[test]
    fn presets_are_opaque() {
        for (name, color) in PRESETS {
            assert_eq!(color.opacity(), 1.0, "{name} is not opaque");
        }
    }

    #[test]
    fn grid_covers_every_chromatic_preset() {
        for family in Family::ALL {
            for tone in Tone::ALL {
                let color = swatch(family, tone);
                let (hue, saturation, brightness) = triple(color);
                assert_eq!(hue, family.hue_degrees() / 360.0);
                match tone {
                    Tone::Neon if family == Family::Green => {
                        assert_eq!((saturation, brightness), (0.55, 1.00));
                    }
                    Tone::Neon => assert_eq!((saturation, brightness), (0.65, 1.00)),
                    Tone::Light => assert_eq!((saturation, brightness), (0.30, 1.00)),
                    Tone::Dark => assert_eq!((saturation, brightness), (0.70, 0.35)),
                }
            }
        }
    }

    #[test]
    fn grid_and_names_agree() {
        assert_eq!(preset("neonOceanBlue"), Some(swatch(Family::OceanBlue, Tone::Neon)));
        assert_eq!(preset("lightPink"), Some(swatch(Family::Pink, Tone::Light)));
        assert_eq!(preset("darkGray"), Some(gray(Shade::Dark)));
    }

    #[test]
    fn grays_render_as_gray() {
        assert_eq!(gray(Shade::Light).to_hex(), "#CCCCCC");
        assert_eq!(gray(Shade::Medium).to_hex(), "#999999");
        assert_eq!(gray(Shade::Dark).to_hex(), "#404040");
    }

    #[test]
    fn neon_red_renders() {
        // s 0.65 at full brightness: (1.0, 0.35, 0.35)
        assert_eq!(NEON_RED.to_rgba8(), [255, 89, 89, 255]);
    }

    #[test]
    fn each_preset_is_distinct() {
        for (i, (a_name, a)) in PRESETS.iter().enumerate() {
            for (b_name, b) in &PRESETS[i + 1..] {
                assert_ne!(a, b, "{a_name} == {b_name}");
            }
        }
    }
}
