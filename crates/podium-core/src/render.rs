//! View models, colors and theme presets handed to the presentation layer.

use core::{fmt, str::FromStr};

use thiserror::Error;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum ColorParseError {
    #[error("expected 6 hex digits, found {0}")]
    Length(usize),
    #[error("invalid hex digit {0:?}")]
    Digit(char),
}

/// Parses `#RRGGBB` or `RRGGBB`, case-insensitive.
impl FromStr for Rgb {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.trim();
        let digits = digits.strip_prefix('#').unwrap_or(digits);

        let mut value = 0u32;
        let mut count = 0usize;
        for ch in digits.chars() {
            let nibble = ch.to_digit(16).ok_or(ColorParseError::Digit(ch))?;
            value = (value << 4) | nibble;
            count += 1;
            if count > 6 {
                return Err(ColorParseError::Length(digits.chars().count()));
            }
        }
        if count != 6 {
            return Err(ColorParseError::Length(count));
        }

        Ok(Self::new((value >> 16) as u8, (value >> 8) as u8, value as u8))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ColorPair {
    pub background: Rgb,
    pub foreground: Rgb,
}

/// A named background/foreground pair for the reading area.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ThemePreset {
    pub id: &'static str,
    pub name: &'static str,
    pub colors: ColorPair,
}

/// Fixed preset registry. The first entry is the default and the fallback.
pub const THEME_PRESETS: [ThemePreset; 4] = [
    ThemePreset {
        id: "light",
        name: "Light",
        colors: ColorPair {
            background: Rgb::new(0xF9, 0xF9, 0xF9),
            foreground: Rgb::new(0x26, 0x27, 0x30),
        },
    },
    ThemePreset {
        id: "sepia",
        name: "Sepia",
        colors: ColorPair {
            background: Rgb::new(0xF4, 0xEC, 0xD8),
            foreground: Rgb::new(0x5B, 0x46, 0x36),
        },
    },
    ThemePreset {
        id: "dark",
        name: "Dark",
        colors: ColorPair {
            background: Rgb::new(0x1E, 0x1E, 0x1E),
            foreground: Rgb::new(0xDC, 0xDC, 0xDC),
        },
    },
    ThemePreset {
        id: "contrast",
        name: "High contrast",
        colors: ColorPair {
            background: Rgb::new(0x00, 0x00, 0x00),
            foreground: Rgb::new(0xFF, 0xFF, 0x00),
        },
    },
];

pub const fn default_preset() -> &'static ThemePreset {
    &THEME_PRESETS[0]
}

/// Looks a preset up by id or display name, ignoring ASCII case.
pub fn find_preset(name: &str) -> Option<&'static ThemePreset> {
    let name = name.trim();
    THEME_PRESETS.iter().find(|preset| {
        preset.id.eq_ignore_ascii_case(name) || preset.name.eq_ignore_ascii_case(name)
    })
}

/// Preset after `id` in registry order, wrapping around.
pub fn next_preset(id: &str) -> &'static ThemePreset {
    let current = THEME_PRESETS
        .iter()
        .position(|preset| preset.id == id)
        .unwrap_or(THEME_PRESETS.len() - 1);
    &THEME_PRESETS[(current + 1) % THEME_PRESETS.len()]
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ViewMode {
    #[default]
    Normal,
    /// Only the current segment; auxiliary panels are hidden.
    Focus,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct VisualStyle {
    pub font_size_px: u16,
    pub colors: ColorPair,
    /// Id of the selected preset. Custom colors keep the last selected id.
    pub theme: &'static str,
}

impl Default for VisualStyle {
    fn default() -> Self {
        let preset = default_preset();
        Self {
            font_size_px: crate::settings::DEFAULT_FONT_SIZE_PX,
            colors: preset.colors,
            theme: preset.id,
        }
    }
}

/// Word count and estimate panel shown next to the text outside focus mode.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SidebarView<'a> {
    pub document: Option<&'a str>,
    /// Word total, or a hint when there is nothing to count.
    pub status: &'a str,
    pub reading_time: Option<&'a str>,
    pub wpm: u16,
    pub font_size_px: u16,
}

/// App-level view model consumed by the renderer.
pub enum Screen<'a> {
    Empty {
        title: &'a str,
        message: &'a str,
        sidebar: SidebarView<'a>,
        style: VisualStyle,
        mode: ViewMode,
    },
    Reading {
        title: &'a str,
        /// `"Segment 2 of 7"`.
        position: &'a str,
        index: usize,
        total: usize,
        /// Raw segment text; annotations are styled by the renderer.
        text: &'a str,
        sidebar: SidebarView<'a>,
        style: VisualStyle,
        mode: ViewMode,
    },
}
