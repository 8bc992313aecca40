use std::path::PathBuf;

use clap::Parser;
use podium_core::{app::ReaderConfig, render::Rgb};

/// Distraction-free reader for spoken scripts with `[stage directions]`.
#[derive(Debug, Parser)]
#[command(name = "podium", version)]
pub(super) struct Cli {
    /// Text or markdown file to read.
    #[arg(required_unless_present = "list_themes")]
    pub file: Option<PathBuf>,

    /// Reading speed in words per minute (10-500).
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub wpm: Option<i64>,

    /// Font size in pixels (10-60).
    #[arg(long, value_name = "PX", allow_negative_numbers = true)]
    pub font_size: Option<i64>,

    /// Theme preset id or name, e.g. `sepia` or "High contrast".
    #[arg(long, value_name = "NAME")]
    pub theme: Option<String>,

    /// Custom background color, `#RRGGBB`.
    #[arg(long, value_name = "HEX", requires = "fg")]
    pub bg: Option<Rgb>,

    /// Custom text color, `#RRGGBB`.
    #[arg(long, value_name = "HEX", requires = "bg")]
    pub fg: Option<Rgb>,

    /// Start in focus mode.
    #[arg(long)]
    pub focus: bool,

    /// Print the word count and reading time, then exit.
    #[arg(long)]
    pub summary: bool,

    /// Print the available theme presets, then exit.
    #[arg(long)]
    pub list_themes: bool,
}

impl Cli {
    /// Initial session config. Out-of-range values are clamped by the session.
    pub fn reader_config(&self) -> ReaderConfig {
        let defaults = ReaderConfig::default();
        ReaderConfig {
            wpm: self.wpm.map_or(defaults.wpm, saturate_u16),
            font_size_px: self.font_size.map_or(defaults.font_size_px, saturate_u16),
            ..defaults
        }
    }

    pub fn custom_colors(&self) -> Option<(Rgb, Rgb)> {
        self.bg.zip(self.fg)
    }
}

fn saturate_u16(value: i64) -> u16 {
    value.clamp(0, i64::from(u16::MAX)) as u16
}
