//! Session reading preferences and their bounds.

use crate::render::VisualStyle;

pub const MIN_FONT_SIZE_PX: u16 = 10;
pub const MAX_FONT_SIZE_PX: u16 = 60;
pub const DEFAULT_FONT_SIZE_PX: u16 = 20;

pub const MIN_WPM: u16 = 10;
pub const MAX_WPM: u16 = 500;
pub const DEFAULT_WPM: u16 = 150;

/// User-tunable settings for the current session. They survive document
/// reloads and are never written to disk.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ReadingPreferences {
    pub wpm: u16,
    pub style: VisualStyle,
}

impl ReadingPreferences {
    pub const fn new(wpm: u16, style: VisualStyle) -> Self {
        Self { wpm, style }
    }
}

impl Default for ReadingPreferences {
    fn default() -> Self {
        Self::new(DEFAULT_WPM, VisualStyle::default())
    }
}

/// Clamps a requested font size into `[MIN_FONT_SIZE_PX, MAX_FONT_SIZE_PX]`.
pub fn clamp_font_size(px: i64) -> u16 {
    px.clamp(i64::from(MIN_FONT_SIZE_PX), i64::from(MAX_FONT_SIZE_PX)) as u16
}

/// Clamps a requested reading speed into `[MIN_WPM, MAX_WPM]`.
pub fn clamp_wpm(wpm: i64) -> u16 {
    wpm.clamp(i64::from(MIN_WPM), i64::from(MAX_WPM)) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let prefs = ReadingPreferences::default();
        assert_eq!(prefs.wpm, 150);
        assert_eq!(prefs.style.font_size_px, 20);
        assert_eq!(prefs.style.theme, "light");
    }

    #[test]
    fn bounds() {
        assert_eq!(clamp_font_size(4), 10);
        assert_eq!(clamp_font_size(33), 33);
        assert_eq!(clamp_font_size(600), 60);
        assert_eq!(clamp_wpm(-20), 10);
        assert_eq!(clamp_wpm(0), 10);
        assert_eq!(clamp_wpm(180), 180);
        assert_eq!(clamp_wpm(9_000), 500);
    }
}
