//! Reading session state machine: loaded document, segment cursor, view mode
//! and reading preferences.

use alloc::string::String;

use log::{debug, info, warn};

use crate::{
    annotation::style_annotations,
    content::{Document, LoadError},
    estimate::{ReadingTime, estimate},
    input::{InputEvent, InputProvider},
    render::{
        ColorPair, Rgb, Screen, SidebarView, ThemePreset, ViewMode, VisualStyle, default_preset,
        find_preset, next_preset,
    },
    settings::{
        DEFAULT_FONT_SIZE_PX, DEFAULT_WPM, ReadingPreferences, clamp_font_size, clamp_wpm,
    },
    text_policy::{
        EMPTY_FILE_HINT, NO_FILE_HINT, NO_SEGMENTS_MESSAGE, reading_time_line,
        segment_position_label, word_total_label,
    },
};

const WPM_STEP: u16 = 10;
const FONT_STEP_PX: u16 = 1;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TickResult {
    NoRender,
    RenderRequested,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Direction {
    Previous,
    Next,
}

/// Successful result of [`ReaderSession::load_document`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LoadOutcome {
    /// A new document replaced the previous one; the cursor is back at 0.
    Loaded { segment_count: usize },
    /// Same source name as the loaded document; nothing changed.
    Unchanged { segment_count: usize },
}

impl LoadOutcome {
    pub const fn segment_count(self) -> usize {
        match self {
            Self::Loaded { segment_count } | Self::Unchanged { segment_count } => segment_count,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ReaderConfig {
    pub wpm: u16,
    pub font_size_px: u16,
    /// Change applied by one speed up/down input.
    pub wpm_step: u16,
    /// Change applied by one font larger/smaller input.
    pub font_step_px: u16,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            wpm: DEFAULT_WPM,
            font_size_px: DEFAULT_FONT_SIZE_PX,
            wpm_step: WPM_STEP,
            font_step_px: FONT_STEP_PX,
        }
    }
}

/// One user's reading session. Owns everything the renderer reads; all
/// transitions are synchronous and total.
pub struct ReaderSession<IN>
where
    IN: InputProvider,
{
    input: IN,
    config: ReaderConfig,
    app_title: &'static str,
    document: Option<Document>,
    cursor: usize,
    mode: ViewMode,
    prefs: ReadingPreferences,
    pending_redraw: bool,
}

include!("runtime.rs");
include!("input.rs");
include!("navigation.rs");
include!("view.rs");
