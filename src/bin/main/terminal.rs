use std::io::{self, Write};

use podium_core::{
    annotation::style_annotations_with,
    render::{ColorPair, Screen, SidebarView, THEME_PRESETS, ViewMode, VisualStyle},
    text_policy::preview_compact,
};

use super::commands::HELP;

const CLEAR: &str = "\x1b[2J\x1b[H";
const RESET: &str = "\x1b[0m";
const BOLD_ON: &str = "\x1b[1m";
const NORMAL_INTENSITY: &str = "\x1b[22m";
const ITALIC_ON: &str = "\x1b[3m";
const ITALIC_OFF: &str = "\x1b[23m";
const DIM_ON: &str = "\x1b[2m";
const RULE: &str = "────────────────────────────────────────";

/// Draws [`Screen`]s as ANSI text: 24-bit colors from the style, annotations
/// in italics, sidebar below the segment unless focus mode is on.
pub(super) struct TerminalRenderer<W> {
    out: W,
    clear_screen: bool,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, clear_screen: bool) -> Self {
        Self { out, clear_screen }
    }

    pub fn render(&mut self, screen: Screen<'_>) -> io::Result<()> {
        if self.clear_screen {
            self.out.write_all(CLEAR.as_bytes())?;
        }

        match screen {
            Screen::Empty {
                title,
                message,
                sidebar,
                style,
                mode,
            } => {
                self.paint(style.colors)?;
                writeln!(self.out, "{BOLD_ON}{title}{NORMAL_INTENSITY}")?;
                writeln!(self.out)?;
                writeln!(self.out, "{message}")?;
                self.sidebar(sidebar, style, mode)?;
            }
            Screen::Reading {
                title,
                position,
                text,
                sidebar,
                style,
                mode,
                ..
            } => {
                self.paint(style.colors)?;
                writeln!(self.out, "{BOLD_ON}{title}{NORMAL_INTENSITY}  {position}")?;
                writeln!(self.out)?;
                let styled = style_annotations_with(text, ITALIC_ON, ITALIC_OFF);
                for line in styled.lines() {
                    writeln!(self.out, "{line}")?;
                }
                self.sidebar(sidebar, style, mode)?;
            }
        }

        write!(self.out, "{RESET}")?;
        self.out.flush()
    }

    fn paint(&mut self, colors: ColorPair) -> io::Result<()> {
        let ColorPair {
            background: bg,
            foreground: fg,
        } = colors;
        write!(
            self.out,
            "\x1b[48;2;{};{};{}m\x1b[38;2;{};{};{}m",
            bg.r, bg.g, bg.b, fg.r, fg.g, fg.b
        )
    }

    fn sidebar(
        &mut self,
        sidebar: SidebarView<'_>,
        style: VisualStyle,
        mode: ViewMode,
    ) -> io::Result<()> {
        if mode == ViewMode::Focus {
            return Ok(());
        }

        writeln!(self.out)?;
        writeln!(self.out, "{DIM_ON}{RULE}{NORMAL_INTENSITY}")?;
        if let Some(document) = sidebar.document {
            writeln!(self.out, "File: {document}")?;
        }
        writeln!(self.out, "{}", sidebar.status)?;
        if let Some(time) = sidebar.reading_time {
            writeln!(self.out, "{time}")?;
        }
        writeln!(
            self.out,
            "Speed: {} WPM  Font: {}px  Theme: {}",
            sidebar.wpm, sidebar.font_size_px, style.theme
        )
    }

    /// One line per segment, the current one marked.
    pub fn outline<'a>(
        &mut self,
        segments: impl Iterator<Item = &'a str>,
        cursor: usize,
    ) -> io::Result<()> {
        let mut any = false;
        for (index, segment) in segments.enumerate() {
            any = true;
            let marker = if index == cursor { '>' } else { ' ' };
            writeln!(
                self.out,
                "{marker} {:>3}. {}",
                index + 1,
                preview_compact(segment)
            )?;
        }
        if !any {
            writeln!(self.out, "(no segments)")?;
        }
        self.out.flush()
    }

    pub fn themes(&mut self) -> io::Result<()> {
        for preset in &THEME_PRESETS {
            writeln!(
                self.out,
                "{:<10} {:<14} background {}  text {}",
                preset.id, preset.name, preset.colors.background, preset.colors.foreground
            )?;
        }
        self.out.flush()
    }

    pub fn help(&mut self) -> io::Result<()> {
        writeln!(self.out, "{HELP}")?;
        self.out.flush()
    }

    pub fn status(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.out, "{line}")?;
        self.out.flush()
    }

    pub fn prompt(&mut self) -> io::Result<()> {
        write!(self.out, "> ")?;
        self.out.flush()
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}
