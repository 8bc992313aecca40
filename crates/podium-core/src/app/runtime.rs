impl<IN> ReaderSession<IN>
where
    IN: InputProvider,
{
    pub fn new(input: IN, mut config: ReaderConfig, app_title: &'static str) -> Self {
        config.wpm = clamp_wpm(i64::from(config.wpm));
        config.font_size_px = clamp_font_size(i64::from(config.font_size_px));
        config.wpm_step = config.wpm_step.max(1);
        config.font_step_px = config.font_step_px.max(1);

        let style = VisualStyle {
            font_size_px: config.font_size_px,
            ..VisualStyle::default()
        };

        Self {
            input,
            config,
            app_title,
            document: None,
            cursor: 0,
            mode: ViewMode::Normal,
            prefs: ReadingPreferences::new(config.wpm, style),
            pending_redraw: true,
        }
    }

    /// Drains pending input, then reports whether the screen must be rebuilt.
    pub fn tick(&mut self, now_ms: u64) -> TickResult {
        self.process_inputs(now_ms);

        if self.pending_redraw {
            self.pending_redraw = false;
            TickResult::RenderRequested
        } else {
            TickResult::NoRender
        }
    }

    pub fn request_redraw(&mut self) {
        self.pending_redraw = true;
    }

    pub fn config(&self) -> ReaderConfig {
        self.config
    }

    pub fn preferences(&self) -> ReadingPreferences {
        self.prefs
    }

    pub fn style(&self) -> VisualStyle {
        self.prefs.style
    }

    pub fn view_mode(&self) -> ViewMode {
        self.mode
    }

    pub fn set_focus_mode(&mut self, focus: bool) {
        let mode = if focus {
            ViewMode::Focus
        } else {
            ViewMode::Normal
        };
        debug!("ui-view: mode {:?} -> {:?}", self.mode, mode);
        self.mode = mode;
        self.pending_redraw = true;
    }

    pub fn toggle_focus_mode(&mut self) {
        self.set_focus_mode(self.mode == ViewMode::Normal);
    }

    /// Sets the font size, clamped to the allowed range. Returns the size applied.
    pub fn set_font_size(&mut self, px: i64) -> u16 {
        let applied = clamp_font_size(px);
        if i64::from(applied) != px {
            warn!("prefs: font size {px}px out of range, using {applied}px");
        }
        if applied != self.prefs.style.font_size_px {
            self.prefs.style.font_size_px = applied;
            self.pending_redraw = true;
        }
        applied
    }

    /// Sets the reading speed, clamped to the allowed range. Returns the WPM applied.
    pub fn set_reading_speed(&mut self, wpm: i64) -> u16 {
        let applied = clamp_wpm(wpm);
        if i64::from(applied) != wpm {
            warn!("prefs: reading speed {wpm} wpm out of range, using {applied}");
        }
        if applied != self.prefs.wpm {
            self.prefs.wpm = applied;
            self.pending_redraw = true;
        }
        applied
    }

    /// Selects a preset by id or display name. Unknown names fall back to the
    /// default preset. Returns the preset now in effect.
    pub fn select_theme_preset(&mut self, name: &str) -> &'static ThemePreset {
        let preset = match find_preset(name) {
            Some(preset) => preset,
            None => {
                let fallback = default_preset();
                warn!(
                    "prefs: unknown theme preset {name:?}, falling back to {:?}",
                    fallback.id
                );
                fallback
            }
        };
        self.apply_preset(preset);
        preset
    }

    /// Overrides the colors; the selected preset id stays as it was.
    pub fn set_custom_colors(&mut self, background: Rgb, foreground: Rgb) {
        debug!(
            "prefs: custom colors bg={background} fg={foreground} preset={}",
            self.prefs.style.theme
        );
        self.prefs.style.colors = ColorPair {
            background,
            foreground,
        };
        self.pending_redraw = true;
    }

    fn apply_preset(&mut self, preset: &'static ThemePreset) {
        debug!("prefs: theme {} -> {}", self.prefs.style.theme, preset.id);
        self.prefs.style.theme = preset.id;
        self.prefs.style.colors = preset.colors;
        self.pending_redraw = true;
    }

    fn adjust_wpm(&mut self, increase: bool) -> bool {
        let current = i64::from(self.prefs.wpm);
        let step = i64::from(self.config.wpm_step);
        let requested = if increase {
            current + step
        } else {
            current - step
        };
        let next = clamp_wpm(requested);

        if next != self.prefs.wpm {
            self.prefs.wpm = next;
            self.pending_redraw = true;
            true
        } else {
            false
        }
    }

    fn adjust_font_size(&mut self, increase: bool) -> bool {
        let current = i64::from(self.prefs.style.font_size_px);
        let step = i64::from(self.config.font_step_px);
        let requested = if increase {
            current + step
        } else {
            current - step
        };
        let next = clamp_font_size(requested);

        if next != self.prefs.style.font_size_px {
            self.prefs.style.font_size_px = next;
            self.pending_redraw = true;
            true
        } else {
            false
        }
    }
}
