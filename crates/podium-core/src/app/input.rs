impl<IN> ReaderSession<IN>
where
    IN: InputProvider,
{
    fn process_inputs(&mut self, now_ms: u64) {
        loop {
            match self.input.poll_event() {
                Ok(Some(event)) => self.apply_input_event(event, now_ms),
                Ok(None) => break,
                Err(_) => {
                    warn!("input: provider error at={now_ms}, dropping remaining events");
                    break;
                }
            }
        }
    }

    /// Applies one logical user intent. Callers are expected to have
    /// debounced repeats already.
    pub fn apply_input_event(&mut self, event: InputEvent, now_ms: u64) {
        debug!("input: event={event:?} at={now_ms}");

        match event {
            InputEvent::Previous => self.navigate(Direction::Previous),
            InputEvent::Next => self.navigate(Direction::Next),
            InputEvent::ToggleFocus => self.toggle_focus_mode(),
            InputEvent::FontLarger => {
                let _ = self.adjust_font_size(true);
            }
            InputEvent::FontSmaller => {
                let _ = self.adjust_font_size(false);
            }
            InputEvent::SpeedUp => {
                let _ = self.adjust_wpm(true);
            }
            InputEvent::SpeedDown => {
                let _ = self.adjust_wpm(false);
            }
            InputEvent::NextTheme => {
                let preset = next_preset(self.prefs.style.theme);
                self.apply_preset(preset);
            }
        }
    }

    pub fn input_mut(&mut self) -> &mut IN {
        &mut self.input
    }
}
