impl<IN> ReaderSession<IN>
where
    IN: InputProvider,
{
    /// Builds the current view model from scratch and hands it to `f`.
    pub fn with_screen<F>(&self, f: F)
    where
        F: FnOnce(Screen<'_>),
    {
        let style = self.prefs.style;
        let time_line = reading_time_line(self.reading_time());
        let words_line;

        let (status, time) = match self.document.as_ref() {
            None => (NO_FILE_HINT, None),
            Some(document) if document.is_blank() => (EMPTY_FILE_HINT, None),
            Some(document) => {
                words_line = word_total_label(document.word_count());
                (words_line.as_str(), Some(time_line.as_str()))
            }
        };

        let sidebar = SidebarView {
            document: self.document.as_ref().map(Document::name),
            status,
            reading_time: time,
            wpm: self.prefs.wpm,
            font_size_px: style.font_size_px,
        };
        let title = self
            .document
            .as_ref()
            .map_or(self.app_title, Document::name);

        let Some(text) = self.current_segment() else {
            f(Screen::Empty {
                title,
                message: NO_SEGMENTS_MESSAGE,
                sidebar,
                style,
                mode: self.mode,
            });
            return;
        };

        let total = self.segment_count();
        let position = segment_position_label(self.cursor, total);
        f(Screen::Reading {
            title,
            position: position.as_str(),
            index: self.cursor,
            total,
            text,
            sidebar,
            style,
            mode: self.mode,
        });
    }
}
