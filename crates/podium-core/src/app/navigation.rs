impl<IN> ReaderSession<IN>
where
    IN: InputProvider,
{
    /// Decodes and installs a document. The source name is its identity: the
    /// name already loaded is a no-op, and a failed decode leaves the current
    /// document, cursor and preferences untouched.
    pub fn load_document(&mut self, name: &str, bytes: &[u8]) -> Result<LoadOutcome, LoadError> {
        if let Some(current) = self.document.as_ref() {
            if current.name() == name {
                debug!(
                    "doc: reload ignored name={name:?} cursor={}/{}",
                    self.cursor.saturating_add(1),
                    current.segment_count()
                );
                return Ok(LoadOutcome::Unchanged {
                    segment_count: current.segment_count(),
                });
            }
        }

        let document = Document::from_bytes(name, bytes).inspect_err(|err| {
            warn!("doc: load failed name={name:?} bytes={} error={err}", bytes.len());
        })?;

        let segment_count = document.segment_count();
        info!(
            "doc: loaded name={name:?} segments={segment_count} words={}",
            document.word_count()
        );
        self.document = Some(document);
        self.cursor = 0;
        self.pending_redraw = true;

        Ok(LoadOutcome::Loaded { segment_count })
    }

    pub fn document(&self) -> Option<&Document> {
        self.document.as_ref()
    }

    pub fn segment_count(&self) -> usize {
        self.document.as_ref().map_or(0, Document::segment_count)
    }

    /// Current position, always in `0..max(1, segment_count)`.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn segment(&self, index: usize) -> Option<&str> {
        self.document.as_ref()?.segment(index)
    }

    /// Segment text with annotations wrapped in the emphasis marker.
    pub fn styled_segment(&self, index: usize) -> Option<String> {
        self.segment(index).map(style_annotations)
    }

    pub fn current_segment(&self) -> Option<&str> {
        self.segment(self.cursor)
    }

    pub fn segments(&self) -> impl Iterator<Item = &str> + '_ {
        self.document.iter().flat_map(Document::segments)
    }

    /// Annotation-free word count of the whole document, 0 when none is loaded.
    pub fn word_count(&self) -> usize {
        self.document.as_ref().map_or(0, Document::word_count)
    }

    pub fn estimated_reading_time(&self, wpm: i32) -> ReadingTime {
        estimate(self.word_count(), wpm)
    }

    /// Estimate at the session's own reading speed.
    pub fn reading_time(&self) -> ReadingTime {
        self.estimated_reading_time(i32::from(self.prefs.wpm))
    }

    pub fn navigate(&mut self, direction: Direction) {
        let _ = match direction {
            Direction::Previous => self.previous(),
            Direction::Next => self.next(),
        };
    }

    /// Steps back one segment. Returns `false` (and changes nothing) at the start.
    pub fn previous(&mut self) -> bool {
        if self.cursor == 0 {
            debug!("ui-nav: previous ignored cursor=1/{}", self.segment_count());
            return false;
        }

        self.cursor -= 1;
        debug!(
            "ui-nav: previous cursor={}/{}",
            self.cursor.saturating_add(1),
            self.segment_count()
        );
        self.pending_redraw = true;
        true
    }

    /// Steps forward one segment. Returns `false` (and changes nothing) at the end.
    pub fn next(&mut self) -> bool {
        let total = self.segment_count();
        if self.cursor.saturating_add(1) >= total {
            debug!(
                "ui-nav: next ignored cursor={}/{}",
                self.cursor.saturating_add(1),
                total
            );
            return false;
        }

        self.cursor += 1;
        debug!("ui-nav: next cursor={}/{}", self.cursor.saturating_add(1), total);
        self.pending_redraw = true;
        true
    }
}
