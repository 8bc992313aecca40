//! Loaded documents and the text model built from them.

pub mod segments;
pub mod text_utils;

use alloc::{
    string::{String, ToString},
    vec::Vec,
};
use core::{ops::Range, str::Utf8Error};

use thiserror::Error;

use self::{segments::segment_ranges, text_utils::count_words};

const UTF8_BOM: &str = "\u{feff}";

/// Reasons a document could not be loaded. Existing state is never touched.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum LoadError {
    #[error("'{name}' is not valid UTF-8 text: {source}")]
    Decode { name: String, source: Utf8Error },
}

/// One loaded text, its blank-line segments and its annotation-free word count.
///
/// Segments are byte ranges into the owned text and never change after load;
/// loading a new file builds a new `Document`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Document {
    name: String,
    text: String,
    segments: Vec<Range<usize>>,
    word_count: usize,
}

impl Document {
    /// Decodes `bytes` as UTF-8 (a leading byte-order mark is dropped).
    pub fn from_bytes(name: &str, bytes: &[u8]) -> Result<Self, LoadError> {
        let text = core::str::from_utf8(bytes).map_err(|source| LoadError::Decode {
            name: name.to_string(),
            source,
        })?;
        let text = text.strip_prefix(UTF8_BOM).unwrap_or(text);
        Ok(Self::from_text(name, text.to_string()))
    }

    pub fn from_text(name: &str, text: String) -> Self {
        let segments = segment_ranges(&text);
        let word_count = count_words(&text);
        Self {
            name: name.to_string(),
            text,
            segments,
            word_count,
        }
    }

    /// Source name; the document's identity for reload detection.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    pub fn segment(&self, index: usize) -> Option<&str> {
        self.segments
            .get(index)
            .map(|range| &self.text[range.clone()])
    }

    pub fn segments(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.segments.iter().map(|range| &self.text[range.clone()])
    }

    /// Word count of the whole text, annotations excluded.
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// True when the file had no text at all (not even whitespace).
    pub fn is_blank(&self) -> bool {
        self.text.is_empty()
    }
}
