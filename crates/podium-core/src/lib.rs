#![cfg_attr(not(test), no_std)]

//! Annotation-aware reading engine for spoken scripts.
//!
//! The crate owns the text model (segments, annotations, word counts), the
//! reading-time estimate and the session state machine. Presentation lives in
//! the host binary, which feeds input events in and renders [`render::Screen`]s
//! out.

extern crate alloc;

pub mod annotation;
pub mod app;
pub mod content;
pub mod estimate;
pub mod input;
pub mod render;
pub mod settings;
pub mod text_policy;
