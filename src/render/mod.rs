//! Deck rendering abstractions.
//!
//! This module provides the seam between the assembler and concrete output
//! formats. Different implementations can render decks to various formats
//! (structured JSON today, a real slide format later).

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::structure::Slide;
use crate::template::Template;

pub mod json;

pub use json::JsonDeckRenderer;

/// Everything a renderer needs to produce an output file.
///
/// Borrowed from the stored record; renderers never mutate deck state.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderableDeck<'a> {
    /// Deck title.
    pub title: &'a str,
    /// Structured slides in render order.
    pub slides: &'a [Slide],
    /// Effective template, customizations already applied.
    pub effective_template: &'a Template,
}

/// Trait for deck rendering.
pub trait DeckRenderer {
    /// The error type for this renderer.
    type Error: std::error::Error;

    /// Render the deck to `output`.
    ///
    /// Returns the path actually written. Any failure propagates to the
    /// caller unchanged; the assembler does not retry.
    fn render(&self, deck: &RenderableDeck<'_>, output: &Path)
        -> Result<PathBuf, Self::Error>;

    /// File extension for this output format.
    fn extension(&self) -> &'static str;

    /// Format name (for display purposes).
    fn format_name(&self) -> &'static str;
}
