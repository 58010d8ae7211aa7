//! Structured-JSON deck renderer.

use std::path::{Path, PathBuf};

use fs_err as fs;

use crate::error::Error;
use crate::render::{DeckRenderer, RenderableDeck};

/// Renders a deck as pretty-printed JSON.
///
/// The output carries the full renderable payload, so downstream tooling
/// (or a future binary-format renderer) sees exactly what the assembler
/// handed over.
#[derive(Debug, Default)]
pub struct JsonDeckRenderer;

impl DeckRenderer for JsonDeckRenderer {
    type Error = Error;

    fn render(
        &self,
        deck: &RenderableDeck<'_>,
        output: &Path,
    ) -> Result<PathBuf, Self::Error> {
        if let Some(parent) = output.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let payload = serde_json::to_string_pretty(deck)
            .map_err(|e| Error::renderer(e.to_string()))?;
        fs::write(output, payload)?;

        Ok(output.to_path_buf())
    }

    fn extension(&self) -> &'static str {
        "json"
    }

    fn format_name(&self) -> &'static str {
        "Structured JSON"
    }
}
