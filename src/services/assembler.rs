//! Presentation assembly service.
//!
//! The assembler owns the full lifecycle of a presentation: structuring the
//! outline, resolving and customizing the template, persisting the record,
//! and handing stored decks to the export renderer. Silent fallbacks in the
//! underlying tables (unknown template, unsupported export format) surface
//! here as [`Warning`]s on the outcome instead of disappearing.

use std::path::PathBuf;

use crate::constants::export::{DEFAULT_EXPORT_DIR, FILE_STEM_PREFIX};
use crate::error::{Error, Result};
use crate::outline::{RawOutline, RawSlide};
use crate::render::{DeckRenderer, RenderableDeck};
use crate::services::store::{PresentationRecord, PresentationStore, PresentationSummary};
use crate::structure::structure_content;
use crate::template::{apply_customizations, Template, TemplateCustomizations, TemplateRegistry};
use crate::types::{ExportFormat, PresentationId, Warning};

/// A stored record plus any fallback warnings raised while building it.
#[derive(Debug, Clone)]
pub struct AssemblyOutcome {
    /// The record as stored.
    pub record: PresentationRecord,
    /// Non-fatal conditions encountered during assembly.
    pub warnings: Vec<Warning>,
}

/// Result of an export request.
#[derive(Debug, Clone)]
pub struct ExportOutcome {
    /// Path the renderer wrote.
    pub path: PathBuf,
    /// Format actually served.
    pub format: ExportFormat,
    /// Non-fatal conditions, e.g. a format downgrade.
    pub warnings: Vec<Warning>,
}

/// Assembles, stores, and exports presentations.
///
/// Stateless apart from the store handed in; safe to share across
/// concurrent callers when the store is.
pub struct Assembler<S, R> {
    store: S,
    renderer: R,
    registry: TemplateRegistry,
    export_dir: PathBuf,
}

impl<S: PresentationStore, R: DeckRenderer> Assembler<S, R> {
    /// Create an assembler over the given store and renderer.
    pub fn new(store: S, renderer: R) -> Self {
        Self {
            store,
            renderer,
            registry: TemplateRegistry::with_builtins(),
            export_dir: PathBuf::from(DEFAULT_EXPORT_DIR),
        }
    }

    /// Set the directory exports are written to.
    #[must_use]
    pub fn with_export_dir(mut self, export_dir: impl Into<PathBuf>) -> Self {
        self.export_dir = export_dir.into();
        self
    }

    /// The template registry this assembler resolves names against.
    pub const fn registry(&self) -> &TemplateRegistry {
        &self.registry
    }

    /// Structure an outline, build the effective template, and store a new
    /// presentation under a fresh id.
    ///
    /// An unknown template name falls back to the default and is reported
    /// in the outcome's warnings.
    pub fn create(
        &self,
        outline: &RawOutline,
        template_name: &str,
        customizations: TemplateCustomizations,
    ) -> Result<AssemblyOutcome> {
        let (resolved_name, base, warnings) = self.resolve_template(template_name);

        let content = structure_content(outline, &resolved_name)?;
        let effective_template = apply_customizations(base, &customizations);

        let record = PresentationRecord {
            id: PresentationId::fresh(),
            title: outline.title.clone(),
            template: resolved_name,
            customizations,
            created_at: content.metadata.created_at,
            updated_at: None,
            effective_template,
            content,
        };

        self.store.put(record.clone());
        tracing::debug!("Stored presentation {} ({} slides)", record.id, record.slide_count());

        Ok(AssemblyOutcome { record, warnings })
    }

    /// Replace a stored presentation's derived state with a re-structured
    /// deck, preserving its id, title, and creation time.
    ///
    /// The stored title is authoritative; the new slides are structured
    /// under it. Fails with not-found for an unknown id.
    pub fn update(
        &self,
        id: &PresentationId,
        slides: &[RawSlide],
        template_name: &str,
        customizations: TemplateCustomizations,
    ) -> Result<AssemblyOutcome> {
        let existing = self
            .store
            .get(id)
            .ok_or_else(|| Error::not_found(id.as_str()))?;

        let outline = RawOutline::new(existing.title.clone(), slides.to_vec());
        let (resolved_name, base, warnings) = self.resolve_template(template_name);

        let content = structure_content(&outline, &resolved_name)?;
        let effective_template = apply_customizations(base, &customizations);

        let record = PresentationRecord {
            id: existing.id,
            title: existing.title,
            template: resolved_name,
            customizations,
            created_at: existing.created_at,
            updated_at: Some(content.metadata.created_at),
            effective_template,
            content,
        };

        self.store.put(record.clone());
        tracing::debug!("Updated presentation {}", record.id);

        Ok(AssemblyOutcome { record, warnings })
    }

    /// Fetch a stored presentation.
    pub fn get(&self, id: &PresentationId) -> Result<PresentationRecord> {
        self.store
            .get(id)
            .ok_or_else(|| Error::not_found(id.as_str()))
    }

    /// Remove a presentation. Idempotent; returns whether one existed.
    pub fn delete(&self, id: &PresentationId) -> bool {
        let existed = self.store.remove(id);
        if existed {
            tracing::debug!("Deleted presentation {id}");
        }
        existed
    }

    /// Summaries of all stored presentations, newest first.
    pub fn list(&self) -> Vec<PresentationSummary> {
        let mut summaries: Vec<PresentationSummary> = self
            .store
            .records()
            .iter()
            .map(PresentationRecord::summary)
            .collect();
        summaries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        summaries
    }

    /// Render a stored presentation to the export directory.
    ///
    /// Only pptx is fully supported; any other requested format is served
    /// as pptx with a downgrade warning. The renderer names the artifact
    /// through its own extension, and its failures propagate without retry.
    pub fn request_export(
        &self,
        id: &PresentationId,
        format: ExportFormat,
    ) -> Result<ExportOutcome> {
        let record = self
            .store
            .get(id)
            .ok_or_else(|| Error::not_found(id.as_str()))?;

        let mut warnings = Vec::new();
        if format != ExportFormat::Pptx {
            tracing::warn!("Export format '{format}' not fully supported, serving pptx");
            warnings.push(Warning::FormatDowngraded { requested: format });
        }

        let file_name = format!(
            "{FILE_STEM_PREFIX}_{id}.{ext}",
            id = record.id,
            ext = self.renderer.extension()
        );
        let output = self.export_dir.join(file_name);

        let deck = RenderableDeck {
            title: &record.title,
            slides: &record.content.slides,
            effective_template: &record.effective_template,
        };

        let path = self
            .renderer
            .render(&deck, &output)
            .map_err(|e| Error::renderer(e.to_string()))?;
        tracing::info!(
            "Exported presentation {} as {} to {}",
            record.id,
            self.renderer.format_name(),
            path.display()
        );

        Ok(ExportOutcome {
            path,
            format: ExportFormat::Pptx,
            warnings,
        })
    }

    /// Resolve a template name against the registry, collecting a warning
    /// when it falls back to the default.
    fn resolve_template(&self, template_name: &str) -> (String, &Template, Vec<Warning>) {
        let resolved = self.registry.resolve(template_name);
        let mut warnings = Vec::new();
        if resolved.fell_back {
            tracing::warn!(
                "Unknown template '{template_name}', falling back to {}",
                resolved.template.name
            );
            warnings.push(Warning::UnknownTemplate {
                requested: template_name.to_string(),
            });
        }
        (resolved.template.name.clone(), resolved.template, warnings)
    }
}
