//! Template data model.
//!
//! A template is a named bundle of color, font, and coordinate defaults
//! applied uniformly to a deck. Registry entries are immutable; per-deck
//! adjustments go through [`customize::apply_customizations`], which always
//! operates on a clone.

use serde::{Deserialize, Serialize};

pub mod customize;
pub mod registry;

pub use customize::{
    apply_customizations, ColorOverrides, FontOverrides, LayoutOverrides, TemplateCustomizations,
};
pub use registry::{ResolvedTemplate, TemplateInfo, TemplatePreview, TemplateRegistry};

/// A named style preset: colors, fonts, and layout coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    /// Canonical registry key, e.g. `professional`.
    pub name: String,
    /// Human-readable name, e.g. `Professional`.
    pub display_name: String,
    /// One-line description shown in template pickers.
    pub description: String,
    /// Color palette.
    pub colors: ColorPalette,
    /// Font assignments per text role.
    pub fonts: FontSet,
    /// Text-box coordinates per slide shape.
    pub layout: LayoutGeometry,
}

/// Hex color assignments for the four palette roles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorPalette {
    /// Headline and emphasis color.
    pub primary: String,
    /// Slide background color.
    pub secondary: String,
    /// Divider and highlight color.
    pub accent: String,
    /// Body text color.
    pub text: String,
}

/// Font choices for each text role on a slide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontSet {
    /// Slide titles.
    pub title: FontSpec,
    /// Title-slide subtitles.
    pub subtitle: FontSpec,
    /// Bullet and body text.
    pub content: FontSpec,
    /// Speaker notes.
    pub notes: FontSpec,
}

/// A single font assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontSpec {
    /// Font face name as the renderer expects it.
    pub face: String,
    /// Point size.
    pub size: u32,
    /// Whether the role renders bold.
    #[serde(default)]
    pub bold: bool,
}

impl FontSpec {
    /// Create a font assignment.
    pub fn new(face: impl Into<String>, size: u32, bold: bool) -> Self {
        Self {
            face: face.into(),
            size,
            bold,
        }
    }
}

/// Vertical text-box coordinates per slide shape, in inches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutGeometry {
    /// Coordinates for the opening title slide.
    pub title_slide: TitleSlideGeometry,
    /// Coordinates for body slides.
    pub content_slide: ContentSlideGeometry,
}

/// Title-slide text-box positions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TitleSlideGeometry {
    /// Vertical position of the main title box.
    pub title_y: f64,
    /// Vertical position of the subtitle box.
    pub subtitle_y: f64,
}

/// Content-slide text-box positions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentSlideGeometry {
    /// Vertical position of the heading box.
    pub title_y: f64,
    /// Vertical position of the body box.
    pub content_y: f64,
}
