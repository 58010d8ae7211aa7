//! Core type definitions for compile-time safety.
//!
//! This module provides newtype wrappers around string identifiers to prevent
//! accidental mixing of different ID types at compile time, plus the small
//! shared enums used across the structuring pipeline.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// The declared or defaulted role of a slide within a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlideKind {
    /// Opening title slide.
    Title,
    /// Regular body slide.
    #[default]
    Content,
    /// Closing summary or call-to-action slide.
    Conclusion,
}

impl SlideKind {
    /// Returns the wire name of this slide kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Content => "content",
            Self::Conclusion => "conclusion",
        }
    }
}

impl fmt::Display for SlideKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Layout tag computed for a slide from its own content.
///
/// The tag tells the renderer how to arrange the slide's text boxes and
/// visual panels; it is never overridden by template customizations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutTag {
    /// Centered title and subtitle.
    TitleSlide,
    /// Up to three bullets, large type.
    ContentLarge,
    /// Four to six bullets, medium type.
    ContentMedium,
    /// Seven or more bullets, compact type.
    ContentDense,
    /// Slide built around a chart panel.
    ChartFocus,
    /// Slide with a side image panel.
    ImageContent,
    /// Plain body slide with no bullets or visual hint.
    ContentStandard,
}

impl LayoutTag {
    /// Returns the wire name of this layout tag.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TitleSlide => "title-slide",
            Self::ContentLarge => "content-large",
            Self::ContentMedium => "content-medium",
            Self::ContentDense => "content-dense",
            Self::ChartFocus => "chart-focus",
            Self::ImageContent => "image-content",
            Self::ContentStandard => "content-standard",
        }
    }
}

impl fmt::Display for LayoutTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Export file format requested by a caller.
///
/// Only `Pptx` is fully supported; everything else is downgraded to `Pptx`
/// at export time with a [`Warning::FormatDowngraded`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Binary presentation file.
    Pptx,
    /// Portable document; currently served as pptx.
    Pdf,
}

impl ExportFormat {
    /// File extension for this format (without the dot).
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Pptx => "pptx",
            Self::Pdf => "pdf",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pptx" => Ok(Self::Pptx),
            "pdf" => Ok(Self::Pdf),
            other => Err(Error::parse(
                format!("unsupported export format: {other}"),
                None,
            )),
        }
    }
}

/// Unique presentation identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PresentationId(pub String);

impl PresentationId {
    /// Create a new `PresentationId` from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Allocate a fresh random id.
    #[must_use]
    pub fn fresh() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PresentationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for PresentationId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for PresentationId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for PresentationId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Per-slide identifier, unique within one structuring pass.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SlideId(pub String);

impl SlideId {
    /// Create a new `SlideId` from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SlideId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for SlideId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for SlideId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for SlideId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Non-fatal condition surfaced alongside an otherwise successful outcome.
///
/// Unknown template names and unsupported export formats fall back to
/// defaults rather than failing; the fallback is reported so callers can
/// decide whether it was intentional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Warning {
    /// The requested template is not registered; `professional` was used.
    #[serde(rename_all = "camelCase")]
    UnknownTemplate {
        /// Template name as the caller supplied it.
        requested: String,
    },
    /// The requested format is not fully supported; pptx was served.
    #[serde(rename_all = "camelCase")]
    FormatDowngraded {
        /// Format as the caller requested it.
        requested: ExportFormat,
    },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownTemplate { requested } => {
                write!(f, "unknown template `{requested}`, fell back to professional")
            }
            Self::FormatDowngraded { requested } => {
                write!(f, "format `{requested}` not fully supported, exported as pptx")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn test_slide_kind_default_is_content() {
        assert_eq!(SlideKind::default(), SlideKind::Content);
    }

    #[test]
    fn test_layout_tag_wire_names() {
        assert_eq!(LayoutTag::TitleSlide.as_str(), "title-slide");
        assert_eq!(LayoutTag::ContentDense.as_str(), "content-dense");
        let json = serde_json::to_string(&LayoutTag::ChartFocus).unwrap();
        assert_eq!(json, "\"chart-focus\"");
    }

    #[test]
    fn test_export_format_parsing() {
        assert_eq!("pptx".parse::<ExportFormat>().unwrap(), ExportFormat::Pptx);
        assert_eq!("PDF".parse::<ExportFormat>().unwrap(), ExportFormat::Pdf);
        assert!("keynote".parse::<ExportFormat>().is_err());
    }

    #[test]
    fn test_fresh_presentation_ids_are_unique() {
        let a = PresentationId::fresh();
        let b = PresentationId::fresh();
        assert_ne!(a, b);
    }
}
