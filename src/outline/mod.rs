//! Raw outline data model and validation.
//!
//! A raw outline is what a content producer (AI generator, document
//! summarizer, scraper, or the offline [`builder::OutlineBuilder`]) hands to
//! the structuring pipeline. It is untrusted input: fields default rather
//! than fail during deserialization, and [`RawOutline::validate`] enforces
//! the rules before any structuring happens.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::SlideKind;

pub mod builder;
pub mod text;

pub use builder::OutlineBuilder;

/// A producer-supplied deck outline, not yet structured.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawOutline {
    /// Deck title.
    pub title: String,
    /// Slides in intended order.
    pub slides: Vec<RawSlide>,
}

impl RawOutline {
    /// Create an outline from a title and slides.
    pub fn new(title: impl Into<String>, slides: Vec<RawSlide>) -> Self {
        Self {
            title: title.into(),
            slides,
        }
    }

    /// Check the outline against the structuring preconditions.
    ///
    /// Fails with a validation error naming the offending field when the
    /// deck title is blank, the slide list is empty, or any slide is
    /// missing a title. Structuring never partially processes a deck, so
    /// this runs before any slide is enriched.
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(Error::validation(
                "title",
                "presentation title must not be empty",
            ));
        }

        if self.slides.is_empty() {
            return Err(Error::validation(
                "slides",
                "slides must be a non-empty sequence",
            ));
        }

        for (index, slide) in self.slides.iter().enumerate() {
            if slide.title.trim().is_empty() {
                return Err(Error::validation(
                    format!("slides[{index}].title"),
                    format!("slide {} is missing a title", index + 1),
                ));
            }
        }

        Ok(())
    }
}

/// One slide as supplied by a producer.
///
/// Only `title` is required; everything else defaults. A missing `type`
/// becomes [`SlideKind::Content`] during structuring.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawSlide {
    /// Producer-assigned position hint; informational only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slide_number: Option<u32>,
    /// Declared slide role.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<SlideKind>,
    /// Slide heading; required for structuring.
    pub title: String,
    /// Title-slide subtitle.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    /// Bullet lines in render order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub bullet_points: Vec<String>,
    /// Free-text hint for a chart or image panel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visual_suggestion: Option<String>,
    /// Presenter notes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speaker_notes: Option<String>,
}

impl RawSlide {
    /// Create a slide with the given title and defaults elsewhere.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Set the slide role.
    #[must_use]
    pub const fn with_kind(mut self, kind: SlideKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Set the subtitle.
    #[must_use]
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    /// Set the bullet points.
    #[must_use]
    pub fn with_bullets<I, S>(mut self, bullets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.bullet_points = bullets.into_iter().map(Into::into).collect();
        self
    }

    /// Set the visual suggestion.
    #[must_use]
    pub fn with_visual(mut self, visual: impl Into<String>) -> Self {
        self.visual_suggestion = Some(visual.into());
        self
    }

    /// Set the speaker notes.
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.speaker_notes = Some(notes.into());
        self
    }

    /// The slide's role, defaulting a missing declaration to content.
    #[must_use]
    pub fn kind_or_default(&self) -> SlideKind {
        self.kind.unwrap_or_default()
    }

    /// Number of bullet points.
    #[must_use]
    pub fn bullet_count(&self) -> usize {
        self.bullet_points.len()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn test_validate_accepts_titled_slides() {
        let outline = RawOutline::new(
            "Quarterly Review",
            vec![
                RawSlide::new("Welcome").with_kind(SlideKind::Title),
                RawSlide::new("Numbers").with_bullets(["up", "down"]),
            ],
        );
        assert!(outline.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_blank_deck_title() {
        let outline = RawOutline::new("   ", vec![RawSlide::new("A")]);
        let err = outline.validate().unwrap_err();
        assert!(matches!(err, Error::Validation { ref field, .. } if field == "title"));
    }

    #[test]
    fn test_validate_rejects_empty_slides() {
        let outline = RawOutline::new("Deck", Vec::new());
        let err = outline.validate().unwrap_err();
        assert!(matches!(err, Error::Validation { ref field, .. } if field == "slides"));
    }

    #[test]
    fn test_validate_names_the_untitled_slide() {
        let outline = RawOutline::new(
            "Deck",
            vec![RawSlide::new("Fine"), RawSlide::new(""), RawSlide::new("Ok")],
        );
        let err = outline.validate().unwrap_err();
        match err {
            Error::Validation { field, message } => {
                assert_eq!(field, "slides[1].title");
                assert!(message.contains("slide 2"));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_json_fields_default_instead_of_failing() {
        // A producer blob with no slides at all still deserializes;
        // validation is where the complaint happens.
        let outline: RawOutline = serde_json::from_str(r#"{"title":"Deck"}"#).unwrap();
        assert!(outline.slides.is_empty());
        assert!(outline.validate().is_err());
    }

    #[test]
    fn test_raw_slide_wire_names() {
        let slide: RawSlide = serde_json::from_str(
            r#"{
                "slideNumber": 2,
                "type": "conclusion",
                "title": "Wrap Up",
                "bulletPoints": ["recap"],
                "visualSuggestion": "summary chart",
                "speakerNotes": "thank the audience"
            }"#,
        )
        .unwrap();
        assert_eq!(slide.slide_number, Some(2));
        assert_eq!(slide.kind, Some(SlideKind::Conclusion));
        assert_eq!(slide.bullet_points, vec!["recap".to_string()]);
        assert_eq!(slide.visual_suggestion.as_deref(), Some("summary chart"));
        assert_eq!(slide.speaker_notes.as_deref(), Some("thank the audience"));
    }
}
