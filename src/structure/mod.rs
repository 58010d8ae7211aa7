//! Deck structuring: turning validated raw outlines into render-ready
//! structured content.
//!
//! Structuring is a pure, synchronous enrichment pass. Every raw slide
//! keeps its authored fields and gains an id, a layout tag, an animation
//! set, a timing estimate, and the template's style literals. A metadata
//! block summarizes the deck. Nothing here touches shared state, so the
//! functions are safe to call from concurrent contexts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::outline::{RawOutline, RawSlide};
use crate::types::{LayoutTag, SlideId, SlideKind};

pub mod layout;
pub mod style;
pub mod timing;

pub use layout::select_layout;
pub use style::{animations_for, style_for, AnimationSet, BulletEntry, DeckStyle, Pace, Transition};
pub use timing::{
    estimate_presentation_duration, estimate_slide_timing, format_duration, DurationEstimate,
};

/// A fully structured slide, ready for a renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slide {
    /// Unique within the deck.
    pub id: SlideId,
    /// Producer-assigned position hint, carried through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slide_number: Option<u32>,
    /// Slide role.
    #[serde(rename = "type")]
    pub kind: SlideKind,
    /// Slide heading.
    pub title: String,
    /// Title-slide subtitle.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    /// Bullet lines in render order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bullet_points: Vec<String>,
    /// Free-text hint for a chart or image panel.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visual_suggestion: Option<String>,
    /// Presenter notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speaker_notes: Option<String>,
    /// Template name the deck was structured against, denormalized so the
    /// renderer needs no back-reference.
    pub template: String,
    /// Computed layout tag.
    pub layout: LayoutTag,
    /// Template animation set.
    pub animations: AnimationSet,
    /// Estimated seconds for this slide.
    pub timing: u32,
    /// Template style literals, inlined for the renderer.
    #[serde(flatten)]
    pub style: DeckStyle,
}

/// Summary block attached to every structured deck.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentMetadata {
    /// Template name the deck was structured against.
    pub template: String,
    /// Number of slides.
    pub slide_count: usize,
    /// When structuring ran.
    pub created_at: DateTime<Utc>,
    /// Deck duration estimate.
    pub estimated_duration: DurationEstimate,
}

/// A structured deck: the outline's content enriched slide by slide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructuredContent {
    /// Deck title.
    pub title: String,
    /// Enriched slides, in the outline's order.
    pub slides: Vec<Slide>,
    /// Deck summary.
    pub metadata: ContentMetadata,
}

/// Structure a raw outline against a template name.
///
/// Validates first; a bad outline structures nothing. Slide order is
/// preserved and ids are unique within the call. Unknown template names
/// take professional styling, mirroring the registry fallback; callers
/// that want that observable should resolve the name through the registry
/// before structuring.
pub fn structure_content(outline: &RawOutline, template_name: &str) -> Result<StructuredContent> {
    outline.validate()?;

    let minted_at = Utc::now();
    let millis = minted_at.timestamp_millis();

    let slides: Vec<Slide> = outline
        .slides
        .iter()
        .enumerate()
        .map(|(index, raw)| enrich_slide(raw, template_name, index, millis))
        .collect();

    let estimated_duration = estimate_presentation_duration(&slides);

    Ok(StructuredContent {
        title: outline.title.clone(),
        metadata: ContentMetadata {
            template: template_name.to_string(),
            slide_count: slides.len(),
            created_at: minted_at,
            estimated_duration,
        },
        slides,
    })
}

fn enrich_slide(raw: &RawSlide, template_name: &str, index: usize, millis: i64) -> Slide {
    Slide {
        id: SlideId::new(format!("slide_{}_{millis}", index + 1)),
        slide_number: raw.slide_number,
        kind: raw.kind_or_default(),
        title: raw.title.clone(),
        subtitle: raw.subtitle.clone(),
        bullet_points: raw.bullet_points.clone(),
        visual_suggestion: raw.visual_suggestion.clone(),
        speaker_notes: raw.speaker_notes.clone(),
        template: template_name.to_string(),
        layout: select_layout(raw),
        animations: animations_for(template_name),
        timing: estimate_slide_timing(raw),
        style: style_for(template_name),
    }
}
