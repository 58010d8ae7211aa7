//! Offline outline construction from plain text.
//!
//! [`OutlineBuilder`] turns a topic plus pasted source text into a
//! [`RawOutline`] without any external producer: a title slide, one content
//! slide per section of the text, and a closing recap slide built from the
//! most frequent topics.

use crate::constants::outline::{DEFAULT_BULLETS_PER_SLIDE, DEFAULT_MAX_SECTIONS, MAX_KEY_TOPICS};
use crate::outline::text::{clean_text, extract_key_topics, sentences, slide_title_for, split_into_sections};
use crate::outline::{RawOutline, RawSlide};
use crate::types::SlideKind;

/// Subtitle placed on every generated title slide.
const TITLE_SUBTITLE: &str = "A Comprehensive Overview";

/// Visual hints cycled across generated content slides.
const VISUAL_HINTS: [&str; 4] = [
    "Infographic showing key statistics",
    "Chart comparing the main points",
    "Timeline or process flow diagram",
    "Image illustrating the core idea",
];

/// Builds raw outlines from unstructured text.
#[derive(Debug, Clone)]
pub struct OutlineBuilder {
    max_sections: usize,
    bullets_per_slide: usize,
}

impl Default for OutlineBuilder {
    fn default() -> Self {
        Self {
            max_sections: DEFAULT_MAX_SECTIONS,
            bullets_per_slide: DEFAULT_BULLETS_PER_SLIDE,
        }
    }
}

impl OutlineBuilder {
    /// Builder with default section and bullet limits.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cap the number of content slides.
    #[must_use]
    pub const fn with_max_sections(mut self, max_sections: usize) -> Self {
        self.max_sections = max_sections;
        self
    }

    /// Cap the bullets placed on each content slide.
    #[must_use]
    pub const fn with_bullets_per_slide(mut self, bullets_per_slide: usize) -> Self {
        self.bullets_per_slide = bullets_per_slide;
        self
    }

    /// Build an outline for `topic` from `source` text.
    ///
    /// Sections too short to carry a slide are dropped; with no usable
    /// sections at all the outline is just the title and recap slides.
    #[must_use]
    pub fn build(&self, topic: &str, source: &str) -> RawOutline {
        let cleaned = clean_text(source);
        let sections = split_into_sections(&cleaned, self.max_sections);
        let topics = extract_key_topics(&cleaned, MAX_KEY_TOPICS);

        let mut slides = Vec::with_capacity(sections.len() + 2);

        slides.push(
            RawSlide::new(topic)
                .with_kind(SlideKind::Title)
                .with_subtitle(TITLE_SUBTITLE)
                .with_notes(format!("Welcome to this presentation on {topic}.")),
        );

        for (index, section) in sections.iter().enumerate() {
            let bullets: Vec<String> = sentences(section)
                .into_iter()
                .take(self.bullets_per_slide)
                .collect();
            slides.push(
                RawSlide::new(slide_title_for(section, index))
                    .with_kind(SlideKind::Content)
                    .with_bullets(bullets)
                    .with_visual(VISUAL_HINTS[index % VISUAL_HINTS.len()])
                    .with_notes(format!(
                        "Cover the points on this slide in order; expand on {topic} as time allows."
                    )),
            );
        }

        slides.push(
            RawSlide::new("Conclusion")
                .with_kind(SlideKind::Conclusion)
                .with_bullets(recap_bullets(&topics, &sections, self.bullets_per_slide))
                .with_notes("Wrap up the key points and close with a call to action."),
        );

        RawOutline::new(topic, slides)
    }
}

/// Recap bullets for the closing slide: key topics when available,
/// otherwise each section's opening sentence.
fn recap_bullets(topics: &[String], sections: &[String], limit: usize) -> Vec<String> {
    if !topics.is_empty() {
        return topics
            .iter()
            .take(limit)
            .map(|topic| format!("Key theme: {topic}"))
            .collect();
    }
    sections
        .iter()
        .take(limit)
        .filter_map(|section| sentences(section).into_iter().next())
        .collect()
}
