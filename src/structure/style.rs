//! Per-template slide styling: animation sets and denormalized
//! color-scheme/font literals.
//!
//! Both lookups are fixed tables keyed by template name. Unrecognized
//! names take the professional row, matching the registry's fallback so a
//! deck never mixes styles from different templates.

use serde::{Deserialize, Serialize};

/// Slide transition effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Transition {
    /// Cross-fade between slides.
    Fade,
    /// Zoom into the incoming slide.
    Zoom,
    /// Push the outgoing slide aside.
    Push,
}

/// Bullet entrance effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BulletEntry {
    /// Slide in from the left edge.
    FlyInLeft,
    /// Slide in from the bottom edge.
    FlyInBottom,
    /// Bounce into place.
    BounceIn,
    /// Appear with no motion.
    Appear,
}

/// Animation speed class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pace {
    /// Snappy, short effects.
    Fast,
    /// Default effect speed.
    Medium,
    /// Deliberate, slow effects.
    Slow,
}

/// The animation trio attached to every slide of a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationSet {
    /// Transition between slides.
    #[serde(rename = "slideTransition")]
    pub transition: Transition,
    /// Entrance effect for bullet lines.
    #[serde(rename = "bulletAnimation")]
    pub bullet_entry: BulletEntry,
    /// Speed class for both effects.
    #[serde(rename = "timing")]
    pub pace: Pace,
}

/// Color-scheme and font literals copied onto each slide for the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckStyle {
    /// Named color scheme.
    #[serde(rename = "colorScheme")]
    pub color_scheme: String,
    /// Font family for slide text.
    #[serde(rename = "fontFamily")]
    pub font_family: String,
}

/// Animation set for a template name, professional for anything unknown.
#[must_use]
pub fn animations_for(template_name: &str) -> AnimationSet {
    match template_name {
        "corporate" => AnimationSet {
            transition: Transition::Fade,
            bullet_entry: BulletEntry::FlyInLeft,
            pace: Pace::Medium,
        },
        "creative" => AnimationSet {
            transition: Transition::Zoom,
            bullet_entry: BulletEntry::BounceIn,
            pace: Pace::Fast,
        },
        "academic" => AnimationSet {
            transition: Transition::Push,
            bullet_entry: BulletEntry::Appear,
            pace: Pace::Slow,
        },
        _ => AnimationSet {
            transition: Transition::Fade,
            bullet_entry: BulletEntry::FlyInBottom,
            pace: Pace::Medium,
        },
    }
}

/// Style literals for a template name, professional for anything unknown.
#[must_use]
pub fn style_for(template_name: &str) -> DeckStyle {
    let (scheme, font) = match template_name {
        "corporate" => ("blue-corporate", "Calibri"),
        "creative" => ("vibrant-creative", "Montserrat"),
        "academic" => ("neutral-academic", "Times New Roman"),
        _ => ("professional-blue", "Arial"),
    };
    DeckStyle {
        color_scheme: scheme.to_string(),
        font_family: font.to_string(),
    }
}
