//! Template customization merge.
//!
//! Callers hand a sparse override object alongside a template name; the
//! merge clones the base preset and applies only the supplied keys, so the
//! registry entry itself is never touched.

use serde::{Deserialize, Serialize};

use super::{ContentSlideGeometry, FontSpec, Template, TitleSlideGeometry};

/// Sparse per-deck overrides applied on top of a base template.
///
/// Merging is group-wise: each present group shallow-merges its keys onto
/// the clone. Within `fonts` and `layout` a supplied key replaces that
/// role's whole value; within `colors` each key is an independent scalar.
/// Unknown groups in incoming JSON are ignored, never merged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TemplateCustomizations {
    /// Palette overrides.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colors: Option<ColorOverrides>,
    /// Font-role overrides.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fonts: Option<FontOverrides>,
    /// Coordinate overrides.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<LayoutOverrides>,
}

impl TemplateCustomizations {
    /// True when no override group is present.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.colors.is_none() && self.fonts.is_none() && self.layout.is_none()
    }
}

/// Per-key palette overrides; omitted keys keep the base color.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorOverrides {
    /// Headline color override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary: Option<String>,
    /// Background color override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary: Option<String>,
    /// Highlight color override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent: Option<String>,
    /// Body text color override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Per-role font overrides; a supplied role replaces its whole `FontSpec`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontOverrides {
    /// Title font replacement.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<FontSpec>,
    /// Subtitle font replacement.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<FontSpec>,
    /// Body font replacement.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<FontSpec>,
    /// Notes font replacement.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<FontSpec>,
}

/// Per-shape coordinate overrides; a supplied shape replaces its whole block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutOverrides {
    /// Title-slide coordinate replacement.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_slide: Option<TitleSlideGeometry>,
    /// Content-slide coordinate replacement.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_slide: Option<ContentSlideGeometry>,
}

/// Build the effective template for a deck: base clone plus supplied keys.
///
/// The base is never mutated; calling with empty overrides yields a value
/// equal to the base.
#[must_use]
pub fn apply_customizations(template: &Template, overrides: &TemplateCustomizations) -> Template {
    let mut effective = template.clone();

    if let Some(colors) = &overrides.colors {
        if let Some(primary) = &colors.primary {
            effective.colors.primary = primary.clone();
        }
        if let Some(secondary) = &colors.secondary {
            effective.colors.secondary = secondary.clone();
        }
        if let Some(accent) = &colors.accent {
            effective.colors.accent = accent.clone();
        }
        if let Some(text) = &colors.text {
            effective.colors.text = text.clone();
        }
    }

    if let Some(fonts) = &overrides.fonts {
        if let Some(title) = &fonts.title {
            effective.fonts.title = title.clone();
        }
        if let Some(subtitle) = &fonts.subtitle {
            effective.fonts.subtitle = subtitle.clone();
        }
        if let Some(content) = &fonts.content {
            effective.fonts.content = content.clone();
        }
        if let Some(notes) = &fonts.notes {
            effective.fonts.notes = notes.clone();
        }
    }

    if let Some(layout) = &overrides.layout {
        if let Some(title_slide) = layout.title_slide {
            effective.layout.title_slide = title_slide;
        }
        if let Some(content_slide) = layout.content_slide {
            effective.layout.content_slide = content_slide;
        }
    }

    effective
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use crate::template::TemplateRegistry;

    #[test]
    fn test_empty_overrides_yield_equal_clone() {
        let registry = TemplateRegistry::with_builtins();
        let base = registry.resolve("corporate").template;
        let effective = apply_customizations(base, &TemplateCustomizations::default());
        assert_eq!(&effective, base);
    }

    #[test]
    fn test_clone_does_not_alias_the_registry_entry() {
        let registry = TemplateRegistry::with_builtins();
        let base = registry.resolve("professional").template.clone();
        let mut effective = apply_customizations(&base, &TemplateCustomizations::default());
        effective.colors.primary = "#000000".to_string();
        // Registry entry keeps its authored value
        assert_eq!(
            registry.resolve("professional").template.colors.primary,
            "#2E4B8A"
        );
    }

    #[test]
    fn test_single_color_override_changes_only_that_key() {
        let registry = TemplateRegistry::with_builtins();
        let base = registry.resolve("professional").template;
        let overrides = TemplateCustomizations {
            colors: Some(ColorOverrides {
                primary: Some("#000".to_string()),
                ..ColorOverrides::default()
            }),
            ..TemplateCustomizations::default()
        };

        let effective = apply_customizations(base, &overrides);
        assert_eq!(effective.colors.primary, "#000");
        assert_eq!(effective.colors.secondary, base.colors.secondary);
        assert_eq!(effective.colors.accent, base.colors.accent);
        assert_eq!(effective.colors.text, base.colors.text);
        assert_eq!(effective.fonts, base.fonts);
        assert_eq!(effective.layout, base.layout);
    }

    #[test]
    fn test_font_role_override_replaces_whole_spec() {
        let registry = TemplateRegistry::with_builtins();
        let base = registry.resolve("academic").template;
        let overrides = TemplateCustomizations {
            fonts: Some(FontOverrides {
                title: Some(FontSpec::new("Georgia", 36, false)),
                ..FontOverrides::default()
            }),
            ..TemplateCustomizations::default()
        };

        let effective = apply_customizations(base, &overrides);
        assert_eq!(effective.fonts.title, FontSpec::new("Georgia", 36, false));
        assert_eq!(effective.fonts.subtitle, base.fonts.subtitle);
        assert_eq!(effective.colors, base.colors);
    }

    #[test]
    fn test_layout_shape_override_replaces_whole_block() {
        let registry = TemplateRegistry::with_builtins();
        let base = registry.resolve("creative").template;
        let overrides = TemplateCustomizations {
            layout: Some(LayoutOverrides {
                content_slide: Some(ContentSlideGeometry {
                    title_y: 0.9,
                    content_y: 2.0,
                }),
                ..LayoutOverrides::default()
            }),
            ..TemplateCustomizations::default()
        };

        let effective = apply_customizations(base, &overrides);
        assert!((effective.layout.content_slide.title_y - 0.9).abs() < f64::EPSILON);
        assert_eq!(effective.layout.title_slide, base.layout.title_slide);
    }

    #[test]
    fn test_unknown_json_groups_are_ignored() {
        let parsed: TemplateCustomizations = serde_json::from_str(
            r##"{"colors":{"accent":"#123456"},"branding":{"logo":"acme.png"}}"##,
        )
        .unwrap();
        assert_eq!(
            parsed.colors.as_ref().and_then(|c| c.accent.as_deref()),
            Some("#123456")
        );
        assert!(parsed.fonts.is_none());
        assert!(parsed.layout.is_none());
    }
}
