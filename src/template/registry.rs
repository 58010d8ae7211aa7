//! Built-in template registry.
//!
//! Holds the four shipped presets and resolves caller-supplied names.
//! Unknown names resolve to `professional`; resolution reports whether it
//! fell back so callers can surface the condition instead of guessing.

use serde::Serialize;

use super::{
    ColorPalette, ContentSlideGeometry, FontSet, FontSpec, LayoutGeometry, Template,
    TitleSlideGeometry,
};

/// Name of the preset used when resolution fails.
pub const DEFAULT_TEMPLATE: &str = "professional";

/// Catalog entry describing one registered template.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateInfo {
    /// Registry key used in requests.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// One-line description.
    pub description: String,
    /// Swatch data for template pickers.
    pub preview: TemplatePreview,
}

/// Swatch summary of a template for picker UIs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplatePreview {
    /// Headline color.
    pub primary_color: String,
    /// Background color.
    pub secondary_color: String,
    /// Highlight color.
    pub accent_color: String,
    /// Title font face.
    pub font_family: String,
    /// Style family label.
    pub style: &'static str,
}

/// Outcome of resolving a template name.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedTemplate<'a> {
    /// The template that will be used.
    pub template: &'a Template,
    /// True when the requested name was unknown and the default was used.
    pub fell_back: bool,
}

/// Registry of named style presets.
///
/// Entries are immutable for the registry's lifetime; customization clones
/// them (see [`super::customize`]). Lookup is by exact canonical key.
#[derive(Debug, Clone)]
pub struct TemplateRegistry {
    templates: Vec<Template>,
}

impl Default for TemplateRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

impl TemplateRegistry {
    /// Create a registry holding the four built-in presets.
    #[must_use]
    pub fn with_builtins() -> Self {
        Self {
            templates: vec![professional(), corporate(), creative(), academic()],
        }
    }

    /// Look up a template by its canonical key.
    pub fn get(&self, name: &str) -> Option<&Template> {
        self.templates.iter().find(|t| t.name == name)
    }

    /// Resolve a requested name, falling back to `professional` when unknown.
    ///
    /// The built-in default is always registered, so resolution is total.
    pub fn resolve(&self, name: &str) -> ResolvedTemplate<'_> {
        match self.get(name) {
            Some(template) => ResolvedTemplate {
                template,
                fell_back: false,
            },
            None => ResolvedTemplate {
                template: self.default_template(),
                fell_back: true,
            },
        }
    }

    /// The preset used when resolution falls back.
    pub fn default_template(&self) -> &Template {
        // with_builtins always seeds professional first
        self.get(DEFAULT_TEMPLATE).unwrap_or(&self.templates[0])
    }

    /// List every registered template for pickers, in registration order.
    pub fn catalog(&self) -> Vec<TemplateInfo> {
        self.templates
            .iter()
            .map(|t| TemplateInfo {
                id: t.name.clone(),
                name: t.display_name.clone(),
                description: t.description.clone(),
                preview: TemplatePreview {
                    primary_color: t.colors.primary.clone(),
                    secondary_color: t.colors.secondary.clone(),
                    accent_color: t.colors.accent.clone(),
                    font_family: t.fonts.title.face.clone(),
                    style: "modern",
                },
            })
            .collect()
    }

    /// Iterate over the canonical keys in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.templates.iter().map(|t| t.name.as_str())
    }

    /// Number of registered templates.
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

/// Clean, modern preset for business presentations.
fn professional() -> Template {
    Template {
        name: "professional".to_string(),
        display_name: "Professional".to_string(),
        description: "Clean, modern design for business presentations".to_string(),
        colors: ColorPalette {
            primary: "#2E4B8A".to_string(),
            secondary: "#F5F7FA".to_string(),
            accent: "#FF6B35".to_string(),
            text: "#333333".to_string(),
        },
        fonts: FontSet {
            title: FontSpec::new("Calibri", 44, true),
            subtitle: FontSpec::new("Calibri", 24, false),
            content: FontSpec::new("Calibri", 20, false),
            notes: FontSpec::new("Calibri", 14, false),
        },
        layout: LayoutGeometry {
            title_slide: TitleSlideGeometry {
                title_y: 2.5,
                subtitle_y: 4.0,
            },
            content_slide: ContentSlideGeometry {
                title_y: 0.5,
                content_y: 1.5,
            },
        },
    }
}

/// Formal preset for executive presentations.
fn corporate() -> Template {
    Template {
        name: "corporate".to_string(),
        display_name: "Corporate".to_string(),
        description: "Formal design for executive presentations".to_string(),
        colors: ColorPalette {
            primary: "#1B365D".to_string(),
            secondary: "#E8F1F8".to_string(),
            accent: "#0066CC".to_string(),
            text: "#2C3E50".to_string(),
        },
        fonts: FontSet {
            title: FontSpec::new("Arial", 42, true),
            subtitle: FontSpec::new("Arial", 22, false),
            content: FontSpec::new("Arial", 18, false),
            notes: FontSpec::new("Arial", 12, false),
        },
        layout: LayoutGeometry {
            title_slide: TitleSlideGeometry {
                title_y: 2.0,
                subtitle_y: 3.5,
            },
            content_slide: ContentSlideGeometry {
                title_y: 0.3,
                content_y: 1.2,
            },
        },
    }
}

/// Vibrant preset for creative and marketing presentations.
fn creative() -> Template {
    Template {
        name: "creative".to_string(),
        display_name: "Creative".to_string(),
        description: "Vibrant design for creative and marketing presentations".to_string(),
        colors: ColorPalette {
            primary: "#E74C3C".to_string(),
            secondary: "#FDF2E9".to_string(),
            accent: "#F39C12".to_string(),
            text: "#34495E".to_string(),
        },
        fonts: FontSet {
            title: FontSpec::new("Montserrat", 48, true),
            subtitle: FontSpec::new("Open Sans", 26, false),
            content: FontSpec::new("Open Sans", 22, false),
            notes: FontSpec::new("Open Sans", 14, false),
        },
        layout: LayoutGeometry {
            title_slide: TitleSlideGeometry {
                title_y: 3.0,
                subtitle_y: 4.5,
            },
            content_slide: ContentSlideGeometry {
                title_y: 0.7,
                content_y: 1.8,
            },
        },
    }
}

/// Traditional preset for educational presentations.
fn academic() -> Template {
    Template {
        name: "academic".to_string(),
        display_name: "Academic".to_string(),
        description: "Traditional design for educational presentations".to_string(),
        colors: ColorPalette {
            primary: "#2C3E50".to_string(),
            secondary: "#ECF0F1".to_string(),
            accent: "#3498DB".to_string(),
            text: "#2C3E50".to_string(),
        },
        fonts: FontSet {
            title: FontSpec::new("Times New Roman", 40, true),
            subtitle: FontSpec::new("Times New Roman", 24, false),
            content: FontSpec::new("Times New Roman", 20, false),
            notes: FontSpec::new("Times New Roman", 14, false),
        },
        layout: LayoutGeometry {
            title_slide: TitleSlideGeometry {
                title_y: 2.2,
                subtitle_y: 3.8,
            },
            content_slide: ContentSlideGeometry {
                title_y: 0.4,
                content_y: 1.4,
            },
        },
    }
}
