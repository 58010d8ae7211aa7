//! Layout selection for raw slides.

use crate::constants::layout::{LARGE_BULLET_MAX, MEDIUM_BULLET_MAX};
use crate::outline::RawSlide;
use crate::types::{LayoutTag, SlideKind};

/// Pick the layout tag for a slide.
///
/// Declared title slides always get the title layout. Bulleted slides are
/// sized by bullet density. Bullet-less slides fall back to keyword
/// sniffing on the visual suggestion ("chart" wins over "image", both
/// matched case-sensitively as authored by producers), else the standard
/// content layout.
#[must_use]
pub fn select_layout(slide: &RawSlide) -> LayoutTag {
    if slide.kind_or_default() == SlideKind::Title {
        return LayoutTag::TitleSlide;
    }

    let bullets = slide.bullet_count();
    if bullets > 0 {
        if bullets <= LARGE_BULLET_MAX {
            return LayoutTag::ContentLarge;
        }
        if bullets <= MEDIUM_BULLET_MAX {
            return LayoutTag::ContentMedium;
        }
        return LayoutTag::ContentDense;
    }

    if let Some(visual) = &slide.visual_suggestion {
        if visual.contains("chart") {
            return LayoutTag::ChartFocus;
        }
        if visual.contains("image") {
            return LayoutTag::ImageContent;
        }
    }

    LayoutTag::ContentStandard
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    fn bulleted(count: usize) -> RawSlide {
        RawSlide::new("Bullets").with_bullets((0..count).map(|i| format!("point {i}")))
    }

    #[test]
    fn test_title_kind_wins_over_everything() {
        let slide = RawSlide::new("Intro")
            .with_kind(SlideKind::Title)
            .with_bullets(["a", "b", "c", "d", "e", "f", "g"])
            .with_visual("chart of outcomes");
        assert_eq!(select_layout(&slide), LayoutTag::TitleSlide);
    }

    #[test]
    fn test_bullet_density_bands() {
        assert_eq!(select_layout(&bulleted(1)), LayoutTag::ContentLarge);
        assert_eq!(select_layout(&bulleted(3)), LayoutTag::ContentLarge);
        assert_eq!(select_layout(&bulleted(4)), LayoutTag::ContentMedium);
        assert_eq!(select_layout(&bulleted(6)), LayoutTag::ContentMedium);
        assert_eq!(select_layout(&bulleted(7)), LayoutTag::ContentDense);
    }

    #[test]
    fn test_visual_keywords_apply_only_without_bullets() {
        let slide = RawSlide::new("Trends").with_visual("line chart of revenue");
        assert_eq!(select_layout(&slide), LayoutTag::ChartFocus);

        let slide = RawSlide::new("Team").with_visual("group image on site");
        assert_eq!(select_layout(&slide), LayoutTag::ImageContent);

        let slide = bulleted(2).with_visual("line chart of revenue");
        assert_eq!(select_layout(&slide), LayoutTag::ContentLarge);
    }

    #[test]
    fn test_keyword_match_is_case_sensitive() {
        let slide = RawSlide::new("Trends").with_visual("Chart of revenue");
        assert_eq!(select_layout(&slide), LayoutTag::ContentStandard);
    }

    #[test]
    fn test_chart_takes_precedence_over_image() {
        let slide = RawSlide::new("Mix").with_visual("chart next to an image");
        assert_eq!(select_layout(&slide), LayoutTag::ChartFocus);
    }

    #[test]
    fn test_plain_slide_gets_standard_layout() {
        assert_eq!(select_layout(&RawSlide::new("Plain")), LayoutTag::ContentStandard);
    }

    #[test]
    fn test_selection_is_deterministic() {
        let slide = bulleted(5).with_notes("same input, same tag");
        assert_eq!(select_layout(&slide), select_layout(&slide));
    }
}
