//! Slide and deck timing estimates.
//!
//! Per-slide estimates start from a base allowance and grow with bullet
//! count and speaker-note length. Deck totals are reported in raw seconds,
//! rounded-up minutes, and a human-readable rendering.

use serde::{Deserialize, Serialize};

use crate::constants::timing::{
    BASE_SLIDE_SECONDS, FALLBACK_SLIDE_SECONDS, MAX_SLIDE_SECONDS, NOTE_WORDS_PER_SECOND,
    SECONDS_PER_BULLET,
};
use crate::outline::RawSlide;

/// Estimated presentation time for a single slide, in seconds.
///
/// Base allowance plus a per-bullet surcharge plus time to speak the notes
/// at roughly two words per second, capped at three minutes. The base means
/// the result never drops below thirty seconds.
#[must_use]
pub fn estimate_slide_timing(slide: &RawSlide) -> u32 {
    let mut seconds = BASE_SLIDE_SECONDS;
    seconds += SECONDS_PER_BULLET * slide.bullet_points.len() as u32;

    if let Some(notes) = &slide.speaker_notes {
        let words = notes.split_whitespace().count() as u32;
        seconds += words.div_ceil(NOTE_WORDS_PER_SECOND);
    }

    seconds.min(MAX_SLIDE_SECONDS)
}

/// Deck-level duration summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DurationEstimate {
    /// Total estimated seconds across all slides.
    pub seconds: u32,
    /// Total rounded up to whole minutes.
    pub minutes: u32,
    /// Human-readable rendering of `seconds`.
    pub formatted: String,
}

impl DurationEstimate {
    /// Sum per-slide timings into a deck estimate.
    ///
    /// A slide with no timing counts as one minute.
    pub fn from_timings<I>(timings: I) -> Self
    where
        I: IntoIterator<Item = Option<u32>>,
    {
        let seconds: u32 = timings
            .into_iter()
            .map(|timing| timing.unwrap_or(FALLBACK_SLIDE_SECONDS))
            .sum();
        Self {
            seconds,
            minutes: seconds.div_ceil(60),
            formatted: format_duration(seconds),
        }
    }
}

/// Deck duration for a slice of structured slides.
///
/// Every structured slide carries a timing, so this simply feeds
/// [`DurationEstimate::from_timings`] with present values; the one-minute
/// fallback stays reachable for callers holding partial data.
#[must_use]
pub fn estimate_presentation_duration(slides: &[super::Slide]) -> DurationEstimate {
    DurationEstimate::from_timings(slides.iter().map(|slide| Some(slide.timing)))
}

/// Render a second count for people.
///
/// Under a minute the raw second count is reported. On an exact minute
/// boundary only minutes appear. Otherwise both parts are rendered, each
/// singular at exactly one.
#[must_use]
pub fn format_duration(seconds: u32) -> String {
    let minutes = seconds / 60;
    let remaining = seconds % 60;

    if minutes == 0 {
        return format!("{seconds} seconds");
    }
    if remaining == 0 {
        return format!("{minutes} minute{}", plural(minutes));
    }
    format!(
        "{minutes} minute{} {remaining} second{}",
        plural(minutes),
        plural(remaining)
    )
}

const fn plural(n: u32) -> &'static str {
    if n == 1 {
        ""
    } else {
        "s"
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn test_bare_slide_gets_base_allowance() {
        assert_eq!(estimate_slide_timing(&RawSlide::new("Plain")), 30);
    }

    #[test]
    fn test_bullets_add_ten_seconds_each() {
        let slide = RawSlide::new("Bullets").with_bullets(["a", "b", "c", "d", "e"]);
        assert_eq!(estimate_slide_timing(&slide), 80);
    }

    #[test]
    fn test_notes_add_half_a_second_per_word_rounded_up() {
        let slide = RawSlide::new("Notes").with_notes("one two three four five");
        assert_eq!(estimate_slide_timing(&slide), 33);

        let slide = RawSlide::new("Notes").with_notes("one two three four");
        assert_eq!(estimate_slide_timing(&slide), 32);
    }

    #[test]
    fn test_empty_notes_add_nothing() {
        let slide = RawSlide::new("Notes").with_notes("   ");
        assert_eq!(estimate_slide_timing(&slide), 30);
    }

    #[test]
    fn test_estimate_caps_at_three_minutes() {
        let slide = RawSlide::new("Epic")
            .with_bullets((0..20).map(|i| format!("point {i}")))
            .with_notes("word ".repeat(100));
        assert_eq!(estimate_slide_timing(&slide), 180);
    }

    #[test]
    fn test_estimate_monotonic_in_bullet_count() {
        let mut previous = 0;
        for count in 0..25 {
            let slide =
                RawSlide::new("Bullets").with_bullets((0..count).map(|i| format!("point {i}")));
            let timing = estimate_slide_timing(&slide);
            assert!(timing >= previous);
            assert!((30..=180).contains(&timing));
            previous = timing;
        }
    }

    #[test]
    fn test_deck_estimate_sums_and_rounds_minutes_up() {
        let estimate = DurationEstimate::from_timings([Some(30), Some(80)]);
        assert_eq!(estimate.seconds, 110);
        assert_eq!(estimate.minutes, 2);
        assert_eq!(estimate.formatted, "1 minute 50 seconds");
    }

    #[test]
    fn test_missing_timing_counts_as_a_minute() {
        let estimate = DurationEstimate::from_timings([Some(30), None]);
        assert_eq!(estimate.seconds, 90);
        assert_eq!(estimate.formatted, "1 minute 30 seconds");
    }

    #[test]
    fn test_format_under_a_minute_reports_seconds() {
        assert_eq!(format_duration(45), "45 seconds");
        assert_eq!(format_duration(1), "1 seconds");
        assert_eq!(format_duration(0), "0 seconds");
    }

    #[test]
    fn test_format_exact_minutes() {
        assert_eq!(format_duration(60), "1 minute");
        assert_eq!(format_duration(120), "2 minutes");
    }

    #[test]
    fn test_format_mixed() {
        assert_eq!(format_duration(61), "1 minute 1 second");
        assert_eq!(format_duration(150), "2 minutes 30 seconds");
    }
}
