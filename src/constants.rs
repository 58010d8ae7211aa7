//! Application constants.
//!
//! Centralizes magic numbers and configuration values for better maintainability.

/// Slide timing estimation constants.
pub mod timing {
    /// Base presentation time per slide, in seconds.
    pub const BASE_SLIDE_SECONDS: u32 = 30;

    /// Additional seconds per bullet point.
    pub const SECONDS_PER_BULLET: u32 = 10;

    /// Assumed speaking pace over speaker notes, in words per second.
    pub const NOTE_WORDS_PER_SECOND: u32 = 2;

    /// Hard cap on the estimated time for a single slide, in seconds.
    pub const MAX_SLIDE_SECONDS: u32 = 180;

    /// Assumed slide time when no estimate is available, in seconds.
    pub const FALLBACK_SLIDE_SECONDS: u32 = 60;
}

/// Layout selection thresholds.
pub mod layout {
    /// Largest bullet count still rendered with large type.
    pub const LARGE_BULLET_MAX: usize = 3;

    /// Largest bullet count still rendered with medium type.
    pub const MEDIUM_BULLET_MAX: usize = 6;
}

/// Outline building constants.
pub mod outline {
    /// Default maximum number of content sections per outline.
    pub const DEFAULT_MAX_SECTIONS: usize = 10;

    /// Minimum character count for a section to be worth a slide.
    pub const MIN_SECTION_CHARS: usize = 50;

    /// Maximum generated slide title length, in characters.
    pub const MAX_TITLE_CHARS: usize = 60;

    /// Truncation point for over-long generated titles (ellipsis added after).
    pub const TITLE_TRUNCATE_CHARS: usize = 57;

    /// Number of leading words considered when deriving a title.
    pub const TITLE_WORD_SPAN: usize = 10;

    /// Default maximum bullets generated per content slide.
    pub const DEFAULT_BULLETS_PER_SLIDE: usize = 5;

    /// Maximum number of key topics extracted from a text.
    pub const MAX_KEY_TOPICS: usize = 20;

    /// Minimum token length considered a meaningful topic word.
    pub const MIN_TOPIC_CHARS: usize = 4;
}

/// Export constants.
pub mod export {
    /// File stem prefix for exported decks.
    pub const FILE_STEM_PREFIX: &str = "presentation";

    /// Default directory for exported files, relative to the working dir.
    pub const DEFAULT_EXPORT_DIR: &str = "exports";
}
