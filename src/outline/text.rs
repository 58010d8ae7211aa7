//! Text normalization and summarization helpers.
//!
//! These back the offline [`OutlineBuilder`](super::OutlineBuilder): cleaning
//! pasted source text, carving it into sections, deriving slide titles, and
//! pulling out the most frequent content words for recap slides.

// Allow unwrap for compile-time constant regex patterns in lazy_static blocks
#![allow(clippy::unwrap_used)]

use std::collections::{HashMap, HashSet};

use lazy_static::lazy_static;
use regex::Regex;

use crate::constants::outline::{MAX_TITLE_CHARS, MIN_SECTION_CHARS, MIN_TOPIC_CHARS, TITLE_TRUNCATE_CHARS, TITLE_WORD_SPAN};

lazy_static! {
    /// Three or more consecutive newlines.
    static ref EXCESS_NEWLINES: Regex = Regex::new(r"\n{3,}").unwrap();
    /// Runs of horizontal whitespace.
    static ref SPACE_RUNS: Regex = Regex::new(r"[ \t]{2,}").unwrap();
    /// Paragraph boundary: a blank (possibly whitespace-only) line.
    static ref PARAGRAPH_BREAK: Regex = Regex::new(r"\n[ \t]*\n").unwrap();
    /// Words too common to count as topics.
    static ref STOPWORDS: HashSet<&'static str> = [
        "a", "about", "above", "after", "again", "against", "all", "also", "am", "an",
        "and", "any", "are", "as", "at", "be", "because", "been", "before", "being",
        "below", "between", "both", "but", "by", "can", "could", "did", "do", "does",
        "doing", "down", "during", "each", "few", "for", "from", "further", "had",
        "has", "have", "having", "he", "her", "here", "hers", "herself", "him",
        "himself", "his", "how", "i", "if", "in", "into", "is", "it", "its", "itself",
        "just", "me", "more", "most", "my", "myself", "no", "nor", "not", "now", "of",
        "off", "on", "once", "only", "or", "other", "our", "ours", "ourselves", "out",
        "over", "own", "same", "she", "should", "so", "some", "such", "than", "that",
        "the", "their", "theirs", "them", "themselves", "then", "there", "these",
        "they", "this", "those", "through", "to", "too", "under", "until", "up",
        "very", "was", "we", "were", "what", "when", "where", "which", "while", "who",
        "whom", "why", "will", "with", "would", "you", "your", "yours", "yourself",
        "yourselves",
    ]
    .iter()
    .copied()
    .collect();
}

/// Normalize pasted text: unify line endings, collapse runs of blank lines
/// to a single paragraph break, squeeze repeated spaces, trim the ends.
#[must_use]
pub fn clean_text(text: &str) -> String {
    let unified = text.replace("\r\n", "\n").replace('\r', "\n");
    let collapsed = EXCESS_NEWLINES.replace_all(&unified, "\n\n");
    let squeezed = SPACE_RUNS.replace_all(&collapsed, " ");
    squeezed.trim().to_string()
}

/// Split cleaned text into at most `max_sections` sections.
///
/// Paragraphs are the unit. When there are few enough, each substantial
/// paragraph is its own section; otherwise consecutive paragraphs are
/// grouped evenly. Fragments shorter than a sentence or two are dropped
/// rather than padded into slides of their own.
#[must_use]
pub fn split_into_sections(text: &str, max_sections: usize) -> Vec<String> {
    if max_sections == 0 {
        return Vec::new();
    }

    let paragraphs: Vec<&str> = PARAGRAPH_BREAK
        .split(text)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect();

    if paragraphs.len() <= max_sections {
        return paragraphs
            .into_iter()
            .filter(|p| p.len() > MIN_SECTION_CHARS)
            .map(str::to_string)
            .collect();
    }

    let per_group = paragraphs.len().div_ceil(max_sections);
    paragraphs
        .chunks(per_group)
        .map(|group| group.join("\n\n"))
        .filter(|section| section.len() > MIN_SECTION_CHARS)
        .collect()
}

/// Derive a slide title from section content.
///
/// The first sentence wins when it fits on a title line; otherwise the
/// opening words are taken and ellipsized. `index` is the zero-based
/// section position, used for the fallback title of unusable content.
#[must_use]
pub fn slide_title_for(content: &str, index: usize) -> String {
    let first_sentence = content
        .split(['.', '!', '?'])
        .next()
        .unwrap_or_default()
        .trim();

    if !first_sentence.is_empty() && first_sentence.chars().count() < MAX_TITLE_CHARS {
        return first_sentence.to_string();
    }

    let opening: Vec<&str> = content.split_whitespace().take(TITLE_WORD_SPAN).collect();
    let title = opening.join(" ");
    if title.is_empty() {
        return format!("Slide {}", index + 1);
    }
    if title.chars().count() > MAX_TITLE_CHARS {
        let truncated: String = title.chars().take(TITLE_TRUNCATE_CHARS).collect();
        return format!("{truncated}...");
    }
    title
}

/// Split a section into trimmed sentences, in order.
#[must_use]
pub fn sentences(content: &str) -> Vec<String> {
    content
        .split(['.', '!', '?'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Extract up to `limit` key topics: the most frequent alphabetic words,
/// lowercased, with stopwords and short words removed.
///
/// Ties keep first-appearance order, so the output is stable for a given
/// input.
#[must_use]
pub fn extract_key_topics(text: &str, limit: usize) -> Vec<String> {
    let lowered = text.to_lowercase();

    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut order: Vec<&str> = Vec::new();
    for word in lowered.split(|c: char| !c.is_ascii_alphanumeric()) {
        if word.len() < MIN_TOPIC_CHARS
            || !word.bytes().all(|b| b.is_ascii_alphabetic())
            || STOPWORDS.contains(word)
        {
            continue;
        }
        let seen = counts.entry(word).or_insert(0);
        if *seen == 0 {
            order.push(word);
        }
        *seen += 1;
    }

    let mut ranked: Vec<&str> = order;
    ranked.sort_by_key(|word| std::cmp::Reverse(counts[word]));
    ranked.into_iter().take(limit).map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn test_clean_text_collapses_noise() {
        let raw = "First line.\r\n\r\n\r\n\r\nSecond   line  with    gaps.  ";
        assert_eq!(clean_text(raw), "First line.\n\nSecond line with gaps.");
    }

    #[test]
    fn test_split_keeps_substantial_paragraphs() {
        let text = format!(
            "{long}\n\nshort\n\n{long2}",
            long = "x".repeat(60),
            long2 = "y".repeat(70)
        );
        let sections = split_into_sections(&text, 10);
        assert_eq!(sections.len(), 2);
        assert!(sections[0].starts_with('x'));
        assert!(sections[1].starts_with('y'));
    }

    #[test]
    fn test_split_groups_when_over_limit() {
        let paragraphs: Vec<String> = (0..8).map(|i| format!("paragraph number {i} {}", "z".repeat(40))).collect();
        let text = paragraphs.join("\n\n");
        let sections = split_into_sections(&text, 3);
        assert_eq!(sections.len(), 3);
        // 8 paragraphs over 3 sections lands as 3 + 3 + 2.
        assert_eq!(sections[0].matches("paragraph number").count(), 3);
        assert_eq!(sections[2].matches("paragraph number").count(), 2);
    }

    #[test]
    fn test_title_prefers_short_first_sentence() {
        let content = "Growth held steady. The rest of this paragraph goes on for a while.";
        assert_eq!(slide_title_for(content, 0), "Growth held steady");
    }

    #[test]
    fn test_title_falls_back_to_opening_words() {
        let content = "one two three four five six seven eight nine ten eleven twelve";
        assert_eq!(
            slide_title_for(content, 0),
            "one two three four five six seven eight nine ten"
        );
    }

    #[test]
    fn test_title_ellipsizes_long_openings() {
        let content = "extraordinarily protracted introductory formulation concerning overall matters generally speaking here";
        let title = slide_title_for(content, 0);
        assert!(title.ends_with("..."));
        assert_eq!(title.chars().count(), TITLE_TRUNCATE_CHARS + 3);
    }

    #[test]
    fn test_title_fallback_names_the_slide() {
        assert_eq!(slide_title_for("   ", 4), "Slide 5");
    }

    #[test]
    fn test_topics_rank_by_frequency() {
        let text = "Revenue grew. Revenue climbed again. Margins held while revenue surged. Margins stayed.";
        let topics = extract_key_topics(text, 3);
        assert_eq!(topics[0], "revenue");
        assert_eq!(topics[1], "margins");
    }

    #[test]
    fn test_topics_skip_stopwords_and_short_words() {
        let topics = extract_key_topics("the and about above cat cat cat telescope telescope", 10);
        assert_eq!(topics, vec!["telescope".to_string()]);
    }

    #[test]
    fn test_topics_reject_alphanumeric_mixes() {
        let topics = extract_key_topics("model3 model3 model3 steady steady", 10);
        assert_eq!(topics, vec!["steady".to_string()]);
    }
}
