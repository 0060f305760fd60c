//! Turns a decoded outline shape into a `BookOutline` with exactly the requested chapter count

use regex::Regex;

use super::fallback::FallbackPlanBuilder;
use super::types::{BookOutline, ChapterPlan};
use crate::parser::{OutlineShape, RawChapter, RawSection};

const MAX_SUBTOPICS: usize = 5;
const MAX_SUMMARY_SECTIONS: usize = 4;

/// "Chapter" plus a digit, roman or spelled-out number, with optional separator
const CHAPTER_PREFIX: &str = concat!(
    r"(?i)^\s*chapter\s+(?:\d+|[ivx]+|one|two|three|four|five|six|seven|eight|nine|ten|",
    r"eleven|twelve|thirteen|fourteen|fifteen|sixteen|seventeen|eighteen|nineteen|twenty)",
    r"\b\s*[:.\-]?\s*"
);

/// Normalize a decoded shape. `default_title` is used when the model gave no title.
pub fn reconcile(
    shape: OutlineShape,
    topic: &str,
    num_chapters: usize,
    default_title: &str,
    fallback: &FallbackPlanBuilder,
) -> BookOutline {
    let title = shape
        .title()
        .map(str::to_string)
        .unwrap_or_else(|| default_title.to_string());

    let mut chapters: Vec<ChapterPlan> = Vec::new();

    match shape {
        OutlineShape::Parts { parts, .. } => {
            for part in parts {
                for raw in part.chapters {
                    let position = chapters.len() + 1;
                    chapters.push(from_part_chapter(raw, topic, position));
                }
            }
        }
        OutlineShape::Chapters { chapters: raw, .. } => {
            for entry in raw {
                let position = chapters.len() + 1;
                chapters.push(from_flat_chapter(entry, topic, position));
            }
        }
        OutlineShape::Unrecognized { .. } => {
            tracing::warn!("Model output had no 'parts' or 'chapters' array");
        }
    }

    let parsed = chapters.len();
    fallback.pad_and_truncate(&mut chapters, topic, num_chapters);
    if parsed != num_chapters {
        tracing::debug!(
            "Adjusted chapter count from {} to {} for '{}'",
            parsed,
            num_chapters,
            topic
        );
    }

    BookOutline { title, chapters }
}

fn from_flat_chapter(raw: RawChapter, topic: &str, position: usize) -> ChapterPlan {
    match raw {
        RawChapter::Entry {
            number,
            title,
            summary,
            mut subtopics,
            ..
        } => {
            subtopics.truncate(MAX_SUBTOPICS);
            ChapterPlan {
                title: numbered_title(title.as_deref(), chapter_number(number, position)),
                summary: summary
                    .unwrap_or_else(|| format!("Important topics related to {}.", topic)),
                subtopics,
            }
        }
        RawChapter::Malformed(text) => malformed(&text, topic, position),
    }
}

fn from_part_chapter(raw: RawChapter, topic: &str, position: usize) -> ChapterPlan {
    match raw {
        RawChapter::Entry {
            number,
            title,
            summary,
            subtopics,
            sections,
        } => {
            let number = chapter_number(number, position);
            let (summary, mut subtopics) = if sections.is_empty() {
                let summary = summary.unwrap_or_else(|| {
                    format!("Explores theoretical and applied aspects of {}.", topic)
                });
                (summary, subtopics)
            } else {
                (
                    sections_summary(&sections, number),
                    sections.into_iter().map(|s| s.title).collect(),
                )
            };
            subtopics.truncate(MAX_SUBTOPICS);
            ChapterPlan {
                title: numbered_title(title.as_deref(), number),
                summary,
                subtopics,
            }
        }
        RawChapter::Malformed(text) => malformed(&text, topic, position),
    }
}

fn malformed(text: &str, topic: &str, position: usize) -> ChapterPlan {
    ChapterPlan {
        title: numbered_title(Some(text), position),
        summary: format!("Important concepts related to {}.", topic),
        subtopics: Vec::new(),
    }
}

fn sections_summary(sections: &[RawSection], number: usize) -> String {
    let listed: Vec<String> = sections
        .iter()
        .take(MAX_SUMMARY_SECTIONS)
        .enumerate()
        .map(|(i, section)| format!("{}.{} {}", number, i + 1, section.title))
        .collect();
    format!("Includes sections: {}", listed.join(", "))
}

fn chapter_number(number: Option<u32>, position: usize) -> usize {
    number.map(|n| n as usize).unwrap_or(position)
}

/// Render as "Chapter <n>: <text>", replacing any numbering the model already applied
pub fn numbered_title(title: Option<&str>, number: usize) -> String {
    let raw = title.map(str::trim).unwrap_or_default();
    let text = match Regex::new(CHAPTER_PREFIX) {
        Ok(re) => re.replace(raw, "").trim().to_string(),
        Err(_) => raw.to_string(),
    };
    let text = if text.is_empty() {
        "Untitled Chapter".to_string()
    } else {
        text
    };
    format!("Chapter {}: {}", number, text)
}
