//! Embedded prompt templates, filled by `{{PLACEHOLDER}}` substitution

use super::types::{BookOutline, Perspective, Tone};

const CASUAL_SYSTEM: &str = include_str!("../../prompts/outline/casual.system.md");
const CASUAL_USER: &str = include_str!("../../prompts/outline/casual.user.md");
const FORMAL_SYSTEM: &str = include_str!("../../prompts/outline/formal.system.md");
const FORMAL_USER: &str = include_str!("../../prompts/outline/formal.user.md");
const ACADEMIC_SYSTEM: &str = include_str!("../../prompts/outline/academic.system.md");
const ACADEMIC_USER: &str = include_str!("../../prompts/outline/academic.user.md");
const STORYTELLING_SYSTEM: &str = include_str!("../../prompts/outline/storytelling.system.md");
const STORYTELLING_USER: &str = include_str!("../../prompts/outline/storytelling.user.md");

const MERGE_SYSTEM: &str = include_str!("../../prompts/merge.system.md");
const MERGE_USER: &str = include_str!("../../prompts/merge.user.md");
const CRITIQUE_SYSTEM: &str = include_str!("../../prompts/critique.system.md");
const CRITIQUE_USER: &str = include_str!("../../prompts/critique.user.md");

/// Header of the synthetic assistant turn carrying reference material
pub const REFERENCE_PREFIX: &str =
    "REFERENCE TOC EXAMPLES (analyze structure, numbering, and phrasing):";

/// System and user templates for a tone
pub fn outline_templates(tone: Tone) -> (&'static str, &'static str) {
    match tone {
        Tone::Casual => (CASUAL_SYSTEM, CASUAL_USER),
        Tone::Formal => (FORMAL_SYSTEM, FORMAL_USER),
        Tone::Academic => (ACADEMIC_SYSTEM, ACADEMIC_USER),
        Tone::Storytelling => (STORYTELLING_SYSTEM, STORYTELLING_USER),
    }
}

pub fn outline_system(tone: Tone) -> &'static str {
    outline_templates(tone).0.trim()
}

pub fn outline_user(tone: Tone, topic: &str, num_chapters: usize, perspective: Perspective) -> String {
    let body = outline_templates(tone)
        .1
        .trim()
        .replace("{{TOPIC}}", topic)
        .replace("{{NUM_CHAPTERS}}", &num_chapters.to_string());
    format!("{}\n\n{}", body, perspective.instruction())
}

pub fn merge_system() -> &'static str {
    MERGE_SYSTEM.trim()
}

pub fn merge_user(topic: &str, num_chapters: usize, tone: Tone, candidates: &str) -> String {
    MERGE_USER
        .trim()
        .replace("{{TOPIC}}", topic)
        .replace("{{NUM_CHAPTERS}}", &num_chapters.to_string())
        .replace("{{TONE}}", tone.as_str())
        .replace("{{CANDIDATES}}", candidates)
}

pub fn critique_system() -> &'static str {
    CRITIQUE_SYSTEM.trim()
}

pub fn critique_user(topic: &str, num_chapters: usize, tone: Tone, outline: &str) -> String {
    CRITIQUE_USER
        .trim()
        .replace("{{TOPIC}}", topic)
        .replace("{{NUM_CHAPTERS}}", &num_chapters.to_string())
        .replace("{{TONE}}", tone.as_str())
        .replace("{{OUTLINE}}", outline)
}

/// Render an outline as a numbered text block for merge and critique prompts
pub fn render_outline(label: &str, outline: &BookOutline) -> String {
    let mut block = format!("{}: {}\n", label, outline.title);
    for (i, chapter) in outline.chapters.iter().enumerate() {
        block.push_str(&format!("  {}. {} - {}\n", i + 1, chapter.title, chapter.summary));
        if !chapter.subtopics.is_empty() {
            block.push_str(&format!("     Subtopics: {}\n", chapter.subtopics.join("; ")));
        }
    }
    block
}
