//! Chapter prose: one model call per planned chapter, no reconciliation

use tracing::info;

use crate::config::WritingConfig;
use crate::planner::{BookContent, ChapterContent, ChapterPlan, Tone};
use crate::provider::{ChatMessage, LanguageModelClient, RequestKind};

const CASUAL_SYSTEM: &str = include_str!("../../prompts/write/casual.md");
const FORMAL_SYSTEM: &str = include_str!("../../prompts/write/formal.md");
const ACADEMIC_SYSTEM: &str = include_str!("../../prompts/write/academic.md");
const STORYTELLING_SYSTEM: &str = include_str!("../../prompts/write/storytelling.md");
const CHAPTER_PROMPT: &str = include_str!("../../prompts/write/chapter.md");

fn system_prompt(tone: Tone) -> &'static str {
    match tone {
        Tone::Casual => CASUAL_SYSTEM,
        Tone::Formal => FORMAL_SYSTEM,
        Tone::Academic => ACADEMIC_SYSTEM,
        Tone::Storytelling => STORYTELLING_SYSTEM,
    }
    .trim()
}

fn chapter_prompt(
    book_title: &str,
    topic: &str,
    chapter: &ChapterPlan,
    index: usize,
    total: usize,
) -> String {
    CHAPTER_PROMPT
        .trim()
        .replace("{{INDEX}}", &index.to_string())
        .replace("{{TOTAL}}", &total.to_string())
        .replace("{{BOOK_TITLE}}", book_title)
        .replace("{{TOPIC}}", topic)
        .replace("{{CHAPTER_TITLE}}", &chapter.title)
        .replace("{{SUMMARY}}", &chapter.summary)
}

/// Write every chapter in order. Titles carry over unchanged.
pub async fn write_chapters(
    client: &LanguageModelClient,
    settings: &WritingConfig,
    book_title: &str,
    topic: &str,
    chapters: &[ChapterPlan],
    tone: Tone,
) -> BookContent {
    let total = chapters.len();
    let kind = RequestKind::Chapter {
        topic: topic.to_string(),
    };
    let mut written = Vec::with_capacity(total);

    for (i, chapter) in chapters.iter().enumerate() {
        info!("Writing chapter {}/{}: {}", i + 1, total, chapter.title);
        let messages = vec![
            ChatMessage::system(system_prompt(tone)),
            ChatMessage::user(chapter_prompt(book_title, topic, chapter, i + 1, total)),
        ];
        let content = client
            .complete(&messages, settings.temperature, settings.timeout(), &kind)
            .await;
        written.push(ChapterContent {
            title: chapter.title.clone(),
            content,
        });
    }

    BookContent {
        title: book_title.to_string(),
        chapters: written,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProviderError;
    use crate::planner::FallbackPlanBuilder;
    use crate::provider::testing::{client, ScriptedModel};
    use crate::provider::Role;

    #[tokio::test]
    async fn test_one_call_per_chapter_in_order() {
        let model = ScriptedModel::replies(&["<h2>One</h2>", "  <h2>Two</h2>\n"]);
        let client = client(model.clone());
        let outline = FallbackPlanBuilder::new().build("Rust", 2);

        let book = write_chapters(
            &client,
            &WritingConfig::default(),
            &outline.title,
            "Rust",
            &outline.chapters,
            Tone::Formal,
        )
        .await;

        assert_eq!(book.title, "The Complete Guide to Rust");
        assert_eq!(book.chapters.len(), 2);
        assert_eq!(book.chapters[0].title, outline.chapters[0].title);
        assert_eq!(book.chapters[0].content, "<h2>One</h2>");
        assert_eq!(book.chapters[1].content, "<h2>Two</h2>");

        let calls = model.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0][0].role, Role::System);
        assert_eq!(calls[0][0].content, FORMAL_SYSTEM.trim());
        assert!(calls[1][1]
            .content
            .starts_with("This is chapter 2 of 2 in the book 'The Complete Guide to Rust' about Rust."));
        assert!(calls[1][1].content.contains(&outline.chapters[1].summary));
    }

    #[tokio::test]
    async fn test_rate_limited_chapter_gets_html_fallback() {
        let model = ScriptedModel::new(vec![Err(ProviderError::RateLimited("429".into()))]);
        let client = client(model);
        let outline = FallbackPlanBuilder::new().build("Rust", 1);

        let book = write_chapters(
            &client,
            &WritingConfig::default(),
            &outline.title,
            "Rust",
            &outline.chapters,
            Tone::Casual,
        )
        .await;
        assert!(book.chapters[0].content.contains("<h2>CORE CONCEPTS</h2>"));
    }

    #[tokio::test]
    async fn test_empty_outline_writes_nothing() {
        let book = write_chapters(
            &LanguageModelClient::offline(),
            &WritingConfig::default(),
            "Empty",
            "Rust",
            &[],
            Tone::Casual,
        )
        .await;
        assert!(book.chapters.is_empty());
    }
}
