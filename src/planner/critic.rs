//! Best-effort revision of a single outline

use tracing::{info, warn};

use super::context::compose_messages;
use super::fallback::FallbackPlanBuilder;
use super::prompts;
use super::reconcile::reconcile;
use super::types::{BookOutline, Tone};
use crate::config::PlanningConfig;
use crate::parser::{extract_json, OutlineShape};
use crate::provider::{LanguageModelClient, RequestKind};

pub struct OutlineCritic<'a> {
    client: &'a LanguageModelClient,
    fallback: &'a FallbackPlanBuilder,
    settings: &'a PlanningConfig,
}

impl<'a> OutlineCritic<'a> {
    pub fn new(
        client: &'a LanguageModelClient,
        fallback: &'a FallbackPlanBuilder,
        settings: &'a PlanningConfig,
    ) -> Self {
        Self {
            client,
            fallback,
            settings,
        }
    }

    /// Ask for a revised outline. Unparseable output leaves `outline` untouched.
    pub async fn critique(
        &self,
        outline: &BookOutline,
        topic: &str,
        num_chapters: usize,
        tone: Tone,
        reference: &str,
    ) -> BookOutline {
        info!("Critiquing outline '{}'", outline.title);

        let rendered = prompts::render_outline("Outline", outline);
        let messages = compose_messages(
            prompts::critique_system(),
            reference,
            self.settings.max_context_chars,
            prompts::critique_user(topic, num_chapters, tone, &rendered),
        );
        let kind = RequestKind::Outline {
            topic: topic.to_string(),
            num_chapters,
        };
        let raw = self
            .client
            .complete(
                &messages,
                self.settings.critique_temperature,
                self.settings.timeout(),
                &kind,
            )
            .await;

        let shape = extract_json(&raw)
            .map(|object| OutlineShape::decode(&object))
            .filter(OutlineShape::has_chapters);

        match shape {
            Some(shape) => reconcile(
                shape,
                topic,
                num_chapters,
                &outline.title,
                self.fallback,
            ),
            None => {
                warn!("No usable critique, keeping the outline unchanged");
                outline.clone()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProviderError;
    use crate::planner::types::ChapterPlan;
    use crate::provider::testing::{client, ScriptedModel};

    #[tokio::test]
    async fn test_unparseable_critique_keeps_input() {
        let model = ScriptedModel::unparseable();
        let client = client(model);
        let fallback = FallbackPlanBuilder::new();
        let settings = PlanningConfig::default();
        let input = fallback.build("Rust", 4);

        let revised = OutlineCritic::new(&client, &fallback, &settings)
            .critique(&input, "Rust", 4, Tone::Academic, "")
            .await;
        assert_eq!(revised, input);
    }

    #[tokio::test]
    async fn test_revision_is_reconciled() {
        let model = ScriptedModel::replies(&[r#"{"chapters": [
            {"chapter_number": 1, "title": "Chapter 9: Better start", "subtopics": ["a"]}
        ]}"#]);
        let client = client(model.clone());
        let fallback = FallbackPlanBuilder::new();
        let settings = PlanningConfig::default();
        let input = fallback.build("Rust", 3);

        let revised = OutlineCritic::new(&client, &fallback, &settings)
            .critique(&input, "Rust", 3, Tone::Casual, "")
            .await;
        assert_eq!(revised.title, input.title);
        assert_eq!(revised.chapters.len(), 3);
        assert_eq!(revised.chapters[0].title, "Chapter 1: Better start");

        let calls = model.calls();
        let user = &calls[0].last().unwrap().content;
        assert!(user.contains("Outline: The Complete Guide to Rust"));
    }

    #[tokio::test]
    async fn test_backend_error_keeps_input() {
        let model = ScriptedModel::new(vec![Err(ProviderError::Status {
            code: 503,
            body: r#"{"error":{"message":"Service Unavailable","type":"server_error","code":"service_unavailable"}}"#.to_string(),
        })]);
        let client = client(model);
        let fallback = FallbackPlanBuilder::new();
        let settings = PlanningConfig::default();
        let input = BookOutline {
            title: "Merged Good Outline".to_string(),
            chapters: ["Ownership", "Borrowing", "Lifetimes"]
                .iter()
                .enumerate()
                .map(|(i, name)| ChapterPlan {
                    title: format!("Chapter {}: {}", i + 1, name),
                    summary: format!("All about {}.", name),
                    subtopics: vec![name.to_string()],
                })
                .collect(),
        };

        let revised = OutlineCritic::new(&client, &fallback, &settings)
            .critique(&input, "Rust", 3, Tone::Casual, "")
            .await;
        assert_eq!(revised, input);
    }
}
