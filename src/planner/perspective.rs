//! One candidate outline per editorial perspective

use tracing::{debug, info, warn};

use super::context::compose_messages;
use super::fallback::FallbackPlanBuilder;
use super::prompts;
use super::reconcile::reconcile;
use super::types::{BookOutline, Perspective, Tone};
use crate::config::PlanningConfig;
use crate::parser::{extract_json, OutlineShape};
use crate::provider::{LanguageModelClient, RequestKind};

pub struct PerspectiveOutlineGenerator<'a> {
    client: &'a LanguageModelClient,
    fallback: &'a FallbackPlanBuilder,
    settings: &'a PlanningConfig,
}

impl<'a> PerspectiveOutlineGenerator<'a> {
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

    /// Ask for a `num_chapters` outline biased toward `perspective`.
    ///
    /// Unparseable output yields the fallback outline for the same topic and count.
    pub async fn generate(
        &self,
        topic: &str,
        num_chapters: usize,
        tone: Tone,
        perspective: Perspective,
        reference: &str,
    ) -> BookOutline {
        info!(
            "Generating {} outline ({} tone, {} chapters)",
            perspective, tone, num_chapters
        );

        let messages = compose_messages(
            prompts::outline_system(tone),
            reference,
            self.settings.max_context_chars,
            prompts::outline_user(tone, topic, num_chapters, perspective),
        );
        let kind = RequestKind::Outline {
            topic: topic.to_string(),
            num_chapters,
        };
        let raw = self
            .client
            .complete(
                &messages,
                self.settings.temperature,
                self.settings.timeout(),
                &kind,
            )
            .await;

        match extract_json(&raw) {
            Some(object) => {
                let shape = OutlineShape::decode(&object);
                debug!("{} outline decoded as {:?}", perspective, shape_name(&shape));
                reconcile(
                    shape,
                    topic,
                    num_chapters,
                    &self.fallback.book_title(topic),
                    self.fallback,
                )
            }
            None => {
                warn!(
                    "Could not parse {} outline, using fallback chapters",
                    perspective
                );
                self.fallback.build(topic, num_chapters)
            }
        }
    }
}

fn shape_name(shape: &OutlineShape) -> &'static str {
    match shape {
        OutlineShape::Parts { .. } => "parts",
        OutlineShape::Chapters { .. } => "chapters",
        OutlineShape::Unrecognized { .. } => "unrecognized",
    }
}
