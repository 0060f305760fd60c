//! Combines candidate outlines into one

use tracing::{info, warn};

use super::context::{compose_messages, truncate_chars};
use super::fallback::FallbackPlanBuilder;
use super::prompts;
use super::reconcile::reconcile;
use super::types::{BookOutline, Tone};
use crate::config::PlanningConfig;
use crate::parser::{extract_json, OutlineShape};
use crate::provider::{LanguageModelClient, RequestKind};

pub struct OutlineMerger<'a> {
    client: &'a LanguageModelClient,
    fallback: &'a FallbackPlanBuilder,
    settings: &'a PlanningConfig,
}

impl<'a> OutlineMerger<'a> {
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

    /// Merge `candidates` into a single outline of exactly `num_chapters` chapters.
    ///
    /// On unparseable output the first candidate is returned as is.
    pub async fn merge(
        &self,
        topic: &str,
        num_chapters: usize,
        tone: Tone,
        candidates: &[BookOutline],
        reference: &str,
    ) -> BookOutline {
        let Some(first) = candidates.first() else {
            warn!("No candidate outlines to merge, using fallback outline");
            return self.fallback.build(topic, num_chapters);
        };

        info!("Merging {} candidate outlines", candidates.len());

        let rendered = candidates
            .iter()
            .enumerate()
            .map(|(i, candidate)| prompts::render_outline(&format!("Candidate {}", i + 1), candidate))
            .collect::<Vec<_>>()
            .join("\n");
        let rendered = truncate_chars(&rendered, self.settings.max_candidates_chars);

        let messages = compose_messages(
            prompts::merge_system(),
            reference,
            self.settings.max_context_chars,
            prompts::merge_user(topic, num_chapters, tone, &rendered),
        );
        let kind = RequestKind::Outline {
            topic: topic.to_string(),
            num_chapters,
        };
        let raw = self
            .client
            .complete(
                &messages,
                self.settings.merge_temperature,
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
                &first.title,
                self.fallback,
            ),
            None => {
                warn!("No usable merged outline, keeping the first candidate");
                first.clone()
            }
        }
    }
}
