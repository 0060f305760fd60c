//! Runs the outline pipeline: four perspectives, one merge, one critique

use std::time::Instant;
use tracing::info;

use super::context::with_additional_content;
use super::critic::OutlineCritic;
use super::fallback::FallbackPlanBuilder;
use super::merger::OutlineMerger;
use super::perspective::PerspectiveOutlineGenerator;
use super::types::{BookOutline, Perspective, Tone};
use crate::config::Config;
use crate::error::PlannerError;
use crate::provider::LanguageModelClient;

/// Owns the client and the shared fallback builder for the lifetime of a run
pub struct Orchestrator {
    client: LanguageModelClient,
    fallback: FallbackPlanBuilder,
    config: Config,
}

impl Orchestrator {
    pub fn new(client: LanguageModelClient, config: Config) -> Self {
        Self {
            client,
            fallback: FallbackPlanBuilder::new(),
            config,
        }
    }

    pub fn client(&self) -> &LanguageModelClient {
        &self.client
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Produce the final outline for `topic`.
    ///
    /// Fails only when the caller's input is invalid; every model failure is
    /// absorbed by the individual steps.
    pub async fn build_outline(
        &self,
        topic: &str,
        num_chapters: usize,
        tone: Tone,
        additional_content: Option<&str>,
        reference: &str,
    ) -> Result<BookOutline, PlannerError> {
        let topic = topic.trim();
        if topic.is_empty() {
            return Err(PlannerError::EmptyTopic);
        }
        if num_chapters == 0 || num_chapters > self.config.max_chapters {
            return Err(PlannerError::ChapterCount {
                requested: num_chapters,
                max: self.config.max_chapters,
            });
        }

        let start = Instant::now();
        let reference = with_additional_content(reference, additional_content);
        let settings = &self.config.planning;

        info!(
            "Planning '{}' with {} chapters ({} tone) using {}",
            topic,
            num_chapters,
            tone,
            self.client.describe()
        );

        let generator = PerspectiveOutlineGenerator::new(&self.client, &self.fallback, settings);
        let mut candidates = Vec::with_capacity(Perspective::ALL.len());
        for perspective in Perspective::ALL {
            let candidate = generator
                .generate(topic, num_chapters, tone, perspective, &reference)
                .await;
            candidates.push(candidate);
        }

        let merged = OutlineMerger::new(&self.client, &self.fallback, settings)
            .merge(topic, num_chapters, tone, &candidates, &reference)
            .await;
        drop(candidates);

        let outline = OutlineCritic::new(&self.client, &self.fallback, settings)
            .critique(&merged, topic, num_chapters, tone, &reference)
            .await;

        info!(
            "Outline '{}' ready with {} chapters in {:?}",
            outline.title,
            outline.chapters.len(),
            start.elapsed()
        );
        Ok(outline)
    }
}
