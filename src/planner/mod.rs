//! Outline planning: parallel perspectives reduced to one table of contents
//!
//! The pipeline runs in sequence:
//! 1. Four perspective generators each produce a candidate outline
//! 2. The merger combines the candidates into one outline
//! 3. The critic revises the merged outline
//!
//! Every step returns an outline with exactly the requested chapter count.
//! Unusable model output is replaced by [`FallbackPlanBuilder`] chapters or by
//! the last good outline.

pub mod context;
pub mod critic;
pub mod fallback;
pub mod merger;
pub mod orchestrator;
pub mod perspective;
pub mod prompts;
pub mod reconcile;
pub mod types;

pub use fallback::FallbackPlanBuilder;
pub use orchestrator::Orchestrator;
pub use types::{BookContent, BookOutline, ChapterContent, ChapterPlan, Tone};
