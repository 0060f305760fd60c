//! CLI handler for the `plan` subcommand

use crate::cli::{OutlineArgs, PlanArgs};
use crate::config::Config;
use crate::planner::{BookOutline, Orchestrator, Tone};
use crate::provider::LanguageModelClient;
use anyhow::Context;
use std::fs;
use std::path::Path;
use tracing::info;

pub async fn execute(args: PlanArgs) -> anyhow::Result<()> {
    let config = Config::load_or_default(&args.outline.config)?;
    let (outline, _) = build_outline(&args.outline, config).await?;

    if let Some(path) = &args.output {
        crate::output::write_outline(path, &outline)?;
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outline)?);
    } else {
        print!("{}", crate::output::render_outline(&outline));
        if let Some(path) = &args.output {
            println!("\nOutline saved to {}", path.display());
        }
    }

    Ok(())
}

/// Connect to the backend and run the outline pipeline, handing the orchestrator back for writing
pub(crate) async fn build_outline(
    args: &OutlineArgs,
    config: Config,
) -> anyhow::Result<(BookOutline, Orchestrator)> {
    let topic = args.topic();
    let tone = Tone::parse(&args.tone);
    let reference = read_optional(args.context_file.as_deref())?.unwrap_or_default();
    let additional = match &args.additional_file {
        Some(path) => read_optional(Some(path.as_path()))?,
        None => args.additional.clone(),
    };

    let client = LanguageModelClient::connect(&config.provider).await;
    if !client.is_available() {
        eprintln!("Model backend unavailable, using offline fallback content");
    }
    info!("Using {}", client.describe());

    let orchestrator = Orchestrator::new(client, config);
    let outline = orchestrator
        .build_outline(
            &topic,
            args.chapters,
            tone,
            additional.as_deref(),
            &reference,
        )
        .await?;

    Ok((outline, orchestrator))
}

fn read_optional(path: Option<&Path>) -> anyhow::Result<Option<String>> {
    path.map(|p| {
        fs::read_to_string(p).with_context(|| format!("Failed to read {}", p.display()))
    })
    .transpose()
}
