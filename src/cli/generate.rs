//! CLI handler for the `generate` subcommand: plan, then write

use crate::cli::GenerateArgs;
use crate::config::Config;
use crate::output::{book_dir, render_outline, write_book, write_outline};
use crate::planner::Tone;
use crate::writer::write_chapters;
use chrono::Local;

pub async fn execute(args: GenerateArgs) -> anyhow::Result<()> {
    let config = Config::load_or_default(&args.outline.config)?;
    let base = args
        .output_dir
        .clone()
        .unwrap_or_else(|| config.output_dir.clone());

    let (outline, orchestrator) = super::plan::build_outline(&args.outline, config).await?;
    print!("{}", render_outline(&outline));

    let topic = args.outline.topic();
    let dir = book_dir(&base, &topic, Local::now().date_naive());
    write_outline(&dir.join("outline.json"), &outline)?;

    println!("\nWriting {} chapters...", outline.chapters.len());
    let book = write_chapters(
        orchestrator.client(),
        &orchestrator.config().writing,
        &outline.title,
        &topic,
        &outline.chapters,
        Tone::parse(&args.outline.tone),
    )
    .await;

    let html = write_book(&dir, &book)?;
    println!("Book written to {}", html.display());

    Ok(())
}
