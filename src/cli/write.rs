//! CLI handler for the `write` subcommand

use crate::cli::WriteArgs;
use crate::config::Config;
use crate::output::{book_dir, read_outline, write_book};
use crate::planner::Tone;
use crate::provider::LanguageModelClient;
use crate::writer::write_chapters;
use chrono::Local;

pub async fn execute(args: WriteArgs) -> anyhow::Result<()> {
    let config = Config::load_or_default(&args.config)?;
    let outline = read_outline(&args.outline)?;
    let tone = Tone::parse(&args.tone);

    let client = LanguageModelClient::connect(&config.provider).await;
    if !client.is_available() {
        eprintln!("Model backend unavailable, using offline fallback content");
    }

    println!(
        "Writing {} chapters for '{}'...",
        outline.chapters.len(),
        outline.title
    );
    let book = write_chapters(
        &client,
        &config.writing,
        &outline.title,
        &args.topic,
        &outline.chapters,
        tone,
    )
    .await;

    let base = args.output_dir.unwrap_or(config.output_dir);
    let dir = book_dir(&base, &args.topic, Local::now().date_naive());
    let html = write_book(&dir, &book)?;
    println!("Book written to {}", html.display());

    Ok(())
}
