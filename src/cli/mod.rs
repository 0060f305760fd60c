pub mod generate;
pub mod plan;
pub mod schema;
pub mod write;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bookweaver")]
#[command(
    author,
    version,
    about = "Multi-perspective book outline and chapter generator"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose/debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build a table of contents for a topic
    Plan(PlanArgs),

    /// Write chapter prose for an existing outline
    Write(WriteArgs),

    /// Plan and write a whole book
    Generate(GenerateArgs),

    /// Print JSON Schema for config validation
    Schema,
}

/// Inputs shared by every command that plans an outline
#[derive(Args, Clone)]
pub struct OutlineArgs {
    /// Book topic
    #[arg(value_name = "TOPIC", required = true, num_args = 1..)]
    pub topic: Vec<String>,

    /// Number of chapters
    #[arg(short = 'n', long, default_value_t = 8)]
    pub chapters: usize,

    /// casual, formal, academic or storytelling
    #[arg(long, default_value = "casual")]
    pub tone: String,

    /// Path to config file
    #[arg(short, long, default_value = "bookweaver.yaml")]
    pub config: PathBuf,

    /// Reference material (e.g. sample tables of contents) to ground the outline
    #[arg(long)]
    pub context_file: Option<PathBuf>,

    /// Ideas the outline should incorporate
    #[arg(long, conflicts_with = "additional_file")]
    pub additional: Option<String>,

    /// Read additional ideas from a file
    #[arg(long)]
    pub additional_file: Option<PathBuf>,
}

impl OutlineArgs {
    pub fn topic(&self) -> String {
        self.topic.join(" ")
    }
}

#[derive(Parser, Clone)]
pub struct PlanArgs {
    #[command(flatten)]
    pub outline: OutlineArgs,

    /// Also write the outline as JSON to this path
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print JSON instead of the boxed listing
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser, Clone)]
pub struct WriteArgs {
    /// Outline JSON produced by `plan --output`
    #[arg(long)]
    pub outline: PathBuf,

    /// Topic the book is about
    #[arg(long)]
    pub topic: String,

    #[arg(long, default_value = "casual")]
    pub tone: String,

    #[arg(short, long, default_value = "bookweaver.yaml")]
    pub config: PathBuf,

    /// Override output directory
    #[arg(long)]
    pub output_dir: Option<PathBuf>,
}

#[derive(Parser, Clone)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub outline: OutlineArgs,

    /// Override output directory
    #[arg(long)]
    pub output_dir: Option<PathBuf>,
}
