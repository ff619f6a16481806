pub mod wordcount;
pub mod zipf;

use std::path::Path;

use clap::Args;
use tracing::info;

use lego::config::{self, LoadedText};
use lego::error::{LegoError, LegoResult};

/// Input/output arguments shared by every subcommand.
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// The path to the text file to analyze
    #[arg(
        short,
        long,
        conflicts_with = "config",
        required_unless_present = "config"
    )]
    pub file: Option<String>,

    /// The path to the configuration file (must be YAML or JSON)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Combine the text from multiple files into a single corpus
    #[arg(long, requires = "config")]
    pub combine: bool,

    /// Strip the Project Gutenberg header and footer before analyzing
    #[arg(long, requires = "file")]
    pub from_gutenberg: bool,

    /// The path to save the results of the analysis (may be TXT or JSON)
    #[arg(short, long)]
    pub save: Option<String>,
}

/// Resolves the input arguments into loaded corpora. A single `--file`
/// names its corpus after the path; `--config` entries carry their own
/// names.
pub fn load_input(args: &InputArgs) -> LegoResult<LoadedText> {
    if let Some(file) = &args.file {
        info!("📂 loading corpus from {}", file);
        let corpus = config::from_file(Path::new(file), file, args.from_gutenberg)?;
        return Ok(LoadedText::Single(corpus));
    }

    if let Some(path) = &args.config {
        info!("🗂  loading file set from {}", path);
        let configs = config::load_config(Path::new(path))?;
        return config::multi_file(&configs, "", args.combine);
    }

    // clap enforces file XOR config; this is the backstop for direct calls.
    Err(LegoError::Config(
        "You must provide a file or configuration file to analyze.".to_string(),
    ))
}
