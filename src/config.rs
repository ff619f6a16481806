use std::fs;
use std::path::Path;

use serde::Deserialize;
use strum_macros::{Display, EnumString};
use tracing::info;

use crate::corpus::Corpus;
use crate::error::{LegoError, LegoResult};
use crate::segment;

/// One file entry of a multi-file analysis set.
#[derive(Debug, Clone, Deserialize)]
pub struct FileConfig {
    pub fpath: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub is_gutenberg: bool,
}

/// Supported configuration file formats, dispatched on extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum ConfigFormat {
    Json,
    Yaml,
}

impl ConfigFormat {
    pub fn from_path(path: &Path) -> LegoResult<Self> {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        ext.parse().map_err(|_| {
            LegoError::Config(format!(
                "The configuration file must be either JSON or YAML, got '{}'",
                path.display()
            ))
        })
    }
}

/// Loads a file-set configuration (a list of `FileConfig` entries) from a
/// JSON or YAML file.
pub fn load_config(path: &Path) -> LegoResult<Vec<FileConfig>> {
    let format = ConfigFormat::from_path(path)?;
    let content = fs::read_to_string(path)?;

    let configs: Vec<FileConfig> = match format {
        ConfigFormat::Json => serde_json::from_str(&content)?,
        ConfigFormat::Yaml => serde_yaml::from_str(&content)?,
    };
    info!("loaded {} file entries from {}", configs.len(), path.display());

    Ok(configs)
}

/// Result of loading an analysis unit: one corpus (single file, or a
/// combined set) or one corpus per file.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadedText {
    Single(Corpus),
    Many(Vec<Corpus>),
}

/// Builds a `Corpus` from the contents of a file. With `is_gutenberg`,
/// the Project Gutenberg header and footer are stripped first.
pub fn from_file(path: &Path, name: &str, is_gutenberg: bool) -> LegoResult<Corpus> {
    let text = fs::read_to_string(path)?;

    if is_gutenberg {
        return segment::from_gutenberg(&text, name);
    }
    Ok(Corpus::new(text, name))
}

/// Loads every file of a configuration set. With `combine`, the texts are
/// joined into a single corpus named `set_name`; otherwise each file
/// becomes its own corpus.
pub fn multi_file(configs: &[FileConfig], set_name: &str, combine: bool) -> LegoResult<LoadedText> {
    let mut corpora = Vec::with_capacity(configs.len());
    for config in configs {
        let corpus = from_file(Path::new(&config.fpath), &config.name, config.is_gutenberg)?;
        corpora.push(corpus);
    }

    if combine {
        return Ok(LoadedText::Single(segment::combine(&corpora, set_name)));
    }
    Ok(LoadedText::Many(corpora))
}
