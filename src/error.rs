use thiserror::Error;

#[derive(Error, Debug)]
pub enum LegoError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML Parsing Error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Text is empty")]
    EmptyInput,

    #[error("The observed and expected values must have the same length (got {observed} and {expected})")]
    LengthMismatch { observed: usize, expected: usize },

    #[error("Invalid separator pattern: {0}")]
    InvalidSeparator(#[from] regex::Error),

    #[error("Expected at least 2 text segments, found {found}")]
    InsufficientSegments { found: usize },
}

pub type LegoResult<T> = Result<T, LegoError>;
