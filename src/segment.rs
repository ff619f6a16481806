use regex::Regex;
use tracing::debug;

use crate::corpus::Corpus;
use crate::error::{LegoError, LegoResult};

/// Marker line wrapping a Project Gutenberg body, e.g.
/// `*** START OF THE PROJECT GUTENBERG EBOOK ... ***`.
const GUTENBERG_MARKER: &str = r"\*\*\* .*? \*\*\*";

/// How to cut a text into pieces. Dispatch is explicit; there is no
/// runtime type inspection of the separator.
#[derive(Debug, Clone, Default)]
pub enum Separator {
    /// Split on whitespace runs (discards empty pieces).
    #[default]
    Whitespace,
    /// Split on a literal substring.
    Literal(String),
    /// Split on a compiled regular expression.
    Pattern(Regex),
}

impl Separator {
    pub fn literal(sep: impl Into<String>) -> Self {
        Self::Literal(sep.into())
    }

    /// Compile `pattern` into a `Pattern` separator. A malformed pattern
    /// is an `InvalidSeparator` error.
    pub fn pattern(pattern: &str) -> LegoResult<Self> {
        Ok(Self::Pattern(Regex::new(pattern)?))
    }
}

/// Splits `text` into one `Corpus` per piece, each trimmed, all sharing
/// `name`.
///
/// `max_split` caps the number of cuts and applies to literal separators
/// only. Empty source text is an `EmptyInput` error.
pub fn split_text(
    text: &str,
    name: &str,
    sep: &Separator,
    max_split: Option<usize>,
) -> LegoResult<Vec<Corpus>> {
    if text.is_empty() {
        return Err(LegoError::EmptyInput);
    }

    let pieces: Vec<&str> = match (sep, max_split) {
        (Separator::Whitespace, _) => text.split_whitespace().collect(),
        (Separator::Literal(lit), Some(n)) => text.splitn(n + 1, lit.as_str()).collect(),
        (Separator::Literal(lit), None) => text.split(lit.as_str()).collect(),
        (Separator::Pattern(re), _) => re.split(text).collect(),
    };
    debug!("split text into {} segments", pieces.len());

    Ok(pieces
        .into_iter()
        .map(|piece| Corpus::new(piece.trim(), name))
        .collect())
}

/// Extracts the analyzable body of a Project Gutenberg file: the segment
/// between the header and footer markers (segment index 1).
///
/// Fewer than 2 segments means the marker never matched; that is an
/// `InsufficientSegments` error, never a silent fallback to the full
/// text.
pub fn from_gutenberg(text: &str, name: &str) -> LegoResult<Corpus> {
    let sep = Separator::pattern(GUTENBERG_MARKER)?;
    let segments = split_text(text, name, &sep, None)?;

    let found = segments.len();
    segments
        .into_iter()
        .nth(1)
        .ok_or(LegoError::InsufficientSegments { found })
}

/// Concatenates the constituent texts with newline separators into one
/// new corpus, re-tokenized from scratch.
pub fn combine(corpora: &[Corpus], set_name: &str) -> Corpus {
    let text = corpora
        .iter()
        .map(|corpus| corpus.text())
        .collect::<Vec<_>>()
        .join("\n");
    Corpus::new(text, set_name)
}
