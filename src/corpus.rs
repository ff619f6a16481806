use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

use crate::stats::round2;

/// ASCII punctuation trimmed from token edges. Interior punctuation
/// (contractions, hyphenated words) is preserved.
const PUNCTUATION: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Normalizes raw text into comparable word tokens: split on whitespace,
/// lowercase, strip leading/trailing punctuation from each piece.
///
/// A piece that is all punctuation strips down to the empty string and is
/// kept as a token; dropping it would break count parity with the
/// frequency table.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    lowered
        .split_whitespace()
        .map(|piece| {
            piece
                .trim_matches(|c: char| PUNCTUATION.contains(c))
                .to_string()
        })
        .collect()
}

/// Word -> occurrence count, materialized in descending-count order.
///
/// The sort is stable: words with equal counts stay in first-occurrence
/// order. Every derived view (top-N, ranks, legomena) is a read-only
/// projection of that order.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    entries: Vec<(String, u32)>,
    counts: HashMap<String, u32>,
    total: usize,
}

impl FrequencyTable {
    pub fn from_tokens(tokens: &[String]) -> Self {
        let mut counts: HashMap<String, u32> = HashMap::new();
        let mut order: Vec<String> = Vec::new();

        for token in tokens {
            match counts.get_mut(token) {
                Some(n) => *n += 1,
                None => {
                    counts.insert(token.clone(), 1);
                    order.push(token.clone());
                }
            }
        }

        // `order` holds first occurrences; the sort is stable, so ties
        // keep that order.
        let mut entries: Vec<(String, u32)> = order
            .into_iter()
            .map(|word| {
                let n = counts[&word];
                (word, n)
            })
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1));

        Self {
            entries,
            counts,
            total: tokens.len(),
        }
    }

    /// Occurrence count for a word, if present.
    pub fn count(&self, word: &str) -> Option<u32> {
        self.counts.get(word).copied()
    }

    /// Number of distinct words (vocabulary size R).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in table order: descending count, first-occurrence ties.
    pub fn entries(&self) -> &[(String, u32)] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.entries.iter().map(|(w, n)| (w.as_str(), *n))
    }

    /// First `n` entries of the ordered table. `n = 0` is empty; `n`
    /// beyond the vocabulary returns the whole table.
    pub fn top_words(&self, n: usize) -> &[(String, u32)] {
        &self.entries[..n.min(self.entries.len())]
    }

    /// The rank sequence: counts only, in table order (rank 1 first).
    pub fn rank_words(&self) -> Vec<u32> {
        self.entries.iter().map(|(_, n)| *n).collect()
    }

    /// Total token count, including empty-string tokens. Always equals
    /// the sum of all counts in the table.
    pub fn total_words(&self) -> usize {
        self.total
    }

    /// Words occurring exactly `n` times, in table order.
    pub fn legomena(&self, n: u32) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|(_, count)| *count == n)
            .map(|(word, _)| word.as_str())
            .collect()
    }
}

/// Ratios of words used exactly once, twice, three and four times.
///
/// Each value is `|legomena(n)| / max(min of the four counts, 1)`, rounded
/// to 2 decimals. When any band is empty the denominator clamps to 1 and
/// the "ratios" are the raw band counts; downstream consumers rely on
/// that, so it is kept as-is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LegomenaRatio {
    pub hapax: f64,
    pub dis: f64,
    pub tris: f64,
    pub tetrakis: f64,
}

impl LegomenaRatio {
    fn from_table(table: &FrequencyTable) -> Self {
        let bands: Vec<usize> = (1..=4).map(|n| table.legomena(n).len()).collect();
        let denom = bands.iter().copied().min().unwrap_or(0).max(1) as f64;

        Self {
            hapax: round2(bands[0] as f64 / denom),
            dis: round2(bands[1] as f64 / denom),
            tris: round2(bands[2] as f64 / denom),
            tetrakis: round2(bands[3] as f64 / denom),
        }
    }
}

/// Parameters of the Zipf distribution for a corpus.
///
/// `n` is the total token count (not vocabulary size), `ranks` is `1..=R`,
/// `s` the exponent.
#[derive(Debug, Clone, PartialEq)]
pub struct ZipfParams {
    pub n: usize,
    pub ranks: Vec<usize>,
    pub s: f64,
}

/// A single analyzable body of text plus its derived statistics.
///
/// All derived fields are computed once at construction; a `Corpus` is
/// immutable afterwards. Re-analysis means building a new one.
#[derive(Debug, Clone)]
pub struct Corpus {
    name: String,
    text: String,
    table: FrequencyTable,
    legomena_ratio: LegomenaRatio,
}

impl Corpus {
    pub fn new(text: impl Into<String>, name: impl Into<String>) -> Self {
        let text = text.into();
        let table = FrequencyTable::from_tokens(&tokenize(&text));
        let legomena_ratio = LegomenaRatio::from_table(&table);

        Self {
            name: name.into(),
            text,
            table,
            legomena_ratio,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn frequency_table(&self) -> &FrequencyTable {
        &self.table
    }

    pub fn legomena_ratio(&self) -> LegomenaRatio {
        self.legomena_ratio
    }

    pub fn total_words(&self) -> usize {
        self.table.total_words()
    }

    pub fn top_words(&self, n: usize) -> &[(String, u32)] {
        self.table.top_words(n)
    }

    pub fn rank_words(&self) -> Vec<u32> {
        self.table.rank_words()
    }

    pub fn legomena(&self, n: u32) -> Vec<&str> {
        self.table.legomena(n)
    }

    /// Fraction of the vocabulary that is hapax legomena, rounded to 2
    /// decimals. 0.0 for an empty vocabulary.
    pub fn percent_hapax(&self) -> f64 {
        if self.table.is_empty() {
            return 0.0;
        }
        round2(self.table.legomena(1).len() as f64 / self.table.len() as f64)
    }

    /// Zipf parameters `(N, ranks, s)` for this corpus.
    ///
    /// With `exclude_legomena`, words occurring 4 times or fewer are
    /// dropped from both the token count and the rank enumeration. They
    /// sit at the tail of the descending table, so the survivors are a
    /// prefix and predicted/observed sequences stay the same length.
    pub fn zipf_params(&self, s: f64, exclude_legomena: bool) -> ZipfParams {
        if exclude_legomena {
            let kept = self
                .table
                .entries()
                .iter()
                .take_while(|(_, count)| *count > 4)
                .count();
            let n = self.table.entries()[..kept]
                .iter()
                .map(|(_, count)| *count as usize)
                .sum();

            ZipfParams {
                n,
                ranks: (1..=kept).collect(),
                s,
            }
        } else {
            ZipfParams {
                n: self.total_words(),
                ranks: (1..=self.table.len()).collect(),
                s,
            }
        }
    }

    /// Returns `n` lines of the text starting at `start`, joined by
    /// newlines.
    pub fn read_lines(&self, n: usize, start: usize) -> String {
        self.text
            .lines()
            .skip(start)
            .take(n)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

// Two corpora are the same analysis unit iff their texts match; names and
// (derived) tables don't participate.
impl PartialEq for Corpus {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for Corpus {}

impl fmt::Display for Corpus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.text.chars().count() > 500 {
            let head: String = self.text.chars().take(500).collect();
            write!(f, "{}...", head)
        } else {
            write!(f, "{}", self.text)
        }
    }
}
