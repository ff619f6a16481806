use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

use crate::corpus::{Corpus, LegomenaRatio};
use crate::error::LegoResult;
use crate::stats;

/// Knobs for a Zipf goodness-of-fit run.
#[derive(Debug, Clone, Copy)]
pub struct ZipfOptions {
    /// The Zipf exponent.
    pub s: f64,
    /// Drop words occurring 4 times or fewer from the fit.
    pub exclude_legomena: bool,
    /// Carry the full predicted/actual sequences in the report.
    pub proportions: bool,
}

impl Default for ZipfOptions {
    fn default() -> Self {
        Self {
            s: 1.0,
            exclude_legomena: false,
            proportions: false,
        }
    }
}

/// Result record of a Zipf analysis. `actual_proportions` carries the
/// observed rank counts, mirroring what the fit itself consumes.
#[derive(Debug, Clone, Serialize)]
pub struct ZipfReport {
    pub name: String,
    pub word_length: usize,
    pub ranks: usize,
    pub zipf_const: f64,
    pub chi2: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub predicted_proportions: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual_proportions: Option<Vec<f64>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct WordCount {
    pub word: String,
    pub count: u32,
}

/// Result record of a word-count analysis.
#[derive(Debug, Clone, Serialize)]
pub struct WordCountReport {
    pub name: String,
    pub top_words: Vec<WordCount>,
    pub legomena_ratio: LegomenaRatio,
    pub percent_hapax_legomena: f64,
}

/// One result record, or one per analyzed corpus. Serializes untagged so
/// a single-file run yields a plain object and a file set yields an
/// array.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ReportSet<T> {
    Single(T),
    Many(Vec<T>),
}

impl<T> ReportSet<T> {
    pub fn items(&self) -> &[T] {
        match self {
            Self::Single(report) => std::slice::from_ref(report),
            Self::Many(reports) => reports.as_slice(),
        }
    }
}

/// Fits the corpus against the theoretical Zipf distribution.
///
/// Predicted proportions are scaled by N into expected counts and tested
/// against the observed rank counts. The observed counts are the
/// denominators of the chi-square sum; every count is >= 1, so the sum is
/// always finite.
pub fn zipf_report(corpus: &Corpus, opts: &ZipfOptions) -> LegoResult<ZipfReport> {
    let params = corpus.zipf_params(opts.s, opts.exclude_legomena);
    debug!(
        name = corpus.name(),
        n = params.n,
        ranks = params.ranks.len(),
        "fitting zipf distribution"
    );

    let predicted = stats::vectorized_zipf(params.n, &params.ranks, params.s);
    let actual: Vec<f64> = corpus
        .rank_words()
        .into_iter()
        .take(params.ranks.len())
        .map(f64::from)
        .collect();

    let predicted_counts: Vec<f64> = predicted.iter().map(|p| p * params.n as f64).collect();
    let chi2 = stats::chi_square(&predicted_counts, &actual)?;

    let (predicted_proportions, actual_proportions) = if opts.proportions {
        (Some(predicted), Some(actual))
    } else {
        (None, None)
    };

    Ok(ZipfReport {
        name: corpus.name().to_string(),
        word_length: params.n,
        ranks: params.ranks.len(),
        zipf_const: params.s,
        chi2,
        predicted_proportions,
        actual_proportions,
    })
}

/// `zipf_report` over a whole file set. Corpora are independent, so the
/// fit fans out across threads; result order matches input order.
pub fn zipf_reports(corpora: &[Corpus], opts: &ZipfOptions) -> LegoResult<Vec<ZipfReport>> {
    corpora
        .par_iter()
        .map(|corpus| zipf_report(corpus, opts))
        .collect()
}

/// Summarizes the frequency profile of a corpus: top-5 words, legomena
/// ratios, and the hapax share of the vocabulary.
pub fn wordcount_report(corpus: &Corpus) -> WordCountReport {
    let top_words = corpus
        .top_words(5)
        .iter()
        .map(|(word, count)| WordCount {
            word: word.clone(),
            count: *count,
        })
        .collect();

    WordCountReport {
        name: corpus.name().to_string(),
        top_words,
        legomena_ratio: corpus.legomena_ratio(),
        percent_hapax_legomena: corpus.percent_hapax(),
    }
}

pub fn wordcount_reports(corpora: &[Corpus]) -> Vec<WordCountReport> {
    corpora.par_iter().map(wordcount_report).collect()
}
