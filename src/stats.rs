use rayon::prelude::*;

use crate::error::{LegoError, LegoResult};

/// Round to 2 decimal places, the precision every reported statistic
/// carries.
pub fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Normalizing sum of the Zipf distribution: `sum over i in 1..=n of 1/i^s`.
///
/// The sum deliberately ranges over the total token count `n`, not the
/// vocabulary size. Result-compatibility depends on this; do not swap in
/// the textbook normalizer.
fn zipf_norm(n: usize, s: f64) -> f64 {
    (1..=n as u64)
        .into_par_iter()
        .map(|i| 1.0 / (i as f64).powf(s))
        .sum()
}

/// Theoretical Zipf proportion of the word at rank `k` in a corpus of `n`
/// tokens: `(1/k^s) / sum over i in 1..=n of (1/i^s)`.
///
/// Defined for `s > 0` and `n >= 1`; anything else is unspecified.
pub fn classic_zipf(n: usize, k: f64, s: f64) -> f64 {
    (1.0 / k.powf(s)) / zipf_norm(n, s)
}

/// `classic_zipf` applied element-wise over an ordered rank sequence.
/// Output order matches input order; the normalizer is computed once.
pub fn vectorized_zipf(n: usize, ranks: &[usize], s: f64) -> Vec<f64> {
    let norm = zipf_norm(n, s);
    ranks
        .par_iter()
        .map(|&k| (1.0 / (k as f64).powf(s)) / norm)
        .collect()
}

/// Chi-square goodness-of-fit statistic: `sum of (observed - expected)^2
/// / expected`, rounded to 2 decimals.
///
/// Sequence lengths must match. An expected value of exactly 0 is a
/// caller error and is not guarded here; the Zipf predictor never
/// produces one for `n >= 1`.
pub fn chi_square(observed: &[f64], expected: &[f64]) -> LegoResult<f64> {
    if observed.len() != expected.len() {
        return Err(LegoError::LengthMismatch {
            observed: observed.len(),
            expected: expected.len(),
        });
    }

    let chi: f64 = observed
        .iter()
        .zip(expected)
        .map(|(o, e)| (o - e).powi(2) / e)
        .sum();

    Ok(round2(chi))
}
