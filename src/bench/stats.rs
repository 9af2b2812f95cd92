// src/bench/stats.rs

//! Summary statistics of timing distributions, and synthetic timing data
//! for the distribution demonstrations.

use crate::common::{BenchError, BenchResult, NS_PER_SEC};

use ::more_asserts::debug_assert_le;
use ::rand::rngs::StdRng;
use ::rand::{Rng, SeedableRng};
use ::rand_distr::Distribution as _; // for `sample_iter`
use ::rand_distr::{Gumbel, Normal};

/// Percentiles shown by the percentile table.
pub const PERCENTILES_DEFAULT: [f64; 5] = [25.0, 50.0, 75.0, 99.0, 100.0];

/// Seed of [`perf_data_a`] and [`perf_data_b`].
pub const PERF_DATA_SEED: u64 = 0x0bad_5eed;

/// Number of values of [`perf_data_a`] and [`perf_data_b`].
pub const PERF_DATA_LEN: usize = 200;

/// Percentile `p` (`0..=100`) of ascending `sorted`, interpolating linearly
/// between the two closest ranks.
pub fn percentile(sorted: &[f64], p: f64) -> BenchResult<f64> {
    if sorted.is_empty() {
        return Err(BenchError::EmptyData);
    }
    if !(0.0..=100.0).contains(&p) {
        return Err(BenchError::InvalidPercentile(p));
    }
    let rank: f64 = (p / 100.0) * (sorted.len() - 1) as f64;
    let lo: usize = rank.floor() as usize;
    let hi: usize = rank.ceil() as usize;
    debug_assert_le!(hi, sorted.len() - 1);
    let frac: f64 = rank - lo as f64;

    Ok(sorted[lo] + (sorted[hi] - sorted[lo]) * frac)
}

/// Copy of `samples` sorted ascending. `NaN`s sort last.
pub fn sorted_copy(samples: &[f64]) -> Vec<f64> {
    let mut sorted: Vec<f64> = samples.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    sorted
}

/// Each of `percentiles` of `samples`, followed by the interquartile range.
pub fn percentile_table(samples: &[f64], percentiles: &[f64]) -> BenchResult<Vec<f64>> {
    let sorted: Vec<f64> = sorted_copy(samples);
    let mut values: Vec<f64> = Vec::with_capacity(percentiles.len() + 1);
    for p in percentiles.iter() {
        values.push(percentile(&sorted, *p)?);
    }
    values.push(percentile(&sorted, 75.0)? - percentile(&sorted, 25.0)?);

    Ok(values)
}

/// Summary of a distribution of timings.
///
/// Samples are nanoseconds per iteration; `ops` is per second.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Distribution {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub median: f64,
    /// sample standard deviation (`n - 1`)
    pub stddev: f64,
    pub q1: f64,
    pub q3: f64,
    pub iqr: f64,
    /// count of samples further than one `stddev` from `mean`
    pub outliers_stddev: usize,
    /// count of samples outside `q1 - 1.5 iqr ..= q3 + 1.5 iqr`
    pub outliers_iqr: usize,
    /// operations per second
    pub ops: f64,
    pub rounds: usize,
}

impl Distribution {
    pub fn from_samples(samples: &[f64]) -> BenchResult<Distribution> {
        if samples.is_empty() {
            return Err(BenchError::EmptyData);
        }
        let sorted: Vec<f64> = sorted_copy(samples);
        let n: usize = sorted.len();
        let mean: f64 = sorted.iter().sum::<f64>() / n as f64;
        let stddev: f64 = if n > 1 {
            let var: f64 = sorted.iter().map(|x| (x - mean) * (x - mean)).sum::<f64>() / (n - 1) as f64;
            var.sqrt()
        } else {
            0.0
        };
        let q1: f64 = percentile(&sorted, 25.0)?;
        let q3: f64 = percentile(&sorted, 75.0)?;
        let iqr: f64 = q3 - q1;
        let fence_lo: f64 = q1 - 1.5 * iqr;
        let fence_hi: f64 = q3 + 1.5 * iqr;
        let outliers_stddev: usize = sorted
            .iter()
            .filter(|x| **x < mean - stddev || **x > mean + stddev)
            .count();
        let outliers_iqr: usize = sorted
            .iter()
            .filter(|x| **x < fence_lo || **x > fence_hi)
            .count();
        let ops: f64 = if mean > 0.0 { NS_PER_SEC / mean } else { 0.0 };

        Ok(Distribution {
            min: sorted[0],
            max: sorted[n - 1],
            mean,
            median: percentile(&sorted, 50.0)?,
            stddev,
            q1,
            q3,
            iqr,
            outliers_stddev,
            outliers_iqr,
            ops,
            rounds: n,
        })
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// synthetic distributions
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// `n` values of a normal distribution.
pub fn normal<R: Rng>(loc: f64, scale: f64, n: usize, rng: &mut R) -> BenchResult<Vec<f64>> {
    let distr = Normal::new(loc, scale).map_err(|err| BenchError::InvalidDistribution {
        name: "normal",
        reason: err.to_string(),
    })?;

    Ok(distr.sample_iter(rng).take(n).collect())
}

/// `n` values of a Gumbel distribution.
pub fn gumbel<R: Rng>(loc: f64, scale: f64, n: usize, rng: &mut R) -> BenchResult<Vec<f64>> {
    let distr = Gumbel::new(loc, scale).map_err(|err| BenchError::InvalidDistribution {
        name: "Gumbel",
        reason: err.to_string(),
    })?;

    Ok(distr.sample_iter(rng).take(n).collect())
}

/// Synthetic timings centered on 100 with little spread.
pub fn perf_data_a(seed: u64) -> BenchResult<Vec<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    normal(100.0, 4.0, PERF_DATA_LEN, &mut rng)
}

/// Synthetic timings near 75 with a long right tail.
pub fn perf_data_b(seed: u64) -> BenchResult<Vec<f64>> {
    let mut rng = StdRng::seed_from_u64(seed.wrapping_add(1));
    gumbel(75.0, 5.0, PERF_DATA_LEN, &mut rng)
}
