// src/common.rs
//
// common type aliases, error type, and other globals (avoids circular imports)

//! Common type aliases and the crate error type [`BenchError`].

use ::thiserror::Error;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// timing and sizing aliases
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// A measured duration in nanoseconds.
pub type TimeInNs = u64;
/// A measured duration in seconds.
pub type TimeInSec = f64;
/// An average duration in nanoseconds; fractional.
pub type AvgTimeInNs = f64;
/// Count of elements taken from a [`CandidatePool`].
///
/// [`CandidatePool`]: crate::data::pool::CandidatePool
pub type SampleSize = usize;
/// Count of times a timed routine is run.
pub type Repetitions = u64;

/// Nanoseconds in one second.
pub const NS_PER_SEC: f64 = 1_000_000_000.0;

/// Convert nanoseconds to seconds.
#[inline(always)]
pub fn ns_to_sec(ns: f64) -> TimeInSec {
    ns / NS_PER_SEC
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// BenchError
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Errors from setting up or running a benchmark.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum BenchError {
    /// The probe value was found in the generated pool. The fixture is
    /// broken; nothing may be measured.
    #[error("probe value {probe:?} is present in the candidate pool at index {index}")]
    ProbeInPool {
        probe: String,
        /// index of the first occurrence
        index: usize,
    },
    /// A timed probe found the probe value in a container.
    #[error("probe value {probe:?} was found in the {container} container")]
    ProbeFound {
        probe: String,
        container: &'static str,
    },
    #[error("repetition count must be 1 or more")]
    ZeroRepetitions,
    #[error("no sample sizes were given")]
    NoSampleSizes,
    #[error("sample sizes must be 1 or more")]
    ZeroSampleSize,
    #[error("sample size {size} exceeds the candidate pool size {pool_len}")]
    SampleSizeExceedsPool {
        size: SampleSize,
        pool_len: usize,
    },
    /// A `min..max` stepped by `step` range yields nothing.
    #[error("range min {min} max {max} step {step} yields no sample sizes")]
    InvalidRange {
        min: SampleSize,
        max: SampleSize,
        step: SampleSize,
    },
    /// Statistics were requested for zero samples.
    #[error("no data to summarize")]
    EmptyData,
    #[error("percentile {0} is not within 0 to 100")]
    InvalidPercentile(f64),
    /// Parameters rejected by a sampling distribution.
    #[error("bad parameters for the {name} distribution; {reason}")]
    InvalidDistribution {
        name: &'static str,
        reason: String,
    },
}

/// `Result` for this crate.
pub type BenchResult<T> = Result<T, BenchError>;
