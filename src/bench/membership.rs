// src/bench/membership.rs

//! Membership probing and the scaling benchmark driver.
//!
//! The sequence container is a contiguous slice searched front to back, so a
//! probe value that is never present visits every element. That is the
//! worst case of a linear scan. Other sequence containers may not share it.

use crate::bench::timer::Stopwatch;
use crate::common::{
    ns_to_sec,
    AvgTimeInNs,
    BenchError,
    BenchResult,
    Repetitions,
    SampleSize,
    TimeInNs,
    TimeInSec,
};
use crate::data::pool::{
    BenchContext,
    CandidatePool,
    NameGenerator,
    Sample,
    SetKind,
    SetRepr,
};
use crate::data::record::{ResultRecord, ResultRecords};

use std::collections::{BTreeSet, HashSet};
use std::fmt;
use std::hint::black_box;

#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// MembershipProbe
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// The kind of container probed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContainerKind {
    /// linear scan
    Sequence,
    HashSet,
    BTreeSet,
}

impl ContainerKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            ContainerKind::Sequence => "sequence",
            ContainerKind::HashSet => "HashSet",
            ContainerKind::BTreeSet => "BTreeSet",
        }
    }
}

impl fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A container that can answer "is `probe` a member?".
pub trait MembershipProbe {
    fn contains_probe(&self, probe: &str) -> bool;

    fn kind(&self) -> ContainerKind;
}

impl MembershipProbe for [String] {
    #[inline(never)]
    fn contains_probe(&self, probe: &str) -> bool {
        self.iter().any(|value| value.as_str() == probe)
    }

    fn kind(&self) -> ContainerKind {
        ContainerKind::Sequence
    }
}

impl MembershipProbe for Vec<String> {
    fn contains_probe(&self, probe: &str) -> bool {
        self.as_slice().contains_probe(probe)
    }

    fn kind(&self) -> ContainerKind {
        ContainerKind::Sequence
    }
}

impl MembershipProbe for HashSet<&str> {
    #[inline(never)]
    fn contains_probe(&self, probe: &str) -> bool {
        self.contains(probe)
    }

    fn kind(&self) -> ContainerKind {
        ContainerKind::HashSet
    }
}

impl MembershipProbe for BTreeSet<&str> {
    #[inline(never)]
    fn contains_probe(&self, probe: &str) -> bool {
        self.contains(probe)
    }

    fn kind(&self) -> ContainerKind {
        ContainerKind::BTreeSet
    }
}

impl MembershipProbe for SetRepr<'_> {
    fn contains_probe(&self, probe: &str) -> bool {
        match self {
            SetRepr::Hash(set) => set.contains_probe(probe),
            SetRepr::BTree(set) => set.contains_probe(probe),
        }
    }

    fn kind(&self) -> ContainerKind {
        match self {
            SetRepr::Hash(_) => ContainerKind::HashSet,
            SetRepr::BTree(_) => ContainerKind::BTreeSet,
        }
    }
}

/// Total nanoseconds of `repetitions` probes of `container` for `probe`,
/// each probe expected to miss.
///
/// Returns [`BenchError::ProbeFound`] if any probe hit.
pub fn time_probe_absent<C>(container: &C, probe: &str, repetitions: Repetitions) -> BenchResult<TimeInNs>
where
    C: MembershipProbe + ?Sized,
{
    if repetitions == 0 {
        return Err(BenchError::ZeroRepetitions);
    }
    let mut hit: bool = false;
    let stopwatch = Stopwatch::start();
    for _ in 0..repetitions {
        hit |= black_box(container.contains_probe(black_box(probe)));
    }
    let total: TimeInNs = stopwatch.elapsed_ns();
    if hit {
        return Err(BenchError::ProbeFound {
            probe: probe.to_string(),
            container: container.kind().as_str(),
        });
    }

    Ok(total)
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// scaling benchmark
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Sample sizes `min`, `min + step`, … while less than `max`.
pub fn sample_sizes(min: SampleSize, max: SampleSize, step: SampleSize) -> BenchResult<Vec<SampleSize>> {
    if min == 0 {
        return Err(BenchError::ZeroSampleSize);
    }
    if step == 0 || min >= max {
        return Err(BenchError::InvalidRange { min, max, step });
    }

    Ok((min..max).step_by(step).collect())
}

/// Settings of one scaling benchmark run.
#[derive(Clone, Debug, PartialEq)]
pub struct ScalingConfig {
    pub sizes: Vec<SampleSize>,
    /// probes per container per size
    pub repetitions: Repetitions,
    pub set_kind: SetKind,
}

impl ScalingConfig {
    pub fn new(sizes: Vec<SampleSize>, repetitions: Repetitions) -> ScalingConfig {
        ScalingConfig {
            sizes,
            repetitions,
            set_kind: SetKind::Hash,
        }
    }

    /// Sizes from [`sample_sizes`].
    pub fn from_range(
        min: SampleSize,
        max: SampleSize,
        step: SampleSize,
        repetitions: Repetitions,
    ) -> BenchResult<ScalingConfig> {
        Ok(ScalingConfig::new(sample_sizes(min, max, step)?, repetitions))
    }

    pub fn with_set_kind(mut self, set_kind: SetKind) -> ScalingConfig {
        self.set_kind = set_kind;
        self
    }

    /// Check the settings. Returns the sizes sorted ascending.
    pub fn validate(&self) -> BenchResult<Vec<SampleSize>> {
        if self.repetitions == 0 {
            return Err(BenchError::ZeroRepetitions);
        }
        if self.sizes.is_empty() {
            return Err(BenchError::NoSampleSizes);
        }
        if self.sizes.contains(&0) {
            return Err(BenchError::ZeroSampleSize);
        }
        let mut sizes: Vec<SampleSize> = self.sizes.clone();
        sizes.sort_unstable();

        Ok(sizes)
    }

    pub fn max_size(&self) -> SampleSize {
        self.sizes.iter().copied().max().unwrap_or(0)
    }
}

/// Measure one [`Sample`]; the record of its size.
pub fn measure_sample(sample: &Sample<'_>, probe: &str, repetitions: Repetitions) -> BenchResult<ResultRecord> {
    let total_seq: TimeInNs = time_probe_absent(sample.seq, probe, repetitions)?;
    let total_set: TimeInNs = time_probe_absent(&sample.set, probe, repetitions)?;
    let avg_seq: AvgTimeInNs = total_seq as f64 / repetitions as f64;
    let avg_set: AvgTimeInNs = total_set as f64 / repetitions as f64;

    Ok(ResultRecord::new(sample.size(), avg_seq, avg_set))
}

/// Measure each of the already validated, ascending `sizes`.
fn measure_sizes<P>(
    pool: &CandidatePool,
    probe: &str,
    sizes: Vec<SampleSize>,
    config: &ScalingConfig,
    mut progress: P,
) -> BenchResult<ResultRecords>
where
    P: FnMut(SampleSize),
{
    defn!("(pool {}, {:?}, {} sizes)", pool.len(), probe, sizes.len());
    let mut records: ResultRecords = ResultRecords::with_capacity(sizes.len());
    for size in sizes.into_iter() {
        progress(size);
        let sample: Sample = pool.sample(size, config.set_kind)?;
        let record: ResultRecord = measure_sample(&sample, probe, config.repetitions)?;
        defo!("{}", record);
        records.push(record);
    }
    defx!("return {} records", records.len());

    Ok(records)
}

/// Measure every size of `config` against an existing `pool`.
///
/// `progress` is called with each size before it is measured.
pub fn run_scaling_on_pool<P>(
    pool: &CandidatePool,
    probe: &str,
    config: &ScalingConfig,
    progress: P,
) -> BenchResult<ResultRecords>
where
    P: FnMut(SampleSize),
{
    let sizes: Vec<SampleSize> = config.validate()?;

    measure_sizes(pool, probe, sizes, config, progress)
}

/// The scaling benchmark driver.
///
/// Checks `config` first, then gets a pool sized to the largest requested
/// size from `ctx` (generating it if needed, which checks the probe value is
/// absent), then measures each size in ascending order.
pub fn run_scaling<G: NameGenerator>(
    ctx: &mut BenchContext<G>,
    config: &ScalingConfig,
) -> BenchResult<ResultRecords> {
    run_scaling_with_progress(ctx, config, |_| {})
}

/// [`run_scaling`] calling `progress` with each size before measuring it.
pub fn run_scaling_with_progress<G, P>(
    ctx: &mut BenchContext<G>,
    config: &ScalingConfig,
    progress: P,
) -> BenchResult<ResultRecords>
where
    G: NameGenerator,
    P: FnMut(SampleSize),
{
    let sizes: Vec<SampleSize> = config.validate()?;
    let largest: SampleSize = sizes.last().copied().unwrap_or(0);
    let probe: String = ctx.probe().to_string();
    let pool: &CandidatePool = ctx.pool_at_least(largest)?;

    measure_sizes(pool, &probe, sizes, config, progress)
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// single-shot wall clock comparison
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Wall clock seconds of one probe of each container.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClockComparison {
    pub seq_secs: TimeInSec,
    pub set_secs: TimeInSec,
}

impl ClockComparison {
    pub fn set_is_faster(&self) -> bool {
        self.set_secs < self.seq_secs
    }

    pub fn saved_secs(&self) -> TimeInSec {
        (self.seq_secs - self.set_secs).abs()
    }
}

/// Time a single probe of each container of `sample`.
///
/// One probe is near the clock resolution, so results are noisy.
pub fn clock_time_once(sample: &Sample<'_>, probe: &str) -> BenchResult<ClockComparison> {
    let seq_ns: TimeInNs = time_probe_absent(sample.seq, probe, 1)?;
    let set_ns: TimeInNs = time_probe_absent(&sample.set, probe, 1)?;

    Ok(ClockComparison {
        seq_secs: ns_to_sec(seq_ns as f64),
        set_secs: ns_to_sec(set_ns as f64),
    })
}
