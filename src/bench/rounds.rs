// src/bench/rounds.rs

//! Grouped micro-benchmarks measured in rounds.
//!
//! Each [`BenchmarkCase`] is calibrated to a number of iterations per round,
//! then run for a number of rounds. Every round yields one sample, the mean
//! nanoseconds of one iteration in that round. The samples are summarized
//! as a [`Distribution`].

use crate::bench::stats::Distribution;
use crate::bench::timer::timeit;
use crate::common::{BenchError, BenchResult, Repetitions, TimeInSec};

use std::fmt;
use std::hint::black_box;
use std::ops::Range;
use std::thread::sleep;
use std::time::Duration;

use ::rand::Rng;
#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

/// Group name of the sequence construction cases.
pub const GROUP_SEQUENCE_INIT: &str = "List vs Tuple Initialization";
/// Group name of the numeric construction cases.
pub const GROUP_NUMERIC_INIT: &str = "Numerical Initialization";
/// Group name of the sleeping `numeric_process` case.
pub const GROUP_MAKING_NUMBERS: &str = "Making Numbers";

/// Values every sequence construction case copies.
pub const INIT_VALUES: [i64; 10] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9];

/// Default sleep range, in seconds, of one `numeric_process` calculation.
pub const SLEEP_RANGE_DEFAULT: Range<TimeInSec> = 0.05..0.1;

/// Count of calculations of one `numeric_process` call.
pub const NUMERIC_PROCESS_CALCULATIONS: usize = 10;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// routines
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// A reduced fraction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ratio {
    pub numer: i64,
    pub denom: i64,
}

impl Ratio {
    /// Returns `None` if `denom` is zero.
    pub fn new(numer: i64, denom: i64) -> Option<Ratio> {
        if denom == 0 {
            return None;
        }
        let g: i64 = gcd(numer, denom).max(1);
        let sign: i64 = if denom < 0 { -1 } else { 1 };

        Some(Ratio {
            numer: sign * numer / g,
            denom: sign * denom / g,
        })
    }
}

fn gcd(a: i64, b: i64) -> i64 {
    let (mut a, mut b) = (a.abs(), b.abs());
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Sleep a random duration within `sleep_range` seconds; return it.
pub fn perform_calculation(sleep_range: &Range<TimeInSec>) -> TimeInSec {
    let wait: TimeInSec = if sleep_range.is_empty() {
        sleep_range.start.max(0.0)
    } else {
        rand::rng().random_range(sleep_range.clone())
    };
    sleep(Duration::from_secs_f64(wait.max(0.0)));

    wait
}

/// Run [`NUMERIC_PROCESS_CALCULATIONS`] calculations, return each doubled.
pub fn numeric_process(sleep_range: &Range<TimeInSec>) -> Vec<TimeInSec> {
    let mut initial: Vec<TimeInSec> = Vec::with_capacity(NUMERIC_PROCESS_CALCULATIONS);
    for _ in 0..NUMERIC_PROCESS_CALCULATIONS {
        initial.push(perform_calculation(sleep_range));
    }

    initial.iter().map(|value| 2.0 * value).collect()
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// BenchmarkCase
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// A routine to measure.
pub type Routine = Box<dyn FnMut()>;

/// A named routine within a named group.
pub struct BenchmarkCase {
    pub group: &'static str,
    pub name: &'static str,
    pub routine: Routine,
}

impl BenchmarkCase {
    pub fn new<F>(group: &'static str, name: &'static str, routine: F) -> BenchmarkCase
    where
        F: FnMut() + 'static,
    {
        BenchmarkCase {
            group,
            name,
            routine: Box::new(routine),
        }
    }
}

impl fmt::Debug for BenchmarkCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BenchmarkCase")
            .field("group", &self.group)
            .field("name", &self.name)
            .finish()
    }
}

/// Cases sharing one group name.
#[derive(Debug)]
pub struct BenchmarkGroup {
    pub name: &'static str,
    pub cases: Vec<BenchmarkCase>,
    /// rounds to use when the caller does not choose
    pub rounds_default: usize,
}

/// Settings of [`run_case`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RoundsConfig {
    pub rounds: usize,
    /// least duration of one round; sets iterations per round
    pub min_round_time: Duration,
    pub max_iterations: Repetitions,
    /// rounds run and discarded before measuring
    pub warmup_rounds: usize,
}

impl Default for RoundsConfig {
    fn default() -> Self {
        RoundsConfig {
            rounds: 100,
            min_round_time: Duration::from_micros(5),
            max_iterations: 1_000_000,
            warmup_rounds: 1,
        }
    }
}

/// Results of one [`BenchmarkCase`].
#[derive(Clone, Debug, PartialEq)]
pub struct CaseReport {
    pub group: &'static str,
    pub name: &'static str,
    pub iterations: Repetitions,
    /// mean nanoseconds of one iteration, one per round
    pub samples: Vec<f64>,
    pub distribution: Distribution,
}

/// Smallest power of ten of iterations where one round takes at least
/// `min_round_time`, limited to `max_iterations`.
pub fn calibrate(routine: &mut Routine, min_round_time: Duration, max_iterations: Repetitions) -> Repetitions {
    defn!("({:?}, {})", min_round_time, max_iterations);
    let min_ns: u128 = min_round_time.as_nanos();
    let max_iterations: Repetitions = max_iterations.max(1);
    let mut iterations: Repetitions = 1;
    loop {
        let total = timeit(iterations, &mut *routine);
        if u128::from(total) >= min_ns || iterations >= max_iterations {
            break;
        }
        iterations = iterations.saturating_mul(10).min(max_iterations);
    }
    defx!("return {}", iterations);

    iterations
}

/// Calibrate then run `case` for `config.rounds` rounds.
pub fn run_case(case: &mut BenchmarkCase, config: &RoundsConfig) -> BenchResult<CaseReport> {
    defn!("({:?})", case);
    if config.rounds == 0 {
        return Err(BenchError::ZeroRepetitions);
    }
    let iterations: Repetitions = calibrate(&mut case.routine, config.min_round_time, config.max_iterations);
    for _ in 0..config.warmup_rounds {
        timeit(iterations, &mut case.routine);
    }
    let mut samples: Vec<f64> = Vec::with_capacity(config.rounds);
    for _ in 0..config.rounds {
        let total = timeit(iterations, &mut case.routine);
        samples.push(total as f64 / iterations as f64);
    }
    let distribution: Distribution = Distribution::from_samples(&samples)?;
    defx!("{}/{} min {} mean {}", case.group, case.name, distribution.min, distribution.mean);

    Ok(CaseReport {
        group: case.group,
        name: case.name,
        iterations,
        samples,
        distribution,
    })
}

/// Run every case of `group`.
pub fn run_group(group: &mut BenchmarkGroup, config: &RoundsConfig) -> BenchResult<Vec<CaseReport>> {
    let mut reports: Vec<CaseReport> = Vec::with_capacity(group.cases.len());
    for case in group.cases.iter_mut() {
        reports.push(run_case(case, config)?);
    }

    Ok(reports)
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// built-in groups
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Growable vector versus fixed boxed slice, built from [`INIT_VALUES`].
pub fn group_sequence_init() -> BenchmarkGroup {
    BenchmarkGroup {
        name: GROUP_SEQUENCE_INIT,
        cases: vec![
            BenchmarkCase::new(GROUP_SEQUENCE_INIT, "vec", || {
                black_box(Vec::from(black_box(INIT_VALUES)));
            }),
            BenchmarkCase::new(GROUP_SEQUENCE_INIT, "boxed_slice", || {
                let boxed: Box<[i64]> = Box::new(black_box(INIT_VALUES));
                black_box(boxed);
            }),
        ],
        rounds_default: 1_000,
    }
}

/// Construction of numeric values from `0.75` (or `3/4`).
pub fn group_numeric_init() -> BenchmarkGroup {
    BenchmarkGroup {
        name: GROUP_NUMERIC_INIT,
        cases: vec![
            BenchmarkCase::new(GROUP_NUMERIC_INIT, "int", || {
                black_box(black_box(0.75_f64) as i64);
            }),
            BenchmarkCase::new(GROUP_NUMERIC_INIT, "float", || {
                black_box(f64::from(black_box(0.75_f32)));
            }),
            BenchmarkCase::new(GROUP_NUMERIC_INIT, "string", || {
                black_box(black_box(0.75_f64).to_string());
            }),
            BenchmarkCase::new(GROUP_NUMERIC_INIT, "ratio", || {
                black_box(Ratio::new(black_box(3), black_box(4)));
            }),
        ],
        rounds_default: 1_000,
    }
}

/// The sleeping [`numeric_process`].
pub fn group_making_numbers(sleep_range: Range<TimeInSec>) -> BenchmarkGroup {
    BenchmarkGroup {
        name: GROUP_MAKING_NUMBERS,
        cases: vec![BenchmarkCase::new(GROUP_MAKING_NUMBERS, "numeric_process", move || {
            black_box(numeric_process(&sleep_range));
        })],
        rounds_default: 5,
    }
}

/// All built-in groups.
pub fn builtin_groups(sleep_range: Range<TimeInSec>) -> Vec<BenchmarkGroup> {
    vec![
        group_sequence_init(),
        group_numeric_init(),
        group_making_numbers(sleep_range),
    ]
}

/// The built-in group named `name`, compared ignoring ASCII case. Also
/// matches a short name: `sequence`, `numeric`, `making-numbers`.
pub fn group_by_name(name: &str, sleep_range: Range<TimeInSec>) -> Option<BenchmarkGroup> {
    let name: String = name.to_ascii_lowercase();
    match name.as_str() {
        "sequence" => Some(group_sequence_init()),
        "numeric" => Some(group_numeric_init()),
        "making-numbers" => Some(group_making_numbers(sleep_range)),
        _ => builtin_groups(sleep_range)
            .into_iter()
            .find(|group| group.name.eq_ignore_ascii_case(&name)),
    }
}
