// src/bench/timer.rs

//! Timing of a routine run repeatedly, measured with a monotonic clock.

use crate::common::{Repetitions, TimeInNs};

use std::hint::black_box;
use std::time::{Duration, Instant};

#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

/// Default least total time for [`autorange`].
pub const AUTORANGE_MIN_TOTAL: Duration = Duration::from_millis(200);

/// Monotonic clock reporting elapsed nanoseconds.
#[derive(Clone, Copy, Debug)]
pub struct Stopwatch {
    start: Instant,
}

impl Stopwatch {
    pub fn start() -> Stopwatch {
        Stopwatch {
            start: Instant::now(),
        }
    }

    /// Nanoseconds since [`Stopwatch::start`]. Saturates at `u64::MAX`.
    pub fn elapsed_ns(&self) -> TimeInNs {
        duration_to_ns(self.start.elapsed())
    }
}

/// Convert a `Duration` to nanoseconds. Saturates at `u64::MAX`.
pub fn duration_to_ns(duration: Duration) -> TimeInNs {
    u64::try_from(duration.as_nanos()).unwrap_or(u64::MAX)
}

/// Total nanoseconds to call `routine` `number` times.
///
/// The result of each call passes through `black_box`.
#[inline(never)]
pub fn timeit<T, F>(number: Repetitions, mut routine: F) -> TimeInNs
where
    F: FnMut() -> T,
{
    let stopwatch = Stopwatch::start();
    for _ in 0..number {
        black_box(routine());
    }

    stopwatch.elapsed_ns()
}

/// Call [`timeit`] `repeat` times, returning each total.
pub fn repeat<T, F>(repeat: usize, number: Repetitions, mut routine: F) -> Vec<TimeInNs>
where
    F: FnMut() -> T,
{
    let mut totals: Vec<TimeInNs> = Vec::with_capacity(repeat);
    for _ in 0..repeat {
        totals.push(timeit(number, &mut routine));
    }

    totals
}

/// Find how many calls of `routine` take at least `min_total`.
///
/// Tries 1, 2, 5, 10, 20, 50, … calls. Returns the count of calls and
/// their total nanoseconds.
pub fn autorange<T, F>(min_total: Duration, mut routine: F) -> (Repetitions, TimeInNs)
where
    F: FnMut() -> T,
{
    defn!("({:?})", min_total);
    let min_total_ns: TimeInNs = duration_to_ns(min_total);
    let mut base: Repetitions = 1;
    loop {
        for multiplier in [1, 2, 5] {
            let number: Repetitions = base.saturating_mul(multiplier);
            let total: TimeInNs = timeit(number, &mut routine);
            defo!("number {} total {}ns", number, total);
            if total >= min_total_ns || number == Repetitions::MAX {
                defx!("return ({}, {})", number, total);
                return (number, total);
            }
        }
        base = base.saturating_mul(10);
    }
}
