// src/data/record.rs

//! Implements [`ResultRecord`], one row of output of the scaling benchmark,
//! and checks over a run of records.

use crate::common::{AvgTimeInNs, SampleSize};

use std::fmt;

use ::itertools::Itertools; // for `tuple_windows`

/// Aggregated timing of one sample size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResultRecord {
    pub sample_size: SampleSize,
    /// average nanoseconds of one probe of the sequence
    pub avg_seq_ns: AvgTimeInNs,
    /// average nanoseconds of one probe of the set
    pub avg_set_ns: AvgTimeInNs,
}

pub type ResultRecords = Vec<ResultRecord>;

/// Selects one of the two timings of a [`ResultRecord`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Series {
    Sequence,
    Set,
}

impl ResultRecord {
    pub fn new(sample_size: SampleSize, avg_seq_ns: AvgTimeInNs, avg_set_ns: AvgTimeInNs) -> ResultRecord {
        ResultRecord {
            sample_size,
            avg_seq_ns,
            avg_set_ns,
        }
    }

    pub fn get(&self, series: Series) -> AvgTimeInNs {
        match series {
            Series::Sequence => self.avg_seq_ns,
            Series::Set => self.avg_set_ns,
        }
    }

    /// Is the set probe strictly faster than the sequence probe?
    pub fn set_is_faster(&self) -> bool {
        self.avg_set_ns < self.avg_seq_ns
    }

    /// Nanoseconds saved per probe by using the set.
    pub fn saved_ns(&self) -> AvgTimeInNs {
        (self.avg_seq_ns - self.avg_set_ns).abs()
    }

    /// How many times faster the set probe is. `None` if the set probe
    /// measured as zero.
    pub fn speedup(&self) -> Option<f64> {
        if self.avg_set_ns <= 0.0 {
            return None;
        }

        Some(self.avg_seq_ns / self.avg_set_ns)
    }
}

impl fmt::Display for ResultRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "size {} sequence {:.2}ns set {:.2}ns",
            self.sample_size, self.avg_seq_ns, self.avg_set_ns
        )
    }
}

/// Does every record have a faster set probe?
pub fn all_set_faster(records: &[ResultRecord]) -> bool {
    records.iter().all(ResultRecord::set_is_faster)
}

/// The first record where the set probe was not faster.
pub fn first_violation(records: &[ResultRecord]) -> Option<&ResultRecord> {
    records.iter().find(|record| !record.set_is_faster())
}

/// Is the sequence timing nondecreasing across consecutive records?
///
/// A later record may be smaller than an earlier one by at most
/// `tolerance` (a fraction, e.g. `0.25`) of the earlier value.
pub fn seq_trend_nondecreasing(records: &[ResultRecord], tolerance: f64) -> bool {
    records
        .iter()
        .tuple_windows()
        .all(|(a, b)| b.avg_seq_ns >= a.avg_seq_ns * (1.0 - tolerance))
}

/// Least-squares slope of `series` over sample size, in nanoseconds per
/// element. `None` for fewer than two distinct sizes.
pub fn slope_ns_per_item(records: &[ResultRecord], series: Series) -> Option<f64> {
    if records.len() < 2 {
        return None;
    }
    let n: f64 = records.len() as f64;
    let mean_x: f64 = records.iter().map(|r| r.sample_size as f64).sum::<f64>() / n;
    let mean_y: f64 = records.iter().map(|r| r.get(series)).sum::<f64>() / n;
    let mut num: f64 = 0.0;
    let mut den: f64 = 0.0;
    for record in records.iter() {
        let dx: f64 = record.sample_size as f64 - mean_x;
        num += dx * (record.get(series) - mean_y);
        den += dx * dx;
    }
    if den == 0.0 {
        return None;
    }

    Some(num / den)
}
