// src/tests/common.rs

//! Fixtures shared by the tests.

use crate::data::pool::{CandidatePool, FakeNameGenerator, FnGenerator, PROBE_DEFAULT};
use crate::data::record::ResultRecord;

/// Seed used by tests needing a reproducible pool.
pub const SEED_TEST: u64 = 42;

/// A pool of `n` names from a seeded [`FakeNameGenerator`].
pub fn fake_pool(n: usize) -> CandidatePool {
    let mut generator = FakeNameGenerator::new(SEED_TEST);
    CandidatePool::generate(&mut generator, n, PROBE_DEFAULT).unwrap()
}

/// Generator of `"name0"`, `"name1"`, … in order.
pub fn counting_generator() -> FnGenerator<impl FnMut(usize) -> Vec<String>> {
    FnGenerator(|n: usize| (0..n).map(|i| format!("name{}", i)).collect())
}

/// Records with the given `(size, seq, set)` values.
pub fn records(values: &[(usize, f64, f64)]) -> Vec<ResultRecord> {
    values
        .iter()
        .map(|(size, seq, set)| ResultRecord::new(*size, *seq, *set))
        .collect()
}
