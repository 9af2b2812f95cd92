// benches/bench_membership.rs
//
// compare a sequence scan to set lookups for a value that is never present

#![allow(non_snake_case)]

use ::criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ::lazy_static::lazy_static;

use ssblib::bench::membership::MembershipProbe;
use ssblib::data::pool::{CandidatePool, FakeNameGenerator, SetKind, DEFAULT_SEED, PROBE_DEFAULT};

const SIZES: [usize; 4] = [100, 1_000, 10_000, 100_000];

lazy_static! {
    /// one pool shared by every size
    static ref POOL: CandidatePool = {
        let mut generator = FakeNameGenerator::new(DEFAULT_SEED);
        match CandidatePool::generate(&mut generator, 100_000, PROBE_DEFAULT) {
            Ok(pool) => pool,
            Err(err) => panic!("{}", err),
        }
    };
}

// criterion runners

fn criterion_benchmark(c: &mut Criterion) {
    let mut bg = c.benchmark_group("membership_absent");
    for size in SIZES.iter() {
        let hash = POOL.sample(*size, SetKind::Hash).unwrap();
        let btree = POOL.sample(*size, SetKind::BTree).unwrap();
        bg.bench_with_input(BenchmarkId::new("sequence", size), &hash.seq, |b, seq| {
            b.iter(|| assert!(!seq.contains_probe(black_box(PROBE_DEFAULT))))
        });
        bg.bench_with_input(BenchmarkId::new("HashSet", size), &hash.set, |b, set| {
            b.iter(|| assert!(!set.contains_probe(black_box(PROBE_DEFAULT))))
        });
        bg.bench_with_input(BenchmarkId::new("BTreeSet", size), &btree.set, |b, set| {
            b.iter(|| assert!(!set.contains_probe(black_box(PROBE_DEFAULT))))
        });
    }
    bg.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
