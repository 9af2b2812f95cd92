// src/tests/pool_tests.rs

//! tests for `src/data/pool.rs`

#![allow(non_snake_case)]

use crate::common::BenchError;
use crate::data::pool::{
    BenchContext,
    CandidatePool,
    FakeNameGenerator,
    FnGenerator,
    NameGenerator,
    SetKind,
    SetRepr,
    DEFAULT_SEED,
    PROBE_DEFAULT,
};
use crate::tests::common::{counting_generator, fake_pool, SEED_TEST};

use ::more_asserts::{assert_ge, assert_gt, assert_le};
use ::test_case::test_case;

#[test]
fn test_FakeNameGenerator_same_seed_same_names() {
    let a = FakeNameGenerator::new(SEED_TEST).generate(100);
    let b = FakeNameGenerator::new(SEED_TEST).generate(100);
    assert_eq!(a, b);
}

#[test]
fn test_FakeNameGenerator_different_seed_different_names() {
    let a = FakeNameGenerator::new(1).generate(100);
    let b = FakeNameGenerator::new(2).generate(100);
    assert_ne!(a, b);
}

#[test]
fn test_FakeNameGenerator_never_probe_default() {
    let names = FakeNameGenerator::default().generate(20_000);
    assert_eq!(names.len(), 20_000);
    assert!(!names.iter().any(|name| name == PROBE_DEFAULT));
    for name in names.iter().take(50) {
        assert_gt!(name.split(' ').count(), 2, "name {:?}", name);
    }
}

#[test]
fn test_FakeNameGenerator_mostly_distinct() {
    let mut generator = FakeNameGenerator::new(DEFAULT_SEED);
    let pool = CandidatePool::generate(&mut generator, 100_000, PROBE_DEFAULT).unwrap();
    assert_eq!(pool.len(), 100_000);
    assert_ge!(pool.count_unique(), 99_000);
}

#[test]
fn test_CandidatePool_new_probe_present() {
    let names: Vec<String> = vec!["a".into(), "John Doe".into(), "b".into(), "John Doe".into()];
    match CandidatePool::new(names, PROBE_DEFAULT) {
        Err(BenchError::ProbeInPool { probe, index }) => {
            assert_eq!(probe, PROBE_DEFAULT);
            assert_eq!(index, 1);
        }
        other => panic!("expected ProbeInPool, got {:?}", other),
    }
}

#[test]
fn test_CandidatePool_generate_with_FnGenerator() {
    let mut generator = counting_generator();
    let pool = CandidatePool::generate(&mut generator, 5, "absent").unwrap();
    assert_eq!(pool.len(), 5);
    assert!(!pool.is_empty());
    assert_eq!(pool.names()[4], "name4");
}

#[test]
fn test_CandidatePool_generate_probe_generated() {
    let mut generator = FnGenerator(|n: usize| vec![String::from("x"); n]);
    let result = CandidatePool::generate(&mut generator, 3, "x");
    assert_eq!(result.unwrap_err(), BenchError::ProbeInPool { probe: "x".into(), index: 0 });
}

#[test]
fn test_CandidatePool_count_unique() {
    let names: Vec<String> = ["a", "b", "a", "c", "b"].iter().map(|s| s.to_string()).collect();
    let pool = CandidatePool::new(names, "z").unwrap();
    assert_eq!(pool.count_unique(), 3);
}

#[test_case(1, SetKind::Hash)]
#[test_case(10, SetKind::Hash)]
#[test_case(100, SetKind::BTree)]
#[test_case(1000, SetKind::BTree)]
fn test_CandidatePool_sample_prefix(size: usize, set_kind: SetKind) {
    let pool = fake_pool(1000);
    let sample = pool.sample(size, set_kind).unwrap();
    assert_eq!(sample.size(), size);
    assert_eq!(sample.seq, &pool.names()[..size]);
    assert_eq!(sample.set.set_kind(), set_kind);
    assert_le!(sample.set.len(), size);
    assert!(!sample.set.is_empty());
    for name in sample.seq.iter() {
        match &sample.set {
            SetRepr::Hash(set) => assert!(set.contains(name.as_str())),
            SetRepr::BTree(set) => assert!(set.contains(name.as_str())),
        }
    }
}

#[test]
fn test_CandidatePool_sample_duplicates_collapse() {
    let names: Vec<String> = ["a", "a", "a", "b"].iter().map(|s| s.to_string()).collect();
    let pool = CandidatePool::new(names, "z").unwrap();
    let sample = pool.sample(4, SetKind::Hash).unwrap();
    assert_eq!(sample.seq.len(), 4);
    assert_eq!(sample.set.len(), 2);
}

#[test]
fn test_CandidatePool_sample_zero() {
    let pool = fake_pool(10);
    assert_eq!(pool.sample(0, SetKind::Hash).unwrap_err(), BenchError::ZeroSampleSize);
}

#[test]
fn test_CandidatePool_sample_exceeds_pool() {
    let pool = fake_pool(10);
    assert_eq!(
        pool.sample(11, SetKind::Hash).unwrap_err(),
        BenchError::SampleSizeExceedsPool { size: 11, pool_len: 10 },
    );
}

#[test_case(SetKind::Hash, "HashSet")]
#[test_case(SetKind::BTree, "BTreeSet")]
fn test_SetKind_display(set_kind: SetKind, expect: &str) {
    assert_eq!(set_kind.to_string(), expect);
}

#[test]
fn test_BenchContext_pool_memoized() {
    let mut ctx = BenchContext::new(counting_generator(), PROBE_DEFAULT);
    assert!(ctx.pool().is_none());
    assert_eq!(ctx.pools_generated(), 0);
    assert_eq!(ctx.pool_at_least(100).unwrap().len(), 100);
    assert_eq!(ctx.pool_at_least(50).unwrap().len(), 100);
    assert_eq!(ctx.pool_at_least(100).unwrap().len(), 100);
    assert_eq!(ctx.pools_generated(), 1);
    assert_eq!(ctx.pool_at_least(200).unwrap().len(), 200);
    assert_eq!(ctx.pools_generated(), 2);
    assert_eq!(ctx.pool().unwrap().len(), 200);
}

#[test]
fn test_BenchContext_probe_in_pool() {
    let mut ctx = BenchContext::new(counting_generator(), "name3");
    assert_eq!(ctx.probe(), "name3");
    assert_eq!(
        ctx.pool_at_least(10).unwrap_err(),
        BenchError::ProbeInPool { probe: "name3".into(), index: 3 },
    );
    assert!(ctx.pool().is_none());
    // a pool too small to hold the probe value is fine
    assert_eq!(ctx.pool_at_least(3).unwrap().len(), 3);
}

#[test]
fn test_BenchContext_failed_regenerate_keeps_pool() {
    let mut ctx = BenchContext::new(counting_generator(), "name7");
    assert_eq!(ctx.pool_at_least(5).unwrap().len(), 5);
    assert_eq!(
        ctx.pool_at_least(10).unwrap_err(),
        BenchError::ProbeInPool { probe: "name7".into(), index: 7 },
    );
    assert_eq!(ctx.pools_generated(), 1);
    assert_eq!(ctx.pool().unwrap().len(), 5);
    assert_eq!(ctx.pool_at_least(4).unwrap().len(), 5);
    assert_eq!(ctx.pools_generated(), 1);
}

#[test]
fn test_BenchContext_with_seed() {
    let mut ctx = BenchContext::with_seed(SEED_TEST);
    assert_eq!(ctx.probe(), PROBE_DEFAULT);
    let names: Vec<String> = ctx.pool_at_least(20).unwrap().names().to_vec();
    assert_eq!(names, FakeNameGenerator::new(SEED_TEST).generate(20));
}
