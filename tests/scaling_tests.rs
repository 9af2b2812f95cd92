// tests/scaling_tests.rs
//
// the scaling benchmark driven through the public API of `ssblib`

#![allow(non_snake_case)]

extern crate ssblib;

use ssblib::bench::membership::{run_scaling, ScalingConfig};
use ssblib::common::BenchError;
use ssblib::data::pool::{BenchContext, FakeNameGenerator, FnGenerator, SetKind, DEFAULT_SEED, PROBE_DEFAULT};
use ssblib::data::record::{all_set_faster, first_violation, slope_ns_per_item, ResultRecords, Series};
use ssblib::printer::printers::{CsvSink, RecordSink, CSV_HEADER};

use ::more_asserts::{assert_ge, assert_gt, assert_lt};

const SIZES: [usize; 4] = [100, 1_000, 10_000, 100_000];
const REPETITIONS: u64 = 1_000;

fn run_four_sizes(ctx: &mut BenchContext<FakeNameGenerator>) -> ResultRecords {
    let config = ScalingConfig::new(SIZES.to_vec(), REPETITIONS);
    run_scaling(ctx, &config).unwrap()
}

#[test]
fn test_scaling_four_sizes_ascending() {
    let mut ctx = BenchContext::with_seed(DEFAULT_SEED);
    let records = run_four_sizes(&mut ctx);

    assert_eq!(records.len(), SIZES.len());
    for (record, size) in records.iter().zip(SIZES.iter()) {
        assert_eq!(record.sample_size, *size);
    }
    assert_eq!(ctx.pool().unwrap().len(), 100_000);
    assert_ge!(ctx.pool().unwrap().count_unique(), 99_000);
    assert!(all_set_faster(&records), "set slower at {:?}", first_violation(&records));
}

#[test]
fn test_scaling_set_flat_sequence_grows() {
    let mut ctx = BenchContext::with_seed(DEFAULT_SEED);
    let records = run_four_sizes(&mut ctx);
    let seq_slope = slope_ns_per_item(&records, Series::Sequence).unwrap();
    let set_slope = slope_ns_per_item(&records, Series::Set).unwrap();

    assert_gt!(seq_slope, 0.0);
    // set lookups do not grow with the sample size the way a scan does
    assert_lt!(set_slope.abs(), seq_slope / 10.0, "records {:?}", records);
    assert_gt!(records[3].avg_seq_ns, records[0].avg_seq_ns * 10.0);
}

#[test]
fn test_scaling_rerun_same_pool_same_ordering() {
    let mut ctx = BenchContext::with_seed(DEFAULT_SEED);
    let first = run_four_sizes(&mut ctx);
    let second = run_four_sizes(&mut ctx);

    assert_eq!(ctx.pools_generated(), 1);
    assert!(all_set_faster(&first), "first run set slower at {:?}", first_violation(&first));
    assert!(all_set_faster(&second), "second run set slower at {:?}", first_violation(&second));
}

#[test]
fn test_scaling_btree_set() {
    let mut ctx = BenchContext::with_seed(DEFAULT_SEED);
    let config = ScalingConfig::new(vec![10_000, 1_000], 100).with_set_kind(SetKind::BTree);
    let records = run_scaling(&mut ctx, &config).unwrap();

    assert_eq!(records[0].sample_size, 1_000);
    assert_eq!(records[1].sample_size, 10_000);
    assert_lt!(records[1].avg_set_ns, records[1].avg_seq_ns);
}

#[test]
fn test_scaling_probe_generated_is_error() {
    let generator = FnGenerator(|n: usize| {
        (0..n)
            .map(|i| if i == 500 { String::from(PROBE_DEFAULT) } else { format!("name {}", i) })
            .collect()
    });
    let mut ctx = BenchContext::new(generator, PROBE_DEFAULT);
    let config = ScalingConfig::new(vec![100, 1_000], 10);

    match run_scaling(&mut ctx, &config) {
        Err(BenchError::ProbeInPool { index, .. }) => assert_eq!(index, 500),
        other => panic!("expected ProbeInPool, got {:?}", other),
    }
}

#[test]
fn test_scaling_csv() {
    let mut ctx = BenchContext::with_seed(DEFAULT_SEED);
    let records = run_scaling(&mut ctx, &ScalingConfig::new(vec![10, 20], 5)).unwrap();
    let mut sink = CsvSink::new(Vec::<u8>::new());
    sink.consume(&records).unwrap();
    let out = String::from_utf8(sink.into_inner()).unwrap();
    let lines: Vec<&str> = out.lines().collect();

    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], CSV_HEADER);
    assert!(lines[1].starts_with("10,"));
    assert!(lines[2].starts_with("20,"));
}
