// src/tests/rounds_tests.rs

//! tests for `src/bench/rounds.rs`

#![allow(non_snake_case)]

use crate::bench::rounds::{
    builtin_groups,
    calibrate,
    group_by_name,
    group_making_numbers,
    group_numeric_init,
    group_sequence_init,
    numeric_process,
    perform_calculation,
    run_case,
    run_group,
    BenchmarkCase,
    Ratio,
    Routine,
    RoundsConfig,
    GROUP_MAKING_NUMBERS,
    GROUP_NUMERIC_INIT,
    GROUP_SEQUENCE_INIT,
    NUMERIC_PROCESS_CALCULATIONS,
    SLEEP_RANGE_DEFAULT,
};
use crate::common::BenchError;

use std::cell::Cell;
use std::rc::Rc;
use std::thread::sleep;
use std::time::Duration;

use ::more_asserts::{assert_ge, assert_lt};
use ::test_case::test_case;

/// Few short rounds so tests stay quick.
fn config_quick() -> RoundsConfig {
    RoundsConfig {
        rounds: 3,
        min_round_time: Duration::from_micros(1),
        max_iterations: 10,
        warmup_rounds: 0,
    }
}

#[test_case(3, 4, Some((3, 4)))]
#[test_case(6, 8, Some((3, 4)))]
#[test_case(6, -8, Some((-3, 4)); "negative denominator")]
#[test_case(0, 5, Some((0, 1)))]
#[test_case(5, 0, None)]
fn test_Ratio_new(numer: i64, denom: i64, expect: Option<(i64, i64)>) {
    let ratio = Ratio::new(numer, denom).map(|r| (r.numer, r.denom));
    assert_eq!(ratio, expect);
}

#[test]
fn test_perform_calculation_in_range() {
    let range = 0.001..0.002;
    let wait = perform_calculation(&range);
    assert!(range.contains(&wait), "wait {}", wait);
}

#[test]
fn test_numeric_process_empty_range() {
    let values = numeric_process(&(0.0..0.0));
    assert_eq!(values, vec![0.0; NUMERIC_PROCESS_CALCULATIONS]);
}

#[test]
fn test_numeric_process_doubled() {
    let values = numeric_process(&(0.0001..0.0002));
    assert_eq!(values.len(), NUMERIC_PROCESS_CALCULATIONS);
    for value in values.iter() {
        assert_ge!(*value, 0.0002);
        assert_lt!(*value, 0.0004);
    }
}

#[test]
fn test_calibrate_slow_routine() {
    let mut routine: Routine = Box::new(|| sleep(Duration::from_micros(200)));
    assert_eq!(calibrate(&mut routine, Duration::from_micros(100), 1_000), 1);
}

#[test]
fn test_calibrate_limited() {
    let mut routine: Routine = Box::new(|| {});
    assert_eq!(calibrate(&mut routine, Duration::from_secs(10), 100), 100);
}

#[test]
fn test_run_case() {
    let counter = Rc::new(Cell::new(0u64));
    let counter_ = counter.clone();
    let mut case = BenchmarkCase::new("group", "count", move || counter_.set(counter_.get() + 1));
    let report = run_case(&mut case, &config_quick()).unwrap();
    assert_eq!(report.group, "group");
    assert_eq!(report.name, "count");
    assert_eq!(report.samples.len(), 3);
    assert_eq!(report.distribution.rounds, 3);
    assert_ge!(report.iterations, 1);
    // calibration calls plus three rounds
    assert_ge!(counter.get(), 3 * report.iterations);
}

#[test]
fn test_run_case_zero_rounds() {
    let mut case = BenchmarkCase::new("group", "noop", || {});
    let config = RoundsConfig { rounds: 0, ..config_quick() };
    assert_eq!(run_case(&mut case, &config).unwrap_err(), BenchError::ZeroRepetitions);
}

#[test]
fn test_run_group_numeric_init() {
    let mut group = group_numeric_init();
    let reports = run_group(&mut group, &config_quick()).unwrap();
    let names: Vec<&str> = reports.iter().map(|r| r.name).collect();
    assert_eq!(names, vec!["int", "float", "string", "ratio"]);
    assert!(reports.iter().all(|r| r.group == GROUP_NUMERIC_INIT));
}

#[test]
fn test_run_group_sequence_init() {
    let mut group = group_sequence_init();
    assert_eq!(group.rounds_default, 1_000);
    let reports = run_group(&mut group, &config_quick()).unwrap();
    assert_eq!(reports.len(), 2);
}

#[test]
fn test_run_group_making_numbers_no_sleep() {
    let mut group = group_making_numbers(0.0..0.0);
    assert_eq!(group.rounds_default, 5);
    let reports = run_group(&mut group, &config_quick()).unwrap();
    assert_eq!(reports[0].name, "numeric_process");
}

#[test]
fn test_builtin_groups() {
    let names: Vec<&str> = builtin_groups(SLEEP_RANGE_DEFAULT).iter().map(|g| g.name).collect();
    assert_eq!(names, vec![GROUP_SEQUENCE_INIT, GROUP_NUMERIC_INIT, GROUP_MAKING_NUMBERS]);
}

#[test_case("sequence", Some(GROUP_SEQUENCE_INIT))]
#[test_case("NUMERIC", Some(GROUP_NUMERIC_INIT))]
#[test_case("making-numbers", Some(GROUP_MAKING_NUMBERS))]
#[test_case("list vs tuple initialization", Some(GROUP_SEQUENCE_INIT); "full name")]
#[test_case("Making Numbers", Some(GROUP_MAKING_NUMBERS); "full name mixed case")]
#[test_case("nope", None)]
fn test_group_by_name(name: &str, expect: Option<&str>) {
    let group = group_by_name(name, SLEEP_RANGE_DEFAULT);
    assert_eq!(group.map(|g| g.name), expect);
}
