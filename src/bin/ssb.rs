// src/bin/ssb.rs
//
// ‥ … ≤ ≥ ≠ ≟ ×

//! Driver program _ssb_ drives the [_ssblib_].
//!
//! Processes user-passed command-line arguments, then runs one of the
//! benchmark commands:
//!
//! * `scaling`: the scaling benchmark. For each sample size, probe the
//!   sequence and the set a fixed number of times with a value that is never
//!   present, print the average time of one probe of each.
//! * `clock`: one probe of each container timed with the wall clock.
//! * `timeit`: totals of 1, 1000 and 10000 sequence probes, and an
//!   automatically ranged count of probes.
//! * `distributions`: percentiles of two synthetic timing distributions.
//! * `groups`: grouped micro-benchmarks run in rounds.
//!
//! `ssb.rs` should be the only place that prints to STDOUT.
//!
//! [_ssblib_]: ssblib

#![allow(non_camel_case_types)]

cfg_if::cfg_if! {
    if #[cfg(feature = "jemalloc")] {
        use ::tikv_jemallocator::Jemalloc;
        #[global_allocator]
        static GLOBAL: Jemalloc = Jemalloc;
        const CLI_HELP_AFTER_ALLOCATOR: &str = "jemalloc";
    }
    else if #[cfg(feature = "mimalloc")] {
        use ::mimalloc::MiMalloc;
        #[global_allocator]
        static GLOBAL: MiMalloc = MiMalloc;
        const CLI_HELP_AFTER_ALLOCATOR: &str = "mimalloc";
    }
    else {
        const CLI_HELP_AFTER_ALLOCATOR: &str = "system";
    }
}

use std::ops::Range;
use std::process::ExitCode;
use std::time::{Duration, Instant};

use ::anyhow::{Context, Result};
use ::chrono::{DateTime, Local};
use ::clap::{Args, Parser, Subcommand, ValueEnum};
use ::const_format::concatcp;
use ::termcolor::{ColorChoice, StandardStream};

use ::ssblib::bench::membership::{
    clock_time_once,
    run_scaling_with_progress,
    ClockComparison,
    MembershipProbe,
    ScalingConfig,
};
use ::ssblib::bench::rounds::{
    builtin_groups,
    group_by_name,
    run_group,
    BenchmarkGroup,
    CaseReport,
    RoundsConfig,
};
use ::ssblib::bench::stats::{
    percentile_table,
    perf_data_a,
    perf_data_b,
    PERCENTILES_DEFAULT,
    PERF_DATA_SEED,
};
use ::ssblib::bench::timer::{autorange, repeat, timeit, AUTORANGE_MIN_TOTAL};
use ::ssblib::common::{Repetitions, SampleSize, TimeInNs, TimeInSec};
use ::ssblib::data::pool::{
    BenchContext,
    CandidatePool,
    FakeNameGenerator,
    Sample,
    SetKind,
    DATA_SET_SIZE,
    DEFAULT_SEED,
    PROBE_DEFAULT,
};
use ::ssblib::data::record::{
    all_set_faster,
    first_violation,
    seq_trend_nondecreasing,
    slope_ns_per_item,
    ResultRecords,
    Series,
};
use ::ssblib::debug::printers::{e_err, e_wrn};
use ::ssblib::printer::printers::{
    fmt_thousands_f64,
    fmt_thousands_u64,
    print_colored_stderr,
    write_group_table,
    write_percentile_table,
    write_stderr,
    CsvSink,
    RecordSink,
    TableSink,
    COLOR_VIOLATION,
};
use ::si_trace_print::stack::stack_offset_set;
#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

// --------------------
// command-line parsing

/// `scaling` default smallest sample size.
const CLI_SCALING_MIN: SampleSize = 100;
/// `scaling` default sample size limit (exclusive).
const CLI_SCALING_MAX: SampleSize = 100_000;
/// `scaling` default step between sample sizes.
const CLI_SCALING_STEP: SampleSize = 1_000;
/// `scaling` default probes per container per sample size.
const CLI_SCALING_REPETITIONS: Repetitions = 500;
/// Relative drop allowed between consecutive sequence search times.
const CLI_SEQ_TREND_TOLERANCE: f64 = 0.25;
/// `timeit` fixed probe counts.
const CLI_TIMEIT_NUMBERS: [Repetitions; 3] = [1, 1_000, 10_000];
/// `timeit` count of repeats of the repeated run.
const CLI_TIMEIT_REPEAT: usize = 5;
const CLI_TIMEIT_REPEAT_NUMBER: Repetitions = 1_000;
/// `groups` default sleep range of one `numeric_process` calculation, in
/// milliseconds.
const CLI_SLEEP_MIN_MS: u64 = 50;
const CLI_SLEEP_MAX_MS: u64 = 100;

#[cfg(debug_assertions)]
const CLI_HELP_AFTER_NOTE_DEBUG: &str = "\nDEBUG BUILD";
#[cfg(not(debug_assertions))]
const CLI_HELP_AFTER_NOTE_DEBUG: &str = "";

/// `--help` _afterword_ message.
const CLI_HELP_AFTER: &str = concatcp!(
    "\
Every membership probe looks up a value that is never present, so a sequence
scan always visits every element (the worst case of a linear scan).
The probe value is checked against the generated names before any timing;
if present, ssb exits with an error.

Generated names are reproducible for the same --seed.

Timings vary run to run. Build with --release for meaningful numbers.

---

Version: ", env!("CARGO_PKG_VERSION"), "
MSRV: ", env!("CARGO_PKG_RUST_VERSION"), "
Allocator: ", CLI_HELP_AFTER_ALLOCATOR, "
License: ", env!("CARGO_PKG_LICENSE"), "
",
    CLI_HELP_AFTER_NOTE_DEBUG,
);

/// clap command-line arguments build-time definitions.
//
// Note:
// * the `about` is taken from `Cargo.toml:[package]:description`.
#[derive(Parser, Debug)]
#[clap(
    about = env!("CARGO_PKG_DESCRIPTION"),
    author = env!("CARGO_PKG_AUTHORS"),
    name = "ssb",
    // write expanded information for the `--version` output
    version = concatcp!(
        "Version: ",
        env!("CARGO_PKG_VERSION_MAJOR"), ".",
        env!("CARGO_PKG_VERSION_MINOR"), ".",
        env!("CARGO_PKG_VERSION_PATCH"), "\n",
        "MSRV: ", env!("CARGO_PKG_RUST_VERSION"), "\n",
        "Allocator: ", CLI_HELP_AFTER_ALLOCATOR , "\n",
        "License: ", env!("CARGO_PKG_LICENSE"), "\n",
    ),
    after_help = CLI_HELP_AFTER,
    verbatim_doc_comment,
)]
struct CLI_Args {
    #[clap(subcommand)]
    command: CLI_Command,

    /// Choose to print using colors.
    #[clap(
        required = false,
        short = 'c',
        long = "color",
        global = true,
        verbatim_doc_comment,
        value_enum,
        default_value_t = CLI_Color_Choice::auto,
    )]
    color_choice: CLI_Color_Choice,

    /// Print a summary of the run to stderr.
    #[clap(
        short,
        long,
        global = true,
        verbatim_doc_comment,
    )]
    summary: bool,
}

#[derive(Subcommand, Debug)]
enum CLI_Command {
    /// Probe a sequence and a set over increasing sample sizes.
    Scaling(CLI_Scaling_Args),
    /// Probe a sequence and a set once each, timed with the wall clock.
    Clock(CLI_Clock_Args),
    /// Total time of 1, 1000, 10000 sequence probes, then an automatic range.
    Timeit(CLI_Clock_Args),
    /// Percentiles of two synthetic timing distributions.
    Distributions(CLI_Distributions_Args),
    /// Grouped micro-benchmarks measured in rounds.
    Groups(CLI_Groups_Args),
}

/// Arguments for generating the candidate pool.
#[derive(Args, Debug)]
struct CLI_Pool_Args {
    /// The probe value; must not be a generated name.
    #[clap(
        long,
        verbatim_doc_comment,
        default_value_t = String::from(PROBE_DEFAULT),
    )]
    probe: String,

    /// Seed of the name generator.
    #[clap(
        long,
        verbatim_doc_comment,
        default_value_t = DEFAULT_SEED,
    )]
    seed: u64,
}

#[derive(Args, Debug)]
struct CLI_Scaling_Args {
    #[clap(flatten)]
    pool: CLI_Pool_Args,

    /// Smallest sample size.
    #[clap(
        long,
        verbatim_doc_comment,
        default_value_t = CLI_SCALING_MIN,
        value_parser = cli_parse_size,
    )]
    min: SampleSize,

    /// Sample sizes are less than this.
    #[clap(
        long,
        verbatim_doc_comment,
        default_value_t = CLI_SCALING_MAX,
        value_parser = cli_parse_size,
    )]
    max: SampleSize,

    /// Step between sample sizes.
    #[clap(
        long,
        verbatim_doc_comment,
        default_value_t = CLI_SCALING_STEP,
        value_parser = cli_parse_size,
    )]
    step: SampleSize,

    /// Explicit sample sizes, comma separated. Overrides --min --max --step.
    /// For example, "100,1000,10_000,100_000".
    #[clap(
        long,
        verbatim_doc_comment,
        value_delimiter = ',',
        value_parser = cli_parse_size,
    )]
    sizes: Vec<SampleSize>,

    /// Probes per container per sample size.
    #[clap(
        short = 'r',
        long,
        verbatim_doc_comment,
        default_value_t = CLI_SCALING_REPETITIONS,
        value_parser = cli_parse_repetitions,
    )]
    repetitions: Repetitions,

    /// The set used for the set probe.
    #[clap(
        long = "set-kind",
        verbatim_doc_comment,
        value_enum,
        default_value_t = CLI_Set_Kind::hash,
    )]
    set_kind: CLI_Set_Kind,

    /// Print comma-separated values instead of a table.
    #[clap(
        long,
        verbatim_doc_comment,
    )]
    csv: bool,

    /// Exit with failure if the set probe was not faster for some size.
    #[clap(
        long,
        verbatim_doc_comment,
    )]
    strict: bool,
}

#[derive(Args, Debug)]
struct CLI_Clock_Args {
    #[clap(flatten)]
    pool: CLI_Pool_Args,

    /// Count of generated names.
    #[clap(
        long,
        verbatim_doc_comment,
        default_value_t = DATA_SET_SIZE,
        value_parser = cli_parse_size,
    )]
    size: SampleSize,
}

#[derive(Args, Debug)]
struct CLI_Distributions_Args {
    /// Seed of the synthetic data.
    #[clap(
        long,
        verbatim_doc_comment,
        default_value_t = PERF_DATA_SEED,
    )]
    seed: u64,
}

#[derive(Args, Debug)]
struct CLI_Groups_Args {
    /// Run only this group. Full group name or one of
    /// "sequence", "numeric", "making-numbers".
    #[clap(
        short = 'g',
        long,
        verbatim_doc_comment,
    )]
    group: Option<String>,

    /// Rounds per benchmark. Default is chosen per group.
    #[clap(
        long,
        verbatim_doc_comment,
        value_parser = cli_parse_size,
    )]
    rounds: Option<usize>,

    /// Least sleep of one "Making Numbers" calculation, in milliseconds.
    #[clap(
        long = "sleep-min-ms",
        verbatim_doc_comment,
        default_value_t = CLI_SLEEP_MIN_MS,
    )]
    sleep_min_ms: u64,

    /// Most sleep of one "Making Numbers" calculation, in milliseconds.
    #[clap(
        long = "sleep-max-ms",
        verbatim_doc_comment,
        default_value_t = CLI_SLEEP_MAX_MS,
    )]
    sleep_max_ms: u64,
}

/// CLI enum that maps to [`termcolor::ColorChoice`].
///
/// [`termcolor::ColorChoice`]: https://docs.rs/termcolor/1.1.3/termcolor/enum.ColorChoice.html
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    ValueEnum, // from `clap`
)]
enum CLI_Color_Choice {
    always,
    auto,
    never,
}

/// CLI enum that maps to [`SetKind`].
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    ValueEnum, // from `clap`
)]
enum CLI_Set_Kind {
    hash,
    btree,
}

impl From<CLI_Set_Kind> for SetKind {
    fn from(value: CLI_Set_Kind) -> Self {
        match value {
            CLI_Set_Kind::hash => SetKind::Hash,
            CLI_Set_Kind::btree => SetKind::BTree,
        }
    }
}

/// `clap` argument processor for sample sizes and counts.
/// Allows `_` digit separators. Zero is rejected.
fn cli_parse_size(value: &str) -> std::result::Result<usize, String> {
    let digits: String = value.trim().replace('_', "");
    match digits.parse::<usize>() {
        Ok(0) => Err(format!("value {:?} must be 1 or more", value)),
        Ok(size) => Ok(size),
        Err(err) => Err(format!("value {:?} is not a count; {}", value, err)),
    }
}

/// `clap` argument processor for `--repetitions`.
fn cli_parse_repetitions(value: &str) -> std::result::Result<Repetitions, String> {
    cli_parse_size(value).map(|size| size as Repetitions)
}

/// Sleep range in seconds from CLI milliseconds.
fn cli_sleep_range(min_ms: u64, max_ms: u64) -> Result<Range<TimeInSec>> {
    if min_ms > max_ms {
        anyhow::bail!("--sleep-min-ms {} is greater than --sleep-max-ms {}", min_ms, max_ms);
    }
    let min: TimeInSec = Duration::from_millis(min_ms).as_secs_f64();
    let max: TimeInSec = Duration::from_millis(max_ms).as_secs_f64();

    Ok(min..max)
}

// -------------------------------------------------------------------------------------------------
// commands
// -------------------------------------------------------------------------------------------------

/// Generate the pool of `size` names, printing progress to stderr.
fn create_pool<'a>(
    ctx: &'a mut BenchContext<FakeNameGenerator>,
    size: SampleSize,
) -> Result<&'a CandidatePool> {
    eprintln!("Creating Samples");
    let pool: &CandidatePool = ctx
        .pool_at_least(size)
        .with_context(|| format!("failed to create a candidate pool of {} names", size))?;
    eprintln!(
        "Created {} Samples ({} unique)",
        fmt_thousands_u64(pool.len() as u64),
        fmt_thousands_u64(pool.count_unique() as u64),
    );

    Ok(pool)
}

/// Run the scaling benchmark. Returns `false` if `--strict` and the set probe
/// was not faster for some size.
fn cmd_scaling(args: &CLI_Scaling_Args, color_choice: ColorChoice) -> Result<bool> {
    defn!();
    let config: ScalingConfig = if args.sizes.is_empty() {
        ScalingConfig::from_range(args.min, args.max, args.step, args.repetitions)
            .context("bad sample size range")?
    } else {
        ScalingConfig::new(args.sizes.clone(), args.repetitions)
    };
    let config: ScalingConfig = config.with_set_kind(SetKind::from(args.set_kind));
    defo!("config {:?}", config);

    let mut ctx = BenchContext::new(FakeNameGenerator::new(args.pool.seed), &args.pool.probe);
    create_pool(&mut ctx, config.max_size())?;

    eprintln!("Running the Benchmarks");
    let records: ResultRecords = run_scaling_with_progress(&mut ctx, &config, |size| {
        write_stderr(format!("\rRunning benchmark on sample size {}.", fmt_thousands_u64(size as u64)).as_bytes());
    })
    .context("scaling benchmark failed")?;
    eprintln!();

    if args.csv {
        CsvSink::new(std::io::stdout().lock()).consume(&records)?;
    } else {
        TableSink::new(StandardStream::stdout(color_choice)).consume(&records)?;
    }

    if let (Some(seq_slope), Some(set_slope)) = (
        slope_ns_per_item(&records, Series::Sequence),
        slope_ns_per_item(&records, Series::Set),
    ) {
        eprintln!("Sequence Search grows {:.6} ns per element", seq_slope);
        eprintln!("Set Search grows {:.6} ns per element", set_slope);
    }
    if !seq_trend_nondecreasing(&records, CLI_SEQ_TREND_TOLERANCE) {
        e_wrn!("sequence search time did not grow with sample size; timings are noisy");
    }
    let all_faster: bool = all_set_faster(&records);
    if let Some(record) = first_violation(&records) {
        let msg: String = format!("WARNING: set search was not faster than sequence search at {}\n", record);
        print_colored_stderr(COLOR_VIOLATION, Some(color_choice), msg.as_bytes())?;
    }
    defx!("all_faster {}", all_faster);

    Ok(all_faster || !args.strict)
}

/// One probe of each container, wall clock timed.
fn cmd_clock(args: &CLI_Clock_Args) -> Result<bool> {
    defn!();
    let mut ctx = BenchContext::new(FakeNameGenerator::new(args.pool.seed), &args.pool.probe);
    let pool: &CandidatePool = create_pool(&mut ctx, args.size)?;
    let sample: Sample = pool.sample(args.size, SetKind::Hash)?;
    let comparison: ClockComparison = clock_time_once(&sample, &args.pool.probe)?;

    println!("Test: clock time");
    println!("Sequence Search took: {} seconds", comparison.seq_secs);
    println!("Set Search took: {} seconds", comparison.set_secs);
    println!("Set Search saved {} seconds.", comparison.saved_secs());
    if !comparison.set_is_faster() {
        e_wrn!("set search was not faster; one probe is near the clock resolution");
    }
    defx!();

    Ok(true)
}

/// Fixed-count totals of sequence probes, then `autorange`.
fn cmd_timeit(args: &CLI_Clock_Args) -> Result<bool> {
    defn!();
    let mut ctx = BenchContext::new(FakeNameGenerator::new(args.pool.seed), &args.pool.probe);
    let pool: &CandidatePool = create_pool(&mut ctx, args.size)?;
    let seq: &[String] = pool.names();
    let probe: &str = args.pool.probe.as_str();

    println!("Test Approach: Using a monotonic nanosecond clock");
    for number in CLI_TIMEIT_NUMBERS.iter() {
        let total = timeit(*number, || seq.contains_probe(probe));
        println!(
            "Sequence Search Run {}x: {} nanoseconds",
            fmt_thousands_u64(*number),
            fmt_thousands_u64(total),
        );
    }
    let totals: Vec<TimeInNs> = repeat(CLI_TIMEIT_REPEAT, CLI_TIMEIT_REPEAT_NUMBER, || seq.contains_probe(probe));
    let best: TimeInNs = totals.iter().copied().min().unwrap_or(0);
    println!(
        "Sequence Search best of {} repeats of {}x: {} nanoseconds",
        CLI_TIMEIT_REPEAT,
        fmt_thousands_u64(CLI_TIMEIT_REPEAT_NUMBER),
        fmt_thousands_u64(best),
    );
    let (number, total) = autorange(AUTORANGE_MIN_TOTAL, || seq.contains_probe(probe));
    println!("Test Approach: automatic range of at least {:?}", AUTORANGE_MIN_TOTAL);
    println!(
        "Sequence Search Run {}x: {} nanoseconds",
        fmt_thousands_u64(number),
        fmt_thousands_u64(total),
    );
    defx!();

    Ok(true)
}

/// Percentile table of the two synthetic distributions.
fn cmd_distributions(args: &CLI_Distributions_Args, color_choice: ColorChoice) -> Result<bool> {
    defn!();
    let data_a: Vec<f64> = perf_data_a(args.seed)?;
    let data_b: Vec<f64> = perf_data_b(args.seed)?;
    let a: Vec<f64> = percentile_table(&data_a, &PERCENTILES_DEFAULT)?;
    let b: Vec<f64> = percentile_table(&data_b, &PERCENTILES_DEFAULT)?;
    let mut labels: Vec<String> = PERCENTILES_DEFAULT.iter().map(|p| p.to_string()).collect();
    labels.push(String::from("IQR"));

    let mut stdout = StandardStream::stdout(color_choice);
    write_percentile_table(&labels, &[("Data A", a.as_slice()), ("Data B", b.as_slice())], &mut stdout)?;
    defx!();

    Ok(true)
}

/// Run built-in benchmark groups and print a table for each.
fn cmd_groups(args: &CLI_Groups_Args, color_choice: ColorChoice) -> Result<bool> {
    defn!();
    let sleep_range: Range<TimeInSec> = cli_sleep_range(args.sleep_min_ms, args.sleep_max_ms)?;
    let mut groups: Vec<BenchmarkGroup> = match &args.group {
        Some(name) => match group_by_name(name, sleep_range) {
            Some(group) => vec![group],
            None => anyhow::bail!("unknown benchmark group {:?}", name),
        },
        None => builtin_groups(sleep_range),
    };

    let mut stdout = StandardStream::stdout(color_choice);
    for group in groups.iter_mut() {
        let config = RoundsConfig {
            rounds: args.rounds.unwrap_or(group.rounds_default),
            ..RoundsConfig::default()
        };
        defo!("group {:?} config {:?}", group.name, config);
        let reports: Vec<CaseReport> = run_group(group, &config)
            .with_context(|| format!("benchmark group {:?} failed", group.name))?;
        write_group_table(group.name, &reports, &mut stdout)?;
        println!();
    }
    defx!();

    Ok(true)
}

/// Print the `--summary` to stderr.
fn print_summary(args: &CLI_Args, start_dt: &DateTime<Local>, start_time: Instant) {
    eprintln!();
    eprintln!("Summary:");
    eprintln!("  command : {:?}", args.command);
    eprintln!("  started : {}", start_dt.format("%Y-%m-%d %H:%M:%S %:z"));
    eprintln!("  elapsed : {:?}", start_time.elapsed());
    eprintln!(
        "  elapsed seconds : {}",
        fmt_thousands_f64(start_time.elapsed().as_secs_f64(), 3)
    );
}

pub fn main() -> ExitCode {
    let start_time = Instant::now();
    let start_dt: DateTime<Local> = Local::now();
    if cfg!(debug_assertions) {
        stack_offset_set(Some(0));
    }
    defn!();

    let args = CLI_Args::parse();
    defo!("args {:?}", args);

    // map `CLI_Color_Choice` to `ColorChoice`
    let color_choice: ColorChoice = match args.color_choice {
        CLI_Color_Choice::always => ColorChoice::Always,
        CLI_Color_Choice::auto => ColorChoice::Auto,
        CLI_Color_Choice::never => ColorChoice::Never,
    };
    defo!("color_choice {:?}", color_choice);

    let result: Result<bool> = match &args.command {
        CLI_Command::Scaling(scaling_args) => cmd_scaling(scaling_args, color_choice),
        CLI_Command::Clock(clock_args) => cmd_clock(clock_args),
        CLI_Command::Timeit(clock_args) => cmd_timeit(clock_args),
        CLI_Command::Distributions(dist_args) => cmd_distributions(dist_args, color_choice),
        CLI_Command::Groups(groups_args) => cmd_groups(groups_args, color_choice),
    };

    let exitcode = match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            e_err!("{:#}", err);
            ExitCode::FAILURE
        }
    };

    if args.summary {
        print_summary(&args, &start_dt, start_time);
    }
    defx!("exitcode {:?}", exitcode);

    exitcode
}

// -------------------------------------------------------------------------------------------------
// tests
// -------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    mod ssb {
        use ::test_case::test_case;
        use super::*;

        #[test_case("500", Some(500))]
        #[test_case("100_000", Some(100_000))]
        #[test_case(" 7 ", Some(7); "spaces")]
        #[test_case("0", None)]
        #[test_case("-1", None)]
        #[test_case("ten", None)]
        #[test_case("", None; "empty")]
        fn test_cli_parse_size(value: &str, expect: Option<usize>) {
            assert_eq!(cli_parse_size(value).ok(), expect);
        }

        #[test]
        fn test_cli_sleep_range() {
            let range = cli_sleep_range(50, 100).unwrap();
            assert_eq!(range, 0.05..0.1);
            assert!(cli_sleep_range(2, 1).is_err());
        }

        #[test]
        fn test_cli_args_scaling_sizes() {
            let args = CLI_Args::try_parse_from([
                "ssb", "scaling", "--sizes", "100,1000,10_000", "-r", "10", "--set-kind", "btree",
            ])
            .unwrap();
            match args.command {
                CLI_Command::Scaling(scaling) => {
                    assert_eq!(scaling.sizes, vec![100, 1_000, 10_000]);
                    assert_eq!(scaling.repetitions, 10);
                    assert_eq!(SetKind::from(scaling.set_kind), SetKind::BTree);
                    assert_eq!(scaling.pool.probe, PROBE_DEFAULT);
                }
                other => panic!("unexpected command {:?}", other),
            }
        }

        #[test]
        fn test_cli_args_scaling_zero_repetitions() {
            assert!(CLI_Args::try_parse_from(["ssb", "scaling", "-r", "0"]).is_err());
        }

        #[test]
        fn test_cli_args_global_color() {
            let args = CLI_Args::try_parse_from(["ssb", "clock", "--color", "never", "--size", "50"]).unwrap();
            assert_eq!(args.color_choice, CLI_Color_Choice::never);
        }
    }
}
