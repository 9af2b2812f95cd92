// src/printer/printers.rs

//! Reporting sinks for [`ResultRecord`s], and table writers for
//! distributions and benchmark groups.
//!
//! Writers take any [`WriteColor`] so callers may pass a
//! `termcolor::StandardStream` or a `termcolor::Buffer`.
//!
//! [`ResultRecord`s]: crate::data::record::ResultRecord

use crate::bench::rounds::CaseReport;
use crate::data::record::ResultRecord;
use crate::debug::printers::de_err;

use std::io::{Result, Write};

#[doc(hidden)]
pub use ::termcolor::{Color, ColorChoice, ColorSpec, WriteColor};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// globals and constants
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// [`Color`] of a row where the set probe was not faster.
///
/// [`Color`]: https://docs.rs/termcolor/1.1.3/termcolor/enum.Color.html
pub const COLOR_VIOLATION: Color = Color::Red;

/// [`Color`] of the fastest value in a column.
pub const COLOR_BEST: Color = Color::Green;

/// [`Color`] of the slowest value in a column.
pub const COLOR_WORST: Color = Color::Red;

/// [`Color`] for printing some user-facing error messages.
pub const COLOR_ERROR: Color = Color::Red;

/// Scaling table column headers.
pub const HEADER_SAMPLE_SIZE: &str = "Sample Size";
pub const HEADER_SEQ_TIME: &str = "List Search Time (ns)";
pub const HEADER_SET_TIME: &str = "Set Search Time (ns)";

const WIDTH_SAMPLE_SIZE: usize = 15;
const WIDTH_SEQ_TIME: usize = 22;
const WIDTH_SET_TIME: usize = 20;

/// CSV header written by [`CsvSink`].
pub const CSV_HEADER: &str = "sample_size,avg_seq_ns,avg_set_ns";

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// number formatting
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Insert `,` between each group of three digits of a string of digits.
fn group_digits(digits: &str) -> String {
    let len: usize = digits.len();
    let mut s: String = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            s.push(',');
        }
        s.push(c);
    }
    s
}

/// `1234567` becomes `"1,234,567"`.
pub fn fmt_thousands_u64(value: u64) -> String {
    group_digits(&value.to_string())
}

/// `1234.5678` with `decimals` 2 becomes `"1,234.57"`.
pub fn fmt_thousands_f64(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let s: String = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match s.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (s.as_str(), None),
    };
    let mut out: String = String::with_capacity(s.len() + 4);
    // `-0.00` prints as `0.00`
    if value < 0.0 && s.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
        out.push('-');
    }
    out.push_str(&group_digits(int_part));
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// RecordSink
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Consumer of the [`ResultRecord`s] of a scaling benchmark run.
///
/// [`ResultRecord`s]: crate::data::record::ResultRecord
pub trait RecordSink {
    fn consume(&mut self, records: &[ResultRecord]) -> Result<()>;
}

/// Writes [`ResultRecord`s] as an aligned text table.
///
/// [`ResultRecord`s]: crate::data::record::ResultRecord
pub struct TableSink<W: WriteColor> {
    out: W,
}

impl<W: WriteColor> TableSink<W> {
    pub fn new(out: W) -> TableSink<W> {
        TableSink { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: WriteColor> RecordSink for TableSink<W> {
    fn consume(&mut self, records: &[ResultRecord]) -> Result<()> {
        write_scaling_table(records, &mut self.out)
    }
}

/// Writes [`ResultRecord`s] as comma-separated values, for plotting tools.
///
/// [`ResultRecord`s]: crate::data::record::ResultRecord
pub struct CsvSink<W: Write> {
    out: W,
}

impl<W: Write> CsvSink<W> {
    pub fn new(out: W) -> CsvSink<W> {
        CsvSink { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> RecordSink for CsvSink<W> {
    fn consume(&mut self, records: &[ResultRecord]) -> Result<()> {
        writeln!(self.out, "{}", CSV_HEADER)?;
        for record in records.iter() {
            writeln!(
                self.out,
                "{},{:.2},{:.2}",
                record.sample_size, record.avg_seq_ns, record.avg_set_ns
            )?;
        }
        self.out.flush()
    }
}

/// Write the scaling table. Rows where the set probe was not faster are
/// colored [`COLOR_VIOLATION`].
pub fn write_scaling_table<W: WriteColor>(records: &[ResultRecord], out: &mut W) -> Result<()> {
    writeln!(
        out,
        "{:<w1$} {:<w2$} {:<w3$}",
        HEADER_SAMPLE_SIZE,
        HEADER_SEQ_TIME,
        HEADER_SET_TIME,
        w1 = WIDTH_SAMPLE_SIZE,
        w2 = WIDTH_SEQ_TIME,
        w3 = WIDTH_SET_TIME,
    )?;
    for record in records.iter() {
        let violation: bool = !record.set_is_faster();
        if violation {
            out.set_color(ColorSpec::new().set_fg(Some(COLOR_VIOLATION)))?;
        }
        writeln!(
            out,
            "{:<w1$} {:<w2$} {:<w3$}",
            fmt_thousands_u64(record.sample_size as u64),
            fmt_thousands_f64(record.avg_seq_ns, 2),
            fmt_thousands_f64(record.avg_set_ns, 2),
            w1 = WIDTH_SAMPLE_SIZE,
            w2 = WIDTH_SEQ_TIME,
            w3 = WIDTH_SET_TIME,
        )?;
        if violation {
            out.reset()?;
        }
    }
    out.flush()
}

/// Write a table of percentiles, one column per data set.
///
/// `labels` names each row of `columns`; every column has one value per
/// label.
pub fn write_percentile_table<W: WriteColor>(
    labels: &[String],
    columns: &[(&str, &[f64])],
    out: &mut W,
) -> Result<()> {
    write!(out, "{:<12}", "Percentiles")?;
    for (name, _) in columns.iter() {
        write!(out, " {:>12}", name)?;
    }
    writeln!(out)?;
    for (row, label) in labels.iter().enumerate() {
        write!(out, "{:<12}", label)?;
        for (_, values) in columns.iter() {
            match values.get(row) {
                Some(value) => write!(out, " {:>12}", fmt_thousands_f64(*value, 2))?,
                None => write!(out, " {:>12}", "")?,
            }
        }
        writeln!(out)?;
    }
    out.flush()
}

/// Write one line per [`CaseReport`] of a group: min, max, mean, stddev,
/// median, IQR, outliers, ops, rounds, iterations. Times in nanoseconds.
///
/// The lowest min is colored [`COLOR_BEST`], the highest max
/// [`COLOR_WORST`].
pub fn write_group_table<W: WriteColor>(group: &str, reports: &[CaseReport], out: &mut W) -> Result<()> {
    let best_min: f64 = reports.iter().map(|r| r.distribution.min).fold(f64::INFINITY, f64::min);
    let worst_max: f64 = reports.iter().map(|r| r.distribution.max).fold(f64::NEG_INFINITY, f64::max);
    writeln!(out, "benchmark '{}': {} tests", group, reports.len())?;
    writeln!(
        out,
        "{:<18} {:>14} {:>14} {:>14} {:>12} {:>14} {:>12} {:>9} {:>16} {:>7} {:>10}",
        "Name (time in ns)", "Min", "Max", "Mean", "StdDev", "Median", "IQR", "Outliers", "OPS", "Rounds", "Iterations",
    )?;
    for report in reports.iter() {
        let d = &report.distribution;
        write!(out, "{:<18} ", report.name)?;
        write_cell(out, &fmt_thousands_f64(d.min, 4), 14, (reports.len() > 1 && d.min == best_min).then_some(COLOR_BEST))?;
        write!(out, " ")?;
        write_cell(out, &fmt_thousands_f64(d.max, 4), 14, (reports.len() > 1 && d.max == worst_max).then_some(COLOR_WORST))?;
        writeln!(
            out,
            " {:>14} {:>12} {:>14} {:>12} {:>9} {:>16} {:>7} {:>10}",
            fmt_thousands_f64(d.mean, 4),
            fmt_thousands_f64(d.stddev, 4),
            fmt_thousands_f64(d.median, 4),
            fmt_thousands_f64(d.iqr, 4),
            format!("{};{}", d.outliers_stddev, d.outliers_iqr),
            fmt_thousands_f64(d.ops, 4),
            d.rounds,
            fmt_thousands_u64(report.iterations),
        )?;
    }
    out.flush()
}

/// Write `value` right-aligned in `width`, colored if `color` is set.
fn write_cell<W: WriteColor>(out: &mut W, value: &str, width: usize, color: Option<Color>) -> Result<()> {
    match color {
        Some(color_) => {
            out.set_color(ColorSpec::new().set_fg(Some(color_)))?;
            write!(out, "{:>width$}", value, width = width)?;
            out.reset()
        }
        None => write!(out, "{:>width$}", value, width = width),
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// other printer functions
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Print colored output to terminal if possible using passed stream,
/// otherwise, print plain output.
///
/// See an example <https://docs.rs/termcolor/1.1.2/termcolor/#detecting-presence-of-a-terminal>.
pub fn print_colored<W: WriteColor>(
    color: Color,
    value: &[u8],
    out: &mut W,
) -> Result<()> {
    if let Err(err) = out.set_color(ColorSpec::new().set_fg(Some(color))) {
        de_err!("print_colored: out.set_color({:?}) returned error {}", color, err);
        return Err(err);
    }
    if let Err(err) = out.write_all(value) {
        de_err!("print_colored: out.write_all(…) returned error {}", err);
        return Err(err);
    }
    if let Err(err) = out.reset() {
        de_err!("print_colored: out.reset() returned error {}", err);
        return Err(err);
    }

    out.flush()
}

/// Print colored output to terminal on stderr.
pub fn print_colored_stderr(
    color: Color,
    color_choice_opt: Option<ColorChoice>,
    value: &[u8],
) -> Result<()> {
    let choice: ColorChoice = color_choice_opt.unwrap_or(ColorChoice::Auto);
    let mut stderr = termcolor::StandardStream::stderr(choice);

    print_colored(color, value, &mut stderr)
}

/// Safely write the `buffer` to stderr with help of [`StderrLock`].
///
/// [`StderrLock`]: std::io::StderrLock
pub fn write_stderr(buffer: &[u8]) {
    let mut stderr_lock = std::io::stderr().lock();
    if let Err(_err) = stderr_lock.write_all(buffer) {
        de_err!("stderr_lock.write_all(buffer@{:p} (len {})) error {}", buffer, buffer.len(), _err);
    }
    if let Err(_err) = stderr_lock.flush() {
        de_err!("stderr flushing error {}", _err);
    }
}
