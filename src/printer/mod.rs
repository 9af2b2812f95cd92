// src/printer/mod.rs

//! The `printer` module is for printing user-facing benchmark results
//! ([`ResultRecord`s], percentile tables, benchmark group tables)
//! with optional color.
//!
//! [`ResultRecord`s]: crate::data::record::ResultRecord

pub mod printers;
