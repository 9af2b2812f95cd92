// src/bench/mod.rs

//! Benchmark runners for _ssblib_.
//!
//! ## Overview of runners
//!
//! * [`timer`] times a routine called repeatedly.
//! * [`membership`] probes containers and drives the scaling benchmark
//!   over increasing sample sizes, producing [`ResultRecord`s].
//! * [`rounds`] runs grouped micro-benchmarks in rounds.
//! * [`stats`] summarizes timing distributions.
//!
//! [`ResultRecord`s]: crate::data::record::ResultRecord

pub mod membership;
pub mod rounds;
pub mod stats;
pub mod timer;
