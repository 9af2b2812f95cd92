// src/debug/mod.rs

//! The `debug` module is macros for printing errors and warnings, some of
//! them only in debug builds and test builds.

pub mod printers;
