// src/lib.rs

//! _ssblib_ times membership lookup of a sequence versus a set over
//! increasing sample sizes, and a few other small routines.
//!
//! The driver program is _ssb_.

pub mod bench;
pub mod common;
pub mod data;
pub mod debug;
pub mod printer;
#[cfg(test)]
pub mod tests;
