// src/tests/mod.rs

//! Tests for _ssblib_.
//!
//! Tests are placed at `src/tests/`, inside the `ssblib`, so they may reach
//! crate-internal items. Tests at top-level path `tests/` run against the
//! public API only.

pub mod common;
pub mod pool_tests;
pub mod rounds_tests;
