// src/data/mod.rs

//! The `data` module is the benchmark data: the [`CandidatePool`] of
//! generated values, the [`Sample`]s sliced from it, and the
//! [`ResultRecord`]s produced by measuring them.
//!
//! ## Definitions of data
//!
//! ### Candidate pool
//!
//! All generated values for one run. Sized to the largest sample size.
//! Never contains the probe value.
//!
//! ### Sample
//!
//! The first _n_ values of the pool, held twice: as the ordered sequence
//! and as a set.
//!
//! ### Probe value
//!
//! The lookup key of every membership test. Always a miss, so a sequence
//! scan always visits every element.
//!
//! [`CandidatePool`]: crate::data::pool::CandidatePool
//! [`Sample`]: crate::data::pool::Sample
//! [`ResultRecord`]: crate::data::record::ResultRecord

pub mod pool;
pub mod record;
