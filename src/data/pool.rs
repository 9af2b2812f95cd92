// src/data/pool.rs

//! Implements the [`CandidatePool`], the name generators that fill it, the
//! per-size [`Sample`], and the caller-owned [`BenchContext`].
//!
//! The pool is generated once, validated once against the probe value, and
//! then only read. A `Sample` borrows a prefix of the pool.

use crate::common::{
    BenchError,
    BenchResult,
    SampleSize,
};

use std::collections::{BTreeSet, HashSet};
use std::fmt;

use ::more_asserts::debug_assert_le;
use ::rand::rngs::StdRng;
use ::rand::seq::IndexedRandom;
use ::rand::{Rng, SeedableRng};
#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// globals and constants
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// The default probe value. Never produced by [`FakeNameGenerator`].
pub const PROBE_DEFAULT: &str = "John Doe";

/// Default pool size for the single-size demonstrations.
pub const DATA_SET_SIZE: usize = 10_000;

/// Default seed of [`FakeNameGenerator`].
pub const DEFAULT_SEED: u64 = 0x5eed_0f_5e7;

const FIRST_NAMES: [&str; 96] = [
    "Aaron", "Abigail", "Adam", "Alice", "Amanda", "Amy", "Andrea", "Andrew",
    "Angela", "Anna", "Anthony", "Ashley", "Barbara", "Benjamin", "Betty", "Beverly",
    "Brandon", "Brenda", "Brian", "Bruce", "Carl", "Carol", "Catherine", "Charles",
    "Cheryl", "Christina", "Christopher", "Cynthia", "Daniel", "David", "Deborah", "Dennis",
    "Diana", "Donald", "Donna", "Dorothy", "Douglas", "Dylan", "Edward", "Elizabeth",
    "Emily", "Emma", "Eric", "Ethan", "Evelyn", "Frances", "Frank", "Gary",
    "George", "Gloria", "Grace", "Gregory", "Hannah", "Harold", "Heather", "Helen",
    "Henry", "Isabella", "Jack", "Jacob", "James", "Janet", "Jason", "Jeffrey",
    "Jennifer", "Jeremy", "Jessica", "John", "Jonathan", "Joseph", "Joshua", "Joyce",
    "Judith", "Julia", "Justin", "Karen", "Katherine", "Keith", "Kelly", "Kenneth",
    "Kevin", "Kimberly", "Larry", "Laura", "Lauren", "Linda", "Lisa", "Margaret",
    "Maria", "Mark", "Mary", "Matthew", "Melissa", "Michael", "Nancy", "Olivia",
];

// "Doe" is deliberately absent so `PROBE_DEFAULT` cannot be generated.
const LAST_NAMES: [&str; 96] = [
    "Adams", "Allen", "Alvarez", "Anderson", "Bailey", "Baker", "Bennett", "Brooks",
    "Brown", "Butler", "Campbell", "Carter", "Castillo", "Chavez", "Clark", "Collins",
    "Cook", "Cooper", "Cox", "Cruz", "Davis", "Diaz", "Edwards", "Evans",
    "Fisher", "Flores", "Foster", "Garcia", "Gomez", "Gonzalez", "Gray", "Green",
    "Gutierrez", "Hall", "Harris", "Hernandez", "Hill", "Howard", "Hughes", "Jackson",
    "James", "Jenkins", "Johnson", "Jones", "Kelly", "Kim", "King", "Lee",
    "Lewis", "Long", "Lopez", "Martin", "Martinez", "Miller", "Mitchell", "Moore",
    "Morales", "Morgan", "Morris", "Murphy", "Myers", "Nelson", "Nguyen", "Ortiz",
    "Parker", "Patel", "Perez", "Peterson", "Phillips", "Price", "Ramirez", "Reed",
    "Reyes", "Richardson", "Rivera", "Roberts", "Robinson", "Rodriguez", "Rogers", "Ross",
    "Ruiz", "Sanchez", "Sanders", "Scott", "Smith", "Stewart", "Sullivan", "Taylor",
    "Thomas", "Thompson", "Torres", "Turner", "Walker", "Ward", "Watson", "White",
];

const SUFFIXES: [&str; 4] = ["Jr.", "Sr.", "II", "MD"];

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// generators
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Produces the values of a [`CandidatePool`].
pub trait NameGenerator {
    /// Return `n` generated values.
    fn generate(&mut self, n: usize) -> Vec<String>;
}

/// Seeded generator of person-like names, e.g. `"Grace Henry K. Turner"`.
///
/// The same seed always yields the same sequence of names. There are about
/// 23 million distinct names, so a pool of 100,000 has few duplicates.
/// Duplicates are harmless.
pub struct FakeNameGenerator {
    rng: StdRng,
    seed: u64,
}

impl FakeNameGenerator {
    pub fn new(seed: u64) -> FakeNameGenerator {
        FakeNameGenerator {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    fn name(&mut self) -> String {
        let first: &str = FIRST_NAMES.choose(&mut self.rng).copied().unwrap_or("Anon");
        let middle: &str = FIRST_NAMES.choose(&mut self.rng).copied().unwrap_or("Anon");
        let last: &str = LAST_NAMES.choose(&mut self.rng).copied().unwrap_or("Anon");
        let initial: char = char::from(b'A' + self.rng.random_range(0..26u8));
        // roughly one name in twenty carries a suffix
        if self.rng.random_range(0..20) == 0 {
            let suffix: &str = SUFFIXES.choose(&mut self.rng).copied().unwrap_or("");
            format!("{} {} {}. {} {}", first, middle, initial, last, suffix)
        } else {
            format!("{} {} {}. {}", first, middle, initial, last)
        }
    }
}

impl Default for FakeNameGenerator {
    fn default() -> Self {
        FakeNameGenerator::new(DEFAULT_SEED)
    }
}

impl NameGenerator for FakeNameGenerator {
    fn generate(&mut self, n: usize) -> Vec<String> {
        defn!("({})", n);
        let mut names: Vec<String> = Vec::with_capacity(n);
        for _ in 0..n {
            names.push(self.name());
        }
        defx!("return {} names", names.len());

        names
    }
}

/// Adapts a closure into a [`NameGenerator`].
pub struct FnGenerator<F>(pub F)
where
    F: FnMut(usize) -> Vec<String>;

impl<F> NameGenerator for FnGenerator<F>
where
    F: FnMut(usize) -> Vec<String>,
{
    fn generate(&mut self, n: usize) -> Vec<String> {
        (self.0)(n)
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// CandidatePool
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Generated values from which samples are sliced.
///
/// Constructing a `CandidatePool` checks that the probe value is absent.
/// A pool that exists is a pool that passed that check.
#[derive(Clone, Debug)]
pub struct CandidatePool {
    names: Vec<String>,
}

impl CandidatePool {
    /// Create a `CandidatePool` from `names`.
    ///
    /// Returns [`BenchError::ProbeInPool`] if `probe` is one of `names`.
    pub fn new(names: Vec<String>, probe: &str) -> BenchResult<CandidatePool> {
        defn!("({} names, {:?})", names.len(), probe);
        if let Some(index) = names.iter().position(|name| name == probe) {
            defx!("probe found at index {}", index);
            return Err(BenchError::ProbeInPool {
                probe: probe.to_string(),
                index,
            });
        }
        defx!();

        Ok(CandidatePool { names })
    }

    /// Generate `n` values with `generator` then create a `CandidatePool`.
    pub fn generate<G: NameGenerator + ?Sized>(
        generator: &mut G,
        n: usize,
        probe: &str,
    ) -> BenchResult<CandidatePool> {
        CandidatePool::new(generator.generate(n), probe)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn names(&self) -> &[String] {
        self.names.as_slice()
    }

    /// Count of distinct values in the pool.
    pub fn count_unique(&self) -> usize {
        self.names.iter().map(String::as_str).collect::<HashSet<&str>>().len()
    }

    /// The first `size` values as a [`Sample`] with a `set_kind` set.
    pub fn sample(&self, size: SampleSize, set_kind: SetKind) -> BenchResult<Sample<'_>> {
        if size == 0 {
            return Err(BenchError::ZeroSampleSize);
        }
        if size > self.names.len() {
            return Err(BenchError::SampleSizeExceedsPool {
                size,
                pool_len: self.names.len(),
            });
        }
        let seq: &[String] = &self.names[..size];
        let set: SetRepr = SetRepr::from_slice(seq, set_kind);
        debug_assert_le!(set.len(), seq.len(), "set has more entries than its sequence");

        Ok(Sample { seq, set })
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Sample
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Which uniqueness-based set represents a [`Sample`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SetKind {
    /// `HashSet`, expected O(1) lookup
    #[default]
    Hash,
    /// `BTreeSet`, O(log n) lookup
    BTree,
}

impl fmt::Display for SetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetKind::Hash => write!(f, "HashSet"),
            SetKind::BTree => write!(f, "BTreeSet"),
        }
    }
}

/// The set half of a [`Sample`]. Duplicates collapsed, order discarded.
#[derive(Clone, Debug)]
pub enum SetRepr<'a> {
    Hash(HashSet<&'a str>),
    BTree(BTreeSet<&'a str>),
}

impl<'a> SetRepr<'a> {
    pub fn from_slice(seq: &'a [String], set_kind: SetKind) -> SetRepr<'a> {
        let values = seq.iter().map(String::as_str);
        match set_kind {
            SetKind::Hash => SetRepr::Hash(values.collect()),
            SetKind::BTree => SetRepr::BTree(values.collect()),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            SetRepr::Hash(set) => set.len(),
            SetRepr::BTree(set) => set.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn set_kind(&self) -> SetKind {
        match self {
            SetRepr::Hash(_) => SetKind::Hash,
            SetRepr::BTree(_) => SetKind::BTree,
        }
    }
}

/// A prefix of a [`CandidatePool`] as both an ordered sequence and a set.
#[derive(Clone, Debug)]
pub struct Sample<'a> {
    /// order and duplicates preserved
    pub seq: &'a [String],
    /// duplicates collapsed
    pub set: SetRepr<'a>,
}

impl Sample<'_> {
    pub fn size(&self) -> SampleSize {
        self.seq.len()
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// BenchContext
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Everything a benchmark run needs, owned by the caller and passed
/// explicitly: the generator, the probe value, and the memoized pool.
pub struct BenchContext<G: NameGenerator> {
    generator: G,
    probe: String,
    pool: Option<CandidatePool>,
    /// count of times the generator was called
    generated: usize,
}

impl<G: NameGenerator> BenchContext<G> {
    pub fn new(generator: G, probe: &str) -> BenchContext<G> {
        BenchContext {
            generator,
            probe: probe.to_string(),
            pool: None,
            generated: 0,
        }
    }

    pub fn probe(&self) -> &str {
        self.probe.as_str()
    }

    /// Count of pools generated so far.
    pub fn pools_generated(&self) -> usize {
        self.generated
    }

    /// Return a pool with at least `n` values.
    ///
    /// The pool is generated on first call and kept. A later call asking for
    /// more values than the kept pool holds replaces it. If the replacement
    /// fails the kept pool stays.
    pub fn pool_at_least(&mut self, n: usize) -> BenchResult<&CandidatePool> {
        defn!("({})", n);
        let pool: CandidatePool = match self.pool.take() {
            Some(kept) if kept.len() >= n => kept,
            kept => {
                defo!("generate pool of {}", n);
                match CandidatePool::generate(&mut self.generator, n, &self.probe) {
                    Ok(pool) => {
                        self.generated += 1;
                        pool
                    }
                    Err(err) => {
                        // a failed regeneration leaves the kept pool in place
                        self.pool = kept;
                        defx!("error {}", err);
                        return Err(err);
                    }
                }
            }
        };
        defx!();

        Ok(self.pool.insert(pool))
    }

    /// Return the already generated pool, if any.
    pub fn pool(&self) -> Option<&CandidatePool> {
        self.pool.as_ref()
    }
}

impl BenchContext<FakeNameGenerator> {
    /// A context with a seeded [`FakeNameGenerator`] and [`PROBE_DEFAULT`].
    pub fn with_seed(seed: u64) -> BenchContext<FakeNameGenerator> {
        BenchContext::new(FakeNameGenerator::new(seed), PROBE_DEFAULT)
    }
}
