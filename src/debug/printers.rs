// src/debug/printers.rs

//! Printer macros for user-facing errors and warnings.
//!
//! The `de_` variants only print in debug builds and test builds.

use std::fmt::Arguments;
use std::io::Write;

/// Write `label: message` to stderr as one locked write.
#[doc(hidden)]
pub fn eprint_labeled(label: &str, args: Arguments) {
    let mut stderr_lock = std::io::stderr().lock();
    // XXX: nothing useful to do if stderr is closed
    _ = writeln!(stderr_lock, "{}: {}", label, args);
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// `e`println! an `err`or
#[macro_export]
macro_rules! e_err {
    (
        $($args:tt)*
    ) => {
        $crate::debug::printers::eprint_labeled("ERROR", format_args!($($args)*))
    }
}
pub use e_err;

/// `e`println! a `warn`ing
#[macro_export]
macro_rules! e_wrn {
    (
        $($args:tt)*
    ) => {
        $crate::debug::printers::eprint_labeled("WARNING", format_args!($($args)*))
    }
}
pub use e_wrn;

/// `d`ebug `e`println! an `err`or
#[macro_export]
macro_rules! de_err {
    (
        $($args:tt)*
    ) => {
        {
            #[cfg(any(debug_assertions,test))]
            $crate::e_err!($($args)*)
        }
    }
}
pub use de_err;

/// `d`ebug `e`println! a `warn`ing
#[macro_export]
macro_rules! de_wrn {
    (
        $($args:tt)*
    ) => {
        {
            #[cfg(any(debug_assertions,test))]
            $crate::e_wrn!($($args)*)
        }
    }
}
pub use de_wrn;
