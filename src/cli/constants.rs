//! Verbosity plumbing for the `demos/` binaries (SPEC_FULL.md §D).
//!
//! The library core is silent by design (spec §9: no I/O, no logging
//! surface). Diagnostics live only at the CLI layer, realized the way the
//! teacher's `cli::constants` does it: a crate-level atomic level plus a
//! `displaylevel!` macro gating `eprintln!`, rather than a `log`/`tracing`
//! dependency neither the teacher nor this library's core needs.

use std::sync::atomic::{AtomicU32, Ordering};

/// 0 = silent; 1 = errors only; 2 = normal; 3 = verbose.
pub static DISPLAY_LEVEL: AtomicU32 = AtomicU32::new(2);

#[inline]
pub fn display_level() -> u32 {
    DISPLAY_LEVEL.load(Ordering::Relaxed)
}

#[inline]
pub fn set_display_level(level: u32) {
    DISPLAY_LEVEL.store(level, Ordering::Relaxed);
}

/// Conditionally prints to stderr at or above `level`.
#[macro_export]
macro_rules! displaylevel {
    ($level:expr, $($arg:tt)*) => {
        if $crate::cli::constants::display_level() >= $level {
            eprint!($($arg)*);
        }
    };
}
