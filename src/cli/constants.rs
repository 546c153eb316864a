//! CLI constants and display macros.
//!
//! Verbosity is a process-wide atomic so every module can gate its output
//! without threading a context struct through the call graph:
//!
//!   0 — completely silent
//!   1 — errors only
//!   2 — normal informational output (default)
//!   3 — verbose / diagnostic

use std::sync::atomic::{AtomicU32, Ordering};

/// Program name used in diagnostics and the help screen.
pub const PROG_NAME: &str = "lz4opt";

/// Current verbosity level; see the module docs for the scale.
pub static DISPLAY_LEVEL: AtomicU32 = AtomicU32::new(2);

/// Returns the current verbosity level.
#[inline]
pub fn display_level() -> u32 {
    DISPLAY_LEVEL.load(Ordering::Relaxed)
}

/// Sets the verbosity level.
#[inline]
pub fn set_display_level(level: u32) {
    DISPLAY_LEVEL.store(level, Ordering::Relaxed);
}

/// Write a formatted message to **stderr** if the current verbosity level
/// is at least `level`.
#[macro_export]
macro_rules! displaylevel {
    ($level:expr, $($arg:tt)*) => {
        if $crate::cli::constants::display_level() >= $level {
            eprint!($($arg)*);
        }
    };
}
