//! Block-level compression machinery.
//!
//! A block is a unit of up to 4 MiB (modern frame) or 8 MiB (legacy frame).
//! Encoding a block runs through four stages, each owned by a submodule:
//!
//! 1. [`buffer`] — the sliding window holding the block plus the trailing
//!    64 KiB of history from earlier blocks.
//! 2. [`finder`] — the dual hash-chain match finder, which assigns every
//!    position its longest back-reference within 64 KiB.
//! 3. [`cost`] — the backward dynamic-programming pass that rewrites those
//!    matches to the choice minimizing total encoded bytes.
//! 4. [`emit`] — the token emitter translating the chosen matches into LZ4
//!    block bytes.

pub mod types;
pub mod buffer;
pub mod finder;
pub mod cost;
pub mod emit;

pub use buffer::BlockBuffer;
pub use cost::estimate_costs;
pub use emit::select_best_matches;
pub use finder::MatchFinder;
pub use types::Match;
