//! `lz4opt` — an LZ4 compressor built around optimal parsing, plus a
//! decompressor for the LZ4 frame and legacy frame formats.
//!
//! The encoder produces streams that any conforming LZ4 tool can read: the
//! modern frame format (magic `0x184D2204`, 4 MiB blocks, linked history) or
//! the legacy frame format (magic `0x184C2102`, 8 MiB independent blocks).
//! Compression quality is controlled by the match-chain search depth; at the
//! highest setting the encoder performs true optimal parsing, selecting for
//! every block the token sequence with the minimum encoded byte count.
//!
//! # Crate layout
//!
//! | Module   | Contents |
//! |----------|----------|
//! | `block`  | Block machinery: sliding window buffer, hash-chain match finder, backward-DP cost estimator, token emitter. |
//! | `frame`  | Frame formats: header encode/parse, encoder main loop, decoder state machine, error type. |
//! | `io`     | File-level plumbing: stdin/stdout sentinels, overwrite policy, compress/decompress a named file. |
//! | `cli`    | Command-line argument parsing, help text, verbosity macros. |
//! | `xxhash` | XXH32 wrapper used for the frame header checksum. |
//! | `config` | Compile-time defaults (compression level, buffer sizes). |

pub mod config;
pub mod xxhash;

pub mod block;
pub mod frame;
pub mod io;
pub mod cli;

// ── Top-level re-exports ──────────────────────────────────────────────────────

pub use frame::compress::{compress, max_chain_length_for_level, CompressPrefs, CompressStats};
pub use frame::decompress::{decompress, decompress_with_dictionary, DecompressStats};
pub use frame::types::DecompressError;

/// Crate version string, taken from the package manifest.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
