//! Compile-time configuration constants.
//!
//! These govern the defaults used by the CLI and the granularity of stream
//! I/O.  None of them affect the produced byte stream except
//! [`CLEVEL_DEFAULT`], which selects the default parsing regime.

/// Default compression level applied when no `-#` flag is given.
///
/// `9` selects optimal parsing with an unbounded match chain.
pub const CLEVEL_DEFAULT: u32 = 9;

/// Encoder pull granularity: how many bytes are requested from the input
/// per read call while filling a block.  Any non-zero value produces the
/// same output; 64 KiB keeps syscall overhead negligible.
pub const READ_BUFFER_SIZE: usize = 64 * 1024;

/// Decoder pull granularity.  The decoder consumes its input byte by byte,
/// so reads are staged through a small buffer of this size.
pub const DECODE_BUFFER_SIZE: usize = 4 * 1024;
