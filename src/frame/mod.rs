//! LZ4 frame formats: header layout, encoder main loop, decoder.
//!
//! Two wire formats are supported:
//!
//! - the **modern frame** (magic `0x184D2204`): a fixed 7-byte header, a
//!   sequence of size-tagged blocks (compressed or stored verbatim), and a
//!   zero end mark;
//! - the **legacy frame** (magic `0x184C2102`): the magic followed by
//!   independently compressed 8 MiB blocks with no end mark.

pub mod types;
pub mod header;
pub mod compress;
pub mod decompress;

pub use compress::{compress, CompressPrefs, CompressStats};
pub use decompress::{decompress, decompress_with_dictionary, DecompressStats};
pub use types::DecompressError;
