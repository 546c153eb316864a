//! Frame format constants and the decoder error type.

use core::fmt;
use std::io;

// ── Magic numbers ────────────────────────────────────────────────────────────

/// Modern LZ4 frame magic, stored little-endian (`04 22 4D 18` on the wire).
pub const MAGIC: u32 = 0x184D_2204;

/// Legacy frame magic, stored little-endian (`02 21 4C 18` on the wire).
pub const MAGIC_LEGACY: u32 = 0x184C_2102;

// ── Frame descriptor flag bits (FLG byte) ────────────────────────────────────

/// Dictionary-ID field present.  Not supported by the decoder.
pub const FLG_DICT_ID: u8 = 0x01;
/// A 4-byte content checksum follows the end mark.
pub const FLG_CONTENT_CHECKSUM: u8 = 0x04;
/// An 8-byte content size is part of the header.
pub const FLG_CONTENT_SIZE: u8 = 0x08;
/// Each block is followed by a 4-byte checksum.
pub const FLG_BLOCK_CHECKSUM: u8 = 0x10;

/// The FLG byte this encoder writes: format version 01, no optional fields.
pub const FLG_BYTE: u8 = 0x40;

/// The BD byte this encoder writes: maximum block size ID 7 (4 MiB).
pub const BD_BYTE: u8 = 0x70;

// ── Block size tag ───────────────────────────────────────────────────────────

/// High bit of a modern block tag: the block is stored uncompressed.
pub const BLOCK_UNCOMPRESSED_FLAG: u32 = 0x8000_0000;

// ── Decoder errors ───────────────────────────────────────────────────────────

/// Errors raised while decoding a frame.  All are fatal for the stream.
#[derive(Debug)]
pub enum DecompressError {
    /// The first four bytes match neither frame magic.
    InvalidSignature,
    /// The frame header requests a feature this decoder does not implement
    /// (a dictionary ID).
    UnsupportedFeature,
    /// The input ended before the stream logically did.
    OutOfData,
    /// A compressed block contains a match with distance zero.
    InvalidOffset,
    /// A token's literal run or match descriptor extends past the declared
    /// block size.
    TruncatedBlock,
    /// The output sink (or input source) failed.
    Io(io::Error),
}

impl fmt::Display for DecompressError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecompressError::InvalidSignature => write!(f, "invalid signature"),
            DecompressError::UnsupportedFeature => write!(f, "unsupported feature (dictionary id)"),
            DecompressError::OutOfData => write!(f, "out of data"),
            DecompressError::InvalidOffset => write!(f, "invalid offset"),
            DecompressError::TruncatedBlock => write!(f, "truncated block"),
            DecompressError::Io(e) => write!(f, "i/o error: {}", e),
        }
    }
}

impl std::error::Error for DecompressError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DecompressError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for DecompressError {
    fn from(e: io::Error) -> Self {
        DecompressError::Io(e)
    }
}
