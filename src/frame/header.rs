//! Frame header and block tag emission.

use std::io::{self, Write};

use crate::frame::types::{BD_BYTE, BLOCK_UNCOMPRESSED_FLAG, FLG_BYTE, MAGIC, MAGIC_LEGACY};
use crate::xxhash::xxh32_oneshot;

/// Computes the single-byte frame header checksum: the second byte of the
/// XXH32 of the frame descriptor (FLG and BD bytes).
#[inline]
pub fn header_checksum(descriptor: &[u8]) -> u8 {
    ((xxh32_oneshot(descriptor, 0) >> 8) & 0xFF) as u8
}

/// Number of bytes [`write_frame_header`] emits for each format.
pub const MODERN_HEADER_SIZE: usize = 7;
pub const LEGACY_HEADER_SIZE: usize = 4;

/// Writes the frame header: magic, and for the modern format the
/// descriptor (FLG, BD) plus its checksum byte.  Returns the byte count.
pub fn write_frame_header<W: Write + ?Sized>(dst: &mut W, legacy: bool) -> io::Result<usize> {
    if legacy {
        dst.write_all(&MAGIC_LEGACY.to_le_bytes())?;
        Ok(LEGACY_HEADER_SIZE)
    } else {
        dst.write_all(&MAGIC.to_le_bytes())?;
        let descriptor = [FLG_BYTE, BD_BYTE];
        dst.write_all(&descriptor)?;
        dst.write_all(&[header_checksum(&descriptor)])?;
        Ok(MODERN_HEADER_SIZE)
    }
}

/// Writes a 4-byte little-endian block size tag.  In the modern format the
/// top bit marks a block stored uncompressed; the legacy format has no such
/// discriminator (`uncompressed` must be `false`).
pub fn write_block_tag<W: Write + ?Sized>(
    dst: &mut W,
    size: u32,
    uncompressed: bool,
) -> io::Result<()> {
    let tagged = if uncompressed {
        size | BLOCK_UNCOMPRESSED_FLAG
    } else {
        size
    };
    dst.write_all(&tagged.to_le_bytes())
}

/// Writes the zero end mark that terminates a modern frame.
pub fn write_end_mark<W: Write + ?Sized>(dst: &mut W) -> io::Result<()> {
    dst.write_all(&0u32.to_le_bytes())
}
