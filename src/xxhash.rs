//! Thin wrapper around the `xxhash-rust` crate providing the XXH32 API used
//! by the frame layer.
//!
//! Only XXH32 is needed: the LZ4 frame format derives its one-byte header
//! checksum from it.

/// One-shot XXH32 hash of `data` with the given `seed`.
#[inline]
pub fn xxh32_oneshot(data: &[u8], seed: u32) -> u32 {
    xxhash_rust::xxh32::xxh32(data, seed)
}
