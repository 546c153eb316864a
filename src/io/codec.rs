//! Whole-file compression and decompression with byte statistics.

use std::io;

use crate::displaylevel;
use crate::frame::compress::{compress, CompressPrefs, CompressStats};
use crate::frame::decompress::{decompress_with_dictionary, DecompressStats};
use crate::frame::types::DecompressError;
use crate::io::file_io::{open_dst_file, open_src_file};

/// Compresses the file (or stdin) at `src` into `dst` (or stdout).
///
/// Reports the compression ratio on stderr at verbosity level 2.
pub fn compress_filename(
    src: &str,
    dst: &str,
    prefs: &CompressPrefs,
    overwrite: bool,
) -> io::Result<CompressStats> {
    let mut reader = open_src_file(src)?;
    let mut writer = open_dst_file(dst, overwrite)?;
    let stats = compress(reader.as_mut(), writer.as_mut(), prefs)?;

    let ratio = if stats.bytes_read == 0 {
        100.0
    } else {
        stats.bytes_written as f64 / stats.bytes_read as f64 * 100.0
    };
    displaylevel!(
        2,
        "Compressed {} bytes into {} bytes ==> {:.2}%\n",
        stats.bytes_read,
        stats.bytes_written,
        ratio
    );
    Ok(stats)
}

/// Decompresses the frame in `src` (or stdin) into `dst` (or stdout),
/// optionally seeding the history with `dictionary`.
pub fn decompress_filename(
    src: &str,
    dst: &str,
    dictionary: Option<&[u8]>,
    overwrite: bool,
) -> Result<DecompressStats, DecompressError> {
    let mut reader = open_src_file(src)?;
    let mut writer = open_dst_file(dst, overwrite)?;
    let stats = decompress_with_dictionary(reader.as_mut(), writer.as_mut(), dictionary)?;
    writer.flush()?;

    displaylevel!(
        2,
        "Decompressed {} bytes from {} compressed bytes\n",
        stats.bytes_written,
        stats.bytes_read
    );
    Ok(stats)
}
