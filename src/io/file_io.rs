//! Source and destination resolution.
//!
//! Paths are plain strings; the sentinels [`STDIN_MARK`] and
//! [`STDOUT_MARK`] route to the standard streams.  Destinations enforce the
//! overwrite policy: an existing file is refused unless the caller passed
//! the force flag.

use std::fs::{File, OpenOptions};
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

/// Sentinel: read from standard input.
pub const STDIN_MARK: &str = "stdin";

/// Sentinel: write to standard output.
pub const STDOUT_MARK: &str = "stdout";

/// Opens a source for reading.  The sentinel resolves to stdin; regular
/// files are wrapped in a [`BufReader`].
pub fn open_src_file(path: &str) -> io::Result<Box<dyn Read>> {
    if path == STDIN_MARK {
        return Ok(Box::new(io::stdin()));
    }
    let f = File::open(path)?;
    Ok(Box::new(BufReader::new(f)))
}

/// Opens a destination for writing.  The sentinel resolves to stdout.
///
/// When `overwrite` is `false` and `path` names an existing file, the call
/// fails with [`io::ErrorKind::AlreadyExists`] instead of clobbering it.
pub fn open_dst_file(path: &str, overwrite: bool) -> io::Result<Box<dyn Write>> {
    if path == STDOUT_MARK {
        return Ok(Box::new(io::stdout()));
    }
    if !overwrite && Path::new(path).exists() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("{}: already exists; not overwritten", path),
        ));
    }
    let f = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;
    Ok(Box::new(BufWriter::new(f)))
}
