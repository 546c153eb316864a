//! File-level plumbing: path resolution and whole-file codec operations.

pub mod file_io;
pub mod codec;

pub use codec::{compress_filename, decompress_filename};
pub use file_io::{open_dst_file, open_src_file, STDIN_MARK, STDOUT_MARK};
