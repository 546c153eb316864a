//! Frame compression: the encoder main loop.
//!
//! Control flow per block: refill the sliding window from the input, run
//! the match finder over the block, let the cost estimator rewrite the
//! matches to the minimum-byte parse, emit the token stream, then wrap the
//! result in a size tag (falling back to a stored block when compression
//! did harm).  The window then shrinks to the trailing 64 KiB and the loop
//! repeats until the input drains.

use std::io::{self, Read, Write};

use crate::block::buffer::BlockBuffer;
use crate::block::cost::estimate_costs;
use crate::block::emit::select_best_matches;
use crate::block::finder::MatchFinder;
use crate::block::types::{
    Match, BLOCK_END_NO_MATCH, MAX_BLOCK_SIZE, MAX_BLOCK_SIZE_LEGACY, MAX_DISTANCE,
    SHORT_CHAINS_GREEDY,
};
use crate::config::READ_BUFFER_SIZE;
use crate::frame::header::{write_block_tag, write_end_mark, write_frame_header};

/// History window a dictionary can seed: exactly 64 KiB, front-padded with
/// zeros when the dictionary is shorter.
const MAX_DICTIONARY: usize = 65_536;

// ─────────────────────────────────────────────────────────────────────────────
// Preferences
// ─────────────────────────────────────────────────────────────────────────────

/// Encoder configuration.
#[derive(Debug, Clone, Default)]
pub struct CompressPrefs {
    /// Match-chain search depth per position.  0 stores every block
    /// uncompressed (still wrapped in the frame format); 1 to 3 parse
    /// greedily; 4 to 6 add lazy lookahead; anything above
    /// [`SHORT_CHAINS_GREEDY`] enables the cost estimator, and large values
    /// (see [`max_chain_length_for_level`]) give optimal parsing.
    pub max_chain_length: u32,
    /// Emit the legacy frame format: 8 MiB independent blocks, no end mark.
    pub use_legacy_format: bool,
    /// Optional dictionary, prepended to the first block as history.  Only
    /// the last 64 KiB are used; shorter dictionaries are front-padded.
    pub dictionary: Option<Vec<u8>>,
}

impl CompressPrefs {
    /// Preferences for a numeric compression level 0 to 9.
    pub fn from_level(level: u32) -> Self {
        CompressPrefs {
            max_chain_length: max_chain_length_for_level(level),
            ..CompressPrefs::default()
        }
    }
}

/// Maps a CLI compression level to a chain search depth: levels 0 to 8 are
/// the depth itself, level 9 and above remove the limit (optimal parsing).
pub fn max_chain_length_for_level(level: u32) -> u32 {
    if level >= 9 {
        MAX_DISTANCE as u32
    } else {
        level
    }
}

/// Byte counts produced by a compression run.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompressStats {
    /// Uncompressed bytes consumed from the source.
    pub bytes_read: u64,
    /// Bytes emitted to the sink, headers and tags included.
    pub bytes_written: u64,
}

// ─────────────────────────────────────────────────────────────────────────────
// Compression loop
// ─────────────────────────────────────────────────────────────────────────────

/// Reads `src` to exhaustion and writes one complete frame to `dst`.
///
/// The stream is never seeked: input is pulled in
/// [`READ_BUFFER_SIZE`] chunks and output is pushed block by block, each
/// block emitted only after it has been fully parsed and encoded.
pub fn compress<R, W>(src: &mut R, dst: &mut W, prefs: &CompressPrefs) -> io::Result<CompressStats>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    let legacy = prefs.use_legacy_format;
    // Depth 0: pass input through, still wrapped in the frame format.
    let uncompressed = prefs.max_chain_length == 0;
    let max_block_size = (if legacy {
        MAX_BLOCK_SIZE_LEGACY
    } else {
        MAX_BLOCK_SIZE
    }) as u64;

    let mut stats = CompressStats::default();
    stats.bytes_written += write_frame_header(dst, legacy)? as u64;

    let mut buf = BlockBuffer::new();
    let mut finder = MatchFinder::new(prefs.max_chain_length);
    let mut read_buf = vec![0u8; READ_BUFFER_SIZE];
    let mut matches: Vec<Match> = Vec::new();

    // Absolute offset one past the last byte read from the source (plus
    // any prepended dictionary).
    let mut num_read: u64 = 0;
    // Block borders, absolute: [last_block, next_block).
    let mut next_block: u64 = 0;

    let mut parse_dictionary = prefs.dictionary.as_ref().is_some_and(|d| !d.is_empty());
    let mut dict_lookback: u64 = 0;

    loop {
        // The dictionary occupies the 64 KiB in front of the first block;
        // its bytes are hashed but never emitted.
        if parse_dictionary {
            let dict = prefs.dictionary.as_deref().unwrap_or(&[]);
            if dict.len() < MAX_DICTIONARY {
                buf.append_zeros(MAX_DICTIONARY - dict.len());
                buf.append(dict);
            } else {
                buf.append(&dict[dict.len() - MAX_DICTIONARY..]);
            }
            dict_lookback = dict.len().min(MAX_DICTIONARY) as u64;
            next_block = buf.end();
            num_read = buf.end();
        }

        // Refill: pull until one full block is buffered or the input ends.
        while num_read - next_block < max_block_size {
            let incoming = read_some(src, &mut read_buf)?;
            if incoming == 0 {
                break;
            }
            num_read += incoming as u64;
            stats.bytes_read += incoming as u64;
            buf.append(&read_buf[..incoming]);
        }
        if next_block == num_read {
            break; // input drained
        }

        let last_block = next_block;
        next_block = (last_block + max_block_size).min(num_read);
        let block_size = (next_block - last_block) as usize;

        // Positions re-inserted into the chains before matching starts:
        // the previous block's unhashed tail, or the dictionary.
        let lookback: u64 = if legacy {
            0
        } else if parse_dictionary {
            dict_lookback
        } else {
            (last_block - buf.data_zero()).min(BLOCK_END_NO_MATCH as u64)
        };
        parse_dictionary = false;

        let mut payload: Vec<u8> = Vec::new();
        if !uncompressed {
            finder.find_block_matches(&buf, last_block, next_block, lookback, &mut matches);
            if matches.len() > BLOCK_END_NO_MATCH && prefs.max_chain_length > SHORT_CHAINS_GREEDY {
                estimate_costs(&mut matches);
            }
            payload = select_best_matches(&matches, buf.slice(last_block, block_size));
        } else if legacy {
            // Legacy blocks have no stored-uncompressed discriminator, so a
            // depth-0 block is still token-encoded, as one big literal run.
            matches.clear();
            matches.resize(block_size, Match::LITERAL);
            payload = select_best_matches(&matches, buf.slice(last_block, block_size));
        }

        // Did compression do harm?  Modern blocks fall back to verbatim
        // storage; the legacy format always writes the token form.
        let use_compression = legacy || (!uncompressed && payload.len() < block_size);
        let num_bytes = (if use_compression {
            payload.len()
        } else {
            block_size
        }) as u32;
        write_block_tag(dst, num_bytes, !use_compression && !legacy)?;
        if use_compression {
            dst.write_all(&payload)?;
        } else {
            dst.write_all(buf.slice(last_block, block_size))?;
        }
        stats.bytes_written += 4 + num_bytes as u64;

        if legacy {
            // Legacy blocks are independent: drop all history.
            buf.clear();
            finder.reset();
        } else {
            buf.retain_history();
        }
    }

    if !legacy {
        write_end_mark(dst)?;
        stats.bytes_written += 4;
    }
    dst.flush()?;
    Ok(stats)
}

/// One pull from the source, retrying on `Interrupted`.
fn read_some<R: Read + ?Sized>(src: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    loop {
        match src.read(buf) {
            Ok(n) => return Ok(n),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
}
