//! Block format constants and the [`Match`] type.
//!
//! The numeric constants here are fixed by the LZ4 block format; the parsing
//! thresholds ([`SHORT_CHAINS_GREEDY`], [`SHORT_CHAINS_LAZY`],
//! [`MAX_SAME_LETTER`]) are encoder tunables that only influence which valid
//! stream is produced, never whether the stream is valid.

// ── LZ4 block format invariants ──────────────────────────────────────────────

/// Minimum back-reference length.  Shorter repeats are emitted as literals.
pub const MIN_MATCH: usize = 4;

/// No match may start closer than this to the end of a block.
pub const BLOCK_END_NO_MATCH: usize = 12;

/// The last bytes of every block are always literals.
pub const BLOCK_END_LITERALS: usize = 5;

/// Maximum back-reference distance (the 16-bit offset field, zero excluded).
pub const MAX_DISTANCE: usize = 65_535;

/// Maximum uncompressed block size in the modern frame format
/// (block-size ID 7).
pub const MAX_BLOCK_SIZE: usize = 4 * 1024 * 1024;

/// Fixed uncompressed block size of the legacy frame format.
pub const MAX_BLOCK_SIZE_LEGACY: usize = 8 * 1024 * 1024;

// ── Match finder parameters ──────────────────────────────────────────────────

/// Width of the hash used to bucket 4-byte prefixes (2^20 table entries).
pub const HASH_BITS: u32 = 20;

/// Number of entries in the `last_hash` table.
pub const HASH_SIZE: usize = 1 << HASH_BITS;

/// Multiplier of the 4-byte prefix hash.  Any odd constant with good
/// avalanche behaviour works; this one is a classic LCG multiplier.
pub const HASH_MULTIPLIER: u32 = 22_695_477;

/// Right shift applied after the hash multiply, leaving [`HASH_BITS`] bits.
pub const HASH_SHIFT: u32 = 32 - HASH_BITS;

/// Number of entries in each previous-match ring (one slot per position
/// modulo 2^16).
pub const PREVIOUS_SIZE: usize = 1 << 16;

/// Ring value marking "no predecessor".  Chain back-links are strictly
/// positive distances, so zero is free to act as the terminator.
pub const NO_PREVIOUS: u16 = 0;

/// Run-length threshold past which positions inside a run of identical
/// bytes inherit their predecessor's match instead of re-searching.  Caps
/// the cost of pathological inputs at the price of a slightly sub-optimal
/// parse inside very long runs.
pub const MAX_SAME_LETTER: u32 = 19 + 255 * 256;

// ── Parsing regime thresholds ────────────────────────────────────────────────

/// Chain lengths up to this use greedy parsing (no cost estimation).
pub const SHORT_CHAINS_GREEDY: u32 = 3;

/// Chain lengths up to this (and above [`SHORT_CHAINS_GREEDY`]) use lazy
/// evaluation: one extra lookahead position after each accepted match.
pub const SHORT_CHAINS_LAZY: u32 = 6;

// ── Match ────────────────────────────────────────────────────────────────────

/// A back-reference candidate: the `length` bytes at the current position
/// duplicate the `length` bytes starting `distance` bytes earlier.
///
/// Valid as an emitted match iff `length >= MIN_MATCH` and
/// `1 <= distance <= MAX_DISTANCE`.  The "no match" sentinel is
/// [`Match::LITERAL`] (length 1, distance 0): emit one literal byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    /// Number of duplicated bytes; 1 means "single literal".
    pub length: u32,
    /// Backward distance to the referenced bytes; 0 means "no match".
    pub distance: u16,
}

impl Match {
    /// The "emit one literal" sentinel.
    pub const LITERAL: Match = Match {
        length: 1,
        distance: 0,
    };

    /// `true` when long enough to be emitted as a back-reference.
    #[inline]
    pub fn is_match(&self) -> bool {
        self.length as usize >= MIN_MATCH
    }
}

impl Default for Match {
    fn default() -> Self {
        Match::LITERAL
    }
}
