//! Hash-chain match finder.
//!
//! For every position the finder maintains two chains through the most
//! recent 64 KiB, both stored as rings of *relative* back-distances indexed
//! by position modulo 2^16 (entries age out naturally as newer positions
//! overwrite slots 65 536 bytes later):
//!
//! - `previous_hash` links positions whose 4-byte prefix hashes to the same
//!   20-bit bucket (may contain collisions).
//! - `previous_exact` links positions whose leading four bytes are
//!   byte-identical.  Following it from any position visits only confirmed
//!   prefix twins, in strictly decreasing offset order.
//!
//! Chain construction walks the hash chain to find the nearest confirmed
//! twin; the longest-match search then walks only the exact chain, so no
//! candidate ever needs its first four bytes re-verified.
//!
//! All tables are instance state and persist across blocks in the modern
//! frame format (history is linked); [`MatchFinder::reset`] clears them
//! between independent legacy blocks.

use crate::block::buffer::BlockBuffer;
use crate::block::types::{
    Match, BLOCK_END_LITERALS, BLOCK_END_NO_MATCH, HASH_MULTIPLIER, HASH_SHIFT, HASH_SIZE,
    MAX_DISTANCE, MAX_SAME_LETTER, MIN_MATCH, NO_PREVIOUS, PREVIOUS_SIZE, SHORT_CHAINS_GREEDY,
    SHORT_CHAINS_LAZY,
};

/// `last_hash` sentinel: this 20-bit bucket has never been observed.
pub const NO_LAST_HASH: u64 = u64::MAX;

#[inline]
fn hash_of(four: u32) -> usize {
    ((four.wrapping_mul(HASH_MULTIPLIER) >> HASH_SHIFT) as usize) & (HASH_SIZE - 1)
}

#[inline]
fn ring(abs: u64) -> usize {
    (abs as usize) & (PREVIOUS_SIZE - 1)
}

/// Match finder state: one hash table plus the two previous-match rings.
pub struct MatchFinder {
    /// Search budget: how many exact-chain candidates are evaluated per
    /// position.  Doubles as the compression-level selector (see
    /// [`max_chain_length_for_level`](crate::frame::compress::max_chain_length_for_level)).
    max_chain_length: u32,
    /// Most recent absolute offset per 20-bit prefix hash.
    last_hash: Vec<u64>,
    /// Relative distance to the previous position in the same hash bucket.
    previous_hash: Vec<u16>,
    /// Relative distance to the previous position with an identical 4-byte
    /// prefix.
    previous_exact: Vec<u16>,
}

impl MatchFinder {
    pub fn new(max_chain_length: u32) -> Self {
        MatchFinder {
            max_chain_length,
            last_hash: vec![NO_LAST_HASH; HASH_SIZE],
            previous_hash: vec![NO_PREVIOUS; PREVIOUS_SIZE],
            previous_exact: vec![NO_PREVIOUS; PREVIOUS_SIZE],
        }
    }

    /// Clears all chain state.  Legacy blocks are independent, so the finder
    /// must forget everything between them.
    pub fn reset(&mut self) {
        self.last_hash.fill(NO_LAST_HASH);
        self.previous_hash.fill(NO_PREVIOUS);
        self.previous_exact.fill(NO_PREVIOUS);
    }

    /// Populates `matches` with the longest match found at every position of
    /// the block `[last_block, next_block)`.
    ///
    /// `lookback` positions immediately before `last_block` are re-inserted
    /// into the chains first (without match finding): the tail of the
    /// previous block skipped insertion, and the first block may carry a
    /// dictionary.
    ///
    /// Positions where no worthwhile match exists, positions inside the
    /// 12-byte no-match tail, and positions skipped by the greedy/lazy
    /// regimes are left as [`Match::LITERAL`].
    pub fn find_block_matches(
        &mut self,
        buf: &BlockBuffer,
        last_block: u64,
        next_block: u64,
        lookback: u64,
        matches: &mut Vec<Match>,
    ) {
        let block_size = (next_block - last_block) as usize;
        matches.clear();
        matches.resize(block_size, Match::LITERAL);

        let is_greedy = self.max_chain_length <= SHORT_CHAINS_GREEDY;
        let is_lazy = !is_greedy && self.max_chain_length <= SHORT_CHAINS_LAZY;
        // Positions still to skip after an accepted greedy/lazy match.
        let mut skip_matches: usize = 0;
        // Lazy mode: allow one lookahead search before skipping kicks in.
        let mut lazy_evaluation = false;

        debug_assert!(lookback <= last_block - buf.data_zero());
        for a in (last_block - lookback)..next_block {
            let idx = if a >= last_block {
                let i = (a - last_block) as usize;
                // The last bytes of a block are literals by format rule;
                // their chain slots are refilled via lookback next block.
                if i + BLOCK_END_NO_MATCH > block_size {
                    continue;
                }
                Some(i)
            } else {
                None
            };

            // Inside a long run of identical bytes, inherit the predecessor's
            // match instead of re-searching.  Only engages past
            // MAX_SAME_LETTER, where the cost estimator accepts the full run
            // unconditionally anyway.
            if let Some(i) = idx {
                if i > 0 && buf.byte(a) == buf.byte(a - 1) {
                    let prev = matches[i - 1];
                    if prev.distance == 1 && prev.length > MAX_SAME_LETTER {
                        matches[i] = Match {
                            length: prev.length - 1,
                            distance: 1,
                        };
                        continue;
                    }
                }
            }

            // Lookback positions near the very end of the stream may not
            // have four readable bytes.
            if a + MIN_MATCH as u64 > buf.end() {
                continue;
            }

            let four = buf.four(a);
            let hash = hash_of(four);

            let last = self.last_hash[hash];
            self.last_hash[hash] = a;

            if last == NO_LAST_HASH || a - last > MAX_DISTANCE as u64 || last < buf.data_zero() {
                self.previous_hash[ring(a)] = NO_PREVIOUS;
                self.previous_exact[ring(a)] = NO_PREVIOUS;
                continue;
            }

            let mut distance = a - last;
            self.previous_hash[ring(a)] = distance as u16;

            // Walk the hash chain to the nearest position whose four leading
            // bytes equal `four`, skipping hash collisions.  `distance`
            // becomes 0 when the chain ends without a confirmed twin.
            let mut last = last;
            while distance != 0 {
                let cur_four = buf.four(last);
                if cur_four == four {
                    break; // confirmed: first 4 bytes identical
                }
                // A different hash here means the chain drifted onto a slot
                // left over from an older position; stop following it.
                if hash_of(cur_four) != hash {
                    distance = 0;
                    break;
                }
                let next = self.previous_hash[ring(last)];
                distance += next as u64;
                if distance > MAX_DISTANCE as u64 {
                    self.previous_hash[ring(last)] = NO_PREVIOUS;
                    distance = 0;
                    break;
                }
                if next == NO_PREVIOUS {
                    distance = 0;
                    break;
                }
                last -= next as u64;
                if last < buf.data_zero() {
                    distance = 0;
                    break;
                }
            }

            if distance == 0 {
                self.previous_exact[ring(a)] = NO_PREVIOUS;
                continue;
            }
            self.previous_exact[ring(a)] = distance as u16;

            // Lookback positions only feed the chains; no match is recorded
            // for them.
            let i = match idx {
                Some(i) => i,
                None => continue,
            };

            if skip_matches > 0 {
                skip_matches -= 1;
                if !lazy_evaluation {
                    continue;
                }
                lazy_evaluation = false;
            }

            let longest = self.find_longest_match(buf, a, next_block - BLOCK_END_LITERALS as u64);
            matches[i] = longest;

            if longest.is_match() && (is_lazy || is_greedy) {
                lazy_evaluation = skip_matches == 0;
                skip_matches = longest.length as usize;
            }
        }
    }

    /// Finds the longest match at absolute position `pos`, walking the exact
    /// chain.  Match bytes never reach `stop` (the block's literal tail).
    ///
    /// Candidate verification runs in two phases.  With `best` the current
    /// best length, a candidate is only interesting if it matches for at
    /// least `best + 1` bytes, so:
    ///
    /// 1. scan *backward* four bytes at a time from `pos + best - 3` toward
    ///    `pos + 1`; any mismatch disqualifies the candidate outright
    ///    (the first four bytes are guaranteed by the chain invariant);
    /// 2. on success, scan *forward* from `pos + best + 1`, four bytes then
    ///    single bytes, until the first mismatch or `stop`.
    fn find_longest_match(&self, buf: &BlockBuffer, pos: u64, stop: u64) -> Match {
        let mut result = Match::LITERAL;

        let mut steps_left = self.max_chain_length;

        let mut distance = self.previous_exact[ring(pos)] as u64;
        let mut total: u64 = 0;
        while distance != NO_PREVIOUS as u64 {
            total += distance;
            if total > MAX_DISTANCE as u64 {
                break;
            }
            // Entries written before the window slid forward may reach
            // below the buffered history.
            if total > pos - buf.data_zero() {
                break;
            }
            distance = self.previous_exact[ring(pos - total)] as u64;

            if steps_left == 0 {
                break;
            }
            steps_left -= 1;

            // First byte that a longer-than-best match must also cover.
            let at_least = pos + result.length as u64 + 1;
            if at_least > stop {
                break; // not enough bytes left to improve
            }

            // Phase 1: everything between pos and at_least must be
            // identical.  Compare four bytes at a time going backward; the
            // bottom lap may re-check a couple of chain-guaranteed bytes,
            // which is cheaper than guarding against it.
            let mut compare = at_least.saturating_sub(4);
            let mut ok = true;
            while compare > pos {
                if buf.four(compare) != buf.four(compare - total) {
                    ok = false;
                    break;
                }
                compare = compare.saturating_sub(4);
            }
            if !ok {
                continue;
            }

            // Phase 2: extend forward from at_least.
            let mut compare = at_least;
            while compare + 4 <= stop && buf.four(compare) == buf.four(compare - total) {
                compare += 4;
            }
            while compare < stop && buf.byte(compare) == buf.byte(compare - total) {
                compare += 1;
            }

            // Phase 1 ran to completion, so this is strictly longer than
            // the previous best.
            result = Match {
                length: (compare - pos) as u32,
                distance: total as u16,
            };
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_finder(data: &[u8], max_chain_length: u32) -> Vec<Match> {
        let mut buf = BlockBuffer::new();
        buf.append(data);
        let mut finder = MatchFinder::new(max_chain_length);
        let mut matches = Vec::new();
        finder.find_block_matches(&buf, 0, data.len() as u64, 0, &mut matches);
        matches
    }

    #[test]
    fn no_matches_in_unique_data() {
        let data: Vec<u8> = (0u16..64).flat_map(|v| v.to_le_bytes()).collect();
        let matches = run_finder(&data, MAX_DISTANCE as u32);
        assert!(matches.iter().all(|m| !m.is_match()));
    }

    #[test]
    fn finds_repeated_phrase() {
        // "abcdefgh" repeated at distance 16.
        let mut data = Vec::new();
        data.extend_from_slice(b"abcdefgh________");
        data.extend_from_slice(b"abcdefgh________");
        data.extend_from_slice(b"tail tail tail tail"); // room for the no-match tail
        let matches = run_finder(&data, MAX_DISTANCE as u32);
        let m = matches[16];
        assert!(m.is_match());
        assert_eq!(m.distance, 16);
        assert!(m.length >= 8);
    }

    #[test]
    fn identical_run_matches_at_distance_one() {
        let data = vec![b'A'; 64];
        let matches = run_finder(&data, MAX_DISTANCE as u32);
        let m = matches[1];
        assert!(m.is_match());
        assert_eq!(m.distance, 1);
        // Extension stops at the literal tail, 5 bytes before block end.
        assert_eq!(m.length as usize, 64 - BLOCK_END_LITERALS - 1);
    }

    #[test]
    fn matched_bytes_equal_referenced_bytes() {
        let mut data = Vec::new();
        for i in 0u32..200 {
            data.extend_from_slice(&(i % 7).to_le_bytes());
        }
        let matches = run_finder(&data, MAX_DISTANCE as u32);
        for (i, m) in matches.iter().enumerate() {
            if m.is_match() {
                let d = m.distance as usize;
                let l = m.length as usize;
                assert!(d >= 1);
                assert_eq!(&data[i..i + l], &data[i - d..i - d + l], "pos {}", i);
            }
        }
    }

    #[test]
    fn no_match_starts_in_block_tail() {
        let data = vec![b'z'; 100];
        let matches = run_finder(&data, MAX_DISTANCE as u32);
        for (i, m) in matches.iter().enumerate() {
            if m.is_match() {
                assert!(i + BLOCK_END_NO_MATCH <= data.len(), "pos {}", i);
                assert!(
                    i + m.length as usize + BLOCK_END_LITERALS <= data.len(),
                    "pos {} length {}",
                    i,
                    m.length
                );
            }
        }
    }

    #[test]
    fn greedy_mode_skips_covered_positions() {
        let mut data = Vec::new();
        data.extend_from_slice(b"abcdefgh");
        data.extend_from_slice(b"abcdefgh");
        data.extend_from_slice(&vec![0u8; 24]);
        let matches = run_finder(&data, 1); // greedy
        let m = matches[8];
        assert!(m.is_match());
        assert!(m.length >= 8);
        // One lookahead position is still searched after an accepted match;
        // everything after it inside the covered span is skipped.
        for j in 10..16 {
            assert!(!matches[j].is_match(), "pos {}", j);
        }
    }

    #[test]
    fn chain_limit_respected_by_level() {
        // The nearest candidate shares only a 4-byte prefix; a farther one
        // matches much longer.  A depth-1 search stops at the near one.
        let mut data = Vec::new();
        data.extend_from_slice(b"ABCDEFGHIJ"); // offset 0: long twin
        data.extend_from_slice(b"0123456789012345");
        data.extend_from_slice(b"ABCDwxyz"); // offset 26: short twin
        data.extend_from_slice(b"9876543210987654");
        let query = data.len(); // offset 50
        data.extend_from_slice(b"ABCDEFGHIJ");
        data.extend_from_slice(b"................."); // tail room
        let shallow = run_finder(&data, 1);
        let deep = run_finder(&data, MAX_DISTANCE as u32);
        assert!(shallow[query].is_match());
        assert_eq!(shallow[query].length, 4);
        assert_eq!(shallow[query].distance as usize, query - 26);
        assert!(deep[query].length >= 10);
        assert_eq!(deep[query].distance as usize, query);
    }

    #[test]
    fn lookback_reinserts_previous_tail() {
        // Two consecutive "blocks": the second starts with bytes equal to
        // the first block's tail.  Without lookback the tail positions are
        // absent from the chains.
        let mut buf = BlockBuffer::new();
        let first: Vec<u8> = (0u8..=255).collect();
        buf.append(&first);
        let mut finder = MatchFinder::new(MAX_DISTANCE as u32);
        let mut matches = Vec::new();
        finder.find_block_matches(&buf, 0, 256, 0, &mut matches);

        // Second block repeats the last 8 bytes of the first.
        let mut second = Vec::new();
        second.extend_from_slice(&first[248..]);
        second.extend_from_slice(&vec![0u8; 24]);
        buf.append(&second);
        finder.find_block_matches(&buf, 256, 256 + second.len() as u64, 8, &mut matches);
        let m = matches[0];
        assert!(m.is_match());
        assert_eq!(m.distance, 8);
    }

    #[test]
    fn reset_forgets_history() {
        let mut buf = BlockBuffer::new();
        buf.append(b"abcdefgh________abcdefgh________");
        buf.append(&vec![0u8; 16]);
        let mut finder = MatchFinder::new(MAX_DISTANCE as u32);
        let mut matches = Vec::new();
        finder.find_block_matches(&buf, 0, buf.end(), 0, &mut matches);
        assert!(matches[16].is_match());

        finder.reset();
        let mut buf2 = BlockBuffer::new();
        buf2.append(b"abcdefgh");
        buf2.append(&vec![0u8; 24]);
        let mut matches2 = Vec::new();
        finder.find_block_matches(&buf2, 0, buf2.end(), 0, &mut matches2);
        assert!(!matches2[0].is_match());
    }
}
