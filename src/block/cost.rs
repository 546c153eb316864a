//! Backward dynamic-programming cost estimator.
//!
//! [`estimate_costs`] rewrites the match array produced by the finder so
//! that every position holds the (length, distance) choice whose total byte
//! cost to the end of the block is minimal under the LZ4 token encoding:
//!
//! - a literal costs 1 byte, plus one extension byte each time a literal
//!   run grows past 15 and then past every further 255;
//! - a match costs 1 token byte + 2 offset bytes, plus `1 + (L - 19) / 255`
//!   extension bytes once its length reaches 19.
//!
//! The pass walks right to left: `cost[i]` is the number of compressed
//! bytes needed to encode positions `[i, block_end)`, so each position only
//! needs the already-computed costs to its right.

use crate::block::types::{Match, BLOCK_END_LITERALS, MAX_SAME_LETTER, MIN_MATCH};

/// Rewrites `matches` in place to the minimum-cost parse.
///
/// On return, `matches[i].length >= MIN_MATCH` marks a chosen match and
/// `length == 1` a literal (distance nulled).  The last
/// [`BLOCK_END_LITERALS`] positions are never touched; they are literals by
/// format rule.
pub fn estimate_costs(matches: &mut [Match]) {
    let block_end = matches.len();

    // cost[i]: bytes needed to encode [i, block_end).
    let mut cost = vec![0u32; block_end];

    // Nearest position to the right where a match was chosen; determines
    // the length of the literal run a literal at `i` would extend.
    let mut pos_last_match = block_end;

    let mut i = match block_end.checked_sub(1 + BLOCK_END_LITERALS) {
        Some(start) => start as i64,
        None => return,
    };
    while i >= 0 {
        let iu = i as usize;

        let num_literals = (pos_last_match - iu) as u32;
        // Cost when encoded as a literal.
        let mut min_cost = cost[iu + 1] + 1;
        // Growing the run to this length forces a new extension byte.
        if num_literals >= 15 && (num_literals - 15) % 255 == 0 {
            min_cost += 1;
        }
        let mut best_length: u32 = 1;

        let mut candidate = matches[iu];
        // A match must leave the literal tail intact.
        if candidate.is_match()
            && iu + candidate.length as usize + BLOCK_END_LITERALS > block_end
        {
            candidate.length = (block_end - (iu + BLOCK_END_LITERALS)) as u32;
        }

        let mut length = MIN_MATCH as u32;
        while length <= candidate.length {
            // Token + 16-bit offset.
            let mut current_cost = cost[iu + length as usize] + 1 + 2;
            if length >= 19 {
                current_cost += 1 + (length - 19) / 255;
            }

            // "<=" rather than "<": at equal cost, prefer the match.  A
            // match breaks the literal run, which can save the extension
            // byte a long run would need further left.
            if current_cost <= min_cost {
                min_cost = current_cost;
                best_length = length;
            }

            // Inside a very long identical-byte run, accept the full match
            // immediately; iterating every length would make such inputs
            // quadratic.
            if candidate.distance == 1 && candidate.length >= MAX_SAME_LETTER {
                best_length = candidate.length;
                min_cost =
                    cost[iu + candidate.length as usize] + 1 + 2 + 1 + (candidate.length - 19) / 255;
                break;
            }

            length += 1;
        }

        if best_length as usize >= MIN_MATCH {
            pos_last_match = iu;
        }

        cost[iu] = min_cost;
        matches[iu].length = best_length;
        if best_length == 1 {
            matches[iu].distance = 0;
        }

        i -= 1;
    }
}
