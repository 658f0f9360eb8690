//! Boundary lookup within one merged token sequence
//!
//! These functions operate on the output of
//! [`insert_implicit_breaks`](crate::token::insert_implicit_breaks), where
//! every word boundary — explicit or synthetic — is a whitespace record.
//! They return byte offsets within the line, or `None` when the requested
//! boundary does not exist on this line; crossing to another line is the
//! driver's job.

use super::{Anchor, Direction, WordKind, WordMotion};
use crate::token::ParsedToken;

/// Index of the token whose span the byte offset `col` falls into.
///
/// Scans from the back of the sequence: a zero-width break record shares its
/// `start` with the real token that follows it, and the offset conceptually
/// belongs to the real token, so the rightmost candidate wins.
///
/// # Panics
///
/// Panics when `tokens` is empty. Callers pass a cursor column only for
/// lines that produced at least one token; an empty sequence here means the
/// cursor and the tokenization disagree about the line.
pub(crate) fn token_at(tokens: &[ParsedToken], col: usize) -> usize {
    match tokens.iter().rposition(|pt| pt.start <= col) {
        Some(ti) => ti,
        None => panic!("no token at byte offset `{col}` in `{tokens:?}`"),
    }
}

/// Find the boundary `motion` lands on, scanning from the cursor column.
///
/// Returns `None` when no such boundary exists on this line in the scan
/// direction (including when the line has no tokens at all).
pub fn locate(tokens: &[ParsedToken], col: usize, motion: WordMotion) -> Option<usize> {
    if tokens.is_empty() {
        return None;
    }
    let ti = token_at(tokens, col);
    match motion.direction {
        Direction::Backward => {
            // How much of the sequence the backward scan may see. A cursor
            // sitting exactly on a start (or, for small-word ends, anywhere
            // in the token) must not find its own token again.
            let cut = match (motion.anchor, motion.kind) {
                (Anchor::Start, _) if col == tokens[ti].start => ti,
                (Anchor::Start, _) => ti + 1,
                (Anchor::End, WordKind::Word) => ti,
                (Anchor::End, WordKind::BigWord) => ti + 1,
            };
            scan(tokens[..cut].iter().rev(), motion)
        }
        Direction::Forward => {
            let cut = match (motion.anchor, motion.kind) {
                (Anchor::Start, WordKind::Word) => ti + 1,
                (Anchor::Start, WordKind::BigWord) => ti,
                (Anchor::End, _) if col == tokens[ti].end => ti + 1,
                (Anchor::End, _) => ti,
            };
            scan(tokens[cut..].iter(), motion)
        }
    }
}

/// Find the line's outermost boundary for `motion`: the first one in the
/// line for a forward motion, the last one for a backward motion.
///
/// This is the cursor-free variant the driver applies to lines it crosses
/// into. Returns `None` for a line with no non-whitespace tokens.
pub fn locate_edge(tokens: &[ParsedToken], motion: WordMotion) -> Option<usize> {
    match motion.direction {
        Direction::Backward => edge_scan(tokens.iter().rev(), motion),
        Direction::Forward => edge_scan(tokens.iter(), motion),
    }
}

/// Walk a cursor-relative scan (already oriented in the motion direction)
/// to the next boundary.
fn scan<'t, I>(mut tokens: I, motion: WordMotion) -> Option<usize>
where
    I: Iterator<Item = &'t ParsedToken>,
{
    let target = |pt: &'t ParsedToken| {
        if pt.is_whitespace() {
            None
        } else {
            Some(motion.target(pt))
        }
    };
    match motion.kind {
        WordKind::Word => tokens.find_map(target),
        // Far anchor: enter the nearest run and walk it to its other side.
        WordKind::BigWord if motion.lands_far() => tokens
            .skip_while(|pt| pt.is_whitespace())
            .map_while(target)
            .last(),
        // Near anchor: leave the run the cursor is in, then take the first
        // token of the next run.
        WordKind::BigWord => tokens
            .skip_while(|pt| !pt.is_whitespace())
            .skip_while(|pt| pt.is_whitespace())
            .find_map(target),
    }
}

/// Walk an absolute first/last scan to the line's outermost boundary.
///
/// Differs from [`scan`] only for near-anchor big WORDs: with no cursor
/// there is no current run to leave, so the first non-whitespace token is
/// already the right one.
fn edge_scan<'t, I>(mut tokens: I, motion: WordMotion) -> Option<usize>
where
    I: Iterator<Item = &'t ParsedToken>,
{
    let target = |pt: &'t ParsedToken| {
        if pt.is_whitespace() {
            None
        } else {
            Some(motion.target(pt))
        }
    };
    if motion.kind == WordKind::BigWord && motion.lands_far() {
        tokens
            .skip_while(|pt| pt.is_whitespace())
            .map_while(target)
            .last()
    } else {
        tokens.find_map(target)
    }
}
