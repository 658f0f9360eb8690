//! Line-crossing motion driver
//!
//! [`locate`] answers "where on this line"; this module strings lines
//! together. A motion that finds no boundary on the cursor's line walks
//! adjacent lines — re-tokenizing each from scratch — until a boundary
//! turns up or the buffer edge is reached, where the motion clamps instead
//! of failing. The buffer itself is never mutated.

use super::locate::{locate, locate_edge};
use super::{Direction, Position, WordMotion};
use crate::segment::WordSegmenter;
use crate::token::{insert_implicit_breaks, parse_tokens, ParsedToken};

/// Segment, parse, and merge one line of text.
pub fn tokenize_line<S>(segmenter: &S, line: &str) -> Vec<ParsedToken>
where
    S: WordSegmenter + ?Sized,
{
    insert_implicit_breaks(parse_tokens(&segmenter.segment(line)))
}

/// Fallback column at the buffer's edge row: the row's first boundary going
/// backward, its last going forward, and 0 for a tokenless row.
fn clamp_col(tokens: &[ParsedToken], direction: Direction) -> usize {
    match direction {
        Direction::Backward => tokens.first().map_or(0, |pt| pt.start),
        Direction::Forward => tokens.last().map_or(0, |pt| pt.end),
    }
}

/// Apply `motion` to `cursor`, re-tokenizing every line it visits.
///
/// The cursor's own line is searched relative to the cursor column; lines
/// crossed into are searched from their near edge. Lines with no
/// non-whitespace tokens are skipped. At the sentinel row — the first row
/// for a backward motion, the last for a forward one — the motion clamps to
/// the row's outermost boundary (or column 0) rather than failing, so every
/// call returns a valid position and a motion at the buffer edge is a
/// no-op.
///
/// `buffer` must contain at least one line and `cursor.row` must be a valid
/// 1-based row index.
pub fn navigate<S, L>(segmenter: &S, buffer: &[L], cursor: Position, motion: WordMotion) -> Position
where
    S: WordSegmenter + ?Sized,
    L: AsRef<str>,
{
    let sentinel_row = match motion.direction {
        Direction::Backward => 1,
        Direction::Forward => buffer.len(),
    };
    let step = |row: usize| match motion.direction {
        Direction::Backward => row - 1,
        Direction::Forward => row + 1,
    };

    let Position { mut row, col } = cursor;
    let tokens = tokenize_line(segmenter, buffer[row - 1].as_ref());
    if row == sentinel_row {
        let col =
            locate(&tokens, col, motion).unwrap_or_else(|| clamp_col(&tokens, motion.direction));
        return Position::new(row, col);
    }
    if let Some(col) = locate(&tokens, col, motion) {
        return Position::new(row, col);
    }

    // The cursor row is at least one step from the sentinel here, so the
    // first step cannot overshoot it.
    row = step(row);
    while row != sentinel_row {
        let tokens = tokenize_line(segmenter, buffer[row - 1].as_ref());
        if let Some(col) = locate_edge(&tokens, motion) {
            return Position::new(row, col);
        }
        row = step(row);
    }
    let tokens = tokenize_line(segmenter, buffer[row - 1].as_ref());
    let col =
        locate_edge(&tokens, motion).unwrap_or_else(|| clamp_col(&tokens, motion.direction));
    Position::new(row, col)
}
