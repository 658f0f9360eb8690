//! Hanmotion - vim-style word motions for segmented Chinese text
//!
//! Chinese prose carries no whitespace between words, so the classic
//! whitespace-and-class word motions (`w`, `b`, `e`, …) degenerate into
//! whole-line jumps over Chinese text. This crate restores real word motion
//! by running each line through a word segmenter, classifying the resulting
//! tokens, and synthesizing the zero-width boundaries the text itself does
//! not mark.
//!
//! The pipeline for one line: segment ([`WordSegmenter`]) → parse into byte
//! spans ([`parse_tokens()`]) → synthesize boundaries
//! ([`insert_implicit_breaks()`]) → look up a boundary offset ([`locate()`],
//! [`locate_edge()`]). [`navigate()`] drives that pipeline across lines and
//! is the one entry point a host editor needs.
//!
//! ```no_run
//! use hanmotion::{navigate, JiebaSegmenter, Position, WordMotion};
//!
//! let segmenter = JiebaSegmenter::new();
//! let buffer = ["他来到了网易杭研大厦"];
//! // One `w` from the line start lands on the second word.
//! let next = navigate(&segmenter, &buffer, Position::new(1, 0), WordMotion::NEXT_WORD_START);
//! assert_eq!(next.row, 1);
//! assert!(next.col > 0);
//! ```

pub mod classify;
pub mod motion;
pub mod punctuation;
pub mod segment;
pub mod token;

pub use classify::TokenClass;
pub use motion::{
    locate, locate_edge, navigate, tokenize_line, Anchor, Direction, Position, WordKind,
    WordMotion,
};
pub use segment::{JiebaSegmenter, WordSegmenter};
pub use token::{insert_implicit_breaks, parse_tokens, ParsedToken};
