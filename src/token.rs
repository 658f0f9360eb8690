//! Parsed token records and the implicit word-break pass
//!
//! Chinese text carries no whitespace between words, so a parsed line gets
//! zero-width whitespace records synthesized wherever two adjacent tokens
//! must be separate words despite the missing separator. Downstream
//! consumers only ever see the merged sequence and can treat word boundaries
//! uniformly as "whitespace on both sides".

use crate::classify::TokenClass;

/// A segmenter token with its byte span and class.
///
/// `start` and `end` are UTF-8 byte offsets into the line. `end` points at
/// the first byte of the token's *final* character, not one past it, so a
/// single three-byte Han character yields `start == end`. `end < start`
/// encodes a zero-width token; only implicit break records use that shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedToken {
    pub start: usize,
    pub end: usize,
    pub class: TokenClass,
}

impl ParsedToken {
    pub const fn new(start: usize, end: usize, class: TokenClass) -> ParsedToken {
        ParsedToken { start, end, class }
    }

    /// Zero-width whitespace record sitting immediately before `next`.
    ///
    /// Breaks are only synthesized between two real tokens, so `next.start`
    /// is never 0 here.
    fn implicit_break_before(next: &ParsedToken) -> ParsedToken {
        ParsedToken {
            start: next.start,
            end: next.start - 1,
            class: TokenClass::Whitespace,
        }
    }

    /// Check if this record separates words rather than being part of one
    pub fn is_whitespace(&self) -> bool {
        self.class.is_whitespace()
    }
}

/// Parse one line's segmenter tokens into byte-span records.
///
/// Keeps a running byte cursor: each record starts where the previous one's
/// bytes ended. The tokens must concatenate to the source line, and a
/// segmenter never emits an empty token (an empty token anywhere but byte 0
/// would come out as `end < start`; at byte 0 it is unrepresentable and the
/// result is unspecified).
pub fn parse_tokens(tokens: &[&str]) -> Vec<ParsedToken> {
    let mut cursor = 0usize;
    tokens
        .iter()
        .map(|tok| {
            let start = cursor;
            let class = TokenClass::of(tok);
            cursor += tok.len();
            let end = cursor - tok.chars().next_back().map_or(1, char::len_utf8);
            ParsedToken { start, end, class }
        })
        .collect()
}

/// Pairwise break table: true when a word break must be synthesized between
/// an adjacent `(left, right)` token pair that has no whitespace between.
///
/// Adjacent word-script tokens are always separate words; Chinese
/// punctuation splits off from whatever follows it except whitespace.
/// Symbols already behave as self-delimiting in the host editor and never
/// trigger a break from the left.
fn needs_break(left: TokenClass, right: TokenClass) -> bool {
    use TokenClass::*;
    match (left, right) {
        (Word, Word) => true,
        (Word, _) => false,
        (Punctuation, Whitespace) => false,
        (Punctuation, _) => true,
        (Whitespace, _) | (Symbol, _) => false,
    }
}

/// Insert zero-width break records between adjacent tokens whose class pair
/// forms a word boundary despite the absence of literal whitespace.
///
/// Single left-to-right pass peeking at the last emitted record; the input
/// order and spans are preserved. A break record shares its `start` with
/// the real token it sits in front of.
pub fn insert_implicit_breaks(tokens: Vec<ParsedToken>) -> Vec<ParsedToken> {
    let mut merged: Vec<ParsedToken> = Vec::with_capacity(tokens.len() * 2);
    for tok in tokens {
        if let Some(prev) = merged.last() {
            if needs_break(prev.class, tok.class) {
                merged.push(ParsedToken::implicit_break_before(&tok));
            }
        }
        merged.push(tok);
    }
    merged
}
