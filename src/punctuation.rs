//! Chinese punctuation tables
//!
//! The classifier recognizes a curated set of CJK and full-width punctuation
//! marks, not the general Unicode punctuation categories. Half-width ASCII
//! punctuation deliberately stays outside this set: the host editor already
//! treats it as self-delimiting, so it must not pick up synthetic word
//! breaks.

/// All punctuation characters treated as Chinese punctuation.
pub const PUNCTUATION: &str = concat!(
    // Full-width ASCII variants
    "\u{FF02}\u{FF03}\u{FF04}\u{FF05}\u{FF06}\u{FF07}\u{FF08}\u{FF09}\u{FF0A}",
    "\u{FF0B}\u{FF0C}\u{FF0D}\u{FF0F}\u{FF1A}\u{FF1B}\u{FF1C}\u{FF1D}\u{FF1E}",
    "\u{FF20}\u{FF3B}\u{FF3C}\u{FF3D}\u{FF3E}\u{FF3F}\u{FF40}\u{FF5B}\u{FF5C}",
    "\u{FF5D}\u{FF5E}\u{FF5F}\u{FF60}",
    // Half-width CJK corner brackets and comma
    "\u{FF62}\u{FF63}\u{FF64}",
    // Ideographic space, comma, and ditto mark
    "\u{3000}\u{3001}\u{3003}",
    // CJK angle and corner brackets
    "\u{3008}\u{3009}\u{300A}\u{300B}\u{300C}\u{300D}\u{300E}\u{300F}\u{3010}",
    "\u{3011}",
    // CJK brackets, tortoise shells, and wave/double dashes
    "\u{3014}\u{3015}\u{3016}\u{3017}\u{3018}\u{3019}\u{301A}\u{301B}\u{301C}",
    "\u{301D}\u{301E}\u{301F}",
    // Wavy dash
    "\u{3030}",
    // Part-alternation and masu marks
    "\u{303E}\u{303F}",
    // En and em dashes
    "\u{2013}\u{2014}",
    // Curly quotation marks and apostrophes
    "\u{2018}\u{2019}\u{201B}\u{201C}\u{201D}\u{201E}\u{201F}",
    // Horizontal ellipsis and hyphenation point
    "\u{2026}\u{2027}",
    // Wavy low line
    "\u{FE4F}",
    // Small form comma and semicolon
    "\u{FE51}\u{FE54}",
    // Interpunct
    "\u{00B7}",
    // Sentence stops: full-width stop/exclamation/question, half-width and
    // ideographic full stops
    "\u{FF0E}\u{FF01}\u{FF1F}\u{FF61}\u{3002}",
);

/// Check if a character belongs to the Chinese punctuation set.
pub fn is_cjk_punctuation(c: char) -> bool {
    PUNCTUATION.contains(c)
}
